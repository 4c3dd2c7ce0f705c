//! Vertex and interior ring editing.
//!
//! Every public edit runs against a clone of the polygon and commits it with a single assignment
//! once the edited polygon validates, so a failed edit leaves the polygon exactly as it was. The
//! segment index, if already built, is patched in place on the working copy rather than rebuilt.
use super::{internal::pgon_validity, segment_index::SegmentIndex, Polygon, ValidateOptions};
use crate::{
    core::{math::Vector2, traits::Real},
    ring::{ring_signed_area, PolygonIndex},
    PolyResult, PolygonError,
};
use std::ops::Range;

#[derive(Debug, Copy, Clone)]
enum RingEdit<T>
where
    T: Real,
{
    Insert { after: usize, point: Vector2<T> },
    Move { vertex: usize, point: Vector2<T> },
    Remove { vertex: usize },
}

fn patch_index<T>(
    index: &mut SegmentIndex<T>,
    ring: Option<usize>,
    edit: RingEdit<T>,
    points: &[Vector2<T>],
) where
    T: Real,
{
    match edit {
        RingEdit::Insert { after, .. } => index.vertex_inserted(ring, after, points),
        RingEdit::Move { vertex, .. } => index.vertex_moved(ring, vertex, points),
        RingEdit::Remove { vertex } => index.vertex_removed(ring, vertex, points),
    }
}

impl<T> Polygon<T>
where
    T: Real,
{
    /// Run `f` on a working copy and commit it if `f` succeeds.
    fn transact<R, F>(&mut self, op: &str, target: Option<PolygonIndex>, f: F) -> PolyResult<R>
    where
        F: FnOnce(&mut Polygon<T>) -> PolyResult<R>,
    {
        let mut working = self.clone();
        match f(&mut working) {
            Ok(r) => {
                *self = working;
                Ok(r)
            }
            Err(e) => {
                match target {
                    Some(index) => log::debug!("{} at {} rejected: {}", op, index, e),
                    None => log::debug!("{} rejected: {}", op, e),
                }
                Err(e)
            }
        }
    }

    /// Apply `edit` to the exterior ring of this polygon. Caches are refreshed and the index (if
    /// built) is patched with exterior ring keys. Returns the position of the edited vertex.
    fn edit_exterior(&mut self, edit: RingEdit<T>) -> PolyResult<usize> {
        let n = self.exterior.len() - 1;
        let vertex = match edit {
            RingEdit::Insert { after, point } => {
                self.exterior.insert(after + 1, point);
                after + 1
            }
            RingEdit::Move { vertex, point } => {
                self.exterior[vertex] = point;
                if vertex == 0 {
                    self.exterior[n] = point;
                }
                vertex
            }
            RingEdit::Remove { vertex } => {
                if n <= 3 {
                    return Err(PolygonError::RingTooSmall { len: n - 1 });
                }
                self.exterior.remove(vertex);
                if vertex == 0 {
                    let last = self.exterior.len() - 1;
                    self.exterior[last] = self.exterior[0];
                }
                vertex
            }
        };

        if ring_signed_area(&self.exterior) < T::zero() {
            return Err(PolygonError::WindingFlip);
        }

        self.refresh_ring_caches();
        if let Some(index) = self.index.get_mut() {
            patch_index(index, None, edit, &self.exterior);
        }

        Ok(vertex)
    }

    /// Apply `edit` to ring `inner` without validating the result.
    fn apply_ring_edit(&mut self, inner: Option<usize>, edit: RingEdit<T>) -> PolyResult<usize> {
        let i = match inner {
            None => return self.edit_exterior(edit),
            Some(i) => i,
        };

        let hole = self
            .interiors
            .get_mut(i)
            .ok_or(PolygonError::InvalidInteriorRing { inner: i })?;
        let vertex = hole.edit_exterior(edit)?;

        if let Some(index) = self.index.get_mut() {
            patch_index(index, inner, edit, &self.interiors[i].exterior);
        }

        Ok(vertex)
    }

    /// Validate after ring `inner` was edited. The exterior ring is checked against every hole,
    /// an interior ring against the exterior ring and its siblings.
    fn validate_ring_edit(&self, inner: Option<usize>) -> PolyResult<()> {
        let result = match inner {
            None => self.validate_opt(&ValidateOptions::without_sibling_holes()),
            Some(i) => pgon_validity::validate_interior(self, i, &ValidateOptions::new()),
        };
        result.map_err(PolygonError::invalid_result)
    }

    /// Insert `point` after `after` without validating the result.
    pub(crate) fn apply_insert(
        &mut self,
        after: PolygonIndex,
        point: Vector2<T>,
    ) -> PolyResult<PolygonIndex> {
        self.check_index(after)?;
        let vertex = self.apply_ring_edit(
            after.inner,
            RingEdit::Insert {
                after: after.vertex,
                point,
            },
        )?;
        Ok(PolygonIndex::new_in_ring(
            after.poly,
            after.inner,
            vertex,
            after.ring_len + 1,
        ))
    }

    /// Insert `point` into the ring of `after`, between `after` and the vertex following it.
    /// Returns the address of the new vertex.
    ///
    /// If `point` already is a vertex of any ring nothing changes and the address of that vertex
    /// is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polyring::ring;
    /// # use polyring::ring::*;
    /// # use polyring::polygon::*;
    /// # use polyring::core::math::*;
    /// # use polyring::PolygonError;
    /// let mut square = Polygon::new(ring![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]).unwrap();
    /// let i = square.insert_vertex(PolygonIndex::new(0, 0, 4), Vector2::new(2.0, -1.0)).unwrap();
    /// assert_eq!(i, PolygonIndex::new(0, 1, 5));
    /// assert_eq!(square.area(), 18.0);
    ///
    /// // a point that would make the ring cross itself is rejected
    /// let before = square.clone();
    /// let err = square.insert_vertex(i, Vector2::new(2.0, 6.0)).unwrap_err();
    /// assert!(matches!(err, PolygonError::InvalidResult { .. }));
    /// assert_eq!(square, before);
    /// ```
    pub fn insert_vertex(
        &mut self,
        after: PolygonIndex,
        point: Vector2<T>,
    ) -> PolyResult<PolygonIndex> {
        self.check_index(after)?;
        let existing = self.nearest_vertex(point);
        if existing.distance <= T::pos_equal_eps() {
            return Ok(existing.index);
        }

        self.transact("insert vertex", Some(after), |w| {
            let index = w.apply_insert(after, point)?;
            w.validate_ring_edit(after.inner)?;
            Ok(index)
        })
    }

    /// Insert `point` into the segment nearest to it (on any ring).
    #[inline]
    pub fn add_vertex(&mut self, point: Vector2<T>) -> PolyResult<PolygonIndex> {
        let nearest = self.nearest_segment(point);
        self.insert_vertex(nearest.index, point)
    }

    /// Move the addressed vertex to `point`.
    pub fn set_vertex(&mut self, index: PolygonIndex, point: Vector2<T>) -> PolyResult<()> {
        self.check_index(index)?;
        self.transact("set vertex", Some(index), |w| {
            w.apply_ring_edit(
                index.inner,
                RingEdit::Move {
                    vertex: index.vertex,
                    point,
                },
            )?;
            w.validate_ring_edit(index.inner)
        })
    }

    /// Move the vertex nearest to `from` (on any ring) to `to`, returning its address.
    pub fn set_vertex_at(&mut self, from: Vector2<T>, to: Vector2<T>) -> PolyResult<PolygonIndex> {
        let index = self.nearest_vertex(from).index;
        self.set_vertex(index, to)?;
        Ok(index)
    }

    /// Remove the addressed vertex.
    ///
    /// Fails with [PolygonError::RingTooSmall] if the ring has only 3 vertexes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polyring::ring;
    /// # use polyring::ring::*;
    /// # use polyring::polygon::*;
    /// # use polyring::PolygonError;
    /// let mut square = Polygon::new(ring![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]).unwrap();
    /// square.remove_vertex(PolygonIndex::new(0, 2, 4)).unwrap();
    /// assert_eq!(square.area(), 8.0);
    /// let err = square.remove_vertex(PolygonIndex::new(0, 0, 3)).unwrap_err();
    /// assert_eq!(err, PolygonError::RingTooSmall { len: 2 });
    /// ```
    pub fn remove_vertex(&mut self, index: PolygonIndex) -> PolyResult<()> {
        self.check_index(index)?;
        self.transact("remove vertex", Some(index), |w| {
            w.apply_ring_edit(
                index.inner,
                RingEdit::Remove {
                    vertex: index.vertex,
                },
            )?;
            w.validate_ring_edit(index.inner)
        })
    }

    /// Remove the vertex nearest to `point` (on any ring), returning the address it had.
    pub fn remove_vertex_at(&mut self, point: Vector2<T>) -> PolyResult<PolygonIndex> {
        let index = self.nearest_vertex(point).index;
        self.remove_vertex(index)?;
        Ok(index)
    }

    /// Append an interior polygon, keeping the segment index (if built) in step.
    pub(crate) fn push_interior(&mut self, hole: Polygon<T>) -> usize {
        let i = self.interiors.len();
        if let Some(index) = self.index.get_mut() {
            index.insert_ring(Some(i), &hole.exterior);
        }
        self.interiors.push(hole);
        i
    }

    /// Add a closed interior ring (hole), returning its position.
    ///
    /// The ring must be valid on its own and lie inside the exterior ring without touching it or
    /// any other interior ring.
    pub fn add_interior_ring(&mut self, ring: Vec<Vector2<T>>) -> PolyResult<usize> {
        pgon_validity::validate_ring_points(&ring)?;
        self.add_interior_polygon(Polygon::from_ring_unchecked(ring))
    }

    /// Same as [Polygon::add_interior_ring] taking the exterior ring of `hole`, which must not
    /// have interior rings of its own.
    pub fn add_interior_polygon(&mut self, hole: Polygon<T>) -> PolyResult<usize> {
        if hole.has_interior_rings() {
            return Err(PolygonError::NestedHoles);
        }

        self.transact("add interior ring", None, |w| {
            let i = w.push_interior(hole);
            pgon_validity::validate_interior(w, i, &ValidateOptions::new())?;
            Ok(i)
        })
    }

    /// Add several interior rings at once, returning the range of their positions.
    ///
    /// Each ring is checked against the exterior ring as it is added, sibling rings are checked
    /// once after the whole batch is in.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polyring::ring;
    /// # use polyring::polygon::*;
    /// # use polyring::PolygonError;
    /// let mut pgon = Polygon::new(ring![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]).unwrap();
    /// let added = pgon
    ///     .add_interior_rings(vec![
    ///         ring![(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0)],
    ///         ring![(5.0, 5.0), (7.0, 5.0), (7.0, 7.0), (5.0, 7.0)],
    ///     ])
    ///     .unwrap();
    /// assert_eq!(added, 0..2);
    /// assert_eq!(pgon.area(), 92.0);
    ///
    /// // overlapping siblings are rejected and nothing is added
    /// let err = pgon
    ///     .add_interior_rings(vec![ring![(2.0, 2.0), (4.0, 2.0), (4.0, 4.0), (2.0, 4.0)]])
    ///     .unwrap_err();
    /// assert!(matches!(err, PolygonError::HoleIntersectsHole { .. }));
    /// assert_eq!(pgon.interior_polygons().len(), 2);
    /// ```
    pub fn add_interior_rings(&mut self, rings: Vec<Vec<Vector2<T>>>) -> PolyResult<Range<usize>> {
        for ring in rings.iter() {
            pgon_validity::validate_ring_points(ring)?;
        }

        self.transact("add interior rings", None, |w| {
            let start = w.interiors.len();
            let skip_siblings = ValidateOptions::without_sibling_holes();
            for ring in rings {
                let i = w.push_interior(Polygon::from_ring_unchecked(ring));
                pgon_validity::validate_interior(w, i, &skip_siblings)?;
            }
            let added = start..w.interiors.len();
            pgon_validity::validate_sibling_holes(w, added.clone())?;
            Ok(added)
        })
    }

    /// Remove interior ring `inner`, returning it. Interior rings after it move down one position.
    pub fn remove_interior_ring(&mut self, inner: usize) -> PolyResult<Polygon<T>> {
        if inner >= self.interiors.len() {
            return Err(PolygonError::InvalidInteriorRing { inner });
        }

        let hole = self.interiors.remove(inner);
        if let Some(index) = self.index.get_mut() {
            index.remove_ring(Some(inner), hole.exterior.len() - 1);
            for (j, later) in self.interiors.iter().enumerate().skip(inner) {
                let len = later.exterior.len() - 1;
                index.rekey_ring(Some(j + 1), Some(j), len, len, |v| v);
            }
        }

        Ok(hole)
    }

    /// Replace interior ring `inner` with `ring`, returning the ring that was replaced.
    pub fn replace_interior_ring(
        &mut self,
        inner: usize,
        ring: Vec<Vector2<T>>,
    ) -> PolyResult<Polygon<T>> {
        if inner >= self.interiors.len() {
            return Err(PolygonError::InvalidInteriorRing { inner });
        }
        pgon_validity::validate_ring_points(&ring)?;

        self.transact("replace interior ring", None, |w| {
            let old = std::mem::replace(
                &mut w.interiors[inner],
                Polygon::from_ring_unchecked(ring),
            );
            if let Some(index) = w.index.get_mut() {
                index.remove_ring(Some(inner), old.exterior.len() - 1);
                index.insert_ring(Some(inner), &w.interiors[inner].exterior);
            }
            pgon_validity::validate_interior(w, inner, &ValidateOptions::new())?;
            Ok(old)
        })
    }

    /// Remove the interior ring containing `point` (inside or on its boundary), if any.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polyring::ring;
    /// # use polyring::polygon::*;
    /// # use polyring::core::math::*;
    /// let mut pgon = Polygon::with_interior_rings(
    ///     ring![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)],
    ///     vec![ring![(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0)]],
    /// )
    /// .unwrap();
    /// assert!(pgon.try_remove_interior_ring(Vector2::new(0.5, 0.5)).is_none());
    /// assert!(pgon.try_remove_interior_ring(Vector2::new(2.0, 2.0)).is_some());
    /// assert_eq!(pgon.area(), 16.0);
    /// ```
    pub fn try_remove_interior_ring(&mut self, point: Vector2<T>) -> Option<Polygon<T>> {
        let (inner, _) = self.interior_polygon_containing(point)?;
        self.remove_interior_ring(inner).ok()
    }
}
