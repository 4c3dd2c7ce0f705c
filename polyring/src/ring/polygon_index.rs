use super::PolygonLookup;
use crate::{
    core::{math::Vector2, traits::Real},
    polygon::Polygon,
    shapes::LineSeg,
    PolyResult, PolygonError,
};
use std::{collections::BTreeMap, fmt};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Address of one vertex on one ring of one polygon.
///
/// `inner` is `None` for the exterior ring and `Some(i)` for interior ring `i`. `ring_len` is the
/// number of unique vertexes in the addressed ring (the closing duplicate is not counted), so
/// navigation wraps without consulting the polygon.
///
/// Equality includes `ring_len`: inserting or removing a vertex changes the ring length and
/// makes every previously taken address on that ring unequal to the fresh ones. Ordering is by
/// polygon, then ring (exterior first), then vertex, so sorting groups addresses by ring.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct PolygonIndex {
    /// Polygon id.
    pub poly: usize,
    /// Interior ring, `None` for the exterior ring.
    pub inner: Option<usize>,
    /// Vertex position in the ring.
    pub vertex: usize,
    /// Number of unique vertexes in the ring.
    pub ring_len: usize,
}

impl PolygonIndex {
    /// Address a vertex on the exterior ring of polygon `poly`.
    #[inline]
    pub fn new(poly: usize, vertex: usize, ring_len: usize) -> Self {
        Self::new_in_ring(poly, None, vertex, ring_len)
    }

    /// Address a vertex on interior ring `inner` of polygon `poly`.
    #[inline]
    pub fn new_inner(poly: usize, inner: usize, vertex: usize, ring_len: usize) -> Self {
        Self::new_in_ring(poly, Some(inner), vertex, ring_len)
    }

    #[inline]
    pub fn new_in_ring(poly: usize, inner: Option<usize>, vertex: usize, ring_len: usize) -> Self {
        debug_assert!(ring_len > 0, "ring must have at least one vertex");
        debug_assert!(vertex < ring_len, "vertex {vertex} out of ring of {ring_len}");
        PolygonIndex {
            poly,
            inner,
            vertex,
            ring_len,
        }
    }

    /// True if the vertex is on an interior ring.
    #[inline]
    pub fn is_inner(&self) -> bool {
        self.inner.is_some()
    }

    #[inline]
    pub fn is_first_in_ring(&self) -> bool {
        self.vertex == 0
    }

    #[inline]
    pub fn is_last_in_ring(&self) -> bool {
        self.vertex + 1 == self.ring_len
    }

    #[inline]
    pub fn first_in_ring(&self) -> Self {
        PolygonIndex { vertex: 0, ..*self }
    }

    #[inline]
    pub fn last_in_ring(&self) -> Self {
        PolygonIndex {
            vertex: self.ring_len - 1,
            ..*self
        }
    }

    /// Next vertex in the ring, wrapping from the last vertex to the first.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polyring::ring::*;
    /// let i = PolygonIndex::new(0, 3, 4);
    /// assert_eq!(i.next(), PolygonIndex::new(0, 0, 4));
    /// assert_eq!(i.next().prev(), i);
    /// ```
    #[inline]
    pub fn next(&self) -> Self {
        let vertex = if self.vertex + 1 >= self.ring_len {
            0
        } else {
            self.vertex + 1
        };
        PolygonIndex { vertex, ..*self }
    }

    /// Previous vertex in the ring, wrapping from the first vertex to the last.
    #[inline]
    pub fn prev(&self) -> Self {
        let vertex = if self.vertex == 0 {
            self.ring_len - 1
        } else {
            self.vertex - 1
        };
        PolygonIndex { vertex, ..*self }
    }

    /// True if both addresses are on the same ring of the same polygon.
    #[inline]
    pub fn on_same_ring(&self, other: &Self) -> bool {
        self.poly == other.poly && self.inner == other.inner
    }

    /// True if the two vertexes are neighbors on the same ring, including the wrap from the last
    /// vertex to the first.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polyring::ring::*;
    /// let first = PolygonIndex::new(0, 0, 4);
    /// assert!(first.are_adjacent(&PolygonIndex::new(0, 1, 4)));
    /// assert!(first.are_adjacent(&PolygonIndex::new(0, 3, 4)));
    /// assert!(!first.are_adjacent(&PolygonIndex::new(0, 2, 4)));
    /// assert!(!first.are_adjacent(&first));
    /// ```
    pub fn are_adjacent(&self, other: &Self) -> bool {
        if !self.on_same_ring(other) || self.vertex == other.vertex {
            return false;
        }

        if self.vertex.abs_diff(other.vertex) == 1 {
            return true;
        }

        (other.is_last_in_ring() && self.is_first_in_ring())
            || (other.is_first_in_ring() && self.is_last_in_ring())
    }

    /// True if the line between the two vertexes is a segment of the polygon boundary.
    #[inline]
    pub fn is_border_line(&self, other: &Self) -> bool {
        self.are_adjacent(other)
    }

    /// Same address on polygon `poly`.
    #[inline]
    pub fn reindex(&self, poly: usize) -> Self {
        PolygonIndex { poly, ..*self }
    }

    /// Same address with a new ring length.
    #[inline]
    pub fn reindex_to_size(&self, ring_len: usize) -> Self {
        debug_assert!(self.vertex < ring_len);
        PolygonIndex { ring_len, ..*self }
    }

    /// Same address with the ring length read from the current state of `lookup`, `None` if the
    /// ring no longer exists.
    pub fn reindex_to_current_size<T, L>(&self, lookup: &L) -> Option<Self>
    where
        T: Real,
        L: PolygonLookup<T> + ?Sized,
    {
        let len = self.ring(lookup)?.len() - 1;
        (self.vertex < len).then(|| self.reindex_to_size(len))
    }

    /// Turn an interior ring address into an exterior ring address of polygon `poly`, used when
    /// an interior ring is handled as a standalone polygon.
    pub fn reindex_to_outer(&self, poly: usize) -> PolyResult<Self> {
        if !self.is_inner() {
            return Err(PolygonError::NotAnInteriorIndex);
        }

        Ok(PolygonIndex {
            poly,
            inner: None,
            ..*self
        })
    }

    /// Turn an exterior ring address into an address on interior ring `inner` of polygon `poly`.
    pub fn reindex_to_inner(&self, inner: usize, poly: usize) -> PolyResult<Self> {
        if self.is_inner() {
            return Err(PolygonError::NotAnExteriorIndex);
        }

        Ok(PolygonIndex {
            poly,
            inner: Some(inner),
            ..*self
        })
    }

    /// The polygon holding the addressed ring: the interior polygon for interior addresses.
    pub fn polygon<'a, T, L>(&self, lookup: &'a L) -> Option<&'a Polygon<T>>
    where
        T: Real,
        L: PolygonLookup<T> + ?Sized,
    {
        let poly = lookup.lookup_polygon(self.poly)?;
        match self.inner {
            Some(i) => poly.interior_polygons().get(i),
            None => Some(poly),
        }
    }

    /// The addressed ring (closed, last point repeats the first).
    pub fn ring<'a, T, L>(&self, lookup: &'a L) -> Option<&'a [Vector2<T>]>
    where
        T: Real,
        L: PolygonLookup<T> + ?Sized,
    {
        self.polygon(lookup).map(|p| p.exterior_ring())
    }

    /// True if the address still matches the ring length found in `lookup`.
    pub fn is_current<T, L>(&self, lookup: &L) -> bool
    where
        T: Real,
        L: PolygonLookup<T> + ?Sized,
    {
        self.ring(lookup)
            .is_some_and(|r| r.len() - 1 == self.ring_len && self.vertex < self.ring_len)
    }

    /// The addressed point.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polyring::ring;
    /// # use polyring::ring::*;
    /// # use polyring::polygon::*;
    /// # use polyring::core::math::*;
    /// let square = Polygon::new(ring![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]).unwrap();
    /// let polys = vec![square.clone(), square.translate(Vector2::new(10.0, 0.0)).unwrap()];
    /// let i = PolygonIndex::new(1, 2, 4);
    /// assert_eq!(i.point(&polys), Some(Vector2::new(14.0, 4.0)));
    /// // a single polygon ignores the polygon id
    /// assert_eq!(i.point(&square), Some(Vector2::new(4.0, 4.0)));
    /// ```
    pub fn point<T, L>(&self, lookup: &L) -> Option<Vector2<T>>
    where
        T: Real,
        L: PolygonLookup<T> + ?Sized,
    {
        self.ring(lookup)?.get(self.vertex).copied()
    }

    /// Segment from this vertex to the next one.
    pub fn segment<T, L>(&self, lookup: &L) -> Option<LineSeg<T>>
    where
        T: Real,
        L: PolygonLookup<T> + ?Sized,
    {
        let ring = self.ring(lookup)?;
        let a = *ring.get(self.vertex)?;
        let b = *ring.get(self.next().vertex)?;
        Some(LineSeg::new_unchecked(a, b))
    }

    /// The previous and next points around this vertex.
    pub fn connected_points<T, L>(&self, lookup: &L) -> Option<[Vector2<T>; 2]>
    where
        T: Real,
        L: PolygonLookup<T> + ?Sized,
    {
        Some([self.prev().point(lookup)?, self.next().point(lookup)?])
    }

    /// The two segments meeting at this vertex: previous vertex to this one, this one to next.
    pub fn connected_segments<T, L>(&self, lookup: &L) -> Option<[LineSeg<T>; 2]>
    where
        T: Real,
        L: PolygonLookup<T> + ?Sized,
    {
        Some([self.prev().segment(lookup)?, self.segment(lookup)?])
    }

    /// Sort addresses and group them by ring.
    ///
    /// When a ring is only partially present and its run of addresses wraps across the closing
    /// vertex (e.g. vertexes 3, 4, 0, 1 of a 5 vertex ring), the group is rotated so the run stays
    /// contiguous instead of being split at vertex 0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polyring::ring::*;
    /// let idx = |v| PolygonIndex::new(0, v, 5);
    /// let sorted = PolygonIndex::sort_by_ring(vec![idx(1), idx(4), idx(0), idx(3)]);
    /// assert_eq!(sorted, vec![idx(3), idx(4), idx(0), idx(1)]);
    /// ```
    pub fn sort_by_ring(mut indexes: Vec<PolygonIndex>) -> Vec<PolygonIndex> {
        indexes.sort_unstable();

        let mut groups: BTreeMap<(usize, Option<usize>), Vec<PolygonIndex>> = BTreeMap::new();
        for i in indexes {
            groups.entry((i.poly, i.inner)).or_default().push(i);
        }

        let mut result = Vec::new();
        for (_, mut group) in groups {
            let partial = group.len() < group[0].ring_len;
            if partial && group.len() > 1 && group[0].are_adjacent(&group[group.len() - 1]) {
                // start after the first gap in the run
                let start = (1..group.len())
                    .find(|&k| group[k].vertex != group[k - 1].vertex + 1)
                    .unwrap_or(0);
                group.rotate_left(start);
            }
            result.extend(group);
        }

        result
    }
}

impl fmt::Display for PolygonIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner {
            Some(inner) => write!(
                f,
                "P:{} I:{} vertex {} of {}",
                self.poly, inner, self.vertex, self.ring_len
            ),
            None => write!(
                f,
                "P:{} vertex {} of {}",
                self.poly, self.vertex, self.ring_len
            ),
        }
    }
}
