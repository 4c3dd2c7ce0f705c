use super::PolygonIndex;
use crate::{core::traits::Real, polygon::Polygon};
use std::iter::FusedIterator;

/// Number of unique vertexes in the exterior ring (`None`) or an interior ring of `polygon`.
fn ring_len<T>(polygon: &Polygon<T>, inner: Option<usize>) -> usize
where
    T: Real,
{
    match inner {
        Some(i) => polygon.interior_polygons()[i].exterior_ring().len() - 1,
        None => polygon.exterior_ring().len() - 1,
    }
}

fn first_index<T>(polygon: &Polygon<T>, poly_id: usize) -> PolygonIndex
where
    T: Real,
{
    PolygonIndex::new(poly_id, 0, ring_len(polygon, None))
}

fn last_index<T>(polygon: &Polygon<T>, poly_id: usize) -> PolygonIndex
where
    T: Real,
{
    let hole_count = polygon.interior_polygons().len();
    let inner = hole_count.checked_sub(1);
    let len = ring_len(polygon, inner);
    PolygonIndex::new_in_ring(poly_id, inner, len - 1, len)
}

fn next_index<T>(polygon: &Polygon<T>, current: PolygonIndex) -> Option<PolygonIndex>
where
    T: Real,
{
    if current.vertex + 1 < current.ring_len {
        return Some(PolygonIndex {
            vertex: current.vertex + 1,
            ..current
        });
    }

    // ring exhausted, move to the first vertex of the next interior ring
    let next_inner = current.inner.map_or(0, |i| i + 1);
    if next_inner < polygon.interior_polygons().len() {
        let len = ring_len(polygon, Some(next_inner));
        return Some(PolygonIndex::new_inner(current.poly, next_inner, 0, len));
    }

    None
}

fn prev_index<T>(polygon: &Polygon<T>, current: PolygonIndex) -> Option<PolygonIndex>
where
    T: Real,
{
    if current.vertex > 0 {
        return Some(PolygonIndex {
            vertex: current.vertex - 1,
            ..current
        });
    }

    // ring exhausted, move to the last vertex of the previous ring
    let inner = current.inner?;
    let prev_inner = inner.checked_sub(1);
    let len = ring_len(polygon, prev_inner);
    Some(PolygonIndex::new_in_ring(current.poly, prev_inner, len - 1, len))
}

/// Walks every vertex address of one polygon: the exterior ring, then each interior ring in
/// order. The reverse walk yields exactly the same addresses back to front.
///
/// # Examples
///
/// ```
/// # use polyring::ring;
/// # use polyring::ring::*;
/// # use polyring::polygon::*;
/// let mut square = Polygon::new(ring![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]).unwrap();
/// square.add_interior_ring(ring![(1.0, 1.0), (2.0, 1.0), (2.0, 2.0)]).unwrap();
///
/// let mut walk = PolygonVertexEnum::new(&square);
/// let all: Vec<_> = walk.by_ref().collect();
/// assert_eq!(all.len(), 7);
/// assert_eq!(all[0], PolygonIndex::new(0, 0, 4));
/// assert_eq!(all[4], PolygonIndex::new_inner(0, 0, 0, 3));
///
/// // reset to walk again
/// walk.reset();
/// assert_eq!(walk.count(), 7);
/// ```
#[derive(Debug, Clone)]
pub struct PolygonVertexEnum<'a, T = f64>
where
    T: Real,
{
    polygon: &'a Polygon<T>,
    poly_id: usize,
    reverse: bool,
    current: Option<PolygonIndex>,
    done: bool,
}

impl<'a, T> PolygonVertexEnum<'a, T>
where
    T: Real,
{
    /// Forward walk using polygon id 0.
    pub fn new(polygon: &'a Polygon<T>) -> Self {
        Self::with_options(polygon, 0, false)
    }

    /// Reverse walk using polygon id 0.
    pub fn new_reversed(polygon: &'a Polygon<T>) -> Self {
        Self::with_options(polygon, 0, true)
    }

    /// Walk producing addresses with polygon id `poly_id`.
    pub fn with_options(polygon: &'a Polygon<T>, poly_id: usize, reverse: bool) -> Self {
        PolygonVertexEnum {
            polygon,
            poly_id,
            reverse,
            current: None,
            done: false,
        }
    }

    /// Last address produced, `None` before the first call to `next` and after the walk ends.
    #[inline]
    pub fn current(&self) -> Option<PolygonIndex> {
        self.current
    }

    /// Restart the walk from the beginning.
    pub fn reset(&mut self) {
        self.current = None;
        self.done = false;
    }
}

impl<'a, T> Iterator for PolygonVertexEnum<'a, T>
where
    T: Real,
{
    type Item = PolygonIndex;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let next = match (self.current, self.reverse) {
            (None, false) => Some(first_index(self.polygon, self.poly_id)),
            (None, true) => Some(last_index(self.polygon, self.poly_id)),
            (Some(c), false) => next_index(self.polygon, c),
            (Some(c), true) => prev_index(self.polygon, c),
        };

        self.done = next.is_none();
        self.current = next;
        next
    }
}

impl<'a, T> FusedIterator for PolygonVertexEnum<'a, T> where T: Real {}

/// Walks every vertex address of a list of polygons, polygon by polygon, with the same ring order
/// as [PolygonVertexEnum]. Polygon ids start at `poly_offset` and increase by one per polygon.
///
/// # Examples
///
/// ```
/// # use polyring::ring;
/// # use polyring::ring::*;
/// # use polyring::polygon::*;
/// let tri = Polygon::new(ring![(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]).unwrap();
/// let polys = vec![tri.clone(), tri];
/// let all: Vec<_> = PolygonsVertexEnum::with_options(&polys, 10, false).collect();
/// assert_eq!(all.len(), 6);
/// assert_eq!(all[0].poly, 10);
/// assert_eq!(all[5], PolygonIndex::new(11, 2, 3));
/// ```
#[derive(Debug, Clone)]
pub struct PolygonsVertexEnum<'a, T = f64>
where
    T: Real,
{
    polygons: &'a [Polygon<T>],
    poly_offset: usize,
    reverse: bool,
    // polygons fully walked so far
    walked: usize,
    inner: Option<PolygonVertexEnum<'a, T>>,
}

impl<'a, T> PolygonsVertexEnum<'a, T>
where
    T: Real,
{
    /// Forward walk with polygon ids starting at 0.
    pub fn new(polygons: &'a [Polygon<T>]) -> Self {
        Self::with_options(polygons, 0, false)
    }

    pub fn with_options(polygons: &'a [Polygon<T>], poly_offset: usize, reverse: bool) -> Self {
        PolygonsVertexEnum {
            polygons,
            poly_offset,
            reverse,
            walked: 0,
            inner: None,
        }
    }

    /// Last address produced, `None` before the first call to `next` and after the walk ends.
    #[inline]
    pub fn current(&self) -> Option<PolygonIndex> {
        self.inner.as_ref().and_then(|e| e.current())
    }

    /// Restart the walk from the beginning.
    pub fn reset(&mut self) {
        self.walked = 0;
        self.inner = None;
    }

    fn start_polygon(&mut self) -> bool {
        if self.walked >= self.polygons.len() {
            return false;
        }

        let pos = if self.reverse {
            self.polygons.len() - 1 - self.walked
        } else {
            self.walked
        };

        self.inner = Some(PolygonVertexEnum::with_options(
            &self.polygons[pos],
            self.poly_offset + pos,
            self.reverse,
        ));
        true
    }
}

impl<'a, T> Iterator for PolygonsVertexEnum<'a, T>
where
    T: Real,
{
    type Item = PolygonIndex;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.inner.is_none() && !self.start_polygon() {
                return None;
            }

            if let Some(i) = self.inner.as_mut().and_then(|e| e.next()) {
                return Some(i);
            }

            self.walked += 1;
            self.inner = None;
        }
    }
}

impl<'a, T> FusedIterator for PolygonsVertexEnum<'a, T> where T: Real {}
