//! Ring helpers, vertex addressing, and vertex enumeration.
//!
//! A ring is a closed sequence of points stored as a slice whose last point repeats the first.
//! Functions here take rings as plain slices so they work on any storage.
mod convex_hull;
mod curve;
mod lookup;
mod polygon_index;
mod vertex_enum;

pub use convex_hull::convex_hull_indices;
pub use curve::{catmull_rom_closed, douglas_peucker_closed};
pub use lookup::PolygonLookup;
pub use polygon_index::PolygonIndex;
pub use vertex_enum::{PolygonVertexEnum, PolygonsVertexEnum};

use crate::{
    core::{math::Vector2, traits::Real},
    shapes::{LineSeg, Rect},
};

/// True if the ring has at least two points and the last point equals the first.
#[inline]
pub fn ring_is_closed<T>(ring: &[Vector2<T>]) -> bool
where
    T: Real,
{
    ring.len() > 1 && ring[0] == ring[ring.len() - 1]
}

/// Append the first point to the end of `points` if it is not already closed.
///
/// # Examples
///
/// ```
/// # use polyring::ring::*;
/// # use polyring::core::math::*;
/// let open = vec![Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0), Vector2::new(0.0, 1.0)];
/// let closed = ensure_closed_ring(open);
/// assert_eq!(closed.len(), 4);
/// assert_eq!(ensure_closed_ring(closed.clone()).len(), 4);
/// ```
pub fn ensure_closed_ring<T>(mut points: Vec<Vector2<T>>) -> Vec<Vector2<T>>
where
    T: Real,
{
    if !points.is_empty() && !ring_is_closed(&points) {
        points.push(points[0]);
    }
    points
}

/// Remove points equal to the point before them.
pub fn remove_adjacent_duplicates<T>(points: &[Vector2<T>]) -> Vec<Vector2<T>>
where
    T: Real,
{
    let mut result: Vec<Vector2<T>> = Vec::with_capacity(points.len());
    for &p in points {
        if result.last() != Some(&p) {
            result.push(p);
        }
    }
    result
}

/// Number of unique points in a closed ring (closing duplicate not counted).
#[inline]
pub fn ring_unique_len<T>(ring: &[Vector2<T>]) -> usize
where
    T: Real,
{
    if ring_is_closed(ring) {
        ring.len() - 1
    } else {
        ring.len()
    }
}

/// Signed area of the ring using the shoelace formula, positive for counter clockwise rings.
///
/// The ring is treated as closed whether or not the last point repeats the first.
///
/// # Examples
///
/// ```
/// # use polyring::ring;
/// # use polyring::ring::*;
/// let square = ring![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)];
/// assert_eq!(ring_signed_area(&square), 16.0);
/// let reversed: Vec<_> = square.iter().rev().copied().collect();
/// assert_eq!(ring_signed_area(&reversed), -16.0);
/// ```
pub fn ring_signed_area<T>(ring: &[Vector2<T>]) -> T
where
    T: Real,
{
    let n = ring_unique_len(ring);
    if n < 3 {
        return T::zero();
    }

    // shoelace, shifted to the first point to limit precision loss far from the origin
    let origin = ring[0];
    let mut double_area = T::zero();
    for i in 0..n {
        let v1 = ring[i] - origin;
        let v2 = ring[(i + 1) % n] - origin;
        double_area = double_area + v1.perp_dot(v2);
    }

    double_area / T::two()
}

/// True if the ring winds clockwise (negative signed area).
#[inline]
pub fn ring_is_clockwise<T>(ring: &[Vector2<T>]) -> bool
where
    T: Real,
{
    ring_signed_area(ring) < T::zero()
}

/// Area weighted centroid of the ring. Falls back to the average of the unique points for rings
/// with (near) zero area.
pub fn ring_centroid<T>(ring: &[Vector2<T>]) -> Vector2<T>
where
    T: Real,
{
    let n = ring_unique_len(ring);
    if n == 0 {
        return Vector2::zero();
    }

    let origin = ring[0];
    let mut double_area = T::zero();
    let mut cx = T::zero();
    let mut cy = T::zero();
    for i in 0..n {
        let v1 = ring[i] - origin;
        let v2 = ring[(i + 1) % n] - origin;
        let cross = v1.perp_dot(v2);
        double_area = double_area + cross;
        cx = cx + (v1.x + v2.x) * cross;
        cy = cy + (v1.y + v2.y) * cross;
    }

    if double_area.fuzzy_eq_zero() {
        let count = T::from(n).unwrap();
        let sum = ring[..n].iter().fold(Vector2::zero(), |acc, p| acc + p);
        return Vector2::new(sum.x / count, sum.y / count);
    }

    let six_area = double_area * T::from(3.0).unwrap();
    Vector2::new(origin.x + cx / six_area, origin.y + cy / six_area)
}

/// Bounding box of the ring points, `None` for an empty ring.
#[inline]
pub fn ring_bounding_rect<T>(ring: &[Vector2<T>]) -> Option<Rect<T>>
where
    T: Real,
{
    Rect::from_points(ring.iter().copied())
}

/// Segments of a closed ring, segment `i` runs from point `i` to point `i + 1`.
pub fn ring_segments<T>(ring: &[Vector2<T>]) -> Vec<LineSeg<T>>
where
    T: Real,
{
    ring.windows(2)
        .map(|w| LineSeg::new_unchecked(w[0], w[1]))
        .collect()
}

/// Total length of the ring boundary.
pub fn ring_perimeter<T>(ring: &[Vector2<T>]) -> T
where
    T: Real,
{
    ring.windows(2)
        .fold(T::zero(), |acc, w| acc + w[0].distance(w[1]))
}

/// Position of the first point that repeats an earlier point, ignoring the closing duplicate.
pub fn find_duplicate_point<T>(ring: &[Vector2<T>]) -> Option<usize>
where
    T: Real,
{
    let n = ring_unique_len(ring);
    // sort positions by x so only points within epsilon in x need comparing
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_unstable_by(|&a, &b| {
        ring[a]
            .x
            .partial_cmp(&ring[b].x)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let eps = T::pos_equal_eps();
    let mut result: Option<usize> = None;
    for (k, &i) in order.iter().enumerate() {
        for &j in &order[k + 1..] {
            if ring[j].x - ring[i].x > eps {
                break;
            }
            if ring[i] == ring[j] {
                let later = std::cmp::max(i, j);
                result = Some(result.map_or(later, |r| std::cmp::min(r, later)));
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centroid_of_offset_square() {
        let r = ring![(10.0, 10.0), (14.0, 10.0), (14.0, 14.0), (10.0, 14.0)];
        let c = ring_centroid(&r);
        assert!(c.fuzzy_eq(Vector2::new(12.0, 12.0)));
    }

    #[test]
    fn duplicate_point_found() {
        let r = ring![(0.0, 0.0), (4.0, 0.0), (2.0, 2.0), (4.0, 4.0), (2.0, 2.0), (0.0, 4.0)];
        assert_eq!(find_duplicate_point(&r), Some(4));
        let ok = ring![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0)];
        assert_eq!(find_duplicate_point(&ok), None);
    }

    #[test]
    fn adjacent_duplicates_removed() {
        let pts = vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(1.0, 1e-7),
        ];
        assert_eq!(remove_adjacent_duplicates(&pts).len(), 2);
    }

    #[test]
    fn perimeter_and_unique_len() {
        let r = ring![(0.0, 0.0), (3.0, 0.0), (3.0, 4.0)];
        assert_eq!(ring_unique_len(&r), 3);
        assert_eq!(ring_perimeter(&r), 12.0);
    }
}
