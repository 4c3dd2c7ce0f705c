use super::ring_unique_len;
use crate::core::{
    math::{orientation, Vector2},
    traits::Real,
};

/// Indexes of the points on the convex hull of a ring, in counter clockwise order starting from
/// the lowest-leftmost point.
///
/// The closing duplicate of a closed ring is ignored. Points lying on a hull edge (collinear) are
/// not included.
///
/// # Examples
///
/// ```
/// # use polyring::ring;
/// # use polyring::ring::*;
/// // square with a notch cut into the top edge
/// let notched = ring![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (2.0, 2.0), (0.0, 4.0)];
/// assert_eq!(convex_hull_indices(&notched), vec![0, 1, 2, 4]);
/// ```
pub fn convex_hull_indices<T>(ring: &[Vector2<T>]) -> Vec<usize>
where
    T: Real,
{
    // monotone chain
    let n = ring_unique_len(ring);
    if n < 3 {
        return (0..n).collect();
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_unstable_by(|&a, &b| {
        let (pa, pb) = (ring[a], ring[b]);
        pa.x.partial_cmp(&pb.x)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(pa.y.partial_cmp(&pb.y).unwrap_or(std::cmp::Ordering::Equal))
    });

    let turns_left = |hull: &[usize], next: usize| {
        let k = hull.len();
        orientation(ring[hull[k - 2]], ring[hull[k - 1]], ring[next]) > T::zero()
    };

    let mut lower: Vec<usize> = Vec::with_capacity(n);
    for &i in &order {
        while lower.len() >= 2 && !turns_left(&lower, i) {
            lower.pop();
        }
        lower.push(i);
    }

    let mut upper: Vec<usize> = Vec::with_capacity(n);
    for &i in order.iter().rev() {
        while upper.len() >= 2 && !turns_left(&upper, i) {
            upper.pop();
        }
        upper.push(i);
    }

    // last point of each chain is the first point of the other
    lower.pop();
    upper.pop();
    lower.extend(upper);

    // rotate so the hull starts at the lowest y (then lowest x) point
    if let Some(start) = (0..lower.len()).min_by(|&a, &b| {
        let (pa, pb) = (ring[lower[a]], ring[lower[b]]);
        pa.y.partial_cmp(&pb.y)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(pa.x.partial_cmp(&pb.x).unwrap_or(std::cmp::Ordering::Equal))
    }) {
        lower.rotate_left(start);
    }

    lower
}
