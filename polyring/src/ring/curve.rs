use super::{ensure_closed_ring, ring_unique_len};
use crate::core::{
    math::{line_seg_dist, Vector2},
    traits::Real,
};

/// Densify a closed ring with a centripetal Catmull-Rom spline passing through every point.
///
/// `interpolations` points are added between each pair of ring points. The result is closed and
/// keeps every original point. Rings with fewer than 3 unique points, or `interpolations == 0`,
/// are returned unchanged.
///
/// # Examples
///
/// ```
/// # use polyring::ring;
/// # use polyring::ring::*;
/// let square = ring![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)];
/// let smooth = catmull_rom_closed(&square, 3);
/// assert_eq!(smooth.len(), 4 * 4 + 1);
/// assert!(square.iter().all(|p| smooth.contains(p)));
/// ```
pub fn catmull_rom_closed<T>(ring: &[Vector2<T>], interpolations: usize) -> Vec<Vector2<T>>
where
    T: Real,
{
    let n = ring_unique_len(ring);
    if n < 3 || interpolations == 0 {
        return ensure_closed_ring(ring.to_vec());
    }

    let alpha = T::half();
    let knot = |t: T, p0: Vector2<T>, p1: Vector2<T>| t + p0.distance(p1).powf(alpha);
    let steps = T::from(interpolations + 1).unwrap();

    let mut result = Vec::with_capacity(n * (interpolations + 1) + 1);
    for i in 0..n {
        let p0 = ring[(i + n - 1) % n];
        let p1 = ring[i];
        let p2 = ring[(i + 1) % n];
        let p3 = ring[(i + 2) % n];

        let t0 = T::zero();
        let t1 = knot(t0, p0, p1);
        let t2 = knot(t1, p1, p2);
        let t3 = knot(t2, p2, p3);

        let lerp = |ta: T, tb: T, a: Vector2<T>, b: Vector2<T>, t: T| {
            a.scale((tb - t) / (tb - ta)) + b.scale((t - ta) / (tb - ta))
        };

        result.push(p1);
        for k in 1..=interpolations {
            let t = t1 + (t2 - t1) * T::from(k).unwrap() / steps;
            let a1 = lerp(t0, t1, p0, p1, t);
            let a2 = lerp(t1, t2, p1, p2, t);
            let a3 = lerp(t2, t3, p2, p3, t);
            let b1 = lerp(t0, t2, a1, a2, t);
            let b2 = lerp(t1, t3, a2, a3, t);
            result.push(lerp(t1, t2, b1, b2, t));
        }
    }

    result.push(ring[0]);
    result
}

/// Simplify a closed ring with the Douglas-Peucker algorithm.
///
/// Points closer than `tolerance` to the simplified outline are dropped. The first point of the
/// ring and the point farthest from it are always kept, so the result never has fewer than 3
/// unique points when the input has at least 3 (unless all points are collinear within
/// `tolerance`, in which case the farthest remaining point is kept as a third anchor).
///
/// # Examples
///
/// ```
/// # use polyring::ring;
/// # use polyring::ring::*;
/// // square with a nearly flat extra point on the bottom edge
/// let r = ring![(0.0, 0.0), (2.0, 0.01), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)];
/// let simple = douglas_peucker_closed(&r, 0.1);
/// assert_eq!(simple.len(), 5);
/// ```
pub fn douglas_peucker_closed<T>(ring: &[Vector2<T>], tolerance: T) -> Vec<Vector2<T>>
where
    T: Real,
{
    let n = ring_unique_len(ring);
    if n <= 3 {
        return ensure_closed_ring(ring[..n].to_vec());
    }

    // split the ring at the point farthest from the first point
    let far = (1..n)
        .max_by(|&a, &b| {
            ring[0]
                .distance_squared(ring[a])
                .partial_cmp(&ring[0].distance_squared(ring[b]))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .unwrap_or(1);

    let mut keep = vec![false; n + 1];
    keep[0] = true;
    keep[far] = true;
    keep[n] = true;

    let closed: Vec<Vector2<T>> = ring[..n].iter().copied().chain([ring[0]]).collect();
    simplify_run(&closed, 0, far, tolerance, &mut keep);
    simplify_run(&closed, far, n, tolerance, &mut keep);

    if keep[..n].iter().filter(|&&k| k).count() < 3 {
        // all points collinear within tolerance, keep the farthest point off the chord
        let best = (1..n)
            .filter(|&i| i != far)
            .max_by(|&a, &b| {
                let da = line_seg_dist(closed[0], closed[far], closed[a]);
                let db = line_seg_dist(closed[0], closed[far], closed[b]);
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            });
        if let Some(b) = best {
            keep[b] = true;
        }
    }

    closed
        .iter()
        .zip(keep.iter())
        .filter_map(|(&p, &k)| k.then_some(p))
        .collect()
}

fn simplify_run<T>(points: &[Vector2<T>], start: usize, end: usize, tolerance: T, keep: &mut [bool])
where
    T: Real,
{
    if end <= start + 1 {
        return;
    }

    let mut max_dist = T::zero();
    let mut max_index = start;
    for i in (start + 1)..end {
        let d = line_seg_dist(points[start], points[end], points[i]);
        if d > max_dist {
            max_dist = d;
            max_index = i;
        }
    }

    if max_dist > tolerance {
        keep[max_index] = true;
        simplify_run(points, start, max_index, tolerance, keep);
        simplify_run(points, max_index, end, tolerance, keep);
    }
}
