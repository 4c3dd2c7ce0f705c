use super::Vector2;
use crate::core::traits::Real;

/// Distance between the points `p0` and `p1`.
#[inline]
pub fn dist<T>(p0: Vector2<T>, p1: Vector2<T>) -> T
where
    T: Real,
{
    let d = p0 - p1;
    d.dot(d).sqrt()
}

/// Midpoint of a line segment defined by `p0` to `p1`.
#[inline]
pub fn midpoint<T>(p0: Vector2<T>, p1: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    Vector2::new((p0.x + p1.x) / T::two(), (p0.y + p1.y) / T::two())
}

/// Returns the point on the line segment going from `p0` to `p1` at parametric value `t`.
#[inline]
pub fn point_from_parametric<T>(p0: Vector2<T>, p1: Vector2<T>, t: T) -> Vector2<T>
where
    T: Real,
{
    p0 + (p1 - p0).scale(t)
}

/// Returns the parametric value on the line segment going from `p0` to `p1` at the `point` given.
///
/// Note this function assumes the `point` is on the line and properly handles the cases of vertical
/// and horizontal lines by using the `epsilon` parameter to fuzzy compare for when `p0.x == p1.x`.
#[inline]
pub fn parametric_from_point<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>, epsilon: T) -> T
where
    T: Real,
{
    if p0.x.fuzzy_eq_eps(p1.x, epsilon) {
        // vertical segment, use y coordinate
        (point.y - p0.y) / (p1.y - p0.y)
    } else {
        // use x coordinate
        (point.x - p0.x) / (p1.x - p0.x)
    }
}

/// Returns the closest point on the line segment from `p0` to `p1` to the `point` given.
#[inline]
pub fn line_seg_closest_point<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    // Dot product used to find angles
    // See: http://geomalgorithms.com/a02-_lines.html
    let v = p1 - p0;
    let w = point - p0;
    let c1 = w.dot(v);
    if c1 < T::fuzzy_epsilon() {
        return p0;
    }

    let c2 = v.length_squared();
    if c2 < c1 + T::fuzzy_epsilon() {
        return p1;
    }

    let b = c1 / c2;
    p0 + v.scale(b)
}

/// Shortest distance from `point` to the line segment `p0` to `p1`.
#[inline]
pub fn line_seg_dist<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> T
where
    T: Real,
{
    dist(line_seg_closest_point(p0, p1, point), point)
}

/// Twice the signed area of the triangle `p0`, `p1`, `point`.
///
/// Positive when `point` is left of the direction vector `p1 - p0` (counter clockwise turn),
/// negative when right, zero when collinear.
#[inline]
pub fn orientation<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> T
where
    T: Real,
{
    (p1.x - p0.x) * (point.y - p0.y) - (p1.y - p0.y) * (point.x - p0.x)
}

/// Returns the three points turn as counter clockwise (`1`), clockwise (`-1`) or collinear (`0`).
///
/// The collinear test is scaled by the length of the `p0` to `p1` segment so `epsilon` is a
/// positional distance rather than an area.
#[inline]
pub fn turn_direction<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>, epsilon: T) -> i32
where
    T: Real,
{
    let len = dist(p0, p1);
    if len.fuzzy_eq_zero() {
        return 0;
    }

    let offset = orientation(p0, p1, point) / len;
    if offset.fuzzy_eq_zero_eps(epsilon) {
        0
    } else if offset > T::zero() {
        1
    } else {
        -1
    }
}
