use super::Rect;
use crate::{
    core::{
        math::{
            line_line_intr, line_seg_closest_point, midpoint, point_from_parametric,
            LineLineIntr, Vector2,
        },
        traits::Real,
    },
    PolyResult, PolygonError,
};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Straight line segment between two distinct points.
#[derive(Debug, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct LineSeg<T = f64> {
    a: Vector2<T>,
    b: Vector2<T>,
}

/// Result of intersecting two line segments.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SegIntersect<T>
where
    T: Real,
{
    /// Segments do not touch.
    None,
    /// Segments cross or touch at a single point.
    Point(Vector2<T>),
    /// Segments are collinear and share the span from the first point to the second point
    /// (ordered along the second segment).
    Overlap(Vector2<T>, Vector2<T>),
}

impl<T> SegIntersect<T>
where
    T: Real,
{
    /// True for any result other than [SegIntersect::None].
    #[inline]
    pub fn is_some(&self) -> bool {
        !matches!(self, SegIntersect::None)
    }
}

impl<T> LineSeg<T>
where
    T: Real,
{
    /// Create a segment from `a` to `b`.
    ///
    /// Fails with [PolygonError::DegenerateSegment] if the points are equal (within
    /// [Real::pos_equal_eps]).
    ///
    /// # Examples
    ///
    /// ```
    /// # use polyring::shapes::*;
    /// # use polyring::core::math::*;
    /// # use polyring::PolygonError;
    /// let seg = LineSeg::new(Vector2::new(0.0, 0.0), Vector2::new(3.0, 4.0)).unwrap();
    /// assert_eq!(seg.length(), 5.0);
    /// let p = Vector2::new(1.0, 1.0);
    /// assert_eq!(LineSeg::new(p, p).unwrap_err(), PolygonError::DegenerateSegment);
    /// ```
    pub fn new(a: Vector2<T>, b: Vector2<T>) -> PolyResult<Self> {
        if a == b {
            return Err(PolygonError::DegenerateSegment);
        }

        Ok(LineSeg { a, b })
    }

    /// Create a segment without checking the end points are distinct.
    ///
    /// Only used for ring segments whose vertexes are already known to be unique.
    #[inline]
    pub(crate) fn new_unchecked(a: Vector2<T>, b: Vector2<T>) -> Self {
        LineSeg { a, b }
    }

    /// Start point.
    #[inline]
    pub fn a(&self) -> Vector2<T> {
        self.a
    }

    /// End point.
    #[inline]
    pub fn b(&self) -> Vector2<T> {
        self.b
    }

    #[inline]
    pub fn length(&self) -> T {
        self.a.distance(self.b)
    }

    /// Direction vector from `a` to `b` (not normalized).
    #[inline]
    pub fn direction(&self) -> Vector2<T> {
        self.b - self.a
    }

    /// Slope (rise over run), `None` for a vertical segment.
    pub fn slope(&self) -> Option<T> {
        let d = self.direction();
        if d.x.fuzzy_eq_zero() {
            None
        } else {
            Some(d.y / d.x)
        }
    }

    #[inline]
    pub fn midpoint(&self) -> Vector2<T> {
        midpoint(self.a, self.b)
    }

    /// Point at parametric value `t` (`0` is `a`, `1` is `b`).
    #[inline]
    pub fn point_at(&self, t: T) -> Vector2<T> {
        point_from_parametric(self.a, self.b, t)
    }

    #[inline]
    pub fn bounding_rect(&self) -> Rect<T> {
        Rect::new(self.a.x, self.a.y, self.b.x, self.b.y)
    }

    /// True if `point` is one of the end points.
    #[inline]
    pub fn is_endpoint(&self, point: Vector2<T>) -> bool {
        self.a == point || self.b == point
    }


    #[inline]
    pub fn closest_point(&self, point: Vector2<T>) -> Vector2<T> {
        line_seg_closest_point(self.a, self.b, point)
    }

    #[inline]
    pub fn distance_to_point(&self, point: Vector2<T>) -> T {
        self.closest_point(point).distance(point)
    }

    /// True if `point` lies on the segment within [Real::pos_equal_eps].
    #[inline]
    pub fn contains_point(&self, point: Vector2<T>) -> bool {
        self.distance_to_point(point) <= T::pos_equal_eps()
    }

    /// Shortest distance between two segments, zero if they intersect.
    pub fn distance_to_segment(&self, other: &Self) -> T {
        if self.intersects(other) {
            return T::zero();
        }

        let d1 = self.distance_to_point(other.a);
        let d2 = self.distance_to_point(other.b);
        let d3 = other.distance_to_point(self.a);
        let d4 = other.distance_to_point(self.b);
        num_traits::real::Real::min(
            num_traits::real::Real::min(d1, d2),
            num_traits::real::Real::min(d3, d4),
        )
    }

    /// Find the intersection with another segment.
    ///
    /// Bounding boxes are compared first (padded by [Real::pos_equal_eps]) before solving.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polyring::shapes::*;
    /// # use polyring::core::math::*;
    /// let s1 = LineSeg::new(Vector2::new(0.0, 0.0), Vector2::new(2.0, 2.0)).unwrap();
    /// let s2 = LineSeg::new(Vector2::new(0.0, 2.0), Vector2::new(2.0, 0.0)).unwrap();
    /// assert_eq!(s1.intersection(&s2), SegIntersect::Point(Vector2::new(1.0, 1.0)));
    /// ```
    pub fn intersection(&self, other: &Self) -> SegIntersect<T> {
        let eps = T::pos_equal_eps();
        if !self.bounding_rect().intersects_eps(&other.bounding_rect(), eps) {
            return SegIntersect::None;
        }

        match line_line_intr(self.a, self.b, other.a, other.b, eps) {
            LineLineIntr::NoIntersect | LineLineIntr::FalseIntersect { .. } => SegIntersect::None,
            LineLineIntr::TrueIntersect { seg1_t, .. } => {
                // snap to an end point when the solved point is within tolerance of one
                let p = self.point_at(seg1_t);
                let snapped = [self.a, self.b, other.a, other.b]
                    .into_iter()
                    .find(|&e| e == p)
                    .unwrap_or(p);
                SegIntersect::Point(snapped)
            }
            LineLineIntr::Overlapping { seg2_t0, seg2_t1 } => {
                let p0 = other.point_at(seg2_t0);
                let p1 = other.point_at(seg2_t1);
                if p0 == p1 {
                    SegIntersect::Point(p0)
                } else {
                    SegIntersect::Overlap(p0, p1)
                }
            }
        }
    }

    /// True if the segments touch or cross anywhere.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.intersection(other).is_some()
    }

    /// Same as [LineSeg::intersects] but a single point of contact at an end point of either
    /// segment does not count. Collinear overlap always counts.
    pub fn intersects_excluding_endpoints(&self, other: &Self) -> bool {
        match self.intersection(other) {
            SegIntersect::None => false,
            SegIntersect::Point(p) => !(self.is_endpoint(p) || other.is_endpoint(p)),
            SegIntersect::Overlap(..) => true,
        }
    }

    /// Translate the segment by `offset`.
    #[inline]
    pub fn translate(&self, offset: Vector2<T>) -> Self {
        LineSeg {
            a: self.a + offset,
            b: self.b + offset,
        }
    }
}

/// Segments are equal if they have the same end points, in either direction.
impl<T> PartialEq for LineSeg<T>
where
    T: Real,
{
    fn eq(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

impl<T> fmt::Display for LineSeg<T>
where
    T: Real,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.a, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> LineSeg {
        LineSeg::new(Vector2::new(x1, y1), Vector2::new(x2, y2)).unwrap()
    }

    #[test]
    fn slope_and_vertical() {
        assert_eq!(seg(0.0, 0.0, 2.0, 1.0).slope(), Some(0.5));
        assert_eq!(seg(1.0, 0.0, 1.0, 5.0).slope(), None);
    }

    #[test]
    fn shared_endpoint_counts_as_intersect() {
        let s1 = seg(0.0, 0.0, 1.0, 0.0);
        let s2 = seg(1.0, 0.0, 1.0, 1.0);
        assert_eq!(s1.intersection(&s2), SegIntersect::Point(Vector2::new(1.0, 0.0)));
        assert!(s1.intersects(&s2));
        assert!(!s1.intersects_excluding_endpoints(&s2));
    }

    #[test]
    fn collinear_overlap() {
        let s1 = seg(0.0, 0.0, 4.0, 0.0);
        let s2 = seg(2.0, 0.0, 6.0, 0.0);
        match s1.intersection(&s2) {
            SegIntersect::Overlap(p0, p1) => {
                assert_eq!(p0, Vector2::new(2.0, 0.0));
                assert_eq!(p1, Vector2::new(4.0, 0.0));
            }
            r => panic!("expected overlap, got {:?}", r),
        }
        assert!(s1.intersects_excluding_endpoints(&s2));
    }

    #[test]
    fn distance_between_segments() {
        let s1 = seg(0.0, 0.0, 4.0, 0.0);
        let s2 = seg(1.0, 2.0, 3.0, 5.0);
        assert_eq!(s1.distance_to_segment(&s2), 2.0);
        assert_eq!(s1.distance_to_segment(&seg(2.0, -1.0, 2.0, 1.0)), 0.0);
    }

    #[test]
    fn equality_ignores_direction() {
        assert_eq!(seg(0.0, 0.0, 1.0, 1.0), seg(1.0, 1.0, 0.0, 0.0));
        assert_ne!(seg(0.0, 0.0, 1.0, 1.0), seg(0.0, 0.0, 1.0, 2.0));
    }
}
