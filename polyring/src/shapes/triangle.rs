use super::{LineSeg, OverlapType, Rect};
use crate::{
    core::{
        math::{orientation, Vector2},
        traits::Real,
    },
    PolyResult, PolygonError,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Triangle with three non collinear points.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Triangle<T = f64>
where
    T: Real,
{
    points: [Vector2<T>; 3],
}

impl<T> Triangle<T>
where
    T: Real,
{
    /// Create a triangle, fails with [PolygonError::DegenerateTriangle] if the points are
    /// collinear (or coincident).
    pub fn new(p1: Vector2<T>, p2: Vector2<T>, p3: Vector2<T>) -> PolyResult<Self> {
        let tri = Triangle {
            points: [p1, p2, p3],
        };

        // height of p3 over the p1 -> p2 base, compared as a distance
        let base = p1.distance(p2);
        if base <= T::pos_equal_eps() || tri.area() * T::two() / base <= T::pos_equal_eps() {
            return Err(PolygonError::DegenerateTriangle);
        }

        Ok(tri)
    }

    #[inline]
    pub fn points(&self) -> &[Vector2<T>; 3] {
        &self.points
    }

    /// Signed area, positive for counter clockwise point order.
    #[inline]
    pub fn signed_area(&self) -> T {
        let [p1, p2, p3] = self.points;
        orientation(p1, p2, p3) / T::two()
    }

    #[inline]
    pub fn area(&self) -> T {
        self.signed_area().abs()
    }

    #[inline]
    pub fn is_counter_clockwise(&self) -> bool {
        self.signed_area() > T::zero()
    }

    #[inline]
    pub fn centroid(&self) -> Vector2<T> {
        let [p1, p2, p3] = self.points;
        let three = T::from(3.0).unwrap();
        Vector2::new((p1.x + p2.x + p3.x) / three, (p1.y + p2.y + p3.y) / three)
    }

    pub fn bounding_rect(&self) -> Rect<T> {
        let [p1, p2, p3] = self.points;
        let mut r = Rect::from_point(p1);
        r.expand_to_point(p2);
        r.expand_to_point(p3);
        r
    }

    /// Edges `p1 -> p2`, `p2 -> p3`, `p3 -> p1`.
    pub fn segments(&self) -> [LineSeg<T>; 3] {
        let [p1, p2, p3] = self.points;
        [
            LineSeg::new_unchecked(p1, p2),
            LineSeg::new_unchecked(p2, p3),
            LineSeg::new_unchecked(p3, p1),
        ]
    }

    /// Barycentric `(u, v)` coordinates of `point`, where `point = p1 + u * (p3 - p1) + v * (p2 -
    /// p1)`.
    pub fn barycentric(&self, point: Vector2<T>) -> Vector2<T> {
        let [p1, p2, p3] = self.points;
        let v_ca = p3 - p1;
        let v_ba = p2 - p1;
        let v_pa = point - p1;
        let dot_caca = v_ca.dot(v_ca);
        let dot_caba = v_ca.dot(v_ba);
        let dot_baba = v_ba.dot(v_ba);
        let dot_capa = v_ca.dot(v_pa);
        let dot_bapa = v_ba.dot(v_pa);
        let inv_denom = T::one() / (dot_caca * dot_baba - dot_caba * dot_caba);
        let u = (dot_baba * dot_capa - dot_caba * dot_bapa) * inv_denom;
        let v = (dot_caca * dot_bapa - dot_caba * dot_capa) * inv_denom;
        Vector2::new(u, v)
    }

    /// Classify `point` as inside, on an edge (within [Real::pos_equal_eps]), or outside.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polyring::shapes::*;
    /// # use polyring::core::math::*;
    /// let tri = Triangle::new(
    ///     Vector2::new(0.0, 0.0),
    ///     Vector2::new(4.0, 0.0),
    ///     Vector2::new(0.0, 4.0),
    /// )
    /// .unwrap();
    /// assert_eq!(tri.contains_point(Vector2::new(1.0, 1.0)), OverlapType::Contained);
    /// assert_eq!(tri.contains_point(Vector2::new(2.0, 2.0)), OverlapType::Touching);
    /// assert_eq!(tri.contains_point(Vector2::new(3.0, 3.0)), OverlapType::None);
    /// ```
    pub fn contains_point(&self, point: Vector2<T>) -> OverlapType {
        if !self.bounding_rect().contains_point(point) {
            return OverlapType::None;
        }

        if self.segments().iter().any(|s| s.contains_point(point)) {
            return OverlapType::Touching;
        }

        let sign = if self.is_counter_clockwise() {
            T::one()
        } else {
            -T::one()
        };

        let [p1, p2, p3] = self.points;
        let inside = orientation(p1, p2, point) * sign > T::zero()
            && orientation(p2, p3, point) * sign > T::zero()
            && orientation(p3, p1, point) * sign > T::zero();

        if inside {
            OverlapType::Contained
        } else {
            OverlapType::None
        }
    }

    /// Boolean form of [Triangle::contains_point], boundary counts as contained.
    #[inline]
    pub fn contains(&self, point: Vector2<T>) -> bool {
        self.contains_point(point) != OverlapType::None
    }

    pub fn translate(&self, offset: Vector2<T>) -> Self {
        let [p1, p2, p3] = self.points;
        Triangle {
            points: [p1 + offset, p2 + offset, p3 + offset],
        }
    }
}
