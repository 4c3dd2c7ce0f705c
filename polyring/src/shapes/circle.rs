use super::{LineSeg, OverlapType, Rect};
use crate::core::{math::Vector2, traits::Real};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Circle defined by center point and radius.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Circle<T = f64>
where
    T: Real,
{
    pub center: Vector2<T>,
    pub radius: T,
}

impl<T> Circle<T>
where
    T: Real,
{
    #[inline]
    pub fn new(center: Vector2<T>, radius: T) -> Self {
        debug_assert!(radius >= T::zero(), "circle radius must not be negative");
        Circle { center, radius }
    }

    #[inline]
    pub fn area(&self) -> T {
        T::pi() * self.radius * self.radius
    }

    #[inline]
    pub fn bounding_rect(&self) -> Rect<T> {
        Rect::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.center.x + self.radius,
            self.center.y + self.radius,
        )
    }

    /// Classify `point` as inside, on the circle (within [Real::pos_equal_eps]), or outside.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polyring::shapes::*;
    /// # use polyring::core::math::*;
    /// let c = Circle::new(Vector2::new(0.0, 0.0), 2.0);
    /// assert_eq!(c.contains_point(Vector2::new(1.0, 1.0)), OverlapType::Contained);
    /// assert_eq!(c.contains_point(Vector2::new(0.0, 2.0)), OverlapType::Touching);
    /// assert_eq!(c.contains_point(Vector2::new(2.0, 2.0)), OverlapType::None);
    /// ```
    pub fn contains_point(&self, point: Vector2<T>) -> OverlapType {
        let d = self.center.distance(point);
        let eps = T::pos_equal_eps();
        if (d - self.radius).abs() <= eps {
            OverlapType::Touching
        } else if d < self.radius {
            OverlapType::Contained
        } else {
            OverlapType::None
        }
    }

    /// True if the whole segment lies inside or on the circle.
    pub fn contains_segment(&self, seg: &LineSeg<T>) -> bool {
        // circle is convex so both end points inside is enough
        self.contains_point(seg.a()) != OverlapType::None
            && self.contains_point(seg.b()) != OverlapType::None
    }

    /// Distance from `point` to the circle boundary, zero for points inside.
    #[inline]
    pub fn distance_to_point(&self, point: Vector2<T>) -> T {
        num_traits::real::Real::max(self.center.distance(point) - self.radius, T::zero())
    }

    #[inline]
    pub fn intersects_circle(&self, other: &Self) -> bool {
        self.center.distance(other.center) <= self.radius + other.radius + T::pos_equal_eps()
    }

    #[inline]
    pub fn intersects_segment(&self, seg: &LineSeg<T>) -> bool {
        seg.distance_to_point(self.center) <= self.radius + T::pos_equal_eps()
    }

    #[inline]
    pub fn intersects_rect(&self, rect: &Rect<T>) -> bool {
        rect.distance_to_point(self.center) <= self.radius + T::pos_equal_eps()
    }

    #[inline]
    pub fn translate(&self, offset: Vector2<T>) -> Self {
        Circle::new(self.center + offset, self.radius)
    }
}
