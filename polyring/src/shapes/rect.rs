use crate::core::{math::Vector2, traits::Real};
use static_aabb2d_index::AABB;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis aligned rectangle, also used as the bounding box of every other shape.
///
/// Edges are inclusive: points on the boundary are inside.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Rect<T = f64> {
    pub min_x: T,
    pub min_y: T,
    pub max_x: T,
    pub max_y: T,
}

impl<T> Rect<T>
where
    T: Real,
{
    /// Create a rectangle from two opposite corner coordinates, in any order.
    #[inline]
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Self {
        let (min_x, max_x) = if x1 < x2 { (x1, x2) } else { (x2, x1) };
        let (min_y, max_y) = if y1 < y2 { (y1, y2) } else { (y2, y1) };
        Rect {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Create a rectangle with zero size at `point`.
    #[inline]
    pub fn from_point(point: Vector2<T>) -> Self {
        Rect {
            min_x: point.x,
            min_y: point.y,
            max_x: point.x,
            max_y: point.y,
        }
    }

    /// Smallest rectangle holding every point given, or `None` if there are no points.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polyring::shapes::*;
    /// # use polyring::core::math::*;
    /// let points = [Vector2::new(1.0, 4.0), Vector2::new(-2.0, 0.5), Vector2::new(3.0, 1.0)];
    /// let rect = Rect::from_points(points.iter().copied()).unwrap();
    /// assert_eq!(rect, Rect::new(-2.0, 0.5, 3.0, 4.0));
    /// assert!(Rect::<f64>::from_points(std::iter::empty()).is_none());
    /// ```
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vector2<T>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut result = Rect::from_point(first);
        for p in iter {
            result.expand_to_point(p);
        }
        Some(result)
    }

    /// Grow the rectangle (if needed) so it holds `point`.
    #[inline]
    pub fn expand_to_point(&mut self, point: Vector2<T>) {
        self.min_x = num_traits::real::Real::min(self.min_x, point.x);
        self.min_y = num_traits::real::Real::min(self.min_y, point.y);
        self.max_x = num_traits::real::Real::max(self.max_x, point.x);
        self.max_y = num_traits::real::Real::max(self.max_y, point.y);
    }

    /// Overlapping region of two rectangles, `None` if they do not overlap.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.intersects(other) {
            return None;
        }

        Some(Rect {
            min_x: num_traits::real::Real::max(self.min_x, other.min_x),
            min_y: num_traits::real::Real::max(self.min_y, other.min_y),
            max_x: num_traits::real::Real::min(self.max_x, other.max_x),
            max_y: num_traits::real::Real::min(self.max_y, other.max_y),
        })
    }

    /// Rectangle grown by `amount` on every side (shrunk if negative).
    #[inline]
    pub fn padded(&self, amount: T) -> Self {
        Rect {
            min_x: self.min_x - amount,
            min_y: self.min_y - amount,
            max_x: self.max_x + amount,
            max_y: self.max_y + amount,
        }
    }

    #[inline]
    pub fn width(&self) -> T {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> T {
        self.max_y - self.min_y
    }

    #[inline]
    pub fn area(&self) -> T {
        self.width() * self.height()
    }

    #[inline]
    pub fn center(&self) -> Vector2<T> {
        Vector2::new(
            (self.min_x + self.max_x) / T::two(),
            (self.min_y + self.max_y) / T::two(),
        )
    }

    /// Corners in counter clockwise order starting at the minimum corner.
    pub fn corners(&self) -> [Vector2<T>; 4] {
        [
            Vector2::new(self.min_x, self.min_y),
            Vector2::new(self.max_x, self.min_y),
            Vector2::new(self.max_x, self.max_y),
            Vector2::new(self.min_x, self.max_y),
        ]
    }

    /// Test if `point` is inside or on the boundary, with `epsilon` tolerance.
    #[inline]
    pub fn contains_point_eps(&self, point: Vector2<T>, epsilon: T) -> bool {
        point.x >= self.min_x - epsilon
            && point.x <= self.max_x + epsilon
            && point.y >= self.min_y - epsilon
            && point.y <= self.max_y + epsilon
    }

    /// Same as [Rect::contains_point_eps] using [Real::pos_equal_eps].
    #[inline]
    pub fn contains_point(&self, point: Vector2<T>) -> bool {
        self.contains_point_eps(point, T::pos_equal_eps())
    }

    /// Test if `other` lies entirely inside this rectangle (boundaries may touch).
    #[inline]
    pub fn contains_rect(&self, other: &Self) -> bool {
        let eps = T::pos_equal_eps();
        other.min_x >= self.min_x - eps
            && other.max_x <= self.max_x + eps
            && other.min_y >= self.min_y - eps
            && other.max_y <= self.max_y + eps
    }

    /// Test if the rectangles overlap or touch, with `epsilon` tolerance.
    #[inline]
    pub fn intersects_eps(&self, other: &Self, epsilon: T) -> bool {
        !(self.max_x + epsilon < other.min_x
            || self.max_y + epsilon < other.min_y
            || self.min_x - epsilon > other.max_x
            || self.min_y - epsilon > other.max_y)
    }

    /// Same as [Rect::intersects_eps] using [Real::pos_equal_eps].
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.intersects_eps(other, T::pos_equal_eps())
    }

    /// Distance from `point` to the rectangle, zero if the point is inside.
    pub fn distance_to_point(&self, point: Vector2<T>) -> T {
        let dx = num_traits::real::Real::max(
            num_traits::real::Real::max(self.min_x - point.x, T::zero()),
            point.x - self.max_x,
        );
        let dy = num_traits::real::Real::max(
            num_traits::real::Real::max(self.min_y - point.y, T::zero()),
            point.y - self.max_y,
        );
        (dx * dx + dy * dy).sqrt()
    }

    /// Translate the rectangle by `offset`.
    #[inline]
    pub fn translate(&self, offset: Vector2<T>) -> Self {
        Rect {
            min_x: self.min_x + offset.x,
            min_y: self.min_y + offset.y,
            max_x: self.max_x + offset.x,
            max_y: self.max_y + offset.y,
        }
    }
}

impl<T> From<AABB<T>> for Rect<T>
where
    T: Real,
{
    #[inline]
    fn from(aabb: AABB<T>) -> Self {
        Rect {
            min_x: aabb.min_x,
            min_y: aabb.min_y,
            max_x: aabb.max_x,
            max_y: aabb.max_y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_orders_corners() {
        let r = Rect::new(3.0, -1.0, 1.0, 2.0);
        assert_eq!(r.min_x, 1.0);
        assert_eq!(r.max_x, 3.0);
        assert_eq!(r.min_y, -1.0);
        assert_eq!(r.max_y, 2.0);
        assert_eq!(r.area(), 6.0);
    }

    #[test]
    fn touching_rects_intersect() {
        let a = Rect::new(0.0, 0.0, 1.0, 1.0);
        let b = Rect::new(1.0, 0.0, 2.0, 1.0);
        let c = Rect::new(1.1, 0.0, 2.0, 1.0);
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
        assert_eq!(a.intersection(&b), Some(Rect::new(1.0, 0.0, 1.0, 1.0)));
        assert_eq!(a.intersection(&c), None);
    }

    #[test]
    fn distance_to_point() {
        let r = Rect::new(0.0, 0.0, 2.0, 2.0);
        assert_eq!(r.distance_to_point(Vector2::new(1.0, 1.0)), 0.0);
        assert_eq!(r.distance_to_point(Vector2::new(5.0, 1.0)), 3.0);
        assert_eq!(r.distance_to_point(Vector2::new(5.0, 6.0)), 5.0);
    }
}
