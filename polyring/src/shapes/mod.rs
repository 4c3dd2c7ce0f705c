//! Primitive shapes and the pairwise intersection dispatch shared by every shape, polygons
//! included.
mod circle;
mod rect;
mod segment;
mod triangle;

pub use circle::Circle;
pub use rect::Rect;
pub use segment::{LineSeg, SegIntersect};
pub use triangle::Triangle;

use crate::{
    core::{math::Vector2, traits::Real},
    polygon::Polygon,
};

/// Three valued result of a containment test.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum OverlapType {
    /// Point is outside the shape.
    None,
    /// Point lies on the shape boundary (within tolerance).
    Touching,
    /// Point is strictly inside the shape.
    Contained,
}

impl OverlapType {
    /// True for [OverlapType::Touching] and [OverlapType::Contained].
    #[inline]
    pub fn is_inside_or_touching(self) -> bool {
        !matches!(self, OverlapType::None)
    }
}

/// Borrowed view of any shape, used to dispatch pairwise intersection tests.
#[derive(Debug, Copy, Clone)]
pub enum Shape<'a, T = f64>
where
    T: Real,
{
    Point(Vector2<T>),
    Segment(LineSeg<T>),
    Rect(Rect<T>),
    Circle(Circle<T>),
    Triangle(Triangle<T>),
    Polygon(&'a Polygon<T>),
}

impl<'a, T> Shape<'a, T>
where
    T: Real,
{
    pub fn bounding_rect(&self) -> Rect<T> {
        match self {
            Shape::Point(p) => Rect::from_point(*p),
            Shape::Segment(s) => s.bounding_rect(),
            Shape::Rect(r) => *r,
            Shape::Circle(c) => c.bounding_rect(),
            Shape::Triangle(t) => t.bounding_rect(),
            Shape::Polygon(p) => p.bounding_rect(),
        }
    }

    // order used to fold the symmetric pair table in half
    fn rank(&self) -> u8 {
        match self {
            Shape::Point(_) => 0,
            Shape::Segment(_) => 1,
            Shape::Rect(_) => 2,
            Shape::Circle(_) => 3,
            Shape::Triangle(_) => 4,
            Shape::Polygon(_) => 5,
        }
    }
}

/// Common interface of every shape type.
pub trait Shape2D<T>
where
    T: Real,
{
    /// Axis aligned bounding box.
    fn bounding_rect(&self) -> Rect<T>;

    /// Borrowed [Shape] view used for intersection dispatch.
    fn as_shape(&self) -> Shape<'_, T>;

    /// Test if this shape touches or overlaps `other`.
    ///
    /// Bounding boxes are compared first, the shape specific test only runs when they overlap.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polyring::shapes::*;
    /// # use polyring::core::math::*;
    /// let circle = Circle::new(Vector2::new(0.0, 0.0), 1.0);
    /// let rect = Rect::new(0.5, 0.5, 2.0, 2.0);
    /// assert!(circle.intersects_shape(&rect));
    /// assert!(!circle.intersects_shape(&Vector2::new(1.0, 1.0)));
    /// ```
    fn intersects_shape<S>(&self, other: &S) -> bool
    where
        S: Shape2D<T> + ?Sized,
    {
        shapes_intersect(&self.as_shape(), &other.as_shape())
    }
}

impl<T> Shape2D<T> for Vector2<T>
where
    T: Real,
{
    fn bounding_rect(&self) -> Rect<T> {
        Rect::from_point(*self)
    }

    fn as_shape(&self) -> Shape<'_, T> {
        Shape::Point(*self)
    }
}

impl<T> Shape2D<T> for LineSeg<T>
where
    T: Real,
{
    fn bounding_rect(&self) -> Rect<T> {
        LineSeg::bounding_rect(self)
    }

    fn as_shape(&self) -> Shape<'_, T> {
        Shape::Segment(*self)
    }
}

impl<T> Shape2D<T> for Rect<T>
where
    T: Real,
{
    fn bounding_rect(&self) -> Rect<T> {
        *self
    }

    fn as_shape(&self) -> Shape<'_, T> {
        Shape::Rect(*self)
    }
}

impl<T> Shape2D<T> for Circle<T>
where
    T: Real,
{
    fn bounding_rect(&self) -> Rect<T> {
        Circle::bounding_rect(self)
    }

    fn as_shape(&self) -> Shape<'_, T> {
        Shape::Circle(*self)
    }
}

impl<T> Shape2D<T> for Triangle<T>
where
    T: Real,
{
    fn bounding_rect(&self) -> Rect<T> {
        Triangle::bounding_rect(self)
    }

    fn as_shape(&self) -> Shape<'_, T> {
        Shape::Triangle(*self)
    }
}

impl<T> Shape2D<T> for Polygon<T>
where
    T: Real,
{
    fn bounding_rect(&self) -> Rect<T> {
        Polygon::bounding_rect(self)
    }

    fn as_shape(&self) -> Shape<'_, T> {
        Shape::Polygon(self)
    }
}

/// Test if two shapes touch or overlap.
///
/// Every pair is rejected early when the bounding boxes do not overlap.
pub fn shapes_intersect<T>(a: &Shape<'_, T>, b: &Shape<'_, T>) -> bool
where
    T: Real,
{
    if !a.bounding_rect().intersects(&b.bounding_rect()) {
        return false;
    }

    let (a, b) = if a.rank() <= b.rank() { (a, b) } else { (b, a) };

    use Shape::*;
    match (a, b) {
        (Point(p1), Point(p2)) => p1 == p2,
        (Point(p), Segment(s)) => s.contains_point(*p),
        (Point(p), Rect(r)) => r.contains_point(*p),
        (Point(p), Circle(c)) => c.contains_point(*p).is_inside_or_touching(),
        (Point(p), Triangle(t)) => t.contains(*p),
        (Point(p), Polygon(poly)) => poly.contains_point(*p).is_inside_or_touching(),

        (Segment(s1), Segment(s2)) => s1.intersects(s2),
        (Segment(s), Rect(r)) => {
            r.contains_point(s.a())
                || r.contains_point(s.b())
                || rect_edges(r).iter().any(|e| e.intersects(s))
        }
        (Segment(s), Circle(c)) => c.intersects_segment(s),
        (Segment(s), Triangle(t)) => {
            t.contains(s.a()) || t.contains(s.b()) || t.segments().iter().any(|e| e.intersects(s))
        }
        (Segment(s), Polygon(poly)) => poly.intersects_segment(s),

        (Rect(r1), Rect(r2)) => r1.intersects(r2),
        (Rect(r), Circle(c)) => c.intersects_rect(r),
        (Rect(r), Triangle(t)) => convex_intersect(
            &r.corners(),
            &rect_edges(r),
            |p| r.contains_point(p),
            t.points(),
            &t.segments(),
            |p| t.contains(p),
        ),
        (Rect(r), Polygon(poly)) => {
            polygon_intersects_convex(poly, &r.corners(), &rect_edges(r), |p| r.contains_point(p))
        }

        (Circle(c1), Circle(c2)) => c1.intersects_circle(c2),
        (Circle(c), Triangle(t)) => {
            t.contains(c.center) || t.segments().iter().any(|e| c.intersects_segment(e))
        }
        (Circle(c), Polygon(poly)) => {
            poly.contains_point(c.center).is_inside_or_touching()
                || poly.distance_to_point(c.center) <= c.radius + T::pos_equal_eps()
        }

        (Triangle(t1), Triangle(t2)) => convex_intersect(
            t1.points(),
            &t1.segments(),
            |p| t1.contains(p),
            t2.points(),
            &t2.segments(),
            |p| t2.contains(p),
        ),
        (Triangle(t), Polygon(poly)) => {
            polygon_intersects_convex(poly, t.points(), &t.segments(), |p| t.contains(p))
        }

        (Polygon(p1), Polygon(p2)) => p1.intersects_polygon(p2),

        // pairs are ordered by rank above
        _ => unreachable!("shape pair not ordered by rank"),
    }
}

/// Edges of a rectangle, degenerate (zero length) edges are skipped.
fn rect_edges<T>(rect: &Rect<T>) -> Vec<LineSeg<T>>
where
    T: Real,
{
    let c = rect.corners();
    (0..4)
        .filter_map(|i| LineSeg::new(c[i], c[(i + 1) % 4]).ok())
        .collect()
}

fn convex_intersect<T, F1, F2>(
    points1: &[Vector2<T>],
    edges1: &[LineSeg<T>],
    contains1: F1,
    points2: &[Vector2<T>],
    edges2: &[LineSeg<T>],
    contains2: F2,
) -> bool
where
    T: Real,
    F1: Fn(Vector2<T>) -> bool,
    F2: Fn(Vector2<T>) -> bool,
{
    points1.iter().any(|&p| contains2(p))
        || points2.iter().any(|&p| contains1(p))
        || edges1
            .iter()
            .any(|e1| edges2.iter().any(|e2| e1.intersects(e2)))
}

fn polygon_intersects_convex<T, F>(
    poly: &Polygon<T>,
    points: &[Vector2<T>],
    edges: &[LineSeg<T>],
    contains: F,
) -> bool
where
    T: Real,
    F: Fn(Vector2<T>) -> bool,
{
    points
        .iter()
        .any(|&p| poly.contains_point(p).is_inside_or_touching())
        || contains(poly.exterior_ring()[0])
        || edges.iter().any(|e| poly.intersects_segment(e))
}
