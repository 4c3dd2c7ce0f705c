mod test_utils;

use polyring::{
    core::math::Vector2,
    shapes::{shapes_intersect, Circle, LineSeg, Rect, Shape, Shape2D, Triangle},
};
use test_utils::{square, square_with_hole};

fn v(x: f64, y: f64) -> Vector2<f64> {
    Vector2::new(x, y)
}

fn tri(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> Triangle<f64> {
    Triangle::new(v(a.0, a.1), v(b.0, b.1), v(c.0, c.1)).unwrap()
}

#[test]
fn shapes_against_polygon_with_hole() {
    let pgon = square_with_hole();

    assert!(pgon.intersects_shape(&v(0.5, 0.5)));
    assert!(!pgon.intersects_shape(&v(2.0, 2.0)));
    assert!(pgon.intersects_shape(&v(1.0, 2.0)));

    let in_hole = LineSeg::new(v(1.5, 2.0), v(2.5, 2.0)).unwrap();
    assert!(!in_hole.intersects_shape(&pgon));
    let out_of_hole = LineSeg::new(v(1.5, 2.0), v(3.5, 2.0)).unwrap();
    assert!(out_of_hole.intersects_shape(&pgon));

    assert!(!Rect::new(1.5, 1.5, 2.5, 2.5).intersects_shape(&pgon));
    assert!(Rect::new(3.5, 3.5, 5.0, 5.0).intersects_shape(&pgon));
    // covers the whole polygon, no polygon vertex is needed inside the polygon itself
    assert!(Rect::new(-1.0, -1.0, 5.0, 5.0).intersects_shape(&pgon));

    assert!(!Circle::new(v(2.0, 2.0), 0.5).intersects_shape(&pgon));
    assert!(Circle::new(v(2.0, 2.0), 10.0).intersects_shape(&pgon));
    assert!(!Circle::new(v(6.0, 2.0), 1.5).intersects_shape(&pgon));

    assert!(!tri((1.5, 1.5), (2.5, 1.5), (1.5, 2.5)).intersects_shape(&pgon));
    assert!(tri((3.5, 3.5), (5.0, 3.5), (3.5, 5.0)).intersects_shape(&pgon));
}

#[test]
fn primitive_pairs() {
    let t = tri((0.0, 0.0), (4.0, 0.0), (0.0, 4.0));
    assert!(t.intersects_shape(&Rect::new(1.0, 1.0, 5.0, 5.0)));
    assert!(!t.intersects_shape(&Rect::new(3.0, 3.0, 5.0, 5.0)));
    assert!(t.intersects_shape(&Circle::new(v(3.0, 3.0), 1.5)));
    assert!(!t.intersects_shape(&Circle::new(v(3.0, 3.0), 1.0)));
    assert!(t.intersects_shape(&tri((1.0, 1.0), (5.0, 1.0), (5.0, 5.0))));
    assert!(t.intersects_shape(&v(2.0, 2.0)));

    let s = LineSeg::new(v(-1.0, 2.0), v(5.0, 2.0)).unwrap();
    assert!(s.intersects_shape(&Rect::new(0.0, 0.0, 1.0, 4.0)));
    assert!(!s.intersects_shape(&Rect::new(0.0, 3.0, 1.0, 4.0)));
}

#[test]
fn dispatch_is_symmetric() {
    let holed = square_with_hole();
    let island = square(1.5, 1.5, 1.0);
    let apart = square(10.0, 0.0, 1.0);
    let shapes = [
        Shape::Point(v(0.5, 0.5)),
        Shape::Point(v(2.0, 2.0)),
        Shape::Segment(LineSeg::new(v(-1.0, 2.0), v(5.0, 2.0)).unwrap()),
        Shape::Rect(Rect::new(1.25, 1.25, 2.75, 2.75)),
        Shape::Circle(Circle::new(v(10.5, 0.5), 2.0)),
        Shape::Triangle(tri((0.0, 5.0), (12.0, 5.0), (6.0, 10.0))),
        Shape::Polygon(&holed),
        Shape::Polygon(&island),
        Shape::Polygon(&apart),
    ];

    for a in shapes.iter() {
        assert!(shapes_intersect(a, a), "{:?} against itself", a);
        for b in shapes.iter() {
            assert_eq!(
                shapes_intersect(a, b),
                shapes_intersect(b, a),
                "{:?} against {:?}",
                a,
                b
            );
        }
    }

    assert!(!shapes_intersect(&shapes[6], &shapes[7]));
    assert!(shapes_intersect(&shapes[3], &shapes[7]));
    assert!(!shapes_intersect(&shapes[3], &shapes[6]));
    assert!(shapes_intersect(&shapes[4], &shapes[8]));
    assert!(!shapes_intersect(&shapes[5], &shapes[6]));
}
