mod test_utils;

use polyring::{
    assert_fuzzy_eq,
    core::{math::Vector2, traits::FuzzyEq},
    polygon::*,
    ring,
    ring::PolygonIndex,
    shapes::Rect,
    PolygonError,
};
use test_utils::{comb_ring, regular_ring, square, square_ring, square_with_hole};

#[test]
fn square_measures() {
    let pgon = square(0.0, 0.0, 4.0);
    assert_fuzzy_eq!(pgon.area(), 16.0);
    assert_fuzzy_eq!(pgon.exterior_area(), 16.0);
    assert_fuzzy_eq!(pgon.perimeter(), 16.0);
    assert_eq!(pgon.centroid(), Vector2::new(2.0, 2.0));
    assert_eq!(pgon.bounding_rect(), Rect::new(0.0, 0.0, 4.0, 4.0));
    assert_eq!(pgon.total_vertex_count(), 5);
    assert_eq!(pgon.unique_vertex_count(), 4);
    assert_eq!(pgon.segments().len(), 4);
    assert_eq!(pgon.segment_count(), 4);
    assert!(pgon.is_valid());
}

#[test]
fn clockwise_ring_is_rewound() {
    let cw = ring![(0.0, 0.0), (0.0, 4.0), (4.0, 4.0), (4.0, 0.0)];
    let pgon = Polygon::new(cw).unwrap();
    assert_fuzzy_eq!(pgon.area(), 16.0);
    assert!(!polyring::ring::ring_is_clockwise(pgon.exterior_ring()));
    assert_eq!(pgon.exterior_ring()[0], pgon.exterior_ring()[4]);
}

#[test]
fn rejects_too_few_points() {
    let err = Polygon::new(ring![(0.0, 0.0), (1.0, 0.0)]).unwrap_err();
    assert_eq!(
        err,
        PolygonError::TooFewPoints {
            unique: 2,
            required: 3
        }
    );

    let err = Polygon::<f64>::new(vec![Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0)]).unwrap_err();
    assert!(matches!(err, PolygonError::TooFewPoints { .. }));
}

#[test]
fn rejects_unclosed_ring() {
    let open = vec![
        Vector2::new(0.0, 0.0),
        Vector2::new(4.0, 0.0),
        Vector2::new(4.0, 4.0),
        Vector2::new(0.0, 4.0),
    ];
    assert_eq!(Polygon::new(open).unwrap_err(), PolygonError::RingNotClosed);
}

#[test]
fn rejects_duplicate_vertex() {
    let dup = ring![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (4.0, 0.0), (0.0, 4.0)];
    assert!(matches!(
        Polygon::new(dup).unwrap_err(),
        PolygonError::DuplicateVertex { .. }
    ));
}

#[test]
fn rejects_self_intersection() {
    let bow_tie = ring![(0.0, 0.0), (4.0, 4.0), (4.0, 0.0), (0.0, 4.0)];
    assert_eq!(
        Polygon::new(bow_tie).unwrap_err(),
        PolygonError::SelfIntersecting
    );

    // large ring folding back over itself far from its neighbors
    let mut big = regular_ring(Vector2::new(0.0, 0.0), 10.0, 64);
    big[32] = Vector2::new(20.0, 0.5);
    assert_eq!(Polygon::new(big).unwrap_err(), PolygonError::SelfIntersecting);
}

#[test]
fn square_with_hole_measures() {
    let pgon = square_with_hole();
    assert_fuzzy_eq!(pgon.area(), 12.0);
    assert_fuzzy_eq!(pgon.exterior_area(), 16.0);
    assert!(pgon.has_interior_rings());
    assert_eq!(pgon.interior_polygons().len(), 1);
    assert_eq!(pgon.interior_rings().count(), 1);
    assert_eq!(pgon.total_vertex_count(), 10);
    assert_eq!(pgon.unique_vertex_count(), 8);
    assert_eq!(pgon.segment_count(), 8);
    assert_eq!(pgon.all_segments().count(), 8);
    assert!(pgon.is_valid());
}

#[test]
fn hole_errors() {
    let outer = square_ring(0.0, 0.0, 4.0);

    let err = Polygon::with_interior_rings(outer.clone(), vec![square_ring(3.0, 1.0, 2.0)])
        .unwrap_err();
    assert_eq!(err, PolygonError::HoleIntersectsExterior { hole: 0 });

    let err = Polygon::with_interior_rings(outer.clone(), vec![square_ring(10.0, 10.0, 1.0)])
        .unwrap_err();
    assert_eq!(err, PolygonError::HoleOutsideExterior { hole: 0 });

    // hole sharing an edge with the exterior ring touches it
    let err = Polygon::with_interior_rings(outer.clone(), vec![square_ring(0.0, 1.0, 1.0)])
        .unwrap_err();
    assert_eq!(err, PolygonError::HoleIntersectsExterior { hole: 0 });

    let err = Polygon::with_interior_rings(
        outer.clone(),
        vec![square_ring(0.5, 0.5, 2.0), square_ring(1.5, 1.5, 2.0)],
    )
    .unwrap_err();
    assert_eq!(err, PolygonError::HoleIntersectsHole { hole: 1, other: 0 });

    // nested holes without crossings
    let err = Polygon::with_interior_rings(
        outer,
        vec![square_ring(0.5, 0.5, 3.0), square_ring(1.5, 1.5, 1.0)],
    )
    .unwrap_err();
    assert_eq!(err, PolygonError::HoleIntersectsHole { hole: 1, other: 0 });
}

#[test]
fn nested_hole_polygon_rejected() {
    let mut pgon = square(0.0, 0.0, 10.0);
    let holey = Polygon::with_interior_rings(
        square_ring(1.0, 1.0, 4.0),
        vec![square_ring(2.0, 2.0, 1.0)],
    )
    .unwrap();
    assert_eq!(
        pgon.add_interior_polygon(holey).unwrap_err(),
        PolygonError::NestedHoles
    );
    assert!(!pgon.has_interior_rings());
}

#[test]
fn validate_sibling_flag() {
    let pgon = Polygon::with_interior_rings(
        square_ring(0.0, 0.0, 10.0),
        vec![square_ring(1.0, 1.0, 2.0), square_ring(5.0, 5.0, 2.0)],
    )
    .unwrap();
    assert!(pgon.validate_opt(&ValidateOptions::new()).is_ok());
    assert!(pgon
        .validate_opt(&ValidateOptions::without_sibling_holes())
        .is_ok());
    assert!(pgon.validate_interior(1, &ValidateOptions::new()).is_ok());
    assert_eq!(
        pgon.validate_interior(2, &ValidateOptions::new()),
        Err(PolygonError::InvalidInteriorRing { inner: 2 })
    );
}

#[test]
fn structural_equality() {
    let a = square_with_hole();
    let b = square_with_hole();
    assert_eq!(a, b);

    let c = square(0.0, 0.0, 4.0);
    assert_ne!(a, c);

    // same points starting at a different vertex are a different ring
    let rotated = Polygon::new(ring![(4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (0.0, 0.0)]).unwrap();
    assert_ne!(c, rotated);
    assert_fuzzy_eq!(c.area(), rotated.area());
}

#[test]
fn ring_and_vertex_access() {
    let pgon = square_with_hole();
    assert_eq!(pgon.ring(None).unwrap().len(), 5);
    assert_eq!(pgon.ring(Some(0)).unwrap()[0], Vector2::new(1.0, 1.0));
    assert!(pgon.ring(Some(1)).is_none());
    assert_eq!(pgon.ring_segments(Some(0)).unwrap().len(), 4);

    let v = pgon.vertex(PolygonIndex::new_inner(0, 0, 2, 4)).unwrap();
    assert_eq!(v, Vector2::new(3.0, 3.0));

    // stale ring length
    let stale = PolygonIndex::new(0, 1, 5);
    assert_eq!(
        pgon.vertex(stale).unwrap_err(),
        PolygonError::InvalidIndex { index: stale }
    );

    let seg = pgon.segment_at(PolygonIndex::new(0, 3, 4)).unwrap();
    assert_eq!(seg.a(), Vector2::new(0.0, 4.0));
    assert_eq!(seg.b(), Vector2::new(0.0, 0.0));
}

#[test]
fn lazy_segment_index() {
    let fresh = Polygon::new(square_ring(0.0, 0.0, 4.0)).unwrap();
    // construction validates, which builds the index
    assert!(fresh.is_segment_index_built());
    assert_eq!(fresh.segment_index().len(), 4);
    let hits = fresh.segments_in_rect(&Rect::new(-1.0, -1.0, 5.0, 0.5));
    // bottom edge plus the two side edges reaching down to y = 0
    assert_eq!(hits.len(), 3);
}

#[test]
fn vertex_convexity() {
    let comb = Polygon::new(comb_ring(2, 2.0)).unwrap();
    let len = comb.unique_vertex_count();
    let convexity: Vec<_> = (0..len)
        .map(|v| comb.vertex_convexity(PolygonIndex::new(0, v, len)).unwrap())
        .collect();
    // (0,0) and (4,0) are convex corners, (2,1) between the teeth is concave
    assert_eq!(convexity[0], VertexConvexity::Convex);
    assert_eq!(convexity[1], VertexConvexity::Convex);
    assert_eq!(convexity[6], VertexConvexity::Concave);

    let pgon = square_with_hole();
    // hole corners point into the hole so they are concave for the polygon area
    assert_eq!(
        pgon.vertex_convexity(PolygonIndex::new_inner(0, 0, 0, 4))
            .unwrap(),
        VertexConvexity::Concave
    );

    let flat = Polygon::new(ring![(0.0, 0.0), (2.0, 0.0), (4.0, 0.0), (4.0, 4.0)]).unwrap();
    assert_eq!(
        flat.vertex_convexity(PolygonIndex::new(0, 1, 4)).unwrap(),
        VertexConvexity::Collinear
    );
}

#[test]
fn convex_hull_and_inscribed_circle() {
    let comb = Polygon::new(comb_ring(2, 2.0)).unwrap();
    let hull = comb.convex_hull_indices();
    let hull_points: Vec<_> = hull.iter().map(|&i| comb.exterior_ring()[i]).collect();
    assert!(hull_points.contains(&Vector2::new(0.0, 0.0)));
    assert!(hull_points.contains(&Vector2::new(4.0, 0.0)));
    assert!(hull_points.contains(&Vector2::new(0.0, 3.0)));
    assert!(!hull_points.contains(&Vector2::new(2.0, 1.0)));

    let pgon = square(0.0, 0.0, 4.0);
    let circle = pgon.inscribed_circle();
    assert_eq!(circle.center, Vector2::new(2.0, 2.0));
    assert_fuzzy_eq!(circle.radius, 8.0_f64.sqrt());
}

#[test]
fn f32_polygon() {
    let pgon = Polygon::<f32>::new(vec![
        Vector2::new(0.0f32, 0.0),
        Vector2::new(2.0, 0.0),
        Vector2::new(0.0, 2.0),
        Vector2::new(0.0, 0.0),
    ])
    .unwrap();
    assert_fuzzy_eq!(pgon.area(), 2.0f32);
}

#[test]
fn transforms_validate_result() {
    let pgon = square_with_hole();

    let moved = pgon.translate(Vector2::new(10.0, -5.0)).unwrap();
    assert_fuzzy_eq!(moved.area(), 12.0);
    assert!(moved.centroid().fuzzy_eq(Vector2::new(12.0, -3.0)));

    let turned = pgon
        .rotate(std::f64::consts::FRAC_PI_2, Some(Vector2::new(0.0, 0.0)))
        .unwrap();
    assert_fuzzy_eq!(turned.area(), 12.0);
    assert!(turned.is_valid());

    // mirrored rings are rewound
    let mirrored = pgon.scale_xy(Vector2::new(-1.0, 1.0), None).unwrap();
    assert_fuzzy_eq!(mirrored.area(), 12.0);
    assert!(mirrored.is_valid());

    let doubled = pgon.scale(2.0, None).unwrap();
    assert_fuzzy_eq!(doubled.area(), 48.0);

    // collapsing scales fail instead of returning a broken polygon
    let square = square(0.0, 0.0, 4.0);
    assert!(matches!(
        square.scale(1e-7, None),
        Err(PolygonError::InvalidResult { .. })
    ));
    assert!(matches!(
        square.scale(0.0, None),
        Err(PolygonError::InvalidResult { .. })
    ));
    assert!(matches!(
        square.scale_xy(Vector2::new(1.0, 0.0), None),
        Err(PolygonError::InvalidResult { .. })
    ));
}
