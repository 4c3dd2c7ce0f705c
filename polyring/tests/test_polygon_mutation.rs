mod test_utils;

use polyring::{
    assert_fuzzy_eq,
    core::{math::Vector2, traits::FuzzyEq},
    polygon::*,
    ring,
    ring::PolygonIndex,
    shapes::{OverlapType, Rect},
    PolygonError,
};
use test_utils::{
    all_addresses, index_matches_fresh, regular_ring, square, square_ring, square_with_hole,
    PolygonProperties,
};

fn v(x: f64, y: f64) -> Vector2<f64> {
    Vector2::new(x, y)
}

fn everywhere() -> Rect<f64> {
    Rect::new(-100.0, -100.0, 100.0, 100.0)
}

#[test]
fn insert_on_edge_then_remove_corners() {
    let mut pgon = square(0.0, 0.0, 4.0);
    let bottom = pgon.nearest_segment(v(2.0, -0.5)).index;
    assert_eq!(bottom, PolygonIndex::new(0, 0, 4));

    let added = pgon.insert_vertex(bottom, v(2.0, 0.0)).unwrap();
    assert_eq!(added, PolygonIndex::new(0, 1, 5));
    assert_eq!(pgon.unique_vertex_count(), 5);
    assert_fuzzy_eq!(pgon.area(), 16.0);
    assert!(pgon.is_valid());

    let mut a = pgon.clone();
    a.remove_vertex(PolygonIndex::new(0, 3, 5)).unwrap();
    assert_fuzzy_eq!(a.area(), 8.0);

    let mut b = pgon.clone();
    b.remove_vertex(PolygonIndex::new(0, 0, 5)).unwrap();
    assert_fuzzy_eq!(b.area(), 12.0);
    assert_eq!(b.exterior_ring()[0], v(2.0, 0.0));
    assert_eq!(b.exterior_ring()[4], v(2.0, 0.0));
    assert!(b.is_valid());
    assert!(index_matches_fresh(&b, &everywhere()));
}

#[test]
fn insert_then_remove_round_trip() {
    let mut pgon = square_with_hole();
    // build the index before the edit so it is patched rather than built afterwards
    let _ = pgon.segment_index();
    let before = PolygonProperties::from_polygon(&pgon);

    let added = pgon.add_vertex(v(2.0, 0.0)).unwrap();
    assert_ne!(PolygonProperties::from_polygon(&pgon), before);
    pgon.remove_vertex(added).unwrap();
    assert_eq!(PolygonProperties::from_polygon(&pgon), before);

    let added = pgon.add_vertex(v(2.0, 1.0)).unwrap();
    assert_eq!(added, PolygonIndex::new_inner(0, 0, 1, 5));
    pgon.remove_vertex(added).unwrap();
    assert_eq!(PolygonProperties::from_polygon(&pgon), before);
}

#[test]
fn insert_existing_point_is_noop() {
    let mut pgon = square_with_hole();
    let before = PolygonProperties::from_polygon(&pgon);

    let i = pgon
        .insert_vertex(PolygonIndex::new(0, 0, 4), v(4.0, 4.0))
        .unwrap();
    assert_eq!(i, PolygonIndex::new(0, 2, 4));

    // matching a hole vertex
    let i = pgon
        .insert_vertex(PolygonIndex::new(0, 0, 4), v(3.0, 1.0))
        .unwrap();
    assert_eq!(i, PolygonIndex::new_inner(0, 0, 1, 4));

    assert_eq!(PolygonProperties::from_polygon(&pgon), before);
}

#[test]
fn failed_insert_leaves_polygon_untouched() {
    let mut pgon = square_with_hole();
    let _ = pgon.segment_index();
    let before = PolygonProperties::from_polygon(&pgon);

    // the new edges would cross the top edge
    let err = pgon
        .insert_vertex(PolygonIndex::new(0, 0, 4), v(2.0, 6.0))
        .unwrap_err();
    assert!(matches!(err, PolygonError::InvalidResult { .. }));
    assert_eq!(PolygonProperties::from_polygon(&pgon), before);

    // the new edges would pass through the hole
    let err = pgon
        .insert_vertex(PolygonIndex::new(0, 0, 4), v(2.0, 2.0))
        .unwrap_err();
    assert_eq!(
        err,
        PolygonError::InvalidResult {
            reason: Box::new(PolygonError::HoleIntersectsExterior { hole: 0 })
        }
    );
    assert_eq!(PolygonProperties::from_polygon(&pgon), before);
    assert!(pgon.is_valid());
}

#[test]
fn winding_flip_rejected() {
    let mut tri = Polygon::new(ring![(0.0, 0.0), (4.0, 0.0), (0.0, 4.0)]).unwrap();
    let before = PolygonProperties::from_polygon(&tri);
    let err = tri
        .set_vertex(PolygonIndex::new(0, 1, 3), v(-1.0, 5.0))
        .unwrap_err();
    assert_eq!(err, PolygonError::WindingFlip);
    assert_eq!(PolygonProperties::from_polygon(&tri), before);
}

#[test]
fn remove_from_triangle_rejected() {
    let mut tri = Polygon::new(ring![(0.0, 0.0), (4.0, 0.0), (0.0, 4.0)]).unwrap();
    assert_eq!(
        tri.remove_vertex(PolygonIndex::new(0, 1, 3)).unwrap_err(),
        PolygonError::RingTooSmall { len: 2 }
    );
    assert_eq!(tri.unique_vertex_count(), 3);

    let mut pgon = Polygon::with_interior_rings(
        square_ring(0.0, 0.0, 10.0),
        vec![ring![(1.0, 1.0), (3.0, 1.0), (1.0, 3.0)]],
    )
    .unwrap();
    assert_eq!(
        pgon.remove_vertex(PolygonIndex::new_inner(0, 0, 0, 3))
            .unwrap_err(),
        PolygonError::RingTooSmall { len: 2 }
    );
}

#[test]
fn stale_and_bad_indexes_rejected() {
    let mut pgon = square(0.0, 0.0, 4.0);
    let stale = PolygonIndex::new(0, 1, 5);
    assert_eq!(
        pgon.remove_vertex(stale).unwrap_err(),
        PolygonError::InvalidIndex { index: stale }
    );
    let no_hole = PolygonIndex::new_inner(0, 0, 1, 4);
    assert_eq!(
        pgon.set_vertex(no_hole, v(1.0, 1.0)).unwrap_err(),
        PolygonError::InvalidIndex { index: no_hole }
    );

    // addresses taken before an insert are stale afterwards
    let old = PolygonIndex::new(0, 2, 4);
    pgon.add_vertex(v(2.0, 0.0)).unwrap();
    assert!(pgon.vertex(old).is_err());
    assert_eq!(pgon.vertex(PolygonIndex::new(0, 3, 5)).unwrap(), v(4.0, 4.0));
}

#[test]
fn set_vertex_moves_points() {
    let mut pgon = square(0.0, 0.0, 4.0);
    pgon.set_vertex(PolygonIndex::new(0, 2, 4), v(6.0, 6.0))
        .unwrap();
    assert_fuzzy_eq!(pgon.area(), 24.0);
    assert_eq!(pgon.bounding_rect(), Rect::new(0.0, 0.0, 6.0, 6.0));

    // moving the first vertex moves the closing point too
    let moved = pgon.set_vertex_at(v(0.1, 0.1), v(-1.0, -1.0)).unwrap();
    assert_eq!(moved, PolygonIndex::new(0, 0, 4));
    let ring = pgon.exterior_ring();
    assert_eq!(ring[0], v(-1.0, -1.0));
    assert_eq!(ring[4], v(-1.0, -1.0));
    assert!(pgon.is_valid());
    assert!(index_matches_fresh(&pgon, &everywhere()));
}

#[test]
fn hole_vertex_edits() {
    let mut pgon = square_with_hole();
    let _ = pgon.segment_index();

    pgon.set_vertex(PolygonIndex::new_inner(0, 0, 2, 4), v(3.5, 3.5))
        .unwrap();
    assert_eq!(pgon.contains_point(v(3.2, 3.2)), OverlapType::None);
    assert!(index_matches_fresh(&pgon, &everywhere()));

    let before = PolygonProperties::from_polygon(&pgon);
    let err = pgon
        .set_vertex(PolygonIndex::new_inner(0, 0, 2, 4), v(5.0, 5.0))
        .unwrap_err();
    assert_eq!(
        err,
        PolygonError::InvalidResult {
            reason: Box::new(PolygonError::HoleIntersectsExterior { hole: 0 })
        }
    );
    assert_eq!(PolygonProperties::from_polygon(&pgon), before);

    let removed = pgon.remove_vertex_at(v(1.0, 3.1)).unwrap();
    assert_eq!(removed, PolygonIndex::new_inner(0, 0, 3, 4));
    assert_eq!(pgon.interior_polygons()[0].unique_vertex_count(), 3);
    assert!(pgon.is_valid());
    assert!(index_matches_fresh(&pgon, &everywhere()));
}

#[test]
fn hole_edit_checks_siblings() {
    let mut pgon = Polygon::with_interior_rings(
        square_ring(0.0, 0.0, 10.0),
        vec![square_ring(1.0, 1.0, 2.0), square_ring(5.0, 1.0, 2.0)],
    )
    .unwrap();
    let before = PolygonProperties::from_polygon(&pgon);

    // stretch the first hole into the second
    let err = pgon
        .set_vertex(PolygonIndex::new_inner(0, 0, 1, 4), v(6.0, 1.5))
        .unwrap_err();
    assert!(matches!(err, PolygonError::InvalidResult { .. }));
    assert_eq!(PolygonProperties::from_polygon(&pgon), before);
}

#[test]
fn interior_ring_add_remove_replace() {
    let mut pgon = square(0.0, 0.0, 10.0);
    let _ = pgon.segment_index();

    assert_eq!(pgon.add_interior_ring(square_ring(1.0, 1.0, 2.0)).unwrap(), 0);
    assert_eq!(pgon.add_interior_ring(square_ring(5.0, 5.0, 2.0)).unwrap(), 1);
    assert_eq!(pgon.add_interior_ring(square_ring(1.0, 6.0, 1.0)).unwrap(), 2);
    assert_fuzzy_eq!(pgon.area(), 100.0 - 4.0 - 4.0 - 1.0);
    assert!(index_matches_fresh(&pgon, &everywhere()));

    let err = pgon
        .add_interior_ring(square_ring(2.0, 2.0, 2.0))
        .unwrap_err();
    assert_eq!(err, PolygonError::HoleIntersectsHole { hole: 3, other: 0 });
    assert_eq!(pgon.interior_polygons().len(), 3);

    let removed = pgon.remove_interior_ring(0).unwrap();
    assert_eq!(removed.exterior_ring()[0], v(1.0, 1.0));
    assert_eq!(pgon.interior_polygons().len(), 2);
    assert_eq!(pgon.ring(Some(0)).unwrap()[0], v(5.0, 5.0));
    assert!(index_matches_fresh(&pgon, &everywhere()));
    assert_eq!(
        pgon.remove_interior_ring(5).unwrap_err(),
        PolygonError::InvalidInteriorRing { inner: 5 }
    );

    let old = pgon
        .replace_interior_ring(1, ring![(1.0, 6.0), (3.0, 6.0), (2.0, 8.0)])
        .unwrap();
    assert_fuzzy_eq!(old.area(), 1.0);
    assert_fuzzy_eq!(pgon.area(), 100.0 - 4.0 - 2.0);
    assert!(index_matches_fresh(&pgon, &everywhere()));

    // replacement overlapping the other hole is rejected
    let before = PolygonProperties::from_polygon(&pgon);
    let err = pgon
        .replace_interior_ring(1, square_ring(4.0, 4.0, 2.0))
        .unwrap_err();
    assert_eq!(err, PolygonError::HoleIntersectsHole { hole: 1, other: 0 });
    assert_eq!(PolygonProperties::from_polygon(&pgon), before);

    assert!(pgon.try_remove_interior_ring(v(0.5, 0.5)).is_none());
    let hole = pgon.try_remove_interior_ring(v(6.0, 6.0)).unwrap();
    assert_fuzzy_eq!(hole.area(), 4.0);
    assert_eq!(pgon.interior_polygons().len(), 1);
    assert!(pgon.is_valid());
}

#[test]
fn bulk_hole_insert() {
    let mut pgon = square(0.0, 0.0, 10.0);
    pgon.add_interior_ring(square_ring(8.0, 8.0, 1.0)).unwrap();

    let added = pgon
        .add_interior_rings(vec![square_ring(1.0, 1.0, 1.0), square_ring(3.0, 3.0, 1.0)])
        .unwrap();
    assert_eq!(added, 1..3);

    // the batch is checked against the rings already present too
    let before = PolygonProperties::from_polygon(&pgon);
    let err = pgon
        .add_interior_rings(vec![square_ring(5.0, 5.0, 1.0), square_ring(7.5, 7.5, 1.0)])
        .unwrap_err();
    assert_eq!(err, PolygonError::HoleIntersectsHole { hole: 4, other: 0 });
    assert_eq!(PolygonProperties::from_polygon(&pgon), before);

    let err = pgon
        .add_interior_rings(vec![ring![(1.0, 5.0), (2.0, 5.0)]])
        .unwrap_err();
    assert!(matches!(err, PolygonError::TooFewPoints { .. }));
}

#[test]
fn many_edits_keep_index_consistent() {
    let mut pgon = Polygon::new(regular_ring(v(0.0, 0.0), 10.0, 40)).unwrap();
    let _ = pgon.segment_index();

    // densify every edge, then thin back out
    for k in 0..40 {
        let a = pgon.exterior_ring()[2 * k];
        let b = pgon.exterior_ring()[2 * k + 1];
        let mid = (a + b).scale(0.5);
        pgon.add_vertex(mid).unwrap();
    }
    assert_eq!(pgon.unique_vertex_count(), 80);
    assert!(pgon.is_valid());
    assert!(index_matches_fresh(&pgon, &everywhere()));
    assert!(index_matches_fresh(&pgon, &Rect::new(5.0, -1.0, 11.0, 1.0)));

    for _ in 0..40 {
        let len = pgon.unique_vertex_count();
        pgon.remove_vertex(PolygonIndex::new(0, len - 1, len)).unwrap();
    }
    assert_eq!(pgon.unique_vertex_count(), 40);
    assert!(pgon.is_valid());
    assert!(index_matches_fresh(&pgon, &everywhere()));

    let addresses = all_addresses(&pgon);
    assert_eq!(addresses.len(), 40);
    assert!(addresses.iter().all(|i| pgon.vertex(*i).is_ok()));
}
