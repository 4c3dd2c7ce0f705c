mod test_utils;

use polyring::{
    core::math::Vector2,
    polygon::Polygon,
    ring::{PolygonIndex, PolygonLookup},
};
use std::collections::{BTreeMap, HashMap};
use test_utils::{square, square_with_hole};

fn v(x: f64, y: f64) -> Vector2<f64> {
    Vector2::new(x, y)
}

#[test]
fn lookup_through_collections() {
    let polys = vec![square(0.0, 0.0, 4.0), square(10.0, 0.0, 4.0)];
    let i = PolygonIndex::new(1, 1, 4);
    assert_eq!(i.point(&polys), Some(v(14.0, 0.0)));
    assert_eq!(i.point(polys.as_slice()), Some(v(14.0, 0.0)));
    assert!(PolygonIndex::new(2, 0, 4).point(&polys).is_none());

    let mut map: HashMap<usize, Polygon> = HashMap::new();
    map.insert(7, square_with_hole());
    let hole_corner = PolygonIndex::new_inner(7, 0, 2, 4);
    assert_eq!(hole_corner.point(&map), Some(v(3.0, 3.0)));
    assert!(hole_corner.is_current(&map));
    assert!(hole_corner.reindex(6).point(&map).is_none());

    let tree: BTreeMap<usize, Polygon> = map.into_iter().collect();
    assert_eq!(hole_corner.point(&tree), Some(v(3.0, 3.0)));
    assert_eq!(
        hole_corner.polygon(&tree).map(|p| p.area()),
        Some(4.0)
    );
    assert!(tree.lookup_polygon(7).is_some());
}

#[test]
fn connected_features() {
    let pgon = square(0.0, 0.0, 4.0);
    let first = PolygonIndex::new(0, 0, 4);
    assert_eq!(
        first.connected_points(&pgon),
        Some([v(0.0, 4.0), v(4.0, 0.0)])
    );

    let [into, out_of] = first.connected_segments(&pgon).unwrap();
    assert_eq!(into.a(), v(0.0, 4.0));
    assert_eq!(into.b(), v(0.0, 0.0));
    assert_eq!(out_of.b(), v(4.0, 0.0));

    let last = first.last_in_ring();
    assert_eq!(last.segment(&pgon).map(|s| s.b()), Some(v(0.0, 0.0)));
    assert!(last.is_border_line(&first));
    assert!(!last.is_border_line(&PolygonIndex::new(0, 1, 4)));
}

#[test]
fn addresses_go_stale_on_edit() {
    let mut pgon = square_with_hole();
    let ext = PolygonIndex::new(0, 3, 4);
    let hole = PolygonIndex::new_inner(0, 0, 3, 4);
    assert!(ext.is_current(&pgon));
    assert!(hole.is_current(&pgon));

    pgon.add_vertex(v(2.0, 0.0)).unwrap();
    assert!(!ext.is_current(&pgon));
    assert!(hole.is_current(&pgon));

    let refreshed = ext.reindex_to_current_size(&pgon).unwrap();
    assert_eq!(refreshed, PolygonIndex::new(0, 3, 5));
    // same position in the longer ring
    assert_eq!(refreshed.point(&pgon), Some(v(4.0, 4.0)));

    pgon.remove_interior_ring(0).unwrap();
    assert!(!hole.is_current(&pgon));
    assert!(hole.reindex_to_current_size(&pgon).is_none());
}

#[test]
fn sort_by_ring_groups_and_keeps_runs() {
    let ext = |v| PolygonIndex::new(0, v, 5);
    let hole = |v| PolygonIndex::new_inner(0, 0, v, 4);
    let other = |v| PolygonIndex::new(1, v, 3);

    let sorted = PolygonIndex::sort_by_ring(vec![
        other(2),
        hole(3),
        ext(4),
        hole(0),
        ext(0),
        other(0),
        ext(1),
    ]);
    assert_eq!(
        sorted,
        vec![
            ext(4),
            ext(0),
            ext(1),
            hole(3),
            hole(0),
            other(2),
            other(0),
        ]
    );
}
