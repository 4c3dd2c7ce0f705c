mod test_utils;

use polyring::{
    polygon::Polygon,
    ring::{PolygonIndex, PolygonVertexEnum, PolygonsVertexEnum},
};
use test_utils::{all_addresses, square, square_ring, square_with_hole};

#[test]
fn vertex_walk_covers_every_ring() {
    let mut pgon = square_with_hole();
    pgon.add_interior_ring(square_ring(0.5, 3.25, 0.5)).unwrap();

    let forward: Vec<_> = PolygonVertexEnum::new(&pgon).collect();
    assert_eq!(forward.len(), pgon.unique_vertex_count());
    assert_eq!(forward[0], PolygonIndex::new(0, 0, 4));
    assert_eq!(forward[4], PolygonIndex::new_inner(0, 0, 0, 4));
    assert_eq!(forward[11], PolygonIndex::new_inner(0, 1, 3, 4));
    assert!(forward.iter().all(|i| i.is_current(&pgon)));
    assert_eq!(forward, all_addresses(&pgon));

    let mut reverse: Vec<_> = PolygonVertexEnum::new_reversed(&pgon).collect();
    reverse.reverse();
    assert_eq!(reverse, forward);
}

#[test]
fn vertex_walk_state() {
    let pgon = square(0.0, 0.0, 1.0);
    let mut walk = PolygonVertexEnum::with_options(&pgon, 3, false);
    assert_eq!(walk.current(), None);
    assert_eq!(walk.next(), Some(PolygonIndex::new(3, 0, 4)));
    assert_eq!(walk.current(), Some(PolygonIndex::new(3, 0, 4)));
    assert_eq!(walk.by_ref().count(), 3);
    assert_eq!(walk.current(), None);
    // stays finished
    assert_eq!(walk.next(), None);

    walk.reset();
    assert_eq!(walk.next(), Some(PolygonIndex::new(3, 0, 4)));
}

#[test]
fn multi_polygon_walk() {
    let polys = vec![square_with_hole(), square(10.0, 0.0, 1.0)];
    let forward: Vec<_> = PolygonsVertexEnum::new(&polys).collect();
    assert_eq!(forward.len(), 12);
    assert_eq!(forward[8], PolygonIndex::new(1, 0, 4));
    assert!(forward.iter().all(|i| i.point(&polys).is_some()));

    let mut reverse: Vec<_> = PolygonsVertexEnum::with_options(&polys, 0, true).collect();
    assert_eq!(reverse[0], PolygonIndex::new(1, 3, 4));
    reverse.reverse();
    assert_eq!(reverse, forward);

    let empty: Vec<Polygon> = Vec::new();
    assert_eq!(PolygonsVertexEnum::new(&empty).count(), 0);
}
