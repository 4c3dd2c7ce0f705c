#![allow(dead_code)]

use polyring::{
    core::math::Vector2, polygon::Polygon, ring, ring::PolygonIndex, shapes::Rect,
};

/// Closed axis aligned square ring with lower left corner at (`x`, `y`).
pub fn square_ring(x: f64, y: f64, size: f64) -> Vec<Vector2<f64>> {
    ring![(x, y), (x + size, y), (x + size, y + size), (x, y + size)]
}

pub fn square(x: f64, y: f64, size: f64) -> Polygon<f64> {
    Polygon::new(square_ring(x, y, size)).unwrap()
}

/// 4 x 4 square at the origin with a centered 2 x 2 square hole.
pub fn square_with_hole() -> Polygon<f64> {
    Polygon::with_interior_rings(square_ring(0.0, 0.0, 4.0), vec![square_ring(1.0, 1.0, 2.0)])
        .unwrap()
}

/// 10 x 10 square at the origin with a U shaped hole opening upwards: a bottom bar from y = 2 to
/// y = 4 and two arms, x in [2, 4] and [6, 8], reaching up to y = 8.
pub fn square_with_u_hole() -> Polygon<f64> {
    Polygon::with_interior_rings(
        square_ring(0.0, 0.0, 10.0),
        vec![ring![
            (2.0, 2.0),
            (8.0, 2.0),
            (8.0, 8.0),
            (6.0, 8.0),
            (6.0, 4.0),
            (4.0, 4.0),
            (4.0, 8.0),
            (2.0, 8.0)
        ]],
    )
    .unwrap()
}

/// Closed regular polygon ring (counter clockwise) with `n` vertexes, the first on the +x axis.
pub fn regular_ring(center: Vector2<f64>, radius: f64, n: usize) -> Vec<Vector2<f64>> {
    let mut points: Vec<Vector2<f64>> = (0..n)
        .map(|i| {
            let angle = std::f64::consts::TAU * (i as f64) / (n as f64);
            Vector2::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect();
    points.push(points[0]);
    points
}

/// Comb shaped ring: a base bar from x = 0 to x = 2 * `teeth` with `teeth` unit wide teeth of
/// height `height` rising from it, so there are teeth at x in [2k, 2k + 1].
pub fn comb_ring(teeth: usize, height: f64) -> Vec<Vector2<f64>> {
    let width = 2.0 * teeth as f64;
    let mut points = vec![Vector2::new(0.0, 0.0), Vector2::new(width, 0.0)];
    // walk back along the top from right to left
    points.push(Vector2::new(width, 1.0));
    for k in (0..teeth).rev() {
        let x0 = 2.0 * k as f64;
        points.push(Vector2::new(x0 + 1.0, 1.0));
        points.push(Vector2::new(x0 + 1.0, 1.0 + height));
        points.push(Vector2::new(x0, 1.0 + height));
        if k > 0 {
            points.push(Vector2::new(x0, 1.0));
        }
    }
    points.push(points[0]);
    points
}

/// Bit exact snapshot of everything observable about a polygon, used to assert a failed edit
/// left no trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolygonProperties {
    pub rings: Vec<Vec<[u64; 2]>>,
    pub area: u64,
    pub centroid: [u64; 2],
    pub bounding_rect: [u64; 4],
    pub index_hits: Vec<PolygonIndex>,
}

fn bits(p: Vector2<f64>) -> [u64; 2] {
    [p.x.to_bits(), p.y.to_bits()]
}

impl PolygonProperties {
    pub fn from_polygon(pgon: &Polygon<f64>) -> Self {
        let rings = std::iter::once(pgon.exterior_ring())
            .chain(pgon.interior_rings())
            .map(|r| r.iter().map(|&p| bits(p)).collect())
            .collect();
        let r = pgon.bounding_rect();
        let mut index_hits = pgon.segments_in_rect(&r.padded(1.0));
        index_hits.sort();

        Self {
            rings,
            area: pgon.area().to_bits(),
            centroid: bits(pgon.centroid()),
            bounding_rect: [
                r.min_x.to_bits(),
                r.min_y.to_bits(),
                r.max_x.to_bits(),
                r.max_y.to_bits(),
            ],
            index_hits,
        }
    }
}

/// Every address on every ring, sorted.
pub fn all_addresses(pgon: &Polygon<f64>) -> Vec<PolygonIndex> {
    let mut all: Vec<_> = pgon.vertex_indexes().collect();
    all.sort();
    all
}

/// Check the incrementally maintained index returns exactly what a fresh polygon built from the
/// same rings returns for `rect`.
pub fn index_matches_fresh(pgon: &Polygon<f64>, rect: &Rect<f64>) -> bool {
    let fresh = Polygon::with_interior_rings(
        pgon.exterior_ring().to_vec(),
        pgon.interior_rings().map(|r| r.to_vec()).collect(),
    )
    .unwrap();
    let mut a = pgon.segments_in_rect(rect);
    let mut b = fresh.segments_in_rect(rect);
    a.sort();
    b.sort();
    a == b
}
