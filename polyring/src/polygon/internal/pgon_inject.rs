//! Inject the intersection points of two polygons as vertexes of both.
use crate::{
    core::{math::Vector2, traits::Real, Control},
    polygon::{InjectedCounts, Polygon},
    shapes::SegIntersect,
    PolyResult, PolygonError,
};

/// Points where the exterior ring of `a` meets any ring of `b`.
fn exterior_crossings<T>(a: &Polygon<T>, b: &Polygon<T>, out: &mut Vec<Vector2<T>>)
where
    T: Real,
{
    if !a
        .bounding_rect
        .intersects_eps(&b.bounding_rect, T::pos_equal_eps())
    {
        return;
    }

    for seg in a.segments.iter() {
        let rect = seg.bounding_rect().padded(T::pos_equal_eps());
        b.segment_index().visit_query(&rect, |key| {
            if let Some(other) = b.segment_at(key) {
                match seg.intersection(&other) {
                    SegIntersect::None => {}
                    SegIntersect::Point(p) => out.push(p),
                    SegIntersect::Overlap(p0, p1) => {
                        out.push(p0);
                        out.push(p1);
                    }
                }
            }
            Control::<()>::Continue
        });
    }
}

/// Replace `p` by the coordinates of a vertex of `a` or `b` within tolerance, if any.
fn snap_to_vertex<T>(a: &Polygon<T>, b: &Polygon<T>, p: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    let eps = T::pos_equal_eps();
    for pgon in [a, b] {
        let nearest = pgon.nearest_vertex(p);
        if nearest.distance <= eps {
            return nearest.point;
        }
    }
    p
}

/// Insert each of `points` lying on a segment of `polygon` that is not already a vertex.
fn inject<T>(polygon: &mut Polygon<T>, points: &[Vector2<T>]) -> PolyResult<usize>
where
    T: Real,
{
    let eps = T::pos_equal_eps();
    let mut count = 0;
    for &p in points {
        if polygon.nearest_vertex(p).distance <= eps {
            continue;
        }
        let nearest = polygon.nearest_segment(p);
        if nearest.distance > eps {
            continue;
        }
        polygon.apply_insert(nearest.index, p)?;
        count += 1;
    }
    Ok(count)
}

/// Add a vertex to both polygons at every point where their boundaries meet, unless that point
/// is already a vertex.
///
/// Intersection points within [Real::pos_equal_eps] of an existing vertex of either polygon take
/// that vertex's coordinates, so shared vertexes are never duplicated and calling this again is a
/// no-op. Fails with [PolygonError::InvalidResult] if either polygon would become invalid, in
/// which case neither polygon changes.
///
/// # Examples
///
/// ```
/// # use polyring::ring;
/// # use polyring::polygon::*;
/// # use polyring::core::math::*;
/// let mut a = Polygon::new(ring![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]).unwrap();
/// let mut b = a.translate(Vector2::new(2.0, 0.0)).unwrap();
/// let counts = add_points_at_intersections(&mut a, &mut b).unwrap();
/// assert_eq!(counts, InjectedCounts { first: 2, second: 2 });
/// assert_eq!(add_points_at_intersections(&mut a, &mut b).unwrap().total(), 0);
/// ```
pub fn add_points_at_intersections<T>(
    a: &mut Polygon<T>,
    b: &mut Polygon<T>,
) -> PolyResult<InjectedCounts>
where
    T: Real,
{
    let mut points = Vec::new();
    exterior_crossings(a, b, &mut points);
    exterior_crossings(b, a, &mut points);
    if points.is_empty() {
        return Ok(InjectedCounts::default());
    }

    let mut points: Vec<Vector2<T>> = points
        .into_iter()
        .map(|p| snap_to_vertex(a, b, p))
        .collect();
    points.sort_by(|p, q| {
        p.x.partial_cmp(&q.x)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| p.y.partial_cmp(&q.y).unwrap_or(std::cmp::Ordering::Equal))
    });
    points.dedup_by(|p, q| p == q);

    let mut working_a = a.clone();
    let mut working_b = b.clone();
    let first = inject(&mut working_a, &points)?;
    let second = inject(&mut working_b, &points)?;

    if first > 0 {
        working_a.validate().map_err(|e| {
            log::debug!("injecting intersection points rejected for first polygon: {}", e);
            PolygonError::invalid_result(e)
        })?;
    }
    if second > 0 {
        working_b.validate().map_err(|e| {
            log::debug!("injecting intersection points rejected for second polygon: {}", e);
            PolygonError::invalid_result(e)
        })?;
    }

    *a = working_a;
    *b = working_b;
    Ok(InjectedCounts { first, second })
}
