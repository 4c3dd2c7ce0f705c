//! Nearest vertex and nearest segment search.
//!
//! Both searches start from the exterior ring's first vertex (or segment) as the best known
//! candidate and query the segment index for boxes within the best distance found so far. A
//! closer candidate shrinks the search radius and the query repeats until nothing closer turns
//! up. Any vertex or segment within the radius has its box overlapping the query box, so the
//! fixed point is the global nearest. Ties go to the smaller address.
use crate::{
    core::{math::Vector2, traits::Real, Control},
    polygon::{NearestSegmentResult, NearestVertexResult, Polygon},
    ring::PolygonIndex,
    shapes::Rect,
};

#[inline]
fn query_rect<T>(point: Vector2<T>, radius: T) -> Rect<T>
where
    T: Real,
{
    let r = radius + T::pos_equal_eps();
    Rect::new(point.x - r, point.y - r, point.x + r, point.y + r)
}

#[inline]
fn is_better<T>(distance: T, index: PolygonIndex, best_distance: T, best_index: PolygonIndex) -> bool
where
    T: Real,
{
    distance < best_distance || (distance == best_distance && index < best_index)
}

pub fn nearest_vertex<T>(polygon: &Polygon<T>, point: Vector2<T>) -> NearestVertexResult<T>
where
    T: Real,
{
    let ring_len = polygon.exterior.len() - 1;
    let first = polygon.exterior[0];
    let mut best = NearestVertexResult {
        index: PolygonIndex::new(0, 0, ring_len),
        point: first,
        distance: first.distance(point),
    };

    let eps = T::pos_equal_eps();
    let mut iterations = 0;
    while best.distance > eps {
        iterations += 1;
        let radius = best.distance;
        let mut found = best;
        polygon
            .segment_index()
            .visit_query(&query_rect(point, radius), |key| {
                let v = match polygon.segment_at(key) {
                    Some(seg) => seg.a(),
                    None => return Control::Continue,
                };
                let d = v.distance(point);
                if is_better(d, key, found.distance, found.index) {
                    found = NearestVertexResult {
                        index: key,
                        point: v,
                        distance: d,
                    };
                    if d <= eps {
                        return Control::Break(());
                    }
                }
                Control::Continue
            });

        let shrunk = found.distance < radius;
        best = found;
        if !shrunk {
            break;
        }
    }

    log::trace!(
        "nearest vertex to {:?} converged after {} queries",
        point,
        iterations
    );
    best
}

pub fn nearest_segment<T>(polygon: &Polygon<T>, point: Vector2<T>) -> NearestSegmentResult<T>
where
    T: Real,
{
    let ring_len = polygon.segments.len();
    let first = polygon.segments[0];
    let seg_point = first.closest_point(point);
    let mut best = NearestSegmentResult {
        index: PolygonIndex::new(0, 0, ring_len),
        segment: first,
        seg_point,
        distance: seg_point.distance(point),
    };

    let eps = T::pos_equal_eps();
    let mut iterations = 0;
    while best.distance > eps {
        iterations += 1;
        let radius = best.distance;
        let mut found = best;
        polygon
            .segment_index()
            .visit_query(&query_rect(point, radius), |key| {
                let seg = match polygon.segment_at(key) {
                    Some(seg) => seg,
                    None => return Control::Continue,
                };
                let p = seg.closest_point(point);
                let d = p.distance(point);
                if is_better(d, key, found.distance, found.index) {
                    found = NearestSegmentResult {
                        index: key,
                        segment: seg,
                        seg_point: p,
                        distance: d,
                    };
                    if d <= eps {
                        return Control::Break(());
                    }
                }
                Control::Continue
            });

        let shrunk = found.distance < radius;
        best = found;
        if !shrunk {
            break;
        }
    }

    log::trace!(
        "nearest segment to {:?} converged after {} queries",
        point,
        iterations
    );

    // a hit on a shared end point is reported on the segment starting there
    if best.distance <= eps && best.seg_point == best.segment.b() {
        let next = best.index.next();
        if let Some(segment) = polygon.segment_at(next) {
            best.index = next;
            best.segment = segment;
            best.seg_point = segment.a();
        }
    }

    best
}
