//! Cut and walk: split a polygon along a polyline crossing one ring twice.
use crate::{
    core::{math::Vector2, traits::Real, Control},
    polygon::{CutOptions, Polygon, WalkDirection},
    ring::PolygonIndex,
    shapes::{LineSeg, OverlapType, SegIntersect},
    PolyResult, PolygonError,
};

/// Point where the cut line meets a ring.
#[derive(Debug, Copy, Clone)]
struct Crossing<T>
where
    T: Real,
{
    point: Vector2<T>,
    /// Ring segment holding the point, normalized to the segment starting at the point when the
    /// point is a ring vertex.
    ring_seg: PolygonIndex,
    /// Cut line segment holding the point.
    cut_seg: usize,
    /// Distance from the start of the cut line segment.
    cut_dist: T,
}

fn find_crossings<T>(polygon: &Polygon<T>, cut_line: &[Vector2<T>]) -> Vec<Crossing<T>>
where
    T: Real,
{
    let mut crossings: Vec<Crossing<T>> = Vec::new();
    for (j, w) in cut_line.windows(2).enumerate() {
        let cut = match LineSeg::new(w[0], w[1]) {
            Ok(s) => s,
            // repeated cut line point
            Err(_) => continue,
        };

        let rect = cut.bounding_rect().padded(T::pos_equal_eps());
        polygon.segment_index().visit_query(&rect, |key| {
            let boundary = match polygon.segment_at(key) {
                Some(s) => s,
                None => return Control::Continue,
            };

            let mut record = |point: Vector2<T>| {
                let ring_seg = if point == boundary.b() {
                    key.next()
                } else {
                    key
                };
                if crossings.iter().any(|c| c.point == point) {
                    return;
                }
                crossings.push(Crossing {
                    point,
                    ring_seg,
                    cut_seg: j,
                    cut_dist: point.distance(cut.a()),
                });
            };

            match cut.intersection(&boundary) {
                SegIntersect::None => {}
                SegIntersect::Point(p) => record(p),
                SegIntersect::Overlap(p0, p1) => {
                    record(p0);
                    record(p1);
                }
            }
            Control::<()>::Continue
        });
    }

    crossings.sort_by(|a, b| {
        a.cut_seg
            .cmp(&b.cut_seg)
            .then_with(|| a.cut_dist.partial_cmp(&b.cut_dist).unwrap_or(std::cmp::Ordering::Equal))
    });
    crossings
}

/// Push `p` unless it repeats the last point or equals `end`.
#[inline]
fn push_distinct<T>(ring: &mut Vec<Vector2<T>>, p: Vector2<T>, end: Vector2<T>)
where
    T: Real,
{
    if p != end && ring.last().map_or(true, |&last| last != p) {
        ring.push(p);
    }
}

/// Ring vertexes visited walking from `first` to `second` in `direction`.
fn walk_ring<T>(
    ring: &[Vector2<T>],
    first: &Crossing<T>,
    second: &Crossing<T>,
    direction: WalkDirection,
) -> Vec<Vector2<T>>
where
    T: Real,
{
    let n = ring.len() - 1;
    let k1 = first.ring_seg.vertex;
    let k2 = second.ring_seg.vertex;
    let mut out = Vec::with_capacity(n + 2);

    let same_seg = k1 == k2;
    let second_ahead =
        ring[k1].distance_squared(second.point) > ring[k1].distance_squared(first.point);

    match direction {
        WalkDirection::Clockwise => {
            if same_seg && second_ahead {
                return out;
            }
            let mut i = k1;
            loop {
                i = (i + 1) % n;
                out.push(ring[i]);
                if i == k2 {
                    break;
                }
            }
        }
        WalkDirection::CounterClockwise => {
            if same_seg && !second_ahead {
                return out;
            }
            let stop = (k2 + 1) % n;
            let mut i = k1;
            loop {
                out.push(ring[i]);
                if i == stop {
                    break;
                }
                i = (i + n - 1) % n;
            }
        }
    }

    out
}

/// Polygon bounded by the walked part of the crossed ring and the cut line between the two
/// crossings.
///
/// [WalkDirection::Clockwise] walks the ring forward (in stored counter clockwise order) from the
/// first crossing, keeping the piece on the right hand side of the cut line as it is traversed.
/// [WalkDirection::CounterClockwise] walks backward and keeps the left hand side. Interior rings
/// whose first vertex lies inside the piece are carried over when the exterior ring is cut.
pub fn cut<T>(
    polygon: &Polygon<T>,
    cut_line: &[Vector2<T>],
    options: &CutOptions,
) -> PolyResult<Polygon<T>>
where
    T: Real,
{
    let crossings = find_crossings(polygon, cut_line);

    if let Some(c) = crossings.first() {
        if crossings.iter().any(|o| o.ring_seg.inner != c.ring_seg.inner) {
            return Err(PolygonError::CutCrossesMultipleRings);
        }
    }

    if crossings.len() != 2 {
        return Err(PolygonError::CutCrossings {
            crossings: crossings.len(),
        });
    }

    let first = &crossings[0];
    let second = &crossings[1];
    let inner = first.ring_seg.inner;
    let ring = polygon
        .ring(inner)
        .ok_or(PolygonError::CutCrossesMultipleRings)?;

    let mut points = vec![first.point];
    for p in walk_ring(ring, first, second, options.direction) {
        push_distinct(&mut points, p, second.point);
    }
    points.push(second.point);

    // back along the cut line
    for j in ((first.cut_seg + 1)..=second.cut_seg).rev() {
        push_distinct(&mut points, cut_line[j], first.point);
    }
    points.push(first.point);

    log::debug!(
        "cut {:?} ring between {:?} and {:?}, {} points",
        inner,
        first.point,
        second.point,
        points.len()
    );

    let result = Polygon::new(points).map_err(|e| {
        log::debug!("cut result rejected: {}", e);
        PolygonError::CutResultInvalid
    })?;

    if inner.is_some() {
        return Ok(result);
    }

    let holes: Vec<Vec<Vector2<T>>> = polygon
        .interiors
        .iter()
        .filter(|hole| result.contains_point(hole.exterior[0]) == OverlapType::Contained)
        .map(|hole| hole.exterior.clone())
        .collect();

    if holes.is_empty() {
        return Ok(result);
    }

    let mut result = result;
    result.add_interior_rings(holes).map_err(|e| {
        log::debug!("cut result rejected carrying holes: {}", e);
        PolygonError::CutResultInvalid
    })?;

    Ok(result)
}
