//! Point containment by winding number.
//!
//! A horizontal ray is cast from the test point towards +x. An edge adds to the winding number
//! only when it crosses the ray's line with one end on or below it and the other strictly above
//! (+1 for upward edges with the point on their left, -1 for downward edges with the point on
//! their right). This half open rule merges an edge that merely touches the ray at a vertex with
//! its neighbor: a vertex on the ray counts once when the boundary passes through and cancels out
//! when the boundary only touches, and edges parallel to the ray never count.
//!
//! Any edge within [Real::pos_equal_eps] of the test point ends the walk with
//! [OverlapType::Touching].
use crate::{
    core::{
        math::{orientation, Vector2},
        traits::{ControlFlow, Real},
        Control,
    },
    polygon::{Polygon, CONTAINS_INDEX_THRESHOLD},
    shapes::{Circle, LineSeg, OverlapType, Rect, SegIntersect},
};

/// Winding number contribution of one edge, `None` if the edge touches the point.
#[inline]
fn winding_step<T>(seg: &LineSeg<T>, point: Vector2<T>, eps: T) -> Option<i32>
where
    T: Real,
{
    if seg.distance_to_point(point) <= eps {
        return None;
    }

    let v1 = seg.a();
    let v2 = seg.b();
    let step = if v1.y <= point.y {
        if v2.y > point.y && orientation(v1, v2, point) > T::zero() {
            1
        } else {
            0
        }
    } else if v2.y <= point.y && orientation(v1, v2, point) < T::zero() {
        -1
    } else {
        0
    };

    Some(step)
}

/// Containment of `point` in ring `ring` of `polygon` taken as a filled polygon (holes ignored).
pub fn ring_contains_point<T>(
    polygon: &Polygon<T>,
    ring: Option<usize>,
    point: Vector2<T>,
) -> OverlapType
where
    T: Real,
{
    let (segs, bounds) = match ring {
        None => (&polygon.segments[..], polygon.bounding_rect),
        Some(i) => match polygon.interiors.get(i) {
            Some(hole) => (&hole.segments[..], hole.bounding_rect),
            None => return OverlapType::None,
        },
    };

    let eps = T::pos_equal_eps();
    if !bounds.contains_point_eps(point, eps) {
        return OverlapType::None;
    }

    let mut winding = 0;
    let mut visit = |seg: &LineSeg<T>| match winding_step(seg, point, eps) {
        Some(step) => {
            winding += step;
            Control::Continue
        }
        None => Control::Break(()),
    };

    let cf = if segs.len() > CONTAINS_INDEX_THRESHOLD {
        // only edges reaching the ray (or within tolerance of the point) matter
        let query = Rect::new(
            point.x - eps,
            point.y - eps,
            bounds.max_x + eps,
            point.y + eps,
        );
        polygon.segment_index().visit_query(&query, |key| {
            if key.inner != ring {
                return Control::Continue;
            }
            match segs.get(key.vertex) {
                Some(seg) => visit(seg),
                None => Control::Continue,
            }
        })
    } else {
        let mut cf = Control::Continue;
        for seg in segs {
            cf = visit(seg);
            if cf.should_break() {
                break;
            }
        }
        cf
    };

    if cf.should_break() {
        OverlapType::Touching
    } else if winding != 0 {
        OverlapType::Contained
    } else {
        OverlapType::None
    }
}

/// Containment of `point` in the polygon area (exterior ring minus interior rings).
pub fn contains_point<T>(polygon: &Polygon<T>, point: Vector2<T>) -> OverlapType
where
    T: Real,
{
    match ring_contains_point(polygon, None, point) {
        OverlapType::Contained => {}
        other => return other,
    }

    for i in 0..polygon.interiors.len() {
        match ring_contains_point(polygon, Some(i), point) {
            OverlapType::Contained => return OverlapType::None,
            OverlapType::Touching => return OverlapType::Touching,
            OverlapType::None => {}
        }
    }

    OverlapType::Contained
}

/// True if `seg` lies in the polygon area or on its boundary.
///
/// Every point where the segment meets a ring (crossings, vertex touches and the ends of
/// collinear overlaps) splits it into pieces. The end points and the midpoint of each piece must
/// be inside or touching, so a segment that leaves the area between two ring vertexes fails even
/// when it never crosses a ring segment away from a vertex.
pub fn contains_segment<T>(polygon: &Polygon<T>, seg: &LineSeg<T>) -> bool
where
    T: Real,
{
    let inside = |p| contains_point(polygon, p).is_inside_or_touching();
    if !inside(seg.a()) || !inside(seg.b()) {
        return false;
    }

    let dir = seg.direction();
    let len_sq = dir.length_squared();
    let param = |p: Vector2<T>| (p - seg.a()).dot(dir) / len_sq;

    let mut splits = vec![T::zero(), T::one()];
    let rect = seg.bounding_rect().padded(T::pos_equal_eps());
    let crossed = polygon.segment_index().visit_query(&rect, |key| {
        let boundary = match polygon.segment_at(key) {
            Some(s) => s,
            None => return Control::Continue,
        };
        match seg.intersection(&boundary) {
            SegIntersect::Point(p) if !seg.is_endpoint(p) && !boundary.is_endpoint(p) => {
                // transversal crossing away from any vertex always leaves the area
                return Control::Break(());
            }
            SegIntersect::Point(p) => splits.push(param(p)),
            SegIntersect::Overlap(p, q) => {
                splits.push(param(p));
                splits.push(param(q));
            }
            SegIntersect::None => {}
        }
        Control::Continue
    });

    if crossed.should_break() {
        return false;
    }

    splits.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let min_gap = T::pos_equal_eps() / len_sq.sqrt();
    splits
        .windows(2)
        .filter(|w| w[1] - w[0] > min_gap)
        .all(|w| inside(seg.point_at((w[0] + w[1]) / T::two())))
}

/// True if the circle lies in the polygon area, touching the boundary at most.
pub fn contains_circle<T>(polygon: &Polygon<T>, circle: &Circle<T>) -> bool
where
    T: Real,
{
    contains_point(polygon, circle.center) == OverlapType::Contained
        && polygon.nearest_segment(circle.center).distance >= circle.radius - T::pos_equal_eps()
}

/// True if `other` lies in the polygon area, touching the boundary at most.
pub fn contains_polygon<T>(polygon: &Polygon<T>, other: &Polygon<T>) -> bool
where
    T: Real,
{
    if !polygon.bounding_rect.contains_rect(&other.bounding_rect) {
        return false;
    }

    if !other.segments.iter().all(|s| contains_segment(polygon, s)) {
        return false;
    }

    // a hole of this polygon covered by the other polygon's area
    !polygon.interiors.iter().any(|hole| {
        hole.exterior
            .iter()
            .any(|&p| other.contains_point(p) == OverlapType::Contained)
    })
}
