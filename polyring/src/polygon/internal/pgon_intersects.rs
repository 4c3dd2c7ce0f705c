use crate::{
    core::{
        traits::{ControlFlow, Real},
        Control,
    },
    polygon::Polygon,
    ring::PolygonIndex,
    shapes::{LineSeg, Rect},
};

/// Visit every ring segment whose bounding box overlaps `rect`, stopping when `visitor` breaks.
pub fn visit_segments_in_rect<T, C, F>(polygon: &Polygon<T>, rect: &Rect<T>, visitor: &mut F) -> C
where
    T: Real,
    C: ControlFlow,
    F: FnMut(PolygonIndex, LineSeg<T>) -> C,
{
    polygon
        .segment_index()
        .visit_query(rect, |key| match polygon.segment_at(key) {
            Some(seg) => visitor(key, seg),
            None => C::continuing(),
        })
}

/// True if `seg` crosses or touches any ring segment.
fn crosses_boundary<T>(polygon: &Polygon<T>, seg: &LineSeg<T>) -> bool
where
    T: Real,
{
    let rect = seg.bounding_rect().padded(T::pos_equal_eps());
    let cf = visit_segments_in_rect(polygon, &rect, &mut |_, boundary: LineSeg<T>| {
        if seg.intersects(&boundary) {
            Control::Break(())
        } else {
            Control::Continue
        }
    });
    cf.should_break()
}

pub fn intersects_segment<T>(polygon: &Polygon<T>, seg: &LineSeg<T>) -> bool
where
    T: Real,
{
    let eps = T::pos_equal_eps();
    if !polygon
        .bounding_rect
        .intersects_eps(&seg.bounding_rect(), eps)
    {
        return false;
    }

    if polygon.contains(seg.a()) || polygon.contains(seg.b()) {
        return true;
    }

    // both end points outside (or inside holes), so any contact must cross a ring
    crosses_boundary(polygon, seg)
}

pub fn intersects_polygon<T>(polygon: &Polygon<T>, other: &Polygon<T>) -> bool
where
    T: Real,
{
    let eps = T::pos_equal_eps();
    if !polygon
        .bounding_rect
        .intersects_eps(&other.bounding_rect, eps)
    {
        return false;
    }

    // cheap first check, usually decides overlapping inputs
    if polygon.contains(other.exterior[0]) || other.contains(polygon.exterior[0]) {
        return true;
    }

    let n = other.exterior.len() - 1;
    if other.exterior[..n].iter().any(|&p| polygon.contains(p)) {
        return true;
    }

    let n = polygon.exterior.len() - 1;
    if polygon.exterior[..n].iter().any(|&p| other.contains(p)) {
        return true;
    }

    // hole rings count too, `polygon` may sit in a hole of `other` and cross its boundary
    other
        .all_segments()
        .any(|(_, s)| crosses_boundary(polygon, &s))
}
