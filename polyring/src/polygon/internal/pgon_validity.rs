use crate::{
    core::{
        math::Vector2,
        traits::{ControlFlow, Real},
        Control,
    },
    polygon::{Polygon, ValidateOptions},
    ring::{find_duplicate_point, ring_is_closed, ring_unique_len},
    shapes::{OverlapType, SegIntersect},
    PolyResult, PolygonError,
};
use std::ops::Range;

/// Check the point level requirements of a ring: closed, at least 3 unique points, no repeated
/// point.
pub fn validate_ring_points<T>(ring: &[Vector2<T>]) -> PolyResult<()>
where
    T: Real,
{
    if !ring_is_closed(ring) {
        if ring.len() < 3 {
            return Err(PolygonError::TooFewPoints {
                unique: ring.len(),
                required: 3,
            });
        }
        return Err(PolygonError::RingNotClosed);
    }

    let unique = ring_unique_len(ring);
    if unique < 3 {
        return Err(PolygonError::TooFewPoints {
            unique,
            required: 3,
        });
    }

    if let Some(index) = find_duplicate_point(ring) {
        return Err(PolygonError::DuplicateVertex { index });
    }

    Ok(())
}

/// Test if ring `ring` of `polygon` crosses itself.
///
/// Only segment pairs with overlapping bounding boxes (found with the segment index) are tested.
/// Neighboring segments always share an end point so they only count when they fold back over
/// each other.
pub fn ring_self_intersects<T>(polygon: &Polygon<T>, ring: Option<usize>) -> bool
where
    T: Real,
{
    let segs = match polygon.ring_segments(ring) {
        Some(s) => s,
        None => return false,
    };
    let n = segs.len();
    let index = polygon.segment_index();
    let eps = T::pos_equal_eps();

    for (k, seg) in segs.iter().enumerate() {
        let rect = seg.bounding_rect().padded(eps);
        let cf = index.visit_query(&rect, |key| {
            if key.inner != ring || key.vertex <= k {
                return Control::Continue;
            }

            let other = match segs.get(key.vertex) {
                Some(s) => s,
                None => return Control::Continue,
            };

            let adjacent = key.vertex == k + 1 || (k == 0 && key.vertex == n - 1);
            let crosses = if adjacent {
                matches!(seg.intersection(other), SegIntersect::Overlap(..))
            } else {
                seg.intersects(other)
            };

            if crosses {
                Control::Break(())
            } else {
                Control::Continue
            }
        });

        if cf.should_break() {
            return true;
        }
    }

    false
}

/// Test if any segment of ring `a` touches any segment of ring `b`.
fn rings_touch<T>(polygon: &Polygon<T>, a: Option<usize>, b: Option<usize>) -> bool
where
    T: Real,
{
    let (segs_a, segs_b) = match (polygon.ring_segments(a), polygon.ring_segments(b)) {
        (Some(sa), Some(sb)) => (sa, sb),
        _ => return false,
    };
    let index = polygon.segment_index();
    let eps = T::pos_equal_eps();

    segs_a.iter().any(|seg| {
        let rect = seg.bounding_rect().padded(eps);
        index
            .visit_query(&rect, |key| {
                if key.inner == b && segs_b.get(key.vertex).is_some_and(|s| seg.intersects(s)) {
                    Control::Break(())
                } else {
                    Control::Continue
                }
            })
            .should_break()
    })
}

/// Check interior ring `inner`: valid on its own, not touching the exterior ring, inside the
/// exterior ring, and (if `options.check_sibling_holes`) not touching or nested with any other
/// interior ring.
///
/// Called with sibling checks on after an edit to a single interior ring, and with sibling checks
/// off by [Polygon::add_interior_rings] for each ring of the batch before the batch siblings are
/// checked once with [validate_sibling_holes].
pub fn validate_interior<T>(
    polygon: &Polygon<T>,
    inner: usize,
    options: &ValidateOptions,
) -> PolyResult<()>
where
    T: Real,
{
    let hole = &polygon.interiors[inner];
    if hole.has_interior_rings() {
        return Err(PolygonError::NestedHoles);
    }

    validate_ring_points(&hole.exterior)?;
    if ring_self_intersects(polygon, Some(inner)) {
        return Err(PolygonError::SelfIntersecting);
    }

    if rings_touch(polygon, Some(inner), None) {
        return Err(PolygonError::HoleIntersectsExterior { hole: inner });
    }

    if !polygon.bounding_rect.contains_rect(&hole.bounding_rect)
        || polygon.ring_contains_point(None, hole.exterior[0]) != OverlapType::Contained
    {
        return Err(PolygonError::HoleOutsideExterior { hole: inner });
    }

    if options.check_sibling_holes {
        for other in (0..polygon.interiors.len()).filter(|&j| j != inner) {
            check_hole_pair(polygon, inner, other)?;
        }
    }

    Ok(())
}

/// Check every interior ring in `holes` against every interior ring before it.
///
/// Passing `0..count` checks every pair once.
pub fn validate_sibling_holes<T>(polygon: &Polygon<T>, holes: Range<usize>) -> PolyResult<()>
where
    T: Real,
{
    for i in holes {
        for j in 0..i {
            check_hole_pair(polygon, i, j)?;
        }
    }
    Ok(())
}

fn check_hole_pair<T>(polygon: &Polygon<T>, hole: usize, other: usize) -> PolyResult<()>
where
    T: Real,
{
    let a = &polygon.interiors[hole];
    let b = &polygon.interiors[other];
    if !a.bounding_rect.intersects(&b.bounding_rect) {
        return Ok(());
    }

    let err = PolygonError::HoleIntersectsHole { hole, other };
    if rings_touch(polygon, Some(hole), Some(other)) {
        return Err(err);
    }

    // no crossings, the rings can still be nested
    if polygon
        .ring_contains_point(Some(other), a.exterior[0])
        .is_inside_or_touching()
        || polygon
            .ring_contains_point(Some(hole), b.exterior[0])
            .is_inside_or_touching()
    {
        return Err(err);
    }

    Ok(())
}

/// Check every invariant of `polygon`.
pub fn validate<T>(polygon: &Polygon<T>, options: &ValidateOptions) -> PolyResult<()>
where
    T: Real,
{
    validate_ring_points(&polygon.exterior)?;
    if ring_self_intersects(polygon, None) {
        return Err(PolygonError::SelfIntersecting);
    }

    let skip_siblings = ValidateOptions::without_sibling_holes();
    for i in 0..polygon.interiors.len() {
        validate_interior(polygon, i, &skip_siblings)?;
    }

    if options.check_sibling_holes {
        validate_sibling_holes(polygon, 0..polygon.interiors.len())?;
    }

    Ok(())
}
