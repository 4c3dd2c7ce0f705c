//! Supporting public types used by the polygon methods.

use crate::{
    core::{math::Vector2, traits::Real},
    ring::PolygonIndex,
    shapes::LineSeg,
};

/// Rings with more segments than this use the segment index when testing point containment,
/// smaller rings are scanned directly.
pub const CONTAINS_INDEX_THRESHOLD: usize = 32;

/// Options used when checking polygon validity.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ValidateOptions {
    /// If true interior rings are checked against each other for intersection and nesting. Bulk
    /// edits that add several interior rings turn this off for each ring and check the siblings
    /// once at the end.
    pub check_sibling_holes: bool,
}

impl ValidateOptions {
    #[inline]
    pub fn new() -> Self {
        Self {
            check_sibling_holes: true,
        }
    }

    /// Options that skip the sibling interior ring checks.
    #[inline]
    pub fn without_sibling_holes() -> Self {
        Self {
            check_sibling_holes: false,
        }
    }
}

impl Default for ValidateOptions {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Options controlling when a [SegmentIndex](super::SegmentIndex) rebuilds its bulk tree.
///
/// Edits go to a small overlay next to the bulk tree. Once the overlay holds more than
/// `max(min_overlay, live_tree_items / overlay_ratio)` items the bulk tree is rebuilt from every
/// live item and the overlay is emptied.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SegmentIndexOptions {
    pub min_overlay: usize,
    pub overlay_ratio: usize,
}

impl SegmentIndexOptions {
    #[inline]
    pub fn new() -> Self {
        Self {
            min_overlay: 64,
            overlay_ratio: 8,
        }
    }
}

impl Default for SegmentIndexOptions {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Direction the ring is walked when closing a cut.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum WalkDirection {
    /// Keep the piece on the right hand (clockwise) side of the cut line as it is traversed.
    /// The ring is walked in its stored order from the first crossing to the second.
    Clockwise,
    /// Keep the piece on the left hand (counter clockwise) side of the cut line as it is
    /// traversed. The ring is walked against its stored order from the first crossing to the
    /// second.
    CounterClockwise,
}

/// Options used when cutting a polygon with [Polygon::cut](super::Polygon::cut).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CutOptions {
    pub direction: WalkDirection,
}

impl CutOptions {
    #[inline]
    pub fn new(direction: WalkDirection) -> Self {
        Self { direction }
    }
}

impl Default for CutOptions {
    #[inline]
    fn default() -> Self {
        Self::new(WalkDirection::Clockwise)
    }
}

/// Turn at a vertex relative to the area of the polygon.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum VertexConvexity {
    Convex,
    Concave,
    Collinear,
}

/// Result from [Polygon::nearest_vertex](super::Polygon::nearest_vertex).
#[derive(Debug, Copy, Clone)]
pub struct NearestVertexResult<T>
where
    T: Real,
{
    /// Address of the vertex (polygon id 0).
    pub index: PolygonIndex,
    /// Position of the vertex.
    pub point: Vector2<T>,
    /// Distance from the query point to the vertex.
    pub distance: T,
}

/// Result from [Polygon::nearest_segment](super::Polygon::nearest_segment).
#[derive(Debug, Copy, Clone)]
pub struct NearestSegmentResult<T>
where
    T: Real,
{
    /// Address of the segment start vertex (polygon id 0).
    pub index: PolygonIndex,
    /// The segment.
    pub segment: LineSeg<T>,
    /// Closest point on the segment to the query point.
    pub seg_point: Vector2<T>,
    /// Distance from the query point to the segment.
    pub distance: T,
}

/// Number of vertexes added to each polygon by
/// [add_points_at_intersections](super::add_points_at_intersections).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct InjectedCounts {
    pub first: usize,
    pub second: usize,
}

impl InjectedCounts {
    #[inline]
    pub fn total(&self) -> usize {
        self.first + self.second
    }
}
