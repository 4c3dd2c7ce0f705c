//! Error type returned by fallible constructors and polygon operations.
use crate::ring::PolygonIndex;
use thiserror::Error;

/// Crate level result alias.
pub type PolyResult<T> = Result<T, PolygonError>;

/// Reasons an operation was rejected.
///
/// Every error is recoverable: a polygon that returns one of these from a mutating call is left
/// exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolygonError {
    #[error("ring has {unique} unique points, at least {required} are required")]
    TooFewPoints { unique: usize, required: usize },
    #[error("ring is not closed, first and last points differ")]
    RingNotClosed,
    #[error("ring repeats a point at position {index}")]
    DuplicateVertex { index: usize },
    #[error("ring intersects itself")]
    SelfIntersecting,
    #[error("interior ring {hole} intersects the exterior ring")]
    HoleIntersectsExterior { hole: usize },
    #[error("interior ring {hole} intersects interior ring {other}")]
    HoleIntersectsHole { hole: usize, other: usize },
    #[error("interior ring {hole} is not inside the exterior ring")]
    HoleOutsideExterior { hole: usize },
    #[error("interior rings may not have interior rings of their own")]
    NestedHoles,
    #[error("line segment end points are not distinct")]
    DegenerateSegment,
    #[error("triangle points are collinear")]
    DegenerateTriangle,
    #[error("index {index} does not address a vertex of this polygon")]
    InvalidIndex { index: PolygonIndex },
    #[error("index does not address an interior ring")]
    NotAnInteriorIndex,
    #[error("index does not address an exterior ring")]
    NotAnExteriorIndex,
    #[error("polygon has no interior ring {inner}")]
    InvalidInteriorRing { inner: usize },
    #[error("operation would reverse the winding of the ring")]
    WindingFlip,
    #[error("operation produced an invalid polygon: {reason}")]
    InvalidResult { reason: Box<PolygonError> },
    #[error("cut line must cross the polygon boundary exactly twice, found {crossings}")]
    CutCrossings { crossings: usize },
    #[error("cut line crosses more than one ring")]
    CutCrossesMultipleRings,
    #[error("cut produced an invalid polygon, the cut line may loop or cross itself")]
    CutResultInvalid,
    #[error("ring would be left with {len} vertexes, at least 3 are required")]
    RingTooSmall { len: usize },
}

impl PolygonError {
    /// Wrap a validity failure found after applying a mutation.
    pub(crate) fn invalid_result(reason: PolygonError) -> Self {
        PolygonError::InvalidResult {
            reason: Box::new(reason),
        }
    }
}
