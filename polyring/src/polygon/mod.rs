//! Polygons with holes, their segment index, and the algorithms working on them.
//!
//! [Polygon] is the main type. Queries take `&self` and never change observable state (the
//! segment index is built on first use). Edits take `&mut self` and either succeed leaving a
//! valid polygon or fail leaving it untouched. Transforms return a new polygon.
mod internal;
mod pgon;
mod pgon_edit;
mod pgon_transform;
mod pgon_types;
mod segment_index;

pub use internal::pgon_inject::add_points_at_intersections;
pub use pgon::Polygon;
pub use pgon_types::*;
pub use segment_index::SegmentIndex;
