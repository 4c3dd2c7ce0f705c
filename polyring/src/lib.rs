//! This crate provides 2D polygons with holes that can be edited vertex by vertex while keeping
//! a spatial index of their segments up to date.
//!
//! The main type is [polygon::Polygon]: an exterior ring plus interior rings (holes), with
//! containment, intersection, nearest feature, cut and transform operations. Vertexes on any
//! ring are addressed with [ring::PolygonIndex]. Supporting primitives (line segments,
//! rectangles, circles, triangles) live in [shapes].
//!
//! All geometric types are generic over [core::traits::Real] (implemented for `f32` and `f64`)
//! and default to `f64`. Positions are compared with a shared tolerance,
//! [core::traits::Real::pos_equal_eps].
//!
//! # Examples
//!
//! ```
//! # use polyring::ring;
//! # use polyring::polygon::*;
//! # use polyring::core::math::*;
//! # use polyring::shapes::OverlapType;
//! let mut square = Polygon::new(ring![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]).unwrap();
//! square.add_interior_ring(ring![(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0)]).unwrap();
//! assert_eq!(square.area(), 12.0);
//! assert_eq!(square.contains_point(Vector2::new(2.0, 2.0)), OverlapType::None);
//! assert_eq!(square.contains_point(Vector2::new(0.5, 0.5)), OverlapType::Contained);
//! ```

extern crate static_aabb2d_index;

#[macro_use]
mod macros;
pub mod core;
mod error;
pub mod polygon;
pub mod ring;
pub mod shapes;

pub use error::{PolyResult, PolygonError};
pub use static_aabb2d_index::AABB;
