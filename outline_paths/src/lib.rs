//! 2D path geometry: segments (linear and cubic bezier) composed into open and closed contours,
//! even-odd multi contour shapes, geometric queries against their flattened polylines, and
//! stroked/dashed outline generation.
//!
//! Geometry values are immutable once constructed. Everything derived from the segments
//! (flattened points, bounds, length, and an edge spatial index) is computed at construction,
//! transforms and outline generation return new values.
//!
//! # Examples
//!
//! ```
//! use outline_paths::{
//!     core::math::vec2,
//!     outline::{generate_outline, OutlineOptions},
//!     shape::{rectangle, ComplexPolygon},
//! };
//!
//! let outer = rectangle(vec2(0.0, 0.0), vec2(10.0, 10.0)).unwrap();
//! let hole = rectangle(vec2(2.0, 2.0), vec2(6.0, 6.0)).unwrap();
//! let shape = ComplexPolygon::new(vec![outer, hole]);
//! assert!(shape.contains(vec2(1.0, 1.0)));
//! assert!(!shape.contains(vec2(5.0, 5.0)));
//!
//! let stroked = generate_outline(&shape, &OutlineOptions::new(0.5)).unwrap();
//! // a ring on each side of both contours
//! assert_eq!(stroked.len(), 4);
//! ```
#[macro_use]
mod macros;

pub mod core;
pub mod error;
pub mod outline;
pub mod path;
pub mod segment;
pub mod shape;

pub use static_aabb2d_index::AABB;

pub use crate::error::{GeometryError, OffsetError};
pub use crate::path::{Path, PathKind, PathSource};
pub use crate::segment::{CubicBezierSegment, LinearSegment, Segment};
pub use crate::shape::ComplexPolygon;
