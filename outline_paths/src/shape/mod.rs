//! Multi contour shapes and builders for common primitives.
mod complex_polygon;
mod primitives;

pub use complex_polygon::ComplexPolygon;
pub use primitives::*;
