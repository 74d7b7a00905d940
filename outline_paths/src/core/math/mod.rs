//! Core/common math functions for working with points, lines, and affine transforms in 2D space.
mod base_math;
mod line_line_intersect;
mod matrix2d;
mod vector2;

pub use base_math::*;
pub use line_line_intersect::{line_line_intr, LineLineIntr};
pub use matrix2d::Matrix2D;
pub use vector2::{vec2, Vector2};
