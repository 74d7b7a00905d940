//! Error types returned by geometry construction and outline generation.
use thiserror::Error;

/// Errors produced when constructing geometry or generating outlines.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// A linear segment needs at least two points.
    #[error("linear segment requires at least {required} points, got {actual}")]
    TooFewPoints { required: usize, actual: usize },
    /// Cubic bezier control point count must be `1 + 3k` with `k >= 1`.
    #[error("cubic bezier segment requires 1 + 3k (k >= 1) control points, got {0}")]
    InvalidControlPointCount(usize),
    /// A path must contain at least one segment.
    #[error("path requires at least one segment")]
    EmptyPath,
    /// A primitive shape was given an argument outside of its valid range.
    #[error("invalid shape argument: {0}")]
    InvalidShapeArgument(&'static str),
    /// Outline width must be finite and greater than zero.
    #[error("outline width must be finite and greater than zero")]
    InvalidStrokeWidth,
    /// Every dash pattern entry must be finite and greater than zero.
    #[error("dash pattern entries must be finite and greater than zero")]
    InvalidDashPattern,
    /// The dash pattern would split the outline into more dashes than
    /// [MAX_DASH_COUNT](crate::outline::MAX_DASH_COUNT).
    #[error("dash pattern would produce about {estimated} dashes, the limit is {limit}")]
    TooManyDashes { estimated: f64, limit: usize },
    /// Building the edge spatial index failed.
    #[error("failed to build edge spatial index: {0}")]
    SpatialIndex(String),
    /// The polygon offset backend failed.
    #[error(transparent)]
    Offset(#[from] OffsetError),
}

/// Errors produced by a polygon offset backend.
#[derive(Debug, Error)]
pub enum OffsetError {
    /// A coordinate could not be represented in the backend fixed-point domain.
    #[error("coordinate {value} does not fit the fixed-point offset domain")]
    CoordinateOutOfRange { value: f64 },
    /// The offset delta given to the backend is not finite.
    #[error("offset delta {0} is not finite")]
    InvalidDelta(f64),
    /// Backend specific failure.
    #[error("offset backend failure: {0}")]
    Backend(String),
}
