//! Path segments (linear and cubic bezier) and their flattening into polylines.
mod cubic_bezier;
mod linear;

pub use cubic_bezier::CubicBezierSegment;
pub use linear::LinearSegment;

use crate::core::{
    math::{Matrix2D, Vector2},
    traits::Real,
};
use static_aabb2d_index::AABB;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tuning parameters for adaptive bezier flattening.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FlattenOptions<T> {
    /// Sub-curves whose end points are closer than this squared distance are emitted as a single
    /// chord. Lowering it increases flattening precision (and point count).
    pub min_sqr_distance: T,
    /// Dot product of the unit vectors from a sub-curve midpoint to its two end points at or
    /// below which the sub-curve is considered straight.
    pub division_threshold: T,
    /// Hard recursion depth cap, guarantees termination for degenerate input.
    pub max_depth: usize,
}

impl<T> FlattenOptions<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            min_sqr_distance: T::constant(1.75),
            division_threshold: T::constant(-0.9995),
            max_depth: 1000,
        }
    }
}

impl<T> Default for FlattenOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// A single segment of a path.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(bound(
        serialize = "T: Real + Serialize",
        deserialize = "T: Real + Deserialize<'de>"
    ))
)]
#[derive(Debug, Clone, PartialEq)]
pub enum Segment<T = f64> {
    Linear(LinearSegment<T>),
    CubicBezier(CubicBezierSegment<T>),
}

impl<T> Segment<T>
where
    T: Real,
{
    /// First point of the segment.
    #[inline]
    pub fn start_point(&self) -> Vector2<T> {
        match self {
            Segment::Linear(s) => s.start_point(),
            Segment::CubicBezier(s) => s.start_point(),
        }
    }

    /// Last point of the segment.
    #[inline]
    pub fn end_point(&self) -> Vector2<T> {
        match self {
            Segment::Linear(s) => s.end_point(),
            Segment::CubicBezier(s) => s.end_point(),
        }
    }

    /// Polyline approximating the segment using default [FlattenOptions].
    #[inline]
    pub fn flatten(&self) -> Vec<Vector2<T>> {
        self.flatten_opt(&FlattenOptions::default())
    }

    /// Polyline approximating the segment. Linear segments ignore `options`.
    pub fn flatten_opt(&self, options: &FlattenOptions<T>) -> Vec<Vector2<T>> {
        match self {
            Segment::Linear(s) => s.flatten(),
            Segment::CubicBezier(s) => s.flatten_opt(options),
        }
    }

    /// Exact bounding box of the segment, see [CubicBezierSegment::bounds].
    pub fn bounds(&self) -> AABB<T> {
        match self {
            Segment::Linear(s) => points_bounds(s.points()),
            Segment::CubicBezier(s) => s.bounds(),
        }
    }

    /// Returns the segment with every point transformed by `matrix`.
    ///
    /// Returns `self` unchanged if `matrix` is the identity.
    #[must_use]
    pub fn transform(self, matrix: &Matrix2D<T>) -> Self {
        match self {
            Segment::Linear(s) => Segment::Linear(s.transform(matrix)),
            Segment::CubicBezier(s) => Segment::CubicBezier(s.transform(matrix)),
        }
    }
}

impl<T> From<LinearSegment<T>> for Segment<T> {
    #[inline]
    fn from(value: LinearSegment<T>) -> Self {
        Segment::Linear(value)
    }
}

impl<T> From<CubicBezierSegment<T>> for Segment<T> {
    #[inline]
    fn from(value: CubicBezierSegment<T>) -> Self {
        Segment::CubicBezier(value)
    }
}

/// Componentwise min/max over `points`. Returns a zero sized box at the origin for an empty slice.
pub(crate) fn points_bounds<T>(points: &[Vector2<T>]) -> AABB<T>
where
    T: Real,
{
    let Some(first) = points.first() else {
        return AABB::new(T::zero(), T::zero(), T::zero(), T::zero());
    };

    let (min, max) = points[1..]
        .iter()
        .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)));

    AABB::new(min.x, min.y, max.x, max.y)
}

/// Transform every point in place, skipping the work entirely for the identity.
pub(crate) fn transform_points<T>(points: &mut [Vector2<T>], matrix: &Matrix2D<T>)
where
    T: Real,
{
    if matrix.is_identity() {
        return;
    }

    for p in points.iter_mut() {
        *p = matrix.apply(*p);
    }
}
