use super::transform_points;
use crate::{
    core::{
        math::{Matrix2D, Vector2},
        traits::Real,
    },
    error::GeometryError,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A sequence of two or more points joined by straight edges.
///
/// # Examples
///
/// ```
/// # use outline_paths::core::math::*;
/// # use outline_paths::segment::*;
/// let seg = LinearSegment::new(vec![vec2(0.0, 0.0), vec2(1.0, 0.0), vec2(1.0, 1.0)]).unwrap();
/// assert_eq!(seg.end_point(), vec2(1.0, 1.0));
/// assert_eq!(seg.flatten().len(), 3);
///
/// assert!(LinearSegment::new(vec![vec2(0.0, 0.0)]).is_err());
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(
        try_from = "Vec<Vector2<T>>",
        into = "Vec<Vector2<T>>",
        bound(
            serialize = "T: Real + Serialize",
            deserialize = "T: Real + Deserialize<'de>"
        )
    )
)]
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSegment<T = f64> {
    points: Vec<Vector2<T>>,
}

impl<T> LinearSegment<T>
where
    T: Real,
{
    /// Create a linear segment from `points`, fails if fewer than two points are given.
    pub fn new(points: Vec<Vector2<T>>) -> Result<Self, GeometryError> {
        if points.len() < 2 {
            return Err(GeometryError::TooFewPoints {
                required: 2,
                actual: points.len(),
            });
        }

        Ok(Self { points })
    }

    /// Create a single straight line from `start` to `end`.
    #[inline]
    pub fn line(start: Vector2<T>, end: Vector2<T>) -> Self {
        Self {
            points: vec![start, end],
        }
    }

    #[inline]
    pub fn points(&self) -> &[Vector2<T>] {
        &self.points
    }

    #[inline]
    pub fn start_point(&self) -> Vector2<T> {
        self.points[0]
    }

    #[inline]
    pub fn end_point(&self) -> Vector2<T> {
        self.points[self.points.len() - 1]
    }

    /// The points themselves, linear segments are their own exact approximation.
    #[inline]
    pub fn flatten(&self) -> Vec<Vector2<T>> {
        self.points.clone()
    }

    #[must_use]
    pub fn transform(mut self, matrix: &Matrix2D<T>) -> Self {
        transform_points(&mut self.points, matrix);
        self
    }
}

impl<T> TryFrom<Vec<Vector2<T>>> for LinearSegment<T>
where
    T: Real,
{
    type Error = GeometryError;

    #[inline]
    fn try_from(points: Vec<Vector2<T>>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl<T> From<LinearSegment<T>> for Vec<Vector2<T>> {
    #[inline]
    fn from(value: LinearSegment<T>) -> Self {
        value.points
    }
}
