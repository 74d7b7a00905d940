//! Supporting public types returned by path queries.
use crate::core::{math::Vector2, traits::Real};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Whether a single contour is open or closed.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PathKind {
    /// Open path, no edge between the last and first point.
    Open,
    /// Closed polygon, an implicit edge joins the last point back to the first.
    Closed,
}

impl PathKind {
    #[inline]
    pub fn is_closed(self) -> bool {
        matches!(self, PathKind::Closed)
    }
}

/// Open/closed makeup of a geometry that may hold several contours.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PathType {
    /// Every contour is open.
    Open,
    /// Every contour is closed.
    Closed,
    /// Both open and closed contours are present.
    Mixed,
}

/// Result of a nearest point/distance query against a path.
#[derive(Debug, Copy, Clone)]
pub struct PointInfo<T>
where
    T: Real,
{
    /// The point the query was made with.
    pub search_point: Vector2<T>,
    /// Closest point on the path.
    pub closest_point: Vector2<T>,
    /// Distance between `search_point` and `closest_point`. Negative when the point is inside a
    /// closed region (see [PathSource::distance](super::PathSource::distance)).
    pub distance_from_path: T,
    /// Arc length from the start of the contour to `closest_point`.
    pub distance_along_path: T,
    /// Start vertex index of the closest polyline edge.
    pub edge_index: usize,
    /// Parametric value of `closest_point` along the closest edge.
    pub edge_t: T,
}

/// A position along a path found by arc length.
#[derive(Debug, Copy, Clone)]
pub struct PathPosition<T>
where
    T: Real,
{
    /// Point on the path.
    pub point: Vector2<T>,
    /// Unit tangent direction of the edge the point lies on.
    pub direction: Vector2<T>,
    /// Start vertex index of the edge the point lies on.
    pub edge_index: usize,
}

impl<T> PathPosition<T>
where
    T: Real,
{
    /// Angle in radians of the tangent direction.
    #[inline]
    pub fn angle(&self) -> T {
        self.direction.angle()
    }
}
