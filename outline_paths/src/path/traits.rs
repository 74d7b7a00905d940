use super::{Path, PathPosition, PathType, PointInfo};
use crate::{
    core::{
        math::{Matrix2D, Vector2},
        traits::Real,
    },
    error::GeometryError,
};
use static_aabb2d_index::AABB;

/// Trait representing a readonly source of path geometry, implemented by both a single [Path] and
/// a [ComplexPolygon](crate::shape::ComplexPolygon).
///
/// Every query works on the flattened polylines computed at construction. Closed contours bound
/// regions using the even-odd rule, open contours never contain any point.
pub trait PathSource {
    /// Numeric type used for the geometry.
    type Num: Real;

    /// Bounding box of all contours.
    fn bounds(&self) -> AABB<Self::Num>;

    /// Total arc length of all contours, closing edges included.
    fn length(&self) -> Self::Num;

    /// Upper bound on the number of points [PathSource::find_intersections] can write.
    fn max_intersections(&self) -> usize;

    /// Closest point on the geometry to `point`, `distance_from_path` is negative when `point` is
    /// inside.
    fn distance(&self, point: Vector2<Self::Num>) -> PointInfo<Self::Num>;

    /// Even-odd containment test.
    fn contains(&self, point: Vector2<Self::Num>) -> bool;

    /// Write the intersects of the line segment `start` to `end` with the geometry into `buffer`,
    /// returning the number written.
    fn find_intersections(
        &self,
        start: Vector2<Self::Num>,
        end: Vector2<Self::Num>,
        buffer: &mut [Vector2<Self::Num>],
    ) -> usize;

    /// Position at arc length `distance` from the start, `None` if the geometry has no length.
    fn point_along_path(&self, distance: Self::Num) -> Option<PathPosition<Self::Num>>;

    /// Whether the contours are all open, all closed, or a mix.
    fn path_type(&self) -> PathType;

    /// All contours in order.
    fn contours(&self) -> &[Path<Self::Num>];

    /// Returns the geometry transformed by `matrix`, identity returns `self` unchanged.
    fn transform(self, matrix: &Matrix2D<Self::Num>) -> Result<Self, GeometryError>
    where
        Self: Sized;

    /// Same as [PathSource::find_intersections] but allocates a buffer large enough for every
    /// possible intersect.
    fn find_intersections_vec(
        &self,
        start: Vector2<Self::Num>,
        end: Vector2<Self::Num>,
    ) -> Vec<Vector2<Self::Num>> {
        let mut buffer = vec![Vector2::zero(); self.max_intersections()];
        let count = self.find_intersections(start, end, &mut buffer);
        buffer.truncate(count);
        buffer
    }
}
