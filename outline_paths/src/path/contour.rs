use super::{IndexedPolyline, PathKind, PathPosition, PathSource, PathType, PointInfo};
use crate::{
    core::{
        math::{Matrix2D, Vector2},
        traits::Real,
    },
    error::GeometryError,
    segment::{FlattenOptions, Segment},
};
use static_aabb2d_index::AABB;

/// A single contour made of one or more segments, either open or closed.
///
/// The flattened polyline and everything derived from it (bounds, length, spatial index) is
/// computed when the path is constructed, so every query is read only.
///
/// # Examples
///
/// ```
/// # use outline_paths::core::math::*;
/// # use outline_paths::path::*;
/// # use outline_paths::segment::*;
/// let square = Path::closed(vec![LinearSegment::new(vec![
///     vec2(0.0, 0.0),
///     vec2(10.0, 0.0),
///     vec2(10.0, 10.0),
///     vec2(0.0, 10.0),
/// ])
/// .unwrap()
/// .into()])
/// .unwrap();
/// assert_eq!(square.length(), 40.0);
/// assert!(square.contains(vec2(5.0, 5.0)));
/// assert_eq!(square.distance(vec2(5.0, 5.0)).distance_from_path, -5.0);
/// ```
#[derive(Debug, Clone)]
pub struct Path<T: Real = f64> {
    segments: Vec<Segment<T>>,
    kind: PathKind,
    flatten_options: FlattenOptions<T>,
    polyline: IndexedPolyline<T>,
}

impl<T> Path<T>
where
    T: Real,
{
    /// Create a path from `segments`, flattening with default [FlattenOptions].
    #[inline]
    pub fn new(segments: Vec<Segment<T>>, kind: PathKind) -> Result<Self, GeometryError> {
        Self::new_opt(segments, kind, &FlattenOptions::default())
    }

    /// Create a path from `segments`, fails if `segments` is empty.
    ///
    /// Flattened segment points are concatenated as is, the start point of a segment is not
    /// merged with the end point of the previous one. `options` are kept and reused when the path
    /// is transformed.
    pub fn new_opt(
        segments: Vec<Segment<T>>,
        kind: PathKind,
        options: &FlattenOptions<T>,
    ) -> Result<Self, GeometryError> {
        if segments.is_empty() {
            return Err(GeometryError::EmptyPath);
        }

        let points = segments
            .iter()
            .flat_map(|s| s.flatten_opt(options))
            .collect::<Vec<_>>();

        let polyline = IndexedPolyline::new(points, kind.is_closed())?;

        Ok(Self {
            segments,
            kind,
            flatten_options: *options,
            polyline,
        })
    }

    /// Create an open path.
    #[inline]
    pub fn open(segments: Vec<Segment<T>>) -> Result<Self, GeometryError> {
        Self::new(segments, PathKind::Open)
    }

    /// Create a closed path (polygon).
    #[inline]
    pub fn closed(segments: Vec<Segment<T>>) -> Result<Self, GeometryError> {
        Self::new(segments, PathKind::Closed)
    }

    /// Returns the path as a closed polygon, returns `self` if already closed.
    ///
    /// The flattened points are reused, only derived values are recomputed.
    pub fn into_closed(self) -> Result<Self, GeometryError> {
        self.into_kind(PathKind::Closed)
    }

    /// Returns the path as an open path, returns `self` if already open.
    pub fn into_open(self) -> Result<Self, GeometryError> {
        self.into_kind(PathKind::Open)
    }

    fn into_kind(self, kind: PathKind) -> Result<Self, GeometryError> {
        if self.kind == kind {
            return Ok(self);
        }

        Ok(Self {
            segments: self.segments,
            kind,
            flatten_options: self.flatten_options,
            polyline: self.polyline.with_closed(kind.is_closed())?,
        })
    }

    #[inline]
    pub fn kind(&self) -> PathKind {
        self.kind
    }

    /// Options the segments were flattened with.
    #[inline]
    pub fn flatten_options(&self) -> &FlattenOptions<T> {
        &self.flatten_options
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.kind.is_closed()
    }

    #[inline]
    pub fn segments(&self) -> &[Segment<T>] {
        &self.segments
    }

    /// Flattened points, vertex 0 is the path start.
    #[inline]
    pub fn points(&self) -> &[Vector2<T>] {
        self.polyline.points()
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.polyline.point_count()
    }

    /// The digitized polyline backing all queries.
    #[inline]
    pub fn polyline(&self) -> &IndexedPolyline<T> {
        &self.polyline
    }

    #[inline]
    pub fn bounds(&self) -> AABB<T> {
        self.polyline.bounds()
    }

    #[inline]
    pub fn length(&self) -> T {
        self.polyline.length()
    }

    /// Closest point on the path to `point`.
    ///
    /// `distance_from_path` is negated if the path is closed and contains `point`.
    pub fn distance(&self, point: Vector2<T>) -> PointInfo<T> {
        let mut info = self.polyline.distance_from_path(point);
        if self.contains(point) {
            info.distance_from_path = -info.distance_from_path;
        }

        info
    }

    /// Even-odd containment test, always `false` for an open path.
    #[inline]
    pub fn contains(&self, point: Vector2<T>) -> bool {
        self.polyline.point_in_polygon(point)
    }

    /// See [IndexedPolyline::find_intersections].
    #[inline]
    pub fn find_intersections(
        &self,
        start: Vector2<T>,
        end: Vector2<T>,
        buffer: &mut [Vector2<T>],
    ) -> usize {
        self.polyline.find_intersections(start, end, buffer)
    }

    /// See [IndexedPolyline::point_along_path].
    #[inline]
    pub fn point_along_path(&self, distance: T) -> Option<PathPosition<T>> {
        self.polyline.point_along_path(distance)
    }

    /// Returns the path with every segment transformed by `matrix`, returns `self` unchanged if
    /// `matrix` is the identity.
    ///
    /// Segments are flattened again with the options the path was created with.
    pub fn transform(self, matrix: &Matrix2D<T>) -> Result<Self, GeometryError> {
        if matrix.is_identity() {
            return Ok(self);
        }

        let segments = self
            .segments
            .into_iter()
            .map(|s| s.transform(matrix))
            .collect();

        Self::new_opt(segments, self.kind, &self.flatten_options)
    }
}

impl<T> PathSource for Path<T>
where
    T: Real,
{
    type Num = T;

    #[inline]
    fn bounds(&self) -> AABB<T> {
        Path::bounds(self)
    }

    #[inline]
    fn length(&self) -> T {
        Path::length(self)
    }

    #[inline]
    fn max_intersections(&self) -> usize {
        self.point_count()
    }

    #[inline]
    fn distance(&self, point: Vector2<T>) -> PointInfo<T> {
        Path::distance(self, point)
    }

    #[inline]
    fn contains(&self, point: Vector2<T>) -> bool {
        Path::contains(self, point)
    }

    #[inline]
    fn find_intersections(
        &self,
        start: Vector2<T>,
        end: Vector2<T>,
        buffer: &mut [Vector2<T>],
    ) -> usize {
        Path::find_intersections(self, start, end, buffer)
    }

    #[inline]
    fn point_along_path(&self, distance: T) -> Option<PathPosition<T>> {
        Path::point_along_path(self, distance)
    }

    #[inline]
    fn path_type(&self) -> PathType {
        match self.kind {
            PathKind::Open => PathType::Open,
            PathKind::Closed => PathType::Closed,
        }
    }

    #[inline]
    fn contours(&self) -> &[Path<T>] {
        std::slice::from_ref(self)
    }

    #[inline]
    fn transform(self, matrix: &Matrix2D<T>) -> Result<Self, GeometryError> {
        Path::transform(self, matrix)
    }
}
