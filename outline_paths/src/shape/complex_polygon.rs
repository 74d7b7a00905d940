use crate::{
    core::{
        math::{Matrix2D, Vector2},
        traits::Real,
    },
    error::GeometryError,
    path::{Path, PathPosition, PathSource, PathType, PointInfo},
};
use static_aabb2d_index::AABB;

/// Set of contours combined with the even-odd rule, a point is inside if an odd number of the
/// closed member contours contain it (outer boundaries with holes).
///
/// Members may be any mix of open and closed paths and are kept in insertion order. An empty
/// complex polygon is valid, it has zero length and zero sized bounds at the origin.
///
/// # Examples
///
/// ```
/// # use outline_paths::core::math::*;
/// # use outline_paths::path::*;
/// # use outline_paths::shape::*;
/// let outer = rectangle(vec2(0.0, 0.0), vec2(10.0, 10.0)).unwrap();
/// let hole = rectangle(vec2(2.0, 2.0), vec2(6.0, 6.0)).unwrap();
/// let shape = ComplexPolygon::new(vec![outer, hole]);
/// assert!(shape.contains(vec2(1.0, 1.0)));
/// assert!(!shape.contains(vec2(5.0, 5.0)));
/// assert_eq!(shape.length(), 64.0);
/// ```
#[derive(Debug, Clone)]
pub struct ComplexPolygon<T: Real = f64> {
    paths: Vec<Path<T>>,
    bounds: AABB<T>,
    length: T,
    max_intersections: usize,
}

impl<T> ComplexPolygon<T>
where
    T: Real,
{
    pub fn new(paths: Vec<Path<T>>) -> Self {
        let mut iter = paths.iter();
        let bounds = match iter.next() {
            Some(first) => iter.fold(first.bounds(), |acc, p| {
                let b = p.bounds();
                AABB::new(
                    num_traits::real::Real::min(acc.min_x, b.min_x),
                    num_traits::real::Real::min(acc.min_y, b.min_y),
                    num_traits::real::Real::max(acc.max_x, b.max_x),
                    num_traits::real::Real::max(acc.max_y, b.max_y),
                )
            }),
            None => AABB::new(T::zero(), T::zero(), T::zero(), T::zero()),
        };

        let length = paths.iter().fold(T::zero(), |acc, p| acc + p.length());
        let max_intersections = paths.iter().map(|p| p.point_count()).sum();

        Self {
            paths,
            bounds,
            length,
            max_intersections,
        }
    }

    #[inline]
    pub fn from_paths<I>(paths: I) -> Self
    where
        I: IntoIterator<Item = Path<T>>,
    {
        Self::new(paths.into_iter().collect())
    }

    #[inline]
    pub fn paths(&self) -> &[Path<T>] {
        &self.paths
    }

    #[inline]
    pub fn into_paths(self) -> Vec<Path<T>> {
        self.paths
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Path<T>> {
        self.paths.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    #[inline]
    pub fn bounds(&self) -> AABB<T> {
        self.bounds
    }

    /// Sum of all member lengths.
    #[inline]
    pub fn length(&self) -> T {
        self.length
    }

    /// Sum of all member point counts.
    #[inline]
    pub fn max_intersections(&self) -> usize {
        self.max_intersections
    }

    /// Whether the members are all open, all closed, or a mix of both.
    ///
    /// An empty complex polygon reports [PathType::Closed].
    pub fn path_type(&self) -> PathType {
        let has_open = self.paths.iter().any(|p| !p.is_closed());
        let has_closed = self.paths.iter().any(|p| p.is_closed());
        match (has_open, has_closed) {
            (true, true) => PathType::Mixed,
            (true, false) => PathType::Open,
            _ => PathType::Closed,
        }
    }

    /// Closest point on any member to `point`.
    ///
    /// Every member reporting a non-positive distance toggles the inside state, the result is the
    /// nearest member boundary negated if the final state is inside. An empty complex polygon
    /// reports the largest finite distance with the search point as the closest point.
    pub fn distance(&self, point: Vector2<T>) -> PointInfo<T> {
        let mut inside = false;
        let mut nearest: Option<PointInfo<T>> = None;
        for path in self.paths.iter() {
            let mut info = path.distance(point);
            if info.distance_from_path <= T::zero() {
                info.distance_from_path = -info.distance_from_path;
                inside = !inside;
            }

            match nearest {
                Some(ref n) if n.distance_from_path <= info.distance_from_path => {}
                _ => nearest = Some(info),
            }
        }

        let mut result = nearest.unwrap_or(PointInfo {
            search_point: point,
            closest_point: point,
            distance_from_path: T::max_finite(),
            distance_along_path: T::zero(),
            edge_index: 0,
            edge_t: T::zero(),
        });

        if inside {
            result.distance_from_path = -result.distance_from_path;
        }

        result
    }

    /// Even-odd containment across all members.
    pub fn contains(&self, point: Vector2<T>) -> bool {
        self.paths
            .iter()
            .fold(false, |inside, p| inside ^ p.contains(point))
    }

    /// Intersects of every member written in member order, then edge order within each member.
    pub fn find_intersections(
        &self,
        start: Vector2<T>,
        end: Vector2<T>,
        buffer: &mut [Vector2<T>],
    ) -> usize {
        let mut count = 0;
        for path in self.paths.iter() {
            if count == buffer.len() {
                break;
            }

            count += path.find_intersections(start, end, &mut buffer[count..]);
        }

        count
    }

    /// Position at arc length `distance` walking the members in order.
    ///
    /// `distance` wraps around the total length, returns `None` if the total length is zero. A
    /// distance landing exactly on the boundary between two members resolves to the start of the
    /// later member, members are half open `[start, end)` ranges of the total length.
    pub fn point_along_path(&self, distance: T) -> Option<PathPosition<T>> {
        if self.length <= T::zero() || !crate::core::traits::Real::to_f64_lossy(distance).is_finite() {
            return None;
        }

        let mut remaining = distance % self.length;
        if remaining < T::zero() {
            remaining = remaining + self.length;
        }

        let mut last_with_length = None;
        for path in self.paths.iter() {
            let length = path.length();
            if length <= T::zero() {
                continue;
            }

            if remaining < length {
                return path.point_along_path(remaining);
            }

            remaining = remaining - length;
            last_with_length = Some(path);
        }

        // rounding left the distance at the very end of the last member
        last_with_length.and_then(|p| p.point_along_path(p.length()))
    }

    /// Returns every member transformed by `matrix`, returns `self` unchanged if `matrix` is the
    /// identity.
    pub fn transform(self, matrix: &Matrix2D<T>) -> Result<Self, GeometryError> {
        if matrix.is_identity() {
            return Ok(self);
        }

        let paths = self
            .paths
            .into_iter()
            .map(|p| p.transform(matrix))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(paths))
    }
}

impl<T> From<Path<T>> for ComplexPolygon<T>
where
    T: Real,
{
    #[inline]
    fn from(value: Path<T>) -> Self {
        Self::new(vec![value])
    }
}

impl<T> FromIterator<Path<T>> for ComplexPolygon<T>
where
    T: Real,
{
    fn from_iter<I: IntoIterator<Item = Path<T>>>(iter: I) -> Self {
        Self::from_paths(iter)
    }
}

impl<'a, T> IntoIterator for &'a ComplexPolygon<T>
where
    T: Real,
{
    type Item = &'a Path<T>;
    type IntoIter = std::slice::Iter<'a, Path<T>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> PathSource for ComplexPolygon<T>
where
    T: Real,
{
    type Num = T;

    #[inline]
    fn bounds(&self) -> AABB<T> {
        ComplexPolygon::bounds(self)
    }

    #[inline]
    fn length(&self) -> T {
        ComplexPolygon::length(self)
    }

    #[inline]
    fn max_intersections(&self) -> usize {
        ComplexPolygon::max_intersections(self)
    }

    #[inline]
    fn distance(&self, point: Vector2<T>) -> PointInfo<T> {
        ComplexPolygon::distance(self, point)
    }

    #[inline]
    fn contains(&self, point: Vector2<T>) -> bool {
        ComplexPolygon::contains(self, point)
    }

    #[inline]
    fn find_intersections(
        &self,
        start: Vector2<T>,
        end: Vector2<T>,
        buffer: &mut [Vector2<T>],
    ) -> usize {
        ComplexPolygon::find_intersections(self, start, end, buffer)
    }

    #[inline]
    fn point_along_path(&self, distance: T) -> Option<PathPosition<T>> {
        ComplexPolygon::point_along_path(self, distance)
    }

    #[inline]
    fn path_type(&self) -> PathType {
        ComplexPolygon::path_type(self)
    }

    #[inline]
    fn contours(&self) -> &[Path<T>] {
        &self.paths
    }

    #[inline]
    fn transform(self, matrix: &Matrix2D<T>) -> Result<Self, GeometryError> {
        ComplexPolygon::transform(self, matrix)
    }
}
