use super::{PathPosition, PointInfo};
use crate::{
    core::{
        math::{line_line_intr, line_seg_closest_point, ray_crosses_edge, LineLineIntr, Vector2},
        traits::Real,
    },
    error::GeometryError,
    segment::points_bounds,
};
use static_aabb2d_index::{StaticAABB2DIndex, StaticAABB2DIndexBuilder, AABB};

/// Flattened polyline of a contour with all derived values precomputed.
///
/// This is the query engine every contour delegates to. Construction computes bounds, cumulative
/// arc lengths, and a spatial index of edge bounding boxes once, all queries afterwards are
/// read only.
///
/// Edge `i` runs from point `i` to point `i + 1`, a closed polyline has an additional closing edge
/// from the last point back to point 0.
#[derive(Debug, Clone)]
pub struct IndexedPolyline<T: Real> {
    points: Vec<Vector2<T>>,
    is_closed: bool,
    /// Arc length at the start of each edge, plus the total length as the last entry.
    path_lengths: Vec<T>,
    bounds: AABB<T>,
    spatial_index: StaticAABB2DIndex<T>,
}

impl<T> IndexedPolyline<T>
where
    T: Real,
{
    /// Build the polyline from already flattened `points`.
    ///
    /// Fails if fewer than two points are given.
    pub fn new(points: Vec<Vector2<T>>, is_closed: bool) -> Result<Self, GeometryError> {
        if points.len() < 2 {
            return Err(GeometryError::TooFewPoints {
                required: 2,
                actual: points.len(),
            });
        }

        let edge_count = if is_closed {
            points.len()
        } else {
            points.len() - 1
        };

        let mut path_lengths = Vec::with_capacity(edge_count + 1);
        let mut builder = StaticAABB2DIndexBuilder::new(edge_count);
        let mut acc_length = T::zero();
        for i in 0..edge_count {
            let p0 = points[i];
            let p1 = points[(i + 1) % points.len()];
            path_lengths.push(acc_length);
            acc_length = acc_length + p0.distance(p1);

            let min = p0.min(p1);
            let max = p0.max(p1);
            builder.add(min.x, min.y, max.x, max.y);
        }
        path_lengths.push(acc_length);

        let spatial_index = builder
            .build()
            .map_err(|e| GeometryError::SpatialIndex(e.to_string()))?;

        let bounds = points_bounds(&points);

        log::trace!(
            "digitized {} contour: {} points, length {:?}",
            if is_closed { "closed" } else { "open" },
            points.len(),
            acc_length
        );

        Ok(Self {
            points,
            is_closed,
            path_lengths,
            bounds,
            spatial_index,
        })
    }

    /// Same points with a different closed flag.
    pub fn with_closed(self, is_closed: bool) -> Result<Self, GeometryError> {
        if self.is_closed == is_closed {
            return Ok(self);
        }

        Self::new(self.points, is_closed)
    }

    /// All polyline points, vertex 0 is the contour start.
    #[inline]
    pub fn points(&self) -> &[Vector2<T>] {
        &self.points
    }

    #[inline]
    pub fn into_points(self) -> Vec<Vector2<T>> {
        self.points
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Number of edges, includes the closing edge if closed.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.path_lengths.len() - 1
    }

    /// Total arc length, includes the closing edge if closed.
    #[inline]
    pub fn length(&self) -> T {
        self.path_lengths[self.path_lengths.len() - 1]
    }

    #[inline]
    pub fn bounds(&self) -> AABB<T> {
        self.bounds
    }

    /// Start and end point of edge `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.edge_count()`.
    #[inline]
    pub fn edge(&self, index: usize) -> (Vector2<T>, Vector2<T>) {
        (
            self.points[index],
            self.points[(index + 1) % self.points.len()],
        )
    }

    /// Iterate over `(start_index, start, end)` of every edge.
    pub fn iter_edges(&self) -> impl Iterator<Item = (usize, Vector2<T>, Vector2<T>)> + '_ {
        (0..self.edge_count()).map(move |i| {
            let (p0, p1) = self.edge(i);
            (i, p0, p1)
        })
    }

    /// Write the intersects between the line segment `start` to `end` and the polyline into
    /// `buffer`, returning the number written.
    ///
    /// Intersects are in edge order, NOT sorted by distance from `start`. Parallel and collinear
    /// overlaps are not reported. A line passing exactly through a vertex is reported once for each
    /// edge touching that vertex. At most `min(buffer.len(), self.edge_count())` points are
    /// written.
    pub fn find_intersections(
        &self,
        start: Vector2<T>,
        end: Vector2<T>,
        buffer: &mut [Vector2<T>],
    ) -> usize {
        if buffer.is_empty() {
            return 0;
        }

        let min = start.min(end);
        let max = start.max(end);
        let mut candidates = self.spatial_index.query(min.x, min.y, max.x, max.y);
        candidates.sort_unstable();

        let eps = T::fuzzy_epsilon();
        let mut count = 0;
        for edge_index in candidates {
            let (p0, p1) = self.edge(edge_index);
            if let LineLineIntr::TrueIntersect { seg1_t, .. } = line_line_intr(p0, p1, start, end, eps)
            {
                buffer[count] = p0.lerp(p1, seg1_t);
                count += 1;
                if count == buffer.len() {
                    break;
                }
            }
        }

        count
    }

    /// Even-odd ray casting test. Always `false` for an open polyline.
    ///
    /// Result for a point lying exactly on an edge is not defined.
    pub fn point_in_polygon(&self, point: Vector2<T>) -> bool {
        if !self.is_closed {
            return false;
        }

        let b = &self.bounds;
        if point.x < b.min_x || point.x > b.max_x || point.y < b.min_y || point.y > b.max_y {
            return false;
        }

        // only edges overlapping the ray from point toward +x can cross it
        let candidates = self
            .spatial_index
            .query(point.x, point.y, b.max_x, point.y);

        candidates
            .into_iter()
            .filter(|&i| {
                let (p0, p1) = self.edge(i);
                ray_crosses_edge(p0, p1, point)
            })
            .count()
            % 2
            == 1
    }

    /// Find the closest point on the polyline to `point`.
    pub fn distance_from_path(&self, point: Vector2<T>) -> PointInfo<T> {
        let mut result = PointInfo {
            search_point: point,
            closest_point: self.points[0],
            distance_from_path: T::zero(),
            distance_along_path: T::zero(),
            edge_index: 0,
            edge_t: T::zero(),
        };

        let mut min_dist_squared = T::max_finite();
        for (i, p0, p1) in self.iter_edges() {
            let (closest, t) = line_seg_closest_point(p0, p1, point);
            let dist_squared = (point - closest).length_squared();
            if dist_squared < min_dist_squared {
                min_dist_squared = dist_squared;
                result.closest_point = closest;
                result.edge_index = i;
                result.edge_t = t;
            }
        }

        result.distance_from_path = min_dist_squared.sqrt();
        result.distance_along_path = self.path_lengths[result.edge_index]
            + self.points[result.edge_index].distance(result.closest_point);

        result
    }

    /// Position at arc length `distance` from the start.
    ///
    /// `distance` wraps around the total length (negative values count back from the end). Returns
    /// `None` for a polyline of zero length.
    pub fn point_along_path(&self, distance: T) -> Option<PathPosition<T>> {
        let total = self.length();
        if total <= T::zero() || !crate::core::traits::Real::to_f64_lossy(distance).is_finite() {
            return None;
        }

        let mut target = distance % total;
        if target < T::zero() {
            target = target + total;
        }

        // first edge whose end length passes the target, zero length edges are skipped naturally
        let edge_count = self.edge_count();
        let edge_index = self.path_lengths[1..]
            .partition_point(|&l| l <= target)
            .min(edge_count - 1);
        // float rounding can leave the target at the very end, fall back to the last edge that has
        // any length
        let edge_index = (0..=edge_index)
            .rev()
            .find(|&i| self.path_lengths[i + 1] > self.path_lengths[i])?;

        let (p0, p1) = self.edge(edge_index);
        let edge_start = self.path_lengths[edge_index];
        let edge_length = self.path_lengths[edge_index + 1] - edge_start;
        let t = num_traits::real::Real::min((target - edge_start) / edge_length, T::one());

        Some(PathPosition {
            point: p0.lerp(p1, t),
            direction: (p1 - p0).scale(T::one() / edge_length),
            edge_index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;
    use crate::core::traits::FuzzyEq;

    fn square(closed: bool) -> IndexedPolyline<f64> {
        IndexedPolyline::new(
            vec![
                vec2(0.0, 0.0),
                vec2(10.0, 0.0),
                vec2(10.0, 10.0),
                vec2(0.0, 10.0),
            ],
            closed,
        )
        .unwrap()
    }

    #[test]
    fn length_includes_closing_edge_only_when_closed() {
        assert!(square(false).length().fuzzy_eq(30.0));
        assert!(square(true).length().fuzzy_eq(40.0));
        assert_eq!(square(false).edge_count(), 3);
        assert_eq!(square(true).edge_count(), 4);
    }

    #[test]
    fn intersections_in_edge_order() {
        let pl = square(true);
        let mut buffer = [Vector2::zero(); 4];
        // horizontal line crossing the right edge (index 1) then the left edge (index 3)
        let count = pl.find_intersections(vec2(-5.0, 5.0), vec2(15.0, 5.0), &mut buffer);
        assert_eq!(count, 2);
        assert!(buffer[0].fuzzy_eq(vec2(10.0, 5.0)));
        assert!(buffer[1].fuzzy_eq(vec2(0.0, 5.0)));
    }

    #[test]
    fn intersections_respect_buffer_length() {
        let pl = square(true);
        let mut buffer = [Vector2::zero(); 1];
        let count = pl.find_intersections(vec2(-5.0, 5.0), vec2(15.0, 5.0), &mut buffer);
        assert_eq!(count, 1);
        assert_eq!(pl.find_intersections(vec2(-5.0, 5.0), vec2(15.0, 5.0), &mut []), 0);
    }

    #[test]
    fn point_in_polygon_open_is_false() {
        assert!(square(true).point_in_polygon(vec2(5.0, 5.0)));
        assert!(!square(false).point_in_polygon(vec2(5.0, 5.0)));
        assert!(!square(true).point_in_polygon(vec2(15.0, 5.0)));
    }

    #[test]
    fn closest_point_reports_edge_and_path_distance() {
        let pl = square(false);
        let info = pl.distance_from_path(vec2(12.0, 4.0));
        assert_eq!(info.edge_index, 1);
        assert!(info.closest_point.fuzzy_eq(vec2(10.0, 4.0)));
        assert!(info.distance_from_path.fuzzy_eq(2.0));
        assert!(info.distance_along_path.fuzzy_eq(14.0));
        assert!(info.edge_t.fuzzy_eq(0.4));
    }

    #[test]
    fn point_along_path_wraps() {
        let pl = square(true);
        let pos = pl.point_along_path(45.0).unwrap();
        assert!(pos.point.fuzzy_eq(vec2(5.0, 0.0)));
        assert!(pos.direction.fuzzy_eq(vec2(1.0, 0.0)));

        let pos = pl.point_along_path(-5.0).unwrap();
        assert_eq!(pos.edge_index, 3);
        assert!(pos.point.fuzzy_eq(vec2(0.0, 5.0)));
        assert!(pos.direction.fuzzy_eq(vec2(0.0, -1.0)));
    }

    #[test]
    fn point_along_zero_length_is_none() {
        let pl = IndexedPolyline::new(vec![vec2(1.0, 1.0), vec2(1.0, 1.0)], false).unwrap();
        assert!(pl.point_along_path(0.0).is_none());
    }

    #[test]
    fn too_few_points() {
        assert!(IndexedPolyline::<f64>::new(vec![vec2(0.0, 0.0)], false).is_err());
    }
}
