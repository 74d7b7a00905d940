use super::{points_bounds, transform_points, FlattenOptions};
use crate::{
    core::{
        math::{dist_squared, Matrix2D, Vector2},
        traits::Real,
    },
    error::GeometryError,
};
use static_aabb2d_index::AABB;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One or more chained cubic bezier curves.
///
/// Holds `1 + 3k` control points describing `k` curves, curve `i` uses control points `3i` to
/// `3i + 3` and shares its end point with the start of curve `i + 1`.
///
/// # Examples
///
/// ```
/// # use outline_paths::core::math::*;
/// # use outline_paths::segment::*;
/// let curve = CubicBezierSegment::new(vec![
///     vec2(0.0, 0.0),
///     vec2(0.0, 50.0),
///     vec2(100.0, 50.0),
///     vec2(100.0, 0.0),
/// ])
/// .unwrap();
/// assert_eq!(curve.curve_count(), 1);
/// let points = curve.flatten();
/// assert!(points.len() > 4);
/// assert_eq!(points[0], vec2(0.0, 0.0));
/// assert_eq!(points[points.len() - 1], vec2(100.0, 0.0));
///
/// // 5 control points is not 1 + 3k
/// assert!(CubicBezierSegment::new(vec![vec2(0.0, 0.0); 5]).is_err());
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
pub struct CubicBezierSegment<T = f64> {
    control_points: Vec<Vector2<T>>,
}

impl<T> CubicBezierSegment<T>
where
    T: Real,
{
    /// Create a bezier segment, fails unless `control_points.len()` is `1 + 3k` with `k >= 1`.
    pub fn new(control_points: Vec<Vector2<T>>) -> Result<Self, GeometryError> {
        let count = control_points.len();
        if count < 4 || (count - 1) % 3 != 0 {
            return Err(GeometryError::InvalidControlPointCount(count));
        }

        Ok(Self { control_points })
    }

    /// Create a single cubic curve.
    #[inline]
    pub fn cubic(
        start: Vector2<T>,
        control1: Vector2<T>,
        control2: Vector2<T>,
        end: Vector2<T>,
    ) -> Self {
        Self {
            control_points: vec![start, control1, control2, end],
        }
    }

    /// Create the cubic curve tracing the same path as the quadratic curve given (degree
    /// elevation).
    pub fn from_quadratic(start: Vector2<T>, control: Vector2<T>, end: Vector2<T>) -> Self {
        let two_thirds = T::two() / T::constant(3.0);
        let c1 = start + (control - start).scale(two_thirds);
        let c2 = end + (control - end).scale(two_thirds);
        Self::cubic(start, c1, c2, end)
    }

    #[inline]
    pub fn control_points(&self) -> &[Vector2<T>] {
        &self.control_points
    }

    /// Number of chained cubic curves.
    #[inline]
    pub fn curve_count(&self) -> usize {
        (self.control_points.len() - 1) / 3
    }

    #[inline]
    pub fn start_point(&self) -> Vector2<T> {
        self.control_points[0]
    }

    #[inline]
    pub fn end_point(&self) -> Vector2<T> {
        self.control_points[self.control_points.len() - 1]
    }

    /// Evaluate curve `curve_index` at parametric value `t` in `[0, 1]`.
    ///
    /// # Panics
    ///
    /// Panics if `curve_index >= self.curve_count()`.
    #[inline]
    pub fn eval(&self, curve_index: usize, t: T) -> Vector2<T> {
        let i = curve_index * 3;
        bernstein(
            [
                self.control_points[i],
                self.control_points[i + 1],
                self.control_points[i + 2],
                self.control_points[i + 3],
            ],
            t,
        )
    }

    /// Flatten using default [FlattenOptions].
    #[inline]
    pub fn flatten(&self) -> Vec<Vector2<T>> {
        self.flatten_opt(&FlattenOptions::default())
    }

    /// Adaptively subdivide every curve into a polyline.
    ///
    /// All returned points lie exactly on the curve, the approximation error is in the chords
    /// between them. The point shared by consecutive curves is only emitted once.
    pub fn flatten_opt(&self, options: &FlattenOptions<T>) -> Vec<Vector2<T>> {
        let mut result = Vec::new();
        let mut depth_capped = false;

        for chunk in self.control_points.windows(4).step_by(3) {
            let curve = [chunk[0], chunk[1], chunk[2], chunk[3]];
            let mut subdivider = Subdivider {
                curve,
                options,
                depth_capped: false,
            };

            if result.is_empty() {
                result.push(curve[0]);
            }
            subdivider.split(T::zero(), T::one(), 0, &mut result);
            result.push(curve[3]);
            depth_capped |= subdivider.depth_capped;
        }

        if depth_capped {
            log::warn!(
                "bezier flattening hit the recursion depth cap ({}), result may be coarse",
                options.max_depth
            );
        }

        log::trace!(
            "flattened {} bezier curve(s) into {} points",
            self.curve_count(),
            result.len()
        );

        result
    }

    /// Exact bounding box of the curves, independent of any flattening tolerance.
    ///
    /// Found from the curve end points and the points where either coordinate reaches an
    /// extremum inside a curve.
    pub fn bounds(&self) -> AABB<T> {
        let mut points = vec![self.start_point()];
        for (i, c) in self.control_points.windows(4).step_by(3).enumerate() {
            points.push(c[3]);
            let x = extrema_params(c[0].x, c[1].x, c[2].x, c[3].x);
            let y = extrema_params(c[0].y, c[1].y, c[2].y, c[3].y);
            points.extend(x.into_iter().chain(y).flatten().map(|t| self.eval(i, t)));
        }

        points_bounds(&points)
    }

    #[must_use]
    pub fn transform(mut self, matrix: &Matrix2D<T>) -> Self {
        transform_points(&mut self.control_points, matrix);
        self
    }
}

/// Evaluate the cubic Bernstein polynomial for the control points `p` at `t`.
#[inline]
fn bernstein<T>(p: [Vector2<T>; 4], t: T) -> Vector2<T>
where
    T: Real,
{
    let three = T::constant(3.0);
    let mt = T::one() - t;
    let a = mt * mt * mt;
    let b = three * t * mt * mt;
    let c = three * t * t * mt;
    let d = t * t * t;
    Vector2::new(
        a * p[0].x + b * p[1].x + c * p[2].x + d * p[3].x,
        a * p[0].y + b * p[1].y + c * p[2].y + d * p[3].y,
    )
}

/// Parametric values in `(0, 1)` where the 1D cubic with control values `p0..p3` has zero slope.
fn extrema_params<T>(p0: T, p1: T, p2: T, p3: T) -> [Option<T>; 2]
where
    T: Real,
{
    // derivative divided by 3 is a t^2 + b t + c
    let a = p3 - p0 + T::constant(3.0) * (p1 - p2);
    let b = T::two() * (p0 - T::two() * p1 + p2);
    let c = p1 - p0;
    let in_range = |t: T| (t > T::zero() && t < T::one()).then_some(t);

    if a.fuzzy_eq_zero() {
        if b.fuzzy_eq_zero() {
            return [None, None];
        }
        return [in_range(-c / b), None];
    }

    let discriminant = b * b - T::constant(4.0) * a * c;
    if discriminant < T::zero() {
        return [None, None];
    }

    let root = discriminant.sqrt();
    let two_a = T::two() * a;
    [in_range((-b + root) / two_a), in_range((-b - root) / two_a)]
}

/// Recursive midpoint splitter for a single cubic curve.
struct Subdivider<'a, T> {
    curve: [Vector2<T>; 4],
    options: &'a FlattenOptions<T>,
    depth_capped: bool,
}

impl<T> Subdivider<'_, T>
where
    T: Real,
{
    /// Push the interior points approximating `[t0, t1]` in order, end points excluded.
    fn split(&mut self, t0: T, t1: T, depth: usize, out: &mut Vec<Vector2<T>>) {
        if depth > self.options.max_depth {
            self.depth_capped = true;
            return;
        }

        let left = bernstein(self.curve, t0);
        let right = bernstein(self.curve, t1);
        if dist_squared(left, right) < self.options.min_sqr_distance {
            return;
        }

        let tm = (t0 + t1) / T::two();
        let mid = bernstein(self.curve, tm);

        // the top level is always split, an S shaped curve can have its midpoint exactly between
        // its end points
        if depth > 0 && self.is_straight(left, mid, right) {
            return;
        }

        self.split(t0, tm, depth + 1, out);
        out.push(mid);
        self.split(tm, t1, depth + 1, out);
    }

    fn is_straight(&self, left: Vector2<T>, mid: Vector2<T>, right: Vector2<T>) -> bool {
        match ((left - mid).try_normalize(), (right - mid).try_normalize()) {
            (Some(l), Some(r)) => l.dot(r) <= self.options.division_threshold,
            // midpoint coincides with an end point, cusp or loop, keep splitting
            _ => false,
        }
    }
}

impl<T> TryFrom<Vec<Vector2<T>>> for CubicBezierSegment<T>
where
    T: Real,
{
    type Error = GeometryError;

    #[inline]
    fn try_from(control_points: Vec<Vector2<T>>) -> Result<Self, Self::Error> {
        Self::new(control_points)
    }
}

impl<T> From<CubicBezierSegment<T>> for Vec<Vector2<T>> {
    #[inline]
    fn from(value: CubicBezierSegment<T>) -> Self {
        value.control_points
    }
}
