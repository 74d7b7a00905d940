use super::Vector2;
use crate::core::traits::Real;

/// Holds the result of finding the intersect between two line segments.
#[derive(Debug, Copy, Clone)]
pub enum LineLineIntr<T>
where
    T: Real,
{
    /// No intersect, segments are parallel, collinear, or degenerate (zero length).
    NoIntersect,
    /// There is a true intersect between the line segments.
    TrueIntersect {
        /// Parametric value for intersect on first segment.
        seg1_t: T,
        /// Parametric value for intersect on second segment.
        seg2_t: T,
    },
    /// The lines intersect but one or both of the segments must be extended to reach it.
    FalseIntersect {
        /// Parametric value for intersect on first segment.
        seg1_t: T,
        /// Parametric value for intersect on second segment.
        seg2_t: T,
    },
}

/// Finds the intersect between two line segments `v1->v2` and `u1->u2`.
///
/// Parametric solution using the general line segment equation `P(t) = p0 + t * (p1 - p0)`.
/// Parallel and collinear segments are always reported as [LineLineIntr::NoIntersect], overlap
/// is not resolved. `epsilon` is applied at position scale (parametric values are multiplied by
/// segment length before the range check) so short and long segments behave the same.
///
/// # Examples
///
/// ```
/// # use outline_paths::core::math::*;
/// let v1 = Vector2::new(0.0, 0.0);
/// let v2 = Vector2::new(1.0, 0.0);
/// let u1 = Vector2::new(0.5, -1.0);
/// let u2 = Vector2::new(0.5, 1.0);
/// if let LineLineIntr::TrueIntersect { seg1_t, seg2_t } = line_line_intr(v1, v2, u1, u2, 1e-5) {
///     assert_eq!(seg1_t, 0.5);
///     assert_eq!(seg2_t, 0.5);
/// } else {
///     unreachable!("expected true intersection between line segments");
/// }
///
/// // parallel segments never intersect
/// let u1 = Vector2::new(0.0, 1.0);
/// let u2 = Vector2::new(1.0, 1.0);
/// assert!(matches!(line_line_intr(v1, v2, u1, u2, 1e-5), LineLineIntr::NoIntersect));
/// ```
pub fn line_line_intr<T>(
    v1: Vector2<T>,
    v2: Vector2<T>,
    u1: Vector2<T>,
    u2: Vector2<T>,
    epsilon: T,
) -> LineLineIntr<T>
where
    T: Real,
{
    // http://geomalgorithms.com/a05-_intersect-1.html
    use LineLineIntr::*;

    let v = v2 - v1;
    let u = u2 - u1;
    let v_pdot_u = v.perp_dot(u);

    if v_pdot_u.fuzzy_eq_zero_eps(epsilon) {
        return NoIntersect;
    }

    let w = v1 - u1;
    let seg1_t = u.perp_dot(w) / v_pdot_u;
    let seg2_t = v.perp_dot(w) / v_pdot_u;

    let seg1_length = v.length();
    let seg2_length = u.length();
    if !(seg1_t * seg1_length).fuzzy_in_range_eps(T::zero(), seg1_length, epsilon)
        || !(seg2_t * seg2_length).fuzzy_in_range_eps(T::zero(), seg2_length, epsilon)
    {
        return FalseIntersect { seg1_t, seg2_t };
    }

    TrueIntersect { seg1_t, seg2_t }
}
