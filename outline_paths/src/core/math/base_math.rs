use super::Vector2;
use crate::core::traits::Real;

/// Distance squared between the points `p0` and `p1`.
#[inline]
pub fn dist_squared<T>(p0: Vector2<T>, p1: Vector2<T>) -> T
where
    T: Real,
{
    let d = p0 - p1;
    d.dot(d)
}

/// Midpoint of a line segment defined by `p0` to `p1`.
#[inline]
pub fn midpoint<T>(p0: Vector2<T>, p1: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    Vector2::new((p0.x + p1.x) / T::two(), (p0.y + p1.y) / T::two())
}

/// Returns the closest point on the line segment from `p0` to `p1` to the `point` given along
/// with its parametric value on the segment (clamped to `[0, 1]`).
///
/// # Examples
///
/// ```
/// # use outline_paths::core::math::*;
/// let (closest, t) = line_seg_closest_point(vec2(0.0, 0.0), vec2(4.0, 0.0), vec2(1.0, 3.0));
/// assert!(closest.fuzzy_eq(vec2(1.0, 0.0)));
/// assert_eq!(t, 0.25);
///
/// // beyond the end of the segment
/// let (closest, t) = line_seg_closest_point(vec2(0.0, 0.0), vec2(4.0, 0.0), vec2(6.0, 1.0));
/// assert!(closest.fuzzy_eq(vec2(4.0, 0.0)));
/// assert_eq!(t, 1.0);
/// ```
#[inline]
pub fn line_seg_closest_point<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> (Vector2<T>, T)
where
    T: Real,
{
    // See: http://geomalgorithms.com/a02-_lines.html
    let v = p1 - p0;
    let w = point - p0;
    let c1 = w.dot(v);
    if c1 <= T::zero() {
        return (p0, T::zero());
    }

    let c2 = v.length_squared();
    if c2 <= c1 {
        return (p1, T::one());
    }

    let b = c1 / c2;
    (p0 + v.scale(b), b)
}

/// Returns `true` if a ray cast from `point` in the positive x direction crosses the edge `p0` to
/// `p1`.
///
/// Uses a half open rule on y (an edge includes its lower endpoint but not its upper one) so a ray
/// passing exactly through a shared vertex is counted once.
#[inline]
pub fn ray_crosses_edge<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> bool
where
    T: Real,
{
    if (p0.y > point.y) == (p1.y > point.y) {
        return false;
    }

    let x_at_y = p0.x + (point.y - p0.y) * (p1.x - p0.x) / (p1.y - p0.y);
    point.x < x_at_y
}
