//! Builders for common closed shapes.
use crate::{
    core::{
        math::{vec2, Vector2},
        traits::Real,
    },
    error::GeometryError,
    path::Path,
    segment::{CubicBezierSegment, LinearSegment},
};

/// Control point distance (relative to the radius) for a cubic approximating a quarter circle.
const ELLIPSE_KAPPA: f64 = 0.552_284_749_831;

fn positive_finite<T: Real>(value: T) -> bool {
    crate::core::traits::Real::to_f64_lossy(value).is_finite() && value > T::zero()
}

fn polygon_from_points<T: Real>(points: Vec<Vector2<T>>) -> Result<Path<T>, GeometryError> {
    Path::closed(vec![LinearSegment::new(points)?.into()])
}

/// Axis aligned rectangle with its minimum corner at `origin`.
///
/// Vertexes are counter clockwise (y up) starting at `origin`.
pub fn rectangle<T>(origin: Vector2<T>, size: Vector2<T>) -> Result<Path<T>, GeometryError>
where
    T: Real,
{
    if !positive_finite(size.x) || !positive_finite(size.y) {
        return Err(GeometryError::InvalidShapeArgument(
            "rectangle size must be finite and greater than zero",
        ));
    }

    polygon_from_points(vec![
        origin,
        vec2(origin.x + size.x, origin.y),
        origin + size,
        vec2(origin.x, origin.y + size.y),
    ])
}

/// Regular polygon with `sides` vertexes on the circle of `radius` around `center`.
///
/// The first vertex is at `angle` radians from the positive x axis.
pub fn regular_polygon<T>(
    center: Vector2<T>,
    sides: usize,
    radius: T,
    angle: T,
) -> Result<Path<T>, GeometryError>
where
    T: Real,
{
    if sides < 3 {
        return Err(GeometryError::InvalidShapeArgument(
            "regular polygon requires at least 3 sides",
        ));
    }

    if !positive_finite(radius) {
        return Err(GeometryError::InvalidShapeArgument(
            "regular polygon radius must be finite and greater than zero",
        ));
    }

    let step = T::constant(std::f64::consts::TAU / sides as f64);
    let points = (0..sides)
        .map(|i| {
            let a = angle + step * T::constant(i as f64);
            center + vec2(a.cos(), a.sin()).scale(radius)
        })
        .collect();

    polygon_from_points(points)
}

/// Star with `prongs` points alternating between `outer_radius` and `inner_radius`.
///
/// The first outer vertex is at `angle` radians from the positive x axis.
pub fn star<T>(
    center: Vector2<T>,
    prongs: usize,
    inner_radius: T,
    outer_radius: T,
    angle: T,
) -> Result<Path<T>, GeometryError>
where
    T: Real,
{
    if prongs < 3 {
        return Err(GeometryError::InvalidShapeArgument(
            "star requires at least 3 prongs",
        ));
    }

    if !positive_finite(inner_radius) || !positive_finite(outer_radius) {
        return Err(GeometryError::InvalidShapeArgument(
            "star radii must be finite and greater than zero",
        ));
    }

    let vertex_count = prongs * 2;
    let step = T::constant(std::f64::consts::TAU / vertex_count as f64);
    let points = (0..vertex_count)
        .map(|i| {
            let radius = if i % 2 == 0 { outer_radius } else { inner_radius };
            let a = angle + step * T::constant(i as f64);
            center + vec2(a.cos(), a.sin()).scale(radius)
        })
        .collect();

    polygon_from_points(points)
}

/// Ellipse of `size` (full width and height) centered at `center`, built from four chained cubic
/// curves.
pub fn ellipse<T>(center: Vector2<T>, size: Vector2<T>) -> Result<Path<T>, GeometryError>
where
    T: Real,
{
    if !positive_finite(size.x) || !positive_finite(size.y) {
        return Err(GeometryError::InvalidShapeArgument(
            "ellipse size must be finite and greater than zero",
        ));
    }

    let rx = size.x * T::half();
    let ry = size.y * T::half();
    let kappa = T::constant(ELLIPSE_KAPPA);
    let cx = rx * kappa;
    let cy = ry * kappa;
    let c = center;

    // counter clockwise from the rightmost point
    let control_points = vec![
        vec2(c.x + rx, c.y),
        vec2(c.x + rx, c.y + cy),
        vec2(c.x + cx, c.y + ry),
        vec2(c.x, c.y + ry),
        vec2(c.x - cx, c.y + ry),
        vec2(c.x - rx, c.y + cy),
        vec2(c.x - rx, c.y),
        vec2(c.x - rx, c.y - cy),
        vec2(c.x - cx, c.y - ry),
        vec2(c.x, c.y - ry),
        vec2(c.x + cx, c.y - ry),
        vec2(c.x + rx, c.y - cy),
        vec2(c.x + rx, c.y),
    ];

    Path::closed(vec![CubicBezierSegment::new(control_points)?.into()])
}
