use outline_paths::{
    core::math::{vec2, Vector2},
    path::Path,
    segment::{CubicBezierSegment, LinearSegment},
    shape::{rectangle, ComplexPolygon},
};

/// Straight open line from `start` to `end`.
pub fn line(start: Vector2<f64>, end: Vector2<f64>) -> Path<f64> {
    Path::open(vec![LinearSegment::line(start, end).into()]).unwrap()
}

/// Square outer boundary from (0, 0) to (10, 10) with a square hole from (2, 2) to (8, 8).
pub fn square_with_hole() -> ComplexPolygon<f64> {
    ComplexPolygon::new(vec![
        rectangle(vec2(0.0, 0.0), vec2(10.0, 10.0)).unwrap(),
        rectangle(vec2(2.0, 2.0), vec2(6.0, 6.0)).unwrap(),
    ])
}

/// Closed "D" shape: a straight edge along the y axis and a bezier bulge to the right.
pub fn d_shape() -> Path<f64> {
    Path::closed(vec![
        LinearSegment::line(vec2(0.0, 100.0), vec2(0.0, 0.0)).into(),
        CubicBezierSegment::cubic(
            vec2(0.0, 0.0),
            vec2(80.0, 0.0),
            vec2(80.0, 100.0),
            vec2(0.0, 100.0),
        )
        .into(),
    ])
    .unwrap()
}

/// Open S curve made of two chained cubic curves.
pub fn s_curve() -> Path<f64> {
    Path::open(vec![
        CubicBezierSegment::new(vec![
            vec2(0.0, 0.0),
            vec2(0.0, 60.0),
            vec2(60.0, 60.0),
            vec2(60.0, 0.0),
            vec2(60.0, -60.0),
            vec2(120.0, -60.0),
            vec2(120.0, 0.0),
        ])
        .unwrap()
        .into(),
    ])
    .unwrap()
}
