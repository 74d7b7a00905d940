use outline_paths::{
    core::{math::*, traits::FuzzyEq},
    path::{Path, PathKind},
    segment::{CubicBezierSegment, LinearSegment, Segment},
    shape::{ellipse, regular_polygon},
};

fn main() {
    env_logger::init();
    segments();
    paths();
    primitives();
    transforms();
}

fn segments() {
    println!("Flattening segments...");

    let line = LinearSegment::new(vec![vec2(0.0, 0.0), vec2(10.0, 0.0), vec2(10.0, 10.0)])
        .expect("three points is a valid linear segment");
    assert_eq!(line.flatten().len(), 3);
    println!("Linear segment flattens to its own {} points", line.points().len());

    let curve = CubicBezierSegment::cubic(
        vec2(0.0, 0.0),
        vec2(0.0, 50.0),
        vec2(100.0, 50.0),
        vec2(100.0, 0.0),
    );
    let points = curve.flatten();
    println!("Cubic bezier flattens to {} points", points.len());

    let quad = CubicBezierSegment::from_quadratic(vec2(0.0, 0.0), vec2(50.0, 50.0), vec2(100.0, 0.0));
    assert!(quad.eval(0, 0.5).fuzzy_eq(vec2(50.0, 25.0)));
    println!("Quadratic elevated to cubic: {:?}", quad.control_points());

    assert!(CubicBezierSegment::new(vec![vec2(0.0, 0.0); 5]).is_err());
    println!("5 control points rejected as expected\n");
}

fn paths() {
    println!("Building paths...");

    let segments: Vec<Segment> = vec![
        LinearSegment::line(vec2(0.0, 100.0), vec2(0.0, 0.0)).into(),
        CubicBezierSegment::cubic(
            vec2(0.0, 0.0),
            vec2(80.0, 0.0),
            vec2(80.0, 100.0),
            vec2(0.0, 100.0),
        )
        .into(),
    ];

    let open = Path::open(segments).expect("segments are not empty");
    println!(
        "Open path: {} points, length {:.3}",
        open.point_count(),
        open.length()
    );

    let closed = open.into_closed().expect("closing keeps the points");
    assert_eq!(closed.kind(), PathKind::Closed);
    let b = closed.bounds();
    println!(
        "Closed path: length {:.3}, bounds ({:.1}, {:.1}) to ({:.1}, {:.1})\n",
        closed.length(),
        b.min_x,
        b.min_y,
        b.max_x,
        b.max_y
    );
}

fn primitives() {
    println!("Primitive shapes...");

    let hexagon = regular_polygon(vec2(0.0, 0.0), 6, 10.0, 0.0).expect("valid hexagon");
    assert!(hexagon.length().fuzzy_eq(60.0));
    println!("Hexagon perimeter: {:.3}", hexagon.length());

    let circle = ellipse(vec2(0.0, 0.0), vec2(20.0, 20.0)).expect("valid ellipse");
    println!(
        "Circle of radius 10 approximated with {} points, perimeter {:.3} (true {:.3})\n",
        circle.point_count(),
        circle.length(),
        20.0 * std::f64::consts::PI
    );
}

fn transforms() {
    println!("Transforms...");

    let square = regular_polygon(vec2(0.0, 0.0), 4, 1.0, std::f64::consts::FRAC_PI_4)
        .expect("valid square");
    let rotate_then_move =
        Matrix2D::rotation(std::f64::consts::FRAC_PI_4).then(&Matrix2D::translation(5.0, 5.0));
    let moved = square
        .transform(&rotate_then_move)
        .expect("transform rebuilds a valid path");
    let b = moved.bounds();
    println!(
        "Rotated and translated square bounds: ({:.3}, {:.3}) to ({:.3}, {:.3})",
        b.min_x, b.min_y, b.max_x, b.max_y
    );

    let unchanged = moved
        .transform(&Matrix2D::identity())
        .expect("identity returns the same path");
    assert_eq!(unchanged.bounds().min_x, b.min_x);
    println!("Identity transform leaves the path untouched\n");
}
