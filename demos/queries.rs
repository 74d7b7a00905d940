use outline_paths::{
    core::math::*,
    path_open,
    shape::{rectangle, ComplexPolygon},
};

fn main() {
    env_logger::init();
    containment();
    intersections();
    arc_length();
}

fn square_with_hole() -> ComplexPolygon {
    ComplexPolygon::new(vec![
        rectangle(vec2(0.0, 0.0), vec2(10.0, 10.0)).expect("valid rectangle"),
        rectangle(vec2(2.0, 2.0), vec2(6.0, 6.0)).expect("valid rectangle"),
    ])
}

fn containment() {
    println!("Even-odd containment...");

    let shape = square_with_hole();
    for point in [vec2(1.0, 1.0), vec2(5.0, 5.0), vec2(12.0, 5.0)] {
        let info = shape.distance(point);
        println!(
            "  ({}, {}): contained {}, signed distance {:.3}, closest ({:.3}, {:.3})",
            point.x,
            point.y,
            shape.contains(point),
            info.distance_from_path,
            info.closest_point.x,
            info.closest_point.y
        );
    }
    assert!(shape.contains(vec2(1.0, 1.0)));
    assert!(!shape.contains(vec2(5.0, 5.0)));
    println!();
}

fn intersections() {
    println!("Line intersections...");

    let shape = square_with_hole();
    let mut buffer = vec![Vector2::zero(); shape.max_intersections()];
    let count = shape.find_intersections(vec2(-1.0, 5.0), vec2(11.0, 5.0), &mut buffer);
    println!("  {count} intersections (member order, then edge order):");
    for p in &buffer[..count] {
        println!("    ({:.3}, {:.3})", p.x, p.y);
    }
    assert_eq!(count, 4);
    println!();
}

fn arc_length() {
    println!("Arc length positions...");

    let path = path_open![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)].expect("valid path");
    for distance in [0.0, 5.0, 10.0, 15.0, -2.0] {
        match path.point_along_path(distance) {
            Some(pos) => println!(
                "  at {distance}: ({:.3}, {:.3}) heading {:.3} rad",
                pos.point.x,
                pos.point.y,
                pos.angle()
            ),
            None => println!("  at {distance}: none"),
        }
    }
    println!();
}
