use outline_paths::{
    core::math::*,
    outline::{generate_outline, EndCapStyle, JointStyle, OutlineOptions},
    path_open,
    shape::{star, ComplexPolygon},
};

fn main() {
    // RUST_LOG=debug to see the outline generation summaries
    env_logger::init();
    solid_strokes();
    dashed_strokes();
}

fn describe(name: &str, outline: &ComplexPolygon) {
    let b = outline.bounds();
    println!(
        "  {name}: {} ring(s), bounds ({:.3}, {:.3}) to ({:.3}, {:.3})",
        outline.len(),
        b.min_x,
        b.min_y,
        b.max_x,
        b.max_y
    );
}

fn solid_strokes() {
    println!("Solid strokes...");

    let line = path_open![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)].expect("valid path");
    for cap in [EndCapStyle::Butt, EndCapStyle::Square, EndCapStyle::Round] {
        let options = OutlineOptions {
            end_cap_style: cap,
            joint_style: JointStyle::Round,
            ..OutlineOptions::new(2.0)
        };
        match generate_outline(&line, &options) {
            Ok(outline) => describe(&format!("{cap:?} caps"), &outline),
            Err(e) => log::error!("outline failed: {e}"),
        }
    }

    let shape = star(vec2(0.0, 0.0), 5, 4.0, 10.0, 0.0).expect("valid star");
    let options = OutlineOptions {
        joint_style: JointStyle::Miter,
        ..OutlineOptions::new(1.0)
    };
    match generate_outline(&shape, &options) {
        Ok(outline) => describe("mitered star", &outline),
        Err(e) => log::error!("outline failed: {e}"),
    }
    println!();
}

fn dashed_strokes() {
    println!("Dashed strokes...");

    let shape = star(vec2(0.0, 0.0), 5, 4.0, 10.0, 0.0).expect("valid star");
    let options = OutlineOptions {
        pattern_section_cap_style: EndCapStyle::Round,
        ..OutlineOptions::dashed(0.5, vec![3.0, 1.0, 1.0, 1.0])
    };
    match generate_outline(&shape, &options) {
        Ok(outline) => {
            describe("dash-dot star", &outline);
            println!("  total outline length {:.3}", outline.length());
        }
        Err(e) => log::error!("outline failed: {e}"),
    }
    println!();
}
