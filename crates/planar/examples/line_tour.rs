//! Walk through the line queries on a few hand-picked inputs.
//!
//! Usage:
//!   cargo run -p planar --example line_tour
//!   cargo run -p planar --example line_tour -- transformed
//!
//! The `transformed` mode rotates and translates every input first, showing
//! that axis-aligned fast paths stop applying once lines are sloped.

use planar::prelude::*;

fn main() {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "plain".to_string());
    match mode.as_str() {
        "plain" => tour(Matrix3::identity()),
        "transformed" => tour(Matrix3::translation(2.0, -1.0).rotate(0.25)),
        _ => {
            eprintln!("usage: line_tour [plain|transformed]");
        }
    }
}

fn tour(m: Matrix3) {
    let cfg = LineCfg::default();
    let p = |x: f64, y: f64| m * Point2::new(x, y);

    let (v, w) = (p(1.0, 1.0), p(9.0, 5.0));
    println!("segment {v}–{w}: length {:.4}", segment_length(v, w));
    for q in [p(3.0, 2.0), p(-1.0, 0.0), p(3.0, 2.1)] {
        println!(
            "  {q}: on line = {}, on segment = {}",
            contains_vertex(v, w, q, cfg),
            segment_contains_vertex(v, w, q, cfg)
        );
    }

    let (a, b, c, d) = (p(1.0, 1.0), p(5.0, 5.0), p(1.0, 5.0), p(5.0, 1.0));
    println!("lines {a}–{b} and {c}–{d}:");
    println!("  intersect         = {:?}", intersect(a, b, c, d));
    println!("  segment_intersect = {:?}", segment_intersect(a, b, c, d));

    let (vx, vy) = (p(0.0, -3.0), p(0.0, 3.0));
    println!("vertical {vx}–{vy} against {a}–{b}:");
    println!("  intersect         = {:?}", intersect(vx, vy, a, b));
    println!("  intersect_general = {:?}", intersect_general(vx, vy, a, b));

    println!("axis crossings of {a}–{c}:");
    println!("  Y = 2 -> {:?}", intersect_axis_x(a, c, 2.0));
    println!("  X = 2 -> {:?}", intersect_axis_y(a, c, 2.0));

    let out = perpendicular(a, b, c);
    println!("perpendicular to {a}–{b} through {c}: {c}–{out}");
}
