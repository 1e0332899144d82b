//! Line and segment geometry in 2D (points-pair representation).
//!
//! Purpose
//! - Containment, intersection and perpendicular queries on lines given by two
//!   points `(v, w)`. A line is never stored; every function takes its points
//!   by value and returns a fresh result.
//!
//! Conventions
//! - Slopes: `m = Δy/Δx`, so vertical lines have `m = ±∞` and a degenerate
//!   line (`v == w`) has `m = NaN`. NaN is never trapped; it propagates.
//! - Vertical/horizontal detection and parallelism use exact `==`. Only
//!   sloped containment uses the tolerance in `LineCfg` (default `1e-6`).
//! - "No intersection" and "not contained" are `None` / `false`.
//!
//! Code cross-refs: `point2::Point2`, `types::{LineCfg, SlopeKind}`

mod contain;
mod intersect;
mod perp;
mod types;

pub use contain::{contains_vertex, segment_contains_vertex, segment_length};
pub use intersect::{
    intersect, intersect_axis_x, intersect_axis_y, intersect_general, segment_intersect,
};
pub use perp::perpendicular;
pub use types::{slope, LineCfg, SlopeKind, EPS_ON_LINE};
