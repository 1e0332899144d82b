//! Line–line, line–axis and segment–segment intersections.
//!
//! All functions solve through slopes (`y = m x + b` form). This keeps the
//! arithmetic short but has one known blind spot, documented on [`intersect`]
//! and handled by [`intersect_general`].

use super::types::slope;
use crate::point2::Point2;

/// Intersection of the infinite lines `v1`–`w1` and `v2`–`w2`.
///
/// Returns `None` when the slope difference is zero (parallel lines) or NaN
/// (two vertical lines drawn in the same direction, or a degenerate line).
/// Otherwise a vertical line's infinite slope does not cancel and the
/// returned point has NaN coordinates; use [`intersect_general`] when either
/// input may be vertical.
pub fn intersect(v1: Point2, w1: Point2, v2: Point2, w2: Point2) -> Option<Point2> {
    let m1 = slope(v1, w1);
    let m2 = slope(v2, w2);
    let m = m1 - m2;
    if m == 0.0 || m.is_nan() {
        return None;
    }
    let x = (v1.x * m1 - v2.x * m2 + v2.y - v1.y) / m;
    let y = (x - v1.x) * m1 + v1.y;
    Some(Point2::new(x, y))
}

/// Like [`intersect`], but answers correctly when exactly one line is vertical.
///
/// The vertical line fixes `x`, so the point comes from [`intersect_axis_y`]
/// on the other line. Two vertical lines never intersect in a single point.
pub fn intersect_general(v1: Point2, w1: Point2, v2: Point2, w2: Point2) -> Option<Point2> {
    match (v1.x == w1.x, v2.x == w2.x) {
        (true, true) => None,
        (true, false) => intersect_axis_y(v2, w2, v1.x),
        (false, true) => intersect_axis_y(v1, w1, v2.x),
        (false, false) => intersect(v1, w1, v2, w2),
    }
}

/// Intersection of the line `v`–`w` with the horizontal line `Y = y`.
///
/// `None` if the line is itself horizontal (no point, or every point).
pub fn intersect_axis_x(v: Point2, w: Point2, y: f64) -> Option<Point2> {
    if v.y == w.y {
        return None;
    }
    let m = slope(v, w);
    Some(Point2::new(v.x + (y - v.y) / m, y))
}

/// Intersection of the line `v`–`w` with the vertical line `X = x`.
///
/// `None` if the line is itself vertical.
pub fn intersect_axis_y(v: Point2, w: Point2, x: f64) -> Option<Point2> {
    if v.x == w.x {
        return None;
    }
    let m = slope(v, w);
    Some(Point2::new(x, (x - v.x) * m + v.y))
}

/// Intersection of the closed segments `v1`–`w1` and `v2`–`w2`.
///
/// The line intersection must fall within the x-range of both segments. Only
/// x is checked: the point already lies on both lines.
pub fn segment_intersect(v1: Point2, w1: Point2, v2: Point2, w2: Point2) -> Option<Point2> {
    let p = intersect(v1, w1, v2, w2)?;
    if out_of_x_range(p.x, v1, w1) || out_of_x_range(p.x, v2, w2) {
        return None;
    }
    Some(p)
}

// NaN `x` passes: both comparisons are false.
#[inline]
fn out_of_x_range(x: f64, v: Point2, w: Point2) -> bool {
    let (lo, hi) = if v.x < w.x { (v.x, w.x) } else { (w.x, v.x) };
    x < lo || x > hi
}
