//! Length and point-containment queries for lines and segments.

use super::types::{residual, slope, within, LineCfg};
use crate::point2::Point2;

/// Length of the segment `v`–`w`.
#[inline]
pub fn segment_length(v: Point2, w: Point2) -> f64 {
    v.distance(w)
}

/// Whether `p` lies on the infinite line through `v` and `w`.
///
/// Axis-aligned lines compare the shared coordinate exactly; sloped lines
/// accept a residual strictly below `cfg.eps_on_line`.
pub fn contains_vertex(v: Point2, w: Point2, p: Point2, cfg: LineCfg) -> bool {
    if v.x == w.x {
        return p.x == v.x;
    }
    if v.y == w.y {
        return p.y == v.y;
    }
    residual(v, slope(v, w), p) < cfg.eps_on_line
}

/// Whether `p` lies on the closed segment `v`–`w`.
///
/// Same line test as [`contains_vertex`], then a bound on the axis along
/// which the segment actually extends (y for vertical, x otherwise).
pub fn segment_contains_vertex(v: Point2, w: Point2, p: Point2, cfg: LineCfg) -> bool {
    if v.x == w.x {
        p.x == v.x && within(p.y, v.y, w.y)
    } else if v.y == w.y {
        p.y == v.y && within(p.x, v.x, w.x)
    } else {
        if residual(v, slope(v, w), p) >= cfg.eps_on_line {
            return false;
        }
        within(p.x, v.x, w.x)
    }
}
