//! Tolerance configuration and slope helpers shared by the line queries.
//!
//! - `LineCfg`: carries the on-line tolerance used by containment tests.
//! - `slope`, `SlopeKind`: the single place where a line's slope is computed
//!   and classified (flat, undefined, finite).

use crate::point2::Point2;

/// Default tolerance for "is this point on the line" checks.
pub const EPS_ON_LINE: f64 = 1e-6;

/// Line-geometry configuration (tolerances).
///
/// Only sloped-line containment is tolerance-aware. Vertical/horizontal
/// detection and parallelism use exact comparisons regardless of this value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineCfg {
    pub eps_on_line: f64,
}

impl Default for LineCfg {
    fn default() -> Self {
        Self {
            eps_on_line: EPS_ON_LINE,
        }
    }
}

impl LineCfg {
    #[inline]
    pub fn with_eps(eps_on_line: f64) -> Self {
        Self { eps_on_line }
    }
}

/// Slope `Δy/Δx` of the line through `v` and `w`.
///
/// Vertical lines give `±∞`; a degenerate line (`v == w`) gives NaN.
#[inline]
pub fn slope(v: Point2, w: Point2) -> f64 {
    (w.y - v.y) / (w.x - v.x)
}

/// Classification of a slope value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SlopeKind {
    /// `m == 0` (either sign of zero).
    Flat,
    /// `m` is NaN: the direction is undefined.
    Undefined,
    /// Anything else, including `±∞` for vertical lines.
    Finite(f64),
}

impl SlopeKind {
    #[inline]
    pub fn classify(m: f64) -> Self {
        if m == 0.0 {
            SlopeKind::Flat
        } else if m.is_nan() {
            SlopeKind::Undefined
        } else {
            SlopeKind::Finite(m)
        }
    }
}

/// Residual of `p` against the non-axis-aligned line through `v` with slope `m`.
#[inline]
pub(crate) fn residual(v: Point2, m: f64, p: Point2) -> f64 {
    (m * (p.x - v.x) + v.y - p.y).abs()
}

/// Closed interval test, independent of the order of `a` and `b`.
#[inline]
pub(crate) fn within(t: f64, a: f64, b: f64) -> bool {
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    t >= lo && t <= hi
}
