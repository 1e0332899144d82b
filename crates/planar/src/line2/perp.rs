//! Perpendicular construction.

use super::types::{slope, SlopeKind};
use crate::point2::Point2;

/// A second point `out` such that the line `v2`–`out` is perpendicular to `v1`–`w1`.
///
/// The step from `v2` is one unit along x (or along y when the reference line
/// is horizontal). A vertical reference has infinite slope, so the general
/// branch yields `-1/m = ∓0` and the step is horizontal. An undefined slope
/// (degenerate reference, `v1 == w1`) also steps horizontally.
pub fn perpendicular(v1: Point2, w1: Point2, v2: Point2) -> Point2 {
    match SlopeKind::classify(slope(v1, w1)) {
        SlopeKind::Flat => Point2::new(v2.x, v2.y + 1.0),
        SlopeKind::Undefined => Point2::new(v2.x + 1.0, v2.y),
        SlopeKind::Finite(m) => Point2::new(v2.x + 1.0, v2.y - 1.0 / m),
    }
}
