//! Allocation-light 2D geometry primitives.
//!
//! - `point2`: `Point2` value type and its arithmetic.
//! - `mat3`: `Matrix3` homogeneous transforms (translate, rotate, scale).
//! - `line2`: containment, intersection and perpendicular queries on lines
//!   and segments given by two points.
//!
//! Every operation is a pure function of its inputs; nothing allocates, logs,
//! or holds state between calls.

pub mod line2;
pub mod mat3;
pub mod point2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use line2::LineCfg;
pub use mat3::Matrix3;
pub use point2::{ParsePointError, Point2};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::line2::{
        contains_vertex, intersect, intersect_axis_x, intersect_axis_y, intersect_general,
        perpendicular, segment_contains_vertex, segment_intersect, segment_length, LineCfg,
        EPS_ON_LINE,
    };
    pub use crate::mat3::Matrix3;
    pub use crate::point2::Point2;
}
