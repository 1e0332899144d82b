//! 2D point/vector value type.
//!
//! Purpose
//! - A plain `(x, y)` pair of `f64` used both as a position and as a
//!   displacement. All arithmetic is closed-form and returns by value.
//!
//! Conventions
//! - Equality is exact IEEE equality; tolerance-aware comparisons live with the
//!   callers that need them (see `line2::LineCfg`).
//! - No operation guards against degenerate input: normalizing the zero vector
//!   yields NaN components, just like the underlying division does.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

/// Point (or vector) in R².
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
    /// Both components set to `v`.
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self { x: v, y: v }
    }

    #[inline]
    pub fn dot(self, other: Point2) -> f64 {
        self.x * other.x + self.y * other.y
    }
    #[inline]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }
    #[inline]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }
    #[inline]
    pub fn distance_squared(self, other: Point2) -> f64 {
        (other - self).length_squared()
    }
    #[inline]
    pub fn distance(self, other: Point2) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Unit vector in the direction of `self`.
    ///
    /// Multiplies by the reciprocal length; the zero vector gives NaN components.
    #[inline]
    pub fn normalize(self) -> Point2 {
        let inv = 1.0 / self.length();
        self * inv
    }

    /// `self` moved by `distance` towards the direction `angle` (radians, from +x).
    #[inline]
    pub fn offset_towards_angle(self, distance: f64, angle: f64) -> Point2 {
        let (sin, cos) = angle.sin_cos();
        Point2::new(self.x + distance * cos, self.y + distance * sin)
    }

    /// `self` moved by `distance` towards `target`.
    ///
    /// When `target == self` the direction is undefined and the result is NaN.
    #[inline]
    pub fn offset_towards_point(self, distance: f64, target: Point2) -> Point2 {
        let d = target - self;
        let len = d.length();
        Point2::new(
            self.x + distance * (d.x / len),
            self.y + distance * (d.y / len),
        )
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point2 {
    type Output = Point2;
    #[inline]
    fn add(self, rhs: Point2) -> Self::Output {
        Point2::new(self.x + rhs.x, self.y + rhs.y)
    }
}
impl Sub for Point2 {
    type Output = Point2;
    #[inline]
    fn sub(self, rhs: Point2) -> Self::Output {
        Point2::new(self.x - rhs.x, self.y - rhs.y)
    }
}
impl Neg for Point2 {
    type Output = Point2;
    #[inline]
    fn neg(self) -> Self::Output {
        Point2::new(-self.x, -self.y)
    }
}
impl Mul<f64> for Point2 {
    type Output = Point2;
    #[inline]
    fn mul(self, c: f64) -> Self::Output {
        Point2::new(self.x * c, self.y * c)
    }
}
impl Mul<Point2> for f64 {
    type Output = Point2;
    #[inline]
    fn mul(self, p: Point2) -> Self::Output {
        p * self
    }
}
impl Div<f64> for Point2 {
    type Output = Point2;
    #[inline]
    fn div(self, c: f64) -> Self::Output {
        Point2::new(self.x / c, self.y / c)
    }
}
impl AddAssign for Point2 {
    #[inline]
    fn add_assign(&mut self, rhs: Point2) {
        *self = *self + rhs;
    }
}
impl SubAssign for Point2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Point2) {
        *self = *self - rhs;
    }
}
impl MulAssign<f64> for Point2 {
    #[inline]
    fn mul_assign(&mut self, c: f64) {
        *self = *self * c;
    }
}
impl DivAssign<f64> for Point2 {
    #[inline]
    fn div_assign(&mut self, c: f64) {
        *self = *self / c;
    }
}

impl From<[f64; 2]> for Point2 {
    #[inline]
    fn from(a: [f64; 2]) -> Self {
        Point2::new(a[0], a[1])
    }
}
impl From<(f64, f64)> for Point2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Point2::new(x, y)
    }
}
impl From<Point2> for [f64; 2] {
    #[inline]
    fn from(p: Point2) -> Self {
        [p.x, p.y]
    }
}

#[cfg(feature = "nalgebra")]
impl From<nalgebra::Vector2<f64>> for Point2 {
    #[inline]
    fn from(v: nalgebra::Vector2<f64>) -> Self {
        Point2::new(v.x, v.y)
    }
}
#[cfg(feature = "nalgebra")]
impl From<Point2> for nalgebra::Vector2<f64> {
    #[inline]
    fn from(p: Point2) -> Self {
        nalgebra::Vector2::new(p.x, p.y)
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Failure to parse a `Point2` from `"x,y"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParsePointError {
    /// Fewer than two comma-separated components.
    MissingComponent,
    /// More than two comma-separated components.
    TooManyComponents,
    /// A component is not a valid `f64`.
    InvalidNumber { component: &'static str, value: String },
}

impl fmt::Display for ParsePointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsePointError::MissingComponent => write!(f, "expected two components `x,y`"),
            ParsePointError::TooManyComponents => {
                write!(f, "expected exactly two components `x,y`")
            }
            ParsePointError::InvalidNumber { component, value } => {
                write!(f, "{} component {:?} is not a number", component, value)
            }
        }
    }
}

impl std::error::Error for ParsePointError {}

impl FromStr for Point2 {
    type Err = ParsePointError;

    /// Parses `"x,y"`; whitespace around either component is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',');
        let x = parts.next().ok_or(ParsePointError::MissingComponent)?;
        let y = parts.next().ok_or(ParsePointError::MissingComponent)?;
        if parts.next().is_some() {
            return Err(ParsePointError::TooManyComponents);
        }
        Ok(Point2::new(parse_component("x", x)?, parse_component("y", y)?))
    }
}

fn parse_component(component: &'static str, raw: &str) -> Result<f64, ParsePointError> {
    raw.trim()
        .parse()
        .map_err(|_| ParsePointError::InvalidNumber {
            component,
            value: raw.trim().to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn arithmetic_basics() {
        let a = Point2::new(3.0, 4.0);
        let b = Point2::new(1.0, 2.0);
        assert_eq!(a + b, Point2::new(4.0, 6.0));
        assert_eq!(a - b, Point2::new(2.0, 2.0));
        assert_eq!(a * 2.0, Point2::new(6.0, 8.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(-a, Point2::new(-3.0, -4.0));
        assert_eq!(a.dot(b), 11.0);
        assert_eq!(a.length_squared(), 25.0);
        assert_eq!(a.length(), 5.0);
        assert_eq!(b.distance(a), 8.0_f64.sqrt());
        assert_eq!(b.distance_squared(a), 8.0);

        let mut c = a;
        c += b;
        c -= Point2::splat(1.0);
        c *= 0.5;
        assert_eq!(c, Point2::new(1.5, 2.5));
        c /= 0.5;
        assert_eq!(c, Point2::new(3.0, 5.0));
    }

    #[test]
    fn normalize_unit_and_zero() {
        let n = Point2::new(3.0, 4.0).normalize();
        assert!((n.x - 0.6).abs() < 1e-12 && (n.y - 0.8).abs() < 1e-12);
        // Zero vector is not guarded; NaN propagates.
        let z = Point2::zero().normalize();
        assert!(z.x.is_nan() && z.y.is_nan());
        assert!(!z.is_finite());
    }

    #[test]
    fn offsets_towards_angle_and_point() {
        let p = Point2::new(1.0, 1.0);
        let q = p.offset_towards_angle(2.0, std::f64::consts::FRAC_PI_2);
        assert!((q.x - 1.0).abs() < 1e-12 && (q.y - 3.0).abs() < 1e-12);

        let r = p.offset_towards_point(5.0, Point2::new(4.0, 5.0));
        assert!((r.x - 4.0).abs() < 1e-12 && (r.y - 5.0).abs() < 1e-12);

        let s = p.offset_towards_point(1.0, p);
        assert!(s.x.is_nan() && s.y.is_nan());
    }

    #[test]
    fn offset_preserves_distance_seeded() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..64 {
            let p = Point2::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0));
            let t = Point2::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0));
            let d = rng.gen_range(0.0..5.0);
            let q = p.offset_towards_point(d, t);
            assert!((p.distance(q) - d).abs() < 1e-9);
        }
    }

    #[test]
    fn conversions_and_display() {
        let p: Point2 = [1.5, -2.0].into();
        assert_eq!(p, Point2::from((1.5, -2.0)));
        let arr: [f64; 2] = p.into();
        assert_eq!(arr, [1.5, -2.0]);
        assert_eq!(p.to_string(), "(1.5, -2)");
    }

    #[test]
    fn parse_from_str() {
        assert_eq!("1,2".parse::<Point2>(), Ok(Point2::new(1.0, 2.0)));
        assert_eq!(" -0.5 , 3e2 ".parse::<Point2>(), Ok(Point2::new(-0.5, 300.0)));
        assert_eq!("1".parse::<Point2>(), Err(ParsePointError::MissingComponent));
        assert_eq!(
            "1,2,3".parse::<Point2>(),
            Err(ParsePointError::TooManyComponents)
        );
        assert_eq!(
            "1,abc".parse::<Point2>(),
            Err(ParsePointError::InvalidNumber {
                component: "y",
                value: "abc".to_string()
            })
        );
        let msg = "x,1".parse::<Point2>().unwrap_err().to_string();
        assert!(msg.contains("x component"));
    }

    #[cfg(feature = "nalgebra")]
    #[test]
    fn nalgebra_roundtrip() {
        let p = Point2::new(2.0, -1.0);
        let v: nalgebra::Vector2<f64> = p.into();
        assert_eq!(Point2::from(v), p);
    }
}
