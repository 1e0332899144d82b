//! 3×3 matrices for 2D affine transforms (homogeneous coordinates).
//!
//! Purpose
//! - Compose translations, rotations and scalings and apply them to `Point2`.
//!
//! Conventions
//! - Row-major storage `[[a, b, c], [d, e, f], [g, h, i]]`; the affine part is
//!   the top two rows, so a point maps as `x' = a x + b y + c`, `y' = d x + e y + f`.
//! - `translate`, `rotate` and `scale` post-multiply (`self * T`): the new
//!   transform is applied to points *before* the existing one.
//! - Rotation is counter-clockwise for positive angles in a y-up frame.
//! - `Default` is the identity, so a defaulted transform leaves points
//!   unchanged; use `Matrix3::zero()` for the all-zero matrix.
//! - `inverse` treats `|det| <= EPS_DET` as singular; `inverse_eps` takes the
//!   threshold from the caller.
//!
//! Code cross-refs: `Point2`, `line2` (consumers apply transforms to line endpoints).

use std::ops::{Add, Index, IndexMut, Mul, Sub};

use crate::point2::Point2;

/// Determinant threshold below which `inverse` reports the matrix as singular.
pub const EPS_DET: f64 = 1e-12;

/// 3×3 matrix, row-major.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix3 {
    pub rows: [[f64; 3]; 3],
}

impl Default for Matrix3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Matrix3 {
    #[inline]
    pub const fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self { rows }
    }
    #[inline]
    pub const fn zero() -> Self {
        Self {
            rows: [[0.0; 3]; 3],
        }
    }
    #[inline]
    pub const fn identity() -> Self {
        Self {
            rows: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }
    #[inline]
    pub const fn translation(x: f64, y: f64) -> Self {
        Self {
            rows: [[1.0, 0.0, x], [0.0, 1.0, y], [0.0, 0.0, 1.0]],
        }
    }
    #[inline]
    pub const fn translation_vec(v: Point2) -> Self {
        Self::translation(v.x, v.y)
    }
    #[inline]
    pub fn rotation(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            rows: [[cos, -sin, 0.0], [sin, cos, 0.0], [0.0, 0.0, 1.0]],
        }
    }
    #[inline]
    pub const fn scaling(x: f64, y: f64) -> Self {
        Self {
            rows: [[x, 0.0, 0.0], [0.0, y, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// `self * translation(x, y)`.
    ///
    /// Only the third column changes, so this skips the full product.
    pub fn translate(&self, x: f64, y: f64) -> Self {
        let mut out = *self;
        for r in &mut out.rows {
            r[2] += r[0] * x + r[1] * y;
        }
        out
    }

    /// `self * rotation(angle)`.
    pub fn rotate(&self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        let mut out = *self;
        for r in &mut out.rows {
            let (c0, c1) = (r[0], r[1]);
            r[0] = c0 * cos + c1 * sin;
            r[1] = c1 * cos - c0 * sin;
        }
        out
    }

    /// `self * scaling(x, y)`.
    pub fn scale(&self, x: f64, y: f64) -> Self {
        let mut out = *self;
        for r in &mut out.rows {
            r[0] *= x;
            r[1] *= y;
        }
        out
    }

    /// Apply the affine part to a point; the homogeneous row is ignored.
    #[inline]
    pub fn transform_point(&self, p: Point2) -> Point2 {
        let [r0, r1, _] = &self.rows;
        Point2::new(
            r0[0] * p.x + r0[1] * p.y + r0[2],
            r1[0] * p.x + r1[1] * p.y + r1[2],
        )
    }

    /// Full 3×3 product with a homogeneous 3-vector.
    #[inline]
    pub fn transform_vec3(&self, v: [f64; 3]) -> [f64; 3] {
        let mut out = [0.0; 3];
        for (o, r) in out.iter_mut().zip(&self.rows) {
            *o = r[0] * v[0] + r[1] * v[1] + r[2] * v[2];
        }
        out
    }

    pub fn transpose(&self) -> Self {
        let m = &self.rows;
        Self {
            rows: [
                [m[0][0], m[1][0], m[2][0]],
                [m[0][1], m[1][1], m[2][1]],
                [m[0][2], m[1][2], m[2][2]],
            ],
        }
    }

    pub fn determinant(&self) -> f64 {
        let m = &self.rows;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Inverse via the adjugate; `None` if `|det| <= EPS_DET` or not finite.
    #[inline]
    pub fn inverse(&self) -> Option<Self> {
        self.inverse_eps(EPS_DET)
    }

    /// [`Matrix3::inverse`] with a caller-chosen singularity threshold.
    pub fn inverse_eps(&self, eps_det: f64) -> Option<Self> {
        let det = self.determinant();
        if !det.is_finite() || det.abs() <= eps_det {
            return None;
        }
        let m = &self.rows;
        let inv = 1.0 / det;
        let cof = |r0: usize, r1: usize, c0: usize, c1: usize| {
            m[r0][c0] * m[r1][c1] - m[r0][c1] * m[r1][c0]
        };
        // Adjugate = transpose of the cofactor matrix.
        Some(Self {
            rows: [
                [cof(1, 2, 1, 2) * inv, -cof(0, 2, 1, 2) * inv, cof(0, 1, 1, 2) * inv],
                [-cof(1, 2, 0, 2) * inv, cof(0, 2, 0, 2) * inv, -cof(0, 1, 0, 2) * inv],
                [cof(1, 2, 0, 1) * inv, -cof(0, 2, 0, 1) * inv, cof(0, 1, 0, 1) * inv],
            ],
        })
    }
}

impl Index<(usize, usize)> for Matrix3 {
    type Output = f64;
    #[inline]
    fn index(&self, (r, c): (usize, usize)) -> &f64 {
        &self.rows[r][c]
    }
}
impl IndexMut<(usize, usize)> for Matrix3 {
    #[inline]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut f64 {
        &mut self.rows[r][c]
    }
}

impl Add for Matrix3 {
    type Output = Matrix3;
    fn add(self, rhs: Matrix3) -> Self::Output {
        let mut out = self;
        for (r, s) in out.rows.iter_mut().zip(&rhs.rows) {
            for (a, b) in r.iter_mut().zip(s) {
                *a += *b;
            }
        }
        out
    }
}
impl Sub for Matrix3 {
    type Output = Matrix3;
    fn sub(self, rhs: Matrix3) -> Self::Output {
        let mut out = self;
        for (r, s) in out.rows.iter_mut().zip(&rhs.rows) {
            for (a, b) in r.iter_mut().zip(s) {
                *a -= *b;
            }
        }
        out
    }
}
impl Mul<f64> for Matrix3 {
    type Output = Matrix3;
    fn mul(self, c: f64) -> Self::Output {
        let mut out = self;
        for a in out.rows.iter_mut().flatten() {
            *a *= c;
        }
        out
    }
}
impl Mul for Matrix3 {
    type Output = Matrix3;
    fn mul(self, n: Matrix3) -> Self::Output {
        let mut out = Matrix3::zero();
        for i in 0..3 {
            for j in 0..3 {
                out.rows[i][j] = self.rows[i][0] * n.rows[0][j]
                    + self.rows[i][1] * n.rows[1][j]
                    + self.rows[i][2] * n.rows[2][j];
            }
        }
        out
    }
}
impl Mul<Point2> for Matrix3 {
    type Output = Point2;
    #[inline]
    fn mul(self, p: Point2) -> Self::Output {
        self.transform_point(p)
    }
}

#[cfg(feature = "nalgebra")]
impl From<Matrix3> for nalgebra::Matrix3<f64> {
    fn from(m: Matrix3) -> Self {
        let r = &m.rows;
        nalgebra::Matrix3::new(
            r[0][0], r[0][1], r[0][2], r[1][0], r[1][1], r[1][2], r[2][0], r[2][1], r[2][2],
        )
    }
}
#[cfg(feature = "nalgebra")]
impl From<nalgebra::Matrix3<f64>> for Matrix3 {
    fn from(m: nalgebra::Matrix3<f64>) -> Self {
        let mut out = Matrix3::zero();
        for i in 0..3 {
            for j in 0..3 {
                out.rows[i][j] = m[(i, j)];
            }
        }
        out
    }
}
