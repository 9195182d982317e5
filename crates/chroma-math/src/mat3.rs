//! 3x3 matrix type for linear color transforms.
//!
//! [`Mat3`] is used for the fixed RGB-to-XYZ transform and its inverse.
//!
//! # Convention
//!
//! Matrices are stored in **row-major** order and multiply **column
//! vectors**:
//!
//! ```text
//! | m00 m01 m02 |   | x |   | m00*x + m01*y + m02*z |
//! | m10 m11 m12 | * | y | = | m10*x + m11*y + m12*z |
//! | m20 m21 m22 |   | z |   | m20*x + m21*y + m22*z |
//! ```

use std::ops::{Index, Mul};

use crate::Vec3;

/// A 3x3 matrix for linear color transforms.
///
/// # Example
///
/// ```rust
/// use chroma_math::{Mat3, Vec3};
///
/// let m = Mat3::from_rows([
///     [0.4124564, 0.3575761, 0.1804375],
///     [0.2126729, 0.7151522, 0.0721750],
///     [0.0193339, 0.1191920, 0.9503041],
/// ]);
/// let xyz = m * Vec3::new(1.0, 0.0, 0.0);
/// assert!((xyz.x - 0.4124564).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Mat3 {
    /// Matrix elements in row-major order: [row0, row1, row2]
    pub m: [[f64; 3]; 3],
}

impl Mat3 {
    /// Zero matrix.
    pub const ZERO: Self = Self { m: [[0.0; 3]; 3] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self { m: rows }
    }

    /// Computes the determinant.
    #[inline]
    pub fn determinant(&self) -> f64 {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Computes the inverse of this matrix.
    ///
    /// Returns `None` if the matrix is singular (determinant is zero).
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() < 1e-14 {
            return None;
        }

        let m = &self.m;
        let inv_det = 1.0 / det;

        // Cofactor matrix, transposed and scaled by 1/det
        Some(Self::from_rows([
            [
                (m[1][1] * m[2][2] - m[1][2] * m[2][1]) * inv_det,
                (m[0][2] * m[2][1] - m[0][1] * m[2][2]) * inv_det,
                (m[0][1] * m[1][2] - m[0][2] * m[1][1]) * inv_det,
            ],
            [
                (m[1][2] * m[2][0] - m[1][0] * m[2][2]) * inv_det,
                (m[0][0] * m[2][2] - m[0][2] * m[2][0]) * inv_det,
                (m[0][2] * m[1][0] - m[0][0] * m[1][2]) * inv_det,
            ],
            [
                (m[1][0] * m[2][1] - m[1][1] * m[2][0]) * inv_det,
                (m[0][1] * m[2][0] - m[0][0] * m[2][1]) * inv_det,
                (m[0][0] * m[1][1] - m[0][1] * m[1][0]) * inv_det,
            ],
        ]))
    }

    /// Transforms a [`Vec3`] by this matrix.
    ///
    /// Equivalent to `matrix * vector`.
    #[inline]
    pub fn transform(&self, v: Vec3) -> Vec3 {
        Vec3::new(
            self.m[0][0] * v.x + self.m[0][1] * v.y + self.m[0][2] * v.z,
            self.m[1][0] * v.x + self.m[1][1] * v.y + self.m[1][2] * v.z,
            self.m[2][0] * v.x + self.m[2][1] * v.y + self.m[2][2] * v.z,
        )
    }

    /// Multiplies two matrices.
    #[inline]
    pub fn mul_mat(&self, other: &Self) -> Self {
        let mut result = Self::ZERO;
        for i in 0..3 {
            for j in 0..3 {
                result.m[i][j] = self.m[i][0] * other.m[0][j]
                    + self.m[i][1] * other.m[1][j]
                    + self.m[i][2] * other.m[2][j];
            }
        }
        result
    }

    /// Converts to a glam `DMat3` (column-major).
    #[inline]
    pub fn to_glam(&self) -> glam::DMat3 {
        // glam uses column-major, so we transpose
        glam::DMat3::from_cols_array_2d(&[
            [self.m[0][0], self.m[1][0], self.m[2][0]],
            [self.m[0][1], self.m[1][1], self.m[2][1]],
            [self.m[0][2], self.m[1][2], self.m[2][2]],
        ])
    }

    /// Creates from a glam `DMat3`.
    #[inline]
    pub fn from_glam(m: glam::DMat3) -> Self {
        let cols = m.to_cols_array_2d();
        Self::from_rows([
            [cols[0][0], cols[1][0], cols[2][0]],
            [cols[0][1], cols[1][1], cols[2][1]],
            [cols[0][2], cols[1][2], cols[2][2]],
        ])
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// Mat3 * Vec3
impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.transform(rhs)
    }
}

// Mat3 * Mat3
impl Mul for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

impl Index<usize> for Mat3 {
    type Output = [f64; 3];

    #[inline]
    fn index(&self, i: usize) -> &[f64; 3] {
        &self.m[i]
    }
}
