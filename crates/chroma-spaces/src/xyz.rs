//! Linear RGB ↔ CIE XYZ (D65).
//!
//! A fixed 3x3 linear transform with no edge cases: the matrix is
//! non-singular, so both directions are always defined.
//!
//! The forward matrix is the standard sRGB-primaries/D65 matrix. The
//! inverse used at runtime is computed from it in `f64`, which keeps the
//! forward/inverse pair consistent to rounding error; the published
//! 7-digit inverse is kept as a reference constant and pinned by test.

use std::sync::LazyLock;

use chroma_core::Triple;
use chroma_math::{Mat3, Vec3};

/// Linear sRGB to XYZ matrix (D65 white point).
pub const RGB_TO_XYZ: Mat3 = Mat3::from_rows([
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
]);

/// XYZ to linear sRGB matrix (D65), published 7-digit values.
///
/// Kept for reference and interop; the runtime inverse path uses
/// [`xyz_to_rgb_matrix`] so that the round trip closes to rounding error.
pub const XYZ_TO_RGB: Mat3 = Mat3::from_rows([
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
]);

/// D65 reference white in XYZ (Y = 1).
pub const D65_WHITE: Triple = [0.95047, 1.0, 1.08883];

static RGB_TO_XYZ_INV: LazyLock<Mat3> = LazyLock::new(|| {
    // RGB_TO_XYZ is a fixed non-singular constant; inverse always exists.
    RGB_TO_XYZ.inverse().unwrap_or(Mat3::IDENTITY)
});

/// The XYZ -> linear RGB matrix used at runtime.
///
/// Computed once from [`RGB_TO_XYZ`]; agrees with [`XYZ_TO_RGB`] to at
/// least 6 significant digits.
#[inline]
pub fn xyz_to_rgb_matrix() -> Mat3 {
    *RGB_TO_XYZ_INV
}

/// Converts linear-light RGB to CIE XYZ.
///
/// # Example
///
/// ```rust
/// use chroma_spaces::xyz::linear_to_xyz;
///
/// let xyz = linear_to_xyz([1.0, 0.0, 0.0]);
/// assert!((xyz[0] - 0.4124564).abs() < 1e-12);
/// assert!((xyz[1] - 0.2126729).abs() < 1e-12);
/// assert!((xyz[2] - 0.0193339).abs() < 1e-12);
/// ```
#[inline]
pub fn linear_to_xyz(rgb: Triple) -> Triple {
    RGB_TO_XYZ.transform(Vec3::from_array(rgb)).to_array()
}

/// Converts CIE XYZ back to linear-light RGB.
#[inline]
pub fn xyz_to_linear(xyz: Triple) -> Triple {
    xyz_to_rgb_matrix()
        .transform(Vec3::from_array(xyz))
        .to_array()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_roundtrip_unit_cube() {
        let res = 8;
        for i in 0..=res {
            for j in 0..=res {
                for k in 0..=res {
                    let rgb = [
                        i as f64 / res as f64,
                        j as f64 / res as f64,
                        k as f64 / res as f64,
                    ];
                    let back = xyz_to_linear(linear_to_xyz(rgb));
                    for c in 0..3 {
                        assert_abs_diff_eq!(back[c], rgb[c], epsilon = 1e-9);
                    }
                }
            }
        }
    }

    #[test]
    fn test_primary_red() {
        let xyz = linear_to_xyz([1.0, 0.0, 0.0]);
        assert_abs_diff_eq!(xyz[0], 0.4124564, epsilon = 1e-12);
        assert_abs_diff_eq!(xyz[1], 0.2126729, epsilon = 1e-12);
        assert_abs_diff_eq!(xyz[2], 0.0193339, epsilon = 1e-12);
    }

    #[test]
    fn test_white_maps_near_d65() {
        // Rows of the matrix sum to the D65 white point
        let xyz = linear_to_xyz([1.0, 1.0, 1.0]);
        assert_abs_diff_eq!(xyz[0], D65_WHITE[0], epsilon = 1e-4);
        assert_abs_diff_eq!(xyz[1], D65_WHITE[1], epsilon = 1e-4);
        assert_abs_diff_eq!(xyz[2], D65_WHITE[2], epsilon = 1e-4);
    }

    #[test]
    fn test_computed_inverse_matches_published() {
        // The published inverse is correct to ~7 digits; require 6.
        let inv = xyz_to_rgb_matrix();
        for i in 0..3 {
            for j in 0..3 {
                let published = XYZ_TO_RGB.m[i][j];
                let tol = published.abs().max(1.0) * 1e-6;
                assert!(
                    (inv.m[i][j] - published).abs() < tol,
                    "inverse[{i}][{j}] = {} vs published {}",
                    inv.m[i][j],
                    published
                );
            }
        }
    }

    #[test]
    fn test_nan_propagates() {
        let out = linear_to_xyz([f64::NAN, 0.5, 0.5]);
        // Every output channel mixes all inputs, so NaN contaminates all three
        assert!(out.iter().all(|c| c.is_nan()));
    }
}
