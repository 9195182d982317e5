//! RGB ↔ HSV (hue, saturation, value).
//!
//! Hue is in degrees [0, 360), saturation and value in [0, 1] for in-gamut
//! input. Achromatic colors carry hue 0.

use chroma_core::Triple;
use chroma_math::Vec3;

use crate::hue::{hue, sector_to_rgb};

/// Converts gamma-encoded RGB to HSV.
///
/// - `S = 0` when `cmax = 0` (black), else `delta / cmax`
/// - `V = cmax`
///
/// # Example
///
/// ```rust
/// use chroma_spaces::hsv::rgb_to_hsv;
///
/// let hsv = rgb_to_hsv([1.0, 0.0, 0.0]);
/// assert_eq!(hsv, [0.0, 1.0, 1.0]);
/// ```
#[inline]
pub fn rgb_to_hsv(rgb: Triple) -> Triple {
    let v = Vec3::from_array(rgb);
    // f64::max ignores NaN, which would hide a corrupt channel; surface it
    if !v.is_finite() {
        return [f64::NAN; 3];
    }
    let cmax = v.max_element();
    let cmin = v.min_element();
    let delta = cmax - cmin;

    let h = hue(rgb[0], rgb[1], rgb[2], cmax, delta);
    let s = if cmax == 0.0 { 0.0 } else { delta / cmax };

    [h, s, cmax]
}

/// Converts HSV back to gamma-encoded RGB via sector reconstruction.
#[inline]
pub fn hsv_to_rgb(hsv: Triple) -> Triple {
    let [h, s, v] = hsv;
    let c = v * s;
    let m = v - c;
    sector_to_rgb(h, c, m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_known_values() {
        assert_eq!(rgb_to_hsv([1.0, 0.0, 0.0]), [0.0, 1.0, 1.0]);
        assert_eq!(rgb_to_hsv([0.0, 1.0, 0.0]), [120.0, 1.0, 1.0]);
        assert_eq!(rgb_to_hsv([0.0, 0.0, 1.0]), [240.0, 1.0, 1.0]);
        assert_eq!(rgb_to_hsv([0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
        assert_eq!(rgb_to_hsv([1.0, 1.0, 1.0]), [0.0, 0.0, 1.0]);
    }

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
                    let back = hsv_to_rgb(rgb_to_hsv(rgb));
                    for c in 0..3 {
                        assert_abs_diff_eq!(back[c], rgb[c], epsilon = 1e-9);
                    }
                }
            }
        }
    }

    #[test]
    fn test_roundtrip_achromatic() {
        for i in 0..=16 {
            let t = i as f64 / 16.0;
            let hsv = rgb_to_hsv([t, t, t]);
            assert_eq!(hsv[0], 0.0);
            assert_eq!(hsv[1], 0.0);
            let back = hsv_to_rgb(hsv);
            for c in 0..3 {
                assert_abs_diff_eq!(back[c], t, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_inverse_sectors() {
        // One sample per 60-degree sector
        for (h, expected) in [
            (30.0, [1.0, 0.5, 0.0]),
            (90.0, [0.5, 1.0, 0.0]),
            (150.0, [0.0, 1.0, 0.5]),
            (210.0, [0.0, 0.5, 1.0]),
            (270.0, [0.5, 0.0, 1.0]),
            (330.0, [1.0, 0.0, 0.5]),
        ] {
            let rgb = hsv_to_rgb([h, 1.0, 1.0]);
            for c in 0..3 {
                assert_abs_diff_eq!(rgb[c], expected[c], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_nan_propagates() {
        let hsv = rgb_to_hsv([f64::NAN, 0.5, 0.5]);
        assert!(hsv.iter().all(|c| c.is_nan()));
        let hsv = rgb_to_hsv([0.5, f64::INFINITY, 0.5]);
        assert!(hsv.iter().all(|c| c.is_nan()));
        let back = hsv_to_rgb([0.0, f64::NAN, 1.0]);
        assert!(back.iter().all(|c| c.is_nan()));
    }
}
