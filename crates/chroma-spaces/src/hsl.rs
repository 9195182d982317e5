//! RGB ↔ HSL (hue, saturation, lightness).
//!
//! Hue is shared with HSV; lightness is the midpoint of the channel
//! extremes. The saturation denominator `1 - |2L - 1|` is zero at L = 0 and
//! L = 1, a separate guard from the achromatic (`delta = 0`) case.

use chroma_core::Triple;
use chroma_math::Vec3;

use crate::hue::{hue, sector_to_rgb};

/// Converts gamma-encoded RGB to HSL.
///
/// - `L = (cmax + cmin) / 2`
/// - `S = 0` when `delta = 0`, and 0 when `L` is exactly 0 or 1 (the
///   denominator vanishes there), else `delta / (1 - |2L - 1|)`
///
/// # Example
///
/// ```rust
/// use chroma_spaces::hsl::rgb_to_hsl;
///
/// let hsl = rgb_to_hsl([0.0, 1.0, 0.0]);
/// assert_eq!(hsl, [120.0, 1.0, 0.5]);
/// ```
#[inline]
pub fn rgb_to_hsl(rgb: Triple) -> Triple {
    let v = Vec3::from_array(rgb);
    // f64::max ignores NaN, which would hide a corrupt channel; surface it
    if !v.is_finite() {
        return [f64::NAN; 3];
    }
    let cmax = v.max_element();
    let cmin = v.min_element();
    let delta = cmax - cmin;
    let l = (cmax + cmin) / 2.0;

    let h = hue(rgb[0], rgb[1], rgb[2], cmax, delta);
    let denom = 1.0 - (2.0 * l - 1.0).abs();
    let s = if delta == 0.0 || denom == 0.0 {
        0.0
    } else {
        delta / denom
    };

    [h, s, l]
}

/// Converts HSL back to gamma-encoded RGB via sector reconstruction.
#[inline]
pub fn hsl_to_rgb(hsl: Triple) -> Triple {
    let [h, s, l] = hsl;
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let m = l - c / 2.0;
    sector_to_rgb(h, c, m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_known_values() {
        assert_eq!(rgb_to_hsl([0.0, 1.0, 0.0]), [120.0, 1.0, 0.5]);
        assert_eq!(rgb_to_hsl([1.0, 0.0, 0.0]), [0.0, 1.0, 0.5]);
        assert_eq!(rgb_to_hsl([0.0, 0.0, 1.0]), [240.0, 1.0, 0.5]);
    }

    #[test]
    fn test_black_and_white_boundaries() {
        // Zero denominator cases: S must be 0, not NaN
        assert_eq!(rgb_to_hsl([0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
        assert_eq!(rgb_to_hsl([1.0, 1.0, 1.0]), [0.0, 0.0, 1.0]);
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
                    let back = hsl_to_rgb(rgb_to_hsl(rgb));
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
            let hsl = rgb_to_hsl([t, t, t]);
            assert_eq!(hsl[0], 0.0);
            assert_eq!(hsl[1], 0.0);
            assert_abs_diff_eq!(hsl[2], t, epsilon = 1e-12);
            let back = hsl_to_rgb(hsl);
            for c in 0..3 {
                assert_abs_diff_eq!(back[c], t, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_saturation_guard_distinct_from_achromatic() {
        // Saturated but mid lightness: denominator well away from zero
        let hsl = rgb_to_hsl([0.75, 0.25, 0.25]);
        assert!(hsl[1] > 0.0);
        assert_abs_diff_eq!(hsl[2], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_nan_propagates() {
        let hsl = rgb_to_hsl([0.5, 0.5, f64::NAN]);
        assert!(hsl.iter().all(|c| c.is_nan()));
        let back = hsl_to_rgb([0.0, 0.5, f64::NAN]);
        assert!(back.iter().all(|c| c.is_nan()));
    }
}
