//! CIE XYZ ↔ CIELAB (D65-referenced).
//!
//! CIELAB applies a cube root above a small threshold and a linear ramp
//! below it. The threshold `δ = 6/29` must be identical on the forward and
//! inverse paths or values near the breakpoint fail to round-trip — this is
//! the most failure-prone boundary in the pipeline and is tested on both
//! sides of `t = δ³`.

use chroma_core::Triple;

use crate::xyz::D65_WHITE;

/// CIELAB threshold δ = 6/29.
const DELTA: f64 = 6.0 / 29.0;

/// δ³, the breakpoint of `f` in the input domain.
const DELTA3: f64 = DELTA * DELTA * DELTA;

/// Forward nonlinearity: cube root above δ³, linear ramp below.
#[inline]
fn f(t: f64) -> f64 {
    if t > DELTA3 {
        t.cbrt()
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

/// Inverse nonlinearity, with the breakpoint at δ in the output domain.
#[inline]
fn f_inv(s: f64) -> f64 {
    if s > DELTA {
        s * s * s
    } else {
        3.0 * DELTA * DELTA * (s - 4.0 / 29.0)
    }
}

/// Converts CIE XYZ (D65) to CIELAB.
///
/// Output is `[L, a, b]` with L in [0, 100] for in-gamut input and a*/b*
/// unbounded (typically within ±128).
///
/// # Example
///
/// ```rust
/// use chroma_spaces::lab::xyz_to_lab;
/// use chroma_spaces::xyz::D65_WHITE;
///
/// // The reference white maps to Lab white
/// let lab = xyz_to_lab(D65_WHITE);
/// assert!((lab[0] - 100.0).abs() < 1e-9);
/// assert!(lab[1].abs() < 1e-9);
/// assert!(lab[2].abs() < 1e-9);
/// ```
#[inline]
pub fn xyz_to_lab(xyz: Triple) -> Triple {
    let fx = f(xyz[0] / D65_WHITE[0]);
    let fy = f(xyz[1] / D65_WHITE[1]);
    let fz = f(xyz[2] / D65_WHITE[2]);

    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

/// Converts CIELAB back to CIE XYZ (D65).
#[inline]
pub fn lab_to_xyz(lab: Triple) -> Triple {
    let fy = (lab[0] + 16.0) / 116.0;
    let fx = fy + lab[1] / 500.0;
    let fz = fy - lab[2] / 200.0;

    [
        f_inv(fx) * D65_WHITE[0],
        f_inv(fy) * D65_WHITE[1],
        f_inv(fz) * D65_WHITE[2],
    ]
}
