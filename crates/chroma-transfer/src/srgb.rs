//! sRGB transfer function.
//!
//! The sRGB standard uses a piecewise function combining a linear segment
//! near black with a power curve (approximately gamma 2.2) for the rest.
//!
//! No clamping is applied on either side: negative and >1 inputs propagate
//! analytically, and NaN/Infinity surface in the output. Callers that need
//! display-safe values clamp after converting.
//!
//! # Reference
//!
//! IEC 61966-2-1:1999

use chroma_core::Triple;

/// sRGB EOTF: decodes a gamma-encoded sRGB value to linear light.
///
/// # Formula
///
/// ```text
/// if V <= 0.04045:
///     L = V / 12.92
/// else:
///     L = ((V + 0.055) / 1.055)^2.4
/// ```
///
/// # Example
///
/// ```rust
/// use chroma_transfer::srgb::eotf;
///
/// let linear = eotf(0.5);
/// assert!((linear - 0.21404).abs() < 1e-5);
/// ```
#[inline]
pub fn eotf(v: f64) -> f64 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB OETF: encodes linear light to gamma-encoded sRGB.
///
/// Algebraic inverse of [`eotf`], with the breakpoint expressed in the
/// linear domain.
///
/// # Formula
///
/// ```text
/// if L <= 0.0031308:
///     V = L * 12.92
/// else:
///     V = 1.055 * L^(1/2.4) - 0.055
/// ```
#[inline]
pub fn oetf(l: f64) -> f64 {
    if l <= 0.0031308 {
        l * 12.92
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    }
}

/// Applies the sRGB EOTF to each channel of a triple independently.
#[inline]
pub fn eotf_rgb(rgb: Triple) -> Triple {
    [eotf(rgb[0]), eotf(rgb[1]), eotf(rgb[2])]
}

/// Applies the sRGB OETF to each channel of a triple independently.
#[inline]
pub fn oetf_rgb(rgb: Triple) -> Triple {
    [oetf(rgb[0]), oetf(rgb[1]), oetf(rgb[2])]
}
