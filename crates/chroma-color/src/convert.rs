//! Direct chain conversions.
//!
//! Named compositions of the per-edge transforms for callers that know
//! their spaces statically. No math of its own — everything delegates to
//! `chroma-transfer` and `chroma-spaces`.

use chroma_core::Triple;
use chroma_spaces::{lab_to_xyz, linear_to_xyz, xyz_to_lab, xyz_to_linear};
use chroma_transfer::srgb;

/// Decodes gamma-encoded sRGB to linear-light RGB (per channel).
#[inline]
pub fn srgb_to_linear(rgb: Triple) -> Triple {
    srgb::eotf_rgb(rgb)
}

/// Encodes linear-light RGB to gamma-encoded sRGB (per channel).
#[inline]
pub fn linear_to_srgb(rgb: Triple) -> Triple {
    srgb::oetf_rgb(rgb)
}

/// sRGB all the way to CIE XYZ.
#[inline]
pub fn srgb_to_xyz(rgb: Triple) -> Triple {
    linear_to_xyz(srgb_to_linear(rgb))
}

/// CIE XYZ all the way back to sRGB.
#[inline]
pub fn xyz_to_srgb(xyz: Triple) -> Triple {
    linear_to_srgb(xyz_to_linear(xyz))
}

/// sRGB all the way to CIELAB.
///
/// # Example
///
/// ```rust
/// use chroma_color::convert::srgb_to_lab;
///
/// // Pure sRGB red
/// let lab = srgb_to_lab([1.0, 0.0, 0.0]);
/// assert!((lab[0] - 53.24).abs() < 0.01);
/// assert!((lab[1] - 80.09).abs() < 0.01);
/// assert!((lab[2] - 67.20).abs() < 0.01);
/// ```
#[inline]
pub fn srgb_to_lab(rgb: Triple) -> Triple {
    xyz_to_lab(srgb_to_xyz(rgb))
}

/// CIELAB all the way back to sRGB.
#[inline]
pub fn lab_to_srgb(lab: Triple) -> Triple {
    xyz_to_srgb(lab_to_xyz(lab))
}
