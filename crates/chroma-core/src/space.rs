//! Color space tags.
//!
//! [`Space`] identifies which representation a [`Triple`](crate::Triple)
//! belongs to. It carries no data — the conversion math lives in
//! `chroma-transfer` and `chroma-spaces`, and `chroma-color` routes between
//! tags.

use std::fmt;
use std::str::FromStr;

use crate::{ChromaError, ChromaResult};

/// Identifies the color space a triple belongs to.
///
/// The spaces form a conversion graph: sRGB ↔ linear RGB ↔ XYZ ↔ Lab is the
/// colorimetric chain, and HSV/HSL are cylindrical re-expressions of sRGB.
///
/// # Example
///
/// ```rust
/// use chroma_core::Space;
///
/// let space: Space = "lab".parse().unwrap();
/// assert_eq!(space, Space::Lab);
/// assert_eq!(space.name(), "CIELAB");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Space {
    /// Gamma-encoded sRGB, channels nominally in [0, 1].
    Srgb,
    /// Linear-light RGB (sRGB primaries, D65), channels nominally in [0, 1].
    LinearRgb,
    /// CIE XYZ (D65), channels nominally in [0, 1].
    Xyz,
    /// CIELAB (D65 reference white): L in [0, 100], a*/b* unbounded.
    Lab,
    /// Hue/saturation/value: H in degrees [0, 360), S and V in [0, 1].
    Hsv,
    /// Hue/saturation/lightness: H in degrees [0, 360), S and L in [0, 1].
    Hsl,
}

impl Space {
    /// All spaces, in pipeline order.
    pub const ALL: [Space; 6] = [
        Space::Srgb,
        Space::LinearRgb,
        Space::Xyz,
        Space::Lab,
        Space::Hsv,
        Space::Hsl,
    ];

    /// Human-readable name, used for display and CLI output.
    pub const fn name(self) -> &'static str {
        match self {
            Space::Srgb => "sRGB",
            Space::LinearRgb => "Linear RGB",
            Space::Xyz => "XYZ",
            Space::Lab => "CIELAB",
            Space::Hsv => "HSV",
            Space::Hsl => "HSL",
        }
    }

    /// Whether this space uses cylindrical coordinates (hue angle + radius).
    ///
    /// Cylindrical spaces are projected to display coordinates via
    /// `(S·cos H, ·, S·sin H)` rather than per-axis scaling.
    #[inline]
    pub const fn is_cylindrical(self) -> bool {
        matches!(self, Space::Hsv | Space::Hsl)
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Space {
    type Err = ChromaError;

    /// Parses a space name, case-insensitively, accepting common spellings.
    fn from_str(s: &str) -> ChromaResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "srgb" => Ok(Space::Srgb),
            "linear" | "linear-rgb" | "linear_rgb" | "linearrgb" => Ok(Space::LinearRgb),
            "xyz" => Ok(Space::Xyz),
            "lab" | "cielab" => Ok(Space::Lab),
            "hsv" => Ok(Space::Hsv),
            "hsl" => Ok(Space::Hsl),
            _ => Err(ChromaError::UnknownSpace(s.to_string())),
        }
    }
}
