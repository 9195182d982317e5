//! # chroma-view
//!
//! Display projection: maps tagged color space coordinates to bounded
//! scene coordinates for visualization.
//!
//! This is a pure geometric remap — scaling, centering, and
//! cylindrical-to-Cartesian unwrapping — with **no colorimetric meaning**.
//! It lives apart from the conversion crates so the colorimetric math can
//! be tested independently of display scaling choices.
//!
//! The scaling constants are deliberately caller-supplied: different scenes
//! want different framing, and no single set of divisors is authoritative.
//! [`Projection`] carries the knobs and serde support so viewers can load
//! them from config files.
//!
//! # Usage
//!
//! ```rust
//! use chroma_core::Space;
//! use chroma_view::{project, Projection};
//!
//! let cfg = Projection::default();
//!
//! // Mid-gray sits at the scene origin when centering is on
//! let pos = project(Space::Srgb, [0.5, 0.5, 0.5], &cfg);
//! assert_eq!(pos, [0.0, 0.0, 0.0]);
//! ```
//!
//! # Dependencies
//!
//! - [`chroma-core`] - `Space`, `Triple`
//! - [`serde`] - Config (de)serialization
//!
//! # Used By
//!
//! - `chroma-cli` - `project` and `grid` subcommands

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use chroma_core::{Space, Triple};
use serde::{Deserialize, Serialize};

/// Nominal Lab ranges used to pre-normalize before the display remap.
const LAB_L_RANGE: f64 = 100.0;
const LAB_AB_RANGE: f64 = 128.0;

/// Display projection configuration.
///
/// - `center`: subtract the nominal midpoint so the volume is origin-centered
/// - `scale`: axis scale for rectangular spaces and the vertical axis of
///   cylindrical spaces
/// - `radial_scale`: saturation-to-radius scale for cylindrical spaces
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Projection {
    /// Center the volume on the scene origin.
    pub center: bool,
    /// Axis scale.
    pub scale: f64,
    /// Radius scale for cylindrical spaces.
    pub radial_scale: f64,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            center: true,
            scale: 5.0,
            radial_scale: 2.0,
        }
    }
}

/// Centers (optionally) and scales one rectangular axis.
#[inline]
fn axis(v: f64, cfg: &Projection) -> f64 {
    let v = if cfg.center { v - 0.5 } else { v };
    v * cfg.scale
}

/// Maps a tagged color space coordinate to a bounded display coordinate.
///
/// Rectangular spaces are centered and scaled per axis. Lab is first
/// normalized by its nominal ranges and reordered so L* is vertical
/// (a* -> X, L* -> Y, b* -> Z). Cylindrical spaces unwrap hue into the
/// XZ plane with saturation as radius and V/L as height.
///
/// # Example
///
/// ```rust
/// use chroma_core::Space;
/// use chroma_view::{project, Projection};
///
/// let cfg = Projection::default();
///
/// // Full saturation red: radius lands on +X
/// let pos = project(Space::Hsv, [0.0, 1.0, 1.0], &cfg);
/// assert!((pos[0] - cfg.radial_scale).abs() < 1e-12);
/// assert!(pos[2].abs() < 1e-12);
/// ```
pub fn project(space: Space, value: Triple, cfg: &Projection) -> Triple {
    match space {
        Space::Srgb | Space::LinearRgb | Space::Xyz => [
            axis(value[0], cfg),
            axis(value[1], cfg),
            axis(value[2], cfg),
        ],
        Space::Lab => {
            // a* -> X, L* -> Y, b* -> Z; a*/b* are already signed about 0
            let l = value[0] / LAB_L_RANGE;
            let a = value[1] / LAB_AB_RANGE;
            let b = value[2] / LAB_AB_RANGE;
            let l = if cfg.center { l - 0.5 } else { l };
            [a * cfg.scale, l * cfg.scale, b * cfg.scale]
        }
        Space::Hsv | Space::Hsl => {
            let h_rad = value[0].to_radians();
            let radius = value[1] * cfg.radial_scale;
            let height = if cfg.center { value[2] - 0.5 } else { value[2] };
            [radius * h_rad.cos(), height * cfg.scale, radius * h_rad.sin()]
        }
    }
}
