//! # chroma-color
//!
//! Unified conversion API over the chroma-rs pipeline crates.
//!
//! The color spaces form a conversion graph:
//!
//! ```text
//! CIELAB -- XYZ -- Linear RGB -- sRGB -- HSV
//!                                    \
//!                                     -- HSL
//! ```
//!
//! [`Conversion`] routes along this graph between any two tagged spaces;
//! [`convert()`] is the one-shot form. The flat per-edge functions
//! ([`srgb_to_linear`], [`linear_to_xyz`], [`rgb_to_hsv`], ...) are
//! re-exported for callers that know their spaces statically.
//!
//! # Quick Start
//!
//! ```rust
//! use chroma_color::{convert, Space};
//!
//! let lab = convert([1.0, 0.0, 0.0], Space::Srgb, Space::Lab);
//! assert!((lab[0] - 53.24).abs() < 0.01); // L* of pure red
//! ```
//!
//! # Dependencies
//!
//! - [`chroma-core`] - `Space`, `Triple`, errors
//! - [`chroma-math`] - `Vec3`/`Mat3`
//! - [`chroma-transfer`] - sRGB transfer function
//! - [`chroma-spaces`] - XYZ, Lab, HSV, HSL transforms
//! - [`rayon`] - Parallel batch conversion
//!
//! # Used By
//!
//! - `chroma-cli` - Command-line conversions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod batch;
pub mod convert;
pub mod grid;
mod pipeline;

pub use chroma_core::{ChromaError, ChromaResult, Space, Triple};
pub use convert::{
    lab_to_srgb, linear_to_srgb, srgb_to_lab, srgb_to_linear, srgb_to_xyz, xyz_to_srgb,
};
pub use pipeline::{convert, Conversion, Step};

// Re-export sub-crates for convenience
pub use chroma_math as math;
pub use chroma_spaces as spaces;
pub use chroma_transfer as transfer;

// Flat per-edge surface
pub use chroma_spaces::{
    hsl_to_rgb, hsv_to_rgb, lab_to_xyz, linear_to_xyz, rgb_to_hsl, rgb_to_hsv, xyz_to_lab,
    xyz_to_linear,
};

/// Prelude with commonly used types and functions.
pub mod prelude {
    pub use crate::batch::convert_slice;
    pub use crate::convert::{lab_to_srgb, linear_to_srgb, srgb_to_lab, srgb_to_linear};
    pub use crate::{convert, Conversion, Space, Step, Triple};
    pub use chroma_spaces::{
        hsl_to_rgb, hsv_to_rgb, lab_to_xyz, linear_to_xyz, rgb_to_hsl, rgb_to_hsv, xyz_to_lab,
        xyz_to_linear,
    };
}
