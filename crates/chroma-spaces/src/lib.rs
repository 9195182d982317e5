//! # chroma-spaces
//!
//! Color space transforms beyond the transfer function: the fixed D65
//! RGB/XYZ matrix pair, the CIELAB cube-root transform, and the cylindrical
//! HSV/HSL re-expressions of RGB.
//!
//! Every transform here is a pure function on `[f64; 3]` with a defined
//! inverse. Nothing clamps, nothing validates: out-of-gamut values are
//! analytically meaningful and non-finite inputs propagate to the output.
//!
//! # Modules
//!
//! | Module | Transform | Inverse |
//! |--------|-----------|---------|
//! | [`xyz`] | linear RGB -> CIE XYZ (D65 matrix) | exact matrix inverse |
//! | [`lab`] | XYZ -> CIELAB (cube-root threshold) | algebraic inverse, same δ |
//! | [`hsv`] | RGB -> hue/saturation/value | sector reconstruction |
//! | [`hsl`] | RGB -> hue/saturation/lightness | sector reconstruction |
//!
//! # Dependencies
//!
//! - [`chroma-core`] - Core types
//! - [`chroma-math`] - `Vec3`/`Mat3`
//!
//! # Used By
//!
//! - `chroma-color` - Conversion routing
//! - `chroma-view` - Display projection of cylindrical spaces

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod hue;
pub mod hsl;
pub mod hsv;
pub mod lab;
pub mod xyz;

pub use hsl::{hsl_to_rgb, rgb_to_hsl};
pub use hsv::{hsv_to_rgb, rgb_to_hsv};
pub use lab::{lab_to_xyz, xyz_to_lab};
pub use xyz::{linear_to_xyz, xyz_to_linear, D65_WHITE, RGB_TO_XYZ, XYZ_TO_RGB};
