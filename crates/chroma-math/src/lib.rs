//! # chroma-math
//!
//! Double-precision vector and matrix math for color space transforms.
//!
//! The conversion pipeline is specified with round-trip tolerances down to
//! 1e-9 (and threshold probes at ±1e-12), so all math here is `f64`.
//! [`glam`] interop is provided for callers that already work with
//! `DVec3`/`DMat3`.
//!
//! # Dependencies
//!
//! - [`chroma-core`] - Core types
//! - [`glam`] - Interop with `DVec3`/`DMat3`
//!
//! # Used By
//!
//! - `chroma-spaces` - RGB/XYZ matrix transforms
//! - `chroma-color` - Conversion routing

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod vec3;

pub use mat3::Mat3;
pub use vec3::Vec3;
