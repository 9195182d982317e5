//! # chroma-transfer
//!
//! The sRGB transfer function (OETF/EOTF) used by the conversion pipeline.
//!
//! Transfer functions convert between linear-light values and gamma-encoded
//! values:
//!
//! - **EOTF** (Electro-Optical Transfer Function): encoded -> linear
//! - **OETF** (Opto-Electronic Transfer Function): linear -> encoded
//!
//! # Usage
//!
//! ```rust
//! use chroma_transfer::srgb;
//!
//! let linear = srgb::eotf(0.5);
//! let encoded = srgb::oetf(linear);
//! assert!((encoded - 0.5).abs() < 1e-12);
//! ```
//!
//! # Dependencies
//!
//! - [`chroma-core`] - Core types
//!
//! # Used By
//!
//! - `chroma-color` - Full color space conversions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod srgb;

pub use srgb::{eotf as srgb_eotf, oetf as srgb_oetf};
