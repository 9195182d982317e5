//! CLI command implementations

pub mod convert;
pub mod grid;
pub mod project;

use anyhow::{Context, Result};
use chroma_core::Space;

/// Resolves a space name argument.
pub fn parse_space(name: &str) -> Result<Space> {
    name.parse()
        .context("valid spaces: srgb, linear-rgb, xyz, lab, hsv, hsl")
}

/// Prints a triple with stable formatting.
pub fn print_triple(value: [f64; 3]) {
    println!("{:.9} {:.9} {:.9}", value[0], value[1], value[2]);
}
