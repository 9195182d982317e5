//! Grid command: sweep the RGB unit cube and print projected coordinates.
//!
//! This is the visualization feed: every cube sample is converted to the
//! target space in parallel, projected, and printed one point per line as
//! `R G B  ->  X Y Z`.

use anyhow::Result;
use chroma_color::batch::convert_slice;
use chroma_color::{grid, Space};
use chroma_view::{project, Projection};
use clap::Args;

/// Arguments for `chroma grid`.
#[derive(Args)]
pub struct GridArgs {
    /// Color space to sweep the cube through
    #[arg(short, long)]
    pub space: String,

    /// Cube resolution: (res + 1)^3 samples
    #[arg(short, long, default_value_t = 8)]
    pub res: usize,

    /// Fix the blue channel and sweep a 2D slice instead
    #[arg(long)]
    pub slice_b: Option<f64>,

    /// Do not center the volume on the scene origin
    #[arg(long)]
    pub no_center: bool,

    /// Axis scale
    #[arg(long, default_value_t = Projection::default().scale)]
    pub scale: f64,

    /// Radius scale for cylindrical spaces
    #[arg(long, default_value_t = Projection::default().radial_scale)]
    pub radial: f64,
}

/// Runs the grid command.
pub fn run(args: GridArgs) -> Result<()> {
    let space = super::parse_space(&args.space)?;
    let cfg = Projection {
        center: !args.no_center,
        scale: args.scale,
        radial_scale: args.radial,
    };

    let points = match args.slice_b {
        Some(b) => grid::slice_b(args.res, b),
        None => grid::unit_cube(args.res),
    };
    let converted = convert_slice(&points, Space::Srgb, space);

    for (rgb, value) in points.iter().zip(&converted) {
        let pos = project(space, *value, &cfg);
        println!(
            "{:.4} {:.4} {:.4}  ->  {:.6} {:.6} {:.6}",
            rgb[0], rgb[1], rgb[2], pos[0], pos[1], pos[2]
        );
    }

    Ok(())
}
