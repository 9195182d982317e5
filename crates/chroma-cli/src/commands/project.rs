//! Project command: one triple to a display coordinate.

use anyhow::Result;
use chroma_view::{project, Projection};
use clap::Args;

/// Arguments for `chroma project`.
#[derive(Args)]
pub struct ProjectArgs {
    /// Color space of the input triple
    #[arg(short, long)]
    pub space: String,

    /// Do not center the volume on the scene origin
    #[arg(long)]
    pub no_center: bool,

    /// Axis scale
    #[arg(long, default_value_t = Projection::default().scale)]
    pub scale: f64,

    /// Radius scale for cylindrical spaces
    #[arg(long, default_value_t = Projection::default().radial_scale)]
    pub radial: f64,

    /// The three components of the input triple
    #[arg(num_args = 3, allow_negative_numbers = true, value_names = ["C0", "C1", "C2"])]
    pub value: Vec<f64>,
}

/// Runs the project command.
pub fn run(args: ProjectArgs) -> Result<()> {
    let space = super::parse_space(&args.space)?;
    let cfg = Projection {
        center: !args.no_center,
        scale: args.scale,
        radial_scale: args.radial,
    };
    let value = [args.value[0], args.value[1], args.value[2]];

    super::print_triple(project(space, value, &cfg));
    Ok(())
}
