//! chroma - color space conversion CLI
//!
//! Converts color triples between sRGB, linear RGB, XYZ, CIELAB, HSV and
//! HSL, and projects them to display coordinates for visualization.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "chroma")]
#[command(author, version, about = "Color space conversion and projection")]
#[command(long_about = "
Convert color triples along the pipeline sRGB <-> linear RGB <-> XYZ <->
CIELAB, or to the cylindrical HSV/HSL spaces, and project coordinates for
3D visualization.

Examples:
  chroma convert --from srgb --to lab 1.0 0.0 0.0
  chroma convert --from hsl --to srgb 120 1.0 0.5
  chroma project --space hsv 0.2 0.8 0.5
  chroma project --space lab --no-center --scale 6 1.0 0.0 0.0
  chroma grid --space lab --res 4
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a triple between two color spaces
    #[command(visible_alias = "c")]
    Convert(commands::convert::ConvertArgs),

    /// Project a triple to a display coordinate
    #[command(visible_alias = "p")]
    Project(commands::project::ProjectArgs),

    /// Sweep the RGB unit cube and print projected coordinates
    #[command(visible_alias = "g")]
    Grid(commands::grid::GridArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert(args) => commands::convert::run(args),
        Commands::Project(args) => commands::project::run(args),
        Commands::Grid(args) => commands::grid::run(args),
    }
}
