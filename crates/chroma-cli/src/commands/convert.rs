//! Convert command: one triple between two color spaces.

use anyhow::Result;
use chroma_color::{convert, Conversion};
use clap::Args;

/// Arguments for `chroma convert`.
#[derive(Args)]
pub struct ConvertArgs {
    /// Source color space
    #[arg(short, long)]
    pub from: String,

    /// Target color space
    #[arg(short, long)]
    pub to: String,

    /// Clamp the result to [0, 1] (display-safe output)
    #[arg(long)]
    pub clamp: bool,

    /// Show the route taken through the conversion graph
    #[arg(long)]
    pub route: bool,

    /// The three components of the input triple
    #[arg(num_args = 3, allow_negative_numbers = true, value_names = ["C0", "C1", "C2"])]
    pub value: Vec<f64>,
}

/// Runs the convert command.
pub fn run(args: ConvertArgs) -> Result<()> {
    let from = super::parse_space(&args.from)?;
    let to = super::parse_space(&args.to)?;
    let value = [args.value[0], args.value[1], args.value[2]];

    if args.route {
        let steps = Conversion::route(from, to)
            .steps()
            .iter()
            .map(|s| format!("{s:?}"))
            .collect::<Vec<_>>()
            .join(" -> ");
        eprintln!(
            "{} -> {}: {}",
            from,
            to,
            if steps.is_empty() { "identity" } else { &steps }
        );
    }

    let mut out = convert(value, from, to);
    if args.clamp {
        out = chroma_color::math::Vec3::from_array(out).clamp01().to_array();
    }

    super::print_triple(out);
    Ok(())
}
