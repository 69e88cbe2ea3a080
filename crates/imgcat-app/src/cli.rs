use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use imgcat_common::CompositePolicy;
use imgcat_layout::LayoutKind;

/// Lay out images on one canvas and write the composite.
#[derive(Parser, Debug)]
#[command(name = "imgcat", version, about, arg_required_else_help = true)]
pub struct Args {
    /// X of the crop origin read from every input (default: left edge).
    #[arg(short = 'x', long)]
    pub x: Option<u32>,

    /// Y of the crop origin read from every input (default: top edge).
    #[arg(short = 'y', long)]
    pub y: Option<u32>,

    /// Cell width in pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Cell height in pixels.
    #[arg(long)]
    pub height: Option<u32>,

    /// Layout of the cells.
    #[arg(short = 'l', long, value_enum)]
    pub layout: Option<LayoutArg>,

    /// Images per column (vertical) or row (horizontal) before wrapping, 0 = no wrap.
    #[arg(long)]
    pub wrap: Option<u32>,

    /// Column count for the tiling layout.
    #[arg(long, visible_alias = "h-tile-num", alias = "column")]
    pub columns: Option<u32>,

    /// Gap between cells in pixels.
    #[arg(long)]
    pub gap: Option<u32>,

    /// Margin around the composite in pixels.
    #[arg(long)]
    pub margin: Option<u32>,

    /// How inputs are drawn over the canvas (default: overlay for tiling, overwrite otherwise).
    #[arg(long, value_enum)]
    pub composite: Option<CompositeArg>,

    /// Canvas background, #rrggbb, #rrggbbaa or rgba(r,g,b,a) (default: #ffffff).
    #[arg(long)]
    pub background: Option<String>,

    /// JPEG quality, 1-100 (default: 90).
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub quality: Option<u8>,

    /// Output file; the extension selects PNG or JPEG.
    #[arg(short = 'o', long, required_unless_present_any = ["init_config", "dry_run"])]
    pub output: Option<PathBuf>,

    /// Preset file (default: imgcat/config.toml in the platform config directory).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write a documented default preset to PATH and exit.
    #[arg(long, value_name = "PATH", exclusive = true)]
    pub init_config: Option<PathBuf>,

    /// Print the computed layout as JSON without reading or writing images.
    #[arg(long)]
    pub dry_run: bool,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Input images, drawn in order.
    #[arg(value_name = "IMAGE", required_unless_present = "init_config")]
    pub inputs: Vec<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LayoutArg {
    #[value(alias = "vert")]
    Vertical,
    #[value(alias = "horz")]
    Horizontal,
    #[value(alias = "tile")]
    Tiling,
}

impl From<LayoutArg> for LayoutKind {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Vertical => LayoutKind::Vertical,
            LayoutArg::Horizontal => LayoutKind::Horizontal,
            LayoutArg::Tiling => LayoutKind::Tiling,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CompositeArg {
    Overwrite,
    Overlay,
}

impl From<CompositeArg> for CompositePolicy {
    fn from(arg: CompositeArg) -> Self {
        match arg {
            CompositeArg::Overwrite => CompositePolicy::Overwrite,
            CompositeArg::Overlay => CompositePolicy::Overlay,
        }
    }
}

/// Parse the process arguments, printing usage and exiting on failure.
///
/// Help exits with status 1 like any other usage message; `--version`
/// exits with 0.
pub fn parse() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // Nothing left to report to if stderr is gone.
            let _ = err.print();
            std::process::exit(exit_code(err.kind()));
        }
    }
}

fn exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::DisplayVersion => 0,
        ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => 1,
        _ => 2,
    }
}
