//! Command-line parsing for the braid geometry generator.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the geometry code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "braid", version, about = "Helical shield-braid centerline generator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate the four carrier centerlines and write them as point files.
    Generate(GenerateArgs),
    /// Print the resolved braid constants and the clearance verdict.
    Inspect(InspectArgs),
    /// Plot the radial bump profile of the back-right wire.
    Profile(ProfileArgs),
    /// Summarize existing point files.
    Points(PointsArgs),
}

/// Braid parameters.
///
/// Every flag is optional: unset values come from `--config` if given, else
/// from the nominal cable.
#[derive(Debug, Args, Clone, Default)]
pub struct BraidArgs {
    /// JSON file with a (partial) braid configuration.
    #[arg(long, value_name = "JSON")]
    pub config: Option<PathBuf>,

    /// Wire radius [mm] (nominal 0.05).
    #[arg(long)]
    pub wire_radius: Option<f64>,

    /// Shield diameter [mm] (nominal 1.46).
    #[arg(long)]
    pub shield_diameter: Option<f64>,

    /// Total carrier count, even (nominal 16).
    #[arg(long)]
    pub carriers: Option<u32>,

    /// Wires per carrier (nominal 3).
    #[arg(long)]
    pub wires_per_carrier: Option<u32>,

    /// Lay angle [deg] (nominal 21.44).
    #[arg(long)]
    pub lay_angle: Option<f64>,

    /// Inner gap [mm] (nominal 0.02).
    #[arg(long)]
    pub inner_gap: Option<f64>,

    /// Gap between crossing wires [mm] (nominal 0.0455).
    #[arg(long)]
    pub mid_gap: Option<f64>,

    /// Outer gap [mm] (nominal 0.02).
    #[arg(long)]
    pub outer_gap: Option<f64>,

    /// Spacing between strands of one carrier [mm] (nominal 0.02).
    #[arg(long)]
    pub clearance: Option<f64>,

    /// Bump amplitude [mm] (nominal 0.2).
    #[arg(long)]
    pub amplitude: Option<f64>,

    /// Wave-height knob checked by the clearance gate (nominal 1.0).
    #[arg(long)]
    pub gamma: Option<f64>,

    /// Bump transition width as a fraction of the helix chord (nominal 0.2).
    #[arg(long)]
    pub transition: Option<f64>,
}

/// Sampling window over the braid parameter.
#[derive(Debug, Args, Clone)]
pub struct WindowArgs {
    /// Number of samples per wire path.
    #[arg(short = 'n', long, default_value_t = 2000)]
    pub samples: usize,

    /// Window start, in sectors.
    #[arg(long, default_value_t = 0.5, allow_hyphen_values = true)]
    pub start: f64,

    /// Window length, in sectors.
    #[arg(long, default_value_t = 2.0)]
    pub duration: f64,
}

#[derive(Debug, Args, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub braid: BraidArgs,

    #[command(flatten)]
    pub window: WindowArgs,

    /// Output directory for the point files.
    #[arg(short, long, default_value = ".")]
    pub out: PathBuf,

    /// Also write every strand of every carrier bundle.
    #[arg(long)]
    pub expand: bool,

    /// Write a JSON manifest of the run.
    #[arg(long, value_name = "JSON")]
    pub manifest: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct InspectArgs {
    #[command(flatten)]
    pub braid: BraidArgs,
}

#[derive(Debug, Args, Clone)]
pub struct ProfileArgs {
    #[command(flatten)]
    pub braid: BraidArgs,

    #[command(flatten)]
    pub window: WindowArgs,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,
}

#[derive(Debug, Args, Clone)]
pub struct PointsArgs {
    /// Point files to read.
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,
}
