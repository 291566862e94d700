//! Top-level application orchestration.
//!
//! `src/main.rs` only maps errors to exit codes; this module is the "real main" that:
//! - loads `.env` and installs the log subscriber
//! - parses CLI arguments into a `BraidConfig` and `SampleWindow`
//! - runs the generation pipeline
//! - prints reports/plots
//! - writes point files and the optional manifest

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::cli::{BraidArgs, Command, GenerateArgs, InspectArgs, PointsArgs, ProfileArgs, WindowArgs};
use crate::domain::{BraidConfig, SampleWindow};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `braid` binary.
pub fn run() -> Result<(), AppError> {
    // A missing .env is normal; it only ever carries RUST_LOG.
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = crate::cli::Cli::parse();

    match cli.command {
        Command::Generate(args) => handle_generate(args),
        Command::Inspect(args) => handle_inspect(args),
        Command::Profile(args) => handle_profile(args),
        Command::Points(args) => handle_points(args),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Ignore the error if a subscriber is already set (e.g. in tests).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn handle_generate(args: GenerateArgs) -> Result<(), AppError> {
    let config = braid_config_from_args(&args.braid)?;
    let window = window_from_args(&args.window);

    let run = match pipeline::run_generation(&config, &window, args.expand) {
        Ok(run) => run,
        Err(err) => {
            if err.is_skip() {
                warn!(%err, "clearance check failed, no files written");
            }
            return Err(err);
        }
    };

    let files = pipeline::write_outputs(&run, &args.out, args.manifest.as_deref())?;

    println!(
        "{}",
        crate::report::format_generation_summary(&run.geometry, &run.window, &run.paths)
    );
    println!("Wrote {} file(s) to {}", files.len(), args.out.display());
    Ok(())
}

fn handle_inspect(args: InspectArgs) -> Result<(), AppError> {
    let config = braid_config_from_args(&args.braid)?;
    let geometry = crate::braid::resolve(&config)?;
    let valid = crate::braid::check_validity(&config);
    println!("{}", crate::report::format_geometry_summary(&config, &geometry, valid));
    Ok(())
}

fn handle_profile(args: ProfileArgs) -> Result<(), AppError> {
    let config = braid_config_from_args(&args.braid)?;
    let window = window_from_args(&args.window);
    let plot = profile_plot(&config, &window, args.width, args.height)?;
    println!("{plot}");
    Ok(())
}

/// Plot the base path profile; configs failing the clearance gate are not sampled.
pub fn profile_plot(
    config: &BraidConfig,
    window: &SampleWindow,
    width: usize,
    height: usize,
) -> Result<String, AppError> {
    let geometry = crate::braid::resolve(config)?;
    if let Err(err) = crate::braid::check_clearance(config) {
        warn!(%err, "clearance check failed, profile not rendered");
        return Err(err);
    }
    crate::plot::render_bump_profile(&geometry, window, width, height)
}

fn handle_points(args: PointsArgs) -> Result<(), AppError> {
    let files = args
        .files
        .iter()
        .map(|path| crate::io::read_point_file(path).map(|file| (path.as_path(), file)))
        .collect::<Result<Vec<_>, _>>()?;
    println!(
        "{}",
        crate::report::format_point_files(files.iter().map(|(path, file)| (*path, file)))
    );
    Ok(())
}

/// Build a config: nominal values, then the `--config` file, then flags.
pub fn braid_config_from_args(args: &BraidArgs) -> Result<BraidConfig, AppError> {
    let mut config = match &args.config {
        Some(path) => crate::io::read_config(path)?,
        None => BraidConfig::default(),
    };

    if let Some(v) = args.wire_radius {
        config.wire_radius = v;
    }
    if let Some(v) = args.shield_diameter {
        config.shield_diameter = v;
    }
    if let Some(v) = args.carriers {
        config.carrier_count = v;
    }
    if let Some(v) = args.wires_per_carrier {
        config.wires_per_carrier = v;
    }
    if let Some(v) = args.lay_angle {
        config.lay_angle_deg = v;
    }
    if let Some(v) = args.inner_gap {
        config.inner_gap = v;
    }
    if let Some(v) = args.mid_gap {
        config.mid_gap = v;
    }
    if let Some(v) = args.outer_gap {
        config.outer_gap = v;
    }
    if let Some(v) = args.clearance {
        config.clearance = v;
    }
    if let Some(v) = args.amplitude {
        config.amplitude = v;
    }
    if let Some(v) = args.gamma {
        config.wave_gamma = v;
    }
    if let Some(v) = args.transition {
        config.transition_fraction = v;
    }

    config.validate()?;
    Ok(config)
}

pub fn window_from_args(args: &WindowArgs) -> SampleWindow {
    SampleWindow {
        samples: args.samples,
        start_sector: args.start,
        duration_sectors: args.duration,
    }
}
