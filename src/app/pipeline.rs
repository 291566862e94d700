//! Shared generation pipeline used by the `generate` command and by tests.
//!
//! The core workflow:
//! config -> resolve -> clearance gate -> sample -> derive -> (expand) -> write
//!
//! The command handlers then only deal with presentation.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::braid::{BundleSpacing, Strand, expand_bundle};
use crate::domain::{BraidConfig, BraidPaths, ResolvedGeometry, SampleWindow};
use crate::error::AppError;
use crate::io::{GeometryManifest, write_braid_files, write_manifest, write_strand_files};

/// All computed outputs of a single generation run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub config: BraidConfig,
    pub window: SampleWindow,
    pub geometry: ResolvedGeometry,
    pub paths: BraidPaths,
    /// Present when strand expansion was requested.
    pub bundle: Option<(BundleSpacing, Vec<Strand>)>,
}

/// Execute the generation pipeline in memory.
///
/// Nothing is written here, so a clearance failure cannot leave partial output.
pub fn run_generation(config: &BraidConfig, window: &SampleWindow, expand: bool) -> Result<RunOutput, AppError> {
    let (geometry, paths) = crate::braid::generate(config, window)?;

    let bundle = expand.then(|| {
        let spacing = BundleSpacing::from_config(config);
        let count = config.wires_per_carrier as usize;
        let strands: Vec<Strand> = paths
            .iter()
            .flat_map(|centerline| expand_bundle(centerline, &spacing, count))
            .collect();
        (spacing, strands)
    });

    Ok(RunOutput {
        config: config.clone(),
        window: *window,
        geometry,
        paths,
        bundle,
    })
}

/// Write the point files (and optionally a manifest) for a finished run.
pub fn write_outputs(run: &RunOutput, out_dir: &Path, manifest: Option<&Path>) -> Result<Vec<PathBuf>, AppError> {
    let mut files = write_braid_files(out_dir, &run.paths)?;
    if let Some((_, strands)) = &run.bundle {
        files.extend(write_strand_files(out_dir, strands)?);
    }

    if let Some(path) = manifest {
        let m = GeometryManifest::new(
            &run.config,
            &run.window,
            &run.geometry,
            run.bundle.as_ref().map(|(spacing, _)| *spacing),
            files.clone(),
        );
        write_manifest(path, &m)?;
        info!(file = %path.display(), "wrote manifest");
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expansion_yields_strands_for_every_family() {
        let config = BraidConfig::default();
        let window = SampleWindow {
            samples: 10,
            ..SampleWindow::default()
        };
        let run = run_generation(&config, &window, true).unwrap();
        let (_, strands) = run.bundle.unwrap();
        assert_eq!(strands.len(), 4 * 3);
        assert!(strands.iter().all(|s| s.path.len() == 10));
    }

    #[test]
    fn failed_gate_produces_no_run() {
        let config = BraidConfig {
            amplitude: 0.0,
            ..BraidConfig::default()
        };
        let err = run_generation(&config, &SampleWindow::default(), false).unwrap_err();
        assert!(err.is_skip());
    }

    #[test]
    fn outputs_and_manifest_are_written() {
        let dir = tempfile::tempdir().unwrap();
        let window = SampleWindow {
            samples: 5,
            ..SampleWindow::default()
        };
        let run = run_generation(&BraidConfig::default(), &window, true).unwrap();
        let manifest = dir.path().join("run.json");
        let files = write_outputs(&run, dir.path(), Some(&manifest)).unwrap();
        assert_eq!(files.len(), 4 + 12);
        assert!(dir.path().join("WiresL_F.txt").exists());
        assert!(dir.path().join("WiresR_B_2.txt").exists());

        let loaded = crate::io::read_manifest(&manifest).unwrap();
        assert_eq!(loaded.files, files);
        assert!(loaded.bundle.is_some());
    }
}
