//! Read/write run manifest JSON files.
//!
//! A manifest records everything needed to reproduce a set of point files:
//! - the input configuration and sampling window
//! - the resolved constants (including whether the bump fallback kicked in)
//! - the files that were written
//!
//! The schema is defined by `GeometryManifest`.

use std::fs::File;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::braid::BundleSpacing;
use crate::domain::{BraidConfig, ResolvedGeometry, SampleWindow};
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryManifest {
    pub tool: String,
    pub generated_at: DateTime<Utc>,
    pub config: BraidConfig,
    pub window: SampleWindow,
    pub geometry: ResolvedGeometry,
    /// Present when strand bundles were written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle: Option<BundleSpacing>,
    pub files: Vec<PathBuf>,
}

impl GeometryManifest {
    pub fn new(
        config: &BraidConfig,
        window: &SampleWindow,
        geometry: &ResolvedGeometry,
        bundle: Option<BundleSpacing>,
        files: Vec<PathBuf>,
    ) -> Self {
        Self {
            tool: "braid".to_string(),
            generated_at: Utc::now(),
            config: config.clone(),
            window: *window,
            geometry: geometry.clone(),
            bundle,
            files,
        }
    }
}

/// Write a manifest JSON file.
pub fn write_manifest(path: &Path, manifest: &GeometryManifest) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::io(format!("Failed to create manifest '{}': {e}", path.display())))?;
    serde_json::to_writer_pretty(file, manifest)
        .map_err(|e| AppError::Serialization(format!("Failed to write manifest JSON: {e}")))?;
    Ok(())
}

/// Read a manifest JSON file.
pub fn read_manifest(path: &Path) -> Result<GeometryManifest, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::io(format!("Failed to open manifest '{}': {e}", path.display())))?;
    serde_json::from_reader(file).map_err(|e| AppError::Serialization(format!("Invalid manifest JSON: {e}")))
}

/// Read a `BraidConfig` JSON file. Missing fields take nominal values.
pub fn read_config(path: &Path) -> Result<BraidConfig, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::io(format!("Failed to open config '{}': {e}", path.display())))?;
    serde_json::from_reader(file).map_err(|e| AppError::Serialization(format!("Invalid config JSON: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::braid::resolve;

    #[test]
    fn manifest_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let config = BraidConfig::default();
        let geometry = resolve(&config).unwrap();
        let manifest = GeometryManifest::new(
            &config,
            &SampleWindow::default(),
            &geometry,
            Some(BundleSpacing::from_config(&config)),
            vec![PathBuf::from("WiresR_B.txt")],
        );
        let target = dir.path().join("manifest.json");
        write_manifest(&target, &manifest).unwrap();

        let loaded = read_manifest(&target).unwrap();
        assert_eq!(loaded.tool, "braid");
        assert_eq!(loaded.config, config);
        assert_eq!(loaded.files, manifest.files);
        assert_eq!(loaded.geometry.sectors, 8);
    }

    #[test]
    fn config_file_overrides_only_given_fields() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("braid.json");
        std::fs::write(&target, r#"{ "wire_radius": 0.04, "lay_angle_deg": 30.0 }"#).unwrap();
        let config = read_config(&target).unwrap();
        assert_eq!(config.wire_radius, 0.04);
        assert_eq!(config.lay_angle_deg, 30.0);
        assert_eq!(config.carrier_count, 16);
    }

    #[test]
    fn malformed_config_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("braid.json");
        std::fs::write(&target, "{ not json").unwrap();
        assert!(matches!(read_config(&target), Err(AppError::Serialization(_))));
    }
}
