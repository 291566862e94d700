//! Braid geometry generation.
//!
//! Responsibilities:
//!
//! - resolve physical inputs into braid constants (`resolver`)
//! - evaluate the radial bump profile (`bump`)
//! - sample the base helix (`sampler`)
//! - derive the four carrier centerlines (`paths`)
//! - replicate centerlines into strand bundles (`bundle`)

pub mod bump;
pub mod bundle;
pub mod paths;
pub mod resolver;
pub mod sampler;

pub use bump::bump;
pub use bundle::{BundleSpacing, Strand, expand_bundle};
pub use paths::derive_paths;
pub use resolver::{check_clearance, check_validity, clearance_minimum, resolve};
pub use sampler::sample_base_path;

use crate::domain::{BraidConfig, BraidPaths, ResolvedGeometry, SampleWindow};
use crate::error::AppError;

/// Resolve, gate and generate the four centerlines in one call.
///
/// Fails with `AppError::ClearanceViolation` before sampling anything when
/// the wave cannot clear crossing wires.
pub fn generate(config: &BraidConfig, window: &SampleWindow) -> Result<(ResolvedGeometry, BraidPaths), AppError> {
    let geometry = resolve(config)?;
    check_clearance(config)?;
    let base = sample_base_path(&geometry, window)?;
    let paths = derive_paths(&geometry, &base);
    Ok((geometry, paths))
}
