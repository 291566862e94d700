//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the physical input (`BraidConfig`) and its derived constants (`ResolvedGeometry`)
//! - the sampling window and the sampled base path (`SampleWindow`, `SampledPath`)
//! - generated centerlines (`WireFamily`, `WirePath`, `BraidPaths`)

pub mod types;

pub use types::*;
