//! Input/output helpers.
//!
//! - text point files for the downstream importer (`points`)
//! - run manifest and config JSON (`manifest`)

pub mod manifest;
pub mod points;

pub use manifest::*;
pub use points::*;
