//! `braid-paths` library crate.
//!
//! Computes the centerlines of a helically braided cable shield and writes
//! them as point files for a CAD importer.
//!
//! The binary (`braid`) is a thin wrapper around this library so that:
//!
//! - core geometry is testable without spawning processes
//! - the generator can be driven from other tools directly
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod braid;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod plot;
pub mod report;
