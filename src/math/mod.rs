//! Mathematical utilities: cylindrical coordinates and axis transforms.

pub mod polar;

pub use polar::*;
