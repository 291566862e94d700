//! Reporting utilities: path statistics and formatted terminal output.

pub mod format;

pub use format::*;

use nalgebra::Point3;

use crate::math::radial_distance;

/// Extent of a point sequence in cylindrical coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathStats {
    pub n_points: usize,
    pub radius_min: f64,
    pub radius_max: f64,
    pub z_min: f64,
    pub z_max: f64,
}

/// Compute radial and axial extents. Returns `None` for an empty sequence.
pub fn path_stats(points: &[Point3<f64>]) -> Option<PathStats> {
    if points.is_empty() {
        return None;
    }
    let mut stats = PathStats {
        n_points: points.len(),
        radius_min: f64::INFINITY,
        radius_max: f64::NEG_INFINITY,
        z_min: f64::INFINITY,
        z_max: f64::NEG_INFINITY,
    };
    for p in points {
        let r = radial_distance(p);
        stats.radius_min = stats.radius_min.min(r);
        stats.radius_max = stats.radius_max.max(r);
        stats.z_min = stats.z_min.min(p.z);
        stats.z_max = stats.z_max.max(p.z);
    }
    Some(stats)
}
