//! Strand bundles.
//!
//! A carrier lays several wires side by side. Each strand is the carrier
//! centerline shifted along the axis and turned about it, by a step derived
//! from the strand width and the lay angle. Strands are centred on the
//! centerline: for an odd count the middle strand is the centerline itself.

use nalgebra::{Isometry3, Translation3, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::domain::{BraidConfig, WireFamily, WirePath};

/// Per-strand offsets for one carrier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BundleSpacing {
    /// Wire diameter plus clearance.
    pub strand_width: f64,
    /// Radius the twist step is measured at (centre of the low band).
    pub base_radius: f64,
    /// Axial shift between neighbouring strands.
    pub axial_step: f64,
    /// Twist between neighbouring strands, in degrees.
    pub twist_step_deg: f64,
}

impl BundleSpacing {
    pub fn from_config(config: &BraidConfig) -> Self {
        let alpha = config.lay_angle_deg.to_radians();
        let strand_width = 2.0 * config.wire_radius + config.clearance;
        let base_radius = config.shield_diameter / 2.0 + config.wire_radius + config.inner_gap;
        let axial_step = strand_width / (2.0 * alpha.sin());
        let twist_step_deg = (strand_width / (2.0 * alpha.cos()) / base_radius).to_degrees();
        Self {
            strand_width,
            base_radius,
            axial_step,
            twist_step_deg,
        }
    }

    /// Rigid motion placing strand `index` of `count` for `family`.
    ///
    /// Right-handed carriers twist clockwise with increasing strand index,
    /// left-handed ones counter-clockwise.
    pub fn strand_transform(&self, family: WireFamily, index: usize, count: usize) -> Isometry3<f64> {
        let factor = strand_factor(index, count);
        let sign = if family.is_left_handed() { 1.0 } else { -1.0 };
        let angle = (factor * self.twist_step_deg * sign).to_radians();
        Isometry3::from_parts(
            Translation3::new(0.0, 0.0, factor * self.axial_step),
            UnitQuaternion::from_axis_angle(&Vector3::z_axis(), angle),
        )
    }
}

/// Offset of strand `index` from the bundle centre, in strand steps.
pub fn strand_factor(index: usize, count: usize) -> f64 {
    index as f64 - (count as f64 - 1.0) / 2.0
}

/// One replicated wire of a carrier bundle.
#[derive(Debug, Clone, PartialEq)]
pub struct Strand {
    pub index: usize,
    pub factor: f64,
    pub path: WirePath,
}

impl Strand {
    pub fn is_centerline(&self) -> bool {
        self.factor.abs() < 1e-9
    }

    /// File stem for this strand, e.g. `WiresR_B_2`.
    pub fn file_stem(&self) -> String {
        format!("{}_{}", self.path.family.file_stem(), self.index)
    }
}

/// Replicate `centerline` into `count` strands.
pub fn expand_bundle(centerline: &WirePath, spacing: &BundleSpacing, count: usize) -> Vec<Strand> {
    (0..count)
        .map(|index| {
            let factor = strand_factor(index, count);
            let points = if factor.abs() < 1e-9 {
                centerline.points.clone()
            } else {
                let motion = spacing.strand_transform(centerline.family, index, count);
                centerline.points.iter().map(|p| motion * p).collect()
            };
            Strand {
                index,
                factor,
                path: WirePath {
                    family: centerline.family,
                    points,
                },
            }
        })
        .collect()
}
