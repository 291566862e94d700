//! Shared domain types.
//!
//! These types are plain immutable data. The configuration and the resolved
//! geometry are serializable so a run can be recorded in a JSON manifest and
//! reloaded later.

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Physical description of one braided shield.
///
/// Lengths are in millimetres, angles in degrees. Missing fields in a JSON
/// file fall back to the nominal cable below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BraidConfig {
    pub wire_radius: f64,
    pub shield_diameter: f64,
    /// Total carriers in the braid. Half of them run in each helix direction.
    pub carrier_count: u32,
    pub wires_per_carrier: u32,
    /// Lay angle between a wire helix and the cable axis.
    pub lay_angle_deg: f64,
    pub inner_gap: f64,
    pub mid_gap: f64,
    pub outer_gap: f64,
    /// Spacing added between neighbouring strands of one carrier.
    pub clearance: f64,
    /// Radius scale of the circular arcs forming the bump.
    pub amplitude: f64,
    /// Wave-height knob. Only used by the clearance gate.
    pub wave_gamma: f64,
    /// Width of the crossing transition, as a fraction of the helix chord.
    pub transition_fraction: f64,
}

impl Default for BraidConfig {
    fn default() -> Self {
        Self {
            wire_radius: 0.05,
            shield_diameter: 1.46,
            carrier_count: 16,
            wires_per_carrier: 3,
            lay_angle_deg: 21.44,
            inner_gap: 0.02,
            mid_gap: 0.0455,
            outer_gap: 0.02,
            clearance: 0.02,
            amplitude: 0.2,
            wave_gamma: 1.0,
            transition_fraction: 0.2,
        }
    }
}

impl BraidConfig {
    /// Check field-level invariants.
    ///
    /// The crossing clearance is a separate gate (`braid::check_validity`)
    /// because a config can be well-formed and still produce colliding wires.
    pub fn validate(&self) -> Result<(), AppError> {
        positive("wire_radius", self.wire_radius)?;
        positive("shield_diameter", self.shield_diameter)?;
        non_negative("inner_gap", self.inner_gap)?;
        non_negative("mid_gap", self.mid_gap)?;
        non_negative("outer_gap", self.outer_gap)?;
        non_negative("clearance", self.clearance)?;
        non_negative("amplitude", self.amplitude)?;
        non_negative("wave_gamma", self.wave_gamma)?;

        if self.carrier_count < 2 || self.carrier_count % 2 != 0 {
            return Err(AppError::invalid(format!(
                "carrier_count must be even and >= 2, got {}",
                self.carrier_count
            )));
        }
        if self.wires_per_carrier == 0 {
            return Err(AppError::invalid("wires_per_carrier must be >= 1"));
        }
        if !(self.lay_angle_deg.is_finite() && self.lay_angle_deg > 0.0 && self.lay_angle_deg < 90.0) {
            return Err(AppError::invalid(format!(
                "lay_angle_deg must lie strictly between 0 and 90, got {}",
                self.lay_angle_deg
            )));
        }
        if !(self.transition_fraction.is_finite()
            && self.transition_fraction > 0.0
            && self.transition_fraction <= 1.0)
        {
            return Err(AppError::invalid(format!(
                "transition_fraction must lie in (0, 1], got {}",
                self.transition_fraction
            )));
        }
        Ok(())
    }
}

fn positive(name: &str, value: f64) -> Result<(), AppError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AppError::invalid(format!("{name} must be finite and > 0, got {value}")))
    }
}

fn non_negative(name: &str, value: f64) -> Result<(), AppError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(AppError::invalid(format!("{name} must be finite and >= 0, got {value}")))
    }
}

/// Constants derived once from a `BraidConfig`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedGeometry {
    /// Shield radius (D/2).
    pub r_inner: f64,
    /// Outer radius of the single-sector profile.
    pub r_outer: f64,
    pub band_low: f64,
    pub band_high: f64,
    /// `band_high - band_low`.
    pub wave_height: f64,

    /// Sector count K (carriers / 2).
    pub sectors: u32,
    pub sector_angle_deg: f64,
    pub sector_arc: f64,
    pub sector_pitch: f64,
    pub half_angle_deg: f64,
    pub half_pitch: f64,
    /// Axial position of t = 0.
    pub z_origin: f64,

    /// Helix chord length L over one sector.
    pub chord: f64,
    /// Bump half-width d.
    pub half_width: f64,
    /// Bump circle radius k.
    pub bump_radius: f64,
    /// Set when the arc-height discriminant was non-positive and `bump_radius`
    /// holds the fallback value instead of a solved one.
    pub bump_radius_fallback: bool,
    /// Bump horizontal offset x0.
    pub bump_offset: f64,

    pub amplitude: f64,
    pub transition_fraction: f64,
}

/// Uniform sampling window over the global braid parameter `t` (in sectors).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleWindow {
    pub samples: usize,
    pub start_sector: f64,
    pub duration_sectors: f64,
}

impl Default for SampleWindow {
    /// Starts half a sector in so the back-right wire begins at z = 0.
    fn default() -> Self {
        Self {
            samples: 2000,
            start_sector: 0.5,
            duration_sectors: 2.0,
        }
    }
}

impl SampleWindow {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.samples < 2 {
            return Err(AppError::invalid(format!(
                "sample count must be >= 2, got {}",
                self.samples
            )));
        }
        if !self.start_sector.is_finite() {
            return Err(AppError::invalid("start offset must be finite"));
        }
        if !(self.duration_sectors.is_finite() && self.duration_sectors > 0.0) {
            return Err(AppError::invalid(format!(
                "duration must be finite and > 0, got {}",
                self.duration_sectors
            )));
        }
        Ok(())
    }
}

/// One sample of the base helix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSample {
    /// Global progress in sectors.
    pub t: f64,
    pub theta_deg: f64,
    pub z: f64,
    pub bump: f64,
}

/// The base path every wire is derived from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SampledPath {
    pub samples: Vec<PathSample>,
}

impl SampledPath {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathSample> {
        self.samples.iter()
    }
}

/// Which of the four carrier centerlines a path belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WireFamily {
    RightBack,
    RightFront,
    LeftBack,
    LeftFront,
}

impl WireFamily {
    pub const ALL: [WireFamily; 4] = [
        WireFamily::RightBack,
        WireFamily::RightFront,
        WireFamily::LeftBack,
        WireFamily::LeftFront,
    ];

    /// File stem expected by the downstream importer.
    pub fn file_stem(self) -> &'static str {
        match self {
            WireFamily::RightBack => "WiresR_B",
            WireFamily::RightFront => "WiresR_F",
            WireFamily::LeftBack => "WiresL_B",
            WireFamily::LeftFront => "WiresL_F",
        }
    }

    pub fn short_name(self) -> &'static str {
        match self {
            WireFamily::RightBack => "RB",
            WireFamily::RightFront => "RF",
            WireFamily::LeftBack => "LB",
            WireFamily::LeftFront => "LF",
        }
    }

    pub fn is_left_handed(self) -> bool {
        matches!(self, WireFamily::LeftBack | WireFamily::LeftFront)
    }
}

/// One wire centerline as Cartesian points.
#[derive(Debug, Clone, PartialEq)]
pub struct WirePath {
    pub family: WireFamily,
    pub points: Vec<Point3<f64>>,
}

impl WirePath {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// The four carrier centerlines of one braid.
#[derive(Debug, Clone, PartialEq)]
pub struct BraidPaths {
    pub right_back: WirePath,
    pub right_front: WirePath,
    pub left_back: WirePath,
    pub left_front: WirePath,
}

impl BraidPaths {
    /// Paths in RB, RF, LB, LF order.
    pub fn iter(&self) -> impl Iterator<Item = &WirePath> {
        [&self.right_back, &self.right_front, &self.left_back, &self.left_front].into_iter()
    }

    pub fn get(&self, family: WireFamily) -> &WirePath {
        match family {
            WireFamily::RightBack => &self.right_back,
            WireFamily::RightFront => &self.right_front,
            WireFamily::LeftBack => &self.left_back,
            WireFamily::LeftFront => &self.left_front,
        }
    }
}
