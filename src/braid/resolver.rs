//! Geometry parameter resolution.
//!
//! Turns the physical description of the braid into the constants the path
//! generator works with:
//!
//! - the two radial bands a wire weaves between
//! - sector count, sector angle and axial pitch per sector
//! - the helix chord and the circular-arc bump parameters (d, k, x0)

use std::f64::consts::PI;

use tracing::{info, warn};

use crate::domain::{BraidConfig, ResolvedGeometry};
use crate::error::AppError;

/// Bump radius used when the arc-height equation has no real solution.
pub const FALLBACK_BUMP_RADIUS: f64 = 1.0;

/// Smallest amplitude that still lifts a wire over its crossing neighbour.
pub fn clearance_minimum(config: &BraidConfig) -> f64 {
    (2.0 * config.wire_radius + config.mid_gap) / 2.0
}

/// Whether the wave is tall enough for crossing wires not to intersect.
pub fn check_validity(config: &BraidConfig) -> bool {
    check_clearance(config).is_ok()
}

/// Crossing-clearance gate, with the offending parameter on failure.
///
/// Both the bump amplitude and the wave-height knob must reach the minimum.
pub fn check_clearance(config: &BraidConfig) -> Result<(), AppError> {
    let minimum = clearance_minimum(config);
    for (parameter, value) in [("amplitude", config.amplitude), ("wave_gamma", config.wave_gamma)] {
        if value < minimum {
            return Err(AppError::ClearanceViolation {
                parameter,
                value,
                minimum,
            });
        }
    }
    Ok(())
}

/// Derive all secondary constants from a config.
///
/// This validates field ranges but not the crossing clearance; resolving a
/// config that fails the gate is allowed so it can still be inspected.
pub fn resolve(config: &BraidConfig) -> Result<ResolvedGeometry, AppError> {
    config.validate()?;

    let r_wire = config.wire_radius;
    let r_inner = config.shield_diameter / 2.0;
    let r_outer = r_inner + 4.0 * r_wire + config.outer_gap + config.mid_gap + config.inner_gap;

    let band_low = r_inner + r_wire + config.inner_gap;
    let band_high = r_inner + 3.0 * r_wire + config.inner_gap + config.mid_gap;
    let wave_height = band_high - band_low;

    let sectors = config.carrier_count / 2;
    let sector_angle_deg = 360.0 / f64::from(sectors);
    let sector_arc = PI * config.shield_diameter / f64::from(sectors);
    let sector_pitch = sector_arc / config.lay_angle_deg.to_radians().tan();

    let arc_len = band_low * sector_angle_deg.to_radians();
    let chord = arc_len.hypot(sector_pitch);
    let half_width = chord * config.transition_fraction / 4.0;

    let omega = config.amplitude;
    let term = omega * omega - (wave_height / 2.0 - omega).powi(2);
    let (bump_radius, bump_radius_fallback) = if term > 0.0 {
        ((half_width * half_width / term).sqrt(), false)
    } else {
        warn!(
            term,
            amplitude = omega,
            wave_height,
            fallback = FALLBACK_BUMP_RADIUS,
            "bump arc-height discriminant is not positive; using fallback bump radius, bump shape will be distorted"
        );
        (FALLBACK_BUMP_RADIUS, true)
    };
    let bump_offset = chord / 4.0 - half_width;

    let geometry = ResolvedGeometry {
        r_inner,
        r_outer,
        band_low,
        band_high,
        wave_height,
        sectors,
        sector_angle_deg,
        sector_arc,
        sector_pitch,
        half_angle_deg: sector_angle_deg / 2.0,
        half_pitch: sector_pitch / 2.0,
        z_origin: -sector_pitch / 2.0,
        chord,
        half_width,
        bump_radius,
        bump_radius_fallback,
        bump_offset,
        amplitude: omega,
        transition_fraction: config.transition_fraction,
    };

    info!(
        band_low,
        band_high,
        sectors,
        sector_angle_deg,
        sector_pitch,
        chord,
        bump_radius,
        "resolved braid geometry"
    );

    Ok(geometry)
}
