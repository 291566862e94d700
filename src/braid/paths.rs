//! Four-path derivation.
//!
//! Every wire is a coordinate transform of the same base samples:
//!
//! - right back (RB): high band minus bump, no shift
//! - right front (RF): low band plus bump, shifted half a sector in angle and z
//! - left back (LB): low band plus bump, mirrored and turned back one sector
//! - left front (LF): high band minus bump, mirrored like LB, then shifted half
//!   a sector the opposite way in angle
//!
//! The per-point maps are independent, so they run through rayon; `collect`
//! keeps the sample order.

use nalgebra::Point3;
use rayon::prelude::*;
use tracing::debug;

use crate::domain::{BraidPaths, PathSample, ResolvedGeometry, SampledPath, WireFamily, WirePath};
use crate::math::{azimuth_deg, mirror_rotate, polar_point};

/// Build all four centerlines from the base path.
pub fn derive_paths(geometry: &ResolvedGeometry, base: &SampledPath) -> BraidPaths {
    let ((rb, rf), (lb, lf)) = rayon::join(
        || rayon::join(|| right_back(geometry, base), || right_front(geometry, base)),
        || rayon::join(|| left_back(geometry, base), || left_front(geometry, base)),
    );

    let paths = BraidPaths {
        right_back: rb,
        right_front: rf,
        left_back: lb,
        left_front: lf,
    };
    for path in paths.iter() {
        debug!(family = path.family.short_name(), points = path.len(), "derived wire path");
    }
    paths
}

pub fn right_back(geometry: &ResolvedGeometry, base: &SampledPath) -> WirePath {
    map_samples(WireFamily::RightBack, base, |s| {
        polar_point(geometry.band_high - s.bump, s.theta_deg, s.z)
    })
}

pub fn right_front(geometry: &ResolvedGeometry, base: &SampledPath) -> WirePath {
    map_samples(WireFamily::RightFront, base, |s| {
        polar_point(
            geometry.band_low + s.bump,
            s.theta_deg + geometry.half_angle_deg,
            s.z - geometry.half_pitch,
        )
    })
}

pub fn left_back(geometry: &ResolvedGeometry, base: &SampledPath) -> WirePath {
    map_samples(WireFamily::LeftBack, base, |s| {
        let p = polar_point(geometry.band_low + s.bump, s.theta_deg, s.z);
        mirror_rotate(&p, -geometry.sector_angle_deg)
    })
}

pub fn left_front(geometry: &ResolvedGeometry, base: &SampledPath) -> WirePath {
    map_samples(WireFamily::LeftFront, base, |s| {
        let radius = geometry.band_high - s.bump;
        let mirrored = mirror_rotate(&polar_point(radius, s.theta_deg, s.z), -geometry.sector_angle_deg);
        polar_point(
            radius,
            azimuth_deg(&mirrored) - geometry.half_angle_deg,
            s.z - geometry.half_pitch,
        )
    })
}

fn map_samples<F>(family: WireFamily, base: &SampledPath, f: F) -> WirePath
where
    F: Fn(&PathSample) -> Point3<f64> + Sync + Send,
{
    WirePath {
        family,
        points: base.samples.par_iter().map(f).collect(),
    }
}
