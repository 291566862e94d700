//! Radial bump (wave) profile.
//!
//! Over one sector a wire sits flat on one band, climbs through two
//! circular arcs around the crossing at a quarter sector, and then sits flat
//! on the other band. Progress past mid-sector is mirrored, so the second
//! half of the sector walks the same profile back down.
//!
//! ```text
//!   h |              .------------.
//!     |            /                \
//!     |           |                  |
//!   0 |__________/                    \__________
//!     0        0.25        0.5       0.75        1   (t within sector)
//! ```

use crate::domain::ResolvedGeometry;

/// Which piece of the profile a mirrored progress value falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpRegion {
    /// Flat at zero, away from the crossing.
    Flat,
    /// Lower arc, climbing towards the crossing.
    Rising,
    /// Upper arc, leaving the crossing.
    Falling,
    /// Flat at the full wave height.
    Top,
}

/// Mirrored progress within a sector, in [0, 0.5].
pub fn mirrored_progress(t: f64) -> f64 {
    let local = t - t.floor();
    if local <= 0.5 { local } else { 1.0 - local }
}

/// Region of the profile for mirrored progress `p`.
pub fn region(geometry: &ResolvedGeometry, p: f64) -> BumpRegion {
    let quarter = 0.25;
    let spread = geometry.transition_fraction / 4.0;
    if p < quarter - spread {
        BumpRegion::Flat
    } else if p < quarter {
        BumpRegion::Rising
    } else if p < quarter + spread {
        BumpRegion::Falling
    } else {
        BumpRegion::Top
    }
}

/// Radial bump at global progress `t` (in sectors). Periodic with period 1.
///
/// The radicands are clamped at zero: rounding can push them slightly
/// negative at the arc ends, and the arc height saturates there.
pub fn bump(geometry: &ResolvedGeometry, t: f64) -> f64 {
    let p = mirrored_progress(t);
    let xx = p * geometry.chord;
    let omega = geometry.amplitude;
    let k2 = geometry.bump_radius * geometry.bump_radius;

    match region(geometry, p) {
        BumpRegion::Flat => 0.0,
        BumpRegion::Rising => {
            let dx = xx - geometry.bump_offset;
            omega - (omega * omega - dx * dx / k2).max(0.0).sqrt()
        }
        BumpRegion::Falling => {
            let dx = xx - geometry.bump_offset - 2.0 * geometry.half_width;
            geometry.wave_height - omega + (omega * omega - dx * dx / k2).max(0.0).sqrt()
        }
        BumpRegion::Top => geometry.wave_height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::braid::resolve;
    use crate::domain::BraidConfig;
    use approx::assert_abs_diff_eq;

    fn nominal() -> ResolvedGeometry {
        resolve(&BraidConfig::default()).unwrap()
    }

    #[test]
    fn flat_and_top_regions() {
        let g = nominal();
        assert_eq!(bump(&g, 0.0), 0.0);
        assert_eq!(bump(&g, 0.1), 0.0);
        assert_eq!(bump(&g, 0.5), g.wave_height);
        assert_eq!(bump(&g, 0.4), g.wave_height);
        assert_eq!(bump(&g, 0.95), 0.0);
    }

    #[test]
    fn continuous_at_the_crossing() {
        let g = nominal();
        let eps = 1e-9;
        let below = bump(&g, 0.25 - eps);
        let above = bump(&g, 0.25);
        assert_abs_diff_eq!(below, above, epsilon = 1e-6);
        assert_abs_diff_eq!(above, g.wave_height / 2.0, epsilon = 1e-6);
    }

    #[test]
    fn continuous_at_transition_edges() {
        let g = nominal();
        let spread = g.transition_fraction / 4.0;
        let eps = 1e-9;
        let start = 0.25 - spread;
        let end = 0.25 + spread;
        assert_abs_diff_eq!(bump(&g, start - eps), bump(&g, start), epsilon = 1e-6);
        assert_abs_diff_eq!(bump(&g, end - eps), bump(&g, end), epsilon = 1e-6);
    }

    #[test]
    fn periodic_in_whole_sectors() {
        let g = nominal();
        for i in 0..200 {
            let t = -3.0 + i as f64 * 0.0371;
            assert_abs_diff_eq!(bump(&g, t), bump(&g, t + 1.0), epsilon = 1e-9);
        }
    }

    #[test]
    fn mirrored_about_mid_sector() {
        let g = nominal();
        for &p in &[0.05, 0.21, 0.24, 0.26, 0.29, 0.4] {
            assert_abs_diff_eq!(bump(&g, p), bump(&g, 1.0 - p), epsilon = 1e-9);
        }
    }

    #[test]
    fn stays_within_wave_height() {
        let g = nominal();
        for i in 0..=1000 {
            let b = bump(&g, i as f64 / 1000.0);
            assert!((0.0..=g.wave_height + 1e-12).contains(&b), "bump {b} out of range");
        }
    }

    #[test]
    fn region_boundaries() {
        let g = nominal();
        assert_eq!(region(&g, 0.0), BumpRegion::Flat);
        assert_eq!(region(&g, 0.22), BumpRegion::Rising);
        assert_eq!(region(&g, 0.25), BumpRegion::Falling);
        assert_eq!(region(&g, 0.27), BumpRegion::Falling);
        assert_eq!(region(&g, 0.35), BumpRegion::Top);
    }
}
