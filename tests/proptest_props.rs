//! Property-based tests for braid geometry invariants using the `proptest` crate.

use proptest::prelude::*;

use braid_paths::braid::{BundleSpacing, bump, derive_paths, expand_bundle, resolve, sample_base_path};
use braid_paths::domain::{BraidConfig, ResolvedGeometry, SampleWindow};
use braid_paths::math::radial_distance;

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// Configs around the nominal cable that pass the clearance gate.
fn arb_config() -> impl Strategy<Value = BraidConfig> {
    (
        0.02f64..0.1,
        1.0f64..4.0,
        1u32..=16,
        10.0f64..60.0,
        0.0f64..0.06,
        0.05f64..1.0,
    )
        .prop_map(|(wire_radius, shield_diameter, half_carriers, lay_angle_deg, mid_gap, transition_fraction)| {
            let minimum = (2.0 * wire_radius + mid_gap) / 2.0;
            BraidConfig {
                wire_radius,
                shield_diameter,
                carrier_count: half_carriers * 2,
                lay_angle_deg,
                mid_gap,
                amplitude: minimum * 1.5,
                transition_fraction,
                ..BraidConfig::default()
            }
        })
}

fn geometry(config: &BraidConfig) -> ResolvedGeometry {
    resolve(config).expect("strategy only yields well-formed configs")
}

const TOL: f64 = 1e-6;

proptest! {
    #[test]
    fn bump_is_periodic(config in arb_config(), t in -20.0f64..20.0) {
        let g = geometry(&config);
        let a = bump(&g, t);
        let b = bump(&g, t + 1.0);
        prop_assert!((a - b).abs() < TOL, "bump({t})={a} != bump({})={b}", t + 1.0);
    }
}

proptest! {
    #[test]
    fn bump_stays_within_wave_height(config in arb_config(), t in -5.0f64..5.0) {
        let g = geometry(&config);
        let b = bump(&g, t);
        prop_assert!(b >= -TOL && b <= g.wave_height + TOL, "bump {b} outside [0, {}]", g.wave_height);
    }
}

proptest! {
    #[test]
    fn bump_meets_itself_at_the_crossing(config in arb_config(), sector in -3i32..3) {
        let g = geometry(&config);
        let t = sector as f64 + 0.25;
        let below = bump(&g, t - 1e-9);
        let at = bump(&g, t);
        prop_assert!((below - at).abs() < TOL, "jump at crossing: {below} vs {at}");
    }
}

proptest! {
    #[test]
    fn all_paths_stay_between_bands(
        config in arb_config(),
        start in -2.0f64..2.0,
        duration in 0.1f64..3.0,
        samples in 2usize..200,
    ) {
        let g = geometry(&config);
        let window = SampleWindow { samples, start_sector: start, duration_sectors: duration };
        let base = sample_base_path(&g, &window).unwrap();
        let paths = derive_paths(&g, &base);
        for path in paths.iter() {
            prop_assert_eq!(path.len(), samples);
            for p in &path.points {
                let r = radial_distance(p);
                prop_assert!(r >= g.band_low - TOL && r <= g.band_high + TOL,
                    "{} radius {} outside [{}, {}]", path.family.short_name(), r, g.band_low, g.band_high);
            }
        }
    }
}

proptest! {
    #[test]
    fn left_back_keeps_right_back_heights(config in arb_config(), samples in 2usize..100) {
        let g = geometry(&config);
        let window = SampleWindow { samples, ..SampleWindow::default() };
        let paths = derive_paths(&g, &sample_base_path(&g, &window).unwrap());
        for (rb, lb) in paths.right_back.points.iter().zip(&paths.left_back.points) {
            prop_assert!((rb.z - lb.z).abs() < TOL);
        }
    }
}

proptest! {
    #[test]
    fn strands_preserve_radius(config in arb_config(), count in 1usize..6) {
        let g = geometry(&config);
        let window = SampleWindow { samples: 20, ..SampleWindow::default() };
        let paths = derive_paths(&g, &sample_base_path(&g, &window).unwrap());
        let spacing = BundleSpacing::from_config(&config);
        let strands = expand_bundle(&paths.left_front, &spacing, count);
        prop_assert_eq!(strands.len(), count);
        for strand in &strands {
            for (c, p) in paths.left_front.points.iter().zip(&strand.path.points) {
                prop_assert!((radial_distance(c) - radial_distance(p)).abs() < TOL);
            }
        }
    }
}
