//! Uniform sampling of the base helix.

use crate::braid::bump::bump;
use crate::domain::{PathSample, ResolvedGeometry, SampleWindow, SampledPath};
use crate::error::AppError;

/// Sample the base helix over `window`.
///
/// Sample `i` sits at `t = start + duration * i / (M - 1)`, so both window
/// ends are included.
pub fn sample_base_path(geometry: &ResolvedGeometry, window: &SampleWindow) -> Result<SampledPath, AppError> {
    window.validate()?;

    let last = (window.samples - 1) as f64;
    let samples = (0..window.samples)
        .map(|i| {
            let t = window.start_sector + window.duration_sectors * (i as f64 / last);
            PathSample {
                t,
                theta_deg: geometry.sector_angle_deg * t,
                z: geometry.z_origin + geometry.sector_pitch * t,
                bump: bump(geometry, t),
            }
        })
        .collect();

    Ok(SampledPath { samples })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::braid::resolve;
    use crate::domain::BraidConfig;
    use approx::assert_abs_diff_eq;

    #[test]
    fn window_endpoints_are_included() {
        let g = resolve(&BraidConfig::default()).unwrap();
        let window = SampleWindow {
            samples: 11,
            start_sector: 0.5,
            duration_sectors: 2.0,
        };
        let path = sample_base_path(&g, &window).unwrap();
        assert_eq!(path.len(), 11);
        assert_abs_diff_eq!(path.samples[0].t, 0.5);
        assert_abs_diff_eq!(path.samples[10].t, 2.5, epsilon = 1e-12);
        assert_abs_diff_eq!(path.samples[0].z, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(path.samples[10].z, 2.0 * g.sector_pitch, epsilon = 1e-12);
    }

    #[test]
    fn angle_advances_one_sector_per_unit() {
        let g = resolve(&BraidConfig::default()).unwrap();
        let window = SampleWindow {
            samples: 3,
            start_sector: 0.0,
            duration_sectors: 1.0,
        };
        let path = sample_base_path(&g, &window).unwrap();
        let angles: Vec<f64> = path.iter().map(|s| s.theta_deg).collect();
        assert_eq!(angles, vec![0.0, 22.5, 45.0]);
    }

    #[test]
    fn sampling_is_deterministic() {
        let g = resolve(&BraidConfig::default()).unwrap();
        let window = SampleWindow::default();
        assert_eq!(sample_base_path(&g, &window).unwrap(), sample_base_path(&g, &window).unwrap());
    }

    #[test]
    fn rejects_degenerate_windows() {
        let g = resolve(&BraidConfig::default()).unwrap();
        let single = SampleWindow {
            samples: 1,
            ..SampleWindow::default()
        };
        let empty = SampleWindow {
            duration_sectors: 0.0,
            ..SampleWindow::default()
        };
        assert!(sample_base_path(&g, &single).is_err());
        assert!(sample_base_path(&g, &empty).is_err());
    }
}
