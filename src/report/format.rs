//! Formatted terminal output.
//!
//! We keep formatting code in one place so the geometry code stays free of
//! presentation concerns and output changes stay localized.

use std::path::Path;

use crate::braid::{BundleSpacing, clearance_minimum};
use crate::domain::{BraidConfig, BraidPaths, ResolvedGeometry, SampleWindow};
use crate::io::PointFile;
use crate::report::{PathStats, path_stats};

/// Summary of the resolved constants and the clearance verdict.
pub fn format_geometry_summary(config: &BraidConfig, geometry: &ResolvedGeometry, valid: bool) -> String {
    let mut out = String::new();

    out.push_str("=== braid - shield braid geometry ===\n");
    out.push_str(&format!(
        "Cable: D={:.4} r_wire={:.4} carriers={} wires/carrier={} lay={:.2}deg\n",
        config.shield_diameter,
        config.wire_radius,
        config.carrier_count,
        config.wires_per_carrier,
        config.lay_angle_deg
    ));
    out.push_str(&format!(
        "Gaps: inner={:.4} mid={:.4} outer={:.4} clearance={:.4}\n",
        config.inner_gap, config.mid_gap, config.outer_gap, config.clearance
    ));

    out.push_str("\nResolved:\n");
    out.push_str(&format!(
        "- radii : inner={:.6} band=[{:.6}, {:.6}] outer={:.6} h={:.6}\n",
        geometry.r_inner, geometry.band_low, geometry.band_high, geometry.r_outer, geometry.wave_height
    ));
    out.push_str(&format!(
        "- sector: K={} angle={:.4}deg arc={:.6} pitch={:.6}\n",
        geometry.sectors, geometry.sector_angle_deg, geometry.sector_arc, geometry.sector_pitch
    ));
    out.push_str(&format!(
        "- bump  : L={:.6} d={:.6} k={:.6}{} x0={:.6}\n",
        geometry.chord,
        geometry.half_width,
        geometry.bump_radius,
        if geometry.bump_radius_fallback { " (fallback)" } else { "" },
        geometry.bump_offset
    ));

    let spacing = BundleSpacing::from_config(config);
    out.push_str(&format!(
        "- bundle: width={:.6} axial_step={:.6} twist_step={:.4}deg\n",
        spacing.strand_width, spacing.axial_step, spacing.twist_step_deg
    ));

    out.push_str(&format!(
        "\nClearance: amplitude={:.4} gamma={:.4} minimum={:.4} -> {}\n",
        config.amplitude,
        config.wave_gamma,
        clearance_minimum(config),
        if valid { "ok" } else { "FAILED (generation would be skipped)" }
    ));

    out
}

/// Summary printed after a generation run.
pub fn format_generation_summary(geometry: &ResolvedGeometry, window: &SampleWindow, paths: &BraidPaths) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Window: start={} sectors, duration={} sectors, samples={}\n",
        window.start_sector, window.duration_sectors, window.samples
    ));
    let z0 = geometry.z_origin + geometry.sector_pitch * window.start_sector;
    let z1 = z0 + geometry.sector_pitch * window.duration_sectors;
    out.push_str(&format!("Expected RB z range: {z0:.2} mm -> {z1:.2} mm\n"));
    out.push_str(&format_table(
        paths
            .iter()
            .map(|p| (p.family.file_stem().to_string(), path_stats(&p.points))),
    ));
    out
}

/// Summary of point files read back from disk.
pub fn format_point_files<'a>(files: impl IntoIterator<Item = (&'a Path, &'a PointFile)>) -> String {
    let mut rows = Vec::new();
    let mut skipped = Vec::new();
    for (path, file) in files {
        let name = path.display().to_string();
        if !file.skipped_lines.is_empty() {
            skipped.push(format!("  {name}: skipped {} malformed line(s)\n", file.skipped_lines.len()));
        }
        rows.push((name, path_stats(&file.points)));
    }

    let mut out = format_table(rows);
    for line in skipped {
        out.push_str(&line);
    }
    out
}

fn format_table(rows: impl IntoIterator<Item = (String, Option<PathStats>)>) -> String {
    let mut out = String::new();
    out.push_str(
        format!(
            "{:<24} {:>8} {:>10} {:>10} {:>10} {:>10}\n",
            "path", "points", "r_min", "r_max", "z_min", "z_max"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(format!("{:-<24} {:-<8} {:-<10} {:-<10} {:-<10} {:-<10}\n", "", "", "", "", "", "").trim_end());
    out.push('\n');

    for (name, stats) in rows {
        match stats {
            Some(s) => out.push_str(&format!(
                "{:<24} {:>8} {:>10.6} {:>10.6} {:>10.6} {:>10.6}\n",
                truncate(&name, 24),
                s.n_points,
                s.radius_min,
                s.radius_max,
                s.z_min,
                s.z_max
            )),
            None => out.push_str(&format!("{:<24} {:>8}\n", truncate(&name, 24), 0)),
        }
    }
    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    // Keep the tail: for file paths the file name is the useful part.
    let tail: String = s.chars().rev().take(max - 1).collect::<Vec<_>>().into_iter().rev().collect();
    format!("…{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::braid::resolve;
    use nalgebra::Point3;

    #[test]
    fn summary_flags_fallback_and_failed_gate() {
        let config = BraidConfig {
            amplitude: 0.0,
            ..BraidConfig::default()
        };
        let geometry = resolve(&config).unwrap();
        let txt = format_geometry_summary(&config, &geometry, false);
        assert!(txt.contains("(fallback)"));
        assert!(txt.contains("FAILED"));
    }

    #[test]
    fn summary_for_nominal_config() {
        let config = BraidConfig::default();
        let geometry = resolve(&config).unwrap();
        let txt = format_geometry_summary(&config, &geometry, true);
        assert!(txt.contains("K=8"));
        assert!(txt.contains("-> ok"));
        assert!(!txt.contains("(fallback)"));
    }

    #[test]
    fn point_table_lists_skips() {
        let file = PointFile {
            points: vec![Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 2.0, 3.0)],
            skipped_lines: vec![4],
        };
        let path = Path::new("WiresR_B.txt");
        let txt = format_point_files([(path, &file)]);
        let expected = concat!(
            "path                       points      r_min      r_max      z_min      z_max\n",
            "------------------------ -------- ---------- ---------- ---------- ----------\n",
            "WiresR_B.txt                    2   1.000000   2.000000   0.000000   3.000000\n",
            "  WiresR_B.txt: skipped 1 malformed line(s)\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn truncate_keeps_the_file_name() {
        assert_eq!(truncate("abcdef", 4), "…def");
        assert_eq!(truncate("abc", 4), "abc");
    }
}
