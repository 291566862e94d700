//! Text point files.
//!
//! One point per line, three space-separated decimals with six fractional
//! digits, lines joined by `\n` with no trailing newline:
//!
//! ```text
//! 0.800000 0.000000 0.000000
//! 0.799936 0.010053 0.006508
//! ```
//!
//! This layout is what the downstream spline importer reads, so the writer
//! must not change it. The reader is lenient: lines without three numeric
//! fields are skipped and counted.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use nalgebra::Point3;
use tracing::{info, warn};

use crate::braid::Strand;
use crate::domain::{BraidPaths, WirePath};
use crate::error::AppError;

/// Points read back from a file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointFile {
    pub points: Vec<Point3<f64>>,
    /// Line numbers (1-based) that were not valid point records.
    pub skipped_lines: Vec<usize>,
}

/// Format one point record.
pub fn format_point(p: &Point3<f64>) -> String {
    format!("{:.6} {:.6} {:.6}", p.x, p.y, p.z)
}

/// Format a whole path as point-file text.
pub fn format_points(points: &[Point3<f64>]) -> String {
    points.iter().map(format_point).collect::<Vec<_>>().join("\n")
}

/// Write `points` to `path`.
pub fn write_point_file(path: &Path, points: &[Point3<f64>]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::io(format!("Failed to create point file '{}': {e}", path.display())))?;
    let mut writer = BufWriter::new(file);
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            writer
                .write_all(b"\n")
                .map_err(|e| AppError::io(format!("Failed to write point file '{}': {e}", path.display())))?;
        }
        writer
            .write_all(format_point(p).as_bytes())
            .map_err(|e| AppError::io(format!("Failed to write point file '{}': {e}", path.display())))?;
    }
    writer
        .flush()
        .map_err(|e| AppError::io(format!("Failed to flush point file '{}': {e}", path.display())))?;
    Ok(())
}

/// Write the four centerlines into `dir` as `WiresR_B.txt`, `WiresR_F.txt`,
/// `WiresL_B.txt` and `WiresL_F.txt`.
pub fn write_braid_files(dir: &Path, paths: &BraidPaths) -> Result<Vec<PathBuf>, AppError> {
    ensure_dir(dir)?;
    paths
        .iter()
        .map(|path| write_named(dir, path.family.file_stem(), path))
        .collect()
}

/// Write every strand of every bundle into `dir` as `<stem>_<index>.txt`.
pub fn write_strand_files(dir: &Path, strands: &[Strand]) -> Result<Vec<PathBuf>, AppError> {
    ensure_dir(dir)?;
    strands
        .iter()
        .map(|strand| write_named(dir, &strand.file_stem(), &strand.path))
        .collect()
}

fn write_named(dir: &Path, stem: &str, path: &WirePath) -> Result<PathBuf, AppError> {
    let target = dir.join(format!("{stem}.txt"));
    write_point_file(&target, &path.points)?;
    info!(file = %target.display(), points = path.len(), "wrote point file");
    Ok(target)
}

fn ensure_dir(dir: &Path) -> Result<(), AppError> {
    fs::create_dir_all(dir)
        .map_err(|e| AppError::io(format!("Failed to create output directory '{}': {e}", dir.display())))
}

/// Parse point-file text.
pub fn parse_points(text: &str) -> PointFile {
    let mut out = PointFile::default();
    for (idx, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match parse_record(trimmed) {
            Some(p) => out.points.push(p),
            None => out.skipped_lines.push(idx + 1),
        }
    }
    out
}

fn parse_record(line: &str) -> Option<Point3<f64>> {
    let mut fields = line.split_whitespace().map(|f| f.parse::<f64>().ok());
    let x = fields.next()??;
    let y = fields.next()??;
    let z = fields.next()??;
    Some(Point3::new(x, y, z))
}

/// Read a point file, skipping malformed records.
pub fn read_point_file(path: &Path) -> Result<PointFile, AppError> {
    let text = fs::read_to_string(path)
        .map_err(|e| AppError::io(format!("Failed to read point file '{}': {e}", path.display())))?;
    let parsed = parse_points(&text);
    if !parsed.skipped_lines.is_empty() {
        warn!(
            file = %path.display(),
            skipped = parsed.skipped_lines.len(),
            first_line = parsed.skipped_lines[0],
            "skipped malformed point records"
        );
    }
    Ok(parsed)
}
