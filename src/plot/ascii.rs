//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks of the bump profile in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - wire radius along the axis: `-` line
//! - band radii: `.` guide rows

use crate::braid::sample_base_path;
use crate::domain::{ResolvedGeometry, SampleWindow};
use crate::error::AppError;

/// Widest plot, in columns.
pub const MAX_WIDTH: usize = 1000;
/// Tallest plot, in rows.
pub const MAX_HEIGHT: usize = 200;

/// Plot the back-right wire radius against z over `window`.
pub fn render_bump_profile(
    geometry: &ResolvedGeometry,
    window: &SampleWindow,
    width: usize,
    height: usize,
) -> Result<String, AppError> {
    let width = width.clamp(10, MAX_WIDTH);
    let plot_window = SampleWindow {
        // A few samples per column is enough to catch the arc shoulders.
        samples: width * 4,
        ..*window
    };
    let base = sample_base_path(geometry, &plot_window)?;
    let series: Vec<(f64, f64)> = base.iter().map(|s| (s.z, geometry.band_high - s.bump)).collect();

    let header = format!(
        "Profile: z=[{:.3}, {:.3}] mm | r=[{:.4}, {:.4}] mm",
        series.first().map(|p| p.0).unwrap_or(0.0),
        series.last().map(|p| p.0).unwrap_or(0.0),
        geometry.band_low,
        geometry.band_high
    );
    Ok(render_series(
        &series,
        &[geometry.band_low, geometry.band_high],
        width,
        height,
        &header,
    ))
}

/// Render `(x, y)` points as a line, with optional horizontal guides.
pub fn render_series(series: &[(f64, f64)], guides: &[f64], width: usize, height: usize, header: &str) -> String {
    let width = width.clamp(10, MAX_WIDTH);
    let height = height.clamp(5, MAX_HEIGHT);

    let (x_min, x_max) = range(series.iter().map(|p| p.0)).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = range(series.iter().map(|p| p.1).chain(guides.iter().copied())).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    // Draw guides first so the curve overlays them.
    for &g in guides {
        let row = map_y(g, y_min, y_max, height);
        for cell in grid[row].iter_mut() {
            *cell = '.';
        }
    }

    let mut prev = None;
    for &(x, y) in series {
        let col = map_x(x, x_min, x_max, width);
        let row = map_y(y, y_min, y_max, height);
        match prev {
            Some((c0, r0)) => draw_line(&mut grid, c0, r0, col, row, '-'),
            None => grid[row][col] = '-',
        }
        prev = Some((col, row));
    }

    let mut out = String::new();
    out.push_str(header);
    out.push('\n');
    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }
    out
}

fn range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if min.is_finite() && max.is_finite() && max > min {
        Some((min, max))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0 && (y0 as usize) < grid.len() && x0 >= 0 && (x0 as usize) < grid[0].len() {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
