//! ASCII/Unicode plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - predicted RFD curve: `-` line
//! - selected duration: `|` column
//! - prediction at the selected duration: `x`

use crate::domain::CurveFile;

/// Render a plot for an in-memory curve with a selected-duration marker.
pub fn render_ascii_plot(
    curve: &[(f64, f64)],
    selected_duration: f64,
    selected_rfd: f64,
    width: usize,
    height: usize,
) -> String {
    render_plot(curve, Some((selected_duration, selected_rfd)), width, height)
}

/// Render a plot from a saved curve JSON file.
pub fn render_ascii_plot_from_curve_file(curve: &CurveFile, width: usize, height: usize) -> String {
    let points: Vec<(f64, f64)> = curve
        .grid
        .duration_min
        .iter()
        .zip(curve.grid.rfd.iter())
        .map(|(&d, &y)| (d, y))
        .collect();

    render_plot(
        &points,
        Some((curve.duration, curve.prediction.rfd_pred)),
        width,
        height,
    )
}

fn render_plot(
    curve: &[(f64, f64)],
    selected: Option<(f64, f64)>,
    width: usize,
    height: usize,
) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let (d_min, d_max) = duration_range(curve).unwrap_or((0.0, 60.0));
    let (y_min, y_max) = rfd_range(curve).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    // Selected-duration column first so the curve can overlay it.
    if let Some((d, _)) = selected {
        if d >= d_min && d <= d_max {
            let x = map_x(d, d_min, d_max, width);
            for row in grid.iter_mut() {
                row[x] = '|';
            }
        }
    }

    draw_curve(&mut grid, curve, d_min, d_max, y_min, y_max);

    // Prediction marker drawn last so it wins the cell.
    if let Some((d, rfd)) = selected {
        if d >= d_min && d <= d_max {
            let x = map_x(d, d_min, d_max, width);
            let y = map_y(rfd, y_min, y_max, height);
            grid[y][x] = 'x';
        }
    }

    // Build final string. We include a small header with ranges.
    let mut out = String::new();
    out.push_str(&format!(
        "Plot: duration=[{d_min:.1}, {d_max:.1}] min | RFD=[{y_min:.1}, {y_max:.1}] N/s\n"
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

fn duration_range(curve: &[(f64, f64)]) -> Option<(f64, f64)> {
    let mut min_d = f64::INFINITY;
    let mut max_d = f64::NEG_INFINITY;
    for &(d, _) in curve {
        min_d = min_d.min(d);
        max_d = max_d.max(d);
    }
    if min_d.is_finite() && max_d.is_finite() && max_d > min_d {
        Some((min_d, max_d))
    } else {
        None
    }
}

fn rfd_range(curve: &[(f64, f64)]) -> Option<(f64, f64)> {
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for &(_, y) in curve {
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }
    if min_y.is_finite() && max_y.is_finite() && max_y > min_y {
        Some((min_y, max_y))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(d: f64, d_min: f64, d_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((d - d_min) / (d_max - d_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(grid: &mut [Vec<char>], curve: &[(f64, f64)], d_min: f64, d_max: f64, y_min: f64, y_max: f64) {
    if curve.len() < 2 {
        return;
    }
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(d, y) in curve {
        let x = map_x(d, d_min, d_max, width);
        let yy = map_y(y, y_min, y_max, height);
        if let Some((x0, y0)) = prev {
            draw_line(grid, x0, y0, x, yy, '-');
        } else {
            grid[yy][x] = '-';
        }
        prev = Some((x, yy));
    }
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
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && matches!(grid[y0 as usize][x0 as usize], ' ' | '|')
        {
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
