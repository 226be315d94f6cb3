#![forbid(unsafe_code)]

//! Fixed-height terminal chart of group averages.

use sg_core::ids::GroupId;
use std::fmt::Write as _;

const HEIGHT: usize = 10;
const AXIS_INDENT: usize = 8;
const POINT: char = 'o';
const TRACE: char = '.';

/// Plots `(group id, average)` pairs left to right in the given order.
pub(crate) fn render(points: &[(GroupId, f64)]) -> String {
    let mut out = String::from("Group SGPA Graph\n");
    if points.is_empty() {
        return out;
    }

    let labels = points
        .iter()
        .map(|(id, _)| id.to_string())
        .collect::<Vec<_>>();
    let step = labels.iter().map(String::len).max().unwrap_or(1).max(2) + 2;
    let width = step * points.len();

    let (min, max) = points.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (_, v)| {
        (lo.min(*v), hi.max(*v))
    });
    let (lo, hi) = if max - min < 1e-9 {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    };

    let row_of = |value: f64| -> usize {
        let scaled = (hi - value) / (hi - lo) * (HEIGHT - 1) as f64;
        (scaled.round().max(0.0) as usize).min(HEIGHT - 1)
    };
    let col_of = |index: usize| index * step + step / 2;

    let mut grid = vec![vec![' '; width]; HEIGHT];
    let cells = points
        .iter()
        .enumerate()
        .map(|(index, (_, value))| (col_of(index), row_of(*value)))
        .collect::<Vec<_>>();

    for pair in cells.windows(2) {
        let (c0, r0) = pair[0];
        let (c1, r1) = pair[1];
        for col in c0 + 1..c1 {
            let t = (col - c0) as f64 / (c1 - c0) as f64;
            let row = (r0 as f64 + t * (r1 as f64 - r0 as f64)).round() as usize;
            grid[row.min(HEIGHT - 1)][col] = TRACE;
        }
    }
    for (col, row) in &cells {
        grid[*row][*col] = POINT;
    }

    for (row, row_cells) in grid.iter().enumerate() {
        let value = hi - row as f64 * (hi - lo) / (HEIGHT - 1) as f64;
        let line = row_cells.iter().collect::<String>();
        let _ = writeln!(out, "{value:>6.2} |{}", line.trim_end());
    }
    let _ = writeln!(out, "{:>width$}+{}", "", "-".repeat(width), width = AXIS_INDENT - 1);

    let mut axis = vec![' '; width];
    for (index, label) in labels.iter().enumerate() {
        let start = col_of(index).saturating_sub(label.len() / 2);
        for (offset, ch) in label.chars().enumerate() {
            if let Some(slot) = axis.get_mut(start + offset) {
                *slot = ch;
            }
        }
    }
    let axis = axis.iter().collect::<String>();
    let _ = writeln!(out, "{:>width$}{}", "", axis.trim_end(), width = AXIS_INDENT);
    let _ = writeln!(out, "{:>width$}x: Group ID   y: Average SGPA", "", width = AXIS_INDENT);
    out
}
