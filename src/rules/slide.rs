//! Per-line slide and merge.
//!
//! A move is the same rule applied to every line independently. A line is
//! given as flat cell indices ordered from the wall outward, so one
//! implementation serves all four directions.
//!
//! Cells are visited wall-first. Each non-zero cell slides toward the wall
//! through empty cells, then merges into its wall-side neighbor if the two
//! are equal and that neighbor has not already merged during this move.
//! Tiles at `MAX_TILE` slide but never merge.

use smallvec::{smallvec, SmallVec};

use crate::core::grid::merged_value;
use crate::core::{Direction, Grid};

/// What a shift did to one line or to the whole grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct ShiftSummary {
    /// Sum of the values of newly merged tiles.
    pub score: u64,
    /// Number of merges performed.
    pub merges: u32,
    /// Whether any cell changed.
    pub changed: bool,
}

impl ShiftSummary {
    fn absorb(&mut self, other: ShiftSummary) {
        self.score += other.score;
        self.merges += other.merges;
        self.changed |= other.changed;
    }
}

/// Slide and merge the cells at `line` (wall first) in place.
pub(crate) fn shift_line(cells: &mut [u32], line: &[usize]) -> ShiftSummary {
    let mut summary = ShiftSummary::default();
    let mut merged: SmallVec<[bool; 8]> = smallvec![false; line.len()];

    for start in 1..line.len() {
        let value = cells[line[start]];
        if value == 0 {
            continue;
        }

        let mut k = start;
        while k > 0 && cells[line[k - 1]] == 0 {
            cells[line[k - 1]] = value;
            cells[line[k]] = 0;
            k -= 1;
            summary.changed = true;
        }

        if k > 0 && !merged[k - 1] && cells[line[k - 1]] == value {
            let Some(doubled) = merged_value(value) else {
                continue;
            };
            cells[line[k - 1]] = doubled;
            cells[line[k]] = 0;
            merged[k - 1] = true;
            summary.score += u64::from(doubled);
            summary.merges += 1;
            summary.changed = true;
        }
    }

    summary
}

/// Apply one move to every line of the grid.
pub(crate) fn shift_grid(grid: &mut Grid, dir: Direction) -> ShiftSummary {
    let mut summary = ShiftSummary::default();
    for line in 0..grid.size() {
        let indices = grid.line_indices(dir, line);
        summary.absorb(shift_line(grid.cells_mut(), &indices));
    }
    summary
}
