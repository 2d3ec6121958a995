//! The square tile grid.
//!
//! Cells are stored row-major in a flat `Vec<u32>`. Zero means empty; every
//! other value is a power of two >= 2. All indexing is derived from the size
//! fixed at construction.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::direction::Direction;
use super::error::{EngineError, Result};

/// A cell coordinate. Row 0 is the top edge, column 0 the left edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Cell indices of one line, ordered from the wall outward.
pub(crate) type LineIndices = SmallVec<[usize; 8]>;

/// Largest tile a cell can hold. Two tiles of this value never merge.
pub const MAX_TILE: u32 = 1 << 31;

/// Check whether a value may appear in a cell.
#[must_use]
pub const fn is_tile_value(value: u32) -> bool {
    value == 0 || (value >= 2 && value <= MAX_TILE && value.is_power_of_two())
}

/// Value formed by merging two tiles of `value`, or `None` at the cap.
#[must_use]
pub const fn merged_value(value: u32) -> Option<u32> {
    if value == 0 || value >= MAX_TILE {
        None
    } else {
        Some(value * 2)
    }
}

/// An N×N grid of tiles.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vec<u32>,
}

impl Grid {
    /// Create an empty grid.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(EngineError::InvalidSize(size));
        }
        Ok(Self {
            size,
            cells: vec![0; size * size],
        })
    }

    /// Build a grid from row data, validating shape and tile values.
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self> {
        let size = rows.len();
        let mut grid = Self::new(size)?;

        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != size {
                return Err(EngineError::NotSquare {
                    row,
                    expected: size,
                    found: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if !is_tile_value(value) {
                    return Err(EngineError::InvalidTile { row, col, value });
                }
                grid.cells[row * size + col] = value;
            }
        }

        Ok(grid)
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Value at a position, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<u32> {
        if pos.row < self.size && pos.col < self.size {
            Some(self.cells[pos.row * self.size + pos.col])
        } else {
            None
        }
    }

    /// One row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= size`.
    #[must_use]
    pub fn row(&self, row: usize) -> &[u32] {
        let start = row * self.size;
        &self.cells[start..start + self.size]
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.cells.chunks_exact(self.size)
    }

    /// Copy the grid out as nested vectors.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.rows().map(<[u32]>::to_vec).collect()
    }

    /// Positions of all empty cells in row-major order.
    #[must_use]
    pub fn empty_cells(&self) -> SmallVec<[Position; 16]> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == 0)
            .map(|(i, _)| Position::new(i / self.size, i % self.size))
            .collect()
    }

    /// Number of empty cells.
    #[must_use]
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    /// True if no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }

    /// Largest tile on the board (0 when empty).
    #[must_use]
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all tiles.
    #[must_use]
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().map(|&v| u64::from(v)).sum()
    }

    /// True iff the grid is full and no two orthogonal neighbors can merge.
    ///
    /// Scans the whole grid, comparing each cell with its left and upper
    /// neighbor. Equal neighbors at [`MAX_TILE`] cannot merge.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        for row in 0..self.size {
            for col in 0..self.size {
                let value = self.cells[row * self.size + col];
                if value == 0 {
                    return false;
                }
                let mergeable = merged_value(value).is_some();
                if mergeable && row > 0 && value == self.cells[(row - 1) * self.size + col] {
                    return false;
                }
                if mergeable && col > 0 && value == self.cells[row * self.size + col - 1] {
                    return false;
                }
            }
        }
        true
    }

    pub(crate) fn set(&mut self, pos: Position, value: u32) {
        debug_assert!(is_tile_value(value));
        self.cells[pos.row * self.size + pos.col] = value;
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [u32] {
        &mut self.cells
    }

    /// Flat indices of line `line` for a move toward `dir`, wall first.
    ///
    /// Horizontal moves walk rows, vertical moves walk columns.
    pub(crate) fn line_indices(&self, dir: Direction, line: usize) -> LineIndices {
        let n = self.size;
        match dir {
            Direction::Left => (0..n).map(|c| line * n + c).collect(),
            Direction::Right => (0..n).rev().map(|c| line * n + c).collect(),
            Direction::Up => (0..n).map(|r| r * n + line).collect(),
            Direction::Down => (0..n).rev().map(|r| r * n + line).collect(),
        }
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for &value in row {
                if value == 0 {
                    f.write_str(". \t")?;
                } else {
                    write!(f, "{value} \t")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
