// grid.rs - Mark grid for a two-category logic puzzle
//
// A `Grid` is a value: every transition returns a fresh grid and leaves the
// one it was called on untouched.

use crate::cell::CellState;

/// Rejected activation outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cell ({row}, {column}) is outside the {rows}x{columns} grid")]
pub struct IndexError {
    pub row: usize,
    pub column: usize,
    pub rows: usize,
    pub columns: usize,
}

/// Row-major matrix of cell marks, `rows x columns`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Grid of the given shape with every cell `Empty`.
    ///
    /// # Panics
    ///
    /// Panics if `rows * columns` overflows `usize`; no such grid fits in memory.
    pub fn blank(rows: usize, columns: usize) -> Self {
        let len = rows
            .checked_mul(columns)
            .unwrap_or_else(|| panic!("a {rows}x{columns} grid overflows usize"));
        Self {
            rows,
            columns,
            cells: vec![CellState::Empty; len],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Mark at `(row, column)`, `None` when out of range.
    pub fn get(&self, row: usize, column: usize) -> Option<CellState> {
        self.offset(row, column).ok().map(|i| self.cells[i])
    }

    /// New grid with the cell at `(row, column)` advanced one step.
    ///
    /// All other cells are copied unchanged. Out-of-range indices are
    /// rejected and no grid is produced.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if `row >= rows` or `column >= columns`.
    pub fn cycle(&self, row: usize, column: usize) -> Result<Self, IndexError> {
        let target = self.offset(row, column)?;
        let mut next = self.clone();
        next.cells[target] = self.cells[target].next();
        Ok(next)
    }

    /// Rows as slices, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[CellState]> + '_ {
        (0..self.rows).map(move |r| &self.cells[r * self.columns..(r + 1) * self.columns])
    }

    /// Number of cells holding `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&cell| cell == state).count()
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_empty())
    }

    fn offset(&self, row: usize, column: usize) -> Result<usize, IndexError> {
        if row < self.rows && column < self.columns {
            Ok(row * self.columns + column)
        } else {
            Err(IndexError { row, column, rows: self.rows, columns: self.columns })
        }
    }
}

/// Advance one cell of `grid`, see [`Grid::cycle`].
///
/// # Errors
///
/// Returns [`IndexError`] for out-of-range indices.
pub fn cycle(grid: &Grid, row: usize, column: usize) -> Result<Grid, IndexError> {
    grid.cycle(row, column)
}

/// Fresh all-`Empty` grid. Depends on the shape only.
///
/// # Panics
///
/// Same limit as [`Grid::blank`].
pub fn clear(rows: usize, columns: usize) -> Grid {
    Grid::blank(rows, columns)
}
