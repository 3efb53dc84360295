//! Grid module - the board state container
//!
//! The grid is 10 columns x 20 rows; each cell holds a color identifier
//! (0 = empty). Rows are stored top to bottom, so row 19 is the floor.
//! Coordinates passed as `(x, y)` are (column, row) and may be negative;
//! out-of-range reads return `None` rather than panicking.

use arrayvec::ArrayVec;

use crate::pieces::Shape;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH, EMPTY};

/// Number of rows, as an index bound
pub const ROWS: usize = BOARD_HEIGHT as usize;

/// Number of columns, as an index bound
pub const COLS: usize = BOARD_WIDTH as usize;

/// Row indices removed by one [`Grid::clear_full_rows`] call
pub type ClearedRows = ArrayVec<usize, ROWS>;

/// The game grid - 20 rows of 10 cells, row-major
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: [[Cell; COLS]; ROWS],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            rows: [[EMPTY; COLS]; ROWS],
        }
    }

    /// Build a grid from explicit rows (fixtures for tests and benches).
    ///
    /// Panics if any cell is not a valid color identifier.
    pub fn from_rows(rows: [[Cell; COLS]; ROWS]) -> Self {
        assert!(
            rows.iter().flatten().all(|&c| c <= 7),
            "grid cells must be 0..=7"
        );
        Self { rows }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<(usize, usize)> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize, x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Fill every cell with 0
    pub fn reset(&mut self) {
        self.rows = [[EMPTY; COLS]; ROWS];
    }

    /// Get cell at column `x`, row `y`
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|(row, col)| self.rows[row][col])
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(c) if c != EMPTY)
    }

    /// Set a single cell. Returns false if out of bounds.
    pub fn set_cell(&mut self, row: usize, col: usize, color_id: Cell) -> bool {
        debug_assert!(color_id <= 7, "invalid color id {}", color_id);
        if row >= ROWS || col >= COLS {
            return false;
        }
        self.rows[row][col] = color_id;
        true
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= ROWS {
            return false;
        }
        self.rows[row].iter().all(|&cell| cell != EMPTY)
    }

    /// Write every filled cell of `shape`, offset by `(x, y)`, with `color_id`.
    ///
    /// Cells that fall outside the grid are skipped. Returns the number of
    /// cells written.
    pub fn commit_piece(&mut self, shape: &Shape, x: i8, y: i8, color_id: Cell) -> usize {
        let mut written = 0;
        for (r, c) in shape.filled() {
            if let Some((row, col)) = Self::index(x + c as i8, y + r as i8) {
                self.rows[row][col] = color_id;
                written += 1;
            }
        }
        written
    }

    /// Remove every full row and pad the top with empty rows.
    ///
    /// Non-full rows keep their relative order and the row count stays at 20.
    /// Returns the original indices of the removed rows, bottom to top.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let mut write = ROWS;

        for read in (0..ROWS).rev() {
            if self.is_row_full(read) {
                cleared.push(read);
            } else {
                write -= 1;
                if write != read {
                    self.rows[write] = self.rows[read];
                }
            }
        }

        for row in &mut self.rows[..write] {
            *row = [EMPTY; COLS];
        }

        cleared
    }

    /// Rows top to bottom
    pub fn rows(&self) -> &[[Cell; COLS]; ROWS] {
        &self.rows
    }

    /// Number of filled cells on the grid
    pub fn filled_count(&self) -> usize {
        self.rows.iter().flatten().filter(|&&c| c != EMPTY).count()
    }

    /// Copy the cells into a snapshot grid
    pub fn write_u8_grid(&self, out: &mut [[u8; COLS]; ROWS]) {
        *out = self.rows;
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::template;
    use crate::types::PieceKind;

    #[test]
    fn test_grid_index_calculation() {
        assert_eq!(Grid::index(0, 0), Some((0, 0)));
        assert_eq!(Grid::index(9, 19), Some((19, 9)));
        assert_eq!(Grid::index(-1, 0), None);
        assert_eq!(Grid::index(10, 0), None);
        assert_eq!(Grid::index(0, 20), None);
        assert_eq!(Grid::index(0, -1), None);
    }

    #[test]
    fn test_set_cell_and_get() {
        let mut grid = Grid::new();
        assert!(grid.set_cell(10, 5, 6));
        assert_eq!(grid.get(5, 10), Some(6));
        assert!(grid.is_occupied(5, 10));
        assert!(!grid.set_cell(20, 0, 1));
        assert!(!grid.set_cell(0, 10, 1));
    }

    #[test]
    fn test_commit_piece_skips_cells_above_top() {
        let mut grid = Grid::new();
        let o = template(PieceKind::O);

        // Top row of the O sits at y = -1, only the lower row lands.
        assert_eq!(grid.commit_piece(&o, 4, -1, 4), 2);
        assert_eq!(grid.get(4, 0), Some(4));
        assert_eq!(grid.get(5, 0), Some(4));
        assert_eq!(grid.filled_count(), 2);
    }

    #[test]
    fn test_clear_non_adjacent_rows() {
        let mut grid = Grid::new();
        for col in 0..COLS {
            grid.set_cell(19, col, 1);
            grid.set_cell(17, col, 2);
        }
        grid.set_cell(18, 0, 3);
        grid.set_cell(16, 9, 5);

        let cleared = grid.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[19, 17]);
        assert_eq!(grid.get(0, 19), Some(3));
        assert_eq!(grid.get(9, 18), Some(5));
        assert_eq!(grid.filled_count(), 2);
    }

    #[test]
    fn test_clear_whole_grid() {
        let mut grid = Grid::from_rows([[7; COLS]; ROWS]);
        let cleared = grid.clear_full_rows();
        assert_eq!(cleared.len(), ROWS);
        assert_eq!(grid, Grid::new());
    }

    #[test]
    fn test_reset() {
        let mut grid = Grid::from_rows([[2; COLS]; ROWS]);
        grid.reset();
        assert_eq!(grid.filled_count(), 0);
    }
}
