//! Pieces module - the tetromino catalog
//!
//! Each kind is a square matrix (4x4 for I, 2x2 for O, 3x3 for the rest)
//! whose filled cells carry the kind's color identifier. Templates are
//! immutable; an active piece holds its own copy which rotation replaces
//! wholesale.

use crate::types::{Cell, PieceKind, EMPTY};

/// Largest side length of any catalog shape
pub const MAX_SHAPE: usize = 4;

/// Square shape matrix with a fixed-capacity backing store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: u8,
    cells: [[Cell; MAX_SHAPE]; MAX_SHAPE],
}

impl Shape {
    /// Build a shape from rows of cells.
    ///
    /// Panics if the matrix is not square, larger than 4x4, has no filled
    /// cell, or mixes color identifiers.
    pub fn from_rows(rows: &[&[Cell]]) -> Self {
        let size = rows.len();
        assert!(
            (1..=MAX_SHAPE).contains(&size),
            "shape side must be 1..=4, got {}",
            size
        );

        let mut cells = [[EMPTY; MAX_SHAPE]; MAX_SHAPE];
        let mut color = EMPTY;
        for (r, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), size, "shape row {} is not square", r);
            for (c, &cell) in row.iter().enumerate() {
                if cell == EMPTY {
                    continue;
                }
                assert!(
                    color == EMPTY || color == cell,
                    "shape mixes color ids {} and {}",
                    color,
                    cell
                );
                color = cell;
                cells[r][c] = cell;
            }
        }
        assert!(color != EMPTY, "shape has no filled cell");

        Self {
            size: size as u8,
            cells,
        }
    }

    /// An all-empty matrix of the given side, used as a rotation target
    pub(crate) fn blank(size: u8) -> Self {
        Self {
            size,
            cells: [[EMPTY; MAX_SHAPE]; MAX_SHAPE],
        }
    }

    pub(crate) fn put(&mut self, r: usize, c: usize, cell: Cell) {
        self.cells[r][c] = cell;
    }

    /// Side length of the matrix
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Cell at (row, col); 0 outside the matrix
    pub fn get(&self, r: usize, c: usize) -> Cell {
        if r >= self.size() || c >= self.size() {
            return EMPTY;
        }
        self.cells[r][c]
    }

    /// Positions (row, col) of the filled cells, row-major
    pub fn filled(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.size();
        (0..n)
            .flat_map(move |r| (0..n).map(move |c| (r, c)))
            .filter(move |&(r, c)| self.cells[r][c] != EMPTY)
    }

    /// Shared nonzero value of the matrix
    pub fn color_id(&self) -> Cell {
        self.filled()
            .next()
            .map(|(r, c)| self.cells[r][c])
            .unwrap_or(EMPTY)
    }

    pub fn cell_count(&self) -> usize {
        self.filled().count()
    }

    /// Rows of the matrix, trimmed to its size
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        let n = self.size();
        self.cells[..n].iter().map(move |row| &row[..n])
    }
}

/// Get the catalog template for a piece kind
pub fn template(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => Shape::from_rows(&[
            &[0, 0, 0, 0],
            &[1, 1, 1, 1],
            &[0, 0, 0, 0],
            &[0, 0, 0, 0],
        ]),
        PieceKind::J => Shape::from_rows(&[&[2, 0, 0], &[2, 2, 2], &[0, 0, 0]]),
        PieceKind::L => Shape::from_rows(&[&[0, 0, 3], &[3, 3, 3], &[0, 0, 0]]),
        PieceKind::O => Shape::from_rows(&[&[4, 4], &[4, 4]]),
        PieceKind::S => Shape::from_rows(&[&[0, 5, 5], &[5, 5, 0], &[0, 0, 0]]),
        PieceKind::T => Shape::from_rows(&[&[0, 6, 0], &[6, 6, 6], &[0, 0, 0]]),
        PieceKind::Z => Shape::from_rows(&[&[7, 7, 0], &[0, 7, 7], &[0, 0, 0]]),
    }
}
