//! Collision module - legality of a shape at a grid offset
//!
//! Cells above the top edge (negative row) are legal so a piece can hang
//! partly above the grid; cells left of column 0, right of the last column or
//! below the floor are not. Because the spawn check uses the same test, a
//! piece that cannot be placed at its spawn offset is the game-over signal.

use crate::grid::Grid;
use crate::pieces::Shape;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Whether `shape` placed with its top-left corner at column `x`, row `y`
/// overlaps a wall, the floor, or an occupied cell.
pub fn collides(grid: &Grid, x: i8, y: i8, shape: &Shape) -> bool {
    shape.filled().any(|(r, c)| {
        let board_x = x as i16 + c as i16;
        let board_y = y as i16 + r as i16;

        if board_x < 0 || board_x >= BOARD_WIDTH as i16 || board_y >= BOARD_HEIGHT as i16 {
            return true;
        }
        board_y >= 0 && grid.is_occupied(board_x as i8, board_y as i8)
    })
}

/// Negation of [`collides`]
#[inline]
pub fn fits(grid: &Grid, x: i8, y: i8, shape: &Shape) -> bool {
    !collides(grid, x, y, shape)
}

/// Lowest row reachable by moving straight down from `y`.
///
/// Returns `y` itself when the shape cannot move down.
pub fn landing_y(grid: &Grid, x: i8, y: i8, shape: &Shape) -> i8 {
    let mut landed = y;
    while fits(grid, x, landed + 1, shape) {
        landed += 1;
    }
    landed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::template;
    use crate::types::PieceKind;

    #[test]
    fn test_negative_rows_are_legal() {
        let grid = Grid::new();
        let o = template(PieceKind::O);
        assert!(!collides(&grid, 4, -1, &o));
        assert!(!collides(&grid, 4, -5, &o));
    }

    #[test]
    fn test_walls_and_floor() {
        let grid = Grid::new();
        let o = template(PieceKind::O);
        assert!(collides(&grid, -1, 0, &o));
        assert!(collides(&grid, 9, 0, &o));
        assert!(!collides(&grid, 8, 0, &o));
        assert!(!collides(&grid, 0, 18, &o));
        assert!(collides(&grid, 0, 19, &o));
    }

    #[test]
    fn test_empty_matrix_border_does_not_collide() {
        let grid = Grid::new();
        // The I piece's filled row is row 1 of its 4x4 matrix; the matrix may
        // hang two rows below the floor.
        let i = template(PieceKind::I);
        assert!(!collides(&grid, 0, 18, &i));
        assert!(collides(&grid, 0, 19, &i));
    }

    #[test]
    fn test_occupied_cell_collides() {
        let mut grid = Grid::new();
        let t = template(PieceKind::T);
        assert!(!collides(&grid, 3, 5, &t));
        grid.set_cell(6, 4, 2);
        assert!(collides(&grid, 3, 5, &t));
        // Occupied cell in the shape's empty corner does not matter.
        let mut grid = Grid::new();
        grid.set_cell(5, 3, 2);
        assert!(!collides(&grid, 3, 5, &t));
    }

    #[test]
    fn test_landing_y() {
        let mut grid = Grid::new();
        let o = template(PieceKind::O);
        assert_eq!(landing_y(&grid, 4, 0, &o), 18);
        grid.set_cell(10, 4, 1);
        assert_eq!(landing_y(&grid, 4, 0, &o), 8);
        assert_eq!(landing_y(&grid, 4, 8, &o), 8);
    }
}
