//! Rotation module - matrix rotation with a single horizontal kick
//!
//! Rotation rebuilds the shape matrix; it never edits one in place. When the
//! rotated shape does not fit, exactly one correction is tried: one column
//! toward the board center. There are no vertical kicks and no kick tables.

use crate::collision::fits;
use crate::grid::{Grid, COLS};
use crate::pieces::Shape;

/// Rotation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationDir {
    Clockwise,
    CounterClockwise,
}

/// Result of an accepted rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationOutcome {
    pub shape: Shape,
    pub x: i8,
    /// Horizontal correction applied (0, -1 or +1)
    pub kick: i8,
}

/// 90° clockwise: `new[c][n - 1 - r] = old[r][c]`
pub fn rotate_cw(shape: &Shape) -> Shape {
    let n = shape.size();
    let mut out = Shape::blank(n as u8);
    for r in 0..n {
        for c in 0..n {
            out.put(c, n - 1 - r, shape.get(r, c));
        }
    }
    out
}

/// 90° counter-clockwise, as three clockwise turns
pub fn rotate_ccw(shape: &Shape) -> Shape {
    rotate_cw(&rotate_cw(&rotate_cw(shape)))
}

pub fn rotate(shape: &Shape, dir: RotationDir) -> Shape {
    match dir {
        RotationDir::Clockwise => rotate_cw(shape),
        RotationDir::CounterClockwise => rotate_ccw(shape),
    }
}

/// Column correction to try when a rotation collides at `x`
pub fn kick_offset(x: i8) -> i8 {
    if x >= (COLS / 2) as i8 {
        -1
    } else {
        1
    }
}

/// Rotate a shape at (x, y), trying one horizontal kick on collision.
///
/// Returns None when both the unkicked and the kicked placement collide;
/// the caller keeps its shape and position unchanged in that case.
pub fn try_rotate(
    grid: &Grid,
    shape: &Shape,
    x: i8,
    y: i8,
    dir: RotationDir,
) -> Option<RotationOutcome> {
    let rotated = rotate(shape, dir);

    if fits(grid, x, y, &rotated) {
        return Some(RotationOutcome {
            shape: rotated,
            x,
            kick: 0,
        });
    }

    let kick = kick_offset(x);
    if fits(grid, x + kick, y, &rotated) {
        return Some(RotationOutcome {
            shape: rotated,
            x: x + kick,
            kick,
        });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::template;
    use crate::types::PieceKind;

    #[test]
    fn test_rotate_t_clockwise() {
        let t = template(PieceKind::T);
        let cw = rotate_cw(&t);
        let expected = Shape::from_rows(&[&[0, 6, 0], &[0, 6, 6], &[0, 6, 0]]);
        assert_eq!(cw, expected);
    }

    #[test]
    fn test_rotate_i_clockwise() {
        let i = template(PieceKind::I);
        let cw = rotate_cw(&i);
        let filled: Vec<_> = cw.filled().collect();
        assert_eq!(filled, vec![(0, 2), (1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn test_four_turns_is_identity() {
        for kind in PieceKind::ALL {
            let s = template(kind);
            let back = rotate_cw(&rotate_cw(&rotate_cw(&rotate_cw(&s))));
            assert_eq!(back, s, "{:?}", kind);
        }
    }

    #[test]
    fn test_ccw_inverts_cw() {
        for kind in PieceKind::ALL {
            let s = template(kind);
            assert_eq!(rotate_ccw(&rotate_cw(&s)), s, "{:?}", kind);
            assert_eq!(rotate_cw(&rotate_ccw(&s)), s, "{:?}", kind);
        }
    }

    #[test]
    fn test_o_rotation_is_stable() {
        let o = template(PieceKind::O);
        assert_eq!(rotate_cw(&o), o);
    }

    #[test]
    fn test_kick_direction() {
        assert_eq!(kick_offset(-1), 1);
        assert_eq!(kick_offset(4), 1);
        assert_eq!(kick_offset(5), -1);
        assert_eq!(kick_offset(8), -1);
    }

    #[test]
    fn test_kick_off_left_wall() {
        let grid = Grid::new();
        // Vertical I in column 0: matrix column 2 filled, so x = -2.
        let vertical = rotate_cw(&template(PieceKind::I));
        assert!(fits(&grid, -2, 0, &vertical));

        // Back to horizontal at x = -2 spans columns -2..=1: collides. One kick
        // right still collides, so the rotation is rejected.
        assert!(try_rotate(&grid, &vertical, -2, 0, RotationDir::CounterClockwise).is_none());

        // From x = -1 the kick to x = 0 fits.
        let out = try_rotate(&grid, &vertical, -1, 0, RotationDir::CounterClockwise).unwrap();
        assert_eq!(out.x, 0);
        assert_eq!(out.kick, 1);
    }

    #[test]
    fn test_kick_off_right_wall() {
        let grid = Grid::new();
        // T pointing left occupies matrix columns 0..=1; at x = 8 it touches
        // the right wall.
        let t_left = rotate_ccw(&template(PieceKind::T));
        assert!(fits(&grid, 8, 0, &t_left));

        let out = try_rotate(&grid, &t_left, 8, 0, RotationDir::Clockwise).unwrap();
        assert_eq!(out.kick, -1);
        assert_eq!(out.x, 7);
        assert_eq!(out.shape, template(PieceKind::T));
    }

    #[test]
    fn test_no_kick_when_rotation_fits() {
        let grid = Grid::new();
        let t = template(PieceKind::T);
        let out = try_rotate(&grid, &t, 4, 0, RotationDir::Clockwise).unwrap();
        assert_eq!(out.kick, 0);
        assert_eq!(out.x, 4);
    }
}
