use crate::grid::{COLS, ROWS};
use crate::pieces::Shape;
use crate::spawner::{ActivePiece, NextPiece};
use crate::types::{Cell, Phase, PieceKind, BASE_DROP_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub color_id: Cell,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            color_id: value.color_id,
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NextSnapshot {
    pub kind: PieceKind,
    pub color_id: Cell,
    pub shape: Shape,
}

impl From<NextPiece> for NextSnapshot {
    fn from(value: NextPiece) -> Self {
        Self {
            kind: value.kind,
            color_id: value.color_id,
            shape: value.shape,
        }
    }
}

/// Everything a renderer may read between steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[u8; COLS]; ROWS],
    pub active: Option<ActiveSnapshot>,
    pub ghost_y: Option<i8>,
    pub next: Option<NextSnapshot>,
    pub phase: Phase,
    pub seed: u32,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub drop_interval_ms: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// Cell color at (x, y) including the active piece, for renderers that
    /// want a flattened view
    pub fn composed_cell(&self, x: usize, y: usize) -> Cell {
        if let Some(active) = self.active {
            let r = y as i16 - active.y as i16;
            let c = x as i16 - active.x as i16;
            if r >= 0 && c >= 0 && active.shape.get(r as usize, c as usize) != 0 {
                return active.color_id;
            }
        }
        self.board[y][x]
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; COLS]; ROWS],
            active: None,
            ghost_y: None,
            next: None,
            phase: Phase::Ready,
            seed: 0,
            score: 0,
            level: 1,
            lines: 0,
            drop_interval_ms: BASE_DROP_MS,
        }
    }
}
