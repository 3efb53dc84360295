//! Spawner module - next-piece generation with a one-piece lookahead
//!
//! The default rule draws each piece independently and uniformly from the
//! seven kinds; consecutive repeats are allowed. A shuffled 7-bag is
//! available as an opt-in rule.

use crate::grid::COLS;
use crate::pieces::{template, Shape};
use crate::rng::{RandomSource, SimpleRng};
use crate::types::{Cell, PieceKind};

/// Piece selection policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PieceRule {
    /// Independent uniform choice per piece
    #[default]
    Uniform,
    /// Every run of seven pieces contains each kind once
    Bag7,
}

impl PieceRule {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "uniform" => Some(PieceRule::Uniform),
            "bag7" | "7bag" | "bag" => Some(PieceRule::Bag7),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceRule::Uniform => "uniform",
            PieceRule::Bag7 => "bag7",
        }
    }
}

/// A generated piece waiting in the preview slot (no position yet)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NextPiece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color_id: Cell,
}

impl NextPiece {
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: template(kind),
            color_id: kind.color_id(),
        }
    }
}

/// The falling piece: a working copy of its shape plus the grid offset of
/// the shape's top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color_id: Cell,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Place a preview piece at its spawn position
    pub fn spawn(next: NextPiece) -> Self {
        let (x, y) = spawn_position(&next.shape);
        Self {
            kind: next.kind,
            shape: next.shape,
            color_id: next.color_id,
            x,
            y,
        }
    }

    /// Same piece shifted by (dx, dy)
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}

/// Spawn offset for a shape: horizontally centered, top row 0
pub fn spawn_position(shape: &Shape) -> (i8, i8) {
    let x = (COLS / 2) as i8 - (shape.size() / 2) as i8;
    (x, 0)
}

/// Piece generator owning the lookahead slot
#[derive(Debug, Clone)]
pub struct Spawner<R: RandomSource = SimpleRng> {
    rule: PieceRule,
    rng: R,
    bag: [PieceKind; 7],
    bag_index: usize,
    next: Option<NextPiece>,
}

impl Spawner<SimpleRng> {
    /// Uniform spawner over a seeded LCG
    pub fn seeded(seed: u32) -> Self {
        Self::new(SimpleRng::new(seed), PieceRule::Uniform)
    }
}

impl<R: RandomSource> Spawner<R> {
    pub fn new(rng: R, rule: PieceRule) -> Self {
        Self {
            rule,
            rng,
            bag: PieceKind::ALL,
            // Empty bag; the first bag draw refills it.
            bag_index: 7,
            next: None,
        }
    }

    /// Draw a fresh preview piece from the selection rule
    pub fn create_random(&mut self) -> NextPiece {
        let kind = match self.rule {
            PieceRule::Uniform => PieceKind::ALL[self.rng.next_range(7) as usize],
            PieceRule::Bag7 => self.draw_from_bag(),
        };
        NextPiece::new(kind)
    }

    fn draw_from_bag(&mut self) -> PieceKind {
        if self.bag_index >= 7 {
            self.bag = PieceKind::ALL;
            self.rng.shuffle(&mut self.bag);
            self.bag_index = 0;
        }
        let kind = self.bag[self.bag_index];
        self.bag_index += 1;
        kind
    }

    /// Fill the lookahead slot with a fresh piece, replacing any previous one
    pub fn prime(&mut self) {
        self.next = Some(self.create_random());
    }

    /// The piece that the next `advance` will spawn
    pub fn peek(&self) -> Option<&NextPiece> {
        self.next.as_ref()
    }

    /// Promote the lookahead piece to an active piece at its spawn position
    /// and generate its replacement.
    pub fn advance(&mut self) -> ActivePiece {
        let next = match self.next.take() {
            Some(next) => next,
            None => self.create_random(),
        };
        self.next = Some(self.create_random());
        ActivePiece::spawn(next)
    }

    /// Drop the lookahead piece
    pub fn clear(&mut self) {
        self.next = None;
    }
}
