//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types shared by the rules engine, the
//! terminal view and the input mapping. Everything here is plain data with no
//! external dependencies.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//!
//! # Drop Intervals by Level
//!
//! Gravity speeds up by 50ms per level and bottoms out at 100ms:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 1000ms |
//! | 2 | 950ms |
//! | 10 | 550ms |
//! | 19+ | 100ms |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameCommand, PieceKind, Phase, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//! assert_eq!(piece.color_id(), 6);
//!
//! assert_eq!(GameCommand::from_str("hardDrop"), Some(GameCommand::HardDrop));
//! assert_eq!(Phase::Ready.as_str(), "ready");
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity interval at level 1 (1000ms = 1 second per row)
pub const BASE_DROP_MS: u32 = 1000;

/// Interval reduction per level gained
pub const DROP_STEP_MS: u32 = 50;

/// Fastest gravity interval
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Cleared lines needed per level
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear scoring table
///
/// Base points for clearing N lines in one landing, multiplied by the
/// current level (levels start at 1):
/// - 1 line: 100
/// - 2 lines: 300
/// - 3 lines: 500
/// - 4 lines: 800
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// A cell on the game board
///
/// `0` is empty, `1..=7` is the color identifier of the piece that filled it.
pub type Cell = u8;

/// Value of an empty cell
pub const EMPTY: Cell = 0;

/// The seven tetromino piece kinds
///
/// Each kind owns one color identifier:
/// - **I**: 1 (cyan)
/// - **J**: 2 (blue)
/// - **L**: 3 (orange)
/// - **O**: 4 (yellow)
/// - **S**: 5 (green)
/// - **T**: 6 (purple)
/// - **Z**: 7 (red)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Color identifier stored in board cells for this kind.
    pub fn color_id(&self) -> Cell {
        match self {
            PieceKind::I => 1,
            PieceKind::J => 2,
            PieceKind::L => 3,
            PieceKind::O => 4,
            PieceKind::S => 5,
            PieceKind::T => 6,
            PieceKind::Z => 7,
        }
    }

    /// Inverse of [`PieceKind::color_id`].
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_color_id(4), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_color_id(0), None);
    /// assert_eq!(PieceKind::from_color_id(8), None);
    /// ```
    pub fn from_color_id(id: Cell) -> Option<Self> {
        match id {
            1..=7 => Some(Self::ALL[(id - 1) as usize]),
            _ => None,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }
}

/// Discrete command tokens accepted by a session
///
/// The input layer maps raw keys to these; the session never sees key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Move piece one row down, landing it if it cannot move
    SoftDrop,
    /// Drop piece to the lowest legal row and land it
    HardDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Toggle between playing and paused
    Pause,
    /// Reset and begin a new game
    Start,
    /// Reset to the ready state
    End,
}

impl GameCommand {
    /// Parse command from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::GameCommand;
    ///
    /// assert_eq!(GameCommand::from_str("moveLeft"), Some(GameCommand::MoveLeft));
    /// assert_eq!(GameCommand::from_str("ROTATECCW"), Some(GameCommand::RotateCcw));
    /// assert_eq!(GameCommand::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameCommand::MoveLeft),
            "moveright" => Some(GameCommand::MoveRight),
            "softdrop" => Some(GameCommand::SoftDrop),
            "harddrop" => Some(GameCommand::HardDrop),
            "rotatecw" => Some(GameCommand::RotateCw),
            "rotateccw" => Some(GameCommand::RotateCcw),
            "pause" => Some(GameCommand::Pause),
            "start" => Some(GameCommand::Start),
            "end" => Some(GameCommand::End),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameCommand::MoveLeft => "moveLeft",
            GameCommand::MoveRight => "moveRight",
            GameCommand::SoftDrop => "softDrop",
            GameCommand::HardDrop => "hardDrop",
            GameCommand::RotateCw => "rotateCw",
            GameCommand::RotateCcw => "rotateCcw",
            GameCommand::Pause => "pause",
            GameCommand::Start => "start",
            GameCommand::End => "end",
        }
    }
}

/// Session lifecycle phase
///
/// `Ready` → `Playing` ⇄ `Paused`, `Playing` → `GameOver`. Start and end
/// reset from any phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Ready,
    Playing,
    Paused,
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Ready => "ready",
            Phase::Playing => "playing",
            Phase::Paused => "paused",
            Phase::GameOver => "game_over",
        }
    }

    /// Human-readable status line for renderers.
    pub fn status_label(&self) -> &'static str {
        match self {
            Phase::Ready => "PRESS ENTER",
            Phase::Playing => "PLAYING",
            Phase::Paused => "PAUSED",
            Phase::GameOver => "GAME OVER",
        }
    }

    /// Whether commands other than start/end/pause are accepted.
    pub fn accepts_moves(&self) -> bool {
        matches!(self, Phase::Playing)
    }
}
