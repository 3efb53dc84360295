//! Core game logic module - pure, deterministic, and testable
//!
//! This crate owns the rules of the falling-block game: the grid, the piece
//! catalog, piece generation, collision, rotation, scoring and the session
//! state machine. It has **no** dependencies on terminals, clocks or I/O:
//!
//! - **Deterministic**: the spawner takes an injected random source, so a
//!   seed (or a fixed sequence) reproduces a whole game
//! - **Clock-free**: gravity is requested through the [`GravityScheduler`]
//!   port; the caller decides what a millisecond is
//! - **Allocation-free hot paths**: shapes and the grid are fixed-size arrays
//!
//! # Module Structure
//!
//! - [`grid`]: 10x20 cell matrix, commit and line clearing
//! - [`pieces`]: the seven shape templates
//! - [`rng`]: random source trait and a seedable LCG
//! - [`spawner`]: uniform (or 7-bag) piece selection with one-piece lookahead
//! - [`collision`]: legality of a shape at an offset
//! - [`rotation`]: matrix rotation with a single horizontal kick
//! - [`scoring`]: points, levels and drop intervals
//! - [`scheduler`]: the gravity scheduling port
//! - [`session`]: the state machine driving all of the above
//! - [`snapshot`]: read-only view for renderers
//!
//! # Example
//!
//! ```
//! use blockfall_core::{ManualScheduler, Session};
//! use blockfall_types::{GameCommand, Phase};
//!
//! let mut game = Session::new(12345, ManualScheduler::new());
//! game.apply(GameCommand::Start);
//! assert_eq!(game.phase(), Phase::Playing);
//! assert_eq!(game.scheduler().armed_interval(), Some(1000));
//!
//! game.apply(GameCommand::MoveRight);
//! game.apply(GameCommand::RotateCw);
//! game.apply(GameCommand::HardDrop);
//!
//! // The first piece is on the grid and a new one is falling.
//! assert_eq!(game.grid().filled_count(), 4);
//! assert!(game.active().is_some());
//! ```

pub mod collision;
pub mod grid;
pub mod pieces;
pub mod rng;
pub mod rotation;
pub mod scheduler;
pub mod scoring;
pub mod session;
pub mod snapshot;
pub mod spawner;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use collision::{collides, fits, landing_y};
pub use grid::{ClearedRows, Grid, COLS, ROWS};
pub use pieces::{template, Shape};
pub use rng::{RandomSource, SequenceRng, SimpleRng};
pub use rotation::{rotate_ccw, rotate_cw, try_rotate, RotationDir, RotationOutcome};
pub use scheduler::{GravityScheduler, ManualScheduler};
pub use scoring::{drop_interval_ms, level_for_lines, line_clear_score, ScoreResult};
pub use session::{LandingEvent, Session};
pub use snapshot::{ActiveSnapshot, GameSnapshot, NextSnapshot};
pub use spawner::{spawn_position, ActivePiece, NextPiece, PieceRule, Spawner};
