//! Terminal rendering for the falling-block game.
//!
//! Rendering is a pure consumer of [`core::GameSnapshot`]: the view paints a
//! framebuffer and the renderer flushes framebuffer diffs to the terminal.
//! No widget library is involved.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{palette, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
