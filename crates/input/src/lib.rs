//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameCommand`] tokens. The
//! session only ever sees command tokens; key identifiers stop here.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
