//! Blockfall (workspace facade crate).
//!
//! The rules live in dedicated crates under `crates/`; this package re-exports
//! them as `blockfall::{core,input,term,types}` and adds the pieces that touch
//! the outside world: a wall-clock gravity scheduler, environment settings and
//! the JSON-lines event trace.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub mod runtime;
pub mod settings;
pub mod trace;
