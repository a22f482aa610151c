//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Polling is
//! the outer loop's job; the mapping here is pure and unit-testable.

pub mod map;

pub use map::{handle_key_event, should_quit};
