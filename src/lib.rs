//! Terminal falling-block game.
//!
//! The simulation lives in [`core`] and is pure: no I/O, deterministic for a
//! given seed. [`input`] maps crossterm key events to game actions and
//! [`term`] renders the field into a terminal framebuffer. The binary in
//! `main.rs` wires the three together.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
