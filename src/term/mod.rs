//! Terminal rendering module.
//!
//! A small game-oriented rendering layer: [`view::GameView`] maps game state
//! into a [`fb::FrameBuffer`] of styled glyphs (pure, unit-testable), and
//! [`renderer::TerminalRenderer`] owns the raw-mode/alternate-screen
//! lifecycle and flushes frame diffs to the terminal.

pub mod fb;
pub mod renderer;
pub mod view;

pub use fb::{FrameBuffer, Glyph, GlyphStyle, Rgb};
pub use renderer::TerminalRenderer;
pub use view::{GameView, Viewport};
