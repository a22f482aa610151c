//! Core module - pure game logic with no external dependencies.
//!
//! Everything here is deterministic and I/O-free: the shape catalog, the
//! falling piece and its rotation math, the field store, the collision/kick
//! resolver, and the game state machine that ties them together.

pub mod board;
pub mod fit;
pub mod game;
pub mod piece;
pub mod rng;
pub mod shapes;

pub use board::Board;
pub use fit::fits;
pub use game::Game;
pub use piece::Piece;
pub use rng::SimpleRng;
pub use shapes::ShapeMask;
