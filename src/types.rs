//! Core types shared across the application.
//! This module contains pure data types with no external dependencies.

/// Playing field dimensions (cells).
pub const FIELD_WIDTH: u8 = 12;
pub const FIELD_HEIGHT: u8 = 20;

/// Fixed tick length (milliseconds).
pub const TICK_MS: u32 = 50;

/// Gravity cadence: one forced downward move every this many ticks.
pub const GRAVITY_TICKS: u32 = 10;

/// Tetromino piece kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in draw-index order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];
}

/// Rotation states (North = spawn orientation).
///
/// Storing rotation as an enum keeps it structurally mod 4; there is no
/// out-of-range rotation to check for at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate one quarter turn clockwise.
    pub fn rotate_cw(self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate one quarter turn counter-clockwise.
    pub fn rotate_ccw(self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }

}

/// Player actions the game loop understands.
///
/// Quit is not an action: the outer loop handles it directly and tears the
/// terminal down from any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    Rotate,
    SoftDrop,
}

/// Cell on the field (None = empty, Some = locked piece material).
pub type Cell = Option<PieceKind>;
