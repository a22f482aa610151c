//! Shape catalog - rotation-0 occupancy masks, one per piece kind.
//!
//! Masks are square and immutable. The two large kinds (I, O) use a 4x4
//! mask; the other five fit in 3x3. Rotated views are computed by index
//! remapping in [`crate::core::piece`], never by copying a mask.

use crate::types::PieceKind;

/// A piece's occupancy mask at rotation 0.
///
/// The tagged variant makes the size part of the value: a 3x3 mask can never
/// be read with 4x4 coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeMask {
    Small([[bool; 3]; 3]),
    Big([[bool; 4]; 4]),
}

const O: bool = false;
const X: bool = true;

const I_MASK: ShapeMask = ShapeMask::Big([
    [O, O, X, O],
    [O, O, X, O],
    [O, O, X, O],
    [O, O, X, O],
]);

const O_MASK: ShapeMask = ShapeMask::Big([
    [O, O, O, O],
    [O, X, X, O],
    [O, X, X, O],
    [O, O, O, O],
]);

const T_MASK: ShapeMask = ShapeMask::Small([
    [O, X, O],
    [X, X, O],
    [O, X, O],
]);

const S_MASK: ShapeMask = ShapeMask::Small([
    [O, X, O],
    [X, X, O],
    [X, O, O],
]);

const Z_MASK: ShapeMask = ShapeMask::Small([
    [X, O, O],
    [X, X, O],
    [O, X, O],
]);

const J_MASK: ShapeMask = ShapeMask::Small([
    [X, X, O],
    [X, O, O],
    [X, O, O],
]);

const L_MASK: ShapeMask = ShapeMask::Small([
    [X, X, O],
    [O, X, O],
    [O, X, O],
]);

impl ShapeMask {
    /// Look up the rotation-0 mask for a kind. Pure, never fails.
    pub fn of(kind: PieceKind) -> ShapeMask {
        match kind {
            PieceKind::I => I_MASK,
            PieceKind::O => O_MASK,
            PieceKind::T => T_MASK,
            PieceKind::S => S_MASK,
            PieceKind::Z => Z_MASK,
            PieceKind::J => J_MASK,
            PieceKind::L => L_MASK,
        }
    }

    /// Side length of the mask (3 or 4).
    pub fn size(&self) -> u8 {
        match self {
            ShapeMask::Small(_) => 3,
            ShapeMask::Big(_) => 4,
        }
    }

    /// Read the unrotated mask. Out-of-range coordinates read as empty.
    pub fn at(&self, y: u8, x: u8) -> bool {
        match self {
            ShapeMask::Small(m) => {
                y < 3 && x < 3 && m[y as usize][x as usize]
            }
            ShapeMask::Big(m) => {
                y < 4 && x < 4 && m[y as usize][x as usize]
            }
        }
    }

    /// Topmost mask row containing an occupied cell.
    ///
    /// Drives the spawn row: a mask with empty leading rows spawns deeper
    /// above the field so its first occupied row sits on row 0.
    pub fn top_occupied_row(&self) -> u8 {
        let n = self.size();
        for y in 0..n {
            for x in 0..n {
                if self.at(y, x) {
                    return y;
                }
            }
        }
        0
    }
}
