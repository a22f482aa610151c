//! The live falling piece and its rotation-aware cell addressing.

use crate::core::shapes::ShapeMask;
use crate::types::{PieceKind, Rotation, FIELD_WIDTH};

/// The single live falling piece.
///
/// `(row, col)` is the field position of the mask's top-left corner. `row`
/// may be negative while the piece is still entering the field from above.
/// A `Piece` is a plain value: spawning replaces it by assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub row: i8,
    pub col: i8,
}

impl Piece {
    /// Create a piece at its spawn placement: rotation North, horizontally
    /// centered, and raised so the topmost occupied mask row sits on row 0.
    pub fn spawn(kind: PieceKind) -> Self {
        let mask = ShapeMask::of(kind);
        Self {
            kind,
            rotation: Rotation::North,
            row: -(mask.top_occupied_row() as i8),
            col: ((FIELD_WIDTH - mask.size()) / 2) as i8,
        }
    }

    /// Side length of this piece's mask (3 or 4).
    pub fn size(&self) -> u8 {
        ShapeMask::of(self.kind).size()
    }

    /// Rotation-aware mask read: the value at local `(y, x)` as if the
    /// stored rotation-0 mask were turned clockwise `rotation` quarter
    /// turns.
    ///
    /// This is an index remap into the unrotated mask; nothing is copied.
    /// One clockwise turn maps `(y, x)` to `(n-1-x, y)` in the original,
    /// and further turns compose from there. Four turns are the identity.
    pub fn cell_at(&self, y: u8, x: u8) -> bool {
        let mask = ShapeMask::of(self.kind);
        let n = mask.size();
        if y >= n || x >= n {
            return false;
        }
        match self.rotation {
            Rotation::North => mask.at(y, x),
            Rotation::East => mask.at(n - 1 - x, y),
            Rotation::South => mask.at(n - 1 - y, n - 1 - x),
            Rotation::West => mask.at(x, n - 1 - y),
        }
    }

    /// Field coordinates of every occupied cell at the current placement.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let n = self.size();
        (0..n).flat_map(move |y| {
            (0..n).filter_map(move |x| {
                if self.cell_at(y, x) {
                    Some((self.row + y as i8, self.col + x as i8))
                } else {
                    None
                }
            })
        })
    }
}
