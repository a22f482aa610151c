//! Collision and wall-kick resolver.
//!
//! `fits` answers whether a candidate placement is legal. For plain moves it
//! is a pure check. For rotations it additionally attempts a single one-cell
//! corrective shift (wall kick) when the only collisions were with the field
//! border, reverting the shift if the kicked placement still fails.

use crate::core::board::Board;
use crate::core::piece::Piece;
use crate::types::{FIELD_HEIGHT, FIELD_WIDTH};

/// Which border a rotated piece collided with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BorderSide {
    Left,
    Right,
    Floor,
}

impl BorderSide {
    /// One-cell shift away from this border: (row delta, col delta).
    fn kick(self) -> (i8, i8) {
        match self {
            BorderSide::Left => (0, 1),
            BorderSide::Right => (0, -1),
            BorderSide::Floor => (-1, 0),
        }
    }
}

/// Classify an out-of-bounds cell by the bound it violated.
///
/// Rows above the field (`row < 0`) are not violations: the piece is still
/// entering. At these field proportions a single cell cannot violate two
/// bounds; floor takes precedence anyway.
fn border_hit(row: i8, col: i8) -> Option<BorderSide> {
    if row >= FIELD_HEIGHT as i8 {
        Some(BorderSide::Floor)
    } else if col >= FIELD_WIDTH as i8 {
        Some(BorderSide::Right)
    } else if col < 0 {
        Some(BorderSide::Left)
    } else {
        None
    }
}

/// Every occupied cell is inside the side/floor bounds and lands on an empty
/// board cell (cells above the field only need to be horizontally in range).
fn placement_clear(board: &Board, piece: &Piece) -> bool {
    piece.occupied_cells().all(|(row, col)| {
        border_hit(row, col).is_none() && !board.is_occupied(row, col)
    })
}

/// Check whether the piece fits at its current placement.
///
/// With `rotated = false` this is a pure bounds/occupancy check. With
/// `rotated = true` a border-only collision triggers a one-cell kick away
/// from that border; the shift is kept on success and reverted on failure.
/// An overlap with locked material is a hard failure either way and never
/// kicks. On `false` the piece's position is unchanged.
pub fn fits(board: &Board, piece: &mut Piece, rotated: bool) -> bool {
    if !rotated {
        return placement_clear(board, piece);
    }

    let mut side = None;
    for (row, col) in piece.occupied_cells() {
        match border_hit(row, col) {
            Some(hit) => side = Some(hit),
            None => {
                if board.is_occupied(row, col) {
                    return false;
                }
            }
        }
    }

    let Some(side) = side else {
        return true;
    };

    let (drow, dcol) = side.kick();
    piece.row += drow;
    piece.col += dcol;
    if placement_clear(board, piece) {
        true
    } else {
        piece.row -= drow;
        piece.col -= dcol;
        false
    }
}
