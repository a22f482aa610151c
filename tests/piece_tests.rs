//! Piece tests: rotation addressing and spawn placement.

use blockfall::core::{Piece, ShapeMask};
use blockfall::types::{PieceKind, Rotation, FIELD_WIDTH};

fn occupied_locals(piece: &Piece) -> Vec<(u8, u8)> {
    let n = piece.size();
    let mut cells = Vec::new();
    for y in 0..n {
        for x in 0..n {
            if piece.cell_at(y, x) {
                cells.push((y, x));
            }
        }
    }
    cells
}

#[test]
fn rotation_four_cycle_for_every_kind_and_cell() {
    for kind in PieceKind::ALL {
        let mut piece = Piece::spawn(kind);
        let n = piece.size();

        for _ in 0..4 {
            let at_r = |p: &Piece| {
                let mut grid = Vec::new();
                for y in 0..n {
                    for x in 0..n {
                        grid.push(p.cell_at(y, x));
                    }
                }
                grid
            };
            let before = at_r(&piece);

            let mut turned = piece;
            for _ in 0..4 {
                turned.rotation = turned.rotation.rotate_cw();
            }
            assert_eq!(at_r(&turned), before, "{:?} at {:?}", kind, piece.rotation);

            piece.rotation = piece.rotation.rotate_cw();
        }
    }
}

#[test]
fn each_rotation_keeps_four_occupied_cells() {
    for kind in PieceKind::ALL {
        let mut piece = Piece::spawn(kind);
        for _ in 0..4 {
            assert_eq!(occupied_locals(&piece).len(), 4, "{:?}", kind);
            piece.rotation = piece.rotation.rotate_cw();
        }
    }
}

#[test]
fn o_piece_rotation_is_symmetric() {
    // The O mask is centered in its 4x4, so every rotation reads the same.
    let mut piece = Piece::spawn(PieceKind::O);
    let north = occupied_locals(&piece);
    for _ in 0..3 {
        piece.rotation = piece.rotation.rotate_cw();
        assert_eq!(occupied_locals(&piece), north);
    }
}

#[test]
fn one_clockwise_turn_maps_column_to_row() {
    let mut piece = Piece::spawn(PieceKind::I);
    assert_eq!(
        occupied_locals(&piece),
        vec![(0, 2), (1, 2), (2, 2), (3, 2)]
    );
    piece.rotation = Rotation::East;
    assert_eq!(
        occupied_locals(&piece),
        vec![(2, 0), (2, 1), (2, 2), (2, 3)]
    );
}

#[test]
fn spawn_rotation_is_north_and_column_is_centered() {
    for kind in PieceKind::ALL {
        let piece = Piece::spawn(kind);
        assert_eq!(piece.rotation, Rotation::North);
        assert_eq!(piece.col, ((FIELD_WIDTH - piece.size()) / 2) as i8);
    }
}

#[test]
fn spawn_row_comes_from_mask_extent() {
    for kind in PieceKind::ALL {
        let piece = Piece::spawn(kind);
        let mask = ShapeMask::of(kind);
        assert_eq!(piece.row, -(mask.top_occupied_row() as i8), "{:?}", kind);

        // The topmost occupied cell sits exactly on row 0 at spawn.
        let top = piece.occupied_cells().map(|(row, _)| row).min().unwrap();
        assert_eq!(top, 0, "{:?}", kind);
    }
}
