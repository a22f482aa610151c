//! Collision and wall-kick resolver tests.

use blockfall::core::{fits, Board, Piece};
use blockfall::types::{PieceKind, Rotation, FIELD_HEIGHT, FIELD_WIDTH};

#[test]
fn piece_fits_in_an_open_field() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        let mut piece = Piece::spawn(kind);
        assert!(fits(&board, &mut piece, false), "{:?}", kind);
    }
}

#[test]
fn rows_above_the_field_are_not_collisions() {
    let board = Board::new();
    let mut piece = Piece::spawn(PieceKind::I);
    piece.row = -3;
    assert!(fits(&board, &mut piece, false));
}

#[test]
fn walls_and_floor_reject_plain_moves_without_mutation() {
    let board = Board::new();

    // T's left occupied column pokes past the left wall at col -1.
    let mut piece = Piece::spawn(PieceKind::T);
    piece.col = -1;
    let before = piece;
    assert!(!fits(&board, &mut piece, false));
    assert_eq!(piece, before);

    // O's bottom occupied row lands one past the floor.
    let mut low = Piece::spawn(PieceKind::O);
    low.row = FIELD_HEIGHT as i8 - 2;
    let before = low;
    assert!(!fits(&board, &mut low, false));
    assert_eq!(low, before);
}

#[test]
fn occupied_cell_rejects_plain_move() {
    let mut board = Board::new();
    let mut piece = Piece::spawn(PieceKind::O);
    piece.row = 5; // occupied cells on rows 6 and 7
    board.set(6, piece.col + 1, Some(PieceKind::Z));

    let before = piece;
    assert!(!fits(&board, &mut piece, false));
    assert_eq!(piece, before);
}

#[test]
fn wall_kick_shifts_one_off_the_left_wall() {
    let board = Board::new();
    // Vertical I whose occupied column hugs the left wall; rotated, the
    // horizontal row would reach col -1.
    let mut piece = Piece::spawn(PieceKind::I);
    piece.row = 5;
    piece.col = -1;
    piece.rotation = Rotation::East;

    assert!(fits(&board, &mut piece, true));
    assert_eq!((piece.row, piece.col), (5, 0));
    assert_eq!(piece.rotation, Rotation::East);
}

#[test]
fn wall_kick_shifts_one_off_the_right_wall() {
    let board = Board::new();
    let mut piece = Piece::spawn(PieceKind::I);
    piece.row = 5;
    piece.col = FIELD_WIDTH as i8 - 3; // occupied column at the last col
    piece.rotation = Rotation::East; // horizontal row now pokes past the wall

    assert!(fits(&board, &mut piece, true));
    assert_eq!(piece.col, FIELD_WIDTH as i8 - 4);
}

#[test]
fn floor_kick_shifts_one_up() {
    let board = Board::new();
    // T rotated to South gains a cell on local row 2; at row H-2 that cell
    // is one past the floor while everything else is in bounds.
    let mut piece = Piece::spawn(PieceKind::T);
    piece.row = FIELD_HEIGHT as i8 - 2;
    piece.col = 4;
    piece.rotation = Rotation::South;

    assert!(fits(&board, &mut piece, true));
    assert_eq!(piece.row, FIELD_HEIGHT as i8 - 3);
    assert_eq!(piece.col, 4);
}

#[test]
fn kick_is_not_attempted_on_block_collisions() {
    let mut board = Board::new();
    let mut piece = Piece::spawn(PieceKind::I);
    piece.row = 5;
    piece.col = -1;
    piece.rotation = Rotation::East;
    // The rotated row itself overlaps locked material: hard failure, even
    // though a border violation is also present.
    board.set(7, 1, Some(PieceKind::J));

    let before = piece;
    assert!(!fits(&board, &mut piece, true));
    assert_eq!(piece, before);
}

#[test]
fn failed_kick_restores_position() {
    let mut board = Board::new();
    let mut piece = Piece::spawn(PieceKind::I);
    piece.row = 5;
    piece.col = -1;
    piece.rotation = Rotation::East;
    // The kicked position is blocked too.
    board.set(7, 3, Some(PieceKind::J));

    let before = piece;
    assert!(!fits(&board, &mut piece, true));
    assert_eq!(piece, before);
}
