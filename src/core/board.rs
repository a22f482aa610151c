//! Board module - the playing field store.
//!
//! A flat row-major array of cells with explicit bound checks; there is no
//! border sentinel ring. Coordinates are (row, col) with row 0 at the top.
//! The live piece is never written here until it locks.

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, FIELD_HEIGHT, FIELD_WIDTH};

const FIELD_SIZE: usize = (FIELD_WIDTH as usize) * (FIELD_HEIGHT as usize);

/// The playing field.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major (row * WIDTH + col).
    cells: [Cell; FIELD_SIZE],
}

impl Board {
    /// Create a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [None; FIELD_SIZE],
        }
    }

    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= FIELD_HEIGHT as i8 || col < 0 || col >= FIELD_WIDTH as i8 {
            return None;
        }
        Some((row as usize) * (FIELD_WIDTH as usize) + (col as usize))
    }

    pub fn width(&self) -> u8 {
        FIELD_WIDTH
    }

    pub fn height(&self) -> u8 {
        FIELD_HEIGHT
    }

    /// Cell at (row, col); `None` if out of bounds.
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Write a cell. Returns false if out of bounds.
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and occupied.
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Every column of `row` holds locked material.
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= FIELD_HEIGHT as usize {
            return false;
        }
        let start = row * FIELD_WIDTH as usize;
        let end = start + FIELD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Clear `row` and shift every row above it down one, leaving the top
    /// row empty.
    pub fn clear_row(&mut self, row: usize) {
        if row >= FIELD_HEIGHT as usize {
            return;
        }

        let width = FIELD_WIDTH as usize;
        for dst in (1..=row).rev() {
            let src_start = (dst - 1) * width;
            self.cells.copy_within(src_start..src_start + width, dst * width);
        }
        for cell in &mut self.cells[0..width] {
            *cell = None;
        }
    }

    /// Clear every full row, compacting downward, and return the cleared row
    /// indices in the order they were found.
    ///
    /// Scans top to bottom and re-checks the same index after a shift, so a
    /// full row shifted into place is cleared in the same pass. A single
    /// lock can complete at most 4 rows.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, 4> {
        let mut cleared = ArrayVec::new();
        for row in 0..FIELD_HEIGHT as usize {
            while self.is_row_full(row) {
                self.clear_row(row);
                if !cleared.is_full() {
                    cleared.push(row);
                }
            }
        }
        cleared
    }

    /// Write a locked piece cell. Locking only happens after a failed
    /// downward move, so the target cells are always empty; this just
    /// stamps the kind.
    pub fn embed(&mut self, row: i8, col: i8, kind: PieceKind) -> bool {
        self.set(row, col, Some(kind))
    }

    /// Read-only view of the flat cell array.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_bounds() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(0, 11), Some(11));
        assert_eq!(Board::index(1, 0), Some(12));
        assert_eq!(Board::index(19, 11), Some(FIELD_SIZE - 1));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(0, -1), None);
        assert_eq!(Board::index(20, 0), None);
        assert_eq!(Board::index(0, 12), None);
    }

    #[test]
    fn set_get_roundtrip() {
        let mut board = Board::new();
        assert!(board.set(5, 3, Some(PieceKind::T)));
        assert_eq!(board.get(5, 3), Some(Some(PieceKind::T)));
        assert!(board.set(5, 3, None));
        assert_eq!(board.get(5, 3), Some(None));
        assert!(!board.set(-1, 0, Some(PieceKind::I)));
    }

    #[test]
    fn row_full_detection() {
        let mut board = Board::new();
        assert!(!board.is_row_full(19));
        for col in 0..FIELD_WIDTH as i8 {
            board.set(19, col, Some(PieceKind::O));
        }
        assert!(board.is_row_full(19));
        board.set(19, 0, None);
        assert!(!board.is_row_full(19));
    }

    #[test]
    fn clear_row_shifts_everything_above() {
        let mut board = Board::new();
        board.set(3, 2, Some(PieceKind::I));
        board.set(4, 7, Some(PieceKind::J));
        board.clear_row(5);

        assert_eq!(board.get(4, 2), Some(Some(PieceKind::I)));
        assert_eq!(board.get(5, 7), Some(Some(PieceKind::J)));
        assert_eq!(board.get(3, 2), Some(None));
        assert_eq!(board.get(4, 7), Some(None));
    }

    #[test]
    fn clear_full_rows_rechecks_shifted_row() {
        let mut board = Board::new();
        // Two adjacent full rows: after the first clear, the second shifts
        // into the same index and must also be cleared.
        for col in 0..FIELD_WIDTH as i8 {
            board.set(18, col, Some(PieceKind::S));
            board.set(19, col, Some(PieceKind::Z));
        }
        board.set(17, 4, Some(PieceKind::T));

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.len(), 2);
        assert_eq!(board.get(19, 4), Some(Some(PieceKind::T)));
        assert!(!board.is_row_full(18));
        assert!(!board.is_row_full(19));
    }

    #[test]
    fn clear_resets_every_cell() {
        let mut board = Board::new();
        for col in 0..FIELD_WIDTH as i8 {
            board.set(10, col, Some(PieceKind::L));
        }
        board.clear();
        assert!(board.cells().iter().all(|cell| cell.is_none()));
    }
}
