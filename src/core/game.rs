//! Game state machine.
//!
//! `Game` owns the board and the single live piece and drives the
//! spawn -> fall -> lock -> clear -> spawn cycle. All movement goes through
//! the collision resolver; a rejected move is a normal outcome and is
//! silently absorbed. The only terminal state is game over (quit is handled
//! by the outer loop).

use crate::core::board::Board;
use crate::core::fit::fits;
use crate::core::piece::Piece;
use crate::core::rng::SimpleRng;
use crate::types::{GameAction, GRAVITY_TICKS};

/// Complete game state, owned exclusively by the loop that ticks it.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    active: Option<Piece>,
    rng: SimpleRng,
    tick_count: u32,
    lines: u32,
    started: bool,
    game_over: bool,
}

impl Game {
    /// Create a new game with the given RNG seed.
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            rng: SimpleRng::new(seed),
            tick_count: 0,
            lines: 0,
            started: false,
            game_over: false,
        }
    }

    /// Build a game from an explicit board and live piece (test/bench
    /// scaffolding for mid-game scenarios).
    pub fn with_parts(board: Board, active: Piece, seed: u32) -> Self {
        Self {
            board,
            active: Some(active),
            rng: SimpleRng::new(seed),
            tick_count: 0,
            lines: 0,
            started: true,
            game_over: false,
        }
    }

    /// Start the game and spawn the first piece.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_piece();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Total rows cleared this game.
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    /// Advance one fixed tick. Gravity forces a downward move every
    /// `GRAVITY_TICKS`; when that move fails the piece locks.
    pub fn tick(&mut self) {
        if !self.started || self.game_over {
            return;
        }
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.tick_count % GRAVITY_TICKS == 0 && !self.try_move(1, 0) {
            self.lock_active();
        }
    }

    /// Apply one player action. Rejected moves are dropped without effect.
    pub fn apply_action(&mut self, action: GameAction) {
        if !self.started || self.game_over {
            return;
        }
        match action {
            GameAction::MoveLeft => {
                self.try_move(0, -1);
            }
            GameAction::MoveRight => {
                self.try_move(0, 1);
            }
            GameAction::Rotate => {
                self.try_rotate();
            }
            GameAction::SoftDrop => {
                // A failed soft drop does not lock; only gravity locks.
                self.try_move(1, 0);
            }
        }
    }

    /// Attempt to translate the live piece. Returns whether it moved.
    pub fn try_move(&mut self, drow: i8, dcol: i8) -> bool {
        let Some(mut piece) = self.active else {
            return false;
        };
        piece.row += drow;
        piece.col += dcol;
        if fits(&self.board, &mut piece, false) {
            self.active = Some(piece);
            true
        } else {
            false
        }
    }

    /// Attempt a clockwise rotation with the one-cell wall kick. On failure
    /// the live piece keeps its exact prior position and rotation.
    pub fn try_rotate(&mut self) -> bool {
        let Some(mut piece) = self.active else {
            return false;
        };
        piece.rotation = piece.rotation.rotate_cw();
        if fits(&self.board, &mut piece, true) {
            self.active = Some(piece);
            true
        } else {
            false
        }
    }

    /// Draw a uniform-random piece at the spawn placement. A spawn landing
    /// on locked material (within the visible field) ends the game.
    pub fn spawn_piece(&mut self) -> bool {
        let piece = Piece::spawn(self.rng.next_kind());
        let blocked = piece
            .occupied_cells()
            .any(|(row, col)| row >= 0 && self.board.is_occupied(row, col));
        if blocked {
            self.active = None;
            self.game_over = true;
            return false;
        }
        self.active = Some(piece);
        true
    }

    /// Fuse the live piece into the board, clear full rows, respawn.
    ///
    /// A piece that still has cells above the field when it can no longer
    /// fall is a top-out: the game ends and the board is left untouched.
    fn lock_active(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        if piece.occupied_cells().any(|(row, _)| row < 0) {
            self.game_over = true;
            return;
        }

        for (row, col) in piece.occupied_cells() {
            self.board.embed(row, col, piece.kind);
        }

        let cleared = self.board.clear_full_rows();
        self.lines += cleared.len() as u32;

        self.spawn_piece();
    }
}
