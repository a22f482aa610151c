//! GameView: maps game state into a terminal framebuffer.
//!
//! This module is pure (no I/O) and can be unit-tested.

use crate::core::Game;
use crate::term::fb::{FrameBuffer, Glyph, GlyphStyle, Rgb};
use crate::types::{PieceKind, FIELD_HEIGHT, FIELD_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal view of the playing field.
pub struct GameView {
    /// Field cell width in terminal columns.
    cell_w: u16,
    /// Field cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self { cell_w: 2, cell_h: 1 }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Read-only with respect to the game; callers reuse one framebuffer
    /// across frames and only pay a resize when the terminal changes.
    pub fn render_into(&self, game: &Game, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let field_px_w = (FIELD_WIDTH as u16) * self.cell_w;
        let field_px_h = (FIELD_HEIGHT as u16) * self.cell_h;
        let frame_w = field_px_w + 2;
        let frame_h = field_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = GlyphStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(30, 30, 40),
            bold: false,
            dim: false,
        };
        let border = GlyphStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        fb.fill_rect(start_x + 1, start_y + 1, field_px_w, field_px_h, ' ', bg);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Locked field cells.
        for row in 0..FIELD_HEIGHT as i8 {
            for col in 0..FIELD_WIDTH as i8 {
                match game.board().get(row, col) {
                    Some(Some(kind)) => {
                        self.draw_field_cell(fb, start_x, start_y, col as u16, row as u16, kind);
                    }
                    _ => {
                        self.draw_empty_cell(fb, start_x, start_y, col as u16, row as u16);
                    }
                }
            }
        }

        // Live piece overlay; cells still above the field are clipped.
        if let Some(piece) = game.active() {
            for (row, col) in piece.occupied_cells() {
                if row >= 0
                    && row < FIELD_HEIGHT as i8
                    && col >= 0
                    && col < FIELD_WIDTH as i8
                {
                    self.draw_field_cell(fb, start_x, start_y, col as u16, row as u16, piece.kind);
                }
            }
        }

        self.draw_side_panel(fb, game, viewport, start_x, start_y, frame_w);

        if game.game_over() {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game: &Game, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: GlyphStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = GlyphStyle {
            fg: Rgb::new(90, 90, 100),
            bg: Rgb::new(30, 30, 40),
            bold: false,
            dim: true,
        };
        self.fill_cell_rect(fb, start_x, start_y, x, y, '·', style);
    }

    fn draw_field_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        kind: PieceKind,
    ) {
        let fg = match kind {
            PieceKind::I => Rgb::new(80, 220, 220),
            PieceKind::O => Rgb::new(240, 220, 80),
            PieceKind::T => Rgb::new(200, 120, 220),
            PieceKind::S => Rgb::new(100, 220, 120),
            PieceKind::Z => Rgb::new(220, 80, 80),
            PieceKind::J => Rgb::new(80, 120, 220),
            PieceKind::L => Rgb::new(255, 165, 0),
        };
        let style = GlyphStyle {
            fg,
            bg: Rgb::new(30, 30, 40),
            bold: true,
            dim: false,
        };
        self.fill_cell_rect(fb, start_x, start_y, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: GlyphStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        game: &Game,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 8 {
            return;
        }

        let label = GlyphStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = GlyphStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        fb.put_str(panel_x, start_y, "LINES", label);
        fb.put_str(panel_x, start_y + 1, &game.lines().to_string(), value);

        let dim = GlyphStyle { dim: true, ..value };
        fb.put_str(panel_x, start_y + 3, "a/d move", dim);
        fb.put_str(panel_x, start_y + 4, "w rotate", dim);
        fb.put_str(panel_x, start_y + 5, "s drop", dim);
        fb.put_str(panel_x, start_y + 6, "q quit", dim);
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = GlyphStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_str(x, mid_y, text, style);
    }
}
