use super::types::{Cell, SnakeGame, SnakeState};
use crate::color::Rgb565;
use crate::raster::{self, GLYPH_HEIGHT, SCORE_SCALE};
use crate::surface::PixelSurface;

// Game-over panel size in cells.
const PANEL_COLS: i32 = 12;
const PANEL_ROWS: i32 = 5;

impl<R> SnakeGame<R> {
    pub fn draw(&self, s: &mut PixelSurface) {
        match self.state {
            SnakeState::Start => self.draw_start(s),
            SnakeState::Running => self.draw_board(s),
            // Drawn over the last board, which is left in place.
            SnakeState::GameOver => self.draw_game_over(s),
        }
    }

    /// One grid cell, leaving a one-pixel seam on the right and bottom.
    fn draw_cell(&self, s: &mut PixelSurface, c: Cell, color: Rgb565) {
        let size = self.config.cell_size;
        let (x, y) = (c.x * size, c.y * size);
        raster::rect_filled(s, x, y, x + size - 1, y + size - 1, color);
    }

    fn draw_start(&self, s: &mut PixelSurface) {
        let (cx, cy) = (self.config.grid_width / 2, self.config.grid_height / 2);
        s.fill(Rgb565::BOARD_BG);
        for dx in -2..=2 {
            let color = if dx == -2 { Rgb565::LIME_GREEN } else { Rgb565::GREEN };
            self.draw_cell(s, Cell::new(cx + dx, cy - 2), color);
        }
        self.draw_cell(s, Cell::new(cx, cy), Rgb565::WHITE);
    }

    fn draw_board(&self, s: &mut PixelSurface) {
        s.fill(Rgb565::BOARD_BG);
        self.draw_cell(s, self.food, Rgb565::RED);
        for (i, &c) in self.body.iter().enumerate().rev() {
            let color = if i == 0 { Rgb565::LIME_GREEN } else { Rgb565::GREEN };
            self.draw_cell(s, c, color);
        }
    }

    fn draw_game_over(&self, s: &mut PixelSurface) {
        let size = self.config.cell_size;
        let (cx, cy) = (self.config.grid_width / 2, self.config.grid_height / 2);
        let (left, top) = ((cx - PANEL_COLS / 2) * size, (cy - PANEL_ROWS / 2) * size);
        raster::rect_filled(
            s,
            left,
            top,
            left + PANEL_COLS * size,
            top + PANEL_ROWS * size,
            Rgb565::PANEL_BG,
        );
        for dx in (-4..=4).step_by(2) {
            self.draw_cell(s, Cell::new(cx + dx, cy - 1), Rgb565::RED);
        }
        let text_top = (cy + 1) * size - GLYPH_HEIGHT * SCORE_SCALE / 2;
        raster::text_score(s, self.score, (cx + 4) * size + size - 1, text_top, Rgb565::WHITE);
    }
}
