use super::types::{AvatarSpec, DodgeGame, DodgeState, SpriteStyle};
use crate::color::Rgb565;
use crate::raster::{self, GLYPH_HEIGHT, GLYPH_WIDTH, SCORE_GAP, SCORE_SCALE};
use crate::surface::PixelSurface;

// Game-over panel, inset from the screen sides.
const PANEL_INSET: i32 = 50;
const PANEL_TOP: i32 = 100;
const PANEL_BOTTOM: i32 = 140;
const SCORE_MARGIN: i32 = 10;

impl<R> DodgeGame<R> {
    pub fn draw(&self, s: &mut PixelSurface) {
        let cfg = &self.config;
        s.fill(Rgb565::SKY_BLUE);

        for o in &self.obstacles {
            let right = o.x + cfg.obstacle_width;
            raster::rect_filled(s, o.x, 0, right, o.gap_y, Rgb565::GREEN);
            raster::rect_filled(s, o.x, o.gap_y + cfg.gap_height, right, cfg.height, Rgb565::GREEN);
        }

        let over = self.state == DodgeState::GameOver;
        for (avatar, spec) in self.avatars.iter().zip(&cfg.avatars) {
            let color = if avatar.alive && !over { spec.color } else { Rgb565::RED };
            self.draw_bird(s, spec, avatar.y as i32, color);
        }

        if cfg.show_score && !over {
            raster::text_score(s, self.score, cfg.width - SCORE_MARGIN, SCORE_MARGIN, Rgb565::WHITE);
        }

        if over {
            self.draw_game_over(s);
        }
    }

    fn draw_bird(&self, s: &mut PixelSurface, spec: &AvatarSpec, y: i32, color: Rgb565) {
        let r = self.config.radius;
        raster::circle_filled(s, spec.x, y, r, color);
        if self.config.sprite == SpriteStyle::Ringed {
            raster::circle_outline(s, spec.x, y, r, Rgb565::BLACK);
            let (ex, ey) = (spec.x + r / 2, y - r / 2);
            raster::circle_filled(s, ex, ey, (r / 5).max(1), Rgb565::WHITE);
            s.write(ex + 1, ey, Rgb565::BLACK);
        }
    }

    fn draw_game_over(&self, s: &mut PixelSurface) {
        let cfg = &self.config;
        raster::rect_filled(s, PANEL_INSET, PANEL_TOP, cfg.width - PANEL_INSET, PANEL_BOTTOM, Rgb565::GRAY);

        // Birds stay red on top of the panel.
        for (avatar, spec) in self.avatars.iter().zip(&cfg.avatars) {
            self.draw_bird(s, spec, avatar.y as i32, Rgb565::RED);
        }

        if cfg.show_score {
            let digits = self.score.to_string().len() as i32;
            let text_w = digits * GLYPH_WIDTH * SCORE_SCALE + (digits - 1) * SCORE_GAP;
            let text_h = GLYPH_HEIGHT * SCORE_SCALE;
            let right = cfg.width / 2 + text_w / 2;
            let top = (PANEL_TOP + PANEL_BOTTOM) / 2 - text_h / 2;
            raster::text_score(s, self.score, right, top, Rgb565::WHITE);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::color::Rgb565;
    use crate::games::dodge::types::*;
    use crate::surface::PixelSurface;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn game(cfg: DodgeConfig) -> DodgeGame<ChaCha8Rng> {
        let mut g = DodgeGame::new(cfg, ChaCha8Rng::seed_from_u64(1));
        g.obstacles[0] = Obstacle {
            x: 150,
            gap_y: 60,
            scored: false,
        };
        g.obstacles[1].x = 1_000;
        g
    }

    #[test]
    fn running_frame() {
        let g = game(DodgeConfig::classic());
        let mut s = PixelSurface::board();
        g.draw(&mut s);

        assert_eq!(s.get(0, 0), Some(Rgb565::SKY_BLUE));
        assert_eq!(s.get(160, 10), Some(Rgb565::GREEN));
        assert_eq!(s.get(160, 100), Some(Rgb565::SKY_BLUE)); // in the gap
        assert_eq!(s.get(160, 200), Some(Rgb565::GREEN));
        assert_eq!(s.get(BIRD_X_POS, 120), Some(Rgb565::YELLOW));
        // Classic shows no score.
        assert_eq!(s.get(309, 10), Some(Rgb565::SKY_BLUE));
    }

    #[test]
    fn scored_frame_shows_counter() {
        let mut g = game(DodgeConfig::scored());
        g.score = 7;
        let mut s = PixelSurface::board();
        g.draw(&mut s);
        // "7": top row fully lit, right edge at x=309.
        assert_eq!(s.get(309, 10), Some(Rgb565::WHITE));
        assert_eq!(s.get(304, 10), Some(Rgb565::WHITE));
        assert_eq!(s.get(310, 10), Some(Rgb565::SKY_BLUE));
        // Ringed sprite has a dark rim.
        assert_eq!(s.get(BIRD_X_POS + BIRD_RADIUS, 120), Some(Rgb565::BLACK));
    }

    #[test]
    fn game_over_overlay() {
        let mut g = game(DodgeConfig::classic());
        g.state = DodgeState::GameOver;
        g.avatars[0].alive = false;
        let mut s = PixelSurface::board();
        g.draw(&mut s);
        assert_eq!(s.get(200, 105), Some(Rgb565::GRAY));
        assert_eq!(s.get(BIRD_X_POS, 120), Some(Rgb565::RED));
    }
}
