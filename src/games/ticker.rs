//! A single hex digit walking across a row of six display slots.
//!
//! The digit comes from the level of SW0–SW3 and follows the switches
//! live; KEY1 reverses the walk on its press edge.

use std::time::Duration;

use crate::color::Rgb565;
use crate::games::{Flow, Game};
use crate::input::{Buttons, InputSampler};
use crate::raster::{self, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::surface::PixelSurface;

pub const SLOTS: i32 = 6;
pub const TICK_PERIOD: Duration = Duration::from_millis(400);
pub const QUIT_BUTTON: Buttons = Buttons::KEY0;
pub const REVERSE_BUTTON: Buttons = Buttons::KEY1;

const DIGIT_MASK: u32 = 0xF;
const GLYPH_SCALE: i32 = 8;
const SLOT_MARGIN: i32 = 4;

#[derive(Clone, Debug)]
pub struct TickerGame {
    /// Slot shown this tick. Slot 0 is the rightmost, like HEX0 on the
    /// board.
    pub position: i32,
    /// Slot the next tick will show.
    pub next_position: i32,
    /// +1 walks leftwards, -1 rightwards.
    pub direction: i32,
    pub digit: u8,
}

impl Default for TickerGame {
    fn default() -> Self {
        Self::new()
    }
}

impl TickerGame {
    pub fn new() -> Self {
        Self {
            position: 0,
            next_position: 0,
            direction: 1,
            digit: 0,
        }
    }

    fn slot_bounds(slot: i32, width: i32) -> (i32, i32) {
        let slot_w = width / SLOTS;
        let left = width - (slot + 1) * slot_w;
        (left, left + slot_w)
    }
}

impl Game for TickerGame {
    fn tick(&mut self, input: &InputSampler) -> Flow {
        if input.just_pressed(QUIT_BUTTON) {
            return Flow::Quit;
        }
        self.digit = (input.switches() & DIGIT_MASK) as u8;
        if input.just_pressed(REVERSE_BUTTON) {
            self.direction = -self.direction;
            tracing::debug!(direction = self.direction, "reversed");
        }
        self.position = self.next_position;
        self.next_position = (self.position + self.direction).rem_euclid(SLOTS);
        Flow::Render
    }

    fn render(&self, s: &mut PixelSurface) {
        let (w, h) = (s.width() as i32, s.height() as i32);
        s.fill(Rgb565::BLACK);

        let glyph_w = GLYPH_WIDTH * GLYPH_SCALE;
        let glyph_h = GLYPH_HEIGHT * GLYPH_SCALE;
        let top = (h - glyph_h) / 2;
        for slot in 0..SLOTS {
            let (left, right) = Self::slot_bounds(slot, w);
            raster::rect_outline(
                s,
                left + SLOT_MARGIN,
                top - SLOT_MARGIN * 2,
                right - SLOT_MARGIN,
                top + glyph_h + SLOT_MARGIN * 2,
                Rgb565::GRAY,
            );
        }

        let (left, right) = Self::slot_bounds(self.position, w);
        let x = left + (right - left - glyph_w) / 2;
        raster::glyph_digit(s, self.digit, x, top, Rgb565::RED, GLYPH_SCALE);
    }

    fn tick_period(&self) -> Duration {
        TICK_PERIOD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(b: Buttons) -> InputSampler {
        let mut s = InputSampler::new();
        s.sample(b);
        s
    }

    #[test]
    fn walks_and_wraps() {
        let mut t = TickerGame::new();
        let idle = InputSampler::new();
        for want in [0, 1, 2, 3, 4, 5, 0] {
            assert_eq!(t.tick(&idle), Flow::Render);
            assert_eq!(t.position, want);
        }
    }

    #[test]
    fn reverse_on_press_edge_only() {
        let mut t = TickerGame::new();
        let mut s = InputSampler::new();
        s.sample(REVERSE_BUTTON);
        t.tick(&s);
        assert_eq!(t.position, 0);
        s.commit();

        // Still held: no second reversal.
        s.sample(REVERSE_BUTTON);
        t.tick(&s);
        assert_eq!(t.position, 5);
        s.commit();
        s.sample(REVERSE_BUTTON);
        t.tick(&s);
        assert_eq!(t.position, 4);
    }

    #[test]
    fn digit_follows_low_switches() {
        let mut t = TickerGame::new();
        let sw = Buttons::switch(0) | Buttons::switch(2) | Buttons::switch(3) | Buttons::switch(4);
        t.tick(&input(sw));
        assert_eq!(t.digit, 0xD);
    }

    #[test]
    fn quit() {
        let mut t = TickerGame::new();
        assert_eq!(t.tick(&input(QUIT_BUTTON)), Flow::Quit);
        assert_eq!(t.position, 0);
    }

    #[test]
    fn first_frame_shows_the_starting_slot() {
        let mut t = TickerGame::new();
        t.tick(&InputSampler::new());
        let mut s = PixelSurface::board();
        t.render(&mut s);
        let top = (240 - GLYPH_HEIGHT * GLYPH_SCALE) / 2;
        // Digit 0 has a lit top-left cell; slot 0 starts at x=267.
        let x = 267 + (53 - GLYPH_WIDTH * GLYPH_SCALE) / 2;
        assert_eq!(s.get(x, top), Some(Rgb565::RED));
    }

    #[test]
    fn digit_lands_in_its_slot() {
        let mut t = TickerGame::new();
        t.digit = 8;
        let mut s = PixelSurface::board();

        t.render(&mut s);
        // Slot 0 spans x 267..320; "8" has a full top row.
        let top = (240 - GLYPH_HEIGHT * GLYPH_SCALE) / 2;
        let x = 267 + (53 - GLYPH_WIDTH * GLYPH_SCALE) / 2;
        assert_eq!(s.get(x, top), Some(Rgb565::RED));
        assert_eq!(s.get(x - 53, top), Some(Rgb565::BLACK));

        t.position = 1;
        t.render(&mut s);
        assert_eq!(s.get(x, top), Some(Rgb565::BLACK));
        assert_eq!(s.get(x - 53, top), Some(Rgb565::RED));
    }
}
