//! Rasterizer demo: a fixed drawing sequence revealed one step at a time,
//! then left on screen until quit.

use std::time::Duration;

use tracing::info;

use crate::color::{NamedColor, Rgb565};
use crate::games::{Flow, Game};
use crate::input::{Buttons, InputSampler};
use crate::raster;
use crate::surface::PixelSurface;

pub const TICK_PERIOD: Duration = Duration::from_millis(100);
/// Two seconds per step.
pub const TICKS_PER_STEP: u32 = 20;
pub const QUIT_BUTTON: Buttons = Buttons::KEY0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Background,
    Circle,
    Bar,
    Diagonal,
    ClippedBox,
}

impl Step {
    pub const ALL: [Step; 5] = [
        Self::Background,
        Self::Circle,
        Self::Bar,
        Self::Diagonal,
        Self::ClippedBox,
    ];

    fn draw(self, s: &mut PixelSurface, background: Rgb565) {
        match self {
            Self::Background => s.fill(background),
            Self::Circle => raster::circle_outline(s, 160, 120, 100, Rgb565::PURPLE),
            Self::Bar => raster::rect_filled(s, 20, 180, 300, 220, Rgb565::CYAN),
            Self::Diagonal => raster::line(s, 10, 10, 310, 230, Rgb565::WHITE),
            // Mostly off-screen; only the clipped corner shows.
            Self::ClippedBox => raster::rect_outline(s, -50, -50, 10, 10, Rgb565::RED),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ShowcaseGame {
    pub background: Rgb565,
    /// Number of steps on screen.
    pub shown: usize,
    ticks: u32,
}

impl ShowcaseGame {
    pub fn new(background: NamedColor) -> Self {
        Self {
            background: background.into(),
            shown: 0,
            ticks: 0,
        }
    }

    pub fn finished(&self) -> bool {
        self.shown == Step::ALL.len()
    }
}

impl Game for ShowcaseGame {
    fn tick(&mut self, input: &InputSampler) -> Flow {
        if input.just_pressed(QUIT_BUTTON) {
            return Flow::Quit;
        }
        if self.finished() {
            return Flow::Hold;
        }
        let due = self.ticks % TICKS_PER_STEP == 0;
        self.ticks += 1;
        if !due {
            return Flow::Hold;
        }
        self.shown += 1;
        info!(step = ?Step::ALL[self.shown - 1], "showcase");
        Flow::Render
    }

    fn render(&self, s: &mut PixelSurface) {
        for step in &Step::ALL[..self.shown] {
            step.draw(s, self.background);
        }
    }

    fn tick_period(&self) -> Duration {
        TICK_PERIOD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_step_every_two_seconds_then_hold() {
        let mut g = ShowcaseGame::new(NamedColor::Gray);
        let idle = InputSampler::new();
        let mut renders = Vec::new();
        for tick in 0..200u32 {
            if g.tick(&idle) == Flow::Render {
                renders.push(tick);
            }
        }
        assert_eq!(renders, vec![0, 20, 40, 60, 80]);
        assert!(g.finished());
    }

    #[test]
    fn final_picture() {
        let mut g = ShowcaseGame::new(NamedColor::Gray);
        g.shown = Step::ALL.len();
        let mut s = PixelSurface::board();
        g.render(&mut s);

        assert_eq!(s.get(160, 20), Some(Rgb565::PURPLE));
        assert_eq!(s.get(100, 150), Some(Rgb565::GRAY));
        assert_eq!(s.get(25, 200), Some(Rgb565::CYAN));
        assert_eq!(s.get(310, 230), Some(Rgb565::WHITE));
        // The box corner lands on the line's first pixel and wins.
        assert_eq!(s.get(10, 10), Some(Rgb565::RED));
        assert_eq!(s.get(0, 10), Some(Rgb565::RED));
        assert_eq!(s.get(10, 0), Some(Rgb565::RED));
        assert_eq!(s.get(5, 5), Some(Rgb565::GRAY));
    }

    #[test]
    fn background_follows_the_chosen_color() {
        let mut g = ShowcaseGame::new(NamedColor::Navy);
        g.tick(&InputSampler::new());
        let mut s = PixelSurface::board();
        g.render(&mut s);
        assert_eq!(s.get(319, 239), Some(Rgb565::NAVY));
    }

    #[test]
    fn quit() {
        let mut g = ShowcaseGame::new(NamedColor::Gray);
        let mut input = InputSampler::new();
        input.sample(QUIT_BUTTON);
        assert_eq!(g.tick(&input), Flow::Quit);
    }
}
