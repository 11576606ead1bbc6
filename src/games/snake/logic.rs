//! Snake movement, growth, collisions and state changes.

use std::collections::VecDeque;
use std::time::Duration;

use rand::Rng;
use tracing::info;

use super::types::*;
use crate::games::{Flow, Game};
use crate::input::InputSampler;
use crate::sound::Cue;
use crate::surface::PixelSurface;

/// Picks a random cell not covered by `body`, resampling on a hit.
/// `None` once the body fills the grid.
pub fn free_cell<R: Rng>(cfg: &SnakeConfig, body: &VecDeque<Cell>, rng: &mut R) -> Option<Cell> {
    if body.len() >= cfg.capacity() {
        return None;
    }
    loop {
        let c = Cell::new(
            rng.gen_range(0..cfg.grid_width),
            rng.gen_range(0..cfg.grid_height),
        );
        if !body.contains(&c) {
            return Some(c);
        }
    }
}

impl<R: Rng> SnakeGame<R> {
    /// Waits on the start screen; nothing is placed until `init`.
    pub fn new(config: SnakeConfig, rng: R) -> Self {
        Self {
            config,
            state: SnakeState::Start,
            body: VecDeque::new(),
            heading: Direction::Right,
            food: Cell::new(0, 0),
            score: 0,
            rng,
            cue: None,
            screen_drawn: false,
        }
    }

    /// New round: a horizontal snake centred on the grid heading right.
    pub fn init(&mut self) {
        let cx = self.config.grid_width / 2;
        let cy = self.config.grid_height / 2;
        self.body = (0..self.config.initial_length as i32)
            .map(|i| Cell::new(cx - i, cy))
            .collect();
        self.heading = Direction::Right;
        self.score = 0;
        self.state = SnakeState::Running;
        info!("game started, score 0");
        match free_cell(&self.config, &self.body, &mut self.rng) {
            Some(c) => self.food = c,
            None => self.game_over("board full"),
        }
    }

    fn enter(&mut self, state: SnakeState) {
        self.state = state;
        self.screen_drawn = false;
    }

    /// Moves one cell along the heading and applies the collision rules:
    /// walls, then own body, then food.
    pub fn advance(&mut self) {
        let Some(&old_tail) = self.body.back() else {
            return;
        };
        let head = self.body[0].step(self.heading);
        self.body.pop_back();
        self.body.push_front(head);

        if !self.config.contains(head) {
            self.game_over("hit the wall");
            return;
        }
        if self.body.iter().skip(1).any(|&c| c == head) {
            self.game_over("ran into itself");
            return;
        }
        if head == self.food {
            if self.body.len() < self.config.capacity() {
                self.body.push_back(old_tail);
            }
            self.score += self.config.food_score;
            self.cue = Some(Cue::Score);
            info!(score = self.score, length = self.body.len(), "ate");
            match free_cell(&self.config, &self.body, &mut self.rng) {
                Some(c) => self.food = c,
                None => self.game_over("board full"),
            }
        }
    }

    fn game_over(&mut self, why: &str) {
        self.enter(SnakeState::GameOver);
        self.cue = Some(Cue::Crash);
        info!(score = self.score, "game over ({why}), final score {}", self.score);
    }

    /// Draw the current static screen once, then hold it.
    fn draw_once(&mut self) -> Flow {
        if self.screen_drawn {
            Flow::Hold
        } else {
            self.screen_drawn = true;
            Flow::Render
        }
    }
}

impl<R: Rng> Game for SnakeGame<R> {
    fn tick(&mut self, input: &InputSampler) -> Flow {
        if input.just_pressed(self.config.quit) {
            return Flow::Quit;
        }
        match self.state {
            SnakeState::Start => {
                if input.just_pressed(self.config.start_buttons()) {
                    self.init();
                    if self.state == SnakeState::Running {
                        return Flow::Render;
                    }
                }
                self.draw_once()
            }
            SnakeState::Running => {
                if input.just_pressed(self.config.turn_left) {
                    self.heading = self.heading.turn_left();
                }
                if input.just_pressed(self.config.turn_right) {
                    self.heading = self.heading.turn_right();
                }
                self.advance();
                if self.state == SnakeState::Running {
                    Flow::Render
                } else {
                    // The crash frame is never drawn; the last board stays up.
                    Flow::Hold
                }
            }
            SnakeState::GameOver => {
                if input.just_pressed(self.config.start_buttons()) {
                    self.enter(SnakeState::Start);
                }
                self.draw_once()
            }
        }
    }

    fn render(&self, surface: &mut PixelSurface) {
        self.draw(surface);
    }

    fn tick_period(&self) -> Duration {
        self.config.tick_period(self.score)
    }

    fn take_cue(&mut self) -> Option<Cue> {
        self.cue.take()
    }
}
