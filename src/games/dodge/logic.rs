//! Physics, scoring and the RUNNING / GAME_OVER machine.

use std::time::Duration;

use rand::Rng;
use tracing::info;

use super::types::{Avatar, DodgeConfig, DodgeGame, DodgeState, Obstacle};
use crate::games::{Flow, Game};
use crate::input::InputSampler;
use crate::sound::Cue;
use crate::surface::PixelSurface;

/// The bird's circle pokes above the top or below the bottom edge.
pub fn out_of_bounds(cfg: &DodgeConfig, y: f64) -> bool {
    let r = cfg.radius as f64;
    y - r < 0.0 || y + r > cfg.height as f64
}

/// A bird at `(x, y)` overlaps the barrier columns and is not wholly
/// inside the gap. Touching the gap edge exactly is allowed.
pub fn collides(cfg: &DodgeConfig, x: i32, y: f64, obstacle: &Obstacle) -> bool {
    let overlaps_x = x + cfg.radius > obstacle.x && x - cfg.radius < obstacle.x + cfg.obstacle_width;
    if !overlaps_x {
        return false;
    }
    let r = cfg.radius as f64;
    y - r < obstacle.gap_y as f64 || y + r > (obstacle.gap_y + cfg.gap_height) as f64
}

impl<R: Rng> DodgeGame<R> {
    pub fn new(config: DodgeConfig, rng: R) -> Self {
        let mut game = Self {
            config,
            state: DodgeState::Running,
            avatars: Vec::new(),
            obstacles: Vec::new(),
            score: 0,
            rng,
            cue: None,
        };
        game.reset();
        game
    }

    /// Fresh round: birds mid-screen at rest, barriers queued off the right
    /// edge, score zero.
    pub fn reset(&mut self) {
        let mid = self.config.height as f64 / 2.0;
        self.avatars = self
            .config
            .avatars
            .iter()
            .map(|_| Avatar {
                y: mid,
                velocity_y: 0.0,
                alive: true,
            })
            .collect();

        let first = self.config.width + super::types::OBSTACLE_LEAD;
        self.obstacles = (0..self.config.obstacle_count)
            .map(|i| Obstacle {
                x: first + i as i32 * self.config.spacing,
                gap_y: Self::fresh_gap(&self.config, &mut self.rng),
                scored: false,
            })
            .collect();

        self.score = 0;
        self.state = DodgeState::Running;
        info!(players = self.avatars.len(), "game started, score 0");
    }

    fn fresh_gap(cfg: &DodgeConfig, rng: &mut R) -> i32 {
        rng.gen_range(cfg.gap_range())
    }

    fn tick_running(&mut self, input: &InputSampler) {
        for (avatar, spec) in self.avatars.iter_mut().zip(&self.config.avatars) {
            if avatar.alive && input.just_pressed(spec.jump) {
                avatar.velocity_y = self.config.jump_velocity;
            }
        }
        for avatar in &mut self.avatars {
            avatar.velocity_y += self.config.gravity;
            avatar.y += avatar.velocity_y;
        }

        let line = self.config.score_line();
        let w = self.config.obstacle_width;
        for obstacle in &mut self.obstacles {
            obstacle.x -= self.config.speed;

            if !obstacle.scored && obstacle.x + w < line {
                obstacle.scored = true;
                self.score += 1;
                self.cue = Some(Cue::Score);
                info!(score = self.score, "score");
            }

            if obstacle.x + w < 0 {
                obstacle.x = self.config.width;
                obstacle.gap_y = Self::fresh_gap(&self.config, &mut self.rng);
                obstacle.scored = false;
            }
        }

        for (player, (avatar, spec)) in self.avatars.iter_mut().zip(&self.config.avatars).enumerate() {
            if !avatar.alive {
                continue;
            }
            let hit = out_of_bounds(&self.config, avatar.y)
                || self
                    .obstacles
                    .iter()
                    .any(|o| collides(&self.config, spec.x, avatar.y, o));
            if hit {
                avatar.alive = false;
                info!(player = player + 1, "player down");
            }
        }

        if self.avatars.iter().all(|a| !a.alive) {
            self.state = DodgeState::GameOver;
            self.cue = Some(Cue::Crash);
            info!(score = self.score, "game over, final score {}", self.score);
        }
    }
}

impl<R: Rng> Game for DodgeGame<R> {
    fn tick(&mut self, input: &InputSampler) -> Flow {
        if input.just_pressed(self.config.quit) {
            return Flow::Quit;
        }
        match self.state {
            DodgeState::Running => {
                self.tick_running(input);
                Flow::Render
            }
            DodgeState::GameOver => {
                if input.any_just_pressed(self.config.restart_buttons()) {
                    self.reset();
                    Flow::Render
                } else {
                    Flow::Hold
                }
            }
        }
    }

    fn render(&self, surface: &mut PixelSurface) {
        self.draw(surface);
    }

    fn tick_period(&self) -> Duration {
        self.config.tick_period
    }

    fn take_cue(&mut self) -> Option<Cue> {
        self.cue.take()
    }
}
