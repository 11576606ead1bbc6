//! Obstacle-dodge ("Flappy") data structures and presets.

use std::ops::RangeInclusive;
use std::time::Duration;

use clap::ValueEnum;

use crate::color::Rgb565;
use crate::input::Buttons;
use crate::sound::Cue;
use crate::surface::{VISIBLE_HEIGHT, VISIBLE_WIDTH};

pub const BIRD_X_POS: i32 = 60;
pub const BIRD_RADIUS: i32 = 10;
pub const GRAVITY: f64 = 0.4;
pub const JUMP_VELOCITY: f64 = -7.0;
/// Shorter hop used by the scored and duel presets.
pub const SHORT_JUMP_VELOCITY: f64 = -6.0;
pub const OBSTACLE_SPEED: i32 = 3;
pub const OBSTACLE_WIDTH: i32 = 50;
pub const GAP_HEIGHT: i32 = 80;
pub const OBSTACLE_SPACING: i32 = 200;
/// Distance the first obstacle starts past the right edge.
pub const OBSTACLE_LEAD: i32 = 100;
pub const GAP_MARGIN: i32 = 30;
pub const OBSTACLE_COUNT: usize = 2;
pub const TICK_PERIOD: Duration = Duration::from_micros(16_666); // ~60 Hz

pub const QUIT_BUTTON: Buttons = Buttons::KEY0;
pub const P1_JUMP: Buttons = Buttons::KEY1;
pub const P2_JUMP: Buttons = Buttons::KEY2;
/// Second bird in the duel preset flies a little ahead of the first.
pub const P2_X_POS: i32 = 110;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    /// One bird, plain sprite, score only on the console.
    Classic,
    /// One bird, shorter hop, ringed sprite and on-screen score.
    Scored,
    /// Two birds on separate buttons.
    Duel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpriteStyle {
    Disc,
    /// Disc with a dark rim and an eye.
    Ringed,
}

/// One player's bird: where it flies and which button makes it jump.
#[derive(Clone, Copy, Debug)]
pub struct AvatarSpec {
    pub x: i32,
    pub jump: Buttons,
    pub color: Rgb565,
}

#[derive(Clone, Debug)]
pub struct DodgeConfig {
    pub width: i32,
    pub height: i32,
    pub avatars: Vec<AvatarSpec>,
    pub radius: i32,
    pub gravity: f64,
    pub jump_velocity: f64,
    pub speed: i32,
    pub obstacle_width: i32,
    pub gap_height: i32,
    pub gap_margin: i32,
    pub spacing: i32,
    pub obstacle_count: usize,
    pub quit: Buttons,
    pub sprite: SpriteStyle,
    pub show_score: bool,
    pub tick_period: Duration,
}

impl DodgeConfig {
    pub fn classic() -> Self {
        Self {
            width: VISIBLE_WIDTH as i32,
            height: VISIBLE_HEIGHT as i32,
            avatars: vec![AvatarSpec {
                x: BIRD_X_POS,
                jump: P1_JUMP,
                color: Rgb565::YELLOW,
            }],
            radius: BIRD_RADIUS,
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            speed: OBSTACLE_SPEED,
            obstacle_width: OBSTACLE_WIDTH,
            gap_height: GAP_HEIGHT,
            gap_margin: GAP_MARGIN,
            spacing: OBSTACLE_SPACING,
            obstacle_count: OBSTACLE_COUNT,
            quit: QUIT_BUTTON,
            sprite: SpriteStyle::Disc,
            show_score: false,
            tick_period: TICK_PERIOD,
        }
    }

    pub fn scored() -> Self {
        Self {
            jump_velocity: SHORT_JUMP_VELOCITY,
            sprite: SpriteStyle::Ringed,
            show_score: true,
            ..Self::classic()
        }
    }

    pub fn duel() -> Self {
        let mut cfg = Self::scored();
        cfg.avatars.push(AvatarSpec {
            x: P2_X_POS,
            jump: P2_JUMP,
            color: Rgb565::CYAN,
        });
        cfg
    }

    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Classic => Self::classic(),
            Variant::Scored => Self::scored(),
            Variant::Duel => Self::duel(),
        }
    }

    /// Where a fresh gap may start so it keeps `gap_margin` clear of both
    /// screen edges. Collapses to the top margin on surfaces too short for it.
    pub fn gap_range(&self) -> RangeInclusive<i32> {
        let hi = self.height - self.gap_height - self.gap_margin;
        self.gap_margin..=hi.max(self.gap_margin)
    }

    /// An obstacle scores once its trailing edge is behind every bird.
    pub fn score_line(&self) -> i32 {
        self.avatars.iter().map(|a| a.x).min().unwrap_or(BIRD_X_POS)
    }

    /// Any player's jump button.
    pub fn restart_buttons(&self) -> Buttons {
        self.avatars
            .iter()
            .fold(Buttons::empty(), |acc, a| acc | a.jump)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Avatar {
    /// Centre of the bird; grows downwards.
    pub y: f64,
    pub velocity_y: f64,
    pub alive: bool,
}

/// A full-height barrier with a `gap_height` opening starting at `gap_y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Obstacle {
    pub x: i32,
    pub gap_y: i32,
    pub scored: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DodgeState {
    Running,
    GameOver,
}

#[derive(Clone, Debug)]
pub struct DodgeGame<R> {
    pub config: DodgeConfig,
    pub state: DodgeState,
    pub avatars: Vec<Avatar>,
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    pub(super) rng: R,
    pub(super) cue: Option<Cue>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets() {
        let classic = DodgeConfig::classic();
        assert_eq!(classic.avatars.len(), 1);
        assert!(!classic.show_score);
        assert!((classic.jump_velocity - JUMP_VELOCITY).abs() < f64::EPSILON);

        let scored = DodgeConfig::scored();
        assert!(scored.show_score);
        assert_eq!(scored.sprite, SpriteStyle::Ringed);
        assert!((scored.jump_velocity - SHORT_JUMP_VELOCITY).abs() < f64::EPSILON);

        let duel = DodgeConfig::duel();
        assert_eq!(duel.avatars.len(), 2);
        assert_ne!(duel.avatars[0].jump, duel.avatars[1].jump);
        assert_eq!(duel.restart_buttons(), P1_JUMP | P2_JUMP);
        assert_eq!(duel.score_line(), BIRD_X_POS);
    }

    #[test]
    fn gap_range_keeps_margins() {
        let cfg = DodgeConfig::classic();
        assert_eq!(cfg.gap_range(), 30..=130);

        let squat = DodgeConfig {
            height: 100,
            ..DodgeConfig::classic()
        };
        assert_eq!(squat.gap_range(), 30..=30);
    }
}
