//! Grid snake data structures.

use std::collections::VecDeque;
use std::time::Duration;

use crate::input::Buttons;
use crate::sound::Cue;
use crate::surface::{VISIBLE_HEIGHT, VISIBLE_WIDTH};

pub const CELL_SIZE: i32 = 8;
pub const GRID_WIDTH: i32 = VISIBLE_WIDTH as i32 / CELL_SIZE; // 40
pub const GRID_HEIGHT: i32 = VISIBLE_HEIGHT as i32 / CELL_SIZE; // 30
pub const INITIAL_LENGTH: usize = 5;
pub const FOOD_SCORE: u32 = 10;

/// Tick delay starts here and shrinks by `DELAY_STEP` per point down to
/// `MIN_DELAY`.
pub const INITIAL_DELAY: Duration = Duration::from_millis(100);
pub const DELAY_STEP: Duration = Duration::from_micros(200);
pub const MIN_DELAY: Duration = Duration::from_millis(40);

pub const QUIT_BUTTON: Buttons = Buttons::KEY0;
pub const TURN_LEFT: Buttons = Buttons::KEY1;
pub const TURN_RIGHT: Buttons = Buttons::KEY2;

/// Headings in clockwise order; a right turn is the next one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    const CLOCKWISE: [Direction; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    fn index(self) -> usize {
        self as usize
    }

    pub fn turn_right(self) -> Self {
        Self::CLOCKWISE[(self.index() + 1) % 4]
    }

    pub fn turn_left(self) -> Self {
        Self::CLOCKWISE[(self.index() + 3) % 4]
    }

    pub fn opposite(self) -> Self {
        Self::CLOCKWISE[(self.index() + 2) % 4]
    }

    /// Grid step, y growing downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Right => (1, 0),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnakeState {
    Start,
    Running,
    GameOver,
}

#[derive(Clone, Debug)]
pub struct SnakeConfig {
    pub grid_width: i32,
    pub grid_height: i32,
    pub cell_size: i32,
    pub initial_length: usize,
    pub food_score: u32,
    pub initial_delay: Duration,
    pub delay_step: Duration,
    pub min_delay: Duration,
    pub quit: Buttons,
    pub turn_left: Buttons,
    pub turn_right: Buttons,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            cell_size: CELL_SIZE,
            initial_length: INITIAL_LENGTH,
            food_score: FOOD_SCORE,
            initial_delay: INITIAL_DELAY,
            delay_step: DELAY_STEP,
            min_delay: MIN_DELAY,
            quit: QUIT_BUTTON,
            turn_left: TURN_LEFT,
            turn_right: TURN_RIGHT,
        }
    }
}

impl SnakeConfig {
    /// Either turn button starts a round or leaves the game-over screen.
    pub fn start_buttons(&self) -> Buttons {
        self.turn_left | self.turn_right
    }

    pub fn capacity(&self) -> usize {
        (self.grid_width * self.grid_height) as usize
    }

    pub fn contains(&self, c: Cell) -> bool {
        c.x >= 0 && c.x < self.grid_width && c.y >= 0 && c.y < self.grid_height
    }

    /// Difficulty ramp: the more points, the shorter the tick.
    pub fn tick_period(&self, score: u32) -> Duration {
        self.initial_delay
            .saturating_sub(self.delay_step.saturating_mul(score))
            .max(self.min_delay)
    }
}

#[derive(Clone, Debug)]
pub struct SnakeGame<R> {
    pub config: SnakeConfig,
    pub state: SnakeState,
    /// Head first.
    pub body: VecDeque<Cell>,
    pub heading: Direction,
    pub food: Cell,
    pub score: u32,
    pub(super) rng: R,
    pub(super) cue: Option<Cue>,
    /// The static screen of the current state has been drawn.
    pub(super) screen_drawn: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turns_cycle_clockwise() {
        assert_eq!(Direction::Up.turn_right(), Direction::Right);
        assert_eq!(Direction::Right.turn_right(), Direction::Down);
        assert_eq!(Direction::Down.turn_right(), Direction::Left);
        assert_eq!(Direction::Left.turn_right(), Direction::Up);
        assert_eq!(Direction::Up.turn_left(), Direction::Left);
        assert_eq!(Direction::Left.turn_left(), Direction::Down);
        for d in Direction::CLOCKWISE {
            assert_eq!(d.turn_right().turn_left(), d);
            assert_ne!(d.turn_right(), d.opposite());
            assert_ne!(d.turn_left(), d.opposite());
        }
    }

    #[test]
    fn delta_matches_screen_axes() {
        assert_eq!(Cell::new(3, 3).step(Direction::Up), Cell::new(3, 2));
        assert_eq!(Cell::new(3, 3).step(Direction::Right), Cell::new(4, 3));
    }

    #[test]
    fn delay_ramp() {
        let cfg = SnakeConfig::default();
        assert_eq!(cfg.tick_period(0), Duration::from_millis(100));
        assert_eq!(cfg.tick_period(100), Duration::from_millis(80));
        assert_eq!(cfg.tick_period(300), Duration::from_millis(40));
        assert_eq!(cfg.tick_period(10_000), Duration::from_millis(40));
    }

    #[test]
    fn grid_fits_the_board() {
        let cfg = SnakeConfig::default();
        assert_eq!((cfg.grid_width, cfg.grid_height), (40, 30));
        assert_eq!(cfg.capacity(), 1200);
        assert!(cfg.contains(Cell::new(39, 29)));
        assert!(!cfg.contains(Cell::new(40, 0)));
        assert!(!cfg.contains(Cell::new(0, -1)));
        assert_eq!(cfg.start_buttons(), Buttons::KEY1 | Buttons::KEY2);
    }
}
