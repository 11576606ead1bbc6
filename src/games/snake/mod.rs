//! Grid snake engine: START → RUNNING → GAME_OVER → START.

pub mod logic;
pub mod render;
pub mod types;

pub use logic::*;
pub use types::*;
