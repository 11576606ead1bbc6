//! Obstacle-dodge engine.
//!
//! Birds fall under gravity and hop on a button press while pairs of
//! barriers scroll in from the right. Touching a barrier outside its gap,
//! or leaving the screen, downs a bird; when every bird is down the round
//! is over until a jump button restarts it.

pub mod logic;
pub mod render;
pub mod types;

pub use logic::*;
pub use types::*;
