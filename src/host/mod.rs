//! Terminal stand-ins for the board's pixel buffer and button register.

pub mod keyboard;
pub mod terminal;

pub use keyboard::Keyboard;
pub use terminal::{HalfBlockRenderer, Terminal};
