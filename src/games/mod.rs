//! The programs that run on the surface, one tick at a time.

pub mod dodge;
pub mod showcase;
pub mod snake;
pub mod ticker;

use std::time::Duration;

use crate::input::InputSampler;
use crate::sound::Cue;
use crate::surface::PixelSurface;

/// What the session should do once a tick's update has settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Draw the new state.
    Render,
    /// Leave the surface exactly as the last frame left it.
    Hold,
    /// Quit pressed; end the session.
    Quit,
}

/// A fixed-tick program. `tick` owns every state transition; `render` only
/// reads the state it settled on.
pub trait Game {
    fn tick(&mut self, input: &InputSampler) -> Flow;

    fn render(&self, surface: &mut PixelSurface);

    /// Target length of the next tick.
    fn tick_period(&self) -> Duration;

    /// The sound raised by the last tick, if any.
    fn take_cue(&mut self) -> Option<Cue> {
        None
    }
}
