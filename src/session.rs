//! The tick loop: sample → update → render → pace.

use std::io;
use std::time::Instant;

use tracing::{debug, info};

use crate::clock::GameClock;
use crate::games::{Flow, Game};
use crate::input::{ButtonRegister, InputSampler};
use crate::sound::Speaker;
use crate::surface::PixelSurface;

/// Whatever shows the surface to the player.
pub trait Display {
    fn present(&mut self, surface: &PixelSurface) -> io::Result<()>;
}

impl<T: Display + ?Sized> Display for &mut T {
    fn present(&mut self, surface: &PixelSurface) -> io::Result<()> {
        (**self).present(surface)
    }
}

/// Owns the two device resources for the whole run and drives one game.
pub struct Session<R, D> {
    register: R,
    display: D,
    surface: PixelSurface,
    sampler: InputSampler,
    clock: GameClock,
    speaker: Speaker,
    ticks: u64,
}

impl<R: ButtonRegister, D: Display> Session<R, D> {
    pub fn new(register: R, display: D, surface: PixelSurface) -> Self {
        Self {
            register,
            display,
            surface,
            sampler: InputSampler::new(),
            clock: GameClock::default(),
            speaker: Speaker::silent(),
            ticks: 0,
        }
    }

    pub fn with_clock(mut self, clock: GameClock) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_speaker(mut self, speaker: Speaker) -> Self {
        self.speaker = speaker;
        self
    }

    /// One tick without pacing. The surface is only touched after the
    /// game's update has finished.
    pub fn step<G: Game + ?Sized>(&mut self, game: &mut G) -> io::Result<Flow> {
        let raw = self.register.read()?;
        self.sampler.sample(raw);
        let flow = game.tick(&self.sampler);
        self.sampler.commit();

        if let Some(cue) = game.take_cue() {
            self.speaker.play(cue);
        }
        if flow == Flow::Render {
            game.render(&mut self.surface);
            self.display.present(&self.surface)?;
        }
        self.ticks += 1;
        Ok(flow)
    }

    /// Runs until the game reports `Quit`. Returns the number of ticks.
    pub fn run<G: Game + ?Sized>(&mut self, game: &mut G) -> io::Result<u64> {
        info!("session started");
        loop {
            let start = Instant::now();
            if self.step(game)? == Flow::Quit {
                info!(ticks = self.ticks, "quit requested");
                return Ok(self.ticks);
            }
            let period = game.tick_period();
            self.clock.pace(period, start);
            if self.ticks % 600 == 0 {
                debug!(ticks = self.ticks, ?period, "tick");
            }
        }
    }

    pub fn surface(&self) -> &PixelSurface {
        &self.surface
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn register_mut(&mut self) -> &mut R {
        &mut self.register
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

/// Keeps a copy of the last presented frame. Used for headless runs.
#[derive(Clone, Debug, Default)]
pub struct FrameRecorder {
    pub presented: usize,
    pub last: Option<PixelSurface>,
}

impl Display for FrameRecorder {
    fn present(&mut self, surface: &PixelSurface) -> io::Result<()> {
        self.presented += 1;
        self.last = Some(surface.clone());
        Ok(())
    }
}
