//! Audio cues. Synthesised with fundsp and played through rodio when the
//! `sound` feature is enabled; otherwise every cue is dropped silently.

use tracing::debug;

/// Something worth a sound, raised by an engine during a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    Score,
    Crash,
}

pub struct Speaker {
    #[cfg(feature = "sound")]
    out: Option<backend::Output>,
}

impl Speaker {
    /// Opens the default output device, falling back to silence.
    pub fn open() -> Self {
        #[cfg(feature = "sound")]
        {
            let out = match backend::Output::open() {
                Ok(out) => Some(out),
                Err(e) => {
                    tracing::warn!("audio output unavailable: {e}");
                    None
                }
            };
            Self { out }
        }
        #[cfg(not(feature = "sound"))]
        {
            Self::silent()
        }
    }

    pub fn silent() -> Self {
        Self {
            #[cfg(feature = "sound")]
            out: None,
        }
    }

    pub fn play(&mut self, cue: Cue) {
        debug!(?cue, "cue");
        #[cfg(feature = "sound")]
        if let Some(out) = &self.out {
            out.play(cue);
        }
    }
}

#[cfg(feature = "sound")]
mod backend {
    use super::Cue;
    use fundsp::hacker32::*;
    use rodio::buffer::SamplesBuffer;
    use rodio::{OutputStream, OutputStreamHandle, Sink};

    const SAMPLE_RATE: u32 = 44_100;

    pub struct Output {
        _stream: OutputStream,
        handle: OutputStreamHandle,
    }

    impl Output {
        pub fn open() -> anyhow::Result<Self> {
            let (stream, handle) = OutputStream::try_default()?;
            Ok(Self {
                _stream: stream,
                handle,
            })
        }

        pub fn play(&self, cue: Cue) {
            match Sink::try_new(&self.handle) {
                Ok(sink) => {
                    sink.append(SamplesBuffer::new(1, SAMPLE_RATE, synth(cue)));
                    sink.detach(); // Play in background
                }
                Err(e) => tracing::warn!("audio sink: {e}"),
            }
        }
    }

    /// Saw sweep with a linear fade. Crash falls 400Hz to 80Hz over half a
    /// second; score is a short rising blip.
    fn synth(cue: Cue) -> Vec<f32> {
        let (secs, f0, f1, gain) = match cue {
            Cue::Crash => (0.5f32, 400.0f32, 80.0f32, 0.15f32),
            Cue::Score => (0.08, 880.0, 1320.0, 0.08),
        };
        let mut osc = saw();
        osc.set_sample_rate(SAMPLE_RATE as f64);
        let n = (secs * SAMPLE_RATE as f32) as usize;
        (0..n)
            .map(|i| {
                let k = i as f32 / n as f32;
                osc.filter_mono(f0 + (f1 - f0) * k) * gain * (1.0 - k)
            })
            .collect()
    }
}
