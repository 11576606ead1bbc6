//! Fixed-period tick pacing.

use std::thread;
use std::time::{Duration, Instant};

/// Shortest pause taken when a tick finishes early.
pub const MIN_SLEEP: Duration = Duration::from_millis(1);

/// Sleeps away whatever is left of the tick period after the work is done.
/// Best effort: a tick that overruns its period starts the next one
/// immediately instead of trying to catch up.
#[derive(Clone, Copy, Debug)]
pub struct GameClock {
    min_sleep: Duration,
}

impl Default for GameClock {
    fn default() -> Self {
        Self {
            min_sleep: MIN_SLEEP,
        }
    }
}

impl GameClock {
    pub fn new(min_sleep: Duration) -> Self {
        Self { min_sleep }
    }

    /// How long to suspend after a tick that took `elapsed` of `period`.
    pub fn pause_for(&self, period: Duration, elapsed: Duration) -> Duration {
        if elapsed >= period {
            return Duration::ZERO;
        }
        (period - elapsed).max(self.min_sleep).min(period)
    }

    /// Suspends until the tick that began at `tick_start` has used up `period`.
    pub fn pace(&self, period: Duration, tick_start: Instant) {
        let pause = self.pause_for(period, tick_start.elapsed());
        if !pause.is_zero() {
            thread::sleep(pause);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_micros(16_666);

    #[test]
    fn sleeps_the_remainder() {
        let clock = GameClock::default();
        assert_eq!(
            clock.pause_for(PERIOD, Duration::from_micros(6_666)),
            Duration::from_millis(10)
        );
    }

    #[test]
    fn overrun_does_not_sleep() {
        let clock = GameClock::default();
        assert_eq!(clock.pause_for(PERIOD, PERIOD), Duration::ZERO);
        assert_eq!(clock.pause_for(PERIOD, Duration::from_millis(40)), Duration::ZERO);
    }

    #[test]
    fn short_remainder_is_floored() {
        let clock = GameClock::default();
        let pause = clock.pause_for(PERIOD, PERIOD - Duration::from_micros(10));
        assert_eq!(pause, MIN_SLEEP);
    }

    #[test]
    fn never_exceeds_period() {
        let clock = GameClock::new(Duration::from_millis(50));
        assert_eq!(clock.pause_for(PERIOD, Duration::ZERO), PERIOD);
    }

    #[test]
    fn pace_returns_after_period() {
        let clock = GameClock::default();
        let start = Instant::now();
        clock.pace(Duration::from_millis(5), start);
        assert!(start.elapsed() >= Duration::from_millis(5));
    }
}
