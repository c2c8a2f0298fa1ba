#![forbid(unsafe_code)]

//! Frame clock: wall-clock instants to tick deltas.
//!
//! Hosts that receive frame callbacks (vsync, a requestAnimationFrame-style
//! loop, a game loop) feed each frame's instant into [`FrameClock::frame`] and
//! pass the returned delta to `tick`. The first frame yields `Duration::ZERO`.
//! A single delta is capped so that a long stall (app backgrounded, debugger
//! pause) finishes an animation instead of skipping far past it.

use std::time::Duration;

pub use web_time::Instant;

/// Default cap for a single frame delta.
pub const DEFAULT_MAX_FRAME_DELTA: Duration = Duration::from_millis(100);

/// Converts successive frame instants into bounded deltas.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Option<Instant>,
    max_delta: Duration,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Create a clock with [`DEFAULT_MAX_FRAME_DELTA`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            last: None,
            max_delta: DEFAULT_MAX_FRAME_DELTA,
        }
    }

    /// Set the per-frame delta cap (builder pattern).
    #[must_use]
    pub fn max_delta(mut self, max_delta: Duration) -> Self {
        self.max_delta = max_delta;
        self
    }

    /// Record a frame at `now` and return the bounded delta since the last one.
    ///
    /// Instants earlier than the previous frame yield `Duration::ZERO`.
    pub fn frame(&mut self, now: Instant) -> Duration {
        let dt = match self.last {
            Some(prev) => now.saturating_duration_since(prev),
            None => Duration::ZERO,
        };
        self.last = Some(now);
        dt.min(self.max_delta)
    }

    /// Record a frame at the current instant.
    pub fn frame_now(&mut self) -> Duration {
        self.frame(Instant::now())
    }

    /// Forget the previous frame so the next one yields zero.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.frame(Instant::now()), Duration::ZERO);
    }

    #[test]
    fn delta_between_frames() {
        let mut clock = FrameClock::new();
        let t0 = Instant::now();
        clock.frame(t0);
        assert_eq!(clock.frame(t0 + Duration::from_millis(16)), Duration::from_millis(16));
    }

    #[test]
    fn long_stall_is_capped() {
        let mut clock = FrameClock::new().max_delta(Duration::from_millis(50));
        let t0 = Instant::now();
        clock.frame(t0);
        assert_eq!(clock.frame(t0 + Duration::from_secs(3)), Duration::from_millis(50));
    }

    #[test]
    fn backwards_instant_is_zero() {
        let mut clock = FrameClock::new();
        let t0 = Instant::now();
        clock.frame(t0 + Duration::from_millis(20));
        assert_eq!(clock.frame(t0), Duration::ZERO);
    }

    #[test]
    fn reset_forgets_previous_frame() {
        let mut clock = FrameClock::new();
        let t0 = Instant::now();
        clock.frame(t0);
        clock.reset();
        assert_eq!(clock.frame(t0 + Duration::from_millis(30)), Duration::ZERO);
    }
}
