#![forbid(unsafe_code)]

//! Fixed-duration interpolation between two scalars.
//!
//! # Invariants
//!
//! - `progress()` is always in `[0.0, 1.0]`.
//! - `current()` lies between `from` and `to` (easing curves do not overshoot).
//! - A zero-duration tween completes on its first tick, even with `dt == 0`.

use std::time::Duration;

use super::{Animation, Easing};

/// A one-shot interpolation from `from` to `to` over `duration`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
    ticked: bool,
}

impl Tween {
    /// Create a tween. Nothing moves until the first [`tick`](Animation::tick).
    #[must_use]
    pub fn new(from: f64, to: f64, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            easing: Easing::default(),
            ticked: false,
        }
    }

    /// Set the easing curve (builder pattern).
    #[must_use]
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Start value.
    pub fn start(&self) -> f64 {
        self.from
    }

    /// Target value.
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Configured duration.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Linear (uneased) progress in `[0.0, 1.0]`.
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return if self.ticked { 1.0 } else { 0.0 };
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Interpolated value at the current progress.
    pub fn current(&self) -> f64 {
        if self.is_complete() {
            return self.to;
        }
        let eased = self.easing.apply(self.progress());
        self.from + (self.to - self.from) * eased
    }
}

impl Animation for Tween {
    fn tick(&mut self, dt: Duration) {
        self.ticked = true;
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
    }

    fn is_complete(&self) -> bool {
        self.ticked && self.elapsed >= self.duration
    }

    fn value(&self) -> f32 {
        self.easing.apply(self.progress()) as f32
    }

    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
        self.ticked = false;
    }
}
