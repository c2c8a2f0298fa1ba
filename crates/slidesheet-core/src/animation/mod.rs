#![forbid(unsafe_code)]

//! Scalar animation primitives.
//!
//! - [`Animation`]: the tick-driven progress trait shared by all primitives.
//! - [`Tween`]: fixed-duration interpolation between two values.
//! - [`Channel`]: an interruptible scalar holding at most one in-flight tween.
//! - [`FrameClock`]: turns frame instants into tick deltas.
//!
//! Nothing here owns a timer. Progress only happens when the host calls
//! `tick` with the elapsed time since the previous frame.

use std::time::Duration;

pub mod channel;
pub mod clock;
pub mod tween;

pub use channel::{Channel, TweenId};
pub use clock::FrameClock;
pub use tween::Tween;

/// A time-driven animation producing normalized progress.
pub trait Animation {
    /// Advance by `dt`.
    fn tick(&mut self, dt: Duration);

    /// Whether the animation has reached its end.
    fn is_complete(&self) -> bool;

    /// Eased progress in `[0.0, 1.0]`.
    fn value(&self) -> f32;

    /// Return to the starting state.
    fn reset(&mut self);
}

/// Easing curve applied to tween progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Easing {
    /// Linear interpolation.
    Linear,
    /// Cubic ease-in (accelerating).
    EaseIn,
    /// Cubic ease-out (decelerating).
    EaseOut,
    /// Cubic S-curve. The default for timed transitions.
    #[default]
    EaseInOut,
}

impl Easing {
    /// Apply the curve to `t`, clamped to `[0.0, 1.0]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t * t,
            Self::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let inv = -2.0 * t + 2.0;
                    1.0 - inv * inv * inv / 2.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 4] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ];

    #[test]
    fn endpoints_are_fixed() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?}");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-12, "{easing:?}");
        }
    }

    #[test]
    fn input_is_clamped() {
        assert_eq!(Easing::Linear.apply(-0.5), 0.0);
        assert_eq!(Easing::Linear.apply(1.5), 1.0);
    }

    #[test]
    fn curves_are_monotonic_and_bounded() {
        for easing in ALL {
            let mut prev = 0.0;
            for i in 0..=100 {
                let v = easing.apply(f64::from(i) / 100.0);
                assert!(v >= prev - 1e-12, "{easing:?} not monotonic at {i}");
                assert!((0.0..=1.0).contains(&v), "{easing:?} out of range at {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn ease_in_out_is_symmetric_at_half() {
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-12);
        assert!(Easing::EaseOut.apply(0.5) > 0.5);
        assert!(Easing::EaseIn.apply(0.5) < 0.5);
    }
}
