#![forbid(unsafe_code)]

//! Interruptible scalar channel.
//!
//! A [`Channel`] holds a current value and at most one in-flight [`Tween`].
//! Starting a new tween while one is running retargets from the current value;
//! the superseded tween is dropped and never reports completion.
//!
//! # Invariants
//!
//! - At most one tween is in flight.
//! - `tick` reports a [`TweenId`] only for the tween that is in flight when it
//!   completes, and only once.
//! - Ids are strictly increasing per channel.
//!
//! # Failure Modes
//!
//! - Rapid retargeting can leave the value at an intermediate point between
//!   two targets. This is intended: there is no rollback.

use std::time::Duration;

use super::{Animation, Easing, Tween};

/// Identity of one tween started on a [`Channel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TweenId(u64);

impl TweenId {
    /// Raw counter value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// A scalar that can be snapped or animated toward a target.
#[derive(Debug, Clone)]
pub struct Channel {
    value: f64,
    active: Option<(TweenId, Tween)>,
    next_id: u64,
}

impl Channel {
    /// Create an idle channel at `value`.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            active: None,
            next_id: 0,
        }
    }

    /// Current value.
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Whether a tween is in flight.
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Target of the in-flight tween, if any.
    pub fn target(&self) -> Option<f64> {
        self.active.as_ref().map(|(_, tween)| tween.target())
    }

    /// Id of the in-flight tween, if any.
    pub fn active_id(&self) -> Option<TweenId> {
        self.active.as_ref().map(|(id, _)| *id)
    }

    /// Start animating toward `target`, superseding any in-flight tween.
    pub fn animate_to(&mut self, target: f64, duration: Duration, easing: Easing) -> TweenId {
        let id = TweenId(self.next_id);
        self.next_id += 1;
        let tween = Tween::new(self.value, target, duration).easing(easing);
        self.active = Some((id, tween));
        id
    }

    /// Jump to `value`, dropping any in-flight tween.
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
        self.active = None;
    }

    /// Advance the in-flight tween by `dt`.
    ///
    /// Returns the id of the tween that completed during this tick.
    pub fn tick(&mut self, dt: Duration) -> Option<TweenId> {
        let (id, tween) = self.active.as_mut()?;
        tween.tick(dt);
        self.value = tween.current();
        if tween.is_complete() {
            let id = *id;
            self.active = None;
            return Some(id);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_100: Duration = Duration::from_millis(100);
    const MS_300: Duration = Duration::from_millis(300);

    #[test]
    fn idle_tick_is_noop() {
        let mut ch = Channel::new(3.0);
        assert_eq!(ch.tick(MS_100), None);
        assert_eq!(ch.value(), 3.0);
    }

    #[test]
    fn animate_reports_completion_once() {
        let mut ch = Channel::new(844.0);
        let id = ch.animate_to(0.0, MS_300, Easing::Linear);
        assert!(ch.is_animating());
        assert_eq!(ch.target(), Some(0.0));
        assert_eq!(ch.tick(MS_100), None);
        assert!(ch.value() > 0.0 && ch.value() < 844.0);
        assert_eq!(ch.tick(MS_300), Some(id));
        assert_eq!(ch.value(), 0.0);
        assert_eq!(ch.tick(MS_300), None);
        assert!(!ch.is_animating());
    }

    #[test]
    fn retarget_starts_from_current_value() {
        let mut ch = Channel::new(0.0);
        let first = ch.animate_to(10.0, MS_300, Easing::Linear);
        ch.tick(MS_100);
        let mid = ch.value();
        let second = ch.animate_to(0.0, MS_300, Easing::Linear);
        assert_ne!(first, second);
        assert!(second > first);

        assert_eq!(ch.active_id(), Some(second));
        assert_eq!(ch.value(), mid);
        assert_eq!(ch.tick(MS_300), Some(second));
        assert_eq!(ch.value(), 0.0);
    }

    #[test]
    fn set_value_cancels_in_flight() {
        let mut ch = Channel::new(0.0);
        ch.animate_to(1.0, MS_300, Easing::EaseInOut);
        ch.set_value(-5.0);
        assert!(!ch.is_animating());
        assert_eq!(ch.tick(MS_300), None);
        assert_eq!(ch.value(), -5.0);
    }

    #[test]
    fn zero_duration_settles_on_next_tick() {
        let mut ch = Channel::new(0.0);
        let id = ch.animate_to(0.5, Duration::ZERO, Easing::Linear);
        assert_eq!(ch.value(), 0.0);
        assert_eq!(ch.tick(Duration::ZERO), Some(id));
        assert_eq!(ch.value(), 0.5);
    }
}
