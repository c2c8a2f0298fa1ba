#![forbid(unsafe_code)]

//! Two-channel transition controller.
//!
//! Owns the panel position channel and the backdrop opacity channel and moves
//! both together over one duration:
//!
//! - `open()` drives opacity to the configured maximum and position to `0.0`.
//! - `close()` drives opacity to `0.0` and position to the resting offset,
//!   recomputed from the current screen extent.
//! - `snap_open()` / `snap_closed()` jump to the end state with no animation.
//!
//! Completion is reported by [`TransitionController::tick`] as a
//! [`TransitionCompletion`] carrying the [`TransitionId`] returned when the
//! transition started. Only the position channel gates completion: the
//! opacity channel shares the duration and settles on the same tick.
//!
//! # State machine
//!
//! Closed → Opening → Open → Closing → Closed
//!
//! Starting a transition while another is in flight retargets both channels
//! from their current values. The superseded transition never completes.
//!
//! # Invariants
//!
//! - `is_animating()` is true from `open()`/`close()` until the completing tick.
//! - Position is the resting offset when closed, `0.0` when open, and strictly
//!   between the two only while a transition is running.
//! - Opacity stays within `[0.0, max_opacity]`.

use std::time::Duration;

use slidesheet_core::animation::{Channel, Easing, TweenId};
use slidesheet_core::geometry::{Edge, PanelTransform, ScreenExtent, resting_offset};

use super::config::SheetConfig;
use super::reconciler::CloseReason;

/// Current phase of the transition lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPhase {
    /// Panel rests off-screen, backdrop transparent.
    #[default]
    Closed,
    /// Animating toward open.
    Opening,
    /// Panel at `0.0`, backdrop at full opacity.
    Open,
    /// Animating toward closed.
    Closing,
}

impl TransitionPhase {
    /// Whether anything should be presented.
    #[inline]
    pub fn is_visible(self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Whether a transition is in flight.
    #[inline]
    pub fn is_animating(self) -> bool {
        matches!(self, Self::Opening | Self::Closing)
    }
}

/// Which way a transition moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionDirection {
    Open,
    Close,
}

/// Handle for one started transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransitionId(u64);

impl TransitionId {
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Reported once when a transition's position channel settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionCompletion {
    pub id: TransitionId,
    pub direction: TransitionDirection,
    /// Set for closes.
    pub reason: Option<CloseReason>,
}

#[derive(Debug, Clone, Copy)]
struct InFlight {
    id: TransitionId,
    direction: TransitionDirection,
    reason: Option<CloseReason>,
    position_tween: TweenId,
}

/// Drives the position and opacity channels of one sheet.
#[derive(Debug, Clone)]
pub struct TransitionController {
    edge: Edge,
    extent: ScreenExtent,
    duration: Duration,
    easing: Easing,
    max_opacity: f64,
    position: Channel,
    opacity: Channel,
    in_flight: Option<InFlight>,
    settled: TransitionPhase,
    next_id: u64,
}

impl TransitionController {
    /// Create a fully closed controller.
    pub fn new(config: &SheetConfig, extent: ScreenExtent) -> Self {
        let edge = config.position;
        Self {
            edge,
            extent,
            duration: config.animation_duration,
            easing: config.easing,
            max_opacity: config.max_overlay_opacity(),
            position: Channel::new(resting_offset(edge, extent)),
            opacity: Channel::new(0.0),
            in_flight: None,
            settled: TransitionPhase::Closed,
            next_id: 0,
        }
    }

    pub fn edge(&self) -> Edge {
        self.edge
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn max_opacity(&self) -> f64 {
        self.max_opacity
    }

    pub fn screen_extent(&self) -> ScreenExtent {
        self.extent
    }

    /// Update the screen extent used by the next `open()`/`close()`.
    ///
    /// In-flight tweens keep their target. A settled, closed panel moves to the
    /// new resting offset immediately.
    pub fn set_screen_extent(&mut self, extent: ScreenExtent) {
        self.extent = extent;
        if self.phase() == TransitionPhase::Closed {
            self.position.set_value(self.resting_offset());
        }
    }

    /// Resting offset for the current edge and extent.
    #[inline]
    pub fn resting_offset(&self) -> f64 {
        resting_offset(self.edge, self.extent)
    }

    /// Current panel offset.
    #[inline]
    pub fn position(&self) -> f64 {
        self.position.value()
    }

    /// Current backdrop opacity.
    #[inline]
    pub fn opacity(&self) -> f64 {
        self.opacity.value()
    }

    /// Translation for the panel at the current position.
    pub fn transform(&self) -> PanelTransform {
        PanelTransform::for_edge(self.edge, self.position())
    }

    /// Whether a transition is in flight.
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Current phase.
    pub fn phase(&self) -> TransitionPhase {
        match self.in_flight {
            Some(InFlight {
                direction: TransitionDirection::Open,
                ..
            }) => TransitionPhase::Opening,
            Some(InFlight {
                direction: TransitionDirection::Close,
                ..
            }) => TransitionPhase::Closing,
            None => self.settled,
        }
    }

    /// Reason of the close in flight, if any.
    pub fn closing_reason(&self) -> Option<CloseReason> {
        self.in_flight.and_then(|f| f.reason)
    }

    /// Id of the transition in flight, if any.
    pub fn in_flight_id(&self) -> Option<TransitionId> {
        self.in_flight.map(|f| f.id)
    }

    /// Start animating open.
    pub fn open(&mut self) -> TransitionId {
        if self.in_flight.is_none() && self.settled == TransitionPhase::Closed {
            // Fresh channels seeded at the resting offset for today's geometry.
            self.position = Channel::new(self.resting_offset());
            self.opacity = Channel::new(0.0);
        }
        self.opacity
            .animate_to(self.max_opacity, self.duration, self.easing);
        let position_tween = self.position.animate_to(0.0, self.duration, self.easing);
        let id = self.begin(TransitionDirection::Open, None, position_tween);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "slidesheet::transition",
            id = id.get(),
            edge = %self.edge,
            from = self.position(),
            duration_ms = self.duration.as_millis() as u64,
            "open"
        );

        id
    }

    /// Start animating closed.
    pub fn close(&mut self, reason: CloseReason) -> TransitionId {
        let target = self.resting_offset();
        self.opacity.animate_to(0.0, self.duration, self.easing);
        let position_tween = self.position.animate_to(target, self.duration, self.easing);
        let id = self.begin(TransitionDirection::Close, Some(reason), position_tween);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "slidesheet::transition",
            id = id.get(),
            ?reason,
            to = target,
            duration_ms = self.duration.as_millis() as u64,
            "close"
        );

        id
    }

    /// Jump to fully open, dropping any transition in flight.
    pub fn snap_open(&mut self) {
        self.position.set_value(0.0);
        self.opacity.set_value(self.max_opacity);
        self.in_flight = None;
        self.settled = TransitionPhase::Open;

        #[cfg(feature = "tracing")]
        tracing::debug!(target: "slidesheet::transition", "snap_open");
    }

    /// Jump to fully closed with fresh channels, dropping any transition in flight.
    pub fn snap_closed(&mut self) {
        self.position = Channel::new(self.resting_offset());
        self.opacity = Channel::new(0.0);
        self.in_flight = None;
        self.settled = TransitionPhase::Closed;

        #[cfg(feature = "tracing")]
        tracing::debug!(target: "slidesheet::transition", "snap_closed");
    }

    /// Advance both channels by `dt`.
    ///
    /// Returns the completion of the transition in flight if its position
    /// channel settled during this tick.
    pub fn tick(&mut self, dt: Duration) -> Option<TransitionCompletion> {
        self.opacity.tick(dt);
        let settled = self.position.tick(dt)?;
        let flight = self.in_flight?;
        if flight.position_tween != settled {
            return None;
        }
        self.in_flight = None;
        self.settled = match flight.direction {
            TransitionDirection::Open => TransitionPhase::Open,
            TransitionDirection::Close => TransitionPhase::Closed,
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "slidesheet::transition",
            id = flight.id.get(),
            direction = ?flight.direction,
            "settled"
        );

        Some(TransitionCompletion {
            id: flight.id,
            direction: flight.direction,
            reason: flight.reason,
        })
    }

    fn begin(
        &mut self,
        direction: TransitionDirection,
        reason: Option<CloseReason>,
        position_tween: TweenId,
    ) -> TransitionId {
        let id = TransitionId(self.next_id);
        self.next_id += 1;
        self.in_flight = Some(InFlight {
            id,
            direction,
            reason,
            position_tween,
        });
        id
    }
}
