#![forbid(unsafe_code)]

//! Core: edge geometry, transition channels, and frame timing.
//!
//! # Role in slidesheet
//! `slidesheet-core` owns the pieces of a sliding sheet that know nothing
//! about callbacks or presentation hosts: where a panel rests when it is
//! hidden, how a scalar moves toward a target over a fixed duration, and how
//! wall-clock frames turn into tick deltas.
//!
//! # Primary responsibilities
//! - **Geometry**: [`geometry::Edge`], [`geometry::ScreenExtent`], and the
//!   signed resting offset of a panel.
//! - **Animation**: [`animation::Channel`], an interruptible scalar with
//!   last-writer-wins retargeting, built on [`animation::Tween`].
//! - **Timing**: [`animation::FrameClock`] for hosts that drive ticks from
//!   frame callbacks.
//!
//! # How it fits in the system
//! `slidesheet-widgets` composes two channels into the sheet transition
//! controller and layers the visibility reconciler on top.

pub mod animation;
pub mod geometry;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
