#![forbid(unsafe_code)]

//! Slide-in sheet: a panel entering from a screen edge over a dimming backdrop.
//!
//! # Pieces
//!
//! - **Transition controller** ([`TransitionController`]): two channels
//!   (panel position, backdrop opacity) moved together over one duration, with
//!   completion reported per [`TransitionId`].
//! - **Visibility reconciler** ([`reconcile`]): a pure function from
//!   (previous intent, new intent, policy) to [`Action`]s.
//! - **Component** ([`SlideSheet`]): applies actions, gates backdrop taps, and
//!   notifies a [`SheetListener`].
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use slidesheet_core::geometry::{Edge, ScreenExtent};
//! use slidesheet_widgets::sheet::{SheetConfig, SlideSheet};
//!
//! let config = SheetConfig::new()
//!     .position(Edge::Bottom)
//!     .should_animate_on_request_close(true);
//! let mut sheet = SlideSheet::mount(config, false, ScreenExtent::new(390.0, 844.0), ())?;
//!
//! sheet.set_visible(true);
//! while sheet.tick(Duration::from_millis(16)).is_none() {
//!     // present sheet.frame()
//! }
//! ```

mod config;
mod controller;
mod host;
mod keyboard;
mod listener;
pub mod props;
mod reconciler;
mod slide_sheet;

pub use config::{
    DEFAULT_ANIMATION_DURATION, DEFAULT_OVERLAY_OPACITY, OverlayStyle, Platform, SheetConfig,
    SheetConfigError, TransitionPolicy,
};
pub use controller::{
    TransitionCompletion, TransitionController, TransitionDirection, TransitionId,
    TransitionPhase,
};
pub use host::{BackdropFrame, HostKind, SheetFrame, SheetRenderer};
pub use keyboard::{KeyboardState, needs_spacer, spacer_height};
pub use listener::{SheetEvent, SheetListener};
pub use props::{
    ForwardedProps, PropMap, PropValue, SheetStyles, filter_host_props, visible_prop,
};
pub use reconciler::{Action, CloseReason, Intent, ReconcileMode, Reconciliation, reconcile};
pub use slide_sheet::SlideSheet;
