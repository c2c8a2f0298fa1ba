#![forbid(unsafe_code)]

//! slidesheet public facade crate.
//!
//! Re-exports the sheet component and the geometry and animation types it is
//! built from, plus a prelude for day-to-day use.
//!
//! ```ignore
//! use slidesheet::prelude::*;
//!
//! let mut sheet = SlideSheet::mount(
//!     SheetConfig::new().position(Edge::Right),
//!     false,
//!     ScreenExtent::new(390.0, 844.0),
//!     (),
//! )?;
//! sheet.set_visible(true);
//! ```

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use slidesheet_core::animation::clock::Instant;
pub use slidesheet_core::animation::{Animation, Channel, Easing, FrameClock, Tween, TweenId};
pub use slidesheet_core::geometry::{
    Axis, Edge, PanelTransform, ParseEdgeError, ScreenExtent, resting_offset,
};
#[cfg(feature = "tracing-json")]
pub use slidesheet_core::logging::init_json_subscriber;

// --- Sheet re-exports ------------------------------------------------------

pub use slidesheet_widgets::sheet::{
    Action, BackdropFrame, CloseReason, ForwardedProps, HostKind, Intent, KeyboardState,
    OverlayStyle, Platform, PropMap, PropValue, ReconcileMode, Reconciliation, SheetConfig,
    SheetConfigError, SheetEvent, SheetFrame, SheetListener, SheetRenderer, SheetStyles, SlideSheet,
    TransitionCompletion, TransitionController, TransitionDirection, TransitionId,
    TransitionPhase, TransitionPolicy, reconcile,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for slidesheet hosts.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid sheet configuration or props.
    Config(SheetConfigError),
    /// Unrecognized edge name outside of config parsing.
    Edge(ParseEdgeError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Edge(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Edge(err) => Some(err),
        }
    }
}

impl From<SheetConfigError> for Error {
    fn from(err: SheetConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<ParseEdgeError> for Error {
    fn from(err: ParseEdgeError) -> Self {
        Self::Edge(err)
    }
}

/// Standard result type for slidesheet APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        CloseReason, Edge, Error, Intent, Result, ScreenExtent, SheetConfig, SheetEvent,
        SheetFrame, SheetListener, SheetRenderer, SlideSheet, TransitionPhase,
    };

    pub use crate::{core, widgets};
}

pub use slidesheet_core as core;
pub use slidesheet_widgets as widgets;
