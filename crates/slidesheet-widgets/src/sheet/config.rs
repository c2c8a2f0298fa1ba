#![forbid(unsafe_code)]

//! Sheet configuration.
//!
//! [`SheetConfig`] carries every option a sheet recognizes, with builder
//! setters and the documented defaults. Validation happens once, at mount.

use std::fmt;
use std::time::Duration;

use slidesheet_core::animation::Easing;
use slidesheet_core::geometry::{Edge, ParseEdgeError};

use super::reconciler::{CloseReason, ReconcileMode};

/// Default transition duration for both channels.
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(300);

/// Backdrop opacity used when [`OverlayStyle::opacity`] is unset.
pub const DEFAULT_OVERLAY_OPACITY: f64 = 0.5;

/// Platform the sheet is presented on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Platform {
    /// Needs an explicit keyboard spacer below the panel.
    Ios,
    Android,
    #[default]
    Other,
}

/// Backdrop styling that affects the transition.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OverlayStyle {
    /// Fully-open backdrop opacity. `Some(0.0)` is a real value, not "unset".
    pub opacity: Option<f64>,
}

/// Caller policy consulted by the visibility reconciler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct TransitionPolicy {
    /// Animate in when mounted already visible (otherwise snap).
    pub animate_on_mount: bool,
    /// Animate closes that started with a backdrop tap.
    pub should_animate_on_overlay_press: bool,
    /// Animate closes requested any other way.
    pub should_animate_on_request_close: bool,
    pub mode: ReconcileMode,
}

impl Default for TransitionPolicy {
    fn default() -> Self {
        Self {
            animate_on_mount: false,
            should_animate_on_overlay_press: true,
            should_animate_on_request_close: false,
            mode: ReconcileMode::Policy,
        }
    }
}

impl TransitionPolicy {
    /// Whether a close for `reason` should animate.
    #[inline]
    pub fn animates_close(&self, reason: CloseReason) -> bool {
        match reason {
            CloseReason::OverlayPress => self.should_animate_on_overlay_press,
            CloseReason::External => self.should_animate_on_request_close,
        }
    }
}

/// Full sheet configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct SheetConfig {
    /// Edge the panel enters from.
    pub position: Edge,
    #[cfg_attr(feature = "serde", serde(with = "duration_millis"))]
    pub animation_duration: Duration,
    pub easing: Easing,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub policy: TransitionPolicy,
    /// Present in a platform modal window rather than a plain overlay view.
    pub is_native: bool,
    /// Render a dimmable, tappable backdrop.
    pub show_overlay: bool,
    /// Whether a backdrop tap asks the caller to close at all.
    pub should_close_on_overlay_press: bool,
    pub overlay_style: OverlayStyle,
    /// Overrides the live screen height for keyboard avoidance.
    pub screen_height: Option<f64>,
    pub platform: Platform,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            position: Edge::Bottom,
            animation_duration: DEFAULT_ANIMATION_DURATION,
            easing: Easing::default(),
            policy: TransitionPolicy::default(),
            is_native: true,
            show_overlay: true,
            should_close_on_overlay_press: true,
            overlay_style: OverlayStyle::default(),
            screen_height: None,
            platform: Platform::default(),
        }
    }
}

impl SheetConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Classic dialog behavior: every open and every backdrop tap animates,
    /// and hiding snaps closed after echoing the close request to the caller.
    ///
    /// The animation flags of [`TransitionPolicy`] are not consulted in this
    /// mode.
    pub fn baseline() -> Self {
        Self::default().mode(ReconcileMode::Baseline)
    }

    pub fn position(mut self, edge: Edge) -> Self {
        self.position = edge;
        self
    }

    pub fn animation_duration(mut self, duration: Duration) -> Self {
        self.animation_duration = duration;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn animate_on_mount(mut self, animate: bool) -> Self {
        self.policy.animate_on_mount = animate;
        self
    }

    pub fn should_animate_on_overlay_press(mut self, animate: bool) -> Self {
        self.policy.should_animate_on_overlay_press = animate;
        self
    }

    pub fn should_animate_on_request_close(mut self, animate: bool) -> Self {
        self.policy.should_animate_on_request_close = animate;
        self
    }

    pub fn mode(mut self, mode: ReconcileMode) -> Self {
        self.policy.mode = mode;
        self
    }

    pub fn is_native(mut self, native: bool) -> Self {
        self.is_native = native;
        self
    }

    pub fn show_overlay(mut self, show: bool) -> Self {
        self.show_overlay = show;
        self
    }

    pub fn should_close_on_overlay_press(mut self, close: bool) -> Self {
        self.should_close_on_overlay_press = close;
        self
    }

    pub fn overlay_opacity(mut self, opacity: f64) -> Self {
        self.overlay_style.opacity = Some(opacity);
        self
    }

    pub fn screen_height(mut self, height: f64) -> Self {
        self.screen_height = Some(height);
        self
    }

    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Backdrop opacity when fully open.
    #[inline]
    pub fn max_overlay_opacity(&self) -> f64 {
        self.overlay_style.opacity.unwrap_or(DEFAULT_OVERLAY_OPACITY)
    }

    /// Check values that would put a channel outside its documented range.
    pub fn validate(&self) -> Result<(), SheetConfigError> {
        if let Some(opacity) = self.overlay_style.opacity
            && !(0.0..=1.0).contains(&opacity)
        {
            return Err(SheetConfigError::InvalidOpacity { opacity });
        }
        if let Some(height) = self.screen_height
            && !(height.is_finite() && height >= 0.0)
        {
            return Err(SheetConfigError::InvalidScreenHeight { height });
        }
        Ok(())
    }
}

/// Errors from building or validating a [`SheetConfig`].
#[derive(Debug, Clone, PartialEq)]
pub enum SheetConfigError {
    /// `position` named something other than an edge.
    UnknownEdge(ParseEdgeError),
    /// A recognized prop had the wrong value type.
    InvalidProp { key: String, expected: &'static str },
    /// A required prop was absent.
    MissingProp { key: &'static str },
    /// Duration was negative or not finite.
    InvalidDuration { millis: f64 },
    /// Overlay opacity outside `[0.0, 1.0]` (or NaN).
    InvalidOpacity { opacity: f64 },
    /// Screen height override was negative or not finite.
    InvalidScreenHeight { height: f64 },
}

impl fmt::Display for SheetConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownEdge(err) => write!(f, "invalid position: {err}"),
            Self::InvalidProp { key, expected } => {
                write!(f, "prop {key:?} must be a {expected}")
            }
            Self::MissingProp { key } => write!(f, "required prop {key:?} is missing"),
            Self::InvalidDuration { millis } => {
                write!(f, "animation duration must be a finite, non-negative number of ms, got {millis}")
            }
            Self::InvalidOpacity { opacity } => {
                write!(f, "overlay opacity must be within [0, 1], got {opacity}")
            }
            Self::InvalidScreenHeight { height } => {
                write!(f, "screen height must be finite and non-negative, got {height}")
            }
        }
    }
}

impl std::error::Error for SheetConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnknownEdge(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParseEdgeError> for SheetConfigError {
    fn from(err: ParseEdgeError) -> Self {
        Self::UnknownEdge(err)
    }
}

#[cfg(feature = "serde")]
mod duration_millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}
