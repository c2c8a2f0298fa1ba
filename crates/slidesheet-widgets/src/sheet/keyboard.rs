#![forbid(unsafe_code)]

//! Keyboard avoidance.
//!
//! On platforms where the modal host does not resize for the software
//! keyboard, the sheet appends a spacer whose height is the part of the screen
//! the keyboard covers.

use super::config::Platform;

/// Last known software keyboard frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KeyboardState {
    /// Y coordinate of the keyboard's top edge; `None` when hidden.
    pub top: Option<f64>,
}

impl KeyboardState {
    /// Keyboard hidden.
    pub const HIDDEN: Self = Self { top: None };

    /// Keyboard shown with its top edge at `top`.
    pub const fn shown(top: f64) -> Self {
        Self { top: Some(top) }
    }
}

/// Whether `platform` needs an explicit spacer.
#[inline]
pub fn needs_spacer(platform: Platform) -> bool {
    matches!(platform, Platform::Ios)
}

/// Height the spacer must take.
///
/// `screen_height` is the override when the caller provided one, otherwise
/// the live screen height.
pub fn spacer_height(screen_height: f64, keyboard: KeyboardState) -> f64 {
    match keyboard.top {
        Some(top) => (screen_height - top).max(0.0),
        None => 0.0,
    }
}
