#![forbid(unsafe_code)]

//! Presentation host seam.
//!
//! The sheet decides *what* to present each frame and hands it to a
//! [`SheetRenderer`]; how a native modal window or overlay view is realized is
//! up to the renderer.

use slidesheet_core::geometry::PanelTransform;

use super::props::PropMap;

/// Where the sheet is hosted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostKind {
    /// Platform modal dialog window.
    NativeModal,
    /// Plain full-screen view layered over the app.
    Overlay,
}

impl HostKind {
    #[inline]
    pub fn from_native(is_native: bool) -> Self {
        if is_native {
            Self::NativeModal
        } else {
            Self::Overlay
        }
    }
}

/// Backdrop state for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackdropFrame {
    pub opacity: f64,
    /// Whether a tap would currently be accepted.
    pub tappable: bool,
}

/// Snapshot of everything a renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetFrame {
    /// `None` when nothing should be presented.
    pub host: Option<HostKind>,
    pub backdrop: Option<BackdropFrame>,
    pub panel: PanelTransform,
    pub keyboard_spacer: Option<f64>,
}

/// Externally provided drawing primitives.
///
/// Calls arrive in order: `begin`, `container`, `backdrop` (when shown),
/// `panel`, `keyboard_spacer` (when needed), `end`.
pub trait SheetRenderer {
    /// Open the host. `props` are the caller props forwarded to it.
    fn begin(&mut self, host: HostKind, props: &PropMap);

    /// Outer container holding backdrop and panel, styled by `containerStyle`.
    fn container(&mut self, _style: &PropMap) {}

    /// Full-screen dimmable surface, styled by `overlayStyle`.
    fn backdrop(&mut self, backdrop: BackdropFrame, style: &PropMap);

    /// Content panel at its animated offset, styled by `style`. `props` are
    /// forwarded caller props when the host is an overlay.
    fn panel(&mut self, transform: PanelTransform, style: &PropMap, props: &PropMap);

    /// Trailing keyboard spacer.
    fn keyboard_spacer(&mut self, _height: f64) {}

    fn end(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_flag_selects_host() {
        assert_eq!(HostKind::from_native(true), HostKind::NativeModal);
        assert_eq!(HostKind::from_native(false), HostKind::Overlay);
    }
}
