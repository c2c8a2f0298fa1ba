#![forbid(unsafe_code)]

//! The slide sheet component.
//!
//! [`SlideSheet`] wires the pieces together: caller intent goes through
//! [`reconcile`], the resulting actions drive the [`TransitionController`], and
//! completions and requests reach the caller through its [`SheetListener`].
//!
//! # Close requests
//!
//! A backdrop tap does not close the sheet. It asks the caller to close via
//! `on_request_close(CloseReason::OverlayPress)`; the caller answers by hiding
//! the sheet, either with `set_intent(Intent::Hidden(reason))` or plainly with
//! `set_visible(false)`. The accepted tap stays pending until that hide (or
//! the next show), so a plain `set_visible(false)` still closes under the
//! backdrop policy. In [`ReconcileMode::Baseline`] a tap animates the close
//! directly and the request is sent once the panel is off-screen.
//!
//! # Invariants
//!
//! - `host_visible() == visible || is_animating()`.
//! - Taps are ignored while a transition is in flight.
//! - Each completed open fires `on_animate_open` once; each completed close
//!   fires `on_animate_close` then `on_dismiss` once.

use std::time::Duration;

use slidesheet_core::geometry::ScreenExtent;

use super::config::{SheetConfig, SheetConfigError};
use super::controller::{
    TransitionCompletion, TransitionController, TransitionDirection, TransitionPhase,
};
use super::host::{BackdropFrame, HostKind, SheetFrame, SheetRenderer};
use super::keyboard::{KeyboardState, needs_spacer, spacer_height};
use super::listener::SheetListener;
use super::props::{ForwardedProps, PropMap, SheetStyles, visible_prop};
use super::reconciler::{
    Action, CloseReason, Intent, ReconcileMode, Reconciliation, reconcile,
};

/// A panel that slides in from a screen edge over a dimming backdrop.
#[derive(Debug)]
pub struct SlideSheet<L: SheetListener = ()> {
    config: SheetConfig,
    controller: TransitionController,
    visible: bool,
    pending_close: Option<CloseReason>,
    forwarded: ForwardedProps,
    keyboard: KeyboardState,
    listener: L,
}

impl<L: SheetListener> SlideSheet<L> {
    /// Mount a sheet with the given initial intent.
    ///
    /// A sheet mounted visible either animates in or snaps open, per
    /// `animate_on_mount`.
    pub fn mount(
        config: SheetConfig,
        visible: bool,
        extent: ScreenExtent,
        listener: L,
    ) -> Result<Self, SheetConfigError> {
        config.validate()?;
        let controller = TransitionController::new(&config, extent);
        let forwarded = ForwardedProps::route(
            PropMap::new(),
            SheetStyles::default(),
            HostKind::from_native(config.is_native),
        );
        let mut sheet = Self {
            config,
            controller,
            visible,
            pending_close: None,
            forwarded,
            keyboard: KeyboardState::HIDDEN,
            listener,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "slidesheet::sheet",
            visible,
            edge = %sheet.config.position,
            animate_on_mount = sheet.config.policy.animate_on_mount,
            "mount"
        );

        let plan = reconcile(None, Intent::from_visible(visible), &sheet.config.policy);
        sheet.apply(plan);
        Ok(sheet)
    }

    /// Mount from a prop map: recognized props configure the sheet, `visible`
    /// sets the initial intent, and everything else is forwarded.
    pub fn mount_with_props(
        props: &PropMap,
        extent: ScreenExtent,
        listener: L,
    ) -> Result<Self, SheetConfigError> {
        let visible = visible_prop(props)?;
        let (config, _) = SheetConfig::from_props(props)?;
        let forwarded = ForwardedProps::from_props(props, HostKind::from_native(config.is_native))?;
        let mut sheet = Self::mount(config, visible, extent, listener)?;
        sheet.forwarded = forwarded;
        Ok(sheet)
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    pub fn controller(&self) -> &TransitionController {
        &self.controller
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    /// Consume the sheet, returning its listener.
    pub fn into_listener(self) -> L {
        self.listener
    }

    /// Last visible intent.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether a transition is in flight.
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.controller.is_animating()
    }

    pub fn phase(&self) -> TransitionPhase {
        self.controller.phase()
    }

    /// Whether the host should present anything at all.
    #[inline]
    pub fn host_visible(&self) -> bool {
        self.visible || self.controller.is_animating()
    }

    /// True from an accepted backdrop tap until the close it leads to resolves.
    pub fn is_closing_from_overlay_press(&self) -> bool {
        self.pending_close == Some(CloseReason::OverlayPress)
            || self.controller.closing_reason() == Some(CloseReason::OverlayPress)
    }

    /// Current panel offset.
    pub fn position(&self) -> f64 {
        self.controller.position()
    }

    /// Current backdrop opacity.
    pub fn overlay_opacity(&self) -> f64 {
        self.controller.opacity()
    }

    /// Replace the props forwarded to the host or panel, and the styles.
    ///
    /// Sheet keys are dropped; config is fixed at mount.
    pub fn set_forwarded_props(&mut self, props: &PropMap) -> Result<(), SheetConfigError> {
        let host = HostKind::from_native(self.config.is_native);
        self.forwarded = ForwardedProps::from_props(props, host)?;
        Ok(())
    }

    pub fn forwarded_props(&self) -> &ForwardedProps {
        &self.forwarded
    }

    /// Plain visible flag. A hide uses the pending backdrop request if there
    /// is one, and counts as an external close otherwise.
    pub fn set_visible(&mut self, visible: bool) {
        let intent = if visible {
            Intent::Visible
        } else {
            Intent::Hidden(self.pending_close.unwrap_or(CloseReason::External))
        };
        self.set_intent(intent);
    }

    /// Apply a new visible intent.
    pub fn set_intent(&mut self, intent: Intent) {
        let previous = self.visible;
        self.pending_close = None;
        self.visible = intent.is_visible();

        let plan = reconcile(Some(previous), intent, &self.config.policy);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "slidesheet::sheet",
            previous,
            ?intent,
            actions = ?plan.actions(),
            "intent"
        );

        self.apply(plan);
    }

    /// Handle a tap on the backdrop.
    ///
    /// Returns whether the tap was accepted.
    pub fn press_overlay(&mut self) -> bool {
        if !self.config.show_overlay || !self.config.should_close_on_overlay_press {
            return false;
        }
        if !self.host_visible() {
            return false;
        }
        if self.controller.is_animating() {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                target: "slidesheet::sheet",
                phase = ?self.controller.phase(),
                "overlay press ignored while animating"
            );
            return false;
        }

        match self.config.policy.mode {
            ReconcileMode::Policy => {
                self.pending_close = Some(CloseReason::OverlayPress);
                self.listener.on_request_close(CloseReason::OverlayPress);
            }
            ReconcileMode::Baseline => {
                self.controller.close(CloseReason::OverlayPress);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(target: "slidesheet::sheet", mode = ?self.config.policy.mode, "overlay press");

        true
    }

    /// Handle a close request from outside the backdrop (hardware back).
    ///
    /// Forwards `on_request_close(CloseReason::External)` while visible and
    /// replaces any pending backdrop request, so the hide that follows uses
    /// the external close policy.
    pub fn request_close(&mut self) -> bool {
        if !self.visible {
            return false;
        }
        self.pending_close = Some(CloseReason::External);
        self.listener.on_request_close(CloseReason::External);
        true
    }

    /// Update the live screen extent (rotation, window resize).
    pub fn set_screen_extent(&mut self, extent: ScreenExtent) {
        self.controller.set_screen_extent(extent);
    }

    /// Update the software keyboard frame.
    pub fn set_keyboard(&mut self, keyboard: KeyboardState) {
        self.keyboard = keyboard;
    }

    /// Advance the transition by `dt`, dispatching completion callbacks.
    pub fn tick(&mut self, dt: Duration) -> Option<TransitionCompletion> {
        let done = self.controller.tick(dt)?;
        match done.direction {
            TransitionDirection::Open => self.listener.on_animate_open(),
            TransitionDirection::Close => {
                self.listener.on_animate_close();
                self.listener.on_dismiss();
                if self.config.policy.mode == ReconcileMode::Baseline
                    && done.reason == Some(CloseReason::OverlayPress)
                {
                    self.listener.on_request_close(CloseReason::OverlayPress);
                }
            }
        }
        Some(done)
    }

    /// Snapshot of what to present this frame.
    pub fn frame(&self) -> SheetFrame {
        let host_visible = self.host_visible();
        let backdrop = (host_visible && self.config.show_overlay).then(|| BackdropFrame {
            opacity: self.controller.opacity(),
            tappable: self.config.should_close_on_overlay_press && !self.controller.is_animating(),
        });
        let keyboard_spacer = (host_visible && needs_spacer(self.config.platform)).then(|| {
            let height = self
                .config
                .screen_height
                .unwrap_or(self.controller.screen_extent().height);
            spacer_height(height, self.keyboard)
        });
        SheetFrame {
            host: host_visible.then(|| HostKind::from_native(self.config.is_native)),
            backdrop,
            panel: self.controller.transform(),
            keyboard_spacer,
        }
    }

    /// Present the current frame through `renderer`.
    pub fn render<R: SheetRenderer>(&self, renderer: &mut R) {
        let frame = self.frame();
        let Some(host) = frame.host else {
            return;
        };
        let styles = &self.forwarded.styles;
        renderer.begin(host, &self.forwarded.host);
        renderer.container(&styles.container);
        if let Some(backdrop) = frame.backdrop {
            renderer.backdrop(backdrop, &styles.overlay);
        }
        renderer.panel(frame.panel, &styles.panel, &self.forwarded.panel);
        if let Some(height) = frame.keyboard_spacer {
            renderer.keyboard_spacer(height);
        }
        renderer.end();
    }

    fn apply(&mut self, plan: Reconciliation) {
        for action in plan {
            match action {
                Action::AnimateOpen => {
                    self.controller.open();
                }
                Action::SnapOpen => self.controller.snap_open(),
                Action::AnimateClose(reason) => {
                    self.controller.close(reason);
                }
                Action::SnapClosed(_) => self.controller.snap_closed(),
                Action::NotifyOpened => self.listener.on_animate_open(),
                Action::NotifyClosed(_) => {
                    self.listener.on_animate_close();
                    self.listener.on_dismiss();
                }
                Action::EchoRequestClose(reason) => self.listener.on_request_close(reason),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::{Platform, SheetEvent};
    use slidesheet_core::geometry::{Edge, PanelTransform};

    const PHONE: ScreenExtent = ScreenExtent::new(390.0, 844.0);
    const MS_16: Duration = Duration::from_millis(16);

    type Recorded = SlideSheet<Vec<SheetEvent>>;

    fn mount(config: SheetConfig, visible: bool) -> Recorded {
        SlideSheet::mount(config, visible, PHONE, Vec::new()).expect("valid config")
    }

    fn settle(sheet: &mut Recorded) {
        for _ in 0..100 {
            if sheet.tick(MS_16).is_some() {
                return;
            }
        }
    }

    #[test]
    fn mount_hidden_stays_closed() {
        let sheet = mount(SheetConfig::default(), false);
        assert_eq!(sheet.phase(), TransitionPhase::Closed);
        assert!(!sheet.host_visible());
        assert!(sheet.listener().is_empty());
        assert_eq!(sheet.frame().host, None);
    }

    #[test]
    fn mount_rejects_invalid_config() {
        let err = SlideSheet::mount(SheetConfig::new().overlay_opacity(3.0), true, PHONE, ())
            .unwrap_err();
        assert!(matches!(err, SheetConfigError::InvalidOpacity { .. }));
    }

    #[test]
    fn mount_visible_animated() {
        let mut sheet = mount(SheetConfig::default().animate_on_mount(true), true);
        assert!(sheet.is_animating());
        assert!(sheet.listener().is_empty());
        settle(&mut sheet);
        assert_eq!(sheet.listener(), &vec![SheetEvent::AnimateOpen]);
        assert_eq!(sheet.position(), 0.0);
    }

    #[test]
    fn show_then_hide_animated_by_request_policy() {
        let mut sheet = mount(
            SheetConfig::default().should_animate_on_request_close(true),
            false,
        );
        sheet.set_visible(true);
        assert!(sheet.is_animating());
        settle(&mut sheet);
        sheet.set_visible(false);
        assert!(sheet.is_animating());
        assert!(sheet.host_visible());
        settle(&mut sheet);
        assert!(!sheet.host_visible());
        assert_eq!(
            sheet.listener(),
            &vec![
                SheetEvent::AnimateOpen,
                SheetEvent::AnimateClose,
                SheetEvent::Dismiss
            ]
        );
    }

    #[test]
    fn external_hide_snaps_by_default() {
        let mut sheet = mount(SheetConfig::default(), true);
        sheet.set_visible(false);
        assert!(!sheet.is_animating());
        assert_eq!(sheet.position(), 844.0);
        assert_eq!(sheet.overlay_opacity(), 0.0);
        assert_eq!(
            sheet.listener(),
            &vec![
                SheetEvent::AnimateOpen,
                SheetEvent::AnimateClose,
                SheetEvent::Dismiss
            ]
        );
    }

    #[test]
    fn tap_requests_close_without_closing() {
        let mut sheet = mount(SheetConfig::default(), true);
        sheet.listener_mut().clear();
        assert!(sheet.press_overlay());
        assert!(sheet.is_closing_from_overlay_press());
        assert_eq!(sheet.phase(), TransitionPhase::Open);
        assert_eq!(
            sheet.listener(),
            &vec![SheetEvent::RequestClose(CloseReason::OverlayPress)]
        );
    }

    #[test]
    fn tap_flag_clears_when_close_resolves() {
        let mut sheet = mount(SheetConfig::default(), true);
        sheet.press_overlay();
        sheet.set_visible(false);
        assert!(sheet.is_animating());
        assert!(sheet.is_closing_from_overlay_press());
        settle(&mut sheet);
        assert!(!sheet.is_closing_from_overlay_press());
    }

    #[test]
    fn tap_respects_close_flag_and_overlay_visibility() {
        let mut sheet = mount(
            SheetConfig::default().should_close_on_overlay_press(false),
            true,
        );
        assert!(!sheet.press_overlay());

        let mut sheet = mount(SheetConfig::default().show_overlay(false), true);
        assert!(!sheet.press_overlay());
        assert_eq!(sheet.frame().backdrop, None);

        let mut sheet = mount(SheetConfig::default(), false);
        assert!(!sheet.press_overlay());
    }

    #[test]
    fn reopen_clears_pending_tap() {
        let mut sheet = mount(SheetConfig::default(), true);
        sheet.press_overlay();
        sheet.set_visible(true);
        assert!(!sheet.is_closing_from_overlay_press());
    }

    #[test]
    fn hardware_back_requests_external_close() {
        let mut sheet = mount(SheetConfig::default(), true);
        sheet.listener_mut().clear();
        assert!(sheet.request_close());
        assert_eq!(
            sheet.listener(),
            &vec![SheetEvent::RequestClose(CloseReason::External)]
        );
        sheet.set_visible(false);
        assert!(!sheet.request_close());
    }

    #[test]
    fn hardware_back_after_tap_closes_as_external() {
        let mut sheet = mount(
            SheetConfig::default()
                .should_animate_on_overlay_press(false)
                .should_animate_on_request_close(true),
            true,
        );
        assert!(sheet.press_overlay());
        assert!(sheet.request_close());
        assert!(!sheet.is_closing_from_overlay_press());

        sheet.set_visible(false);
        assert!(sheet.is_animating());
        assert_eq!(
            sheet.controller().closing_reason(),
            Some(CloseReason::External)
        );
    }

    #[test]
    fn frame_reports_backdrop_and_transform() {
        let sheet = mount(SheetConfig::default().position(Edge::Top), true);
        let frame = sheet.frame();
        assert_eq!(frame.host, Some(HostKind::NativeModal));
        assert_eq!(
            frame.backdrop,
            Some(BackdropFrame {
                opacity: 0.5,
                tappable: true
            })
        );
        assert_eq!(frame.panel, PanelTransform::TranslateY(0.0));
        assert_eq!(frame.keyboard_spacer, None);
    }

    #[test]
    fn frame_marks_backdrop_untappable_mid_animation() {
        let sheet = mount(
            SheetConfig::default().animate_on_mount(true).is_native(false),
            true,
        );
        let frame = sheet.frame();
        assert_eq!(frame.host, Some(HostKind::Overlay));
        assert_eq!(frame.backdrop.map(|b| b.tappable), Some(false));
    }

    #[test]
    fn keyboard_spacer_uses_height_override_on_ios() {
        let mut sheet = mount(
            SheetConfig::default()
                .platform(Platform::Ios)
                .screen_height(800.0),
            true,
        );
        assert_eq!(sheet.frame().keyboard_spacer, Some(0.0));
        sheet.set_keyboard(KeyboardState::shown(500.0));
        assert_eq!(sheet.frame().keyboard_spacer, Some(300.0));
    }

    #[test]
    fn baseline_tap_animates_then_requests_close() {
        let mut sheet = mount(SheetConfig::baseline(), true);
        settle(&mut sheet);
        sheet.listener_mut().clear();

        assert!(sheet.press_overlay());
        assert_eq!(sheet.phase(), TransitionPhase::Closing);
        assert!(sheet.listener().is_empty());
        settle(&mut sheet);
        assert_eq!(
            sheet.listener(),
            &vec![
                SheetEvent::AnimateClose,
                SheetEvent::Dismiss,
                SheetEvent::RequestClose(CloseReason::OverlayPress)
            ]
        );

        // The caller hides the already-closed sheet; the hide is echoed too.
        sheet.set_visible(false);
        assert_eq!(sheet.phase(), TransitionPhase::Closed);
        assert_eq!(
            &sheet.listener()[3..],
            &[SheetEvent::RequestClose(CloseReason::External)]
        );
    }

    #[test]
    fn baseline_hide_snaps_and_echoes_request() {
        let mut sheet = mount(SheetConfig::baseline(), true);
        settle(&mut sheet);
        sheet.listener_mut().clear();
        sheet.set_visible(false);
        assert_eq!(sheet.phase(), TransitionPhase::Closed);
        assert_eq!(
            sheet.listener(),
            &vec![SheetEvent::RequestClose(CloseReason::External)]
        );
    }
}
