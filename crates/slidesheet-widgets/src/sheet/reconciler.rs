#![forbid(unsafe_code)]

//! Visibility reconciler.
//!
//! [`reconcile`] is a pure function from the previous visible intent, the new
//! intent, and the caller's [`TransitionPolicy`] to the list of [`Action`]s the
//! sheet must perform. It never touches channels or listeners, so the whole
//! transition table can be tested without a sheet.
//!
//! # Transition table ([`ReconcileMode::Policy`])
//!
//! | previous | intent | policy | actions |
//! |---|---|---|---|
//! | mount | visible | `animate_on_mount` | `AnimateOpen` |
//! | mount | visible | `!animate_on_mount` | `SnapOpen`, `NotifyOpened` |
//! | mount | hidden | any | none |
//! | hidden | visible | any | `AnimateOpen` |
//! | visible | hidden(r) | `animates_close(r)` | `AnimateClose(r)` |
//! | visible | hidden(r) | `!animates_close(r)` | `SnapClosed(r)`, `NotifyClosed(r)` |
//! | same | same | any | none |
//!
//! [`ReconcileMode::Baseline`] always animates opens and turns every hide into
//! `SnapClosed(r)`, `EchoRequestClose(r)`.

use super::config::TransitionPolicy;

/// Why a close was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CloseReason {
    /// The backdrop was tapped.
    OverlayPress,
    /// Anything else: a caller decision, a hardware back action, etc.
    External,
}

/// Desired visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Visible,
    Hidden(CloseReason),
}

impl Intent {
    /// Map a plain visible flag, treating a hide as externally requested.
    #[inline]
    pub fn from_visible(visible: bool) -> Self {
        if visible {
            Self::Visible
        } else {
            Self::Hidden(CloseReason::External)
        }
    }

    #[inline]
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }
}

/// Which transition table to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ReconcileMode {
    /// Policy flags decide between animating and snapping.
    #[default]
    Policy,
    /// Always animate opens; hides snap and echo the close request.
    Baseline,
}

/// One step the sheet performs in response to an intent change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AnimateOpen,
    SnapOpen,
    AnimateClose(CloseReason),
    SnapClosed(CloseReason),
    /// Fire the open acknowledgement.
    NotifyOpened,
    /// Fire the close acknowledgements.
    NotifyClosed(CloseReason),
    /// Forward the close request back to the caller.
    EchoRequestClose(CloseReason),
}

/// Ordered actions produced by [`reconcile`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Reconciliation {
    actions: Vec<Action>,
}

impl Reconciliation {
    fn none() -> Self {
        Self::default()
    }

    fn of(actions: &[Action]) -> Self {
        Self {
            actions: actions.to_vec(),
        }
    }

    /// Actions in execution order.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Whether nothing needs to happen.
    pub fn is_noop(&self) -> bool {
        self.actions.is_empty()
    }
}

impl IntoIterator for Reconciliation {
    type Item = Action;
    type IntoIter = std::vec::IntoIter<Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.into_iter()
    }
}

/// Decide what to do when visible intent moves from `previous` to `intent`.
///
/// `previous == None` means the sheet is being mounted.
pub fn reconcile(
    previous: Option<bool>,
    intent: Intent,
    policy: &TransitionPolicy,
) -> Reconciliation {
    match policy.mode {
        ReconcileMode::Policy => reconcile_policy(previous, intent, policy),
        ReconcileMode::Baseline => reconcile_baseline(previous, intent),
    }
}

fn reconcile_policy(
    previous: Option<bool>,
    intent: Intent,
    policy: &TransitionPolicy,
) -> Reconciliation {
    match (previous, intent) {
        (None, Intent::Visible) if policy.animate_on_mount => {
            Reconciliation::of(&[Action::AnimateOpen])
        }
        (None, Intent::Visible) => Reconciliation::of(&[Action::SnapOpen, Action::NotifyOpened]),
        (None, Intent::Hidden(_)) => Reconciliation::none(),
        (Some(false), Intent::Visible) => Reconciliation::of(&[Action::AnimateOpen]),
        (Some(true), Intent::Hidden(reason)) if policy.animates_close(reason) => {
            Reconciliation::of(&[Action::AnimateClose(reason)])
        }
        (Some(true), Intent::Hidden(reason)) => Reconciliation::of(&[
            Action::SnapClosed(reason),
            Action::NotifyClosed(reason),
        ]),
        (Some(true), Intent::Visible) | (Some(false), Intent::Hidden(_)) => {
            Reconciliation::none()
        }
    }
}

fn reconcile_baseline(previous: Option<bool>, intent: Intent) -> Reconciliation {
    match (previous, intent) {
        (None | Some(false), Intent::Visible) => Reconciliation::of(&[Action::AnimateOpen]),
        (Some(true), Intent::Hidden(reason)) => Reconciliation::of(&[
            Action::SnapClosed(reason),
            Action::EchoRequestClose(reason),
        ]),
        (None | Some(false), Intent::Hidden(_)) | (Some(true), Intent::Visible) => {
            Reconciliation::none()
        }
    }
}
