#![forbid(unsafe_code)]

//! Lifecycle callbacks.

use super::reconciler::CloseReason;

/// Receives the sheet's lifecycle notifications.
///
/// Every method defaults to a no-op.
pub trait SheetListener {
    /// The sheet wants the caller to hide it (flip visible intent to hidden).
    fn on_request_close(&mut self, _reason: CloseReason) {}

    /// An open finished, animated or snapped.
    fn on_animate_open(&mut self) {}

    /// A close finished, animated or snapped.
    fn on_animate_close(&mut self) {}

    /// Close acknowledgement; always follows [`on_animate_close`](Self::on_animate_close).
    fn on_dismiss(&mut self) {}
}

impl SheetListener for () {}

/// Recorded form of a listener call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetEvent {
    RequestClose(CloseReason),
    AnimateOpen,
    AnimateClose,
    Dismiss,
}

/// Records every notification in call order.
impl SheetListener for Vec<SheetEvent> {
    fn on_request_close(&mut self, reason: CloseReason) {
        self.push(SheetEvent::RequestClose(reason));
    }

    fn on_animate_open(&mut self) {
        self.push(SheetEvent::AnimateOpen);
    }

    fn on_animate_close(&mut self) {
        self.push(SheetEvent::AnimateClose);
    }

    fn on_dismiss(&mut self) {
        self.push(SheetEvent::Dismiss);
    }
}

impl<L: SheetListener + ?Sized> SheetListener for &mut L {
    fn on_request_close(&mut self, reason: CloseReason) {
        (**self).on_request_close(reason);
    }

    fn on_animate_open(&mut self) {
        (**self).on_animate_open();
    }

    fn on_animate_close(&mut self) {
        (**self).on_animate_close();
    }

    fn on_dismiss(&mut self) {
        (**self).on_dismiss();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_keeps_call_order() {
        let mut events: Vec<SheetEvent> = Vec::new();
        events.on_request_close(CloseReason::OverlayPress);
        events.on_animate_close();
        events.on_dismiss();
        assert_eq!(
            events,
            vec![
                SheetEvent::RequestClose(CloseReason::OverlayPress),
                SheetEvent::AnimateClose,
                SheetEvent::Dismiss
            ]
        );
    }

    #[test]
    fn borrowed_listener_forwards() {
        fn open_with<L: SheetListener>(mut listener: L) {
            listener.on_animate_open();
        }

        let mut events: Vec<SheetEvent> = Vec::new();
        open_with(&mut events);
        assert_eq!(events, vec![SheetEvent::AnimateOpen]);
    }
}
