//! Structured log output of the sheet and its transition controller.

#![cfg(feature = "tracing")]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use slidesheet_core::geometry::ScreenExtent;
use slidesheet_widgets::sheet::{SheetConfig, SlideSheet};
use tracing::Subscriber;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::{Context, SubscriberExt};

#[derive(Debug, Default)]
struct Captured {
    events: Vec<(String, String)>,
}

struct SheetTraceCapture {
    state: Arc<Mutex<Captured>>,
}

impl<S> Layer<S> for SheetTraceCapture
where
    S: Subscriber + for<'lookup> tracing_subscriber::registry::LookupSpan<'lookup>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let target = event.metadata().target();
        if !target.starts_with("slidesheet::") {
            return;
        }

        #[derive(Default)]
        struct MessageVisitor {
            message: String,
        }

        impl tracing::field::Visit for MessageVisitor {
            fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
                if field.name() == "message" {
                    self.message = format!("{value:?}");
                }
            }
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        self.state
            .lock()
            .expect("capture lock")
            .events
            .push((target.to_owned(), visitor.message));
    }
}

#[test]
fn open_and_settle_are_logged() {
    let state = Arc::new(Mutex::new(Captured::default()));
    let subscriber = tracing_subscriber::registry().with(SheetTraceCapture {
        state: Arc::clone(&state),
    });
    let _guard = tracing::subscriber::set_default(subscriber);
    tracing::callsite::rebuild_interest_cache();

    let mut sheet = SlideSheet::mount(SheetConfig::new(), false, ScreenExtent::new(390.0, 844.0), ())
        .expect("valid config");
    sheet.set_visible(true);
    while sheet.tick(Duration::from_millis(16)).is_none() {}

    tracing::callsite::rebuild_interest_cache();
    let snapshot = state.lock().expect("capture lock");
    let has = |target: &str, message: &str| {
        snapshot
            .events
            .iter()
            .any(|(t, m)| t == target && m == message)
    };
    assert!(has("slidesheet::sheet", "mount"), "{:?}", snapshot.events);
    assert!(has("slidesheet::sheet", "intent"), "{:?}", snapshot.events);
    assert!(has("slidesheet::transition", "open"), "{:?}", snapshot.events);
    assert!(has("slidesheet::transition", "settled"), "{:?}", snapshot.events);
}
