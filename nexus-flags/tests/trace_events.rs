#![cfg(feature = "tracing")]

use std::fmt;
use std::sync::{Arc, Mutex};

use nexus_flags::{FlagSet, Flags};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::Registry;

#[derive(Flags, Clone, Copy)]
#[repr(u32)]
pub enum Perm {
    Read = 1,
    Write = 2,
}

type Fields = Vec<(String, String)>;

/// Layer that records the fields of every `nexus_flags` event.
#[derive(Clone, Default)]
struct Capture {
    events: Arc<Mutex<Vec<Fields>>>,
}

struct Recorder(Fields);

impl Visit for Recorder {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

impl<S: Subscriber> Layer<S> for Capture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if event.metadata().target() != "nexus_flags" {
            return;
        }
        let mut recorder = Recorder(Vec::new());
        event.record(&mut recorder);
        self.events.lock().unwrap().push(recorder.0);
    }
}

fn field<'a>(fields: &'a Fields, name: &str) -> Option<&'a str> {
    fields
        .iter()
        .find(|(n, _)| n == name)
        .map(|(_, v)| v.as_str())
}

fn capture(f: impl FnOnce()) -> Vec<Fields> {
    let capture = Capture::default();
    let subscriber = Registry::default().with(capture.clone());
    tracing::subscriber::with_default(subscriber, f);
    let events = capture.events.lock().unwrap().clone();
    events
}

#[test]
fn effective_changes_are_traced() {
    let events = capture(|| {
        let mut set = FlagSet::<Perm>::new();
        set.add_flag(Perm::Read.bits())
            .add_flag(Perm::Read.bits())
            .set_mask(3);
    });

    assert_eq!(events.len(), 2);
    assert_eq!(field(&events[0], "old"), Some("0"));
    assert_eq!(field(&events[0], "new"), Some("1"));
    assert_eq!(field(&events[1], "old"), Some("1"));
    assert_eq!(field(&events[1], "new"), Some("3"));
    assert!(field(&events[0], "vocabulary").unwrap().ends_with("Perm"));
}

#[test]
fn unchanged_mask_is_not_traced() {
    let events = capture(|| {
        let mut set = FlagSet::<Perm>::with_mask(2);
        set.set_mask(2).remove_flag(Perm::Read.bits()).retain_known();
    });

    assert!(events.is_empty());
}
