//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is the central publish/subscribe hub for [`DomainEvent`]s.
//! It is designed to be shared via `Arc<EventBus>` across the application.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use castdesk_core::types::DbId;

// ---------------------------------------------------------------------------
// DomainEvent
// ---------------------------------------------------------------------------

/// User-facing weight of an event when it surfaces as a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    /// Stable string representation matching serde's `rename_all = "lowercase"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

/// A domain event that occurred on the platform.
///
/// Constructed via [`DomainEvent::new`] and enriched with the builder
/// methods [`with_source`](DomainEvent::with_source) and
/// [`with_payload`](DomainEvent::with_payload).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    /// Dot-separated event name, e.g. `"booking.status_changed"`.
    pub event_type: String,

    /// User-facing severity of the event.
    pub severity: Severity,

    /// Short human-readable description shown in the notification feed.
    pub message: String,

    /// Optional source entity kind (e.g. `"booking"`, `"import"`).
    pub source_entity_type: Option<String>,

    /// Optional source entity database id.
    pub source_entity_id: Option<DbId>,

    /// Free-form JSON payload carrying event-specific data.
    pub payload: serde_json::Value,

    /// When the event was created (UTC).
    pub timestamp: DateTime<Utc>,
}

impl DomainEvent {
    /// Create a new event with the required fields. Payload defaults to an
    /// empty object, source to none.
    pub fn new(event_type: impl Into<String>, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            severity,
            message: message.into(),
            source_entity_type: None,
            source_entity_id: None,
            payload: serde_json::Value::Object(Default::default()),
            timestamp: Utc::now(),
        }
    }

    /// Attach a source entity to the event.
    pub fn with_source(mut self, entity_type: impl Into<String>, entity_id: DbId) -> Self {
        self.source_entity_type = Some(entity_type.into());
        self.source_entity_id = Some(entity_id);
        self
    }

    /// Set the JSON payload for the event.
    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out event bus.
///
/// Wraps a [`broadcast::Sender`] so that any number of subscribers can
/// independently receive every published [`DomainEvent`].
pub struct EventBus {
    sender: broadcast::Sender<DomainEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed messages are dropped
    /// and slow receivers will observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// If there are no active subscribers the event is silently dropped.
    pub fn publish(&self, event: DomainEvent) {
        // Ignore the SendError; it only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    /// Subscribe to all events published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<DomainEvent> {
        self.sender.subscribe()
    }

    /// Number of currently active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscriber_receives_published_event() {
        let bus = EventBus::default();
        let mut rx = bus.subscribe();

        bus.publish(
            DomainEvent::new("booking.status_changed", Severity::Success, "Booking confirmed")
                .with_source("booking", 7)
                .with_payload(serde_json::json!({"from": "pending", "to": "confirmed"})),
        );

        let event = rx.recv().await.unwrap();
        assert_eq!(event.event_type, "booking.status_changed");
        assert_eq!(event.severity, Severity::Success);
        assert_eq!(event.source_entity_id, Some(7));
        assert_eq!(event.payload["to"], "confirmed");
    }

    #[tokio::test]
    async fn test_publish_without_subscribers_is_silent() {
        let bus = EventBus::default();
        assert_eq!(bus.subscriber_count(), 0);
        // Must not panic or error.
        bus.publish(DomainEvent::new("import.committed", Severity::Info, "noop"));
    }

    #[tokio::test]
    async fn test_each_subscriber_sees_every_event() {
        let bus = EventBus::default();
        let mut a = bus.subscribe();
        let mut b = bus.subscribe();

        bus.publish(DomainEvent::new("talent.created", Severity::Info, "one"));
        bus.publish(DomainEvent::new("talent.created", Severity::Info, "two"));

        assert_eq!(a.recv().await.unwrap().message, "one");
        assert_eq!(a.recv().await.unwrap().message, "two");
        assert_eq!(b.recv().await.unwrap().message, "one");
        assert_eq!(b.recv().await.unwrap().message, "two");
    }

    #[test]
    fn test_severity_strings() {
        assert_eq!(Severity::Success.as_str(), "success");
        assert_eq!(Severity::Error.as_str(), "error");
        assert_eq!(Severity::Info.as_str(), "info");
    }
}
