//! Castdesk event bus and notification infrastructure.
//!
//! - [`EventBus`] — in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`DomainEvent`] — the canonical domain event envelope.
//! - [`NotificationWriter`] — background service that turns every event
//!   into a notification feed row.

pub mod bus;
pub mod notifier;

pub use bus::{DomainEvent, EventBus, Severity};
pub use notifier::NotificationWriter;
