//! Background notification writer.
//!
//! [`NotificationWriter`] subscribes to the [`EventBus`](crate::bus::EventBus)
//! broadcast channel and writes one notification feed row per received
//! [`DomainEvent`]. It runs as a long-lived background task and shuts down
//! gracefully when the bus sender is dropped.

use tokio::sync::broadcast;

use castdesk_core::types::DbId;
use castdesk_db::repositories::NotificationRepo;
use castdesk_db::DbPool;

use crate::bus::DomainEvent;

/// The deployment currently runs single-admin; every notification lands
/// in this user's feed.
pub const ADMIN_USER_ID: DbId = 1;

/// Background service that persists events as notification rows.
pub struct NotificationWriter {
    pool: DbPool,
}

impl NotificationWriter {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Run the writer loop.
    ///
    /// Subscribes to the event bus via the provided `receiver` and writes
    /// every event it receives. The loop exits when the channel is closed
    /// (i.e. the [`EventBus`](crate::bus::EventBus) is dropped).
    pub async fn run(self, mut receiver: broadcast::Receiver<DomainEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) => {
                    if let Err(e) = self.write(&event).await {
                        tracing::error!(
                            error = %e,
                            event_type = %event.event_type,
                            "Failed to write notification"
                        );
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(
                        skipped = n,
                        "Notification writer lagged, some events were not recorded"
                    );
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, notification writer shutting down");
                    break;
                }
            }
        }
    }

    /// Write a single event to the `notifications` table.
    async fn write(&self, event: &DomainEvent) -> Result<DbId, sqlx::Error> {
        NotificationRepo::create(
            &self.pool,
            ADMIN_USER_ID,
            &event.event_type,
            event.severity.as_str(),
            &event.message,
            &event.payload,
        )
        .await
    }
}
