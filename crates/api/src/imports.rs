//! In-memory store of import preview sessions.
//!
//! A session is created when a spreadsheet is uploaded and parsed, and
//! discarded on commit or cancellation; the preview state never outlives
//! the import attempt, so nothing is persisted. The store is capped and
//! evicts the oldest session when full, so abandoned uploads cannot
//! accumulate.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use castdesk_core::import::preview::ImportPreview;

/// One live import preview session.
#[derive(Debug)]
pub struct ImportSession {
    pub id: Uuid,
    /// Display name of the uploaded file, recorded on the final report.
    pub source_name: String,
    pub preview: ImportPreview,
    pub created_at: DateTime<Utc>,
}

/// Capped, keyed store of live sessions.
pub struct ImportStore {
    cap: usize,
    sessions: RwLock<HashMap<Uuid, ImportSession>>,
}

impl ImportStore {
    /// Create a store holding at most `cap` sessions (minimum 1).
    pub fn new(cap: usize) -> Self {
        Self {
            cap: cap.max(1),
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Insert a new session, evicting the oldest one if the store is full.
    /// Returns the new session's id.
    pub async fn insert(&self, source_name: String, preview: ImportPreview) -> Uuid {
        let mut sessions = self.sessions.write().await;
        if sessions.len() >= self.cap {
            if let Some(oldest) = sessions
                .values()
                .min_by_key(|s| s.created_at)
                .map(|s| s.id)
            {
                sessions.remove(&oldest);
                tracing::warn!(session_id = %oldest, "Import session evicted (store full)");
            }
        }
        let id = Uuid::new_v4();
        sessions.insert(
            id,
            ImportSession {
                id,
                source_name,
                preview,
                created_at: Utc::now(),
            },
        );
        id
    }

    /// Run a closure over a session, if it exists.
    pub async fn with_session<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&ImportSession) -> R,
    ) -> Option<R> {
        let sessions = self.sessions.read().await;
        sessions.get(&id).map(f)
    }

    /// Run a closure over a mutable session, if it exists.
    pub async fn with_session_mut<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut ImportSession) -> R,
    ) -> Option<R> {
        let mut sessions = self.sessions.write().await;
        sessions.get_mut(&id).map(f)
    }

    /// Remove a session, returning it if it existed.
    pub async fn remove(&self, id: Uuid) -> Option<ImportSession> {
        self.sessions.write().await.remove(&id)
    }

    /// Number of live sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use castdesk_core::import::RowRecord;

    fn preview(rows: usize) -> ImportPreview {
        let rows: Vec<RowRecord> = (0..rows)
            .map(|i| {
                let mut row = RowRecord::new();
                row.insert("full_name".into(), format!("P{i}"));
                row.insert("email".into(), format!("p{i}@example.com"));
                row
            })
            .collect();
        ImportPreview::new(vec!["full_name".into(), "email".into()], rows)
    }

    #[tokio::test]
    async fn test_insert_and_fetch() {
        let store = ImportStore::new(4);
        let id = store.insert("roster.xlsx".into(), preview(3)).await;

        let count = store
            .with_session(id, |s| {
                assert_eq!(s.source_name, "roster.xlsx");
                s.preview.row_count()
            })
            .await;
        assert_eq!(count, Some(3));
    }

    #[tokio::test]
    async fn test_unknown_session_is_none() {
        let store = ImportStore::new(4);
        assert!(store.with_session(Uuid::new_v4(), |_| ()).await.is_none());
        assert!(store.remove(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn test_mutation_persists_across_calls() {
        let store = ImportStore::new(4);
        let id = store.insert("roster.xlsx".into(), preview(3)).await;

        store
            .with_session_mut(id, |s| s.preview.toggle_row(1).unwrap())
            .await
            .unwrap();

        let selected = store
            .with_session(id, |s| s.preview.selected_count())
            .await
            .unwrap();
        assert_eq!(selected, 2);
    }

    #[tokio::test]
    async fn test_eviction_drops_oldest() {
        let store = ImportStore::new(2);
        let first = store.insert("a.xlsx".into(), preview(1)).await;
        let second = store.insert("b.xlsx".into(), preview(1)).await;
        let third = store.insert("c.xlsx".into(), preview(1)).await;

        assert_eq!(store.len().await, 2);
        assert!(store.with_session(first, |_| ()).await.is_none());
        assert!(store.with_session(second, |_| ()).await.is_some());
        assert!(store.with_session(third, |_| ()).await.is_some());
    }

    #[tokio::test]
    async fn test_remove_frees_capacity() {
        let store = ImportStore::new(1);
        let id = store.insert("a.xlsx".into(), preview(1)).await;
        assert!(store.remove(id).await.is_some());
        assert_eq!(store.len().await, 0);
    }
}
