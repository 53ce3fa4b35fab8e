//! In-process Document store.
//!
//! Persistence is an external collaborator; what the service itself holds
//! is the working Document of each live session, keyed by id. Each session
//! owns exactly one Document, so writers never actually contend, but the
//! map is still behind an async RwLock because handlers run on the shared
//! runtime.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::document::Document;

#[derive(Clone, Default)]
pub struct DocumentStore {
    inner: Arc<RwLock<HashMap<Uuid, Document>>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty Document and returns its id.
    pub async fn create(&self) -> (Uuid, Document) {
        let id = Uuid::new_v4();
        let doc = Document::default();
        self.inner.write().await.insert(id, doc.clone());
        (id, doc)
    }

    /// Snapshot of the Document, or `None` for an unknown id.
    pub async fn get(&self, id: Uuid) -> Option<Document> {
        self.inner.read().await.get(&id).cloned()
    }

    /// Applies a mutation to the Document in place. Returns `None` for an
    /// unknown id; otherwise the closure's own result.
    pub async fn update<R>(&self, id: Uuid, f: impl FnOnce(&mut Document) -> R) -> Option<R> {
        self.inner.write().await.get_mut(&id).map(f)
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_returns_empty_document() {
        let store = DocumentStore::new();
        let (id, doc) = store.create().await;
        assert_eq!(doc, Document::default());
        assert_eq!(store.get(id).await, Some(doc));
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_none() {
        let store = DocumentStore::new();
        assert!(store.get(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn test_update_mutates_in_place() {
        let store = DocumentStore::new();
        let (id, _) = store.create().await;

        let result = store
            .update(id, |doc| {
                doc.skills.push("Rust".to_string());
                doc.skills.len()
            })
            .await;
        assert_eq!(result, Some(1));
        assert_eq!(store.get(id).await.unwrap().skills, vec!["Rust".to_string()]);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_none() {
        let store = DocumentStore::new();
        let touched = store.update(Uuid::new_v4(), |_| ()).await;
        assert!(touched.is_none());
    }

    #[tokio::test]
    async fn test_sessions_are_independent() {
        let store = DocumentStore::new();
        let (a, _) = store.create().await;
        let (b, _) = store.create().await;
        store
            .update(a, |doc| doc.personal_info.full_name = "Ada".to_string())
            .await;
        assert!(store.get(b).await.unwrap().personal_info.full_name.is_empty());
        assert_eq!(
            store.get(a).await.unwrap().personal_info.full_name,
            "Ada".to_string()
        );
    }
}
