//! In-memory story store.

use async_trait::async_trait;
use fresco_core::StoryDocument;
use fresco_error::StoreError;
use fresco_interface::StoryStore;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Holds the current story in process memory.
///
/// Cloning shares the underlying slot, so a service and a test can observe
/// the same store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Arc<RwLock<Option<StoryDocument>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StoryStore for MemoryStore {
    async fn load(&self) -> Result<Option<StoryDocument>, StoreError> {
        Ok(self.slot.read().await.clone())
    }

    async fn save(&self, document: &StoryDocument) -> Result<(), StoreError> {
        *self.slot.write().await = Some(document.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn clones_share_the_same_slot() {
        let store = MemoryStore::new();
        let other = store.clone();
        let document = StoryDocument::new("gefo", "theme", "summary", vec![]);
        store.save(&document).await.unwrap();
        assert_eq!(other.load().await.unwrap().unwrap().summary, "summary");
    }

    #[tokio::test]
    async fn starts_empty() {
        assert!(MemoryStore::new().load().await.unwrap().is_none());
    }
}
