//! In-memory `StudyStore` implementation
//!
//! Backs tests and embeddings that have no platform storage. Records are
//! held as serialized JSON, the same shape a browser host keeps in
//! localStorage, so the store doubles as a check that every persisted
//! type round-trips through its wire form.

use crate::error::Result;
use crate::traits::StudyStore;
use crate::types::{SetId, StudySet, UserProgress};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Thread-safe in-memory store over JSON records
#[derive(Debug, Default)]
pub struct MemoryStore {
    sets: RwLock<HashMap<SetId, String>>,
    progress: RwLock<Option<String>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sets
    pub async fn len(&self) -> usize {
        self.sets.read().await.len()
    }

    /// Whether the store holds no sets
    pub async fn is_empty(&self) -> bool {
        self.sets.read().await.is_empty()
    }
}

#[async_trait]
impl StudyStore for MemoryStore {
    async fn save_set(&self, set: &StudySet) -> Result<()> {
        let record = serde_json::to_string(set)?;
        self.sets.write().await.insert(set.id.clone(), record);
        Ok(())
    }

    async fn load_set(&self, id: &SetId) -> Result<Option<StudySet>> {
        match self.sets.read().await.get(id) {
            Some(record) => Ok(Some(serde_json::from_str(record)?)),
            None => Ok(None),
        }
    }

    async fn load_sets(&self) -> Result<Vec<StudySet>> {
        self.sets
            .read()
            .await
            .values()
            .map(|record| serde_json::from_str(record).map_err(Into::into))
            .collect()
    }

    async fn delete_set(&self, id: &SetId) -> Result<()> {
        self.sets.write().await.remove(id);
        Ok(())
    }

    async fn save_progress(&self, progress: UserProgress) -> Result<()> {
        let record = serde_json::to_string(&progress)?;
        *self.progress.write().await = Some(record);
        Ok(())
    }

    async fn load_progress(&self) -> Result<UserProgress> {
        match self.progress.read().await.as_deref() {
            Some(record) => Ok(serde_json::from_str(record)?),
            None => Ok(UserProgress::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Flashcard, UserId};

    #[tokio::test]
    async fn save_and_load_round_trip() {
        let store = MemoryStore::new();
        let mut set = StudySet::new(UserId::new("user-1"), "Chemistry");
        set.flashcards.push(Flashcard::new("pH", "Acidity scale"));
        let id = set.id.clone();

        store.save_set(&set).await.unwrap();
        let loaded = store.load_set(&id).await.unwrap().unwrap();
        assert_eq!(loaded.title, "Chemistry");
        assert_eq!(loaded.flashcards[0].id, set.flashcards[0].id);
    }

    #[tokio::test]
    async fn save_replaces_by_id() {
        let store = MemoryStore::new();
        let mut set = StudySet::new(UserId::new("user-1"), "Physics");
        store.save_set(&set).await.unwrap();

        set.title = "Physics II".to_string();
        store.save_set(&set).await.unwrap();

        assert_eq!(store.len().await, 1);
        let loaded = store.load_set(&set.id).await.unwrap().unwrap();
        assert_eq!(loaded.title, "Physics II");
    }

    #[tokio::test]
    async fn missing_set_loads_as_none() {
        let store = MemoryStore::new();
        let loaded = store.load_set(&SetId::new("nope")).await.unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn progress_defaults_until_saved() {
        let store = MemoryStore::new();
        assert_eq!(store.load_progress().await.unwrap(), UserProgress::default());

        let mut progress = UserProgress::default();
        progress.award(120);
        store.save_progress(progress).await.unwrap();
        assert_eq!(store.load_progress().await.unwrap().level, 2);
    }
}
