//! JSON file backed story store.

use async_trait::async_trait;
use fresco_core::StoryDocument;
use fresco_error::{StoreError, StoreErrorKind};
use fresco_interface::StoryStore;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

const STORY_FILE: &str = "current_story.json";

/// Stores the current story as a JSON document on disk.
///
/// Writes go to a temp file in the same directory followed by a rename, so
/// a crash mid-write never leaves a truncated document behind. A missing
/// file is an empty store, not an error.
///
/// # Examples
///
/// ```no_run
/// use fresco_store::JsonFileStore;
///
/// let store = JsonFileStore::new("/var/lib/fresco");
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Creates a store rooted at the given directory.
    ///
    /// The directory is created on first save, not here.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the story document file.
    pub fn story_path(&self) -> PathBuf {
        self.root.join(STORY_FILE)
    }
}

fn io_error(context: &str, path: &Path, e: std::io::Error) -> StoreError {
    StoreError::new(StoreErrorKind::Io(format!(
        "{context} {}: {e}",
        path.display()
    )))
}

#[async_trait]
impl StoryStore for JsonFileStore {
    #[instrument(skip(self))]
    async fn load(&self) -> Result<Option<StoryDocument>, StoreError> {
        let path = self.story_path();
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No story file found");
                return Ok(None);
            }
            Err(e) => return Err(io_error("read", &path, e)),
        };

        let document = serde_json::from_str(&raw).map_err(|e| {
            StoreError::new(StoreErrorKind::Serialization(format!(
                "deserialize {}: {e}",
                path.display()
            )))
        })?;
        debug!(path = %path.display(), "Loaded current story");
        Ok(Some(document))
    }

    #[instrument(skip(self, document), fields(scenes = document.scenes.len()))]
    async fn save(&self, document: &StoryDocument) -> Result<(), StoreError> {
        let path = self.story_path();
        let data = serde_json::to_string_pretty(document).map_err(|e| {
            StoreError::new(StoreErrorKind::Serialization(format!("serialize story: {e}")))
        })?;

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| io_error("create dir", &self.root, e))?;

        // Write to temp file first, then rename for atomicity.
        let temp_path = path.with_extension("tmp");
        tokio::fs::write(&temp_path, data)
            .await
            .map_err(|e| io_error("write", &temp_path, e))?;
        tokio::fs::rename(&temp_path, &path)
            .await
            .map_err(|e| io_error("rename", &path, e))?;

        debug!(path = %path.display(), "Saved current story");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fresco_core::SceneRecord;

    fn story(summary: &str) -> StoryDocument {
        StoryDocument::new(
            "gefo",
            "a canyon adventure",
            summary,
            vec![SceneRecord::new(1, "Hero jumps.")],
        )
    }

    #[tokio::test]
    async fn missing_file_is_an_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        let document = story("A hero rises.");
        store.save(&document).await.unwrap();
        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded, document);
    }

    #[tokio::test]
    async fn save_replaces_the_previous_story() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        store.save(&story("first")).await.unwrap();
        store.save(&story("second")).await.unwrap();
        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.summary, "second");
    }

    #[tokio::test]
    async fn save_creates_the_root_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested/stories"));
        store.save(&story("A hero rises.")).await.unwrap();
        assert!(store.story_path().exists());
    }

    #[tokio::test]
    async fn corrupt_file_reports_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        std::fs::write(store.story_path(), "not json").unwrap();
        let err = store.load().await.unwrap_err();
        assert!(matches!(err.kind, StoreErrorKind::Serialization(_)));
    }
}
