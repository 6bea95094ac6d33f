//! File-backed key-value store
//!
//! Keeps every slot in a single JSON file on disk. The whole file is
//! rewritten on every mutation; there are no partial writes.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::warn;

use crate::error::Error;
use crate::Result;

use super::kv::KeyValueStore;

/// Single-file key-value store using JSON
#[derive(Clone)]
pub struct FileStore {
    /// In-memory view of the slots, persisted as a whole on every write
    slots: Arc<RwLock<BTreeMap<String, String>>>,
    /// Path to the JSON file
    path: PathBuf,
}

impl FileStore {
    /// Create a new FileStore backed by the given file path
    ///
    /// A missing file starts empty. A file that no longer parses as JSON is
    /// recovered as empty rather than failing the caller; the next write
    /// replaces it.
    pub async fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let slots = if path.exists() {
            let content = tokio::fs::read_to_string(&path)
                .await
                .map_err(|e| Error::Storage(format!("Failed to read store file: {}", e)))?;
            match serde_json::from_str(&content) {
                Ok(slots) => slots,
                Err(e) => {
                    warn!(
                        "Store file {} is not valid JSON ({}), starting empty",
                        path.display(),
                        e
                    );
                    BTreeMap::new()
                }
            }
        } else {
            BTreeMap::new()
        };

        Ok(Self {
            slots: Arc::new(RwLock::new(slots)),
            path,
        })
    }

    /// Persist the current slots to disk
    async fn persist(&self) -> Result<()> {
        let slots = self.slots.read().await;
        let content = serde_json::to_string_pretty(&*slots)?;

        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let slots = self.slots.read().await;
        Ok(slots.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        {
            let mut slots = self.slots.write().await;
            slots.insert(key.to_string(), value.to_string());
        }
        self.persist().await
    }

    async fn remove(&self, key: &str) -> Result<bool> {
        let removed = {
            let mut slots = self.slots.write().await;
            slots.remove(key).is_some()
        };
        if removed {
            self.persist().await?;
        }
        Ok(removed)
    }
}
