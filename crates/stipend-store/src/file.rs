//! JSON-file-backed live store.
//!
//! Wraps a [`MemoryStore`] seeded from a JSON file and writes the full
//! document tree back after every successful mutation, so the console can
//! be exercised against a local snapshot of the platform's data.
//!
//! Top-level keys that do not belong to a known collection are preserved
//! verbatim across save cycles.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::StoreError;
use crate::live::{LiveStore, Subscription};
use crate::memory::MemoryStore;
use crate::path::{Collection, StorePath};

/// File-backed implementation of [`LiveStore`].
pub struct JsonFileStore {
    memory: MemoryStore,
    path: PathBuf,
    extra: Map<String, Value>,
}

impl JsonFileStore {
    /// Open a store backed by `path`.
    ///
    /// A missing file starts the store empty; the file is created on the
    /// first mutation.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let (tree, extra) = match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let document: Map<String, Value> = serde_json::from_slice(&bytes)?;
                let mut tree = std::collections::HashMap::new();
                let mut extra = Map::new();
                for (segment, value) in document {
                    match Collection::from_segment(&segment) {
                        Some(collection) => {
                            tree.insert(collection, value);
                        }
                        None => {
                            warn!(key = %segment, "preserving unknown top-level key");
                            extra.insert(segment, value);
                        }
                    }
                }
                (tree, extra)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "data file missing, starting empty");
                (std::collections::HashMap::new(), Map::new())
            }
            Err(err) => return Err(err.into()),
        };

        let memory = MemoryStore::new();
        memory.load_tree(tree);
        Ok(Self {
            memory,
            path,
            extra,
        })
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self) -> Result<(), StoreError> {
        let mut document = self.memory.export_tree();
        for (key, value) in &self.extra {
            document.insert(key.clone(), value.clone());
        }
        let bytes = serde_json::to_vec_pretty(&Value::Object(document))?;
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }
}

#[async_trait]
impl LiveStore for JsonFileStore {
    fn subscribe(&self, collection: Collection) -> Subscription {
        self.memory.subscribe(collection)
    }

    async fn merge(&self, path: &StorePath, fields: Map<String, Value>) -> Result<(), StoreError> {
        self.memory.merge(path, fields).await?;
        self.persist().await
    }

    async fn append(&self, collection: Collection, document: Value) -> Result<String, StoreError> {
        let key = self.memory.append(collection, document).await?;
        self.persist().await?;
        Ok(key)
    }

    async fn remove(&self, path: &StorePath) -> Result<(), StoreError> {
        self.memory.remove(path).await?;
        self.persist().await
    }
}
