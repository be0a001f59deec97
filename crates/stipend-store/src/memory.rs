//! In-memory live store.
//!
//! Reference implementation of [`LiveStore`]: the document tree lives under
//! a single lock, and every write notifies each collection subscriber with
//! a full snapshot. Used directly by tests and demos, and as the working
//! state behind [`JsonFileStore`](crate::JsonFileStore).

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::{Map, Value};
use tokio::sync::mpsc;
use tracing::debug;

use crate::error::StoreError;
use crate::live::{LiveStore, Snapshot, Subscription};
use crate::path::{Collection, StorePath};

#[derive(Default)]
struct Inner {
    documents: HashMap<Collection, Value>,
    watchers: HashMap<Collection, Vec<mpsc::UnboundedSender<Snapshot>>>,
}

impl Inner {
    fn snapshot(&self, collection: Collection) -> Snapshot {
        self.documents
            .get(&collection)
            .cloned()
            .unwrap_or(Value::Null)
    }

    /// Send the current snapshot to every live watcher, dropping closed ones.
    fn notify(&mut self, collection: Collection) {
        let snapshot = self.snapshot(collection);
        if let Some(watchers) = self.watchers.get_mut(&collection) {
            watchers.retain(|tx| tx.send(snapshot.clone()).is_ok());
        }
    }
}

/// In-memory implementation of [`LiveStore`].
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole document tree, notifying all subscribers.
    pub fn load_tree(&self, tree: HashMap<Collection, Value>) {
        let mut inner = self.inner.write();
        inner.documents = tree;
        for collection in Collection::all() {
            inner.notify(*collection);
        }
    }

    /// Export the document tree keyed by collection path segment.
    pub fn export_tree(&self) -> Map<String, Value> {
        let inner = self.inner.read();
        let mut tree = Map::new();
        for collection in Collection::all() {
            if let Some(document) = inner.documents.get(collection) {
                tree.insert(collection.as_str().to_string(), document.clone());
            }
        }
        tree
    }

    /// Current snapshot of one collection, `Value::Null` when absent.
    pub fn snapshot(&self, collection: Collection) -> Snapshot {
        self.inner.read().snapshot(collection)
    }

    /// Current state of one document, `None` when absent.
    pub fn document(&self, path: &StorePath) -> Option<Value> {
        let inner = self.inner.read();
        let root = inner.documents.get(&path.collection())?;
        match path.key() {
            Some(key) => root.get(key).cloned(),
            None => Some(root.clone()),
        }
    }
}

#[async_trait]
impl LiveStore for MemoryStore {
    fn subscribe(&self, collection: Collection) -> Subscription {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut inner = self.inner.write();
        // Prime with the current snapshot before registering, so the first
        // receive is always the state at subscribe time.
        let _ = tx.send(inner.snapshot(collection));
        inner.watchers.entry(collection).or_default().push(tx);
        debug!(collection = %collection, "subscribed");
        Subscription::new(collection, rx)
    }

    async fn merge(&self, path: &StorePath, fields: Map<String, Value>) -> Result<(), StoreError> {
        let mut inner = self.inner.write();
        let root = inner
            .documents
            .entry(path.collection())
            .or_insert_with(|| Value::Object(Map::new()));
        let target = match path.key() {
            Some(key) => {
                let entries = root
                    .as_object_mut()
                    .ok_or_else(|| StoreError::NotAnObject(path.collection().to_string()))?;
                entries
                    .entry(key.to_string())
                    .or_insert_with(|| Value::Object(Map::new()))
            }
            None => root,
        };
        let object = target
            .as_object_mut()
            .ok_or_else(|| StoreError::NotAnObject(path.to_string()))?;
        for (field, value) in fields {
            object.insert(field, value);
        }
        inner.notify(path.collection());
        Ok(())
    }

    async fn append(&self, collection: Collection, document: Value) -> Result<String, StoreError> {
        let key = uuid::Uuid::new_v4().to_string();
        let mut inner = self.inner.write();
        let root = inner
            .documents
            .entry(collection)
            .or_insert_with(|| Value::Object(Map::new()));
        let entries = root
            .as_object_mut()
            .ok_or_else(|| StoreError::NotAnObject(collection.to_string()))?;
        entries.insert(key.clone(), document);
        inner.notify(collection);
        Ok(key)
    }

    async fn remove(&self, path: &StorePath) -> Result<(), StoreError> {
        let mut inner = self.inner.write();
        match path.key() {
            Some(key) => {
                if let Some(entries) = inner
                    .documents
                    .get_mut(&path.collection())
                    .and_then(Value::as_object_mut)
                {
                    entries.remove(key);
                }
            }
            None => {
                inner.documents.remove(&path.collection());
            }
        }
        inner.notify(path.collection());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn subscribe_delivers_immediate_snapshot() {
        let store = MemoryStore::new();
        let mut sub = store.subscribe(Collection::Tasks);
        assert_eq!(sub.recv().await, Some(Value::Null));

        store
            .append(Collection::Tasks, json!({"title": "Join"}))
            .await
            .unwrap();
        let snapshot = sub.recv().await.unwrap();
        let entries = snapshot.as_object().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries.values().next().unwrap()["title"], "Join");
    }

    #[tokio::test]
    async fn merge_creates_absent_paths() {
        let store = MemoryStore::new();
        let mut fields = Map::new();
        fields.insert("balance".to_string(), json!(150.0));
        store
            .merge(&StorePath::entity(Collection::Users, "u-1"), fields)
            .await
            .unwrap();

        let doc = store
            .document(&StorePath::entity(Collection::Users, "u-1"))
            .unwrap();
        assert_eq!(doc, json!({"balance": 150.0}));
    }

    #[tokio::test]
    async fn merge_is_shallow_and_partial() {
        let store = MemoryStore::new();
        let mut initial = Map::new();
        initial.insert("balance".to_string(), json!(100.0));
        initial.insert("fullName".to_string(), json!("Rahim"));
        let path = StorePath::entity(Collection::Users, "u-1");
        store.merge(&path, initial).await.unwrap();

        let mut update = Map::new();
        update.insert("balance".to_string(), json!(150.0));
        store.merge(&path, update).await.unwrap();

        let doc = store.document(&path).unwrap();
        assert_eq!(doc["balance"], 150.0);
        assert_eq!(doc["fullName"], "Rahim");
    }

    #[tokio::test]
    async fn root_merge_updates_config_document() {
        let store = MemoryStore::new();
        let mut fields = Map::new();
        fields.insert("referralBonus".to_string(), json!(5.0));
        store
            .merge(&StorePath::root(Collection::Config), fields)
            .await
            .unwrap();
        assert_eq!(
            store.snapshot(Collection::Config),
            json!({"referralBonus": 5.0})
        );
    }

    #[tokio::test]
    async fn append_generates_unique_keys() {
        let store = MemoryStore::new();
        let first = store
            .append(Collection::Tasks, json!({"title": "a"}))
            .await
            .unwrap();
        let second = store
            .append(Collection::Tasks, json!({"title": "b"}))
            .await
            .unwrap();
        assert_ne!(first, second);
        assert_eq!(store.snapshot(Collection::Tasks).as_object().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn remove_deletes_entity_and_notifies() {
        let store = MemoryStore::new();
        let key = store
            .append(Collection::WithdrawalRequests, json!({"amount": 10.0}))
            .await
            .unwrap();
        let mut sub = store.subscribe(Collection::WithdrawalRequests);
        let _ = sub.recv().await;

        store
            .remove(&StorePath::entity(Collection::WithdrawalRequests, key.as_str()))
            .await
            .unwrap();
        let snapshot = sub.recv().await.unwrap();
        assert!(snapshot.as_object().unwrap().is_empty());
    }

    #[tokio::test]
    async fn dropped_subscription_is_pruned() {
        let store = MemoryStore::new();
        let sub = store.subscribe(Collection::Users);
        drop(sub);

        // The dead sender is dropped during the next notification pass.
        store
            .append(Collection::Users, json!({"fullName": "Karim"}))
            .await
            .unwrap();
        let mut alive = store.subscribe(Collection::Users);
        let snapshot = alive.recv().await.unwrap();
        assert_eq!(snapshot.as_object().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn merge_into_scalar_document_fails() {
        let store = MemoryStore::new();
        store.load_tree(HashMap::from([(Collection::Config, json!(42))]));
        let result = store
            .merge(&StorePath::root(Collection::Config), Map::new())
            .await;
        assert!(matches!(result, Err(StoreError::NotAnObject(_))));
    }
}
