//! The live store trait and subscription handle.

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::mpsc;

use crate::error::StoreError;
use crate::path::{Collection, StorePath};

/// Full current state of one collection.
///
/// `Value::Null` when the collection does not exist yet; otherwise the
/// collection's JSON document (an object keyed by entity identifier, or the
/// config document itself).
pub type Snapshot = Value;

/// Handle to a collection subscription.
///
/// The receiver yields the full current snapshot immediately after
/// subscribing and again after every change to the collection. Dropping the
/// handle unsubscribes; the store prunes the dead sender on its next
/// notification pass.
#[derive(Debug)]
pub struct Subscription {
    collection: Collection,
    rx: mpsc::UnboundedReceiver<Snapshot>,
}

impl Subscription {
    /// Build a subscription from its raw channel half.
    pub(crate) fn new(collection: Collection, rx: mpsc::UnboundedReceiver<Snapshot>) -> Self {
        Self { collection, rx }
    }

    /// The collection this subscription watches.
    pub fn collection(&self) -> Collection {
        self.collection
    }

    /// Wait for the next snapshot. `None` once the store is gone.
    pub async fn recv(&mut self) -> Option<Snapshot> {
        self.rx.recv().await
    }

    /// Take a pending snapshot without waiting, if one has arrived.
    pub fn try_recv(&mut self) -> Option<Snapshot> {
        self.rx.try_recv().ok()
    }
}

/// The external collaborator: a realtime key-value document store.
///
/// Mutations are fire-and-forget from the console's point of view: callers
/// await completion only to surface a failure, never to retry. No operation
/// is cancellable once issued, and concurrent writers race with
/// last-write-wins semantics.
#[async_trait]
pub trait LiveStore: Send + Sync {
    /// Subscribe to a collection. The handle's receiver is primed with the
    /// current snapshot before this returns.
    fn subscribe(&self, collection: Collection) -> Subscription;

    /// Shallow-merge `fields` into the document at `path`, creating the
    /// path if absent. Fields not named are left untouched.
    async fn merge(&self, path: &StorePath, fields: Map<String, Value>) -> Result<(), StoreError>;

    /// Insert a new entity with a store-generated unique identifier and
    /// return the new key.
    async fn append(&self, collection: Collection, document: Value) -> Result<String, StoreError>;

    /// Delete the document at `path` outright.
    async fn remove(&self, path: &StorePath) -> Result<(), StoreError>;
}
