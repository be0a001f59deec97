//! Typed operator service over a live store.
//!
//! Mirrors the platform's collection layout, one method per operation. The
//! service adds no validation and no cross-entity coordination: approving a
//! withdrawal writes a status field and nothing else, deleting a request
//! reverses no balance. That is platform policy, not an oversight.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::warn;

use stipend_core::{
    SiteConfig, Task, TaskId, User, UserId, WithdrawalId, WithdrawalRequest, WithdrawalStatus,
};

use crate::error::StoreError;
use crate::live::{LiveStore, Snapshot, Subscription};
use crate::path::{Collection, StorePath};

/// Thin typed wrapper around a [`LiveStore`].
#[derive(Clone)]
pub struct AdminService {
    store: Arc<dyn LiveStore>,
}

impl AdminService {
    /// Wrap a live store.
    pub fn new(store: Arc<dyn LiveStore>) -> Self {
        Self { store }
    }

    // ─── Subscriptions ───────────────────────────────────────

    /// Watch the configuration document.
    pub fn watch_config(&self) -> Subscription {
        self.store.subscribe(Collection::Config)
    }

    /// Watch the task catalog.
    pub fn watch_tasks(&self) -> Subscription {
        self.store.subscribe(Collection::Tasks)
    }

    /// Watch the user directory.
    pub fn watch_users(&self) -> Subscription {
        self.store.subscribe(Collection::Users)
    }

    /// Watch the withdrawal request queue.
    pub fn watch_withdrawals(&self) -> Subscription {
        self.store.subscribe(Collection::WithdrawalRequests)
    }

    // ─── Mutations ───────────────────────────────────────────

    /// Merge the whole edited configuration into the singleton document.
    pub async fn update_config(&self, config: &SiteConfig) -> Result<(), StoreError> {
        let fields = to_object(serde_json::to_value(config)?, Collection::Config.as_str())?;
        self.store
            .merge(&StorePath::root(Collection::Config), fields)
            .await
    }

    /// Append a new task; the store generates the identifier.
    pub async fn add_task(&self, task: &Task) -> Result<TaskId, StoreError> {
        let document = serde_json::to_value(task)?;
        let key = self.store.append(Collection::Tasks, document).await?;
        Ok(TaskId::new(key))
    }

    /// Merge the task's current fields into an existing entry.
    pub async fn update_task(&self, id: &TaskId, task: &Task) -> Result<(), StoreError> {
        let fields = to_object(serde_json::to_value(task)?, "task")?;
        self.store
            .merge(&StorePath::entity(Collection::Tasks, id.as_str()), fields)
            .await
    }

    /// Delete a task outright.
    pub async fn delete_task(&self, id: &TaskId) -> Result<(), StoreError> {
        self.store
            .remove(&StorePath::entity(Collection::Tasks, id.as_str()))
            .await
    }

    /// Overwrite a user's balance, touching no other field.
    pub async fn update_user_balance(
        &self,
        id: &UserId,
        balance: f64,
    ) -> Result<(), StoreError> {
        let mut fields = Map::new();
        fields.insert("balance".to_string(), Value::from(balance));
        self.store
            .merge(&StorePath::entity(Collection::Users, id.as_str()), fields)
            .await
    }

    /// Set a withdrawal request's status, touching no other field.
    pub async fn update_withdrawal_status(
        &self,
        id: &WithdrawalId,
        status: WithdrawalStatus,
    ) -> Result<(), StoreError> {
        let mut fields = Map::new();
        fields.insert("status".to_string(), serde_json::to_value(status)?);
        self.store
            .merge(
                &StorePath::entity(Collection::WithdrawalRequests, id.as_str()),
                fields,
            )
            .await
    }

    /// Delete a withdrawal request entry. Does not refund any balance.
    pub async fn delete_withdrawal(&self, id: &WithdrawalId) -> Result<(), StoreError> {
        self.store
            .remove(&StorePath::entity(Collection::WithdrawalRequests, id.as_str()))
            .await
    }
}

fn to_object(value: Value, what: &str) -> Result<Map<String, Value>, StoreError> {
    match value {
        Value::Object(object) => Ok(object),
        _ => Err(StoreError::NotAnObject(what.to_string())),
    }
}

// ─── Snapshot decoding ───────────────────────────────────────
//
// Snapshots arrive as raw JSON. Entries that fail to decode are skipped
// with a warning so one malformed document cannot blank a whole screen.

/// Decode the configuration snapshot; `None` when absent or malformed.
pub fn decode_config(snapshot: &Snapshot) -> Option<SiteConfig> {
    if snapshot.is_null() {
        return None;
    }
    match serde_json::from_value(snapshot.clone()) {
        Ok(config) => Some(config),
        Err(err) => {
            warn!(%err, "config document failed to decode");
            None
        }
    }
}

fn decode_entries<I, T>(snapshot: &Snapshot, collection: Collection) -> HashMap<I, T>
where
    I: From<String> + std::hash::Hash + Eq,
    T: serde::de::DeserializeOwned,
{
    let Some(entries) = snapshot.as_object() else {
        return HashMap::new();
    };
    let mut decoded = HashMap::with_capacity(entries.len());
    for (key, value) in entries {
        match serde_json::from_value(value.clone()) {
            Ok(entity) => {
                decoded.insert(I::from(key.clone()), entity);
            }
            Err(err) => {
                warn!(%collection, key = %key, %err, "skipping undecodable entry");
            }
        }
    }
    decoded
}

/// Decode the task catalog snapshot.
pub fn decode_tasks(snapshot: &Snapshot) -> HashMap<TaskId, Task> {
    decode_entries(snapshot, Collection::Tasks)
}

/// Decode the user directory snapshot.
pub fn decode_users(snapshot: &Snapshot) -> HashMap<UserId, User> {
    decode_entries(snapshot, Collection::Users)
}

/// Decode the withdrawal request snapshot.
pub fn decode_withdrawals(snapshot: &Snapshot) -> HashMap<WithdrawalId, WithdrawalRequest> {
    decode_entries(snapshot, Collection::WithdrawalRequests)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use serde_json::json;
    use stipend_core::TaskCategory;

    fn service_with_memory() -> (AdminService, Arc<MemoryStore>) {
        let memory = Arc::new(MemoryStore::new());
        (AdminService::new(memory.clone()), memory)
    }

    #[tokio::test]
    async fn balance_update_touches_only_balance() {
        let (service, memory) = service_with_memory();
        let path = StorePath::entity(Collection::Users, "u-1");
        let mut seed = Map::new();
        seed.insert("fullName".to_string(), json!("Rahim"));
        seed.insert("balance".to_string(), json!(100.0));
        seed.insert("totalEarned".to_string(), json!(400.0));
        seed.insert("totalReferrals".to_string(), json!(3));
        memory.merge(&path, seed).await.unwrap();

        service
            .update_user_balance(&UserId::new("u-1"), 150.0)
            .await
            .unwrap();

        let doc = memory.document(&path).unwrap();
        assert_eq!(doc["balance"], 150.0);
        assert_eq!(doc["totalEarned"], 400.0);
        assert_eq!(doc["totalReferrals"], 3);
        assert_eq!(doc["fullName"], "Rahim");
    }

    #[tokio::test]
    async fn status_update_is_a_single_field_merge() {
        let (service, memory) = service_with_memory();
        let key = memory
            .append(
                Collection::WithdrawalRequests,
                json!({"userId": "u-1", "amount": 50.0, "status": "pending",
                       "timestamp": "2025-12-01T10:00:00Z"}),
            )
            .await
            .unwrap();

        service
            .update_withdrawal_status(&WithdrawalId::new(key.as_str()), WithdrawalStatus::Approved)
            .await
            .unwrap();

        let doc = memory
            .document(&StorePath::entity(Collection::WithdrawalRequests, &key))
            .unwrap();
        assert_eq!(doc["status"], "approved");
        assert_eq!(doc["amount"], 50.0);
    }

    #[tokio::test]
    async fn task_create_appends_without_identifier() {
        let (service, memory) = service_with_memory();
        let task = Task {
            title: "Sub".into(),
            reward: 5.0,
            category: TaskCategory::YouTube,
            ..Task::default()
        };
        let id = service.add_task(&task).await.unwrap();

        let doc = memory
            .document(&StorePath::entity(Collection::Tasks, id.as_str()))
            .unwrap();
        assert_eq!(doc["title"], "Sub");
        assert_eq!(doc["reward"], 5.0);
        assert_eq!(doc["category"], "youtube");
        assert!(doc.as_object().unwrap().get("id").is_none());
    }

    #[tokio::test]
    async fn task_edit_merges_under_existing_key() {
        let (service, memory) = service_with_memory();
        let id = service.add_task(&Task::default()).await.unwrap();

        let edited = Task {
            title: "Join channel".into(),
            reward: 3.5,
            ..Task::default()
        };
        service.update_task(&id, &edited).await.unwrap();

        let doc = memory
            .document(&StorePath::entity(Collection::Tasks, id.as_str()))
            .unwrap();
        assert_eq!(doc["title"], "Join channel");
        assert_eq!(doc["reward"], 3.5);
    }

    #[tokio::test]
    async fn config_update_round_trips_numeric_fields() {
        let (service, memory) = service_with_memory();
        let config = SiteConfig {
            monetag_ad_reward: Some(12.5),
            ..SiteConfig::default()
        };
        service.update_config(&config).await.unwrap();
        assert_eq!(
            memory.snapshot(Collection::Config)["monetagAdReward"],
            12.5
        );
    }

    #[test]
    fn decoders_tolerate_absent_collections() {
        assert!(decode_config(&Value::Null).is_none());
        assert!(decode_tasks(&Value::Null).is_empty());
        assert!(decode_users(&Value::Null).is_empty());
        assert!(decode_withdrawals(&Value::Null).is_empty());
    }

    #[test]
    fn undecodable_entries_are_skipped() {
        let snapshot = json!({
            "w-1": {"userId": "u-1", "amount": 10.0, "status": "pending",
                     "timestamp": "2025-12-01T10:00:00Z"},
            "w-2": {"userId": "u-2", "timestamp": "not a timestamp"}
        });
        let decoded = decode_withdrawals(&snapshot);
        assert_eq!(decoded.len(), 1);
        assert!(decoded.contains_key(&WithdrawalId::new("w-1")));
    }
}
