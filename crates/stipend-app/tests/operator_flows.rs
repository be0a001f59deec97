//! End-to-end operator flows over an in-memory store: the console's
//! subscribe-render-mutate loop without the terminal.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::json;

use stipend_app::forms::{ConfigField, ConfigForm, TaskForm};
use stipend_app::{workflows, AppState, StatusFilter};
use stipend_core::{TaskId, UserId, WithdrawalId, WithdrawalStatus};
use stipend_store::{AdminService, Collection, LiveStore, MemoryStore, StorePath};

fn service() -> (AdminService, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    (AdminService::new(store.clone()), store)
}

async fn seed_user(store: &MemoryStore, key: &str, name: &str, balance: f64) {
    let mut fields = serde_json::Map::new();
    fields.insert("fullName".to_string(), json!(name));
    fields.insert("balance".to_string(), json!(balance));
    fields.insert("totalEarned".to_string(), json!(balance * 2.0));
    store
        .merge(&StorePath::entity(Collection::Users, key), fields)
        .await
        .unwrap();
}

#[tokio::test]
async fn snapshots_flow_into_app_state() {
    let (service, store) = service();
    seed_user(&store, "u-1", "Rahim", 100.0).await;

    let mut state = AppState::new();
    let mut users = service.watch_users();
    let snapshot = users.recv().await.unwrap();
    state.apply_snapshot(Collection::Users, &snapshot);

    assert_eq!(state.users.count(), 1);
    assert_eq!(state.users.total_balance(), 100.0);

    // A later snapshot replaces the collection wholesale.
    seed_user(&store, "u-2", "Fatima", 50.0).await;
    let snapshot = users.recv().await.unwrap();
    state.apply_snapshot(Collection::Users, &snapshot);
    assert_eq!(state.users.count(), 2);
    assert_eq!(state.users.total_balance(), 150.0);
}

#[tokio::test]
async fn balance_adjustment_overwrites_only_balance() {
    let (service, store) = service();
    seed_user(&store, "u-1", "Rahim", 100.0).await;

    let new_balance = workflows::adjust_balance(&service, &UserId::new("u-1"), "150")
        .await
        .unwrap();
    assert_eq!(new_balance, 150.0);

    let doc = store
        .document(&StorePath::entity(Collection::Users, "u-1"))
        .unwrap();
    assert_eq!(doc["balance"], 150.0);
    assert_eq!(doc["totalEarned"], 200.0);
}

#[tokio::test]
async fn invalid_balance_input_issues_no_write() {
    let (service, store) = service();
    seed_user(&store, "u-1", "Rahim", 100.0).await;

    let result = workflows::adjust_balance(&service, &UserId::new("u-1"), "abc").await;
    assert!(result.is_err());

    let doc = store
        .document(&StorePath::entity(Collection::Users, "u-1"))
        .unwrap();
    assert_eq!(doc["balance"], 100.0);
}

#[tokio::test]
async fn task_create_then_edit_round_trip() {
    let (service, store) = service();

    let mut form = TaskForm::create();
    form.title = "Sub".into();
    form.reward_input = "5".into();
    form.category = stipend_core::TaskCategory::YouTube;

    let outcome = workflows::submit_task(&service, &form).await.unwrap();
    let id = match outcome {
        workflows::TaskSubmit::Created(id) => id,
        other => panic!("expected create, got {other:?}"),
    };

    let doc = store
        .document(&StorePath::entity(Collection::Tasks, id.as_str()))
        .unwrap();
    assert_eq!(doc["title"], "Sub");
    assert_eq!(doc["reward"], 5.0);
    assert_eq!(doc["category"], "youtube");
    assert!(doc.as_object().unwrap().get("id").is_none());

    // Edit pre-fills from the stored task and merges under the same key.
    let stored: stipend_core::Task = serde_json::from_value(doc).unwrap();
    let mut edit = TaskForm::edit(id.clone(), &stored);
    edit.title = "Subscribe".into();
    let outcome = workflows::submit_task(&service, &edit).await.unwrap();
    assert_eq!(outcome, workflows::TaskSubmit::Updated(id.clone()));

    let doc = store
        .document(&StorePath::entity(Collection::Tasks, id.as_str()))
        .unwrap();
    assert_eq!(doc["title"], "Subscribe");
    assert_eq!(doc["category"], "youtube");
}

#[tokio::test]
async fn task_delete_removes_the_entry() {
    let (service, store) = service();
    let form = TaskForm::create();
    let workflows::TaskSubmit::Created(id) =
        workflows::submit_task(&service, &form).await.unwrap()
    else {
        panic!("expected create");
    };

    workflows::delete_task(&service, &id).await.unwrap();
    assert!(store
        .document(&StorePath::entity(Collection::Tasks, id.as_str()))
        .is_none());
}

#[tokio::test]
async fn withdrawal_triage_sets_status_only() {
    let (service, store) = service();
    let key = store
        .append(
            Collection::WithdrawalRequests,
            json!({
                "userId": "u-1", "userName": "Rahim", "method": "bkash",
                "account": "01700000000", "amount": 250.0, "status": "pending",
                "timestamp": "2025-12-01T10:00:00Z"
            }),
        )
        .await
        .unwrap();
    let id = WithdrawalId::new(key.as_str());

    workflows::set_withdrawal_status(&service, &id, WithdrawalStatus::Approved)
        .await
        .unwrap();

    let doc = store
        .document(&StorePath::entity(Collection::WithdrawalRequests, key.as_str()))
        .unwrap();
    assert_eq!(doc["status"], "approved");
    assert_eq!(doc["amount"], 250.0);

    // Approval deliberately leaves the user's balance untouched.
    assert!(store
        .document(&StorePath::entity(Collection::Users, "u-1"))
        .is_none());
}

#[tokio::test]
async fn withdrawal_filters_track_status_changes() {
    let (service, store) = service();
    let key = store
        .append(
            Collection::WithdrawalRequests,
            json!({
                "userId": "u-1", "amount": 40.0, "status": "pending",
                "timestamp": "2025-12-01T10:00:00Z"
            }),
        )
        .await
        .unwrap();

    let mut state = AppState::new();
    let mut sub = service.watch_withdrawals();
    let snapshot = sub.recv().await.unwrap();
    state.apply_snapshot(Collection::WithdrawalRequests, &snapshot);
    assert_eq!(state.withdrawals.filtered(StatusFilter::Pending).len(), 1);
    assert!(state
        .withdrawals
        .filtered(StatusFilter::Approved)
        .is_empty());

    workflows::set_withdrawal_status(
        &service,
        &WithdrawalId::new(key.as_str()),
        WithdrawalStatus::Rejected,
    )
    .await
    .unwrap();
    let snapshot = sub.recv().await.unwrap();
    state.apply_snapshot(Collection::WithdrawalRequests, &snapshot);
    assert!(state.withdrawals.filtered(StatusFilter::Pending).is_empty());
    assert_eq!(state.withdrawals.filtered(StatusFilter::Rejected).len(), 1);
    assert_eq!(state.withdrawals.filtered(StatusFilter::All).len(), 1);
}

#[tokio::test]
async fn config_save_and_external_overwrite() {
    let (service, store) = service();

    let mut form = ConfigForm::new();
    form.resync(Some(&stipend_core::SiteConfig::default()));
    form.set_field(ConfigField::MonetagAdReward, "12.50");
    workflows::save_config(&service, form.config()).await.unwrap();

    assert_eq!(store.snapshot(Collection::Config)["monetagAdReward"], 12.5);

    // Another operator writes; our dirty draft loses on resync.
    form.set_field(ConfigField::MonetagAdReward, "99");
    let mut fields = serde_json::Map::new();
    fields.insert("monetagAdReward".to_string(), json!(1.0));
    store
        .merge(&StorePath::root(Collection::Config), fields)
        .await
        .unwrap();

    let external = stipend_store::decode_config(&store.snapshot(Collection::Config)).unwrap();
    let discarded = form.resync(Some(&external));
    assert!(discarded);
    assert_eq!(form.value_of(ConfigField::MonetagAdReward), "1");
}

#[tokio::test]
async fn deleting_a_task_never_touches_other_collections() {
    let (service, store) = service();
    seed_user(&store, "u-1", "Rahim", 10.0).await;
    let workflows::TaskSubmit::Created(id) =
        workflows::submit_task(&service, &TaskForm::create()).await.unwrap()
    else {
        panic!("expected create");
    };
    workflows::delete_task(&service, &TaskId::new(id.as_str())).await.unwrap();

    assert_eq!(
        store
            .document(&StorePath::entity(Collection::Users, "u-1"))
            .unwrap()["balance"],
        10.0
    );
}
