//! Role scoping over a real in-memory store.

use agroml_core::errors::AgromlError;
use agroml_core::models::{
    Category, ModelVote, PredictionOutput, PredictionRecord, PredictionStatus, Role,
};
use agroml_core::traits::IPredictionStore;
use agroml_history::{HistoryEngine, HistoryScope};
use agroml_storage::StorageEngine;

fn record_for(requester: &str) -> PredictionRecord {
    PredictionRecord::new(
        requester,
        Category::DiseaseDetection,
        serde_json::json!({}),
        PredictionOutput::Disease(ModelVote {
            label: "healthy".to_string(),
            confidence: 0.9,
        }),
        PredictionStatus::Success,
    )
}

fn engine_with_records() -> std::sync::Arc<StorageEngine> {
    let storage = std::sync::Arc::new(StorageEngine::open_in_memory().unwrap());
    storage.create(&record_for("farmer-a")).unwrap();
    storage.create(&record_for("farmer-b")).unwrap();
    storage.create(&record_for("farmer-c")).unwrap();
    storage.assign("agro-1", "farmer-a").unwrap();
    storage.assign("agro-1", "farmer-b").unwrap();
    storage
}

#[test]
fn farmer_sees_only_their_own_records() {
    let storage = engine_with_records();
    let history = HistoryEngine::new(storage.clone(), storage.clone());

    let records = history.history_for(Role::Farmer, "farmer-a").unwrap();
    assert_eq!(records.len(), 1);
    assert!(records.iter().all(|r| r.requester_id == "farmer-a"));
}

#[test]
fn agronomist_sees_assigned_farmers_records() {
    let storage = engine_with_records();
    let history = HistoryEngine::new(storage.clone(), storage.clone());

    let records = history.history_for(Role::Agronomist, "agro-1").unwrap();
    assert_eq!(records.len(), 2);
    assert!(records
        .iter()
        .all(|r| r.requester_id == "farmer-a" || r.requester_id == "farmer-b"));
}

#[test]
fn agronomist_does_not_see_their_own_records_unless_assigned() {
    let storage = engine_with_records();
    storage.create(&record_for("agro-1")).unwrap();
    let history = HistoryEngine::new(storage.clone(), storage.clone());

    let records = history.history_for(Role::Agronomist, "agro-1").unwrap();
    assert!(records.iter().all(|r| r.requester_id != "agro-1"));
}

#[test]
fn agronomist_with_no_assignments_gets_empty_history() {
    let storage = engine_with_records();
    let history = HistoryEngine::new(storage.clone(), storage.clone());

    let records = history.history_for(Role::Agronomist, "agro-9").unwrap();
    assert!(records.is_empty());
}

#[test]
fn admin_is_rejected_with_forbidden() {
    let storage = engine_with_records();
    let history = HistoryEngine::new(storage.clone(), storage.clone());

    let err = history.history_for(Role::Admin, "admin-1").unwrap_err();
    assert!(matches!(err, AgromlError::History(_)));
    assert_eq!(err.http_status(), 403);
}

#[test]
fn scope_resolution_is_explicit_per_role() {
    let storage = engine_with_records();

    let farmer = HistoryScope::resolve(Role::Farmer, "farmer-a", &storage).unwrap();
    assert_eq!(farmer, HistoryScope::SelfOnly("farmer-a".to_string()));

    let agronomist = HistoryScope::resolve(Role::Agronomist, "agro-1", &storage).unwrap();
    assert_eq!(
        agronomist,
        HistoryScope::Subordinates(vec!["farmer-a".to_string(), "farmer-b".to_string()])
    );

    assert!(HistoryScope::resolve(Role::Admin, "admin-1", &storage).is_err());
}
