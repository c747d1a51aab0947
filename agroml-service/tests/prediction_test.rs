//! End-to-end pipeline behavior with a mock gateway and a real in-memory
//! store.

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde_json::{json, Map, Value};

use agroml_core::config::DedupConfig;
use agroml_core::errors::{AgromlError, AgromlResult, GatewayError};
use agroml_core::models::{
    FeatureVector, ImagePayload, ModelOutputs, ModelVote, PredictionOutput, PredictionStatus, Role,
};
use agroml_core::traits::{IPredictionGateway, IPredictionStore};
use agroml_service::PredictionService;
use agroml_storage::StorageEngine;

/// Gateway double: `None` for a channel means the upstream is down.
struct MockGateway {
    crop: Option<ModelOutputs>,
    disease: Option<ModelVote>,
    calls: Arc<AtomicUsize>,
}

impl MockGateway {
    fn crop_ok(outputs: ModelOutputs) -> Self {
        Self {
            crop: Some(outputs),
            disease: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn disease_ok(vote: ModelVote) -> Self {
        Self {
            crop: None,
            disease: Some(vote),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn down() -> Self {
        Self {
            crop: None,
            disease: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

fn unavailable() -> AgromlError {
    GatewayError::ServiceUnavailable {
        reason: "connection refused".to_string(),
    }
    .into()
}

impl IPredictionGateway for MockGateway {
    fn recommend_crop(
        &self,
        _features: &FeatureVector,
    ) -> impl Future<Output = AgromlResult<ModelOutputs>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let reply = match &self.crop {
            Some(outputs) => Ok(outputs.clone()),
            None => Err(unavailable()),
        };
        async move { reply }
    }

    fn detect_disease(
        &self,
        _image: &ImagePayload,
    ) -> impl Future<Output = AgromlResult<ModelVote>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let reply = match &self.disease {
            Some(vote) => Ok(vote.clone()),
            None => Err(unavailable()),
        };
        async move { reply }
    }
}

fn three_votes() -> ModelOutputs {
    ModelOutputs::new(vec![
        ("bayes".to_string(), ModelVote::new("wheat", 0.8)),
        ("forest".to_string(), ModelVote::new("rice", 0.6)),
        ("svm".to_string(), ModelVote::new("wheat", 0.6)),
    ])
}

fn valid_fields() -> Map<String, Value> {
    json!({
        "N": 90.0, "P": 42.0, "K": 43.0,
        "temperature": 20.8, "humidity": 82.0, "ph": 6.5, "rainfall": 202.9
    })
    .as_object()
    .cloned()
    .unwrap()
}

fn service_with(
    gateway: MockGateway,
) -> PredictionService<MockGateway, Arc<StorageEngine>, Arc<StorageEngine>> {
    let storage = Arc::new(StorageEngine::open_in_memory().unwrap());
    PredictionService::new(gateway, storage.clone(), storage, DedupConfig::default())
}

#[tokio::test]
async fn crop_recommendation_returns_consensus_and_persists() {
    let gateway = MockGateway::crop_ok(three_votes());
    let service = service_with(gateway);

    let reply = service
        .recommend_crop("farmer-1", &valid_fields())
        .await
        .unwrap();

    assert_eq!(reply.consensus.label.as_deref(), Some("wheat"));
    assert!((reply.consensus.confidence - 0.7).abs() < 1e-9);
    assert_eq!(reply.output.len(), 3);

    let records = service.get_history(Role::Farmer, "farmer-1").unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, reply.prediction_id);
    assert_eq!(records[0].status, PredictionStatus::Success);
    assert!(matches!(records[0].output, PredictionOutput::Crop(_)));
}

#[tokio::test]
async fn validation_failure_short_circuits_before_the_gateway() {
    let gateway = MockGateway::crop_ok(three_votes());
    let calls = gateway.calls.clone();
    let service = service_with(gateway);

    let mut fields = valid_fields();
    fields.remove("ph");
    fields.remove("rainfall");

    let err = service
        .recommend_crop("farmer-1", &fields)
        .await
        .unwrap_err();
    assert_eq!(err.http_status(), 400);
    assert!(err.to_string().contains("ph"));
    assert!(err.to_string().contains("rainfall"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(service
        .get_history(Role::Farmer, "farmer-1")
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn out_of_range_failure_lists_the_offending_field() {
    let gateway = MockGateway::crop_ok(three_votes());
    let service = service_with(gateway);

    let mut fields = valid_fields();
    fields.insert("ph".to_string(), json!(12.5));

    let err = service
        .recommend_crop("farmer-1", &fields)
        .await
        .unwrap_err();
    assert_eq!(err.http_status(), 400);
    assert!(err.to_string().contains("ph"));
}

#[tokio::test]
async fn repeat_request_inside_window_reuses_the_record() {
    let gateway = MockGateway::crop_ok(three_votes());
    let service = service_with(gateway);

    let first = service
        .recommend_crop("farmer-1", &valid_fields())
        .await
        .unwrap();
    let second = service
        .recommend_crop("farmer-1", &valid_fields())
        .await
        .unwrap();

    assert_eq!(first.prediction_id, second.prediction_id);
    let records = service.get_history(Role::Farmer, "farmer-1").unwrap();
    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn different_requesters_never_share_a_record() {
    let gateway = MockGateway::crop_ok(three_votes());
    let service = service_with(gateway);

    let first = service
        .recommend_crop("farmer-1", &valid_fields())
        .await
        .unwrap();
    let second = service
        .recommend_crop("farmer-2", &valid_fields())
        .await
        .unwrap();

    assert_ne!(first.prediction_id, second.prediction_id);
}

#[tokio::test]
async fn gateway_failure_with_no_prior_record_creates_nothing() {
    let service = service_with(MockGateway::down());

    let err = service
        .recommend_crop("farmer-1", &valid_fields())
        .await
        .unwrap_err();
    assert_eq!(err.http_status(), 503);
    assert!(service
        .get_history(Role::Farmer, "farmer-1")
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn gateway_failure_marks_the_in_window_record_failed() {
    let storage = Arc::new(StorageEngine::open_in_memory().unwrap());

    let ok_service = PredictionService::new(
        MockGateway::crop_ok(three_votes()),
        storage.clone(),
        storage.clone(),
        DedupConfig::default(),
    );
    let first = ok_service
        .recommend_crop("farmer-1", &valid_fields())
        .await
        .unwrap();

    let down_service = PredictionService::new(
        MockGateway::down(),
        storage.clone(),
        storage.clone(),
        DedupConfig::default(),
    );
    let err = down_service
        .recommend_crop("farmer-1", &valid_fields())
        .await
        .unwrap_err();
    assert_eq!(err.http_status(), 503);

    let record = storage.get(&first.prediction_id).unwrap().unwrap();
    assert_eq!(record.status, PredictionStatus::Failed);
    assert_eq!(record.output, PredictionOutput::None);
}

#[tokio::test]
async fn disease_detection_returns_the_single_vote() {
    let gateway = MockGateway::disease_ok(ModelVote::new("leaf_rust", 0.93));
    let service = service_with(gateway);
    let image = ImagePayload::new(vec![1, 2, 3], "leaf.jpg", "image/jpeg");

    let reply = service.detect_disease("farmer-1", &image).await.unwrap();
    assert_eq!(reply.prediction, "leaf_rust");
    assert!((reply.confidence - 0.93).abs() < 1e-9);

    let records = service.get_history(Role::Farmer, "farmer-1").unwrap();
    assert_eq!(records.len(), 1);
    assert!(matches!(records[0].output, PredictionOutput::Disease(_)));
    assert_eq!(records[0].input, json!({ "file_name": "leaf.jpg" }));
}

#[tokio::test]
async fn empty_image_is_rejected_before_the_gateway() {
    let gateway = MockGateway::disease_ok(ModelVote::new("healthy", 0.99));
    let calls = gateway.calls.clone();
    let service = service_with(gateway);
    let image = ImagePayload::new(Vec::new(), "leaf.jpg", "image/jpeg");

    let err = service
        .detect_disease("farmer-1", &image)
        .await
        .unwrap_err();
    assert_eq!(err.http_status(), 400);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn crop_and_disease_records_dedup_independently() {
    let storage = Arc::new(StorageEngine::open_in_memory().unwrap());
    let crop_service = PredictionService::new(
        MockGateway::crop_ok(three_votes()),
        storage.clone(),
        storage.clone(),
        DedupConfig::default(),
    );
    let disease_service = PredictionService::new(
        MockGateway::disease_ok(ModelVote::new("healthy", 0.9)),
        storage.clone(),
        storage.clone(),
        DedupConfig::default(),
    );
    let image = ImagePayload::new(vec![9], "leaf.jpg", "image/jpeg");

    let crop = crop_service
        .recommend_crop("farmer-1", &valid_fields())
        .await
        .unwrap();
    let disease = disease_service
        .detect_disease("farmer-1", &image)
        .await
        .unwrap();

    assert_ne!(crop.prediction_id, disease.prediction_id);
    let records = crop_service.get_history(Role::Farmer, "farmer-1").unwrap();
    assert_eq!(records.len(), 2);
}

#[tokio::test]
async fn agronomist_history_flows_through_the_service() {
    let storage = Arc::new(StorageEngine::open_in_memory().unwrap());
    let service = PredictionService::new(
        MockGateway::crop_ok(three_votes()),
        storage.clone(),
        storage.clone(),
        DedupConfig::default(),
    );

    service
        .recommend_crop("farmer-1", &valid_fields())
        .await
        .unwrap();
    storage.assign("agro-1", "farmer-1").unwrap();

    let records = service.get_history(Role::Agronomist, "agro-1").unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].requester_id, "farmer-1");

    let err = service.get_history(Role::Admin, "admin-1").unwrap_err();
    assert_eq!(err.http_status(), 403);
}
