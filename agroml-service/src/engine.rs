//! The prediction pipeline.
//!
//! One request flows validate -> gateway -> persist -> reduce. The store
//! is consulted through the dedup window on every persist, so a repeat
//! request inside the window refreshes its earlier record instead of
//! inserting a new one. A failed gateway call refreshes an in-window
//! record to `failed` but never creates one.

use std::sync::Arc;

use serde_json::{Map, Value};

use agroml_core::config::{AgromlConfig, DedupConfig};
use agroml_core::errors::AgromlResult;
use agroml_core::models::{
    Category, CropRecommendation, DiseaseDetection, ImagePayload, PredictionOutput,
    PredictionRecord, PredictionStatus, Role,
};
use agroml_core::traits::{IAssignmentDirectory, IPredictionGateway, IPredictionStore};
use agroml_gateway::HttpGateway;
use agroml_history::HistoryEngine;
use agroml_storage::StorageEngine;
use agroml_validation::{validate_crop_fields, validate_image};

/// The pipeline over a gateway, a record store, and an assignment
/// directory. Generic so tests can swap any collaborator for a mock.
pub struct PredictionService<G, S, D> {
    gateway: G,
    store: S,
    history: HistoryEngine<S, D>,
    dedup_window: chrono::Duration,
}

impl PredictionService<HttpGateway, Arc<StorageEngine>, Arc<StorageEngine>> {
    /// Wire the production pipeline from configuration: HTTP gateway plus
    /// the SQLite engine doubling as the assignment directory.
    pub fn open(config: &AgromlConfig) -> anyhow::Result<Self> {
        let gateway = HttpGateway::new(config.gateway.clone())?;
        let storage = Arc::new(StorageEngine::open(&config.storage)?);
        Ok(Self::new(
            gateway,
            storage.clone(),
            storage,
            config.dedup,
        ))
    }
}

impl<G, S, D> PredictionService<G, S, D>
where
    G: IPredictionGateway,
    S: IPredictionStore + Clone,
    D: IAssignmentDirectory,
{
    pub fn new(gateway: G, store: S, directory: D, dedup: DedupConfig) -> Self {
        let history = HistoryEngine::new(store.clone(), directory);
        Self {
            gateway,
            store,
            history,
            dedup_window: dedup.window(),
        }
    }

    /// Full crop recommendation flow: validate the raw fields, dispatch to
    /// the numeric predictor, persist through the dedup window, and reduce
    /// the per-model votes to a consensus.
    pub async fn recommend_crop(
        &self,
        requester_id: &str,
        fields: &Map<String, Value>,
    ) -> AgromlResult<CropRecommendation> {
        let features = validate_crop_fields(fields)?;
        let input = features.to_input_json();

        let outputs = match self.gateway.recommend_crop(&features).await {
            Ok(outputs) => outputs,
            Err(e) => {
                self.record_failure(requester_id, Category::CropRecommendation, &input);
                return Err(e);
            }
        };

        let record = self.persist(
            requester_id,
            Category::CropRecommendation,
            input,
            PredictionOutput::Crop(outputs.clone()),
        )?;
        let consensus = agroml_consensus::consensus(&outputs);
        tracing::info!(
            requester = requester_id,
            prediction_id = %record.id,
            label = consensus.label.as_deref().unwrap_or("-"),
            "crop recommendation completed"
        );

        Ok(CropRecommendation {
            output: outputs,
            consensus,
            prediction_id: record.id,
        })
    }

    /// Full disease detection flow: validate the upload, dispatch to the
    /// image predictor, and persist through the dedup window.
    pub async fn detect_disease(
        &self,
        requester_id: &str,
        image: &ImagePayload,
    ) -> AgromlResult<DiseaseDetection> {
        validate_image(image)?;
        let input = image.to_input_json();

        let vote = match self.gateway.detect_disease(image).await {
            Ok(vote) => vote,
            Err(e) => {
                self.record_failure(requester_id, Category::DiseaseDetection, &input);
                return Err(e);
            }
        };

        let record = self.persist(
            requester_id,
            Category::DiseaseDetection,
            input,
            PredictionOutput::Disease(vote.clone()),
        )?;
        tracing::info!(
            requester = requester_id,
            prediction_id = %record.id,
            label = %vote.label,
            "disease detection completed"
        );

        Ok(DiseaseDetection {
            prediction: vote.label,
            confidence: vote.confidence,
            prediction_id: record.id,
        })
    }

    /// Role-scoped history, newest first.
    pub fn get_history(&self, role: Role, requester_id: &str) -> AgromlResult<Vec<PredictionRecord>> {
        self.history.history_for(role, requester_id)
    }

    /// Update-or-insert through the dedup window.
    fn persist(
        &self,
        requester_id: &str,
        category: Category,
        input: Value,
        output: PredictionOutput,
    ) -> AgromlResult<PredictionRecord> {
        let refreshed = self.store.refresh_in_window(
            requester_id,
            category,
            self.dedup_window,
            &input,
            &output,
            PredictionStatus::Success,
        )?;
        if let Some(record) = refreshed {
            tracing::debug!(
                requester = requester_id,
                %category,
                prediction_id = %record.id,
                "refreshed in-window record"
            );
            return Ok(record);
        }

        let record = PredictionRecord::new(
            requester_id,
            category,
            input,
            output,
            PredictionStatus::Success,
        );
        self.store.create(&record)?;
        Ok(record)
    }

    /// Mark an in-window record failed after a gateway error. No record is
    /// created when none is inside the window, and a storage failure here
    /// is logged rather than masking the gateway error the caller gets.
    fn record_failure(&self, requester_id: &str, category: Category, input: &Value) {
        let result = self.store.refresh_in_window(
            requester_id,
            category,
            self.dedup_window,
            input,
            &PredictionOutput::None,
            PredictionStatus::Failed,
        );
        match result {
            Ok(Some(record)) => {
                tracing::warn!(
                    requester = requester_id,
                    %category,
                    prediction_id = %record.id,
                    "marked in-window record failed after gateway error"
                );
            }
            Ok(None) => {}
            Err(e) => {
                tracing::error!(
                    requester = requester_id,
                    %category,
                    error = %e,
                    "could not record gateway failure"
                );
            }
        }
    }
}
