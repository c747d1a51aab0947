//! Durable prediction record store: the single source of truth and the
//! only shared resource across requests. All mutation goes through the
//! update-or-insert contract.

use std::sync::Arc;

use crate::errors::AgromlResult;
use crate::models::{Category, PredictionOutput, PredictionRecord, PredictionStatus};

pub trait IPredictionStore: Send + Sync {
    /// Persist a brand-new record.
    fn create(&self, record: &PredictionRecord) -> AgromlResult<()>;

    /// Fetch a single record by id. Read-only.
    fn get(&self, id: &str) -> AgromlResult<Option<PredictionRecord>>;

    /// Atomic find-and-update of the most recent record for
    /// (`requester_id`, `category`) whose `created_at` is strictly inside
    /// the trailing `window`. On a hit, overwrites `input`/`output`/`status`,
    /// advances `updated_at`, and returns the refreshed record. `None`
    /// signals the caller to create a new record instead.
    fn refresh_in_window(
        &self,
        requester_id: &str,
        category: Category,
        window: chrono::Duration,
        input: &serde_json::Value,
        output: &PredictionOutput,
        status: PredictionStatus,
    ) -> AgromlResult<Option<PredictionRecord>>;

    /// All records owned by one requester, newest first. Read-only.
    fn find_by_requester(&self, requester_id: &str) -> AgromlResult<Vec<PredictionRecord>>;

    /// All records owned by any requester in the set, newest first across
    /// the whole result. Read-only.
    fn find_by_requester_set(&self, requester_ids: &[String])
        -> AgromlResult<Vec<PredictionRecord>>;
}

/// Blanket impl: `Arc<T>` delegates to the inner `T`, so a shared engine
/// can be handed to several pipeline stages.
impl<T: IPredictionStore> IPredictionStore for Arc<T> {
    fn create(&self, record: &PredictionRecord) -> AgromlResult<()> {
        (**self).create(record)
    }
    fn get(&self, id: &str) -> AgromlResult<Option<PredictionRecord>> {
        (**self).get(id)
    }
    fn refresh_in_window(
        &self,
        requester_id: &str,
        category: Category,
        window: chrono::Duration,
        input: &serde_json::Value,
        output: &PredictionOutput,
        status: PredictionStatus,
    ) -> AgromlResult<Option<PredictionRecord>> {
        (**self).refresh_in_window(requester_id, category, window, input, output, status)
    }
    fn find_by_requester(&self, requester_id: &str) -> AgromlResult<Vec<PredictionRecord>> {
        (**self).find_by_requester(requester_id)
    }
    fn find_by_requester_set(
        &self,
        requester_ids: &[String],
    ) -> AgromlResult<Vec<PredictionRecord>> {
        (**self).find_by_requester_set(requester_ids)
    }
}
