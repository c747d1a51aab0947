//! The durable record of a prediction attempt.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Category, ModelOutputs, ModelVote};

/// Whether the upstream call behind a record succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictionStatus {
    Success,
    Failed,
}

impl PredictionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failed => "failed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "success" => Some(Self::Success),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }
}

/// Category-specific prediction output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PredictionOutput {
    /// Crop recommendation: one vote per upstream model.
    Crop(ModelOutputs),
    /// Disease detection: the single upstream answer.
    Disease(ModelVote),
    /// No output (the upstream call failed).
    None,
}

/// A persisted prediction attempt.
///
/// Immutable once written, except through the dedup update path: a repeat
/// request from the same requester/category inside the trailing window
/// overwrites `input`, `output`, `status` and advances `updated_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub id: String,
    pub requester_id: String,
    pub category: Category,
    /// Opaque echo of the request input.
    pub input: serde_json::Value,
    pub output: PredictionOutput,
    pub status: PredictionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PredictionRecord {
    /// Create a fresh record with a generated id and current timestamps.
    pub fn new(
        requester_id: impl Into<String>,
        category: Category,
        input: serde_json::Value,
        output: PredictionOutput,
        status: PredictionStatus,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            requester_id: requester_id.into(),
            category,
            input,
            output,
            status,
            created_at: now,
            updated_at: now,
        }
    }
}
