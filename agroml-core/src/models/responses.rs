//! Response shapes of the inbound surface, consumed by the routing layer.

use serde::{Deserialize, Serialize};

use super::{Consensus, ModelOutputs};

/// Result of a crop recommendation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropRecommendation {
    /// Raw per-model outputs, in the canonical (model-name) order.
    pub output: ModelOutputs,
    /// The reduced single answer.
    pub consensus: Consensus,
    pub prediction_id: String,
}

/// Result of a disease detection request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiseaseDetection {
    pub prediction: String,
    pub confidence: f64,
    pub prediction_id: String,
}
