//! The normalized 7-field numeric input for crop recommendation.

use serde::{Deserialize, Serialize};

/// Validated soil and climate features. Field names serialize to the
/// exact keys the numeric predictor expects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    #[serde(rename = "N")]
    pub nitrogen: f64,
    #[serde(rename = "P")]
    pub phosphorus: f64,
    #[serde(rename = "K")]
    pub potassium: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub ph: f64,
    pub rainfall: f64,
}

impl FeatureVector {
    /// Opaque input echo stored alongside the prediction record.
    pub fn to_input_json(&self) -> serde_json::Value {
        // Serialization of a plain struct of f64 fields cannot fail.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
