//! Wire formats of the two upstream predictors.

use std::collections::BTreeMap;

use serde::Deserialize;

use agroml_core::models::{ModelOutputs, ModelVote};

/// Success body of the numeric predictor:
/// `{ "predictions": { model: { crop, confidence } } }`.
#[derive(Debug, Deserialize)]
pub struct CropPredictResponse {
    pub predictions: BTreeMap<String, CropVote>,
}

/// One model's entry in the numeric predictor response.
#[derive(Debug, Deserialize)]
pub struct CropVote {
    pub crop: String,
    pub confidence: f64,
}

impl CropPredictResponse {
    /// Canonical ordered outputs: model-name order via the BTreeMap.
    pub fn into_outputs(self) -> ModelOutputs {
        ModelOutputs::new(
            self.predictions
                .into_iter()
                .map(|(model, vote)| (model, ModelVote::new(vote.crop, vote.confidence)))
                .collect(),
        )
    }
}

/// Success body of the image predictor: `{ "prediction", "confidence" }`.
#[derive(Debug, Deserialize)]
pub struct DiseasePredictResponse {
    pub prediction: String,
    pub confidence: f64,
}

impl DiseasePredictResponse {
    pub fn into_vote(self) -> ModelVote {
        ModelVote::new(self.prediction, self.confidence)
    }
}
