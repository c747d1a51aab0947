//! The outbound call to the external multi-model prediction services.
//!
//! The gateway call is the only suspension point in a request's handling;
//! its timeout bounds the whole request. No retries: a failed call is
//! surfaced immediately as a typed `GatewayError`.

use std::future::Future;

use crate::errors::AgromlResult;
use crate::models::{FeatureVector, ImagePayload, ModelOutputs, ModelVote};

pub trait IPredictionGateway: Send + Sync {
    /// POST the feature vector to the numeric predictor and return one
    /// vote per upstream model, in canonical order.
    fn recommend_crop(
        &self,
        features: &FeatureVector,
    ) -> impl Future<Output = AgromlResult<ModelOutputs>> + Send;

    /// POST the image to the disease predictor and return its single answer.
    fn detect_disease(
        &self,
        image: &ImagePayload,
    ) -> impl Future<Output = AgromlResult<ModelVote>> + Send;
}
