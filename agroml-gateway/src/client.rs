//! Async HTTP gateway over the two configured predictor endpoints.

use agroml_core::config::GatewayConfig;
use agroml_core::constants::IMAGE_FORM_FIELD;
use agroml_core::errors::{AgromlResult, GatewayError};
use agroml_core::models::{FeatureVector, ImagePayload, ModelOutputs, ModelVote};
use agroml_core::traits::IPredictionGateway;

use crate::translate::{malformed_body, translate_status, translate_transport_error};
use crate::wire::{CropPredictResponse, DiseasePredictResponse};

/// HTTP gateway. One client per endpoint so each carries its own
/// configured timeout; the timeout bounds the whole request.
#[derive(Debug)]
pub struct HttpGateway {
    crop_client: reqwest::Client,
    disease_client: reqwest::Client,
    config: GatewayConfig,
}

impl HttpGateway {
    /// Build a gateway from endpoint configuration injected at startup.
    pub fn new(config: GatewayConfig) -> AgromlResult<Self> {
        let crop_client = reqwest::Client::builder()
            .timeout(config.crop.timeout())
            .gzip(true)
            .build()
            .map_err(|e| GatewayError::UpstreamError {
                reason: format!("client build failed: {e}"),
            })?;
        let disease_client = reqwest::Client::builder()
            .timeout(config.disease.timeout())
            .gzip(true)
            .build()
            .map_err(|e| GatewayError::UpstreamError {
                reason: format!("client build failed: {e}"),
            })?;
        Ok(Self {
            crop_client,
            disease_client,
            config,
        })
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

impl IPredictionGateway for HttpGateway {
    async fn recommend_crop(&self, features: &FeatureVector) -> AgromlResult<ModelOutputs> {
        let url = self.config.crop.predict_url();
        tracing::debug!(%url, "gateway: dispatching crop recommendation");

        let response = self
            .crop_client
            .post(&url)
            .json(features)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(%url, error = %e, "gateway: crop predictor unreachable");
                translate_transport_error(&e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%url, %status, "gateway: crop predictor returned failure");
            return Err(translate_status(status, &body).into());
        }

        let parsed: CropPredictResponse =
            response.json().await.map_err(|e| malformed_body(&e))?;
        Ok(parsed.into_outputs())
    }

    async fn detect_disease(&self, image: &ImagePayload) -> AgromlResult<ModelVote> {
        let url = self.config.disease.predict_url();
        tracing::debug!(%url, file = %image.file_name, "gateway: dispatching disease detection");

        let part = reqwest::multipart::Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(&image.mime_type)
            .map_err(|e| GatewayError::UpstreamError {
                reason: format!("invalid mime type {}: {e}", image.mime_type),
            })?;
        let form = reqwest::multipart::Form::new().part(IMAGE_FORM_FIELD, part);

        let response = self
            .disease_client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(%url, error = %e, "gateway: disease predictor unreachable");
                translate_transport_error(&e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%url, %status, "gateway: disease predictor returned failure");
            return Err(translate_status(status, &body).into());
        }

        let parsed: DiseasePredictResponse =
            response.json().await.map_err(|e| malformed_body(&e))?;
        Ok(parsed.into_vote())
    }
}
