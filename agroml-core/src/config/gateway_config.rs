//! Upstream prediction endpoints, one per category, each independently
//! configured and independently reachable.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// A single upstream endpoint with its request timeout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Base URL, e.g. `http://localhost:5000`. The predict path is appended.
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::DEFAULT_CROP_BASE_URL.to_string(),
            timeout_secs: defaults::DEFAULT_CROP_TIMEOUT_SECS,
        }
    }
}

impl EndpointConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Full URL of the predict endpoint.
    pub fn predict_url(&self) -> String {
        format!("{}{}", self.base_url, defaults::PREDICT_PATH)
    }
}

/// Per-category upstream endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Numeric crop predictor (JSON body).
    pub crop: EndpointConfig,
    /// Image disease predictor (multipart body).
    pub disease: EndpointConfig,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            crop: EndpointConfig::default(),
            disease: EndpointConfig {
                base_url: defaults::DEFAULT_DISEASE_BASE_URL.to_string(),
                timeout_secs: defaults::DEFAULT_DISEASE_TIMEOUT_SECS,
            },
        }
    }
}
