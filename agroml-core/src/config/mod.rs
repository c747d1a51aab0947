//! Runtime configuration, loadable from TOML and fully defaulted.

pub mod dedup_config;
pub mod defaults;
pub mod gateway_config;
pub mod storage_config;

use serde::{Deserialize, Serialize};

pub use dedup_config::DedupConfig;
pub use gateway_config::{EndpointConfig, GatewayConfig};
pub use storage_config::StorageConfig;

/// Top-level configuration, injected at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AgromlConfig {
    pub gateway: GatewayConfig,
    pub dedup: DedupConfig,
    pub storage: StorageConfig,
}

impl AgromlConfig {
    /// Parse a TOML document. Missing sections and keys fall back to
    /// defaults.
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &std::path::Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}
