//! Dedup window configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Trailing time window inside which repeated requests from the same
/// requester/category collapse into one updated record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DedupConfig {
    pub window_secs: u64,
}

impl Default for DedupConfig {
    fn default() -> Self {
        Self {
            window_secs: defaults::DEFAULT_DEDUP_WINDOW_SECS,
        }
    }
}

impl DedupConfig {
    pub fn window(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.window_secs as i64)
    }
}
