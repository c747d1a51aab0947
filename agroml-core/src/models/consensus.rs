//! The reduced answer derived from multiple model votes.

use serde::{Deserialize, Serialize};

/// Winning label and its mean confidence across the models that proposed it.
/// `label` is `None` when no model produced any output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Consensus {
    pub label: Option<String>,
    pub confidence: f64,
}

impl Consensus {
    pub fn empty() -> Self {
        Self {
            label: None,
            confidence: 0.0,
        }
    }
}
