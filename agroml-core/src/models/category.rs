//! Prediction categories. Each category has its own validation rules,
//! upstream endpoint, and output shape.

use serde::{Deserialize, Serialize};

/// The kind of prediction task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "crop-recommendation")]
    CropRecommendation,
    #[serde(rename = "disease-detection")]
    DiseaseDetection,
}

impl Category {
    /// Canonical string form, used in storage and on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CropRecommendation => "crop-recommendation",
            Self::DiseaseDetection => "disease-detection",
        }
    }

    /// Parse the canonical string form.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "crop-recommendation" => Some(Self::CropRecommendation),
            "disease-detection" => Some(Self::DiseaseDetection),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
