//! Per-model prediction votes and the ordered collection the consensus
//! aggregator reduces.

use std::collections::BTreeMap;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// A single model's answer: a label and the model's confidence in it.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ModelVote {
    pub label: String,
    /// Upstream's claimed confidence, expected in [0, 1].
    pub confidence: f64,
}

impl ModelVote {
    pub fn new(label: impl Into<String>, confidence: f64) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }
}

/// An explicitly ordered sequence of `(model_name, vote)` pairs.
///
/// Ordered rather than a map so that consensus tie-breaking on
/// "first-encountered label" is reproducible. The gateway builds this in
/// model-name order; callers constructing it by hand fix their own order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelOutputs(pub Vec<(String, ModelVote)>);

impl ModelOutputs {
    pub fn new(pairs: Vec<(String, ModelVote)>) -> Self {
        Self(pairs)
    }

    /// Build from an unordered map, fixing iteration order to model name.
    pub fn from_map(map: BTreeMap<String, ModelVote>) -> Self {
        Self(map.into_iter().collect())
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, ModelVote)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// On the wire and in storage this is a JSON object keyed by model name.
impl Serialize for ModelOutputs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, vote) in &self.0 {
            map.serialize_entry(name, vote)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ModelOutputs {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = BTreeMap::<String, ModelVote>::deserialize(deserializer)?;
        Ok(Self::from_map(map))
    }
}
