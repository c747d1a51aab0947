//! Consensus reduction over ordered model votes.

use agroml_core::models::{Consensus, ModelOutputs};

/// Running score for one label.
struct LabelScore {
    label: String,
    total: f64,
    count: usize,
}

impl LabelScore {
    fn mean(&self) -> f64 {
        self.total / self.count as f64
    }
}

/// Reduce per-model votes into the single best label.
///
/// Labels accumulate in first-encountered order. The winner test is
/// strictly-greater, so an exact tie keeps the earlier label. An empty
/// input yields `{ label: None, confidence: 0.0 }`.
pub fn consensus(outputs: &ModelOutputs) -> Consensus {
    let mut scores: Vec<LabelScore> = Vec::new();

    for (_model, vote) in outputs.iter() {
        match scores.iter_mut().find(|s| s.label == vote.label) {
            Some(score) => {
                score.total += vote.confidence;
                score.count += 1;
            }
            None => scores.push(LabelScore {
                label: vote.label.clone(),
                total: vote.confidence,
                count: 1,
            }),
        }
    }

    let mut best: Option<(&LabelScore, f64)> = None;
    for score in &scores {
        let mean = score.mean();
        if best.map_or(true, |(_, best_mean)| mean > best_mean) {
            best = Some((score, mean));
        }
    }

    match best {
        Some((score, mean)) => Consensus {
            label: Some(score.label.clone()),
            confidence: mean,
        },
        None => Consensus::empty(),
    }
}
