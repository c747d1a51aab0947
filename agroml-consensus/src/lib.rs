//! # agroml-consensus
//!
//! Confidence-weighted label averaging across model votes.
//!
//! Per distinct label: mean = sum of confidences of the models proposing
//! it / count of those models (not total model count). Winner is the
//! highest mean; ties keep the first-encountered label, which is
//! deterministic because `ModelOutputs` is an ordered sequence.

pub mod aggregator;

pub use aggregator::consensus;
