//! # agroml-core
//!
//! Foundation crate for the agroml prediction pipeline.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::AgromlConfig;
pub use errors::{AgromlError, AgromlResult};
pub use models::{
    Category, Consensus, FeatureVector, ImagePayload, ModelOutputs, ModelVote, PredictionOutput,
    PredictionRecord, PredictionStatus, Role,
};
