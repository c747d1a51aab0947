//! # agroml-service
//!
//! The request pipeline glued together: validate the input, call the
//! external predictors through the gateway, collapse repeats through the
//! dedup window, reduce multi-model votes to a consensus, and answer
//! role-scoped history queries.

pub mod engine;
pub mod logging;

pub use engine::PredictionService;
