//! # agroml-validation
//!
//! Checks required fields and numeric ranges before any network or
//! storage work. A validation failure lists every offending field and
//! never reaches the gateway.

pub mod engine;
pub mod ranges;

pub use engine::{validate_crop_fields, validate_image};
pub use ranges::FieldRange;
