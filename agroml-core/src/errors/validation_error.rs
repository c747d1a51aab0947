//! Input validation failures. Client fault, never retried, and never
//! allowed to reach the gateway.

use serde::Serialize;

/// One field outside its documented closed range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

impl std::fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} value {} out of valid range [{}, {}]",
            self.field, self.value, self.min, self.max
        )
    }
}

/// Validation failures list every offending field, not just the first.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required fields: {}", .fields.join(", "))]
    MissingFields { fields: Vec<String> },

    #[error("{}", .violations.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
    OutOfRange { violations: Vec<FieldViolation> },

    #[error("no image uploaded")]
    EmptyImage,
}
