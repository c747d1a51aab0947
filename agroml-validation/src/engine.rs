//! Validation entry points, one per category.

use serde_json::{Map, Value};

use agroml_core::errors::{FieldViolation, ValidationError};
use agroml_core::models::{FeatureVector, ImagePayload};

use crate::ranges::CROP_FIELD_RANGES;

/// Validate a raw field mapping for crop recommendation.
///
/// All seven fields are mandatory and numeric; a non-numeric value counts
/// as missing. Missing fields are reported before range checks run, and
/// both failure kinds list every offender. Boundaries are inclusive.
pub fn validate_crop_fields(fields: &Map<String, Value>) -> Result<FeatureVector, ValidationError> {
    let mut missing: Vec<String> = Vec::new();
    let mut values = [0.0f64; 7];

    for (i, range) in CROP_FIELD_RANGES.iter().enumerate() {
        match fields.get(range.field).and_then(Value::as_f64) {
            Some(v) => values[i] = v,
            None => missing.push(range.field.to_string()),
        }
    }
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields { fields: missing });
    }

    let violations: Vec<FieldViolation> = CROP_FIELD_RANGES
        .iter()
        .zip(values.iter())
        .filter(|(range, value)| !range.contains(**value))
        .map(|(range, value)| FieldViolation {
            field: range.field.to_string(),
            value: *value,
            min: range.min,
            max: range.max,
        })
        .collect();
    if !violations.is_empty() {
        return Err(ValidationError::OutOfRange { violations });
    }

    let [n, p, k, temperature, humidity, ph, rainfall] = values;
    Ok(FeatureVector {
        nitrogen: n,
        phosphorus: p,
        potassium: k,
        temperature,
        humidity,
        ph,
        rainfall,
    })
}

/// Validate an image payload for disease detection. Presence of non-empty
/// bytes is the sole requirement; no range checks apply.
pub fn validate_image(image: &ImagePayload) -> Result<(), ValidationError> {
    if image.is_empty() {
        return Err(ValidationError::EmptyImage);
    }
    Ok(())
}
