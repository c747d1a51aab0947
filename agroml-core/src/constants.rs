//! Workspace-wide constants.

/// The seven mandatory numeric fields of a crop recommendation request,
/// in wire order.
pub const CROP_FEATURE_FIELDS: [&str; 7] = [
    "N",
    "P",
    "K",
    "temperature",
    "humidity",
    "ph",
    "rainfall",
];

/// Multipart form field name the image predictor expects.
pub const IMAGE_FORM_FIELD: &str = "file";
