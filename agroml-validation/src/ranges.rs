//! Closed numeric ranges for the crop recommendation fields.

/// Inclusive bounds for one feature field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRange {
    pub field: &'static str,
    pub min: f64,
    pub max: f64,
}

impl FieldRange {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Documented ranges, in wire order.
pub const CROP_FIELD_RANGES: [FieldRange; 7] = [
    FieldRange { field: "N", min: 0.0, max: 300.0 },
    FieldRange { field: "P", min: 0.0, max: 150.0 },
    FieldRange { field: "K", min: 0.0, max: 250.0 },
    FieldRange { field: "temperature", min: -10.0, max: 50.0 },
    FieldRange { field: "humidity", min: 0.0, max: 100.0 },
    FieldRange { field: "ph", min: 3.0, max: 10.0 },
    FieldRange { field: "rainfall", min: 0.0, max: 500.0 },
];
