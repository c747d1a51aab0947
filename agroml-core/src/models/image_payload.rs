//! Binary image input for disease detection.

use serde_json::json;

/// An uploaded image, forwarded verbatim to the image predictor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub mime_type: String,
}

impl ImagePayload {
    pub fn new(bytes: Vec<u8>, file_name: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            file_name: file_name.into(),
            mime_type: mime_type.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Opaque input echo stored alongside the prediction record.
    /// The raw bytes are never persisted, only the file name.
    pub fn to_input_json(&self) -> serde_json::Value {
        json!({ "file_name": self.file_name })
    }
}
