//! Error taxonomy for the prediction pipeline.
//!
//! Every failure a caller can see is one of the kinds below; the umbrella
//! `AgromlError` carries the HTTP-equivalent status the routing layer maps
//! it to. No retries happen anywhere in this subsystem.

pub mod gateway_error;
pub mod history_error;
pub mod storage_error;
pub mod validation_error;

pub use gateway_error::GatewayError;
pub use history_error::HistoryError;
pub use storage_error::StorageError;
pub use validation_error::{FieldViolation, ValidationError};

/// Umbrella error for the whole pipeline.
#[derive(Debug, thiserror::Error)]
pub enum AgromlError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    History(#[from] HistoryError),
}

pub type AgromlResult<T> = Result<T, AgromlError>;

impl AgromlError {
    /// The HTTP-equivalent status code for this failure.
    ///
    /// Local validation and upstream rejection are both 400 but keep
    /// distinct messages; connection-level and upstream-internal failures
    /// are 503; any other upstream failure is 502; authorization is 403;
    /// persistence is 500.
    pub fn http_status(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::Gateway(GatewayError::ServiceUnavailable { .. }) => 503,
            Self::Gateway(GatewayError::InvalidUpstreamInput { .. }) => 400,
            Self::Gateway(GatewayError::UpstreamInternalError { .. }) => 503,
            Self::Gateway(GatewayError::UpstreamError { .. }) => 502,
            Self::Storage(_) => 500,
            Self::History(_) => 403,
        }
    }
}
