//! Typed translation of upstream prediction service failures.
//!
//! The four kinds determine the client-visible status code, so the
//! mapping is preserved exactly: connection-level -> ServiceUnavailable,
//! upstream 4xx -> InvalidUpstreamInput, upstream 5xx ->
//! UpstreamInternalError, everything else -> UpstreamError.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// Connection refused, unreachable, or timed out.
    #[error("prediction service is unavailable: {reason}")]
    ServiceUnavailable { reason: String },

    /// Upstream reported the payload was malformed (HTTP 4xx).
    #[error("invalid input data for prediction service: {reason}")]
    InvalidUpstreamInput { reason: String },

    /// Upstream reported its own failure (HTTP 5xx).
    #[error("prediction service internal error (HTTP {status})")]
    UpstreamInternalError { status: u16 },

    /// Any other network or protocol failure, including malformed
    /// success bodies.
    #[error("prediction service error: {reason}")]
    UpstreamError { reason: String },
}
