//! Failure translation. The mapping determines the client-visible status
//! code, so it is preserved exactly: connection-level failures (refused,
//! unreachable, timed out) -> ServiceUnavailable; upstream 4xx ->
//! InvalidUpstreamInput; upstream 5xx -> UpstreamInternalError; anything
//! else -> UpstreamError.

use reqwest::StatusCode;

use agroml_core::errors::GatewayError;

/// Classify a transport-level failure (the request never produced an
/// HTTP status).
pub fn translate_transport_error(err: &reqwest::Error) -> GatewayError {
    if err.is_connect() || err.is_timeout() {
        GatewayError::ServiceUnavailable {
            reason: err.to_string(),
        }
    } else {
        GatewayError::UpstreamError {
            reason: err.to_string(),
        }
    }
}

/// Classify a non-success HTTP status reported by the upstream.
pub fn translate_status(status: StatusCode, body: &str) -> GatewayError {
    if status.is_client_error() {
        GatewayError::InvalidUpstreamInput {
            reason: format!("HTTP {status}: {body}"),
        }
    } else if status.is_server_error() {
        GatewayError::UpstreamInternalError {
            status: status.as_u16(),
        }
    } else {
        GatewayError::UpstreamError {
            reason: format!("unexpected HTTP {status}"),
        }
    }
}

/// Classify a success response whose body could not be decoded.
pub fn malformed_body(err: &reqwest::Error) -> GatewayError {
    GatewayError::UpstreamError {
        reason: format!("malformed response body: {err}"),
    }
}
