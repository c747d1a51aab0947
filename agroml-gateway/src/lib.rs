//! # agroml-gateway
//!
//! Issues the outbound call to the external model services, one endpoint
//! per category, with bounded timeouts and verbatim failure translation.
//! No retries: a failed call is surfaced immediately.

pub mod client;
pub mod translate;
pub mod wire;

pub use client::HttpGateway;
