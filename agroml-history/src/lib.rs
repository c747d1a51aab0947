//! # agroml-history
//!
//! Role-scoped history retrieval: resolves the requester's role to a set
//! of record owners, then reads those owners' records newest first.

pub mod engine;
pub mod scope;

pub use engine::HistoryEngine;
pub use scope::HistoryScope;
