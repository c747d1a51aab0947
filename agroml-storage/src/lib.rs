//! # agroml-storage
//!
//! SQLite persistence layer: prediction records with the dedup window
//! update path, plus the supervisor/subordinate assignment directory.
//! Single write connection, round-robin read pool, user_version-gated
//! migrations.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;

use agroml_core::errors::{AgromlError, StorageError};

/// Wrap a low-level SQLite message into the storage error kind.
pub(crate) fn to_storage_err(message: String) -> AgromlError {
    StorageError::Sqlite { message }.into()
}
