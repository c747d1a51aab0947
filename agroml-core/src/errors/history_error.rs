//! History retrieval authorization failures.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HistoryError {
    #[error("role {role} is not permitted to read prediction history")]
    RoleNotPermitted { role: String },
}
