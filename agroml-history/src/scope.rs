//! Mapping a role to the set of record owners it may read.

use agroml_core::errors::{AgromlResult, HistoryError};
use agroml_core::models::Role;
use agroml_core::traits::IAssignmentDirectory;

/// The owners whose records a history request may see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryScope {
    /// Only the requester's own records.
    SelfOnly(String),
    /// The records of every listed subordinate. May be empty.
    Subordinates(Vec<String>),
}

impl HistoryScope {
    /// Resolve the scope for a requester. Roles without history access
    /// are rejected here, before any record is touched.
    pub fn resolve<D: IAssignmentDirectory>(
        role: Role,
        requester_id: &str,
        directory: &D,
    ) -> AgromlResult<Self> {
        match role {
            Role::Farmer => Ok(Self::SelfOnly(requester_id.to_string())),
            Role::Agronomist => {
                let subordinates = directory.subordinates_of(requester_id)?;
                Ok(Self::Subordinates(subordinates))
            }
            Role::Admin => Err(HistoryError::RoleNotPermitted {
                role: role.as_str().to_string(),
            }
            .into()),
        }
    }
}
