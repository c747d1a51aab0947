//! External assignment collaborator: which requesters a supervisor may
//! read history for.

use std::sync::Arc;

use crate::errors::AgromlResult;

pub trait IAssignmentDirectory: Send + Sync {
    /// Requester ids assigned to the given supervisor. Empty when the
    /// supervisor has no assignment.
    fn subordinates_of(&self, supervisor_id: &str) -> AgromlResult<Vec<String>>;
}

impl<T: IAssignmentDirectory> IAssignmentDirectory for Arc<T> {
    fn subordinates_of(&self, supervisor_id: &str) -> AgromlResult<Vec<String>> {
        (**self).subordinates_of(supervisor_id)
    }
}
