//! History retrieval over a store and an assignment directory.

use agroml_core::errors::AgromlResult;
use agroml_core::models::{PredictionRecord, Role};
use agroml_core::traits::{IAssignmentDirectory, IPredictionStore};

use crate::scope::HistoryScope;

/// Reads prediction history for a requester, limited to what their role
/// allows. Never widens access on its own; the role is taken as verified.
pub struct HistoryEngine<S, D> {
    store: S,
    directory: D,
}

impl<S, D> HistoryEngine<S, D>
where
    S: IPredictionStore,
    D: IAssignmentDirectory,
{
    pub fn new(store: S, directory: D) -> Self {
        Self { store, directory }
    }

    /// Records visible to this requester, newest first. An agronomist with
    /// no assigned farmers gets an empty list, not an error.
    pub fn history_for(&self, role: Role, requester_id: &str) -> AgromlResult<Vec<PredictionRecord>> {
        let scope = HistoryScope::resolve(role, requester_id, &self.directory)?;
        let records = match &scope {
            HistoryScope::SelfOnly(owner) => self.store.find_by_requester(owner)?,
            HistoryScope::Subordinates(owners) => self.store.find_by_requester_set(owners)?,
        };
        tracing::debug!(
            requester = requester_id,
            role = %role,
            count = records.len(),
            "history: resolved records"
        );
        Ok(records)
    }
}
