//! Requester roles. Produced by the (external) auth layer; this subsystem
//! only branches on them for history scoping.

use serde::{Deserialize, Serialize};

/// The verified role of a requester.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Self-scoped: sees only their own predictions.
    Farmer,
    /// Supervisory: sees predictions of assigned farmers.
    Agronomist,
    /// Administrative role; has no prediction history access.
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Farmer => "farmer",
            Self::Agronomist => "agronomist",
            Self::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
