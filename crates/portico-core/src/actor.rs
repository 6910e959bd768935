//! # Actor Roles
//!
//! The four roles that operate on the Portico platform. Roles are recorded
//! on every lifecycle transition for the audit trail; authorization (which
//! role may trigger which action) is enforced by the surrounding
//! application's access-control layer, not by the lifecycle engine.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The role of the user performing an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActorRole {
    /// Platform administrator with full access.
    Admin,
    /// Agency staff member handling day-to-day operations.
    Staff,
    /// A client of the agency.
    Client,
    /// Read-only observer (e.g., an auditor or stakeholder).
    Observer,
}

impl ActorRole {
    /// All roles, in privilege order.
    pub const ALL: [ActorRole; 4] = [Self::Admin, Self::Staff, Self::Client, Self::Observer];

    /// The canonical name of this role (e.g., "ADMIN").
    pub fn name(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Staff => "STAFF",
            Self::Client => "CLIENT",
            Self::Observer => "OBSERVER",
        }
    }

    /// Parse a role from its canonical name.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "ADMIN" => Ok(Self::Admin),
            "STAFF" => Ok(Self::Staff),
            "CLIENT" => Ok(Self::Client),
            "OBSERVER" => Ok(Self::Observer),
            other => Err(CoreError::Validation(format!("unknown actor role: {other:?}"))),
        }
    }

    /// Whether this role can mutate platform data at all.
    ///
    /// Observers are read-only by definition; finer-grained gating is the
    /// application layer's concern.
    pub fn can_write(&self) -> bool {
        !matches!(self, Self::Observer)
    }
}

impl std::fmt::Display for ActorRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
