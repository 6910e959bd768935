//! # History Records
//!
//! The append-only transition history and the service record it belongs to.
//!
//! Invariant: a service's current state always equals the `to_state` of its
//! newest history entry, or [`LifecycleState::INITIAL`] if no entry exists.
//! Entries are never mutated or deleted; ordering is by timestamp with
//! insertion order as the authoritative tiebreak, since wall-clock
//! timestamps at seconds precision routinely collide.

use serde::{Deserialize, Serialize};

use portico_core::{ActorRole, HistoryId, ServiceId, Timestamp};
use portico_lifecycle::{LifecycleAction, LifecycleState};

/// Immutable record of one executed transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique identifier of this entry.
    pub id: HistoryId,
    /// The service the transition was applied to.
    pub service_id: ServiceId,
    /// The action that was executed.
    pub action: LifecycleAction,
    /// State before the transition.
    pub from_state: LifecycleState,
    /// State after the transition.
    pub to_state: LifecycleState,
    /// Role of the user who triggered the transition.
    pub actor: ActorRole,
    /// Optional free-text note attached by the actor.
    pub comment: Option<String>,
    /// When the transition was committed (UTC).
    pub recorded_at: Timestamp,
}

/// One subscribed service instance as the store sees it.
///
/// The engine never creates or deletes service records — that belongs to
/// the subscription workflow in the surrounding application. It only moves
/// `state` forward through [`crate::StateStore::write_transition`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    /// Unique service identifier.
    pub id: ServiceId,
    /// Current lifecycle state.
    pub state: LifecycleState,
    /// When the service record was created.
    pub created_at: Timestamp,
    /// When the state last changed (equals `created_at` before the first
    /// transition).
    pub updated_at: Timestamp,
}

impl ServiceRecord {
    /// Create a fresh record in the initial state.
    pub fn new(id: ServiceId) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            state: LifecycleState::INITIAL,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_starts_in_initial_state() {
        let rec = ServiceRecord::new(ServiceId::new());
        assert_eq!(rec.state, LifecycleState::Requested);
        assert_eq!(rec.created_at, rec.updated_at);
    }

    #[test]
    fn test_history_entry_serde_roundtrip() {
        let entry = HistoryEntry {
            id: HistoryId::new(),
            service_id: ServiceId::new(),
            action: LifecycleAction::Approve,
            from_state: LifecycleState::Requested,
            to_state: LifecycleState::Approved,
            actor: ActorRole::Staff,
            comment: Some("looks good".to_string()),
            recorded_at: Timestamp::parse("2026-03-01T09:30:00Z").unwrap(),
        };
        let json = serde_json::to_string(&entry).unwrap();
        let parsed: HistoryEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, entry);
    }
}
