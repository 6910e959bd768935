//! # Transition Executor
//!
//! Validates a requested action against the service's current state and
//! commits the resulting transition through the injected store.
//!
//! The executor performs no local recovery and no retries: every failure is
//! surfaced with its kind and the offending state/action so the caller can
//! render a precise message or decide to re-attempt. `IllegalTransition`
//! and `NotFound` are pure validation failures with zero side effects.

use thiserror::Error;
use tracing::{debug, info, warn};

use portico_core::{ActorRole, HistoryId, ServiceId, Timestamp};
use portico_lifecycle::{next_state, valid_actions, LifecycleAction, LifecycleError, LifecycleState};

use crate::history::HistoryEntry;
use crate::store::{StateStore, StoreError};

/// Failure taxonomy for [`LifecycleEngine::execute`].
#[derive(Error, Debug)]
pub enum EngineError {
    /// No service record exists under the given identifier.
    #[error("service {0} not found")]
    NotFound(ServiceId),

    /// The requested action has no rule from the service's current state.
    #[error("action {action} is not legal from state {from}")]
    IllegalTransition {
        /// The state the service was in when the action was attempted.
        from: LifecycleState,
        /// The action that was attempted.
        action: LifecycleAction,
    },

    /// Another transition committed between this call's read and write.
    /// The caller must re-fetch the current state and decide whether the
    /// action still makes sense — the engine never retries on its own.
    #[error("service {service_id} was modified concurrently: expected {expected}, found {actual}")]
    ConcurrentModification {
        /// The contended service.
        service_id: ServiceId,
        /// The state this call validated against.
        expected: LifecycleState,
        /// The state found at write time.
        actual: LifecycleState,
    },

    /// The persistence adapter failed. The outcome of an in-flight write is
    /// unknown; re-read the current state before doing anything else.
    #[error("persistence unavailable: {0}")]
    PersistenceUnavailable(String),
}

impl From<StoreError> for EngineError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => Self::NotFound(id),
            StoreError::Conflict {
                service_id,
                expected,
                actual,
            } => Self::ConcurrentModification {
                service_id,
                expected,
                actual,
            },
            StoreError::Unavailable(msg) => Self::PersistenceUnavailable(msg),
        }
    }
}

/// The lifecycle transition executor.
///
/// Holds the injected persistence adapter and nothing else — the rule
/// table is `const` and shared, and entity state is never cached between
/// calls. The engine is `Sync` whenever the store is, and a single instance
/// serves any number of concurrent callers.
pub struct LifecycleEngine<S: StateStore> {
    store: S,
}

impl<S: StateStore> LifecycleEngine<S> {
    /// Build an engine over a persistence adapter.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The actions currently legal for a service, per its stored state.
    ///
    /// Convenience over [`valid_actions`] for callers that hold only the
    /// service id.
    pub fn available_actions(
        &self,
        service_id: ServiceId,
    ) -> Result<Vec<LifecycleAction>, EngineError> {
        let state = self.store.read_state(service_id)?;
        Ok(valid_actions(state))
    }

    /// Execute one lifecycle action against a service.
    ///
    /// Reads the current state, validates the action, computes the target
    /// state, and commits state + history in one atomic CAS write. Exactly
    /// one state mutation and one history append occur on success; none on
    /// any failure.
    ///
    /// The actor's role is recorded in the history entry for the audit
    /// trail. Role-based authorization is enforced by the surrounding
    /// application's access control, not here.
    pub fn execute(
        &self,
        service_id: ServiceId,
        action: LifecycleAction,
        actor: ActorRole,
        comment: Option<String>,
    ) -> Result<HistoryEntry, EngineError> {
        let current = self.store.read_state(service_id)?;
        debug!(%service_id, %current, %action, %actor, "transition requested");

        let to_state = next_state(current, action).map_err(|err| match err {
            LifecycleError::InvalidTransition { from, action } => {
                EngineError::IllegalTransition { from, action }
            }
        })?;

        let entry = HistoryEntry {
            id: HistoryId::new(),
            service_id,
            action,
            from_state: current,
            to_state,
            actor,
            comment,
            recorded_at: Timestamp::now(),
        };

        match self.store.write_transition(service_id, current, entry.clone()) {
            Ok(()) => {
                info!(%service_id, from = %current, to = %to_state, %action, "transition committed");
                Ok(entry)
            }
            Err(err) => {
                if matches!(err, StoreError::Conflict { .. }) {
                    warn!(%service_id, %action, "transition lost a write race");
                }
                Err(err.into())
            }
        }
    }

    /// The transition history of a service, newest first.
    ///
    /// The store returns insertion order (the authoritative tiebreak for
    /// colliding timestamps); the projection reverses it for display.
    /// Read-only and restartable — re-reading with no intervening
    /// `execute()` yields an identical sequence.
    pub fn history(&self, service_id: ServiceId) -> Result<Vec<HistoryEntry>, EngineError> {
        let mut entries = self.store.read_history(service_id)?;
        entries.reverse();
        Ok(entries)
    }
}
