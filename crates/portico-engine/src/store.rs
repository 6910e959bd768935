//! # Persistence Adapter Contract
//!
//! The outbound boundary of the engine. A `StateStore` durably owns the
//! current state of every service record and its transition history; the
//! engine treats both as authoritative once written and never caches state
//! across calls.
//!
//! `write_transition` carries the state the engine read at the start of the
//! call. The store must reject the write when the stored state no longer
//! matches — that compare-and-swap is what makes per-service transitions
//! linearizable without any locking in the engine itself.

use thiserror::Error;

use portico_core::ServiceId;
use portico_lifecycle::LifecycleState;

use crate::history::HistoryEntry;

/// Errors a persistence adapter may report.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No service record exists under the given identifier.
    #[error("service {0} not found")]
    NotFound(ServiceId),

    /// The stored state no longer matches the expected state; someone else
    /// committed a transition first.
    #[error("conflict on service {service_id}: expected state {expected}, found {actual}")]
    Conflict {
        /// The service that was contended.
        service_id: ServiceId,
        /// The state the caller read before attempting the write.
        expected: LifecycleState,
        /// The state actually stored at write time.
        actual: LifecycleState,
    },

    /// The backing store could not be reached or failed mid-call.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Durable storage for service state and transition history.
///
/// Implementations must make `write_transition` atomic across the state
/// field and the history append: either both take effect or neither does.
/// The bundled [`crate::MemoryStore`] satisfies the contract in memory;
/// production adapters wrap the hosted database.
pub trait StateStore {
    /// Read the current lifecycle state of a service.
    fn read_state(&self, service_id: ServiceId) -> Result<LifecycleState, StoreError>;

    /// Atomically set the service's state to `entry.to_state` and append
    /// `entry` to its history, if and only if the stored state still equals
    /// `expected`.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotFound`] — the service record does not exist.
    /// - [`StoreError::Conflict`] — the stored state differs from `expected`.
    /// - [`StoreError::Unavailable`] — the backing store failed; the caller
    ///   must treat the outcome as unknown and re-read before retrying.
    fn write_transition(
        &self,
        service_id: ServiceId,
        expected: LifecycleState,
        entry: HistoryEntry,
    ) -> Result<(), StoreError>;

    /// Read the full transition history of a service in insertion order
    /// (oldest first).
    fn read_history(&self, service_id: ServiceId) -> Result<Vec<HistoryEntry>, StoreError>;
}
