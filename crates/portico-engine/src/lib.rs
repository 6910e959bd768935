//! # portico-engine — Lifecycle Transition Executor
//!
//! Executes lifecycle transitions against durable state. The engine owns no
//! storage of its own: it reads current state through the [`StateStore`]
//! adapter, validates the requested action against the rule table from
//! `portico-lifecycle`, and asks the adapter to commit the new state and
//! the history entry in one atomic, compare-and-swap write.
//!
//! ## Guarantees
//!
//! - Exactly one state mutation and one history append per successful
//!   `execute()`; zero on any failure path.
//! - Per-service linearizability, delegated to the store's CAS: two racing
//!   `execute()` calls against the same starting state produce exactly one
//!   success — the loser sees [`EngineError::ConcurrentModification`].
//! - No retries. Conflict resolution (re-fetch, re-decide) is the caller's
//!   responsibility so lost updates are never masked.
//!
//! ## Crate Policy
//!
//! - The store is an injected dependency, never ambient state. Tests and
//!   local deployments use the bundled [`MemoryStore`]; production wires in
//!   an adapter over the hosted database.
//! - The engine emits `tracing` events; installing a subscriber is the
//!   embedding application's concern.

pub mod engine;
pub mod history;
pub mod memory;
pub mod store;

pub use engine::{EngineError, LifecycleEngine};
pub use history::{HistoryEntry, ServiceRecord};
pub use memory::MemoryStore;
pub use store::{StateStore, StoreError};
