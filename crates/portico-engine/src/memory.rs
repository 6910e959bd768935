//! # In-Memory Store
//!
//! A [`StateStore`] backed by a mutex-guarded map. Used by the test suites
//! and by local single-process deployments; it implements the same
//! compare-and-swap contract a production adapter must provide, so engine
//! behavior under contention can be exercised without a database.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use portico_core::ServiceId;
use portico_lifecycle::LifecycleState;

use crate::history::{HistoryEntry, ServiceRecord};
use crate::store::{StateStore, StoreError};

struct Slot {
    record: ServiceRecord,
    history: Vec<HistoryEntry>,
}

/// In-memory persistence adapter with optimistic concurrency.
#[derive(Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<ServiceId, Slot>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a service record. Creating records is the subscription
    /// workflow's job, not the engine's, so this lives on the store type
    /// rather than behind the [`StateStore`] trait.
    ///
    /// Returns `false` and leaves the store untouched when a record with
    /// the same id already exists — replacing it would discard that
    /// service's accumulated history.
    pub fn insert(&self, record: ServiceRecord) -> bool {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        match slots.entry(record.id) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(Slot {
                    record,
                    history: Vec::new(),
                });
                true
            }
        }
    }

    /// Fetch a copy of a service record.
    pub fn record(&self, service_id: ServiceId) -> Result<ServiceRecord, StoreError> {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots
            .get(&service_id)
            .map(|slot| slot.record.clone())
            .ok_or(StoreError::NotFound(service_id))
    }
}

impl StateStore for MemoryStore {
    fn read_state(&self, service_id: ServiceId) -> Result<LifecycleState, StoreError> {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots
            .get(&service_id)
            .map(|slot| slot.record.state)
            .ok_or(StoreError::NotFound(service_id))
    }

    fn write_transition(
        &self,
        service_id: ServiceId,
        expected: LifecycleState,
        entry: HistoryEntry,
    ) -> Result<(), StoreError> {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        let slot = slots
            .get_mut(&service_id)
            .ok_or(StoreError::NotFound(service_id))?;

        if slot.record.state != expected {
            return Err(StoreError::Conflict {
                service_id,
                expected,
                actual: slot.record.state,
            });
        }

        slot.record.state = entry.to_state;
        slot.record.updated_at = entry.recorded_at;
        slot.history.push(entry);
        Ok(())
    }

    fn read_history(&self, service_id: ServiceId) -> Result<Vec<HistoryEntry>, StoreError> {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots
            .get(&service_id)
            .map(|slot| slot.history.clone())
            .ok_or(StoreError::NotFound(service_id))
    }
}
