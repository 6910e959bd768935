//! End-to-end tests for the transition executor against the in-memory
//! adapter: full lifecycle walks, failure-path purity, and behavior under
//! write contention.

use std::sync::{Arc, Barrier};
use std::thread;

use portico_core::{ActorRole, ServiceId};
use portico_engine::{
    EngineError, HistoryEntry, LifecycleEngine, MemoryStore, ServiceRecord, StateStore, StoreError,
};
use portico_lifecycle::{LifecycleAction, LifecycleState};

fn seeded_engine() -> (LifecycleEngine<MemoryStore>, ServiceId) {
    let store = MemoryStore::new();
    let record = ServiceRecord::new(ServiceId::new());
    let id = record.id;
    store.insert(record);
    (LifecycleEngine::new(store), id)
}

/// Drive a service from REQUESTED to ACTIVE.
fn activate(engine: &LifecycleEngine<MemoryStore>, id: ServiceId) {
    for action in [
        LifecycleAction::Approve,
        LifecycleAction::StartProvision,
        LifecycleAction::CompleteProvision,
        LifecycleAction::Activate,
    ] {
        engine.execute(id, action, ActorRole::Staff, None).unwrap();
    }
}

// ── Core scenarios ───────────────────────────────────────────────────

#[test]
fn approve_from_requested_writes_one_entry() {
    let (engine, id) = seeded_engine();
    let entry = engine
        .execute(id, LifecycleAction::Approve, ActorRole::Staff, None)
        .unwrap();
    assert_eq!(entry.to_state, LifecycleState::Approved);

    let history = engine.history(id).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].action, LifecycleAction::Approve);
    assert_eq!(engine.store().read_state(id).unwrap(), LifecycleState::Approved);
}

#[test]
fn start_provision_from_active_is_illegal_and_pure() {
    let (engine, id) = seeded_engine();
    activate(&engine, id);
    let before = engine.history(id).unwrap();

    let err = engine
        .execute(id, LifecycleAction::StartProvision, ActorRole::Staff, None)
        .unwrap_err();
    assert!(matches!(
        err,
        EngineError::IllegalTransition {
            from: LifecycleState::Active,
            action: LifecycleAction::StartProvision,
        }
    ));
    assert_eq!(engine.store().read_state(id).unwrap(), LifecycleState::Active);
    assert_eq!(engine.history(id).unwrap(), before);
}

#[test]
fn reactivate_from_suspended_returns_to_active() {
    let (engine, id) = seeded_engine();
    activate(&engine, id);
    engine
        .execute(id, LifecycleAction::Suspend, ActorRole::Staff, None)
        .unwrap();
    let before_len = engine.history(id).unwrap().len();

    engine
        .execute(id, LifecycleAction::Reactivate, ActorRole::Admin, None)
        .unwrap();
    assert_eq!(engine.store().read_state(id).unwrap(), LifecycleState::Active);
    assert_eq!(engine.history(id).unwrap().len(), before_len + 1);
}

#[test]
fn unknown_service_fails_not_found() {
    let engine = LifecycleEngine::new(MemoryStore::new());
    let err = engine
        .execute(ServiceId::new(), LifecycleAction::Approve, ActorRole::Staff, None)
        .unwrap_err();
    assert!(matches!(err, EngineError::NotFound(_)));
}

// ── Full lifecycle walk ──────────────────────────────────────────────

#[test]
fn full_lifecycle_through_renewal_and_archive() {
    let (engine, id) = seeded_engine();
    let path = [
        LifecycleAction::RequestInfo,
        LifecycleAction::ProvideInfo,
        LifecycleAction::Approve,
        LifecycleAction::StartProvision,
        LifecycleAction::CompleteProvision,
        LifecycleAction::Activate,
        LifecycleAction::FlagIssue,
        LifecycleAction::ResolveIssue,
        LifecycleAction::NotifyExpiration,
        LifecycleAction::RequestRenewal,
        LifecycleAction::ProcessRenewal,
        LifecycleAction::CompleteRenewal,
        LifecycleAction::Suspend,
        LifecycleAction::Archive,
    ];
    for action in path {
        engine.execute(id, action, ActorRole::Staff, None).unwrap();
    }

    assert_eq!(engine.store().read_state(id).unwrap(), LifecycleState::Archived);
    assert!(engine.available_actions(id).unwrap().is_empty());

    // History chains: each entry starts where the previous one ended.
    let history = engine.history(id).unwrap();
    assert_eq!(history.len(), path.len());
    for pair in history.windows(2) {
        assert_eq!(pair[1].to_state, pair[0].from_state);
    }
    assert_eq!(history.last().unwrap().from_state, LifecycleState::Requested);
}

#[test]
fn every_successful_execute_grows_history_by_one() {
    let (engine, id) = seeded_engine();
    for action in [
        LifecycleAction::Approve,
        LifecycleAction::StartProvision,
        LifecycleAction::CompleteProvision,
    ] {
        let before = engine.history(id).unwrap().len();
        let entry = engine.execute(id, action, ActorRole::Staff, None).unwrap();
        let history = engine.history(id).unwrap();
        assert_eq!(history.len(), before + 1);
        assert_eq!(history[0], entry);
        assert_eq!(history[0].to_state, engine.store().read_state(id).unwrap());
    }
}

// ── Failure-path purity with a failing adapter ───────────────────────

/// Adapter whose writes always fail after the read succeeded, simulating a
/// backend that went away mid-call.
struct WriteFailStore {
    inner: MemoryStore,
}

impl StateStore for WriteFailStore {
    fn read_state(&self, service_id: ServiceId) -> Result<LifecycleState, StoreError> {
        self.inner.read_state(service_id)
    }

    fn write_transition(
        &self,
        _service_id: ServiceId,
        _expected: LifecycleState,
        _entry: HistoryEntry,
    ) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("backend offline".to_string()))
    }

    fn read_history(&self, service_id: ServiceId) -> Result<Vec<HistoryEntry>, StoreError> {
        self.inner.read_history(service_id)
    }
}

#[test]
fn persistence_failure_propagates_and_leaves_no_trace() {
    let inner = MemoryStore::new();
    let record = ServiceRecord::new(ServiceId::new());
    let id = record.id;
    inner.insert(record);
    let engine = LifecycleEngine::new(WriteFailStore { inner });

    let err = engine
        .execute(id, LifecycleAction::Approve, ActorRole::Staff, None)
        .unwrap_err();
    assert!(matches!(err, EngineError::PersistenceUnavailable(_)));
    assert_eq!(
        engine.store().read_state(id).unwrap(),
        LifecycleState::Requested
    );
    assert!(engine.history(id).unwrap().is_empty());
}

// ── Contention ───────────────────────────────────────────────────────

#[test]
fn racing_executes_produce_one_winner() {
    let store = MemoryStore::new();
    let record = ServiceRecord::new(ServiceId::new());
    let id = record.id;
    store.insert(record);
    let engine = Arc::new(LifecycleEngine::new(store));

    let barrier = Arc::new(Barrier::new(2));
    let handles: Vec<_> = (0..2)
        .map(|_| {
            let engine = Arc::clone(&engine);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                engine.execute(id, LifecycleAction::Approve, ActorRole::Staff, None)
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let successes = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1);
    for result in &results {
        if let Err(err) = result {
            // The loser either lost at write time (CAS conflict) or read the
            // winner's committed state first and failed validation. Both are
            // serialized orderings with exactly one logical first.
            assert!(matches!(
                err,
                EngineError::ConcurrentModification { .. }
                    | EngineError::IllegalTransition {
                        from: LifecycleState::Approved,
                        ..
                    }
            ));
        }
    }

    // Exactly one transition committed.
    assert_eq!(engine.store().read_state(id).unwrap(), LifecycleState::Approved);
    assert_eq!(engine.history(id).unwrap().len(), 1);
}

#[test]
fn conflict_error_carries_both_states() {
    let store = MemoryStore::new();
    let record = ServiceRecord::new(ServiceId::new());
    let id = record.id;
    store.insert(record);

    // Commit a transition behind the engine's back, then try a stale write.
    let engine = LifecycleEngine::new(store);
    engine
        .execute(id, LifecycleAction::Approve, ActorRole::Staff, None)
        .unwrap();

    let entry = HistoryEntry {
        id: portico_core::HistoryId::new(),
        service_id: id,
        action: LifecycleAction::Reject,
        from_state: LifecycleState::Requested,
        to_state: LifecycleState::Rejected,
        actor: ActorRole::Staff,
        comment: None,
        recorded_at: portico_core::Timestamp::now(),
    };
    let err = engine
        .store()
        .write_transition(id, LifecycleState::Requested, entry)
        .unwrap_err();
    match err {
        StoreError::Conflict {
            expected, actual, ..
        } => {
            assert_eq!(expected, LifecycleState::Requested);
            assert_eq!(actual, LifecycleState::Approved);
        }
        other => panic!("expected conflict, got {other:?}"),
    }
}
