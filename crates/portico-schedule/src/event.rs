//! # Scheduled Events
//!
//! Dated follow-up items tied to a service. Events are created by policy
//! outside the lifecycle engine (typically the nightly renewal job) and
//! completed by users; the tracker never calls the engine.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use portico_core::{EventId, ServiceId, Timestamp};
use portico_lifecycle::LifecycleAction;

/// Urgency of an event or task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    /// Can wait.
    Low,
    /// Normal queue position.
    Medium,
    /// Should be handled this week.
    High,
    /// Drop everything.
    Urgent,
}

/// Errors from the event tracker.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScheduleError {
    /// No event exists under the given identifier.
    #[error("event {0} not found")]
    EventNotFound(EventId),

    /// The event was already marked complete.
    #[error("event {0} is already completed")]
    AlreadyCompleted(EventId),
}

/// A time-bound follow-up tied to a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledEvent {
    /// Unique event identifier.
    pub id: EventId,
    /// The service this event concerns.
    pub service_id: ServiceId,
    /// Short human-readable title (e.g., "Renewal due").
    pub title: String,
    /// The lifecycle action this event suggests, if any. Informational
    /// only — completing the event does not execute it.
    pub action: Option<LifecycleAction>,
    /// Urgency.
    pub priority: Priority,
    /// Who should handle it, if assigned.
    pub assignee: Option<String>,
    /// When the event falls due.
    pub due_at: Timestamp,
    /// Whether the event has been handled.
    pub completed: bool,
    /// When it was handled.
    pub completed_at: Option<Timestamp>,
}

impl ScheduledEvent {
    /// Create an open event.
    pub fn new(
        service_id: ServiceId,
        title: impl Into<String>,
        priority: Priority,
        due_at: Timestamp,
    ) -> Self {
        Self {
            id: EventId::new(),
            service_id,
            title: title.into(),
            action: None,
            priority,
            assignee: None,
            due_at,
            completed: false,
            completed_at: None,
        }
    }

    /// Attach a suggested lifecycle action.
    pub fn with_action(mut self, action: LifecycleAction) -> Self {
        self.action = Some(action);
        self
    }

    /// Assign the event to someone.
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// Whether the event is open and past due.
    pub fn is_overdue(&self, now: Timestamp) -> bool {
        !self.completed && self.due_at < now
    }
}

/// In-memory registry of scheduled events, keyed by service.
#[derive(Debug, Default)]
pub struct EventTracker {
    events: HashMap<EventId, ScheduledEvent>,
}

impl EventTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an event.
    pub fn add(&mut self, event: ScheduledEvent) -> EventId {
        let id = event.id;
        self.events.insert(id, event);
        id
    }

    /// Fetch one event.
    pub fn get(&self, id: EventId) -> Option<&ScheduledEvent> {
        self.events.get(&id)
    }

    /// All events for a service, soonest due first.
    pub fn events_for(&self, service_id: ServiceId) -> Vec<&ScheduledEvent> {
        let mut events: Vec<_> = self
            .events
            .values()
            .filter(|e| e.service_id == service_id)
            .collect();
        events.sort_by_key(|e| e.due_at);
        events
    }

    /// Open (uncompleted) events for a service, soonest due first.
    pub fn open_events(&self, service_id: ServiceId) -> Vec<&ScheduledEvent> {
        self.events_for(service_id)
            .into_iter()
            .filter(|e| !e.completed)
            .collect()
    }

    /// Open events across all services that are past due, most urgent first
    /// then soonest due.
    pub fn overdue(&self, now: Timestamp) -> Vec<&ScheduledEvent> {
        let mut events: Vec<_> = self
            .events
            .values()
            .filter(|e| e.is_overdue(now))
            .collect();
        events.sort_by(|a, b| b.priority.cmp(&a.priority).then(a.due_at.cmp(&b.due_at)));
        events
    }

    /// Open events falling due within the next `window_days` days,
    /// soonest due first. Excludes already-overdue events.
    pub fn upcoming(&self, now: Timestamp, window_days: i64) -> Vec<&ScheduledEvent> {
        let horizon = now.add_days(window_days);
        let mut events: Vec<_> = self
            .events
            .values()
            .filter(|e| !e.completed && e.due_at >= now && e.due_at <= horizon)
            .collect();
        events.sort_by_key(|e| e.due_at);
        events
    }

    /// Mark an event complete.
    ///
    /// Completing an event that suggests an action does **not** execute the
    /// action — the caller orchestrates that as a separate engine call.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::EventNotFound`] for unknown ids,
    /// [`ScheduleError::AlreadyCompleted`] when completed twice.
    pub fn complete(&mut self, id: EventId, now: Timestamp) -> Result<(), ScheduleError> {
        let event = self
            .events
            .get_mut(&id)
            .ok_or(ScheduleError::EventNotFound(id))?;
        if event.completed {
            return Err(ScheduleError::AlreadyCompleted(id));
        }
        event.completed = true;
        event.completed_at = Some(now);
        Ok(())
    }
}
