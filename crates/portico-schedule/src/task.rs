//! # Tasks
//!
//! Generic to-dos linked to a service. Tasks sit outside the state
//! machine's legality rules entirely — they are surfaced alongside the
//! lifecycle view but never gate or trigger transitions.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use portico_core::{ServiceId, TaskId, Timestamp};

use crate::event::Priority;

/// A to-do item linked to a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier.
    pub id: TaskId,
    /// The service this task concerns.
    pub service_id: ServiceId,
    /// Short human-readable title.
    pub title: String,
    /// Urgency.
    pub priority: Priority,
    /// Optional due date.
    pub due_at: Option<Timestamp>,
    /// Completion progress, 0-100.
    pub progress_pct: u8,
    /// Whether the task is done.
    pub completed: bool,
}

impl Task {
    /// Create an open task with zero progress.
    pub fn new(service_id: ServiceId, title: impl Into<String>, priority: Priority) -> Self {
        Self {
            id: TaskId::new(),
            service_id,
            title: title.into(),
            priority,
            due_at: None,
            progress_pct: 0,
            completed: false,
        }
    }

    /// Set a due date.
    pub fn with_due_date(mut self, due_at: Timestamp) -> Self {
        self.due_at = Some(due_at);
        self
    }

    /// Whether the task is open and past due.
    pub fn is_overdue(&self, now: Timestamp) -> bool {
        !self.completed && self.due_at.is_some_and(|due| due < now)
    }
}

/// In-memory registry of tasks, keyed by service.
#[derive(Debug, Default)]
pub struct TaskBoard {
    tasks: HashMap<TaskId, Task>,
}

impl TaskBoard {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a task.
    pub fn add(&mut self, task: Task) -> TaskId {
        let id = task.id;
        self.tasks.insert(id, task);
        id
    }

    /// Fetch one task.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(&id)
    }

    /// All tasks for a service, highest priority first.
    pub fn tasks_for(&self, service_id: ServiceId) -> Vec<&Task> {
        let mut tasks: Vec<_> = self
            .tasks
            .values()
            .filter(|t| t.service_id == service_id)
            .collect();
        tasks.sort_by(|a, b| b.priority.cmp(&a.priority));
        tasks
    }

    /// Open tasks for a service, highest priority first.
    pub fn open_tasks(&self, service_id: ServiceId) -> Vec<&Task> {
        self.tasks_for(service_id)
            .into_iter()
            .filter(|t| !t.completed)
            .collect()
    }

    /// Open tasks across all services that are past due.
    pub fn overdue(&self, now: Timestamp) -> Vec<&Task> {
        let mut tasks: Vec<_> = self.tasks.values().filter(|t| t.is_overdue(now)).collect();
        tasks.sort_by(|a, b| b.priority.cmp(&a.priority));
        tasks
    }

    /// Update a task's progress, capped at 100. Reaching 100 marks the
    /// task completed. Returns `false` for unknown ids.
    pub fn set_progress(&mut self, id: TaskId, progress_pct: u8) -> bool {
        match self.tasks.get_mut(&id) {
            Some(task) => {
                task.progress_pct = progress_pct.min(100);
                task.completed = task.progress_pct == 100;
                true
            }
            None => false,
        }
    }
}
