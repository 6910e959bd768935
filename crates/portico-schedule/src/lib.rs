//! # portico-schedule — Follow-Up Tracking and Renewal Policy
//!
//! Time-bound items that surface alongside a service's lifecycle state
//! without being part of the state machine itself:
//!
//! - **Scheduled events** (`event.rs`): dated follow-ups such as "renewal
//!   due", optionally suggesting a lifecycle action. Completing an event
//!   never triggers a transition — a caller that wants one makes a
//!   separate, explicit `execute()` call, keeping the state machine's side
//!   effects singular and auditable.
//!
//! - **Tasks** (`task.rs`): generic to-dos with priority, due date, and
//!   completion progress, independent of the transition rules.
//!
//! - **Renewal policy** (`renewal.rs`): billing-cycle date arithmetic
//!   (next billing date with month-end clamping), overdue/upcoming renewal
//!   buckets, and the nightly-job helper that files an expiration-notice
//!   event for services entering their notice window.

pub mod event;
pub mod renewal;
pub mod task;

pub use event::{EventTracker, Priority, ScheduleError, ScheduledEvent};
pub use renewal::{expiration_notice, next_billing_date, BillingCycle, RenewalBucket};
pub use task::{Task, TaskBoard};
