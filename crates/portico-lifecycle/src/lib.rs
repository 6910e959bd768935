//! # portico-lifecycle — Service Lifecycle State Machine
//!
//! The state machine governing one client's subscribed service, from intake
//! through provisioning, operation, renewal, and retirement.
//!
//! ## States
//!
//! ```text
//! Requested ──▶ Approved ──▶ Provisioning ──▶ Ready ──▶ Active
//!    │  │                                                │
//!    │  └──▶ PendingInfo ──▶ Requested                   ├──▶ Maintenance ──▶ Active
//!    │                                                   ├──▶ Warning ──▶ Active
//!    └──▶ Rejected (terminal)                            ├──▶ ExpiringSoon ──▶ PendingRenewal ──▶ Renewing ──▶ Active
//!                                                        ├──▶ Suspended ──▶ Active (reactivation)
//!                                                        ├──▶ Cancelling ──▶ Archived (terminal)
//!                                                        └──▶ Expired (terminal)
//! ```
//!
//! ## Design Decision
//!
//! With 16 states and 21 actions, a typestate encoding (one zero-sized type
//! per state) would require 16 types and as many impl blocks — unwieldy
//! without proportional safety benefit, and useless anyway for state loaded
//! at runtime from a database. The machine is instead a `const` rule table
//! over two closed enums, with `next_state()` returning `Result`. What the
//! enums do buy at compile time is exhaustive matching: forgetting to handle
//! a state anywhere in the workspace is a compile error, not a latent
//! "unknown status" branch.
//!
//! The table is the single source of truth: UI layers must derive the
//! actions they offer from [`valid_actions`] rather than keeping their own
//! action lists, so the offered actions and the executable actions cannot
//! drift apart.

pub mod action;
pub mod rules;
pub mod state;

pub use action::LifecycleAction;
pub use rules::{next_state, valid_actions, LifecycleError, TransitionRule, RULES};
pub use state::LifecycleState;
