//! # Transition Rule Table
//!
//! The immutable (from, action, to) rule set and the two pure functions
//! defined over it: [`valid_actions`] and [`next_state`].
//!
//! The table is fixed at compile time and single-valued — at most one target
//! state per (from, action) pair. Duplicate rules are a build-time defect,
//! caught by `test_table_is_single_valued` rather than discovered at runtime.
//! `const` data is freely shared across threads with no locking.

use thiserror::Error;

use crate::action::LifecycleAction;
use crate::state::LifecycleState;

/// One immutable transition rule: `from` + `action` produces `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionRule {
    /// State the service must be in for the rule to apply.
    pub from: LifecycleState,
    /// Action requested by the caller.
    pub action: LifecycleAction,
    /// State the service moves to.
    pub to: LifecycleState,
}

const fn rule(
    from: LifecycleState,
    action: LifecycleAction,
    to: LifecycleState,
) -> TransitionRule {
    TransitionRule { from, action, to }
}

use crate::action::LifecycleAction as A;
use crate::state::LifecycleState as S;

/// The complete rule set, grouped by source state.
///
/// Every non-terminal state has at least one outbound rule; the three
/// terminal states (`Rejected`, `Expired`, `Archived`) have none.
pub const RULES: &[TransitionRule] = &[
    // Intake
    rule(S::Requested, A::Approve, S::Approved),
    rule(S::Requested, A::Reject, S::Rejected),
    rule(S::Requested, A::RequestInfo, S::PendingInfo),
    rule(S::PendingInfo, A::ProvideInfo, S::Requested),
    rule(S::PendingInfo, A::Reject, S::Rejected),
    // Provisioning
    rule(S::Approved, A::StartProvision, S::Provisioning),
    rule(S::Provisioning, A::CompleteProvision, S::Ready),
    rule(S::Ready, A::Activate, S::Active),
    // Operation
    rule(S::Active, A::StartMaintenance, S::Maintenance),
    rule(S::Active, A::FlagIssue, S::Warning),
    rule(S::Active, A::NotifyExpiration, S::ExpiringSoon),
    rule(S::Active, A::Suspend, S::Suspended),
    rule(S::Active, A::RequestCancellation, S::Cancelling),
    rule(S::Active, A::Expire, S::Expired),
    rule(S::Maintenance, A::CompleteMaintenance, S::Active),
    rule(S::Warning, A::ResolveIssue, S::Active),
    rule(S::Warning, A::Suspend, S::Suspended),
    // Renewal
    rule(S::ExpiringSoon, A::RequestRenewal, S::PendingRenewal),
    rule(S::ExpiringSoon, A::RequestCancellation, S::Cancelling),
    rule(S::ExpiringSoon, A::Expire, S::Expired),
    rule(S::PendingRenewal, A::ProcessRenewal, S::Renewing),
    rule(S::PendingRenewal, A::Expire, S::Expired),
    rule(S::Renewing, A::CompleteRenewal, S::Active),
    // Suspension and retirement
    rule(S::Suspended, A::Reactivate, S::Active),
    rule(S::Suspended, A::RequestCancellation, S::Cancelling),
    rule(S::Suspended, A::Archive, S::Archived),
    rule(S::Cancelling, A::ProcessCancellation, S::Archived),
];

/// Errors from the pure state machine functions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LifecycleError {
    /// No rule maps this (state, action) pair — including any action
    /// attempted from a terminal state.
    #[error("invalid transition: action {action} is not legal from state {from}")]
    InvalidTransition {
        /// Current state.
        from: LifecycleState,
        /// The action that was attempted.
        action: LifecycleAction,
    },
}

/// Every action with a rule whose source is `state`, in table order.
///
/// Pure and total: terminal states yield an empty vector. UI layers must
/// build their action menus from this function — it is the single source
/// of truth for what a user may be offered.
pub fn valid_actions(state: LifecycleState) -> Vec<LifecycleAction> {
    RULES
        .iter()
        .filter(|r| r.from == state)
        .map(|r| r.action)
        .collect()
}

/// Look up the unique rule matching (state, action).
///
/// # Errors
///
/// Returns [`LifecycleError::InvalidTransition`] when no rule matches.
/// Never silently defaults to the current state.
pub fn next_state(
    state: LifecycleState,
    action: LifecycleAction,
) -> Result<LifecycleState, LifecycleError> {
    RULES
        .iter()
        .find(|r| r.from == state && r.action == action)
        .map(|r| r.to)
        .ok_or(LifecycleError::InvalidTransition {
            from: state,
            action,
        })
}
