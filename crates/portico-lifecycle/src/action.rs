//! # Lifecycle Actions
//!
//! The closed set of actions that can be requested against a service. An
//! action is only meaningful in combination with a current state — the rule
//! table in [`crate::rules`] decides which pairs are legal.

use serde::{Deserialize, Serialize};

/// An action requested against a subscribed service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LifecycleAction {
    /// Approve a service request.
    Approve,
    /// Reject a service request.
    Reject,
    /// Ask the client for more information.
    RequestInfo,
    /// Client supplies the requested information.
    ProvideInfo,
    /// Begin setting up the service.
    StartProvision,
    /// Setup finished, service is ready for go-live.
    CompleteProvision,
    /// Put the service live.
    Activate,
    /// Take the service into scheduled maintenance.
    StartMaintenance,
    /// Bring the service back from maintenance.
    CompleteMaintenance,
    /// Flag an operational issue on a live service.
    FlagIssue,
    /// Mark a flagged issue as resolved.
    ResolveIssue,
    /// Mark the service as approaching expiration.
    NotifyExpiration,
    /// Client asks to renew the service.
    RequestRenewal,
    /// Begin processing the renewal.
    ProcessRenewal,
    /// Renewal complete, service continues.
    CompleteRenewal,
    /// Client asks to cancel the service.
    RequestCancellation,
    /// Finish the cancellation wind-down.
    ProcessCancellation,
    /// Suspend the service.
    Suspend,
    /// Bring a suspended service back to live.
    Reactivate,
    /// The service term has ended without renewal.
    Expire,
    /// Retire the service record.
    Archive,
}

impl LifecycleAction {
    /// Every declared action, in table order.
    pub const ALL: [LifecycleAction; 21] = [
        Self::Approve,
        Self::Reject,
        Self::RequestInfo,
        Self::ProvideInfo,
        Self::StartProvision,
        Self::CompleteProvision,
        Self::Activate,
        Self::StartMaintenance,
        Self::CompleteMaintenance,
        Self::FlagIssue,
        Self::ResolveIssue,
        Self::NotifyExpiration,
        Self::RequestRenewal,
        Self::ProcessRenewal,
        Self::CompleteRenewal,
        Self::RequestCancellation,
        Self::ProcessCancellation,
        Self::Suspend,
        Self::Reactivate,
        Self::Expire,
        Self::Archive,
    ];

    /// The canonical name of this action (e.g., "START_PROVISION").
    pub fn name(&self) -> &'static str {
        match self {
            Self::Approve => "APPROVE",
            Self::Reject => "REJECT",
            Self::RequestInfo => "REQUEST_INFO",
            Self::ProvideInfo => "PROVIDE_INFO",
            Self::StartProvision => "START_PROVISION",
            Self::CompleteProvision => "COMPLETE_PROVISION",
            Self::Activate => "ACTIVATE",
            Self::StartMaintenance => "START_MAINTENANCE",
            Self::CompleteMaintenance => "COMPLETE_MAINTENANCE",
            Self::FlagIssue => "FLAG_ISSUE",
            Self::ResolveIssue => "RESOLVE_ISSUE",
            Self::NotifyExpiration => "NOTIFY_EXPIRATION",
            Self::RequestRenewal => "REQUEST_RENEWAL",
            Self::ProcessRenewal => "PROCESS_RENEWAL",
            Self::CompleteRenewal => "COMPLETE_RENEWAL",
            Self::RequestCancellation => "REQUEST_CANCELLATION",
            Self::ProcessCancellation => "PROCESS_CANCELLATION",
            Self::Suspend => "SUSPEND",
            Self::Reactivate => "REACTIVATE",
            Self::Expire => "EXPIRE",
            Self::Archive => "ARCHIVE",
        }
    }
}

impl std::fmt::Display for LifecycleAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_contains_every_action_once() {
        for (i, a) in LifecycleAction::ALL.iter().enumerate() {
            for b in &LifecycleAction::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_serde_uses_canonical_names() {
        let json = serde_json::to_string(&LifecycleAction::RequestRenewal).unwrap();
        assert_eq!(json, "\"REQUEST_RENEWAL\"");
        let parsed: LifecycleAction = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, LifecycleAction::RequestRenewal);
    }

    #[test]
    fn test_display_matches_serde_name() {
        for action in LifecycleAction::ALL {
            let json = serde_json::to_string(&action).unwrap();
            assert_eq!(json, format!("\"{action}\""));
        }
    }
}
