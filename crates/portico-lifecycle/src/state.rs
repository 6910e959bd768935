//! # Lifecycle States
//!
//! The closed set of states a subscribed service moves through. Exactly one
//! state is initial ([`LifecycleState::Requested`]); `Rejected`, `Expired`,
//! and `Archived` are terminal — no rule in the transition table leaves them.

use serde::{Deserialize, Serialize};

/// The lifecycle state of one client's subscribed service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LifecycleState {
    /// Client has requested the service, awaiting agency review.
    Requested,
    /// Request approved, awaiting provisioning kickoff.
    Approved,
    /// Request rejected by the agency (terminal).
    Rejected,
    /// Agency needs more information from the client before deciding.
    PendingInfo,
    /// Service is being set up.
    Provisioning,
    /// Setup complete, awaiting go-live confirmation.
    Ready,
    /// Service is live and operational.
    Active,
    /// Service is live but an issue has been flagged.
    Warning,
    /// Service is undergoing scheduled maintenance.
    Maintenance,
    /// Service is approaching its expiration date.
    ExpiringSoon,
    /// Client has asked to renew, awaiting processing.
    PendingRenewal,
    /// Renewal is being processed (billing, contract update).
    Renewing,
    /// Service has been suspended (non-payment, policy, client request).
    Suspended,
    /// Cancellation requested, wind-down in progress.
    Cancelling,
    /// Service term ended without renewal (terminal).
    Expired,
    /// Service retired and archived (terminal).
    Archived,
}

impl LifecycleState {
    /// Every declared state, in table order.
    pub const ALL: [LifecycleState; 16] = [
        Self::Requested,
        Self::Approved,
        Self::Rejected,
        Self::PendingInfo,
        Self::Provisioning,
        Self::Ready,
        Self::Active,
        Self::Warning,
        Self::Maintenance,
        Self::ExpiringSoon,
        Self::PendingRenewal,
        Self::Renewing,
        Self::Suspended,
        Self::Cancelling,
        Self::Expired,
        Self::Archived,
    ];

    /// The state every new service starts in.
    pub const INITIAL: LifecycleState = Self::Requested;

    /// Whether this state is terminal (no outbound transitions).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Rejected | Self::Expired | Self::Archived)
    }

    /// Whether the service is currently delivering value to the client.
    ///
    /// Covers the live states a dashboard counts as "running", including
    /// degraded and renewal-window states.
    pub fn is_operational(&self) -> bool {
        matches!(
            self,
            Self::Active
                | Self::Warning
                | Self::Maintenance
                | Self::ExpiringSoon
                | Self::PendingRenewal
                | Self::Renewing
        )
    }

    /// The canonical name of this state (e.g., "PENDING_RENEWAL").
    pub fn name(&self) -> &'static str {
        match self {
            Self::Requested => "REQUESTED",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::PendingInfo => "PENDING_INFO",
            Self::Provisioning => "PROVISIONING",
            Self::Ready => "READY",
            Self::Active => "ACTIVE",
            Self::Warning => "WARNING",
            Self::Maintenance => "MAINTENANCE",
            Self::ExpiringSoon => "EXPIRING_SOON",
            Self::PendingRenewal => "PENDING_RENEWAL",
            Self::Renewing => "RENEWING",
            Self::Suspended => "SUSPENDED",
            Self::Cancelling => "CANCELLING",
            Self::Expired => "EXPIRED",
            Self::Archived => "ARCHIVED",
        }
    }
}

impl std::fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
