//! # Renewal Policy
//!
//! The billing-cycle date arithmetic behind the renewal workflow: computing
//! the next billing date for a subscription, classifying services into
//! overdue/upcoming renewal buckets for the dashboard, and building the
//! expiration-notice event a nightly job files when an active service
//! enters its notice window.
//!
//! Everything here is pure date arithmetic — no store access, no engine
//! calls. The nightly job fetches active services, calls into this module,
//! and registers the resulting events with the tracker.

use serde::{Deserialize, Serialize};

use portico_core::{ServiceId, Timestamp};
use portico_lifecycle::LifecycleAction;

use crate::event::{Priority, ScheduledEvent};

/// How often a subscription bills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillingCycle {
    /// Every month.
    Monthly,
    /// Every three months.
    Quarterly,
    /// Every six months.
    SemiAnnual,
    /// Every twelve months.
    Annual,
}

impl BillingCycle {
    /// Length of one cycle in calendar months.
    pub fn months(&self) -> u32 {
        match self {
            Self::Monthly => 1,
            Self::Quarterly => 3,
            Self::SemiAnnual => 6,
            Self::Annual => 12,
        }
    }
}

impl std::fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Monthly => "MONTHLY",
            Self::Quarterly => "QUARTERLY",
            Self::SemiAnnual => "SEMI_ANNUAL",
            Self::Annual => "ANNUAL",
        };
        f.write_str(s)
    }
}

/// The earliest `anchor + k * cycle` (k >= 0) strictly after `now`.
///
/// The anchor is the subscription's first billing date; if it is still in
/// the future (a subscription scheduled to start later), the anchor itself
/// is the next billing date. Month-end dates clamp (a Jan 31 anchor bills
/// Feb 28/29 and then Mar 31 again, because each step is computed from the
/// anchor, not from the previous clamped date).
pub fn next_billing_date(anchor: Timestamp, cycle: BillingCycle, now: Timestamp) -> Timestamp {
    if anchor > now {
        return anchor;
    }
    let mut candidate = anchor;
    for k in 1u32.. {
        let next = anchor.add_months(k * cycle.months());
        // add_months saturates at the calendar's edge; stop advancing there.
        if next <= candidate {
            return next;
        }
        candidate = next;
        if candidate > now {
            break;
        }
    }
    candidate
}

/// Where a service sits relative to its expiration date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RenewalBucket {
    /// The expiration date has passed without a renewal.
    Overdue,
    /// Expiration falls inside the notice window.
    DueSoon,
    /// Expiration is comfortably in the future.
    Current,
}

impl RenewalBucket {
    /// Classify a service by its expiration date.
    ///
    /// `notice_days` is the width of the "due soon" window (the source
    /// system defaults to 30).
    pub fn classify(expires_at: Timestamp, now: Timestamp, notice_days: i64) -> Self {
        let days_left = now.days_until(expires_at);
        if expires_at < now {
            Self::Overdue
        } else if days_left <= notice_days {
            Self::DueSoon
        } else {
            Self::Current
        }
    }
}

/// Build the expiration-notice event for a service entering its notice
/// window.
///
/// Returns `None` while the service is still [`RenewalBucket::Current`] —
/// the nightly job calls this for every active service and only files the
/// events that come back. The event suggests `NOTIFY_EXPIRATION`; actually
/// executing that action against the engine is a separate, explicit step.
pub fn expiration_notice(
    service_id: ServiceId,
    expires_at: Timestamp,
    notice_days: i64,
    now: Timestamp,
) -> Option<ScheduledEvent> {
    match RenewalBucket::classify(expires_at, now, notice_days) {
        RenewalBucket::Current => None,
        RenewalBucket::DueSoon | RenewalBucket::Overdue => Some(
            ScheduledEvent::new(
                service_id,
                format!("Service expires {expires_at}"),
                Priority::High,
                expires_at,
            )
            .with_action(LifecycleAction::NotifyExpiration),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> Timestamp {
        Timestamp::parse(s).unwrap()
    }

    // ── next_billing_date ────────────────────────────────────────────

    #[test]
    fn test_next_monthly_billing_date() {
        let anchor = ts("2026-01-15T00:00:00Z");
        let now = ts("2026-03-20T00:00:00Z");
        assert_eq!(
            next_billing_date(anchor, BillingCycle::Monthly, now),
            ts("2026-04-15T00:00:00Z")
        );
    }

    #[test]
    fn test_future_anchor_is_the_next_billing_date() {
        // Subscription scheduled to start later: the first billing date is
        // the anchor itself, not anchor + cycle.
        let anchor = ts("2026-04-01T00:00:00Z");
        let now = ts("2026-03-01T00:00:00Z");
        assert_eq!(next_billing_date(anchor, BillingCycle::Monthly, now), anchor);
        assert_eq!(next_billing_date(anchor, BillingCycle::Annual, now), anchor);
    }

    #[test]
    fn test_next_billing_date_is_strictly_after_now() {
        let anchor = ts("2026-01-15T00:00:00Z");
        // Exactly on a billing instant: the next one is a full cycle later.
        let now = ts("2026-02-15T00:00:00Z");
        assert_eq!(
            next_billing_date(anchor, BillingCycle::Monthly, now),
            ts("2026-03-15T00:00:00Z")
        );
    }

    #[test]
    fn test_month_end_anchor_clamps_then_recovers() {
        let anchor = ts("2026-01-31T00:00:00Z");
        let feb = next_billing_date(anchor, BillingCycle::Monthly, ts("2026-02-01T00:00:00Z"));
        assert_eq!(feb, ts("2026-02-28T00:00:00Z"));
        // March is computed from the anchor, so the 31st comes back.
        let mar = next_billing_date(anchor, BillingCycle::Monthly, feb);
        assert_eq!(mar, ts("2026-03-31T00:00:00Z"));
    }

    #[test]
    fn test_quarterly_and_annual_cycles() {
        let anchor = ts("2026-01-10T00:00:00Z");
        let now = ts("2026-05-01T00:00:00Z");
        assert_eq!(
            next_billing_date(anchor, BillingCycle::Quarterly, now),
            ts("2026-07-10T00:00:00Z")
        );
        assert_eq!(
            next_billing_date(anchor, BillingCycle::Annual, now),
            ts("2027-01-10T00:00:00Z")
        );
    }

    #[test]
    fn test_cycle_months() {
        assert_eq!(BillingCycle::Monthly.months(), 1);
        assert_eq!(BillingCycle::Quarterly.months(), 3);
        assert_eq!(BillingCycle::SemiAnnual.months(), 6);
        assert_eq!(BillingCycle::Annual.months(), 12);
    }

    // ── RenewalBucket ────────────────────────────────────────────────

    #[test]
    fn test_classify_overdue() {
        let bucket = RenewalBucket::classify(
            ts("2026-03-01T00:00:00Z"),
            ts("2026-03-15T00:00:00Z"),
            30,
        );
        assert_eq!(bucket, RenewalBucket::Overdue);
    }

    #[test]
    fn test_classify_due_soon() {
        let bucket = RenewalBucket::classify(
            ts("2026-04-01T00:00:00Z"),
            ts("2026-03-15T00:00:00Z"),
            30,
        );
        assert_eq!(bucket, RenewalBucket::DueSoon);
    }

    #[test]
    fn test_classify_current() {
        let bucket = RenewalBucket::classify(
            ts("2026-06-01T00:00:00Z"),
            ts("2026-03-15T00:00:00Z"),
            30,
        );
        assert_eq!(bucket, RenewalBucket::Current);
    }

    #[test]
    fn test_classify_window_boundary_is_due_soon() {
        let bucket = RenewalBucket::classify(
            ts("2026-04-14T00:00:00Z"),
            ts("2026-03-15T00:00:00Z"),
            30,
        );
        assert_eq!(bucket, RenewalBucket::DueSoon);
    }

    // ── expiration_notice ────────────────────────────────────────────

    #[test]
    fn test_no_notice_outside_window() {
        assert!(expiration_notice(
            ServiceId::new(),
            ts("2026-06-01T00:00:00Z"),
            30,
            ts("2026-03-15T00:00:00Z"),
        )
        .is_none());
    }

    #[test]
    fn test_notice_inside_window() {
        let service = ServiceId::new();
        let event = expiration_notice(
            service,
            ts("2026-04-01T00:00:00Z"),
            30,
            ts("2026-03-15T00:00:00Z"),
        )
        .expect("service is inside the notice window");
        assert_eq!(event.service_id, service);
        assert_eq!(event.priority, Priority::High);
        assert_eq!(event.action, Some(LifecycleAction::NotifyExpiration));
        assert_eq!(event.due_at, ts("2026-04-01T00:00:00Z"));
        assert!(!event.completed);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&BillingCycle::SemiAnnual).unwrap(),
            "\"SEMI_ANNUAL\""
        );
        assert_eq!(
            serde_json::to_string(&RenewalBucket::DueSoon).unwrap(),
            "\"DUE_SOON\""
        );
    }
}
