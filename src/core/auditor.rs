//! Verification Auditor: reduces intervention event logs to health stats
//!
//! A pure reducer with zero validation branching. An event is VERIFIED only
//! when both the receipt and the redemption were independently confirmed.
//! The empty batch is a defined case (all zeros), never NaN or an error.

use crate::types::{AuditSummary, EventStatus, EventStatusLine, InterventionEventRecord};

/// Audit a batch of intervention events.
///
/// Order of the input does not affect the aggregate fields; the per-event
/// detail list preserves input order 1:1 with no filtering. Duplicates by
/// id pass through unchanged.
pub fn perform_audit(events: &[InterventionEventRecord]) -> AuditSummary {
    if events.is_empty() {
        return AuditSummary::empty();
    }

    let total = events.len();
    let verified = events.iter().filter(|e| e.is_verified()).count();
    let replicated = events.iter().filter(|e| e.replicated).count();
    let latency_sum: f64 = events.iter().map(|e| e.latency_days).sum();

    let per_event_status = events
        .iter()
        .map(|e| EventStatusLine {
            id: e.id.clone(),
            status: if e.is_verified() {
                EventStatus::Verified
            } else {
                EventStatus::Failed
            },
            latency_days: e.latency_days,
            replicated: e.replicated,
        })
        .collect();

    AuditSummary {
        total_events: total,
        verified_count: verified,
        confidence_score_pct: round1(verified as f64 / total as f64 * 100.0),
        replication_rate_pct: round1(replicated as f64 / total as f64 * 100.0),
        average_latency_days: round2(latency_sum / total as f64),
        per_event_status,
    }
}

/// Round to one decimal place
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to two decimal places
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: &str, receipt: bool, redemption: bool, replicated: bool, latency: f64) -> InterventionEventRecord {
        InterventionEventRecord {
            id: id.to_string(),
            receipt_verified: receipt,
            redemption_verified: redemption,
            replicated,
            latency_days: latency,
            region_key: None,
            kind: None,
            timestamp: None,
        }
    }

    #[test]
    fn test_empty_batch_is_all_zeros() {
        let summary = perform_audit(&[]);
        assert_eq!(summary.total_events, 0);
        assert_eq!(summary.verified_count, 0);
        assert_eq!(summary.confidence_score_pct, 0.0);
        assert_eq!(summary.replication_rate_pct, 0.0);
        assert_eq!(summary.average_latency_days, 0.0);
        assert!(summary.per_event_status.is_empty());
    }

    #[test]
    fn test_two_event_reference_case() {
        let events = vec![
            event("TX-1", true, true, false, 2.0),
            event("TX-2", true, false, true, 4.0),
        ];
        let summary = perform_audit(&events);

        assert_eq!(summary.total_events, 2);
        assert_eq!(summary.verified_count, 1);
        assert_eq!(summary.confidence_score_pct, 50.0);
        assert_eq!(summary.replication_rate_pct, 50.0);
        assert_eq!(summary.average_latency_days, 3.0);
        assert_eq!(summary.per_event_status[0].status, EventStatus::Verified);
        assert_eq!(summary.per_event_status[1].status, EventStatus::Failed);
    }

    #[test]
    fn test_receipt_alone_is_not_verified() {
        let summary = perform_audit(&[event("TX-1", true, false, false, 1.0)]);
        assert_eq!(summary.verified_count, 0);
        assert_eq!(summary.per_event_status[0].status, EventStatus::Failed);
    }

    #[test]
    fn test_redemption_alone_is_not_verified() {
        let summary = perform_audit(&[event("TX-1", false, true, false, 1.0)]);
        assert_eq!(summary.verified_count, 0);
    }

    #[test]
    fn test_detail_list_preserves_order_and_length() {
        let events = vec![
            event("c", false, false, false, 1.0),
            event("a", true, true, true, 2.0),
            event("b", true, true, false, 3.0),
        ];
        let summary = perform_audit(&events);
        let ids: Vec<&str> = summary.per_event_status.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_aggregates_are_order_independent() {
        let forward = vec![
            event("1", true, true, true, 0.5),
            event("2", false, true, false, 1.5),
            event("3", true, false, true, 2.5),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();

        let a = perform_audit(&forward);
        let b = perform_audit(&reversed);
        assert_eq!(a.confidence_score_pct, b.confidence_score_pct);
        assert_eq!(a.replication_rate_pct, b.replication_rate_pct);
        assert_eq!(a.average_latency_days, b.average_latency_days);
    }

    #[test]
    fn test_duplicate_ids_are_not_deduplicated() {
        let events = vec![
            event("TX-1", true, true, false, 1.0),
            event("TX-1", true, true, false, 1.0),
        ];
        let summary = perform_audit(&events);
        assert_eq!(summary.total_events, 2);
        assert_eq!(summary.verified_count, 2);
        assert_eq!(summary.per_event_status.len(), 2);
    }

    #[test]
    fn test_percentages_rounded_to_one_decimal() {
        // 1 of 3 verified = 33.333... -> 33.3
        let events = vec![
            event("1", true, true, false, 1.0),
            event("2", false, false, false, 1.0),
            event("3", true, false, false, 1.0),
        ];
        let summary = perform_audit(&events);
        assert_eq!(summary.confidence_score_pct, 33.3);
    }

    #[test]
    fn test_latency_rounded_to_two_decimals() {
        // mean of 1.0 and 2.005 = 1.5025 -> 1.5
        let events = vec![
            event("1", true, true, false, 1.0),
            event("2", true, true, false, 2.005),
        ];
        let summary = perform_audit(&events);
        assert_eq!(summary.average_latency_days, 1.5);
    }

    #[test]
    fn test_negative_latency_flows_through_unvalidated() {
        let events = vec![
            event("1", true, true, false, -2.0),
            event("2", true, true, false, 4.0),
        ];
        let summary = perform_audit(&events);
        assert_eq!(summary.average_latency_days, 1.0);
    }

    #[test]
    fn test_idempotent() {
        let events = vec![event("TX-1", true, false, true, 3.25)];
        assert_eq!(perform_audit(&events), perform_audit(&events));
    }
}
