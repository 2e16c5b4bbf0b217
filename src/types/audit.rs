//! Audit summary output

use serde::{Deserialize, Serialize};

use crate::types::EventStatus;

/// Per-event line in the audit detail list (1:1 with input, input order)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventStatusLine {
    /// Event identifier (copied through)
    pub id: String,
    /// VERIFIED or FAILED
    pub status: EventStatus,
    /// Latency copied through for display
    pub latency_days: f64,
    /// Replication flag copied through for display
    pub replicated: bool,
}

/// Aggregate verification health for a batch of intervention events.
///
/// Every field is defined for the empty batch (all zeros, empty detail
/// list) so callers can render a summary before any events exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditSummary {
    /// Number of input records
    pub total_events: usize,
    /// Records with both receipt and redemption confirmed
    pub verified_count: usize,
    /// verified_count / total_events as a percentage, one decimal
    pub confidence_score_pct: f64,
    /// Replicated records / total_events as a percentage, one decimal
    pub replication_rate_pct: f64,
    /// Mean latency across all records in days, two decimals
    pub average_latency_days: f64,
    /// One line per input record, same order as input
    pub per_event_status: Vec<EventStatusLine>,
}

impl AuditSummary {
    /// Summary for an empty event list
    pub fn empty() -> Self {
        Self {
            total_events: 0,
            verified_count: 0,
            confidence_score_pct: 0.0,
            replication_rate_pct: 0.0,
            average_latency_days: 0.0,
            per_event_status: Vec::new(),
        }
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        // Confidence drives the headline color
        let color = if self.confidence_score_pct >= 90.0 {
            "\x1b[32m"
        } else if self.confidence_score_pct >= 50.0 {
            "\x1b[33m"
        } else {
            "\x1b[31m"
        };
        format!(
            "{}events={} | verified={} | confidence={:.1}% | replication={:.1}% | avg_latency={:.2}d\x1b[0m",
            color,
            self.total_events,
            self.verified_count,
            self.confidence_score_pct,
            self.replication_rate_pct,
            self.average_latency_days
        )
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "events={} | verified={} | confidence={:.1} | replication={:.1} | avg_latency={:.2}",
            self.total_events,
            self.verified_count,
            self.confidence_score_pct,
            self.replication_rate_pct,
            self.average_latency_days
        )
    }
}
