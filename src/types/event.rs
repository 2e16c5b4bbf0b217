//! Intervention event records fed to the auditor

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One logged intervention event awaiting audit.
///
/// Produced by an external event source; the auditor treats the list as
/// immutable and never validates field values (a negative `latency_days`
/// flows straight into the average - validation belongs to the producer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterventionEventRecord {
    /// Unique event identifier (duplicates permitted, not deduplicated)
    pub id: String,
    /// Claim-of-action independently confirmed
    pub receipt_verified: bool,
    /// Downstream benefit confirmed delivered
    pub redemption_verified: bool,
    /// Action pattern reused in another context
    pub replicated: bool,
    /// Days between initiating and confirming the event
    pub latency_days: f64,
    /// Region the event targeted, if recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_key: Option<String>,
    /// Event kind tag from the producer (e.g. FOOD_STABILIZATION)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// When the event was initiated, if recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl InterventionEventRecord {
    /// Verified means both the receipt and the redemption were confirmed
    pub fn is_verified(&self) -> bool {
        self.receipt_verified && self.redemption_verified
    }
}

/// Audit classification of a single event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    /// Both receipt and redemption confirmed
    Verified,
    /// At least one confirmation missing
    Failed,
}

impl EventStatus {
    /// Get ANSI color code for terminal display
    pub fn color_code(&self) -> &'static str {
        match self {
            EventStatus::Verified => "\x1b[32m", // Green
            EventStatus::Failed => "\x1b[31m",   // Red
        }
    }

    /// Reset ANSI color
    pub fn color_reset() -> &'static str {
        "\x1b[0m"
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EventStatus::Verified => "VERIFIED",
            EventStatus::Failed => "FAILED",
        };
        write!(f, "{}", name)
    }
}
