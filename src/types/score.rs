//! Composite score output

use serde::{Deserialize, Serialize};

use crate::HDI_THRESHOLD;

/// Normalized composite score for one region, plus the raw readings that
/// produced it.
///
/// Created fresh on every scorer call; never cached, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeScoreResult {
    /// Region key (copied through)
    pub key: String,
    /// Region name (copied through)
    pub display_name: String,
    /// Weighted composite in [0,100], one decimal
    pub score: f64,
    /// Raw child welfare reading (school meal participation)
    pub child_welfare_reading: f64,
    /// Raw health volatility reading (pediatric ER visits)
    pub volatility_reading: f64,
    /// Raw food scarcity reading
    pub food_scarcity_reading: f64,
    /// Raw economic desperation reading
    pub economic_desperation_reading: f64,
}

impl CompositeScoreResult {
    /// Does this score mark the region as a priority site?
    pub fn breaches_threshold(&self) -> bool {
        self.score >= HDI_THRESHOLD
    }

    /// ANSI color for terminal display (red at or above threshold)
    pub fn color_code(&self) -> &'static str {
        if self.breaches_threshold() {
            "\x1b[31m"
        } else {
            "\x1b[32m"
        }
    }

    /// Reset ANSI color
    pub fn color_reset() -> &'static str {
        "\x1b[0m"
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let flag = if self.breaches_threshold() {
            " | PRIORITY"
        } else {
            ""
        };
        format!(
            "{}{} ({}) HDI={:.1}{}{}",
            self.color_code(),
            self.display_name,
            self.key,
            self.score,
            flag,
            Self::color_reset()
        )
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "key={} | name={} | score={:.1} | priority={}",
            self.key,
            self.display_name,
            self.score,
            self.breaches_threshold()
        )
    }
}
