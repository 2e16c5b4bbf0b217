//! Harm Density Indexer: weighted composite score over region indicators
//!
//! The two child indicators carry weight 2.0, the two adult indicators
//! weight 1.0, so a one-unit child change moves the score twice as far as
//! the same adult change. Normalized so all-10 readings score exactly 100
//! and all-0 readings score exactly 0.

use crate::core::regions::lookup_region;
use crate::types::{CompositeScoreResult, RegionIndicatorProfile};
use crate::{INDICATOR_MAX, WEIGHT_SUM, W_ADULT, W_CHILD};

/// Compute the composite score for a profile.
///
/// Assumes indicators in [0,10]. Out-of-range input is not clamped: every
/// production path goes through `lookup_region`, which only hands out
/// table entries or the neutral fallback.
pub fn compute_composite_score(profile: &RegionIndicatorProfile) -> CompositeScoreResult {
    let child_sum = (profile.child_indicator_a + profile.child_indicator_b) * W_CHILD;
    let adult_sum = (profile.adult_indicator_a + profile.adult_indicator_b) * W_ADULT;

    let score = (child_sum + adult_sum) / (INDICATOR_MAX * WEIGHT_SUM) * 100.0;

    CompositeScoreResult {
        key: profile.key.clone(),
        display_name: profile.display_name.clone(),
        score: round1(score),
        child_welfare_reading: profile.child_indicator_a,
        volatility_reading: profile.child_indicator_b,
        food_scarcity_reading: profile.adult_indicator_a,
        economic_desperation_reading: profile.adult_indicator_b,
    }
}

/// Score a region by key: lookup then compute. Never fails.
pub fn score_region(key: &str) -> CompositeScoreResult {
    compute_composite_score(&lookup_region(key))
}

/// Round to one decimal place
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// =============================================================================
// TESTS
// =============================================================================
