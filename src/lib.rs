//! Nexus-0: Reference implementation of the Stability Nexus scoring core
//!
//! Two pure components: the Harm Density Indexer (weighted composite score
//! over a static region table) and the Verification Auditor (aggregate
//! statistics over intervention event logs).

pub mod core;
pub mod types;

// =============================================================================
// INDICATOR WEIGHTS [C] - Hard constraints, 2:1 child priority
// =============================================================================

/// Weight applied to the two child indicators
pub const W_CHILD: f64 = 2.0;

/// Weight applied to the two adult indicators
pub const W_ADULT: f64 = 1.0;

/// Sum of all weights for normalization (2 child + 2 adult slots)
pub const WEIGHT_SUM: f64 = 2.0 * W_CHILD + 2.0 * W_ADULT;

/// Maximum raw reading for a single indicator
pub const INDICATOR_MAX: f64 = 10.0;

/// Fallback reading for every indicator of an unmapped region (neutral midpoint)
pub const NEUTRAL_INDICATOR: f64 = 5.0;

// =============================================================================
// THRESHOLDS [C]
// =============================================================================

/// Composite scores at or above this mark a region as a priority site
pub const HDI_THRESHOLD: f64 = 70.0;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
