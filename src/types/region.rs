//! Region reference-data profile

use serde::{Deserialize, Serialize};

use crate::NEUTRAL_INDICATOR;

/// Static severity readings for one region.
///
/// All four indicators are raw readings in [0,10]. Profiles are immutable
/// reference data: built once at startup, never mutated. The two child
/// indicators carry double weight in the composite score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionIndicatorProfile {
    /// Unique key (a ZIP code in the reference table)
    pub key: String,
    /// Human-readable community name
    pub display_name: String,
    /// Child indicator: school meal participation (0-10)
    pub child_indicator_a: f64,
    /// Child indicator: pediatric ER visits (0-10)
    pub child_indicator_b: f64,
    /// Adult indicator: food scarcity (0-10)
    pub adult_indicator_a: f64,
    /// Adult indicator: economic desperation (0-10)
    pub adult_indicator_b: f64,
}

/// Display name used for keys absent from the reference table
pub const UNMAPPED_NAME: &str = "Unmapped Territory";

impl RegionIndicatorProfile {
    /// Neutral fallback profile for an unknown key.
    ///
    /// Every indicator sits at the midpoint so an unmapped region scores
    /// exactly 50.0 rather than crashing a caller with a stale key.
    pub fn unmapped(key: &str) -> Self {
        Self {
            key: key.to_string(),
            display_name: UNMAPPED_NAME.to_string(),
            child_indicator_a: NEUTRAL_INDICATOR,
            child_indicator_b: NEUTRAL_INDICATOR,
            adult_indicator_a: NEUTRAL_INDICATOR,
            adult_indicator_b: NEUTRAL_INDICATOR,
        }
    }

    /// Is this the fallback profile?
    pub fn is_unmapped(&self) -> bool {
        self.display_name == UNMAPPED_NAME
    }
}
