//! Static region reference table
//!
//! Chicago-side severity readings, keyed by ZIP code. The table is the only
//! data source for the scorer; unknown keys fall back to a neutral profile
//! instead of failing, so a stale key from a UI selector can never crash a
//! caller.

use lazy_static::lazy_static;

use crate::types::RegionIndicatorProfile;

lazy_static! {
    /// Reference profiles in insertion order. Indicators are 0-10 raw
    /// severity readings: child_a = school meal participation, child_b =
    /// pediatric ER visits, adult_a = food scarcity, adult_b = economic
    /// desperation.
    static ref REGION_TABLE: Vec<RegionIndicatorProfile> = vec![
        profile("60621", "Englewood", 9.6, 8.8, 9.5, 9.6),
        profile("60624", "West Garfield Park", 9.1, 8.5, 8.9, 9.3),
        profile("60636", "West Englewood", 8.9, 7.9, 8.7, 9.0),
        profile("60644", "Austin", 7.6, 7.2, 8.0, 8.2),
        profile("60612", "Near West Side", 6.2, 6.0, 5.4, 5.8),
        profile("60609", "Back of the Yards", 8.2, 7.5, 7.8, 8.4),
    ];
}

fn profile(
    key: &str,
    name: &str,
    child_a: f64,
    child_b: f64,
    adult_a: f64,
    adult_b: f64,
) -> RegionIndicatorProfile {
    RegionIndicatorProfile {
        key: key.to_string(),
        display_name: name.to_string(),
        child_indicator_a: child_a,
        child_indicator_b: child_b,
        adult_indicator_a: adult_a,
        adult_indicator_b: adult_b,
    }
}

/// Look up a region by key.
///
/// Unknown keys return the neutral "Unmapped Territory" fallback rather
/// than an error. This function never fails.
pub fn lookup_region(key: &str) -> RegionIndicatorProfile {
    REGION_TABLE
        .iter()
        .find(|p| p.key == key)
        .cloned()
        .unwrap_or_else(|| RegionIndicatorProfile::unmapped(key))
}

/// Display name for a region key, with the unmapped fallback
pub fn region_display_name(key: &str) -> String {
    lookup_region(key).display_name
}

/// All keys in the reference table, in stable insertion order
pub fn list_known_region_keys() -> Vec<String> {
    REGION_TABLE.iter().map(|p| p.key.clone()).collect()
}

// =============================================================================
// TESTS
// =============================================================================
