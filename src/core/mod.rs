//! Core modules for Nexus-0

pub mod auditor;
pub mod regions;
pub mod scorer;

pub use auditor::perform_audit;
pub use regions::{list_known_region_keys, lookup_region, region_display_name};
pub use scorer::{compute_composite_score, score_region};
