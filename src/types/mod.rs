//! Core types for Nexus-0

mod audit;
mod event;
mod region;
mod score;

pub use audit::{AuditSummary, EventStatusLine};
pub use event::{EventStatus, InterventionEventRecord};
pub use region::{RegionIndicatorProfile, UNMAPPED_NAME};
pub use score::CompositeScoreResult;
