//! hadrokin-stats: Aggregate statistics over enriched particle records.
//!
//! Groups records by species code or event id and computes descriptive
//! statistics, type-breakdown fractions, per-event momentum sums, and
//! pairwise Pearson correlations. All functions take whatever record
//! slice the caller passes, whole run or filtered subset alike.
//!

pub mod breakdown;
pub mod bundle;
pub mod correlation;
pub mod descriptive;
pub mod event;

pub use breakdown::{species_breakdown, SpeciesCount};
pub use bundle::{CorrelationEntry, SummaryBundle, SummaryConfig};
pub use correlation::pearson;
pub use descriptive::{summarize, FieldSummary};
pub use event::{event_sums, final_state_ratio, EventSums, FinalStateRatio};
