//! The statistics bundle handed to reporting and plotting consumers.

use crate::breakdown::{species_breakdown, SpeciesCount};
use crate::correlation::pearson;
use crate::descriptive::{summarize, FieldSummary};
use crate::event::{event_sums, final_state_ratio, EventSums, FinalStateRatio};
use hadrokin_core::{Field, ParticleRecord};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for bundle computation.
///
/// Fields and correlation pairs are caller-supplied; nothing is
/// hard-coded in the aggregation itself.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SummaryConfig {
    /// Fields to summarize.
    pub fields: Vec<Field>,
    /// Field pairs for the correlation table.
    pub pairs: Vec<(Field, Field)>,
    /// Whether to compute per-event energy/momentum sums.
    pub per_event: bool,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            fields: Field::ALL.to_vec(),
            pairs: vec![
                (Field::Energy, Field::Mass),
                (Field::Energy, Field::PMag),
                (Field::Mass, Field::PMag),
                (Field::Energy, Field::Pt),
            ],
            per_event: false,
        }
    }
}

impl SummaryConfig {
    /// Creates a configuration with the default fields and pairs.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fields to summarize.
    #[must_use]
    pub fn with_fields(mut self, fields: Vec<Field>) -> Self {
        self.fields = fields;
        self
    }

    /// Sets the correlation pairs.
    #[must_use]
    pub fn with_pairs(mut self, pairs: Vec<(Field, Field)>) -> Self {
        self.pairs = pairs;
        self
    }

    /// Enables per-event aggregation.
    #[must_use]
    pub fn with_per_event(mut self, per_event: bool) -> Self {
        self.per_event = per_event;
        self
    }
}

/// One entry of the correlation table.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CorrelationEntry {
    /// First field of the pair.
    pub a: Field,
    /// Second field of the pair.
    pub b: Field,
    /// Pearson coefficient; NaN when undefined.
    pub coefficient: f64,
}

/// Everything downstream reporting and plotting consume.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SummaryBundle {
    /// Total records covered.
    pub total_records: usize,
    /// Distinct event ids covered.
    pub total_events: usize,
    /// Per-field descriptive statistics, in configured field order.
    pub field_summaries: Vec<FieldSummary>,
    /// Species composition, descending by count.
    pub breakdown: Vec<SpeciesCount>,
    /// Pairwise correlations, in configured pair order.
    pub correlations: Vec<CorrelationEntry>,
    /// Per-event sums, present when requested.
    pub per_event: Option<Vec<EventSums>>,
    /// Final-state split, present when the input carried the flag.
    pub final_state: Option<FinalStateRatio>,
}

impl SummaryBundle {
    /// Computes the full bundle over a record slice.
    ///
    /// The slice may be a whole run or any filtered subset; an empty
    /// slice produces zero counts and NaN statistics without failing.
    #[must_use]
    pub fn compute(records: &[ParticleRecord], config: &SummaryConfig) -> Self {
        let events = event_sums(records);
        let total_events = events.len();

        let field_summaries = config
            .fields
            .iter()
            .map(|&field| summarize(records, field))
            .collect();

        let correlations = config
            .pairs
            .iter()
            .map(|&(a, b)| CorrelationEntry {
                a,
                b,
                coefficient: pearson(records, a, b),
            })
            .collect();

        Self {
            total_records: records.len(),
            total_events,
            field_summaries,
            breakdown: species_breakdown(records),
            correlations,
            per_event: config.per_event.then_some(events),
            final_state: final_state_ratio(records),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hadrokin_core::RawRecord;

    #[test]
    fn test_empty_bundle_reports_rather_than_fails() {
        let bundle = SummaryBundle::compute(&[], &SummaryConfig::default());
        assert_eq!(bundle.total_records, 0);
        assert_eq!(bundle.total_events, 0);
        assert!(bundle.breakdown.is_empty());
        for summary in &bundle.field_summaries {
            assert_eq!(summary.count, 0);
            assert!(summary.mean.is_nan());
        }
        for entry in &bundle.correlations {
            assert!(entry.coefficient.is_nan());
        }
        assert!(bundle.final_state.is_none());
    }

    #[test]
    fn test_bundle_respects_config() {
        let records = vec![
            RawRecord::new(1, 211, 0.5, 0.0, 1.0, 1.2, 0.14).derive(),
            RawRecord::new(2, -211, -0.5, 0.0, -1.0, 1.2, 0.14).derive(),
        ];
        let config = SummaryConfig::new()
            .with_fields(vec![Field::Eta])
            .with_pairs(vec![(Field::Pt, Field::Pt)])
            .with_per_event(true);
        let bundle = SummaryBundle::compute(&records, &config);

        assert_eq!(bundle.total_records, 2);
        assert_eq!(bundle.total_events, 2);
        assert_eq!(bundle.field_summaries.len(), 1);
        assert_eq!(bundle.field_summaries[0].field, Field::Eta);
        assert_eq!(bundle.correlations.len(), 1);
        assert_eq!(bundle.per_event.as_ref().map(Vec::len), Some(2));
    }
}
