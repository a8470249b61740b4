//! Per-event aggregation and final-state accounting.

use hadrokin_core::ParticleRecord;
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Energy and momentum totals for one simulation event.
///
/// The vector momentum sum is expected to sit near zero for a complete
/// event (momentum conservation); the engine reports it and leaves the
/// judgment to the consumer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EventSums {
    /// The event id.
    pub event_id: i64,
    /// Number of records in the event.
    pub n_records: usize,
    /// Sum of energies (GeV).
    pub energy_sum: f64,
    /// Sum of px components (GeV/c).
    pub px_sum: f64,
    /// Sum of py components (GeV/c).
    pub py_sum: f64,
    /// Sum of pz components (GeV/c).
    pub pz_sum: f64,
}

/// Groups records by event id and sums energy and momentum components.
///
/// Events appear in first-encounter order; input event ids need not be
/// contiguous or sorted.
#[must_use]
pub fn event_sums(records: &[ParticleRecord]) -> Vec<EventSums> {
    let mut index: HashMap<i64, usize> = HashMap::new();
    let mut events: Vec<EventSums> = Vec::new();

    for record in records {
        let event_id = record.event_id();
        let i = match index.get(&event_id) {
            Some(&i) => i,
            None => {
                index.insert(event_id, events.len());
                events.push(EventSums {
                    event_id,
                    n_records: 0,
                    energy_sum: 0.0,
                    px_sum: 0.0,
                    py_sum: 0.0,
                    pz_sum: 0.0,
                });
                events.len() - 1
            }
        };
        let entry = &mut events[i];
        entry.n_records += 1;
        entry.energy_sum += record.raw.energy;
        entry.px_sum += record.raw.px;
        entry.py_sum += record.raw.py;
        entry.pz_sum += record.raw.pz;
    }

    events
}

/// Final-state versus decayed split of a record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FinalStateRatio {
    /// Records flagged as terminal (non-decaying).
    pub final_count: usize,
    /// Records flagged as decayed.
    pub decayed_count: usize,
}

impl FinalStateRatio {
    /// Fraction of flagged records marked final, in `0.0..=1.0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fraction_final(&self) -> f64 {
        let total = self.final_count + self.decayed_count;
        if total == 0 {
            f64::NAN
        } else {
            self.final_count as f64 / total as f64
        }
    }
}

/// Counts final-state versus decayed records.
///
/// Returns `None` when no record carries the flag (the generic input
/// variant has no `is_final` column).
#[must_use]
pub fn final_state_ratio(records: &[ParticleRecord]) -> Option<FinalStateRatio> {
    let mut final_count = 0;
    let mut decayed_count = 0;
    for record in records {
        match record.raw.is_final {
            Some(true) => final_count += 1,
            Some(false) => decayed_count += 1,
            None => {}
        }
    }
    if final_count + decayed_count == 0 {
        None
    } else {
        Some(FinalStateRatio {
            final_count,
            decayed_count,
        })
    }
}
