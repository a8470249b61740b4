//! Per-field descriptive statistics.

use hadrokin_core::{Field, ParticleRecord};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Descriptive statistics for one numeric field over a record slice.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldSummary {
    /// Which field was summarized.
    pub field: Field,
    /// Number of records the summary covers.
    pub count: usize,
    /// Arithmetic mean; NaN when the slice is empty.
    pub mean: f64,
    /// Sample standard deviation (n - 1 normalization); NaN for fewer
    /// than two records.
    pub std: f64,
    /// Minimum value; NaN when the slice is empty.
    pub min: f64,
    /// Maximum value; NaN when the slice is empty.
    pub max: f64,
}

/// Summarizes one field over a record slice.
///
/// An empty slice yields count 0 and NaN moments rather than an error;
/// the absence of data is reported, not raised.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn summarize(records: &[ParticleRecord], field: Field) -> FieldSummary {
    let count = records.len();
    if count == 0 {
        return FieldSummary {
            field,
            count: 0,
            mean: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            max: f64::NAN,
        };
    }

    let mut sum = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for record in records {
        let v = field.value(record);
        sum += v;
        min = min.min(v);
        max = max.max(v);
    }
    let mean = sum / count as f64;

    let std = if count < 2 {
        f64::NAN
    } else {
        let ss: f64 = records
            .iter()
            .map(|record| {
                let d = field.value(record) - mean;
                d * d
            })
            .sum();
        (ss / (count as f64 - 1.0)).sqrt()
    };

    FieldSummary {
        field,
        count,
        mean,
        std,
        min,
        max,
    }
}
