//! Pairwise Pearson correlation between record fields.

use hadrokin_core::{Field, ParticleRecord};

/// Pearson correlation coefficient between two fields over a slice.
///
/// Undefined cases are reported as NaN, never silently as zero: fewer
/// than two records, or zero variance in either field.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn pearson(records: &[ParticleRecord], a: Field, b: Field) -> f64 {
    let n = records.len();
    if n < 2 {
        return f64::NAN;
    }

    let n_f = n as f64;
    let mean_a: f64 = records.iter().map(|r| a.value(r)).sum::<f64>() / n_f;
    let mean_b: f64 = records.iter().map(|r| b.value(r)).sum::<f64>() / n_f;

    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for record in records {
        let da = a.value(record) - mean_a;
        let db = b.value(record) - mean_b;
        cov += da * db;
        var_a += da * da;
        var_b += db * db;
    }

    if var_a <= 0.0 || var_b <= 0.0 {
        return f64::NAN;
    }
    cov / (var_a * var_b).sqrt()
}
