//! End-to-end aggregation over a synthetic hadronization run.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use hadrokin_core::{derive_all, Field, RawRecord, SpeciesTable};
use hadrokin_stats::{SummaryBundle, SummaryConfig};

fn synthetic_run() -> Vec<hadrokin_core::ParticleRecord> {
    // Two events of back-to-back pairs plus a spread of species.
    let raw = vec![
        RawRecord::new(1, 211, 0.5, 0.0, 1.0, 1.2, 0.14),
        RawRecord::new(1, -211, -0.5, 0.0, -1.0, 1.2, 0.14),
        RawRecord::new(2, 321, 0.3, 0.4, 0.2, 0.8, 0.49),
        RawRecord::new(2, -321, -0.3, -0.4, -0.2, 0.8, 0.49),
        RawRecord::new(3, 211, 0.0, 0.0, 2.0, 2.01, 0.14),
        RawRecord::new(3, 2212, 0.0, 0.0, -2.0, 2.21, 0.94),
    ];
    derive_all(raw)
}

#[test]
fn test_momentum_bounds_hold_for_all_records() {
    for record in synthetic_run() {
        assert!(record.kin.p_mag >= record.kin.pt - 1e-12);
        assert!(record.kin.pt >= 0.0);
        assert!(record.kin.eta.is_finite());
    }
}

#[test]
fn test_per_event_momentum_conservation() {
    let records = synthetic_run();
    let config = SummaryConfig::new().with_per_event(true);
    let bundle = SummaryBundle::compute(&records, &config);

    let events = bundle.per_event.expect("per-event sums requested");
    assert_eq!(events.len(), 3);
    for event in &events {
        assert_abs_diff_eq!(event.px_sum, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(event.py_sum, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(event.pz_sum, 0.0, epsilon = 1e-12);
    }
}

#[test]
fn test_breakdown_fractions_and_labels() {
    let records = synthetic_run();
    let bundle = SummaryBundle::compute(&records, &SummaryConfig::default());

    let total: f64 = bundle.breakdown.iter().map(|s| s.fraction).sum();
    assert_relative_eq!(total, 1.0, epsilon = 1e-12);

    // Most common species first.
    assert_eq!(bundle.breakdown[0].code, 211);
    assert_eq!(bundle.breakdown[0].count, 2);

    // Every code in the breakdown gets a label, known or not.
    let table = SpeciesTable::decay_products();
    for entry in &bundle.breakdown {
        let label = table.label(entry.code);
        assert!(!label.is_empty());
    }
}

#[test]
fn test_correlation_table_default_pairs() {
    let records = synthetic_run();
    let bundle = SummaryBundle::compute(&records, &SummaryConfig::default());

    assert_eq!(bundle.correlations.len(), 4);
    for entry in &bundle.correlations {
        assert!(entry.coefficient.is_nan() || entry.coefficient.abs() <= 1.0 + 1e-12);
    }
    // Energy rises with momentum magnitude in this run.
    let e_p = bundle
        .correlations
        .iter()
        .find(|c| c.a == Field::Energy && c.b == Field::PMag)
        .expect("default pair");
    assert!(e_p.coefficient > 0.9);
}

#[test]
fn test_filtered_slice_is_first_class() {
    let records = synthetic_run();
    let pions: Vec<_> = records
        .iter()
        .copied()
        .filter(|r| r.species_code().abs() == 211)
        .collect();
    let bundle = SummaryBundle::compute(&pions, &SummaryConfig::default());
    assert_eq!(bundle.total_records, 3);
    assert_eq!(bundle.breakdown.len(), 2);
}
