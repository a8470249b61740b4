//! Per-species composition of a record set.

use hadrokin_core::ParticleRecord;
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Count and share of one species code in a record set.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpeciesCount {
    /// The species code.
    pub code: i32,
    /// Number of records with this code.
    pub count: usize,
    /// Share of the total, in `0.0..=1.0`.
    pub fraction: f64,
}

/// Groups records by species code and counts each group.
///
/// Result is ordered by descending count; ties keep first-encounter
/// order (the sort is stable over the encounter-ordered groups, codes
/// are never re-sorted by value). Fractions sum to 1 over all entries.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn species_breakdown(records: &[ParticleRecord]) -> Vec<SpeciesCount> {
    let mut index: HashMap<i32, usize> = HashMap::new();
    let mut groups: Vec<(i32, usize)> = Vec::new();

    for record in records {
        let code = record.species_code();
        match index.get(&code) {
            Some(&i) => groups[i].1 += 1,
            None => {
                index.insert(code, groups.len());
                groups.push((code, 1));
            }
        }
    }

    groups.sort_by(|a, b| b.1.cmp(&a.1));

    let total = records.len();
    groups
        .into_iter()
        .map(|(code, count)| SpeciesCount {
            code,
            count,
            fraction: if total == 0 {
                0.0
            } else {
                count as f64 / total as f64
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use hadrokin_core::RawRecord;

    fn record(code: i32) -> ParticleRecord {
        RawRecord::new(1, code, 0.1, 0.2, 0.3, 1.0, 0.14).derive()
    }

    #[test]
    fn test_descending_count_order() {
        let records: Vec<_> = [211, -211, 211, 321, 211, -211]
            .iter()
            .map(|&c| record(c))
            .collect();
        let breakdown = species_breakdown(&records);
        assert_eq!(breakdown.len(), 3);
        assert_eq!((breakdown[0].code, breakdown[0].count), (211, 3));
        assert_eq!((breakdown[1].code, breakdown[1].count), (-211, 2));
        assert_eq!((breakdown[2].code, breakdown[2].count), (321, 1));
    }

    #[test]
    fn test_tie_keeps_first_encounter_order() {
        // 2212 appears before 130 in the input; both count 2. A sort by
        // code value would put 130 first.
        let records: Vec<_> = [2212, 130, 2212, 130]
            .iter()
            .map(|&c| record(c))
            .collect();
        let breakdown = species_breakdown(&records);
        assert_eq!(breakdown[0].code, 2212);
        assert_eq!(breakdown[1].code, 130);
    }

    #[test]
    fn test_fractions_sum_to_one() {
        let records: Vec<_> = [211, -211, 211, 111, 311, 311, 2112]
            .iter()
            .map(|&c| record(c))
            .collect();
        let breakdown = species_breakdown(&records);
        let total: f64 = breakdown.iter().map(|s| s.fraction).sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_input() {
        let breakdown = species_breakdown(&[]);
        assert!(breakdown.is_empty());
    }
}
