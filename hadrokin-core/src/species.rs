//! Species-code labeling.
//!
//! Species codes follow the standard particle numbering scheme; the
//! tables here cover the hadrons each analysis variant actually sees.
//! Tables are passed explicitly to call sites so different analyses can
//! carry different subsets without sharing a global.

use crate::error::{Error, Result};
use std::collections::HashMap;

/// A code-to-name lookup table for particle species.
///
/// Lookup falls back to a synthetic `ID:<code>` label on a miss, so
/// every code is always labeled and none is dropped from grouping.
#[derive(Debug, Clone)]
pub struct SpeciesTable {
    names: HashMap<i32, String>,
}

impl SpeciesTable {
    /// Builds a table from `(code, name)` pairs.
    ///
    /// # Errors
    /// Returns an error if the entry list is empty or a code repeats.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (i32, S)>,
        S: Into<String>,
    {
        let mut names = HashMap::new();
        for (code, name) in entries {
            if names.insert(code, name.into()).is_some() {
                return Err(Error::DuplicateSpeciesCode(code));
            }
        }
        if names.is_empty() {
            return Err(Error::EmptySpeciesTable);
        }
        Ok(Self { names })
    }

    /// Table for first emitted hadrons from string fragmentation.
    #[must_use]
    pub fn first_hadron() -> Self {
        let entries: [(i32, &str); 17] = [
            (111, "pi0"),
            (-211, "pi-"),
            (211, "pi+"),
            (311, "K0"),
            (-311, "Kbar0"),
            (313, "K*0"),
            (-313, "K*bar0"),
            (2112, "neutron"),
            (-2112, "antineutron"),
            (-213, "rho-"),
            (223, "omega"),
            (113, "rho0"),
            (213, "rho+"),
            (3322, "Xi0"),
            (-3122, "Lambdabar0"),
            (-2214, "Deltabar-"),
            (2212, "proton"),
        ];
        // Static entries are distinct and non-empty.
        Self::from_entries(entries).unwrap_or_else(|_| unreachable!())
    }

    /// Table for long-lived decay products.
    #[must_use]
    pub fn decay_products() -> Self {
        let entries: [(i32, &str); 9] = [
            (211, "pi+"),
            (-211, "pi-"),
            (321, "K+"),
            (-321, "K-"),
            (130, "K0"),
            (2212, "proton"),
            (-2212, "antiproton"),
            (2112, "neutron"),
            (-2112, "antineutron"),
        ];
        Self::from_entries(entries).unwrap_or_else(|_| unreachable!())
    }

    /// Resolves a species code to a display label.
    ///
    /// Unknown codes resolve to `ID:<code>` rather than failing, so the
    /// breakdown never loses a species.
    #[must_use]
    pub fn label(&self, code: i32) -> String {
        self.names
            .get(&code)
            .cloned()
            .unwrap_or_else(|| format!("ID:{code}"))
    }

    /// Returns true if the code has a named entry.
    #[must_use]
    pub fn contains(&self, code: i32) -> bool {
        self.names.contains_key(&code)
    }

    /// Number of named entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the table has no entries.
    ///
    /// Construction rejects empty tables, so this is always false for a
    /// table built through [`SpeciesTable::from_entries`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        let table = SpeciesTable::first_hadron();
        assert_eq!(table.label(211), "pi+");
        assert_eq!(table.label(-211), "pi-");
        assert_eq!(table.label(2212), "proton");
        assert_eq!(table.label(-3122), "Lambdabar0");
    }

    #[test]
    fn test_unknown_code_fallback() {
        let table = SpeciesTable::decay_products();
        assert_eq!(table.label(99999), "ID:99999");
        assert_eq!(table.label(-523), "ID:-523");
    }

    #[test]
    fn test_tables_are_independent() {
        let first = SpeciesTable::first_hadron();
        let decay = SpeciesTable::decay_products();
        // K+ only appears among decay products; rho0 only among first hadrons.
        assert!(decay.contains(321));
        assert!(!first.contains(321));
        assert!(first.contains(113));
        assert!(!decay.contains(113));
    }

    #[test]
    fn test_custom_table() {
        let table = SpeciesTable::from_entries([(22, "photon")]).unwrap();
        assert_eq!(table.label(22), "photon");
        assert_eq!(table.label(11), "ID:11");
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_rejects_duplicates_and_empty() {
        let dup = SpeciesTable::from_entries([(211, "pi+"), (211, "pion")]);
        assert!(matches!(dup, Err(Error::DuplicateSpeciesCode(211))));

        let empty = SpeciesTable::from_entries(Vec::<(i32, &str)>::new());
        assert!(matches!(empty, Err(Error::EmptySpeciesTable)));
    }
}
