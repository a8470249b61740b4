//! Numeric field selection for aggregation.

use crate::record::ParticleRecord;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A numeric field of an enriched particle record.
///
/// Aggregation is parameterized by fields rather than hard-coding
/// accessors; the names returned by [`Field::name`] are part of the
/// downstream plotting contract and must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Field {
    /// Momentum x component.
    Px,
    /// Momentum y component.
    Py,
    /// Momentum z component.
    Pz,
    /// Total energy.
    Energy,
    /// Rest mass.
    Mass,
    /// Derived momentum magnitude.
    PMag,
    /// Derived transverse momentum.
    Pt,
    /// Derived pseudorapidity.
    Eta,
}

impl Field {
    /// All fields, raw before derived.
    pub const ALL: [Field; 8] = [
        Field::Px,
        Field::Py,
        Field::Pz,
        Field::Energy,
        Field::Mass,
        Field::PMag,
        Field::Pt,
        Field::Eta,
    ];

    /// Stable field name used in output bundles.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Field::Px => "px",
            Field::Py => "py",
            Field::Pz => "pz",
            Field::Energy => "energy",
            Field::Mass => "mass",
            Field::PMag => "p_mag",
            Field::Pt => "pt",
            Field::Eta => "eta",
        }
    }

    /// Reads this field's value from a record.
    #[inline]
    #[must_use]
    pub fn value(self, record: &ParticleRecord) -> f64 {
        match self {
            Field::Px => record.raw.px,
            Field::Py => record.raw.py,
            Field::Pz => record.raw.pz,
            Field::Energy => record.raw.energy,
            Field::Mass => record.raw.mass,
            Field::PMag => record.kin.p_mag,
            Field::Pt => record.kin.pt,
            Field::Eta => record.kin.eta,
        }
    }
}
