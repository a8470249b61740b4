//! Particle record types.
//!
//! A [`RawRecord`] holds exactly what one input row carries; a
//! [`ParticleRecord`] is a raw record with its [`Kinematics`] attached.
//! Records are derived once and only read afterwards.

use crate::kinematics::Kinematics;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One input row from a hadronization run, before derivation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawRecord {
    /// Simulation event this particle belongs to. Not necessarily
    /// contiguous or sorted in the input.
    pub event_id: i64,
    /// Particle-type identifier; the sign encodes particle/antiparticle.
    pub species_code: i32,
    /// Momentum x component (GeV/c).
    pub px: f64,
    /// Momentum y component (GeV/c).
    pub py: f64,
    /// Momentum z component (GeV/c).
    pub pz: f64,
    /// Total energy (GeV).
    pub energy: f64,
    /// Rest mass (GeV/c²).
    pub mass: f64,
    /// Terminal (non-decaying) status; present only in the
    /// first-hadron input variant.
    pub is_final: Option<bool>,
}

impl RawRecord {
    /// Creates a raw record without a final-state flag.
    #[must_use]
    pub fn new(
        event_id: i64,
        species_code: i32,
        px: f64,
        py: f64,
        pz: f64,
        energy: f64,
        mass: f64,
    ) -> Self {
        Self {
            event_id,
            species_code,
            px,
            py,
            pz,
            energy,
            mass,
            is_final: None,
        }
    }

    /// Attaches derived kinematics, producing the enriched record.
    #[must_use]
    pub fn derive(self) -> ParticleRecord {
        ParticleRecord {
            kin: Kinematics::from_momentum(self.px, self.py, self.pz),
            raw: self,
        }
    }
}

/// A particle record with derived kinematic quantities attached.
///
/// Immutable once built: downstream consumers (labeling, aggregation)
/// only read it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParticleRecord {
    /// The raw input fields.
    pub raw: RawRecord,
    /// Derived quantities.
    pub kin: Kinematics,
}

impl ParticleRecord {
    /// Returns the event id.
    #[inline]
    #[must_use]
    pub fn event_id(&self) -> i64 {
        self.raw.event_id
    }

    /// Returns the species code.
    #[inline]
    #[must_use]
    pub fn species_code(&self) -> i32 {
        self.raw.species_code
    }
}

/// Derives kinematics for a whole raw sequence, preserving input order
/// one-to-one (no filtering).
#[must_use]
pub fn derive_all(raw: Vec<RawRecord>) -> Vec<ParticleRecord> {
    raw.into_iter().map(RawRecord::derive).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_derive_attaches_kinematics() {
        let raw = RawRecord::new(1, 211, 0.5, 0.0, 1.0, 1.2, 0.14);
        let rec = raw.derive();
        assert_relative_eq!(rec.kin.pt, 0.5, epsilon = 1e-12);
        assert_relative_eq!(rec.kin.p_mag, (1.25f64).sqrt(), epsilon = 1e-12);
        assert_eq!(rec.raw, raw);
    }

    #[test]
    fn test_derive_all_preserves_order() {
        let raw = vec![
            RawRecord::new(2, -211, 0.1, 0.2, 0.3, 0.5, 0.14),
            RawRecord::new(1, 321, -0.4, 0.0, 0.9, 1.1, 0.49),
            RawRecord::new(2, 2212, 0.0, 0.0, 0.0, 0.94, 0.94),
        ];
        let records = derive_all(raw.clone());
        assert_eq!(records.len(), raw.len());
        for (rec, orig) in records.iter().zip(&raw) {
            assert_eq!(rec.raw, *orig);
        }
    }
}
