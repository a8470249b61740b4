//! Derived kinematic quantities for a single particle record.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Additive guard applied to the pseudorapidity denominator.
///
/// For a fully forward-going particle (`pz == p_mag`, zero transverse
/// momentum) the denominator of the eta formula vanishes. The guard is
/// always added, never branched on, so eta stays continuous as
/// `pz -> p_mag` and comes out large but finite in the forward limit.
/// The value is a tolerance choice carried over from the upstream
/// analysis; changing it would shift reported eta distributions.
pub const ETA_EPSILON: f64 = 1e-10;

/// Kinematic quantities derived from a three-momentum.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Kinematics {
    /// Momentum magnitude |p| (GeV/c).
    pub p_mag: f64,
    /// Transverse momentum p_T (GeV/c).
    pub pt: f64,
    /// Pseudorapidity eta.
    pub eta: f64,
}

impl Kinematics {
    /// Derives all kinematic quantities from momentum components.
    ///
    /// Pure function of `(px, py, pz)`: the same inputs always produce
    /// bit-identical outputs.
    #[must_use]
    pub fn from_momentum(px: f64, py: f64, pz: f64) -> Self {
        let p_mag = (px * px + py * py + pz * pz).sqrt();
        let pt = (px * px + py * py).sqrt();
        let eta = 0.5 * ((p_mag + pz) / (p_mag - pz + ETA_EPSILON)).ln();
        Self { p_mag, pt, eta }
    }
}
