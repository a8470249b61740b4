//! hadrokin-core: Core types for hadronization-event kinematics.
//!
//! This crate provides the record model for per-particle simulation
//! output, the derivation of kinematic quantities (momentum magnitude,
//! transverse momentum, pseudorapidity), and species-code labeling.
//!

pub mod error;
pub mod field;
pub mod kinematics;
pub mod record;
pub mod species;

pub use error::{Error, Result};
pub use field::Field;
pub use kinematics::{Kinematics, ETA_EPSILON};
pub use record::{derive_all, ParticleRecord, RawRecord};
pub use species::SpeciesTable;
