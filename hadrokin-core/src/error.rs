//! Error types for hadrokin-core.

use thiserror::Error;

/// Result type alias for hadrokin-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for hadrokin operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A species table was built from an empty entry list.
    #[error("species table has no entries")]
    EmptySpeciesTable,

    /// A species table contains the same code twice.
    #[error("duplicate species code in table: {0}")]
    DuplicateSpeciesCode(i32),

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),
}
