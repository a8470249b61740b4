//! hadrokin-io: CSV loading and export for particle records.
//!
//! Normalizes the two accepted input layouts into one canonical record
//! sequence and writes enriched records back out for plotting
//! consumers.
//!

mod error;
mod reader;
mod writer;

pub use error::{Error, Result};
pub use reader::{load_records, read_records, Layout, LoadedRecords};
pub use writer::EnrichedCsvWriter;
