//! Enriched-record CSV export.

use crate::Result;
use hadrokin_core::ParticleRecord;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writer for enriched particle records.
///
/// Emits the raw fields plus the derived quantities under their stable
/// downstream names (`p_mag`, `pt`, `eta`) for plotting consumers.
pub struct EnrichedCsvWriter {
    writer: BufWriter<File>,
}

impl EnrichedCsvWriter {
    /// Creates a new file writer.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }

    /// Writes the full enriched sequence as CSV, in record order.
    ///
    /// The `is_final` column is appended only when at least one record
    /// carries the flag.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write_records(&mut self, records: &[ParticleRecord]) -> Result<()> {
        let with_final = records.iter().any(|r| r.raw.is_final.is_some());

        if with_final {
            writeln!(
                self.writer,
                "event,id,px,py,pz,energy,mass,p_mag,pt,eta,is_final"
            )?;
        } else {
            writeln!(self.writer, "event,id,px,py,pz,energy,mass,p_mag,pt,eta")?;
        }

        for record in records {
            write!(
                self.writer,
                "{},{},{},{},{},{},{},{},{},{}",
                record.raw.event_id,
                record.raw.species_code,
                record.raw.px,
                record.raw.py,
                record.raw.pz,
                record.raw.energy,
                record.raw.mass,
                record.kin.p_mag,
                record.kin.pt,
                record.kin.eta
            )?;
            if with_final {
                let flag = record.raw.is_final.map_or(0, u8::from);
                write!(self.writer, ",{flag}")?;
            }
            writeln!(self.writer)?;
        }

        self.writer.flush()?;
        Ok(())
    }

    /// Flushes the writer.
    ///
    /// # Errors
    /// Returns an error if flushing fails.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
