//! CSV record loading.
//!
//! Two input layouts are accepted, matching the two producers of
//! hadronization output:
//!
//! - a headerless table in the fixed order
//!   `event, species, px, py, pz, energy, mass[, is_final]`, with `#`
//!   comment lines;
//! - a header-bearing table with named columns (`Event`, `ID` or
//!   `Particle_ID`, `px`, `py`, `pz`, `E`, `m` or `mass`, optional
//!   `IsFinal`); extra columns are ignored.
//!
//! A load either yields the whole record sequence or fails; no row is
//! ever silently skipped.

use crate::error::{Error, Result};
use csv::{ReaderBuilder, StringRecord, Trim};
use hadrokin_core::RawRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The input layout detected from the first non-comment row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Layout {
    /// Headerless, fixed column order.
    FixedOrder {
        /// Whether the trailing final-state column is present.
        has_final: bool,
    },
    /// Header row with named columns.
    NamedColumns {
        /// Whether an `IsFinal` column is present.
        has_final: bool,
    },
    /// The source had no rows at all.
    Empty,
}

/// A fully loaded record sequence with its detected layout.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoadedRecords {
    /// Detected input layout.
    pub layout: Layout,
    /// Records in input order.
    pub records: Vec<RawRecord>,
}

/// Loads records from a CSV file on disk.
///
/// # Errors
/// `SourceNotFound` when the path does not exist; `Schema` when the
/// column layout or a cell does not fit any known schema. The load is
/// all-or-nothing.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<LoadedRecords> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::SourceNotFound(path.to_path_buf()));
    }
    let file = File::open(path)?;
    read_records(file)
}

/// Reads records from any byte source.
///
/// # Errors
/// Same schema semantics as [`load_records`], minus the existence check.
pub fn read_records<R: Read>(source: R) -> Result<LoadedRecords> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .comment(Some(b'#'))
        .trim(Trim::All)
        .flexible(true)
        .from_reader(source);

    let mut rows = reader.records();
    let first = match rows.next() {
        Some(row) => row?,
        None => {
            return Ok(LoadedRecords {
                layout: Layout::Empty,
                records: Vec::new(),
            })
        }
    };

    // A header row contains at least one non-numeric cell; a data row
    // in the fixed layout is numbers throughout.
    let is_header = !first.iter().all(|cell| cell.parse::<f64>().is_ok());

    if is_header {
        let columns = NamedColumns::from_header(&first)?;
        let mut records = Vec::new();
        for row in rows {
            let row = row?;
            records.push(columns.parse_row(&row)?);
        }
        Ok(LoadedRecords {
            layout: Layout::NamedColumns {
                has_final: columns.is_final.is_some(),
            },
            records,
        })
    } else {
        let has_final = match first.len() {
            7 => false,
            8 => true,
            n => {
                return Err(Error::Schema(format!(
                    "row {} has {n} columns, expected 7 or 8",
                    line_of(&first)
                )))
            }
        };
        let mut records = vec![parse_fixed_row(&first, has_final)?];
        for row in rows {
            let row = row?;
            let expected = if has_final { 8 } else { 7 };
            if row.len() != expected {
                return Err(Error::Schema(format!(
                    "row {} has {} columns, expected {expected}",
                    line_of(&row),
                    row.len()
                )));
            }
            records.push(parse_fixed_row(&row, has_final)?);
        }
        Ok(LoadedRecords {
            layout: Layout::FixedOrder { has_final },
            records,
        })
    }
}

/// Column indices resolved from a header row.
struct NamedColumns {
    event: usize,
    species: usize,
    px: usize,
    py: usize,
    pz: usize,
    energy: usize,
    mass: usize,
    is_final: Option<usize>,
}

impl NamedColumns {
    fn from_header(header: &StringRecord) -> Result<Self> {
        let find = |names: &[&str]| {
            header
                .iter()
                .position(|cell| names.contains(&cell))
                .ok_or_else(|| {
                    Error::Schema(format!("missing required column {:?} in header", names[0]))
                })
        };
        Ok(Self {
            event: find(&["Event"])?,
            species: find(&["ID", "Particle_ID"])?,
            px: find(&["px"])?,
            py: find(&["py"])?,
            pz: find(&["pz"])?,
            energy: find(&["E"])?,
            mass: find(&["m", "mass"])?,
            is_final: header.iter().position(|cell| cell == "IsFinal"),
        })
    }

    fn parse_row(&self, row: &StringRecord) -> Result<RawRecord> {
        let line = line_of(row);
        let mut record = RawRecord::new(
            parse_cell::<i64>(row, self.event, "event id", line)?,
            parse_cell::<i32>(row, self.species, "species code", line)?,
            parse_cell::<f64>(row, self.px, "px", line)?,
            parse_cell::<f64>(row, self.py, "py", line)?,
            parse_cell::<f64>(row, self.pz, "pz", line)?,
            parse_cell::<f64>(row, self.energy, "energy", line)?,
            parse_cell::<f64>(row, self.mass, "mass", line)?,
        );
        if let Some(i) = self.is_final {
            record.is_final = Some(parse_flag(cell(row, i, "is_final", line)?, line)?);
        }
        Ok(record)
    }
}

fn parse_fixed_row(row: &StringRecord, has_final: bool) -> Result<RawRecord> {
    let line = line_of(row);
    let mut record = RawRecord::new(
        parse_cell::<i64>(row, 0, "event id", line)?,
        parse_cell::<i32>(row, 1, "species code", line)?,
        parse_cell::<f64>(row, 2, "px", line)?,
        parse_cell::<f64>(row, 3, "py", line)?,
        parse_cell::<f64>(row, 4, "pz", line)?,
        parse_cell::<f64>(row, 5, "energy", line)?,
        parse_cell::<f64>(row, 6, "mass", line)?,
    );
    if has_final {
        record.is_final = Some(parse_flag(cell(row, 7, "is_final", line)?, line)?);
    }
    Ok(record)
}

fn line_of(row: &StringRecord) -> u64 {
    row.position().map_or(0, csv::Position::line)
}

fn cell<'r>(row: &'r StringRecord, index: usize, name: &str, line: u64) -> Result<&'r str> {
    row.get(index)
        .ok_or_else(|| Error::Schema(format!("row {line} is missing the {name} column")))
}

fn parse_cell<T: std::str::FromStr>(
    row: &StringRecord,
    index: usize,
    name: &str,
    line: u64,
) -> Result<T> {
    let raw = cell(row, index, name, line)?;
    raw.parse().map_err(|_| {
        Error::Schema(format!(
            "row {line}: cannot parse {name} from {raw:?}"
        ))
    })
}

fn parse_flag(raw: &str, line: u64) -> Result<bool> {
    match raw {
        "1" => Ok(true),
        "0" => Ok(false),
        other if other.eq_ignore_ascii_case("true") => Ok(true),
        other if other.eq_ignore_ascii_case("false") => Ok(false),
        other => Err(Error::Schema(format!(
            "row {line}: cannot parse is_final from {other:?}"
        ))),
    }
}
