//! Command-line reporting over hadronization kinematics.
#![allow(clippy::uninlined_format_args, clippy::too_many_lines)]

use clap::{Parser, Subcommand, ValueEnum};
use hadrokin_core::{derive_all, SpeciesTable};
use hadrokin_io::{load_records, EnrichedCsvWriter, Layout};
use hadrokin_stats::{SummaryBundle, SummaryConfig};
use serde_json::json;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for CLI operations.
type Result<T> = std::result::Result<T, CliError>;

/// CLI error types.
#[derive(Error, Debug)]
enum CliError {
    #[error("{0}")]
    HadrokinIo(#[from] hadrokin_io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Species label table selection.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Table {
    /// First emitted hadrons from string fragmentation
    FirstHadron,
    /// Long-lived decay products
    DecayProducts,
}

impl Table {
    fn build(self) -> SpeciesTable {
        match self {
            Table::FirstHadron => SpeciesTable::first_hadron(),
            Table::DecayProducts => SpeciesTable::decay_products(),
        }
    }
}

/// Kinematics and statistics for hadronization simulation output.
#[derive(Parser)]
#[command(name = "hadrokin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute and print the statistics report for a run
    Report {
        /// Input CSV file
        input: PathBuf,

        /// Emit the bundle as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Include per-event energy/momentum sums
        #[arg(long)]
        per_event: bool,

        /// Species label table to use
        #[arg(long, value_enum, default_value = "decay-products")]
        table: Table,
    },

    /// Show row/event counts and the detected input layout
    Info {
        /// Input CSV file
        input: PathBuf,
    },

    /// Write the enriched record sequence as CSV
    Export {
        /// Input CSV file
        input: PathBuf,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Report {
            input,
            json,
            per_event,
            table,
        } => {
            let loaded = load_records(&input)?;
            let records = derive_all(loaded.records);
            let config = SummaryConfig::new().with_per_event(per_event);
            let bundle = SummaryBundle::compute(&records, &config);
            let table = table.build();

            if json {
                println!("{}", serde_json::to_string_pretty(&bundle_json(&bundle, &table))?);
            } else {
                print_report(&bundle, &table);
            }
            Ok(())
        }

        Commands::Info { input } => {
            let loaded = load_records(&input)?;
            let layout = match loaded.layout {
                Layout::FixedOrder { has_final } => {
                    format!("fixed column order (is_final: {has_final})")
                }
                Layout::NamedColumns { has_final } => {
                    format!("named columns (is_final: {has_final})")
                }
                Layout::Empty => "empty source".to_string(),
            };
            let records = derive_all(loaded.records);
            let bundle = SummaryBundle::compute(&records, &SummaryConfig::default());
            println!("Layout:  {layout}");
            println!("Records: {}", bundle.total_records);
            println!("Events:  {}", bundle.total_events);
            println!("Species: {}", bundle.breakdown.len());
            Ok(())
        }

        Commands::Export { input, output } => {
            let loaded = load_records(&input)?;
            let records = derive_all(loaded.records);
            let mut writer = EnrichedCsvWriter::create(&output)?;
            writer.write_records(&records)?;
            println!("Wrote {} enriched records to {}", records.len(), output.display());
            Ok(())
        }
    }
}

fn print_report(bundle: &SummaryBundle, table: &SpeciesTable) {
    println!("{}", "=".repeat(60));
    println!("PARTICLE KINEMATICS REPORT");
    println!("{}", "=".repeat(60));
    println!();
    println!("Total records: {}", bundle.total_records);
    println!("Total events:  {}", bundle.total_events);

    println!("\nFIELD STATISTICS:");
    for s in &bundle.field_summaries {
        println!(
            "  {:<7} mean={:.3}  std={:.3}  min={:.3}  max={:.3}",
            s.field.name(),
            s.mean,
            s.std,
            s.min,
            s.max
        );
    }

    println!("\nSPECIES BREAKDOWN:");
    for entry in &bundle.breakdown {
        println!(
            "  {}: {} ({:.1}%)",
            table.label(entry.code),
            entry.count,
            entry.fraction * 100.0
        );
    }

    println!("\nKEY CORRELATIONS:");
    for entry in &bundle.correlations {
        println!(
            "  {}-{}: {:.3}",
            entry.a.name(),
            entry.b.name(),
            entry.coefficient
        );
    }

    if let Some(ratio) = &bundle.final_state {
        println!("\nFINAL STATE VS DECAYED:");
        println!(
            "  Final state: {} ({:.1}%)",
            ratio.final_count,
            ratio.fraction_final() * 100.0
        );
        println!(
            "  Decayed: {} ({:.1}%)",
            ratio.decayed_count,
            (1.0 - ratio.fraction_final()) * 100.0
        );
    }

    if let Some(events) = &bundle.per_event {
        println!("\nPER-EVENT SUMS (momentum conservation check):");
        for event in events {
            println!(
                "  event {}: n={} E={:.3} p=({:.3}, {:.3}, {:.3})",
                event.event_id,
                event.n_records,
                event.energy_sum,
                event.px_sum,
                event.py_sum,
                event.pz_sum
            );
        }
    }
}

/// Builds the JSON view of a bundle using the stable field names.
///
/// NaN is not representable in JSON; undefined statistics come out as
/// null.
fn bundle_json(bundle: &SummaryBundle, table: &SpeciesTable) -> serde_json::Value {
    let nanable = |v: f64| {
        if v.is_nan() {
            serde_json::Value::Null
        } else {
            json!(v)
        }
    };

    json!({
        "total_records": bundle.total_records,
        "total_events": bundle.total_events,
        "fields": bundle.field_summaries.iter().map(|s| {
            json!({
                "field": s.field.name(),
                "count": s.count,
                "mean": nanable(s.mean),
                "std": nanable(s.std),
                "min": nanable(s.min),
                "max": nanable(s.max),
            })
        }).collect::<Vec<_>>(),
        "breakdown": bundle.breakdown.iter().map(|entry| {
            json!({
                "code": entry.code,
                "label": table.label(entry.code),
                "count": entry.count,
                "fraction": entry.fraction,
            })
        }).collect::<Vec<_>>(),
        "correlations": bundle.correlations.iter().map(|entry| {
            json!({
                "a": entry.a.name(),
                "b": entry.b.name(),
                "coefficient": nanable(entry.coefficient),
            })
        }).collect::<Vec<_>>(),
        "final_state": bundle.final_state.map(|ratio| {
            json!({
                "final_count": ratio.final_count,
                "decayed_count": ratio.decayed_count,
                "fraction_final": nanable(ratio.fraction_final()),
            })
        }),
        "per_event": bundle.per_event.as_ref().map(|events| {
            events.iter().map(|event| {
                json!({
                    "event_id": event.event_id,
                    "n_records": event.n_records,
                    "energy_sum": event.energy_sum,
                    "px_sum": event.px_sum,
                    "py_sum": event.py_sum,
                    "pz_sum": event.pz_sum,
                })
            }).collect::<Vec<_>>()
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hadrokin_core::RawRecord;

    #[test]
    fn test_bundle_json_uses_stable_names() {
        let records = derive_all(vec![
            RawRecord::new(1, 211, 0.5, 0.0, 1.0, 1.2, 0.14),
            RawRecord::new(1, -211, -0.5, 0.0, -1.0, 1.2, 0.14),
        ]);
        let bundle = SummaryBundle::compute(&records, &SummaryConfig::default());
        let value = bundle_json(&bundle, &SpeciesTable::decay_products());

        let names: Vec<&str> = value["fields"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["field"].as_str().unwrap())
            .collect();
        assert!(names.contains(&"p_mag"));
        assert!(names.contains(&"pt"));
        assert!(names.contains(&"eta"));
    }

    #[test]
    fn test_bundle_json_nan_is_null() {
        let bundle = SummaryBundle::compute(&[], &SummaryConfig::default());
        let value = bundle_json(&bundle, &SpeciesTable::decay_products());
        assert!(value["fields"][0]["mean"].is_null());
        assert!(value["correlations"][0]["coefficient"].is_null());
    }
}
