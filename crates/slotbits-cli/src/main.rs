//! `slotbits` CLI — inspect day availability bitsets and compute bookable
//! slots, workload weights and service-chain starts from JSON day records.
//!
//! ## Usage
//!
//! ```sh
//! # Decode one wire bitset and show its free runs
//! slotbits inspect -i monday.txt --time-unit 5
//!
//! # Half-hour slots for a 30 minute service
//! slotbits slots -i days.json --service haircut --duration 30
//!
//! # Free-time weight per resource
//! slotbits weights -i days.json
//!
//! # Where a 50 + 100 minute chain fits on each resource
//! slotbits starts -i days.json --durations 50,100
//! ```
//!
//! Diagnostics go to stderr through `tracing`; set `RUST_LOG` or pass `-v`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use slotbits::availability::first_last_minutes;
use slotbits::scan::{free_runs, one_positions};
use slotbits::sequence::sequence_booking_vector;
use slotbits::{
    make_slots, parse_days, prepare, workload_weights, BitsetInput, DayRecord, SlotConfig,
    TimeUnit,
};
use std::io::{self, Read};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "slotbits",
    version,
    about = "Day availability bitsets: free runs, slots and workload"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode one wire bitset and describe it
    Inspect {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Minutes per bit (guessed from the input length if omitted)
        #[arg(long)]
        time_unit: Option<u32>,
    },
    /// Materialize bookable slots from day records
    Slots {
        /// Day records JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Service identifier copied into every slot
        #[arg(long)]
        service: String,
        /// Service duration in minutes
        #[arg(long)]
        duration: u32,
        /// Ignore slots starting before this minute of the day
        #[arg(long, default_value_t = 0)]
        start: u32,
        /// Slot tile length in minutes
        #[arg(long)]
        tile: Option<u32>,
        /// Minutes per bit
        #[arg(long)]
        time_unit: Option<u32>,
        /// JSON file with a slot configuration (flags take precedence)
        #[arg(long)]
        config: Option<String>,
    },
    /// Total free time per resource across all days
    Weights {
        /// Day records JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Minutes per bit
        #[arg(long, default_value_t = 5)]
        time_unit: u32,
    },
    /// Start minutes where a back-to-back chain of services fits
    Starts {
        /// Day records JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Comma-separated service durations in minutes, in order
        #[arg(long)]
        durations: String,
        /// Ignore starts before this minute of the day
        #[arg(long, default_value_t = 0)]
        start: u32,
        /// Minutes per bit
        #[arg(long, default_value_t = 5)]
        time_unit: u32,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChainStarts {
    resource_id: String,
    date: Option<String>,
    start_minutes: Vec<u32>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    enable_tracing(cli.verbose);

    match cli.command {
        Commands::Inspect { input, time_unit } => {
            let text = read_input(input.as_deref())?;
            let bitset = BitsetInput::Text(text.trim().to_string());
            let unit = match time_unit {
                Some(minutes) => TimeUnit::new(minutes)?,
                None => TimeUnit::infer(&bitset),
            };
            let vector = prepare(&bitset, unit).context("Failed to decode bitset")?;
            let bounds = first_last_minutes(&vector);

            println!("Time unit:  {} ({} bits)", unit, unit.bits());
            println!("Free units: {}", vector.count_ones());
            println!("First free: {}", bounds.start.map_or("-".into(), clock));
            println!("Last free:  {}", bounds.end.map_or("-".into(), clock));
            println!("Runs:");
            for run in free_runs(&vector, 0) {
                let from = unit.units_to_minutes(run.start);
                let to = unit.units_to_minutes(run.end()).min(slotbits::MINUTES_IN_DAY);
                println!("  {}-{} ({} min)", clock(from), clock(to), to - from);
            }
            println!("Bits:");
            println!("  {}", vector);
        }
        Commands::Slots {
            input,
            output,
            service,
            duration,
            start,
            tile,
            time_unit,
            config,
        } => {
            let mut slot_config = match config.as_deref() {
                Some(path) => {
                    let raw = read_input(Some(path))?;
                    serde_json::from_str::<SlotConfig>(&raw)
                        .with_context(|| format!("Invalid slot config: {}", path))?
                }
                None => SlotConfig::default(),
            };
            if let Some(minutes) = time_unit {
                slot_config.time_unit = TimeUnit::new(minutes)?;
            }
            if let Some(minutes) = tile {
                slot_config.tile_minutes = minutes;
            }
            debug!(?slot_config, "resolved slot config");

            let days = read_days(input.as_deref())?;
            let slots = make_slots(&days, start, &service, duration, &slot_config)
                .context("Failed to build slots")?;
            write_output(output.as_deref(), &serde_json::to_string_pretty(&slots)?)?;
        }
        Commands::Weights {
            input,
            output,
            time_unit,
        } => {
            let unit = TimeUnit::new(time_unit)?;
            let days = read_days(input.as_deref())?;
            let weights = workload_weights(&days, unit);
            write_output(output.as_deref(), &serde_json::to_string_pretty(&weights)?)?;
        }
        Commands::Starts {
            input,
            durations,
            start,
            time_unit,
        } => {
            let unit = TimeUnit::new(time_unit)?;
            let durations = parse_durations(&durations)?;
            let days = read_days(input.as_deref())?;
            let starts = chain_starts(&days, start, &durations, unit)?;
            println!("{}", serde_json::to_string_pretty(&starts)?);
        }
    }

    Ok(())
}

fn enable_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(io::stderr)
        .init();
}

/// Valid chain starts per resource per day. Resources whose bitset does not
/// decode are reported and skipped.
fn chain_starts(
    days: &[DayRecord],
    start: u32,
    durations: &[u32],
    unit: TimeUnit,
) -> Result<Vec<ChainStarts>> {
    let mut out = Vec::new();
    for day in days {
        for resource in day.active_resources() {
            let vector = match prepare(&resource.bitset, unit) {
                Ok(vector) => vector,
                Err(err) => {
                    warn!(resource_id = %resource.resource_id, error = %err, "skipping resource");
                    continue;
                }
            };
            let composed = sequence_booking_vector(&vector, start, durations)?;
            out.push(ChainStarts {
                resource_id: resource.resource_id.clone(),
                date: day.date.clone(),
                start_minutes: one_positions(&composed)
                    .into_iter()
                    .map(|bit| unit.units_to_minutes(bit))
                    .collect(),
            });
        }
    }
    Ok(out)
}

/// Parse `--durations 50,100,150`. Empty entries are ignored.
fn parse_durations(raw: &str) -> Result<Vec<u32>> {
    let durations = raw
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<u32>()
                .with_context(|| format!("Invalid duration: '{}'", part))
        })
        .collect::<Result<Vec<_>>>()?;
    if durations.is_empty() {
        anyhow::bail!("At least one duration is required");
    }
    Ok(durations)
}

/// `HH:MM` for a minute of the day.
fn clock(minute: u32) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

fn read_days(path: Option<&str>) -> Result<Vec<DayRecord>> {
    let json = read_input(path)?;
    parse_days(&json).context("Failed to parse day records")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
