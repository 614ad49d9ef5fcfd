//! `schedcmp` CLI — compare weekly course schedules from the command line.
//!
//! Input is a JSON array of schedules (see `schedule_analyzer::Schedule`);
//! output is pretty-printed JSON. Logs go to stderr.
//!
//! ## Usage
//!
//! ```sh
//! # Full comparison report (stdin → stdout)
//! cat schedules.json | schedcmp compare
//!
//! # Only cross-schedule conflicts, from file to file, with a raised slot limit
//! schedcmp conflicts -i schedules.json -o conflicts.json --max-slots 20000
//!
//! # Common free time on Mon/Wed/Fri afternoons, at least 90 minutes
//! schedcmp free-time -i schedules.json --work-days 1,3,5 --work-start 12:00 --min-free 90
//!
//! # Earliest common free window only
//! schedcmp free-time -i schedules.json --first
//!
//! # Window settings from a JSON config file, with a flag override
//! schedcmp compare -i schedules.json --config window.json --work-end 20:00
//!
//! # Debug logging
//! RUST_LOG=schedule_analyzer=trace schedcmp busy -i schedules.json
//! ```

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use schedule_analyzer::{AnalyzerOptions, Schedule};
use serde::Serialize;
use std::io::{self, Read};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "schedcmp",
    version,
    about = "Compare weekly course schedules: conflicts, common courses, common free time"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v debug, -vv trace); overrides RUST_LOG
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Args)]
struct IoArgs {
    /// Input JSON file with an array of schedules (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,
    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,
}

#[derive(Args)]
struct WindowArgs {
    /// JSON file with analyzer options (workDays, workHourStart, workHourEnd, minFreeMinutes, maxTotalSlots)
    #[arg(long)]
    config: Option<String>,
    /// Comma-separated days searched for free time (0 = Sunday .. 6 = Saturday)
    #[arg(long, value_delimiter = ',')]
    work_days: Option<Vec<u8>>,
    /// Start of the daily work window, HH:MM
    #[arg(long)]
    work_start: Option<String>,
    /// End of the daily work window, HH:MM
    #[arg(long)]
    work_end: Option<String>,
    /// Minimum free window to report, in minutes
    #[arg(long)]
    min_free: Option<u32>,
    /// Reject input with more slots than this across all schedules
    #[arg(long)]
    max_slots: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Full comparison report: common courses, conflicts, free time, statistics
    Compare {
        #[command(flatten)]
        io: IoArgs,
        #[command(flatten)]
        window: WindowArgs,
    },
    /// Overlapping slots between different schedules
    Conflicts {
        #[command(flatten)]
        io: IoArgs,
        #[command(flatten)]
        window: WindowArgs,
    },
    /// Windows of the work week where every schedule is free
    FreeTime {
        #[command(flatten)]
        io: IoArgs,
        #[command(flatten)]
        window: WindowArgs,
        /// Print only the earliest qualifying window (or null)
        #[arg(long)]
        first: bool,
    },
    /// Merged busy blocks per work day with the number of schedules involved
    Busy {
        #[command(flatten)]
        io: IoArgs,
        #[command(flatten)]
        window: WindowArgs,
    },
    /// Course names shared by every schedule
    Courses {
        #[command(flatten)]
        io: IoArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Compare { io, window } => {
            let schedules = read_schedules(io.input.as_deref())?;
            let options = window.resolve()?;
            let report = schedule_analyzer::compare_schedules(&schedules, &options)
                .context("Failed to compare schedules")?;
            info!(
                conflicts = report.statistics.conflict_count,
                free_slots = report.statistics.common_free_slot_count,
                "comparison finished"
            );
            write_json(io.output.as_deref(), &report)?;
        }
        Commands::Conflicts { io, window } => {
            let schedules = read_schedules(io.input.as_deref())?;
            let options = window.resolve()?;
            let conflicts = schedule_analyzer::find_time_conflicts(&schedules, &options)
                .context("Failed to detect conflicts")?;
            write_json(io.output.as_deref(), &conflicts)?;
        }
        Commands::FreeTime { io, window, first } => {
            let schedules = read_schedules(io.input.as_deref())?;
            let options = window.resolve()?;
            if first {
                let slot = schedule_analyzer::find_first_common_free_slot(
                    &schedules,
                    &options,
                    options.min_free_minutes,
                )
                .context("Failed to compute common free time")?;
                write_json(io.output.as_deref(), &slot)?;
            } else {
                let free = schedule_analyzer::find_common_free_time(&schedules, &options)
                    .context("Failed to compute common free time")?;
                write_json(io.output.as_deref(), &free)?;
            }
        }
        Commands::Busy { io, window } => {
            let schedules = read_schedules(io.input.as_deref())?;
            let options = window.resolve()?;
            let blocks = schedule_analyzer::find_busy_blocks(&schedules, &options)
                .context("Failed to compute busy blocks")?;
            write_json(io.output.as_deref(), &blocks)?;
        }
        Commands::Courses { io } => {
            let schedules = read_schedules(io.input.as_deref())?;
            let courses = schedule_analyzer::find_common_courses(&schedules)
                .context("Failed to find common courses")?;
            write_json(io.output.as_deref(), &courses)?;
        }
    }

    Ok(())
}

/// Install a stderr `fmt` subscriber.
///
/// `-v`/`-vv` force debug/trace; otherwise `RUST_LOG` applies, falling back to `warn`.
fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}

impl WindowArgs {
    /// Build analyzer options: defaults, then the config file, then flags.
    fn resolve(&self) -> Result<AnalyzerOptions> {
        let mut options = match self.config.as_deref() {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file: {}", path))?;
                serde_json::from_str(&raw)
                    .with_context(|| format!("Invalid config file: {}", path))?
            }
            None => AnalyzerOptions::default(),
        };

        if let Some(days) = &self.work_days {
            options.work_days = days.iter().copied().collect();
        }
        if let Some(start) = &self.work_start {
            options.work_hour_start = start.clone();
        }
        if let Some(end) = &self.work_end {
            options.work_hour_end = end.clone();
        }
        if let Some(min) = self.min_free {
            options.min_free_minutes = min;
        }
        if let Some(max) = self.max_slots {
            options.max_total_slots = max;
        }

        debug!(?options, "resolved analyzer options");
        Ok(options)
    }
}

fn read_schedules(path: Option<&str>) -> Result<Vec<Schedule>> {
    let raw = read_input(path)?;
    let schedules: Vec<Schedule> =
        serde_json::from_str(&raw).context("Input is not a JSON array of schedules")?;
    debug!(count = schedules.len(), "loaded schedules");
    Ok(schedules)
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

fn write_json<T: Serialize>(path: Option<&str>, value: &T) -> Result<()> {
    let pretty = serde_json::to_string_pretty(value)?;
    match path {
        Some(path) => {
            std::fs::write(path, pretty + "\n")
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", pretty);
        }
    }
    Ok(())
}
