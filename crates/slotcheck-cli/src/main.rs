//! `slotcheck` CLI — validate class-scheduling drafts from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Submission verdict for a draft (stdin → stdout)
//! cat draft.json | slotcheck check
//!
//! # Check a draft file
//! slotcheck check -i draft.json
//!
//! # Per-slot issue report, human or machine readable
//! slotcheck issues -i draft.json
//! slotcheck issues -i draft.json --json
//!
//! # Dates a picker should disable while editing day 0
//! slotcheck excluded -i draft.json --day 0
//! ```

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::{self, Read};
use std::process;

use slotcheck_core::{
    excluded_dates, has_conflict, validate_for_submission, ScheduleCollection, TimeOfDay,
};

#[derive(Parser)]
#[command(name = "slotcheck", version, about = "Class-scheduling draft validator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the submission verdict for a draft
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Report conflict and duration flags for every slot
    Issues {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Emit machine-readable JSON instead of the line report
        #[arg(long)]
        json: bool,
    },
    /// List dates a picker should disable while editing one day
    Excluded {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Index of the day being edited
        #[arg(long)]
        day: usize,
    },
}

/// One row of the `issues` report.
#[derive(Serialize)]
struct SlotReport {
    day: usize,
    slot: usize,
    date: Option<NaiveDate>,
    start: String,
    end: String,
    conflict: bool,
    duration: bool,
}

impl SlotReport {
    fn human(&self) -> String {
        let date = self
            .date
            .map_or_else(|| "no date".to_string(), |d| d.to_string());
        let status = match (self.conflict, self.duration) {
            (true, true) => "conflict, duration",
            (true, false) => "conflict",
            (false, true) => "duration",
            (false, false) => "ok",
        };
        format!(
            "day {} ({}) slot {} {}-{}: {}",
            self.day, date, self.slot, self.start, self.end, status
        )
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { input } => {
            let draft = load_draft(input.as_deref())?;
            let verdict = validate_for_submission(&draft);
            println!("{}", serde_json::to_string_pretty(&verdict)?);
            if let Some(reason) = verdict.reason() {
                eprintln!("rejected: {}", reason.message());
                process::exit(1);
            }
        }
        Commands::Issues { input, json } => {
            let draft = load_draft(input.as_deref())?;
            let report = build_report(&draft);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for row in &report {
                    println!("{}", row.human());
                }
            }
        }
        Commands::Excluded { input, day } => {
            let draft = load_draft(input.as_deref())?;
            if day >= draft.days.len() {
                anyhow::bail!(
                    "day index {} out of range (draft has {} days)",
                    day,
                    draft.days.len()
                );
            }
            for date in excluded_dates(&draft, day) {
                println!("{}", date);
            }
        }
    }

    Ok(())
}

/// Probe every addressable slot in the draft, the same per-slot scan the
/// scheduling form runs on each render.
fn build_report(draft: &ScheduleCollection) -> Vec<SlotReport> {
    let mut report = Vec::new();
    for (d, day) in draft.days.iter().enumerate() {
        for (s, slot) in day.slots.iter().enumerate() {
            report.push(SlotReport {
                day: d,
                slot: s,
                date: day.date,
                start: fmt_time(slot.start),
                end: fmt_time(slot.end),
                conflict: has_conflict(draft, d, s),
                duration: slot.exceeds_max_duration(),
            });
        }
    }
    report
}

fn fmt_time(time: Option<TimeOfDay>) -> String {
    time.map_or_else(|| "--:--".to_string(), |t| t.to_string())
}

fn load_draft(path: Option<&str>) -> Result<ScheduleCollection> {
    let raw = read_input(path)?;
    serde_json::from_str(&raw).context("Failed to parse schedule draft JSON")
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
