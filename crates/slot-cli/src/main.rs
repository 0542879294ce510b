//! `slots` CLI — find free meeting slots in a JSON-described day.
//!
//! ## Usage
//!
//! ```sh
//! # Find slots for the request embedded in the document (stdin → stdout)
//! cat day.json | slots find
//!
//! # Find slots from file to file
//! slots find -i day.json -o slots.json
//!
//! # Override the embedded request
//! slots find -i day.json --attendee alice --attendee bob --duration 30
//!
//! # Clock-style durations also work
//! slots find -i day.json --duration 1:30
//!
//! # Show the merged busy schedule instead of the free slots
//! slots busy -i day.json
//! ```
//!
//! The input document is `{ "events": [...], "request": {...} }`; times are
//! minutes from the start of the day, e.g.
//! `{"time_range": {"start": 600, "duration": 60}, "attendees": ["alice"]}`.

use anyhow::{bail, Context, Result};
use chrono::{NaiveTime, Timelike};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::io::{self, Read};

use slot_engine::{
    conflicting_ranges, find_meeting_times, normalize, Event, MeetingRequest,
};

#[derive(Parser)]
#[command(name = "slots", version, about = "Free-time finder for meeting scheduling")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find every free slot long enough for the requested meeting
    Find {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Mandatory attendee (repeatable); replaces the document's request attendees
        #[arg(long = "attendee")]
        attendees: Vec<String>,
        /// Meeting duration in minutes, or clock-style "H:MM"
        #[arg(long)]
        duration: Option<String>,
    },
    /// Show the normalized busy schedule for the mandatory attendees
    Busy {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Mandatory attendee (repeatable); replaces the document's request attendees
        #[arg(long = "attendee")]
        attendees: Vec<String>,
    },
}

/// The input document: a day of events plus an optional embedded request.
/// The request may be omitted when `--attendee`/`--duration` supply one.
#[derive(Deserialize)]
struct QueryDocument {
    events: Vec<Event>,
    #[serde(default)]
    request: Option<MeetingRequest>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Find {
            input,
            output,
            attendees,
            duration,
        } => {
            let doc = read_document(input.as_deref())?;
            let request = resolve_request(doc.request, &attendees, duration.as_deref())?;

            let slots = find_meeting_times(&doc.events, &request);
            let json = serde_json::to_string_pretty(&slots)?;
            write_output(output.as_deref(), &json)?;
        }
        Commands::Busy {
            input,
            output,
            attendees,
        } => {
            let doc = read_document(input.as_deref())?;
            // Duration is irrelevant for the busy view; zero is a placeholder.
            let request = resolve_request(doc.request, &attendees, Some("0"))?;

            let busy = normalize(&conflicting_ranges(
                &doc.events,
                &request.mandatory_attendees,
            ));
            let json = serde_json::to_string_pretty(&busy)?;
            write_output(output.as_deref(), &json)?;
        }
    }

    Ok(())
}

/// Combine the document's embedded request with any command-line overrides.
///
/// `--attendee` replaces the attendee set wholesale; `--duration` replaces
/// the duration. A document without an embedded request needs both.
fn resolve_request(
    embedded: Option<MeetingRequest>,
    attendees: &[String],
    duration: Option<&str>,
) -> Result<MeetingRequest> {
    let duration = match duration {
        Some(raw) => Some(parse_duration(raw)?),
        None => None,
    };

    match embedded {
        Some(mut request) => {
            if !attendees.is_empty() {
                request.mandatory_attendees = attendees.iter().cloned().collect();
            }
            if let Some(minutes) = duration {
                request.duration = minutes;
            }
            Ok(request)
        }
        None => {
            let Some(minutes) = duration else {
                bail!("document has no request; pass --attendee and --duration");
            };
            if attendees.is_empty() {
                bail!("document has no request; pass --attendee and --duration");
            }
            Ok(MeetingRequest::new(attendees.iter().cloned(), minutes))
        }
    }
}

/// Parse a duration given as plain minutes ("90") or clock-style ("1:30").
fn parse_duration(raw: &str) -> Result<i32> {
    if let Ok(minutes) = raw.parse::<i32>() {
        if minutes < 0 {
            bail!("duration must not be negative: {}", raw);
        }
        return Ok(minutes);
    }

    let clock = NaiveTime::parse_from_str(raw, "%H:%M")
        .with_context(|| format!("invalid duration '{}': expected minutes or H:MM", raw))?;
    Ok((clock.hour() * 60 + clock.minute()) as i32)
}

fn read_document(path: Option<&str>) -> Result<QueryDocument> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            buf
        }
    };

    serde_json::from_str(&raw).context("Failed to parse query document")
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
