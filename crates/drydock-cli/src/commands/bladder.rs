use chrono::NaiveDate;
use clap::Subcommand;
use drydock_core::{BladderDaySummary, BladderHourEntry, BladderLog};

use super::common::open_store;

#[derive(Subcommand)]
pub enum BladderAction {
    /// Add an hour entry to a day's diary (defaults to today)
    Record {
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Hour of day, 0-23
        #[arg(long)]
        hour: u8,
        #[arg(long, default_value = "0")]
        intake_ml: u32,
        #[arg(long, default_value = "0")]
        output_ml: u32,
        #[arg(long)]
        urgency: bool,
        #[arg(long)]
        leakage: bool,
    },
    /// Print a day's diary (defaults to today)
    Show {
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Print a day's rolled-up summary (defaults to today)
    Summary {
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

pub fn run(action: BladderAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store()?;

    match action {
        BladderAction::Record {
            date,
            hour,
            intake_ml,
            output_ml,
            urgency,
            leakage,
        } => {
            if hour > 23 {
                return Err(format!("invalid hour {hour}, expected 0-23").into());
            }
            let date = date.unwrap_or_else(|| store.today());

            // The core replaces a day's log wholesale; merging the new
            // hour into the existing entries is the caller's job.
            let mut entries = store
                .bladder_log(date)
                .map(|log| log.entries.clone())
                .unwrap_or_default();
            entries.retain(|entry| entry.hour != hour);
            entries.push(BladderHourEntry {
                hour,
                intake_ml,
                output_ml,
                urgency,
                leakage,
            });
            entries.sort_by_key(|entry| entry.hour);

            let log = BladderLog { date, entries };
            println!("{}", serde_json::to_string_pretty(&log)?);
            store.save_bladder_log(log);
        }
        BladderAction::Show { date } => {
            let date = date.unwrap_or_else(|| store.today());
            match store.bladder_log(date) {
                Some(log) => println!("{}", serde_json::to_string_pretty(log)?),
                None => println!("no bladder diary for {date}"),
            }
        }
        BladderAction::Summary { date } => {
            let date = date.unwrap_or_else(|| store.today());
            match store.bladder_log(date) {
                Some(log) => {
                    let summary = BladderDaySummary::from_log(log);
                    println!("{}", serde_json::to_string_pretty(&summary)?);
                }
                None => println!("no bladder diary for {date}"),
            }
        }
    }

    store.flush();
    Ok(())
}
