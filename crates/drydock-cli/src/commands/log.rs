use clap::Subcommand;
use drydock_core::DayStatus;

use super::common::open_store;

#[derive(Subcommand)]
pub enum LogAction {
    /// Record a dry day
    Dry,
    /// Record a wet day
    Wet,
    /// Show today's log state
    Today,
}

pub fn run(action: LogAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store()?;

    match action {
        LogAction::Dry => record(&mut store, DayStatus::Dry)?,
        LogAction::Wet => record(&mut store, DayStatus::Wet)?,
        LogAction::Today => {
            let today = store.today();
            let entry = store.logs().iter().find(|log| log.date == today);
            match entry {
                Some(log) => println!("{}", serde_json::to_string_pretty(log)?),
                None => println!("no entry for {today} yet"),
            }
        }
    }

    store.flush();
    Ok(())
}

fn record(
    store: &mut drydock_core::ProfileStore,
    status: DayStatus,
) -> Result<(), Box<dyn std::error::Error>> {
    match store.add_daily_log(status) {
        Some(reward) => println!("{}", serde_json::to_string_pretty(&reward)?),
        None => println!("already logged today - one entry per day"),
    }
    Ok(())
}
