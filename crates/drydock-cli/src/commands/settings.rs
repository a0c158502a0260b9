use clap::{Args, Subcommand};
use drydock_core::UserSettings;

use super::common::open_store;

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Print the current reminder settings
    Show,
    /// Update reminder settings (omitted flags keep their value)
    Set(SetArgs),
}

#[derive(Args)]
pub struct SetArgs {
    /// Enable or disable the dinner fluid restriction reminder
    #[arg(long)]
    fluid_restriction: Option<bool>,
    /// Fluid restriction time, 24-hour HH:MM
    #[arg(long)]
    fluid_time: Option<String>,
    /// Enable or disable the bedtime bathroom reminder
    #[arg(long)]
    bathroom_reminder: Option<bool>,
    /// Bathroom reminder time, 24-hour HH:MM
    #[arg(long)]
    bathroom_time: Option<String>,
}

pub fn run(action: SettingsAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store()?;

    match action {
        SettingsAction::Show => {
            println!("{}", serde_json::to_string_pretty(store.settings())?);
        }
        SettingsAction::Set(args) => {
            let current = store.settings().clone();
            let settings = UserSettings {
                dinner_fluid_restriction: args
                    .fluid_restriction
                    .unwrap_or(current.dinner_fluid_restriction),
                dinner_fluid_time: validated_time(args.fluid_time)?
                    .unwrap_or(current.dinner_fluid_time),
                bedtime_bathroom_reminder: args
                    .bathroom_reminder
                    .unwrap_or(current.bedtime_bathroom_reminder),
                bedtime_bathroom_time: validated_time(args.bathroom_time)?
                    .unwrap_or(current.bedtime_bathroom_time),
            };
            // The store replaces settings as a whole unit.
            store.update_settings(settings);
            println!("{}", serde_json::to_string_pretty(store.settings())?);
        }
    }

    store.flush();
    Ok(())
}

/// Reminder times must be zero-padded 24-hour HH:MM, since the
/// scheduler compares them verbatim against the formatted clock minute.
fn validated_time(
    time: Option<String>,
) -> Result<Option<String>, Box<dyn std::error::Error>> {
    match time {
        None => Ok(None),
        Some(time) => {
            chrono::NaiveTime::parse_from_str(&time, "%H:%M")
                .map_err(|_| format!("invalid time '{time}', expected HH:MM"))?;
            if time.len() != 5 {
                return Err(format!("invalid time '{time}', expected zero-padded HH:MM").into());
            }
            Ok(Some(time))
        }
    }
}
