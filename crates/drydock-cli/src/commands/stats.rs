use clap::Subcommand;

use super::common::open_store;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Aggregate progress statistics
    Show,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store()?;

    match action {
        StatsAction::Show => {
            println!("{}", serde_json::to_string_pretty(&store.stats())?);
        }
    }
    Ok(())
}
