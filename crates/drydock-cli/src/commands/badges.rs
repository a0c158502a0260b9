use clap::Subcommand;
use serde_json::json;

use super::common::open_store;

#[derive(Subcommand)]
pub enum BadgesAction {
    /// List the catalog with earned markers
    List,
    /// List only earned badges
    Earned,
}

pub fn run(action: BadgesAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store()?;
    let earned = &store.profile().earned_badge_ids;

    let rows: Vec<_> = store
        .badge_catalog()
        .iter()
        .filter(|badge| match action {
            BadgesAction::List => true,
            BadgesAction::Earned => earned.iter().any(|id| id == badge.id),
        })
        .map(|badge| {
            json!({
                "id": badge.id,
                "name": badge.name,
                "description": badge.description,
                "icon": badge.icon,
                "threshold": badge.threshold,
                "kind": badge.kind,
                "earned": earned.iter().any(|id| id == badge.id),
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}
