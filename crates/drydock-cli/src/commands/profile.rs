use std::collections::HashMap;

use clap::Subcommand;
use drydock_core::ProfilePatch;

use super::common::open_store;

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Print the profile as JSON
    Show,
    /// Change the display name
    Rename { name: String },
    /// Equip a cosmetic item into a slot
    Equip { slot: String, item: String },
}

pub fn run(action: ProfileAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store()?;

    match action {
        ProfileAction::Show => {
            println!("{}", serde_json::to_string_pretty(store.profile())?);
        }
        ProfileAction::Rename { name } => {
            store.update_profile(ProfilePatch {
                name: Some(name),
                ..Default::default()
            });
            println!("{}", serde_json::to_string_pretty(store.profile())?);
        }
        ProfileAction::Equip { slot, item } => {
            let mut equipped: HashMap<String, String> =
                store.profile().equipped_items.clone();
            equipped.insert(slot, item);
            store.update_profile(ProfilePatch {
                equipped_items: Some(equipped),
                ..Default::default()
            });
            println!("{}", serde_json::to_string_pretty(store.profile())?);
        }
    }

    store.flush();
    Ok(())
}
