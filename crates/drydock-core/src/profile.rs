//! User profile and reminder settings.
//!
//! Every field carries a serde default so a snapshot written by an
//! older build loads cleanly: missing fields fall back to their default
//! instead of failing the whole document.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Reminder configuration. Mutated as a whole unit by
/// [`crate::ProfileStore::update_settings`]. Times are local-time
/// strings in 24-hour `HH:MM` form, compared verbatim against the
/// clock's current minute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    #[serde(default = "default_true")]
    pub dinner_fluid_restriction: bool,
    #[serde(default = "default_fluid_time")]
    pub dinner_fluid_time: String,
    #[serde(default = "default_true")]
    pub bedtime_bathroom_reminder: bool,
    #[serde(default = "default_bathroom_time")]
    pub bedtime_bathroom_time: String,
}

/// Identity and cumulative progress. Owned exclusively by the store;
/// mutated only through its update operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default = "default_name")]
    pub name: String,
    /// Monotonically non-decreasing once awarded.
    #[serde(default)]
    pub stars: u32,
    /// Append-only; an earned badge is never removed.
    #[serde(default)]
    pub earned_badge_ids: Vec<String>,
    /// Cosmetic inventory, opaque to the core.
    #[serde(default)]
    pub purchased_item_ids: Vec<String>,
    /// Cosmetic slot -> item id, opaque to the core.
    #[serde(default)]
    pub equipped_items: HashMap<String, String>,
    #[serde(default)]
    pub settings: UserSettings,
}

/// Shallow-merge patch for the fields not covered by a dedicated
/// operation. Stars and badges have no patch field: the reward path is
/// their only writer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub purchased_item_ids: Option<Vec<String>>,
    #[serde(default)]
    pub equipped_items: Option<HashMap<String, String>>,
}

fn default_true() -> bool {
    true
}
fn default_fluid_time() -> String {
    "18:30".into()
}
fn default_bathroom_time() -> String {
    "21:00".into()
}
fn default_name() -> String {
    "Little Hero".into()
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            dinner_fluid_restriction: true,
            dinner_fluid_time: default_fluid_time(),
            bedtime_bathroom_reminder: true,
            bedtime_bathroom_time: default_bathroom_time(),
        }
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: default_name(),
            stars: 0,
            earned_badge_ids: Vec::new(),
            purchased_item_ids: Vec::new(),
            equipped_items: HashMap::new(),
            settings: UserSettings::default(),
        }
    }
}

impl UserProfile {
    /// Apply a shallow-merge patch: fields present in the patch replace
    /// the current value, absent fields are untouched.
    pub fn apply(&mut self, patch: ProfilePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(ids) = patch.purchased_item_ids {
            self.purchased_item_ids = ids;
        }
        if let Some(items) = patch.equipped_items {
            self.equipped_items = items;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_initial_profile() {
        let profile = UserProfile::default();
        assert_eq!(profile.name, "Little Hero");
        assert_eq!(profile.stars, 0);
        assert!(profile.earned_badge_ids.is_empty());
        assert!(profile.settings.dinner_fluid_restriction);
        assert_eq!(profile.settings.dinner_fluid_time, "18:30");
        assert!(profile.settings.bedtime_bathroom_reminder);
        assert_eq!(profile.settings.bedtime_bathroom_time, "21:00");
    }

    #[test]
    fn partial_document_merges_over_defaults() {
        // A snapshot from an older build that knew nothing about
        // cosmetics or settings.
        let profile: UserProfile =
            serde_json::from_str(r#"{"name": "Mina", "stars": 70}"#).unwrap();
        assert_eq!(profile.name, "Mina");
        assert_eq!(profile.stars, 70);
        assert!(profile.purchased_item_ids.is_empty());
        assert_eq!(profile.settings, UserSettings::default());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"stars": 5, "future_field": {"x": 1}}"#).unwrap();
        assert_eq!(profile.stars, 5);
    }

    #[test]
    fn patch_touches_only_present_fields() {
        let mut profile = UserProfile::default();
        profile.stars = 90;

        profile.apply(ProfilePatch {
            name: Some("Deniz".into()),
            ..Default::default()
        });
        assert_eq!(profile.name, "Deniz");
        assert_eq!(profile.stars, 90);

        let mut equipped = HashMap::new();
        equipped.insert("hat".to_string(), "red_cap".to_string());
        profile.apply(ProfilePatch {
            equipped_items: Some(equipped),
            ..Default::default()
        });
        assert_eq!(profile.name, "Deniz");
        assert_eq!(profile.equipped_items.get("hat").unwrap(), "red_cap");
    }
}
