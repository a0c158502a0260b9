//! Alarm events emitted by the reminder scheduler.
//!
//! Events are ephemeral: the presentation layer consumes them (modal,
//! audio, speech) and owns dismissal. Nothing here is persisted.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// The two independently configurable reminders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderKind {
    /// Evening fluid-intake cutoff.
    FluidRestriction,
    /// Last bathroom visit before sleep.
    BathroomVisit,
}

impl ReminderKind {
    pub fn title(&self) -> &'static str {
        match self {
            ReminderKind::FluidRestriction => "Fluid curfew!",
            ReminderKind::BathroomVisit => "Bathroom time!",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ReminderKind::FluidRestriction => {
                "Dinner is over - time to hold off on drinks until morning, hero!"
            }
            ReminderKind::BathroomVisit => {
                "One last stop before sleep: don't forget to visit the bathroom!"
            }
        }
    }

    /// Opaque icon identifier the presentation layer resolves.
    pub fn icon(&self) -> &'static str {
        match self {
            ReminderKind::FluidRestriction => "local_drink",
            ReminderKind::BathroomVisit => "wc",
        }
    }
}

/// One reminder firing. Emitted at most once per qualifying minute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmEvent {
    pub kind: ReminderKind,
    pub title: String,
    pub message: String,
    pub icon: String,
    pub at: DateTime<Local>,
}

impl AlarmEvent {
    pub fn new(kind: ReminderKind, at: DateTime<Local>) -> Self {
        Self {
            kind,
            title: kind.title().to_string(),
            message: kind.message().to_string(),
            icon: kind.icon().to_string(),
            at,
        }
    }
}
