//! Daily log and bladder diary data model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Outcome of one tracked day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    Dry,
    Wet,
}

/// One calendar-date self-report. At most one per date; entries are
/// append-only and never mutated after the day is logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyLog {
    pub date: NaiveDate,
    pub status: DayStatus,
}

/// One hour row in a bladder diary day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BladderHourEntry {
    /// Hour of day, 0-23.
    pub hour: u8,
    pub intake_ml: u32,
    pub output_ml: u32,
    #[serde(default)]
    pub urgency: bool,
    #[serde(default)]
    pub leakage: bool,
}

/// Bladder diary for one calendar date.
///
/// At most one log per date; saving a log for an already-logged date
/// replaces it wholesale. Entries are keyed by hour but duplicate hours
/// may coexist - merging is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BladderLog {
    pub date: NaiveDate,
    #[serde(default)]
    pub entries: Vec<BladderHourEntry>,
}
