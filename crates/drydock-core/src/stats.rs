//! Aggregate statistics over the log collections.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::logs::{BladderLog, DailyLog, DayStatus};
use crate::reward;

/// The statistics badge thresholds are tested against. Computed from
/// the updated log collection and star total after a reward lands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStats {
    pub total_dry: u32,
    pub current_streak: u32,
    pub total_logs: u32,
    pub total_stars: u32,
}

impl ProfileStats {
    pub fn collect(logs: &[DailyLog], stars: u32) -> Self {
        Self {
            total_dry: logs
                .iter()
                .filter(|log| log.status == DayStatus::Dry)
                .count() as u32,
            current_streak: reward::current_streak(logs),
            total_logs: logs.len() as u32,
            total_stars: stars,
        }
    }
}

/// One day of the bladder diary rolled up for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BladderDaySummary {
    pub date: NaiveDate,
    pub entry_count: u32,
    pub total_intake_ml: u32,
    pub total_output_ml: u32,
    pub urgency_count: u32,
    pub leakage_count: u32,
}

impl BladderDaySummary {
    pub fn from_log(log: &BladderLog) -> Self {
        Self {
            date: log.date,
            entry_count: log.entries.len() as u32,
            total_intake_ml: log.entries.iter().map(|e| e.intake_ml).sum(),
            total_output_ml: log.entries.iter().map(|e| e.output_ml).sum(),
            urgency_count: log.entries.iter().filter(|e| e.urgency).count() as u32,
            leakage_count: log.entries.iter().filter(|e| e.leakage).count() as u32,
        }
    }
}
