//! Reward and streak computation.
//!
//! Pure functions: given today's status and the prior log collection,
//! compute the point award and the resulting streak. No clock access -
//! the dates already embedded in the logs are the only time input.

use serde::{Deserialize, Serialize};

use crate::logs::{DailyLog, DayStatus};

/// Points for logging a dry day.
pub const DRY_BASE_POINTS: u32 = 50;
/// Points for logging a wet day (honest reporting still earns).
pub const WET_BASE_POINTS: u32 = 20;

/// Outcome of one day's reward computation. Ephemeral - drives a
/// one-time confirmation in the presentation layer and is superseded by
/// the next log event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardResult {
    pub base: u32,
    pub bonus: u32,
    pub total: u32,
    pub streak: u32,
}

/// Current streak: the run of `dry` entries scanning the collection
/// most-recent-date-first, stopping at the first `wet` entry.
///
/// The scan counts consecutive *entries*, not consecutive calendar
/// days - skipped days do not break a streak.
pub fn current_streak(logs: &[DailyLog]) -> u32 {
    let mut sorted: Vec<&DailyLog> = logs.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
        .iter()
        .take_while(|log| log.status == DayStatus::Dry)
        .count() as u32
}

/// Compute the reward for logging `status` today.
///
/// `prior_logs` must not yet contain today's entry; the store enforces
/// the one-entry-per-date invariant before calling.
pub fn compute_reward(status: DayStatus, prior_logs: &[DailyLog]) -> RewardResult {
    let (base, streak, bonus) = match status {
        DayStatus::Wet => (WET_BASE_POINTS, 0, 0),
        DayStatus::Dry => {
            let streak = 1 + current_streak(prior_logs);
            (DRY_BASE_POINTS, streak, streak_bonus(streak))
        }
    };
    RewardResult {
        base,
        bonus,
        total: base + bonus,
        streak,
    }
}

/// Milestone bonus for a dry-day streak. Exact milestones win over the
/// every-fifth rule; no stacking.
fn streak_bonus(streak: u32) -> u32 {
    match streak {
        3 => 30,
        7 => 100,
        15 => 250,
        30 => 500,
        s if s > 1 && s % 5 == 0 => 50,
        _ => 0,
    }
}
