//! Achievement badges.
//!
//! The catalog is immutable global configuration, identical across all
//! installations - it is never persisted per-instance. Only the earned
//! ids live in the profile, and once an id is in there it never leaves,
//! even if the underlying statistic could somehow fall back below the
//! threshold.

use serde::Serialize;

use crate::stats::ProfileStats;

/// Which aggregate statistic a badge's threshold is tested against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeKind {
    TotalDry,
    StreakDry,
    TotalLogs,
    TotalStars,
}

/// Static catalog entry. `icon` is an opaque identifier the
/// presentation layer resolves.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Badge {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub threshold: u32,
    pub kind: BadgeKind,
}

/// The fixed badge catalog.
pub static CATALOG: [Badge; 8] = [
    Badge {
        id: "star_50",
        name: "Star Collector",
        description: "Gather 50 stars",
        icon: "auto_awesome",
        threshold: 50,
        kind: BadgeKind::TotalStars,
    },
    Badge {
        id: "star_150",
        name: "Silver Wings",
        description: "Gather 150 stars to take to the sky",
        icon: "airplanemode_active",
        threshold: 150,
        kind: BadgeKind::TotalStars,
    },
    Badge {
        id: "star_300",
        name: "Golden Captain",
        description: "Gather 300 stars to sail through storms",
        icon: "military_tech",
        threshold: 300,
        kind: BadgeKind::TotalStars,
    },
    Badge {
        id: "star_600",
        name: "Galaxy Commander",
        description: "Gather 600 stars between the stars",
        icon: "rocket_launch",
        threshold: 600,
        kind: BadgeKind::TotalStars,
    },
    Badge {
        id: "star_1200",
        name: "Sun Emperor",
        description: "Gather a legendary 1200 stars",
        icon: "workspace_premium",
        threshold: 1200,
        kind: BadgeKind::TotalStars,
    },
    Badge {
        id: "dis_3",
        name: "Honest Hero",
        description: "Keep the log for 3 days",
        icon: "edit_calendar",
        threshold: 3,
        kind: BadgeKind::TotalLogs,
    },
    Badge {
        id: "dis_10",
        name: "Journey Leader",
        description: "Keep the log for 10 days",
        icon: "history_edu",
        threshold: 10,
        kind: BadgeKind::TotalLogs,
    },
    Badge {
        id: "dry_10",
        name: "Sunny Warrior",
        description: "Reach 10 dry days in total",
        icon: "wb_sunny",
        threshold: 10,
        kind: BadgeKind::TotalDry,
    },
];

impl Badge {
    /// The statistic this badge's threshold is compared against.
    fn statistic(&self, stats: &ProfileStats) -> u32 {
        match self.kind {
            BadgeKind::TotalDry => stats.total_dry,
            BadgeKind::StreakDry => stats.current_streak,
            BadgeKind::TotalLogs => stats.total_logs,
            BadgeKind::TotalStars => stats.total_stars,
        }
    }
}

/// Evaluate which catalog badges newly qualify.
///
/// Returns the ids of badges not in `earned_ids` whose statistic has
/// reached the threshold. Never removes ids; calling again with the
/// merged set and the same stats yields an empty result.
pub fn newly_earned(earned_ids: &[String], stats: &ProfileStats) -> Vec<&'static str> {
    CATALOG
        .iter()
        .filter(|badge| !earned_ids.iter().any(|id| id == badge.id))
        .filter(|badge| badge.statistic(stats) >= badge.threshold)
        .map(|badge| badge.id)
        .collect()
}
