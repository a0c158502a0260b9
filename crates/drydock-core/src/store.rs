//! Profile store: the single mutation surface.
//!
//! Owns the in-memory profile and both log collections for the lifetime
//! of the session. Every mutation runs to completion, then hands a full
//! snapshot to the persistence gateway on a background thread - the
//! in-memory state is authoritative while the session runs; the saved
//! snapshot only matters for the next cold start. Save failures are
//! logged and dropped, never surfaced to the caller.

use std::sync::Arc;
use std::thread::JoinHandle;

use chrono::NaiveDate;
use log::warn;

use crate::badges::{self, Badge};
use crate::clock::Clock;
use crate::logs::{BladderLog, DailyLog, DayStatus};
use crate::profile::{ProfilePatch, UserProfile, UserSettings};
use crate::reward::{self, RewardResult};
use crate::stats::ProfileStats;
use crate::storage::{Snapshot, SnapshotStore};

pub struct ProfileStore {
    profile: UserProfile,
    logs: Vec<DailyLog>,
    bladder_logs: Vec<BladderLog>,
    gateway: Arc<dyn SnapshotStore>,
    clock: Arc<dyn Clock>,
    pending_save: Option<JoinHandle<()>>,
}

impl ProfileStore {
    /// Load the last snapshot and build the store over it.
    ///
    /// Absent or unreadable snapshots fall back to defaults - a corrupt
    /// document costs the previous state, never a crash. No mutation or
    /// scheduler read happens before this returns, so a reminder can
    /// never fire against stale default settings.
    pub fn open(gateway: Arc<dyn SnapshotStore>, clock: Arc<dyn Clock>) -> Self {
        let snapshot = match gateway.load() {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!("snapshot load failed, starting from defaults: {err}");
                None
            }
        };
        let Snapshot {
            profile,
            logs,
            bladder_logs,
        } = snapshot.unwrap_or_default();

        Self {
            profile,
            logs,
            bladder_logs,
            gateway,
            clock,
            pending_save: None,
        }
    }

    // ── Mutations ────────────────────────────────────────────────────

    /// Record today's status. Returns the reward for presentation, or
    /// `None` if today is already logged (idempotent by date - the
    /// duplicate attempt changes nothing and does not persist).
    pub fn add_daily_log(&mut self, status: DayStatus) -> Option<RewardResult> {
        let today = self.clock.today();
        if self.logs.iter().any(|log| log.date == today) {
            return None;
        }

        let reward = reward::compute_reward(status, &self.logs);
        self.logs.push(DailyLog {
            date: today,
            status,
        });
        self.profile.stars += reward.total;

        let stats = ProfileStats::collect(&self.logs, self.profile.stars);
        for id in badges::newly_earned(&self.profile.earned_badge_ids, &stats) {
            self.profile.earned_badge_ids.push(id.to_string());
        }

        self.persist();
        Some(reward)
    }

    /// Save a bladder diary day, replacing any existing log for that
    /// date wholesale.
    pub fn save_bladder_log(&mut self, log: BladderLog) {
        self.bladder_logs.retain(|existing| existing.date != log.date);
        self.bladder_logs.push(log);
        self.persist();
    }

    /// Replace the reminder settings as a whole unit.
    pub fn update_settings(&mut self, settings: UserSettings) {
        self.profile.settings = settings;
        self.persist();
    }

    /// Shallow-merge a patch into the profile (name, cosmetics).
    pub fn update_profile(&mut self, patch: ProfilePatch) {
        self.profile.apply(patch);
        self.persist();
    }

    // ── Reads ────────────────────────────────────────────────────────

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn settings(&self) -> &UserSettings {
        &self.profile.settings
    }

    pub fn logs(&self) -> &[DailyLog] {
        &self.logs
    }

    pub fn bladder_logs(&self) -> &[BladderLog] {
        &self.bladder_logs
    }

    pub fn bladder_log(&self, date: NaiveDate) -> Option<&BladderLog> {
        self.bladder_logs.iter().find(|log| log.date == date)
    }

    pub fn is_logged_today(&self) -> bool {
        let today = self.clock.today();
        self.logs.iter().any(|log| log.date == today)
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn stats(&self) -> ProfileStats {
        ProfileStats::collect(&self.logs, self.profile.stars)
    }

    pub fn badge_catalog(&self) -> &'static [Badge] {
        &badges::CATALOG
    }

    /// Full current state as a persistable document.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            profile: self.profile.clone(),
            logs: self.logs.clone(),
            bladder_logs: self.bladder_logs.clone(),
        }
    }

    // ── Persistence ──────────────────────────────────────────────────

    /// Fire-and-forget save of the full snapshot. Saves chain on one
    /// another so they land in mutation order; the caller never blocks.
    fn persist(&mut self) {
        let snapshot = self.snapshot();
        let gateway = Arc::clone(&self.gateway);
        let previous = self.pending_save.take();
        self.pending_save = Some(std::thread::spawn(move || {
            if let Some(previous) = previous {
                let _ = previous.join();
            }
            if let Err(err) = gateway.save(&snapshot) {
                warn!("snapshot save failed: {err}");
            }
        }));
    }

    /// Wait for any in-flight save to land. Call before tearing the
    /// session down; a detached write does not survive process exit.
    pub fn flush(&mut self) {
        if let Some(pending) = self.pending_save.take() {
            let _ = pending.join();
        }
    }
}

impl Drop for ProfileStore {
    fn drop(&mut self) {
        self.flush();
    }
}
