//! Time-of-day reminder scheduler.
//!
//! A wall-clock poller with no internal threads - the caller invokes
//! [`AlarmScheduler::tick`] on a fixed interval (10 seconds is plenty;
//! the granularity only needs to be finer than one minute) and forwards
//! any returned [`AlarmEvent`] to the presentation layer. Dropping the
//! scheduler when the owning session ends releases everything; no timer
//! outlives it.

use std::sync::Arc;
use std::time::Duration;

use crate::clock::Clock;
use crate::events::{AlarmEvent, ReminderKind};
use crate::profile::UserSettings;

/// Suggested interval between [`AlarmScheduler::tick`] calls.
pub const RECOMMENDED_TICK: Duration = Duration::from_secs(10);

/// Minute-matching poller for the two configured reminder times.
pub struct AlarmScheduler {
    clock: Arc<dyn Clock>,
    /// Most recent `HH:MM` for which *any* alarm fired. The guard is
    /// shared across both reminder kinds: when both are configured for
    /// the same minute, only the fluid reminder fires that minute.
    last_fired_minute: Option<String>,
}

impl AlarmScheduler {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            last_fired_minute: None,
        }
    }

    /// Compare the current minute against the configured reminder
    /// times. Returns at most one event per call; the same minute never
    /// fires twice.
    ///
    /// Settings are read fresh on every tick, so a tick that runs after
    /// an `update_settings` call sees the new configuration.
    pub fn tick(&mut self, settings: &UserSettings) -> Option<AlarmEvent> {
        let now = self.clock.now();
        let minute = now.format("%H:%M").to_string();

        if self.last_fired_minute.as_deref() == Some(minute.as_str()) {
            return None;
        }

        if settings.dinner_fluid_restriction && settings.dinner_fluid_time == minute {
            self.last_fired_minute = Some(minute);
            return Some(AlarmEvent::new(ReminderKind::FluidRestriction, now));
        }

        if settings.bedtime_bathroom_reminder && settings.bedtime_bathroom_time == minute {
            self.last_fired_minute = Some(minute);
            return Some(AlarmEvent::new(ReminderKind::BathroomVisit, now));
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use chrono::{Duration, Local, TimeZone};

    fn at(h: u32, m: u32, s: u32) -> chrono::DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 1, h, m, s).unwrap()
    }

    fn settings(fluid: &str, bathroom: &str) -> UserSettings {
        UserSettings {
            dinner_fluid_restriction: true,
            dinner_fluid_time: fluid.to_string(),
            bedtime_bathroom_reminder: true,
            bedtime_bathroom_time: bathroom.to_string(),
        }
    }

    #[test]
    fn fires_when_minute_matches() {
        let clock = Arc::new(ManualClock::at(at(18, 30, 5)));
        let mut scheduler = AlarmScheduler::new(clock);

        let event = scheduler.tick(&settings("18:30", "21:00")).unwrap();
        assert_eq!(event.kind, ReminderKind::FluidRestriction);
    }

    #[test]
    fn same_minute_fires_once() {
        let clock = Arc::new(ManualClock::at(at(21, 0, 0)));
        let mut scheduler = AlarmScheduler::new(Arc::clone(&clock) as Arc<dyn Clock>);
        let cfg = settings("18:30", "21:00");

        assert!(scheduler.tick(&cfg).is_some());
        // Later ticks within the same minute are suppressed.
        clock.advance(Duration::seconds(10));
        assert!(scheduler.tick(&cfg).is_none());
        clock.advance(Duration::seconds(40));
        assert!(scheduler.tick(&cfg).is_none());
    }

    #[test]
    fn coinciding_reminders_fire_only_the_first_kind() {
        let clock = Arc::new(ManualClock::at(at(20, 0, 0)));
        let mut scheduler = AlarmScheduler::new(Arc::clone(&clock) as Arc<dyn Clock>);
        let cfg = settings("20:00", "20:00");

        let event = scheduler.tick(&cfg).unwrap();
        assert_eq!(event.kind, ReminderKind::FluidRestriction);

        // The shared guard suppresses the bathroom reminder for the
        // rest of the minute.
        clock.advance(Duration::seconds(10));
        assert!(scheduler.tick(&cfg).is_none());
    }

    #[test]
    fn disabled_reminder_never_fires() {
        let clock = Arc::new(ManualClock::at(at(18, 30, 0)));
        let mut scheduler = AlarmScheduler::new(clock);
        let cfg = UserSettings {
            dinner_fluid_restriction: false,
            ..settings("18:30", "21:00")
        };

        assert!(scheduler.tick(&cfg).is_none());
    }

    #[test]
    fn non_matching_minute_does_not_arm_the_guard() {
        let clock = Arc::new(ManualClock::at(at(18, 29, 50)));
        let mut scheduler = AlarmScheduler::new(Arc::clone(&clock) as Arc<dyn Clock>);
        let cfg = settings("18:30", "21:00");

        assert!(scheduler.tick(&cfg).is_none());
        clock.advance(Duration::seconds(10));
        assert!(scheduler.tick(&cfg).is_some());
    }

    #[test]
    fn both_reminders_fire_in_their_own_minutes() {
        let clock = Arc::new(ManualClock::at(at(18, 30, 0)));
        let mut scheduler = AlarmScheduler::new(Arc::clone(&clock) as Arc<dyn Clock>);
        let cfg = settings("18:30", "21:00");

        assert_eq!(
            scheduler.tick(&cfg).unwrap().kind,
            ReminderKind::FluidRestriction
        );

        clock.set(at(21, 0, 3));
        assert_eq!(
            scheduler.tick(&cfg).unwrap().kind,
            ReminderKind::BathroomVisit
        );
    }

    #[test]
    fn settings_changes_apply_on_the_next_tick() {
        let clock = Arc::new(ManualClock::at(at(19, 15, 0)));
        let mut scheduler = AlarmScheduler::new(clock);

        assert!(scheduler.tick(&settings("18:30", "21:00")).is_none());
        // Reconfigured to the current minute; next tick picks it up.
        assert!(scheduler.tick(&settings("19:15", "21:00")).is_some());
    }
}
