//! Injectable time source.
//!
//! The store and the scheduler never read the system clock directly -
//! they ask a [`Clock`]. Production code injects [`SystemClock`]; tests
//! inject [`ManualClock`] and move time by hand, so scheduler ticks can
//! be driven deterministically without real time passing.

use std::sync::Mutex;

use chrono::{DateTime, Local, NaiveDate};

/// Source of the current local date and time.
///
/// Daily logs and reminder minutes are defined in the user's local
/// timezone, so implementations return `DateTime<Local>`.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;

    /// Today's calendar date (serializes as `YYYY-MM-DD`).
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// The current minute formatted as `HH:MM`, the granularity at
    /// which reminders match.
    fn minute(&self) -> String {
        self.now().format("%H:%M").to_string()
    }
}

/// Wall-clock implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Settable clock for tests and deterministic replays.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Local>>,
}

impl ManualClock {
    pub fn at(now: DateTime<Local>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Local>) {
        *self.now.lock().unwrap() = now;
    }

    pub fn advance(&self, delta: chrono::Duration) {
        let mut now = self.now.lock().unwrap();
        *now = *now + delta;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Local> {
        *self.now.lock().unwrap()
    }
}
