use std::sync::Arc;

use drydock_core::{AlarmScheduler, Clock, SystemClock, RECOMMENDED_TICK};
use log::debug;

use super::common::open_store;

/// Foreground reminder loop: polls the clock every 10 seconds and
/// prints each alarm event as JSON. Ctrl-C ends the session, which
/// releases the scheduler with it.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store()?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let mut scheduler = AlarmScheduler::new(Arc::clone(&clock));

    eprintln!(
        "watching reminders (fluid {} at {}, bathroom {} at {})",
        on_off(store.settings().dinner_fluid_restriction),
        store.settings().dinner_fluid_time,
        on_off(store.settings().bedtime_bathroom_reminder),
        store.settings().bedtime_bathroom_time,
    );

    loop {
        if let Some(event) = scheduler.tick(store.settings()) {
            println!("{}", serde_json::to_string_pretty(&event)?);
        } else {
            debug!("tick {} - no alarm", clock.minute());
        }
        std::thread::sleep(RECOMMENDED_TICK);
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}
