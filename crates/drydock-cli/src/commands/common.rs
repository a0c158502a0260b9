use std::sync::Arc;

use drydock_core::{Clock, ProfileStore, SnapshotStore, SqliteStore, SystemClock};

/// Open the profile store over the default database and wall clock.
pub fn open_store() -> Result<ProfileStore, Box<dyn std::error::Error>> {
    let gateway: Arc<dyn SnapshotStore> = Arc::new(SqliteStore::open()?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    Ok(ProfileStore::open(gateway, clock))
}
