//! Snapshot persistence.
//!
//! The whole durable state is one JSON document - profile plus both log
//! collections - written as a unit on every mutation and read back once
//! at startup. Implementations only need `load` and `save`; everything
//! else (merging, defaulting, orchestration) lives in the store.

mod sqlite;

pub use sqlite::SqliteStore;

use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::logs::{BladderLog, DailyLog};
use crate::profile::UserProfile;

/// The persisted state document.
///
/// Every field defaults, so a snapshot written by an older build loads
/// with missing pieces filled in rather than failing; unknown extra
/// fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub profile: UserProfile,
    #[serde(default)]
    pub logs: Vec<DailyLog>,
    #[serde(default)]
    pub bladder_logs: Vec<BladderLog>,
}

/// Durable key-value boundary for the snapshot document.
///
/// Saves run on a background thread, so implementations must be
/// shareable across threads.
pub trait SnapshotStore: Send + Sync {
    /// Load the last saved snapshot, or `None` on a cold start.
    fn load(&self) -> Result<Option<Snapshot>, StorageError>;

    /// Persist the full snapshot, replacing any previous one.
    fn save(&self, snapshot: &Snapshot) -> Result<(), StorageError>;
}

/// In-memory store for tests and embedding. Counts saves so tests can
/// assert that no-op mutations skip persistence.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    slot: Option<Snapshot>,
    save_count: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-load a snapshot, as if a previous session had saved it.
    pub fn seeded(snapshot: Snapshot) -> Self {
        let store = Self::default();
        store.inner.lock().unwrap().slot = Some(snapshot);
        store
    }

    pub fn save_count(&self) -> usize {
        self.inner.lock().unwrap().save_count
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Result<Option<Snapshot>, StorageError> {
        Ok(self.inner.lock().unwrap().slot.clone())
    }

    fn save(&self, snapshot: &Snapshot) -> Result<(), StorageError> {
        let mut inner = self.inner.lock().unwrap();
        inner.slot = Some(snapshot.clone());
        inner.save_count += 1;
        Ok(())
    }
}

/// Returns `~/.config/drydock[-dev]/` based on DRYDOCK_ENV.
///
/// Set DRYDOCK_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("DRYDOCK_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("drydock-dev")
    } else {
        base_dir.join("drydock")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
