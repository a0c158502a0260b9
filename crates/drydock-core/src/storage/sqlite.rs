//! SQLite-backed snapshot store.
//!
//! One `kv` table, one namespaced key. The snapshot document is stored
//! as JSON text and replaced wholesale on every save.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use rusqlite::{params, Connection, OptionalExtension};

use super::{data_dir, Snapshot, SnapshotStore};
use crate::error::StorageError;

const SNAPSHOT_KEY: &str = "drydock/profile/v1";

/// SQLite store at `~/.config/drydock/drydock.db`.
pub struct SqliteStore {
    // Saves run on a background thread; the connection is not Sync.
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open the store in the data directory, creating the database file
    /// and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, StorageError> {
        Self::open_at(data_dir()?.join("drydock.db"))
    }

    /// Open the store at an explicit path.
    pub fn open_at<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|source| StorageError::OpenFailed {
            path: PathBuf::from(path),
            source,
        })?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.migrate()?;
        Ok(store)
    }

    /// Open an in-memory store (for tests).
    #[cfg(test)]
    pub fn open_memory() -> Result<Self, StorageError> {
        let store = Self {
            conn: Mutex::new(Connection::open_in_memory()?),
        };
        store.migrate()?;
        Ok(store)
    }

    fn migrate(&self) -> Result<(), StorageError> {
        self.conn.lock().unwrap().execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(())
    }
}

impl SnapshotStore for SqliteStore {
    fn load(&self) -> Result<Option<Snapshot>, StorageError> {
        let conn = self.conn.lock().unwrap();
        let value: Option<String> = conn
            .query_row(
                "SELECT value FROM kv WHERE key = ?1",
                params![SNAPSHOT_KEY],
                |row| row.get(0),
            )
            .optional()?;
        match value {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    fn save(&self, snapshot: &Snapshot) -> Result<(), StorageError> {
        let json = serde_json::to_string(snapshot)?;
        self.conn.lock().unwrap().execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![SNAPSHOT_KEY, json],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logs::{DailyLog, DayStatus};
    use chrono::NaiveDate;

    #[test]
    fn cold_start_loads_nothing() {
        let store = SqliteStore::open_memory().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = SqliteStore::open_memory().unwrap();

        let mut snapshot = Snapshot::default();
        snapshot.profile.name = "Mina".into();
        snapshot.profile.stars = 150;
        snapshot.logs.push(DailyLog {
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            status: DayStatus::Wet,
        });

        store.save(&snapshot).unwrap();
        assert_eq!(store.load().unwrap().unwrap(), snapshot);
    }

    #[test]
    fn second_save_replaces_the_first() {
        let store = SqliteStore::open_memory().unwrap();

        let mut first = Snapshot::default();
        first.profile.stars = 10;
        store.save(&first).unwrap();

        let mut second = Snapshot::default();
        second.profile.stars = 60;
        store.save(&second).unwrap();

        assert_eq!(store.load().unwrap().unwrap().profile.stars, 60);
    }

    #[test]
    fn malformed_document_is_a_codec_error() {
        let store = SqliteStore::open_memory().unwrap();
        store
            .conn
            .lock()
            .unwrap()
            .execute(
                "INSERT INTO kv (key, value) VALUES (?1, ?2)",
                params![SNAPSHOT_KEY, "{not json"],
            )
            .unwrap();
        assert!(matches!(store.load(), Err(StorageError::Codec(_))));
    }
}
