use rusqlite::{Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

use crate::models::{KeyValueSlot, NOTES_KEY, NoteStore, SlotError};

/// Key-value slot backed by the `kv_store` table.
#[derive(Clone)]
pub struct SqliteSlot {
    connection: Arc<Mutex<Connection>>,
}

impl SqliteSlot {
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl KeyValueSlot for SqliteSlot {
    fn get(&self, key: &str) -> Result<Option<String>, SlotError> {
        let connection = self.connection.lock().map_err(|_| SlotError::Poisoned)?;
        let value = connection
            .query_row("SELECT value FROM kv_store WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SlotError> {
        let connection = self.connection.lock().map_err(|_| SlotError::Poisoned)?;
        connection.execute(
            "INSERT OR REPLACE INTO kv_store (key, value) VALUES (?1, ?2)",
            [key, value],
        )?;
        debug!(key, bytes = value.len(), "wrote slot");
        Ok(())
    }
}

pub struct Database {
    pub notes: NoteStore<SqliteSlot>,
}

impl Database {
    pub fn new<P: AsRef<Path>>(path: P) -> rusqlite::Result<Self> {
        Self::with_key(path, NOTES_KEY)
    }

    /// Like [`Database::new`], storing the note collection under `key`.
    pub fn with_key<P: AsRef<Path>>(path: P, key: &str) -> rusqlite::Result<Self> {
        info!(path = ?path.as_ref(), "opening database");

        let path_for_logging = path.as_ref().to_path_buf();

        if let Ok(abs_path) = std::fs::canonicalize(path.as_ref()) {
            debug!(path = ?abs_path, "absolute database path");
        }

        let connection = Connection::open(path)?;

        let _ = connection.execute_batch("PRAGMA synchronous = FULL");
        let _ = connection.query_row("PRAGMA journal_mode = DELETE", [], |row| {
            row.get::<_, String>(0)
        });
        debug!("database configured for reliability");

        connection.execute(
            "CREATE TABLE IF NOT EXISTS kv_store (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;

        if let Err(e) = connection.execute_batch("PRAGMA user_version = 1") {
            warn!(error = %e, "database might not be writable");
            if let Some(parent) = path_for_logging.parent() {
                match std::fs::metadata(parent) {
                    Ok(metadata) => {
                        warn!(permissions = ?metadata.permissions(), "directory permissions")
                    }
                    Err(e) => warn!(error = %e, "could not check directory permissions"),
                }
            }
        }

        let connection = Arc::new(Mutex::new(connection));

        Ok(Self {
            notes: NoteStore::with_key(SqliteSlot::new(connection), key),
        })
    }

    pub fn in_memory() -> rusqlite::Result<Self> {
        Self::new(":memory:")
    }

    /// Raw value currently stored under the notes key, bypassing parsing.
    pub fn raw_notes(&self) -> Result<Option<String>, SlotError> {
        self.notes.slot().get(self.notes.key())
    }
}
