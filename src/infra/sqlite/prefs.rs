use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use crate::infra::sqlite::schema::{init_db, open_connection};
use crate::usecase::ports::preferences::{PreferenceStore, PrefsError};

pub struct SqlitePreferenceStore {
    pub db_path: PathBuf,
}

impl SqlitePreferenceStore {
    /// Creates the database file and schema if they do not exist yet.
    pub fn open(db_path: impl Into<PathBuf>) -> Result<Self> {
        let db_path = db_path.into();
        init_db(&db_path)?;
        Ok(Self { db_path })
    }
}

pub fn load_preference(db_path: &Path, key: &str) -> Result<Option<String>> {
    let conn = open_connection(db_path)?;
    conn.query_row(
        "SELECT value FROM preference WHERE key = ?1",
        [key],
        |row| row.get::<_, String>(0),
    )
    .optional()
    .with_context(|| format!("failed to load preference: {key}"))
}

pub fn upsert_preference(db_path: &Path, key: &str, value: &str) -> Result<()> {
    let conn = open_connection(db_path)?;
    conn.execute(
        "INSERT INTO preference(key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = CURRENT_TIMESTAMP",
        params![key, value],
    )
    .with_context(|| format!("failed to save preference: {key}"))?;
    Ok(())
}

impl PreferenceStore for SqlitePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError> {
        load_preference(&self.db_path, key).map_err(|err| PrefsError::Storage(format!("{err:#}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        upsert_preference(&self.db_path, key, value)
            .map_err(|err| PrefsError::Storage(format!("{err:#}")))
    }
}
