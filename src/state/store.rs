use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{Connection, OptionalExtension};
#[cfg(test)]
use std::path::Path;
use std::path::PathBuf;
use tokio::task;
use tracing::{debug, info};

use crate::error::{AppError, AppResult};

/// Persistent string-to-string map
///
/// The screen itself only ever calls `remove`.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    // Nothing on the screen writes to the store yet
    #[allow(dead_code)]
    async fn get(&self, key: &str) -> AppResult<Option<String>>;
    #[allow(dead_code)]
    async fn set(&self, key: &str, value: &str) -> AppResult<()>;
    /// Removing a key that isn't there succeeds
    async fn remove(&self, key: &str) -> AppResult<()>;
}

/// SQLite-backed key-value store
///
/// Holds only the database path: every operation opens its own connection
/// on a blocking thread, so the store can be shared across async tasks.
pub struct SqliteStore {
    db_path: PathBuf,
}

impl SqliteStore {
    /// Open (or create) the store at `db_path` and initialize the schema.
    pub fn open(db_path: impl Into<PathBuf>) -> AppResult<Self> {
        let db_path = db_path.into();

        // Ensure the parent directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::Store(format!("Cannot create {}: {}", parent.display(), e))
            })?;
        }

        let conn = Connection::open(&db_path)?;
        init_schema(&conn)?;

        info!("📁 Store initialized at: {}", db_path.display());

        Ok(Self { db_path })
    }

    /// Get the path to the database file
    #[cfg(test)]
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Run a closure against a fresh connection on the blocking pool
    async fn with_connection<T, F>(&self, f: F) -> AppResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> rusqlite::Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || -> AppResult<T> {
            let conn = Connection::open(&db_path)?;
            Ok(f(&conn)?)
        })
        .await
        .map_err(|e| AppError::Store(format!("Task join error: {}", e)))?
    }
}

/// Create the key-value table if it doesn't exist
fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS kv (
            key             TEXT PRIMARY KEY,
            value           TEXT NOT NULL,
            updated_at      INTEGER NOT NULL
        )",
        [],
    )?;
    Ok(())
}

#[async_trait]
impl KeyValueStore for SqliteStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let key = key.to_string();
        self.with_connection(move |conn| {
            conn.query_row("SELECT value FROM kv WHERE key = ?1", [&key], |row| {
                row.get(0)
            })
            .optional()
        })
        .await
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let key = key.to_string();
        let value = value.to_string();
        self.with_connection(move |conn| {
            conn.execute(
                "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                rusqlite::params![key, value, Utc::now().timestamp()],
            )?;
            Ok(())
        })
        .await
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        let owned = key.to_string();
        let removed = self
            .with_connection(move |conn| conn.execute("DELETE FROM kv WHERE key = ?1", [&owned]))
            .await?;

        debug!("🗑️  Removed {} entr(y/ies) for key {}", removed, key);
        Ok(())
    }
}

// Implement Debug for better error messages
impl std::fmt::Debug for SqliteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteStore")
            .field("db_path", &self.db_path)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_temp() -> (tempfile::TempDir, SqliteStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = SqliteStore::open(dir.path().join("nested").join("kv.db")).unwrap();
        (dir, store)
    }

    #[tokio::test]
    async fn test_open_creates_parent_directory() {
        let (_dir, store) = open_temp();
        assert!(store.path().exists());
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let (_dir, store) = open_temp();

        store.set("favorite", "pug").await.unwrap();
        assert_eq!(store.get("favorite").await.unwrap(), Some("pug".to_string()));

        store.set("favorite", "corgi").await.unwrap();
        assert_eq!(store.get("favorite").await.unwrap(), Some("corgi".to_string()));
    }

    #[tokio::test]
    async fn test_remove_deletes_entry() {
        let (_dir, store) = open_temp();

        store.set("file:///a.png", "1").await.unwrap();
        store.remove("file:///a.png").await.unwrap();

        assert_eq!(store.get("file:///a.png").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_remove_missing_key_succeeds() {
        let (_dir, store) = open_temp();
        assert!(store.remove("file:///never-written.png").await.is_ok());
    }

    #[tokio::test]
    async fn test_data_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("kv.db");

        SqliteStore::open(&db_path)
            .unwrap()
            .set("k", "v")
            .await
            .unwrap();

        let reopened = SqliteStore::open(&db_path).unwrap();
        assert_eq!(reopened.get("k").await.unwrap(), Some("v".to_string()));
    }

    #[tokio::test]
    async fn test_unopenable_path_is_store_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory can't be opened as a database file
        let result = SqliteStore::open(dir.path());

        assert!(matches!(result, Err(AppError::Store(_))));
    }
}
