//! Local storage contract and SQLite-backed implementation.

use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StorageResult<T> = Result<T, StorageError>;

/// Transport-level storage failure.
#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
    /// Storage key is blank after trim.
    InvalidKey,
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidKey => write!(f, "storage key must not be blank"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidKey => None,
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Browser-style string key/value store.
pub trait LocalStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;
    fn remove_item(&self, key: &str) -> StorageResult<()>;
}

impl<S: LocalStorage + ?Sized> LocalStorage for &S {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        (**self).remove_item(key)
    }
}

/// SQLite-backed local storage over the `local_storage` table.
pub struct SqliteLocalStorage<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteLocalStorage<'conn> {
    /// Wraps a connection returned by `open_db`/`open_db_in_memory`.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Lists stored keys in ascending order.
    pub fn keys(&self) -> StorageResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT key FROM local_storage ORDER BY key ASC;")?;
        let keys = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(keys)
    }
}

impl LocalStorage for SqliteLocalStorage<'_> {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        let key = checked_key(key)?;
        let value = self
            .conn
            .query_row(
                "SELECT value FROM local_storage WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        let key = checked_key(key)?;
        self.conn.execute(
            "INSERT INTO local_storage (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        let key = checked_key(key)?;
        self.conn
            .execute("DELETE FROM local_storage WHERE key = ?1;", [key])?;
        Ok(())
    }
}

fn checked_key(key: &str) -> StorageResult<&str> {
    if key.trim().is_empty() {
        return Err(StorageError::InvalidKey);
    }
    Ok(key)
}
