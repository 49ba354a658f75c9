//! SQLite file backing the local key/value store.
//!
//! `open_db` and `open_db_in_memory` hand out connections that already carry
//! the latest `local_storage` schema; callers never run migrations
//! themselves. The applied schema version lives in `PRAGMA user_version`.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    /// The connection itself could not be established.
    Open {
        mode: &'static str,
        source: rusqlite::Error,
    },
    /// Statement failure on an open connection.
    Sqlite(rusqlite::Error),
    /// The file was written by a build with a newer `local_storage` schema.
    SchemaTooNew { found: u32, supported: u32 },
}

impl DbError {
    /// Stable code reported in `storage_open` log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Open { .. } => "open_failed",
            Self::Sqlite(_) => "sqlite_failed",
            Self::SchemaTooNew { .. } => "schema_too_new",
        }
    }
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open { mode, source } => write!(f, "cannot open {mode} storage: {source}"),
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "local storage schema v{found} is newer than this build (v{supported})"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Open { source, .. } | Self::Sqlite(source) => Some(source),
            Self::SchemaTooNew { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
