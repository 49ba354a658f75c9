//! Connection bootstrap for resume storage.
//!
//! # Invariants
//! - Returned connections have migrations fully applied.
//! - Every open attempt emits one `storage_open` start event and one
//!   terminal ok/error event.

use super::migrations::apply_migrations;
use super::{DbError, DbResult};
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

/// Opens (or creates) the storage file at `path` and applies migrations.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    open_with("file", || Connection::open(path))
}

/// Opens a private in-memory store. Used by tests and throwaway sessions.
pub fn open_db_in_memory() -> DbResult<Connection> {
    open_with("memory", Connection::open_in_memory)
}

fn open_with(
    mode: &'static str,
    connect: impl FnOnce() -> rusqlite::Result<Connection>,
) -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=storage_open module=db status=start mode={mode}");

    let opened = connect()
        .map_err(|source| DbError::Open { mode, source })
        .and_then(|mut conn| {
            bootstrap_connection(&mut conn)?;
            Ok(conn)
        });

    match &opened {
        Ok(_) => info!(
            "event=storage_open module=db status=ok mode={mode} duration_ms={}",
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=storage_open module=db status=error mode={mode} duration_ms={} error_code={} error={}",
            started_at.elapsed().as_millis(),
            err.code(),
            err
        ),
    }
    opened
}

fn bootstrap_connection(conn: &mut Connection) -> DbResult<()> {
    conn.busy_timeout(Duration::from_secs(5))?;
    apply_migrations(conn)?;
    Ok(())
}
