//! Connection bootstrap for the contact store.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections.
//! - Configure connection pragmas and ensure the contact schema exists.
//!
//! # Invariants
//! - Returned connections always have the `core` table available.
//! - Opening an existing store preserves its rows.

use super::{DbError, DbResult};
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

/// Default store filename, created in the working directory when no
/// explicit path is given.
pub const DEFAULT_STORE_FILE: &str = "contacts.sqlite";

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Opens (or creates) a contact store file and ensures its schema.
///
/// # Side effects
/// - Creates the file and the `core` table when absent.
/// - Emits `store_open` logging events with duration and status.
pub fn open_store(path: impl AsRef<Path>) -> DbResult<Connection> {
    let started_at = Instant::now();
    let display_path = path.as_ref().display().to_string();
    info!("event=store_open module=db status=start mode=file path={display_path}");

    let mut conn = match Connection::open(path.as_ref()) {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=store_open module=db status=error mode=file duration_ms={} error={err}",
                started_at.elapsed().as_millis()
            );
            return Err(DbError::Open {
                path: display_path,
                source: err,
            });
        }
    };

    match bootstrap_connection(&mut conn) {
        Ok(()) => {
            info!(
                "event=store_open module=db status=ok mode=file duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=store_open module=db status=error mode=file duration_ms={} error={err}",
                started_at.elapsed().as_millis()
            );
            Err(err)
        }
    }
}

/// Opens an in-memory contact store with the schema applied.
///
/// Used by tests and tooling; behavior matches [`open_store`] apart from
/// persistence.
pub fn open_store_in_memory() -> DbResult<Connection> {
    let mut conn = Connection::open_in_memory()?;
    bootstrap_connection(&mut conn)?;
    info!("event=store_open module=db status=ok mode=memory");
    Ok(conn)
}

fn bootstrap_connection(conn: &mut Connection) -> DbResult<()> {
    conn.busy_timeout(Duration::from_secs(5))?;
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}
