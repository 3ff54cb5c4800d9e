//! Schema migration registry and executor.
//!
//! # Responsibility
//! - Register planner schema steps in strictly increasing order.
//! - Apply pending steps in one transaction and report which step failed.
//!
//! # Invariants
//! - `version` values must remain monotonic.
//! - `PRAGMA user_version` always names the last committed step.

use crate::db::{DbError, DbResult};
use log::{error, info};
use rusqlite::Connection;

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: u32,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    sql: include_str!("0001_init.sql"),
}];

/// Returns the latest migration version known by this binary.
pub fn latest_version() -> u32 {
    latest_of(MIGRATIONS)
}

/// Applies all pending migrations on the provided connection.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    apply_steps(conn, MIGRATIONS)
}

/// Reads the schema version stored in `PRAGMA user_version`.
pub fn current_user_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}

fn latest_of(steps: &[Migration]) -> u32 {
    steps.last().map_or(0, |step| step.version)
}

fn apply_steps(conn: &mut Connection, steps: &[Migration]) -> DbResult<()> {
    let from_version = current_user_version(conn)?;
    let latest = latest_of(steps);

    if from_version > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: from_version,
            latest_supported: latest,
        });
    }
    let pending: Vec<&Migration> = steps
        .iter()
        .filter(|step| step.version > from_version)
        .collect();
    if pending.is_empty() {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for step in pending {
        let applied = tx
            .execute_batch(step.sql)
            .and_then(|()| tx.pragma_update(None, "user_version", step.version));
        if let Err(source) = applied {
            error!(
                "event=db_migrate module=db status=error version={} error={}",
                step.version, source
            );
            return Err(DbError::Migration {
                version: step.version,
                source,
            });
        }
    }
    tx.commit()?;

    info!(
        "event=db_migrate module=db status=ok from_version={} to_version={}",
        from_version, latest
    );
    Ok(())
}
