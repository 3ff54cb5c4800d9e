//! Day-completion progress store.
//!
//! # Responsibility
//! - Map `(planning_id, day_num)` to a completion flag.
//! - Stay independent of planning records: progress for unknown plannings is
//!   accepted and simply never read back through a planning.
//!
//! # Invariants
//! - `day_num` is always within 1..=7.
//! - Missing entries read as not completed.

use super::{RepoError, RepoResult};
use crate::model::planning::{PlanningId, PLANNING_DAY_COUNT};
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::BTreeMap;

/// Key-value contract for day completion flags.
pub trait ProgressRepository {
    fn day_status(&self, planning_id: PlanningId, day_num: u8) -> RepoResult<bool>;
    fn set_day_status(&self, planning_id: PlanningId, day_num: u8, completed: bool)
        -> RepoResult<()>;
    /// Stored flags of one planning, keyed by day number.
    fn list_progress(&self, planning_id: PlanningId) -> RepoResult<BTreeMap<u8, bool>>;
    fn clear_progress(&self, planning_id: PlanningId) -> RepoResult<()>;
}

/// SQLite-backed progress store.
pub struct SqliteProgressRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProgressRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ProgressRepository for SqliteProgressRepository<'_> {
    fn day_status(&self, planning_id: PlanningId, day_num: u8) -> RepoResult<bool> {
        ensure_day_num(day_num)?;
        let completed = self
            .conn
            .query_row(
                "SELECT completed FROM planning_progress
                 WHERE planning_id = ?1 AND day_num = ?2;",
                params![planning_id.to_string(), day_num],
                |row| row.get::<_, i64>(0),
            )
            .optional()?;

        completed.map_or(Ok(false), int_to_bool)
    }

    fn set_day_status(
        &self,
        planning_id: PlanningId,
        day_num: u8,
        completed: bool,
    ) -> RepoResult<()> {
        ensure_day_num(day_num)?;
        self.conn.execute(
            "INSERT INTO planning_progress (planning_id, day_num, completed)
             VALUES (?1, ?2, ?3)
             ON CONFLICT (planning_id, day_num) DO UPDATE SET completed = excluded.completed;",
            params![planning_id.to_string(), day_num, i64::from(completed)],
        )?;
        Ok(())
    }

    fn list_progress(&self, planning_id: PlanningId) -> RepoResult<BTreeMap<u8, bool>> {
        let mut stmt = self.conn.prepare(
            "SELECT day_num, completed FROM planning_progress
             WHERE planning_id = ?1
             ORDER BY day_num ASC;",
        )?;
        let rows = stmt.query_map(params![planning_id.to_string()], |row| {
            Ok((row.get::<_, u8>(0)?, row.get::<_, i64>(1)?))
        })?;

        let mut progress = BTreeMap::new();
        for row in rows {
            let (day_num, completed) = row?;
            progress.insert(day_num, int_to_bool(completed)?);
        }
        Ok(progress)
    }

    fn clear_progress(&self, planning_id: PlanningId) -> RepoResult<()> {
        self.conn.execute(
            "DELETE FROM planning_progress WHERE planning_id = ?1;",
            params![planning_id.to_string()],
        )?;
        Ok(())
    }
}

fn ensure_day_num(day_num: u8) -> RepoResult<()> {
    if day_num == 0 || usize::from(day_num) > PLANNING_DAY_COUNT {
        return Err(RepoError::InvalidDay(day_num));
    }
    Ok(())
}

fn int_to_bool(value: i64) -> RepoResult<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(RepoError::InvalidData(format!(
            "completed must be 0 or 1, got {other}"
        ))),
    }
}
