//! Planning repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist generated plannings and their linked courses/images.
//! - Keep SQL and JSON column details inside the persistence boundary.
//!
//! # Invariants
//! - Write paths call `Planning::validate()` before SQL mutations.
//! - Read paths reject rows that fail decoding or validation.
//! - Deleting a planning also drops its progress rows.

use super::{RepoError, RepoResult};
use crate::db::with_transaction;
use crate::model::library::{CourseId, ImageFile};
use crate::model::planning::{Planning, PlanningId};
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

const PLANNING_SELECT_SQL: &str = "SELECT
    id,
    chapter_id,
    chapter_name,
    days_json,
    linked_course_ids_json,
    linked_images_json,
    created_at
FROM plannings";

/// Repository interface for planning records.
pub trait PlanningRepository {
    fn create_planning(&self, planning: &Planning) -> RepoResult<PlanningId>;
    fn get_planning(&self, id: PlanningId) -> RepoResult<Option<Planning>>;
    /// Newest first; ties ordered by id.
    fn list_plannings(&self) -> RepoResult<Vec<Planning>>;
    fn update_links(
        &self,
        id: PlanningId,
        course_ids: &[CourseId],
        images: &[ImageFile],
    ) -> RepoResult<()>;
    fn delete_planning(&self, id: PlanningId) -> RepoResult<()>;
}

/// SQLite-backed planning repository.
pub struct SqlitePlanningRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePlanningRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl PlanningRepository for SqlitePlanningRepository<'_> {
    fn create_planning(&self, planning: &Planning) -> RepoResult<PlanningId> {
        planning.validate()?;

        self.conn.execute(
            "INSERT INTO plannings (
                id,
                chapter_id,
                chapter_name,
                days_json,
                linked_course_ids_json,
                linked_images_json,
                created_at,
                created_at_ms
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
            params![
                planning.id.to_string(),
                planning.chapter_id.to_string(),
                planning.chapter_name.as_str(),
                to_json(&planning.days)?,
                to_json(&planning.linked_course_ids)?,
                to_json(&planning.linked_images)?,
                timestamp_to_db(planning.created_at),
                planning.created_at.timestamp_millis(),
            ],
        )?;

        Ok(planning.id)
    }

    fn get_planning(&self, id: PlanningId) -> RepoResult<Option<Planning>> {
        let sql = format!("{PLANNING_SELECT_SQL} WHERE id = ?1;");
        let row = self
            .conn
            .query_row(&sql, params![id.to_string()], read_planning_row)
            .optional()?;

        row.map(decode_planning).transpose()
    }

    fn list_plannings(&self) -> RepoResult<Vec<Planning>> {
        let sql = format!("{PLANNING_SELECT_SQL} ORDER BY created_at_ms DESC, id ASC;");
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], read_planning_row)?;

        let mut plannings = Vec::new();
        for row in rows {
            plannings.push(decode_planning(row?)?);
        }
        Ok(plannings)
    }

    fn update_links(
        &self,
        id: PlanningId,
        course_ids: &[CourseId],
        images: &[ImageFile],
    ) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE plannings
             SET linked_course_ids_json = ?2, linked_images_json = ?3
             WHERE id = ?1;",
            params![id.to_string(), to_json(&course_ids)?, to_json(&images)?],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }

    fn delete_planning(&self, id: PlanningId) -> RepoResult<()> {
        with_transaction(self.conn, |conn| {
            let changed =
                conn.execute("DELETE FROM plannings WHERE id = ?1;", params![id.to_string()])?;
            if changed == 0 {
                return Err(RepoError::NotFound(id));
            }
            conn.execute(
                "DELETE FROM planning_progress WHERE planning_id = ?1;",
                params![id.to_string()],
            )?;
            Ok(())
        })
    }
}

/// Raw column values of one `plannings` row.
struct PlanningRow {
    id: String,
    chapter_id: String,
    chapter_name: String,
    days_json: String,
    linked_course_ids_json: String,
    linked_images_json: String,
    created_at: String,
}

fn read_planning_row(row: &Row<'_>) -> rusqlite::Result<PlanningRow> {
    Ok(PlanningRow {
        id: row.get("id")?,
        chapter_id: row.get("chapter_id")?,
        chapter_name: row.get("chapter_name")?,
        days_json: row.get("days_json")?,
        linked_course_ids_json: row.get("linked_course_ids_json")?,
        linked_images_json: row.get("linked_images_json")?,
        created_at: row.get("created_at")?,
    })
}

fn decode_planning(row: PlanningRow) -> RepoResult<Planning> {
    let planning = Planning {
        id: parse_uuid(&row.id)?,
        chapter_id: parse_uuid(&row.chapter_id)?,
        chapter_name: row.chapter_name,
        days: from_json(&row.days_json, "days_json")?,
        linked_course_ids: from_json(&row.linked_course_ids_json, "linked_course_ids_json")?,
        linked_images: from_json(&row.linked_images_json, "linked_images_json")?,
        created_at: timestamp_from_db(&row.created_at)?,
    };
    planning.validate()?;
    Ok(planning)
}

fn parse_uuid(value: &str) -> RepoResult<Uuid> {
    Uuid::parse_str(value).map_err(|_| RepoError::InvalidData(format!("invalid uuid `{value}`")))
}

fn timestamp_to_db(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

fn timestamp_from_db(value: &str) -> RepoResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|err| RepoError::InvalidData(format!("invalid timestamp `{value}`: {err}")))
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> RepoResult<String> {
    serde_json::to_string(value)
        .map_err(|err| RepoError::InvalidData(format!("failed to encode json column: {err}")))
}

fn from_json<T: DeserializeOwned>(value: &str, column: &str) -> RepoResult<T> {
    serde_json::from_str(value)
        .map_err(|err| RepoError::InvalidData(format!("invalid `{column}`: {err}")))
}

#[cfg(test)]
mod tests {
    use super::{timestamp_from_db, timestamp_to_db};
    use chrono::{TimeZone, Utc};

    #[test]
    fn timestamps_keep_subsecond_precision() {
        let instant = Utc.timestamp_opt(1_700_000_000, 123_456_789).unwrap();
        let stored = timestamp_to_db(instant);
        assert!(stored.ends_with('Z'));
        assert_eq!(timestamp_from_db(&stored).unwrap(), instant);
    }

    #[test]
    fn malformed_timestamp_is_invalid_data() {
        let err = timestamp_from_db("yesterday").unwrap_err();
        assert!(err.to_string().contains("invalid timestamp"));
    }
}
