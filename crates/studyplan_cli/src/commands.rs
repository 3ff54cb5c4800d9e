//! Subcommand bodies.
//!
//! Each command takes an open connection and writes its result to `out`;
//! opening the database and choosing stdout is left to `main`.

use anyhow::{anyhow, bail, Context};
use std::io::{Read, Write};
use std::path::Path;
use studyplan_core::db::Connection;
use studyplan_core::{
    transform, Planning, PlanningRepository, PlanningService, ProgressService,
    SqlitePlanningRepository, SqliteProgressRepository,
};
use uuid::Uuid;

/// Builds a planning from `text` and prints it as JSON.
///
/// With `store`, the planning goes through `PlanningService` and is persisted;
/// blank text is then rejected.
pub fn generate(
    text: &str,
    chapter: Option<&str>,
    store: Option<&Connection>,
    out: &mut impl Write,
) -> anyhow::Result<Planning> {
    let planning = match store {
        Some(conn) => PlanningService::new(SqlitePlanningRepository::new(conn))
            .create_from_text(text, chapter)
            .context("failed to store planning")?,
        None => transform(text, chapter),
    };

    write_json(out, &planning)?;
    Ok(planning)
}

/// Prints `id<TAB>chapter name<TAB>created_at` per stored planning and
/// returns the row count.
pub fn list(conn: &Connection, out: &mut impl Write) -> anyhow::Result<usize> {
    let plannings = SqlitePlanningRepository::new(conn)
        .list_plannings()
        .context("failed to list plannings")?;

    for planning in &plannings {
        writeln!(
            out,
            "{}\t{}\t{}",
            planning.id,
            planning.chapter_name,
            planning.created_at.to_rfc3339()
        )?;
    }
    Ok(plannings.len())
}

pub fn show(conn: &Connection, id: Uuid, out: &mut impl Write) -> anyhow::Result<()> {
    let mut planning = load_planning(conn, id)?;
    ProgressService::new(SqliteProgressRepository::new(conn))
        .apply_progress(&mut planning)
        .context("failed to read progress")?;

    write_json(
        out,
        &serde_json::json!({
            "planning": planning,
            "completionPercentage": planning.completion_percentage(),
            "fullyCompleted": planning.is_fully_completed(),
        }),
    )
}

/// Flips one day of a stored planning and returns the new state.
pub fn toggle(conn: &Connection, id: Uuid, day: u8, out: &mut impl Write) -> anyhow::Result<bool> {
    let planning = load_planning(conn, id)?;
    if !planning.days.iter().any(|planning_day| planning_day.day_num == day) {
        bail!("planning {id} has no day {day}");
    }

    let completed = ProgressService::new(SqliteProgressRepository::new(conn))
        .toggle_day(id, day)
        .context("failed to toggle day")?;
    writeln!(out, "day {day} completed={completed}")?;
    Ok(completed)
}

pub fn reset(conn: &Connection, id: Uuid, out: &mut impl Write) -> anyhow::Result<()> {
    load_planning(conn, id)?;
    ProgressService::new(SqliteProgressRepository::new(conn))
        .reset(id)
        .context("failed to reset progress")?;
    writeln!(out, "planning {id} progress cleared")?;
    Ok(())
}

/// Reads `file`, or `stdin` when the file is absent or `-`.
pub fn read_input(file: Option<&Path>, mut stdin: impl Read) -> anyhow::Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            stdin
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn load_planning(conn: &Connection, id: Uuid) -> anyhow::Result<Planning> {
    SqlitePlanningRepository::new(conn)
        .get_planning(id)
        .context("failed to read planning")?
        .ok_or_else(|| anyhow!("planning not found: {id}"))
}

fn write_json<T: serde::Serialize>(out: &mut impl Write, value: &T) -> anyhow::Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("failed to encode json")?;
    writeln!(out, "{rendered}")?;
    Ok(())
}
