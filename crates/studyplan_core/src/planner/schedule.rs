//! Seven-day plan generation from an outline.
//!
//! # Invariants
//! - Exactly `PLANNING_DAY_COUNT` days, `day_num` 1..=7.
//! - Each day holds at most `MAX_TASKS_PER_DAY` tasks.
//! - Task lists are truncated after assembly, so a busy day may lose its suffix.

use crate::model::planning::{PlanningDay, PLANNING_DAY_COUNT};
use chrono::{DateTime, Duration, Utc};

pub const MAX_TASKS_PER_DAY: usize = 5;
/// Outline entries of one day considered for title tasks.
const TITLE_LOOKAHEAD: usize = 3;

/// Fixed opening and closing task of one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayTemplate {
    pub prefix: &'static str,
    pub suffix: &'static str,
}

pub const DAY_TEMPLATES: [DayTemplate; PLANNING_DAY_COUNT] = [
    DayTemplate {
        prefix: "Revoir les définitions de base",
        suffix: "Faire les exercices 1 à 5",
    },
    DayTemplate {
        prefix: "Approfondir les concepts clés",
        suffix: "Exercices 10 à 15",
    },
    DayTemplate {
        prefix: "Réviser les applications pratiques",
        suffix: "Quiz en ligne et exercices 20 à 25",
    },
    DayTemplate {
        prefix: "Étudier les cas complexes",
        suffix: "Exercices 30 à 35, fiche de synthèse",
    },
    DayTemplate {
        prefix: "Faire un contrôle blanc chronométré",
        suffix: "Corriger et analyser les erreurs",
    },
    DayTemplate {
        prefix: "Réviser les points faibles",
        suffix: "Refaire les exercices difficiles",
    },
    DayTemplate {
        prefix: "Relecture rapide de toutes les fiches",
        suffix: "Révision des formules clés, se reposer",
    },
];

/// Distributes `outline` over seven templated days starting at `start`.
pub fn generate_days(outline: &[String], start: DateTime<Utc>) -> Vec<PlanningDay> {
    let per_day = outline.len().div_ceil(PLANNING_DAY_COUNT);

    DAY_TEMPLATES
        .iter()
        .enumerate()
        .map(|(index, template)| {
            let slice = day_slice(outline, index, per_day);
            PlanningDay {
                day_num: (index + 1) as u8,
                date: start + Duration::days(index as i64),
                tasks: assemble_tasks(index, template, slice),
                completed: false,
            }
        })
        .collect()
}

fn day_slice(outline: &[String], index: usize, per_day: usize) -> &[String] {
    let start = (index * per_day).min(outline.len());
    let end = ((index + 1) * per_day).min(outline.len());
    &outline[start..end]
}

fn assemble_tasks(index: usize, template: &DayTemplate, slice: &[String]) -> Vec<String> {
    let mut tasks = Vec::new();

    match slice.first() {
        Some(first) if index == 0 => tasks.push(format!("{} : {first}", template.prefix)),
        _ => tasks.push(template.prefix.to_string()),
    }

    tasks.extend(
        slice
            .iter()
            .take(TITLE_LOOKAHEAD)
            .filter(|entry| !entry.starts_with(' '))
            .cloned(),
    );

    tasks.push(template.suffix.to_string());
    tasks.truncate(MAX_TASKS_PER_DAY);
    tasks
}
