use chrono::Utc;
use studyplan_core::db::open_db_in_memory;
use studyplan_core::{
    transform_at, ProgressRepository, ProgressService, RepoError, SqliteProgressRepository,
};
use uuid::Uuid;

#[test]
fn missing_progress_reads_as_not_completed() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProgressRepository::new(&conn);
    assert!(!repo.day_status(Uuid::new_v4(), 1).unwrap());
}

#[test]
fn set_day_status_overwrites_previous_value() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProgressRepository::new(&conn);
    let planning_id = Uuid::new_v4();

    repo.set_day_status(planning_id, 4, true).unwrap();
    repo.set_day_status(planning_id, 4, false).unwrap();
    repo.set_day_status(planning_id, 1, true).unwrap();

    let progress = repo.list_progress(planning_id).unwrap();
    assert_eq!(progress.into_iter().collect::<Vec<_>>(), vec![(1, true), (4, false)]);
}

#[test]
fn day_numbers_outside_week_are_rejected() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProgressRepository::new(&conn);
    let planning_id = Uuid::new_v4();

    assert!(matches!(
        repo.set_day_status(planning_id, 0, true).unwrap_err(),
        RepoError::InvalidDay(0)
    ));
    assert!(matches!(
        repo.day_status(planning_id, 8).unwrap_err(),
        RepoError::InvalidDay(8)
    ));
}

#[test]
fn toggle_twice_restores_state() {
    let conn = open_db_in_memory().unwrap();
    let service = ProgressService::new(SqliteProgressRepository::new(&conn));
    let planning_id = Uuid::new_v4();

    assert!(service.toggle_day(planning_id, 2).unwrap());
    assert!(service.day_status(planning_id, 2).unwrap());
    assert!(!service.toggle_day(planning_id, 2).unwrap());
    assert!(!service.day_status(planning_id, 2).unwrap());
}

#[test]
fn completion_is_derived_from_stored_flags() {
    let conn = open_db_in_memory().unwrap();
    let service = ProgressService::new(SqliteProgressRepository::new(&conn));
    let mut planning = transform_at("Cours 4 – Aires\nCalcul d'aires", None, Utc::now());

    assert_eq!(service.completion_percentage(&planning).unwrap(), 0);
    service.toggle_day(planning.id, 1).unwrap();
    service.toggle_day(planning.id, 5).unwrap();
    assert_eq!(service.completion_percentage(&planning).unwrap(), 29);
    assert!(!service.is_fully_completed(&planning).unwrap());

    service.apply_progress(&mut planning).unwrap();
    let completed: Vec<u8> = planning
        .days
        .iter()
        .filter(|day| day.completed)
        .map(|day| day.day_num)
        .collect();
    assert_eq!(completed, vec![1, 5]);

    for day_num in [2, 3, 4, 6, 7] {
        service.toggle_day(planning.id, day_num).unwrap();
    }
    assert!(service.is_fully_completed(&planning).unwrap());
    assert_eq!(service.completion_percentage(&planning).unwrap(), 100);
}

#[test]
fn reset_only_clears_target_planning() {
    let conn = open_db_in_memory().unwrap();
    let service = ProgressService::new(SqliteProgressRepository::new(&conn));
    let target = Uuid::new_v4();
    let other = Uuid::new_v4();
    service.toggle_day(target, 3).unwrap();
    service.toggle_day(other, 3).unwrap();

    service.reset(target).unwrap();

    assert!(!service.day_status(target, 3).unwrap());
    assert!(service.day_status(other, 3).unwrap());
}
