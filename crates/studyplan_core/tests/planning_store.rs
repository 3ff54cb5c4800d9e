use chrono::{Duration, TimeZone, Utc};
use rusqlite::params;
use studyplan_core::db::open_db_in_memory;
use studyplan_core::{
    transform_at, ImageFile, PlanningRepository, PlanningService, PlanningServiceError,
    ProgressRepository, RepoError, SqlitePlanningRepository, SqliteProgressRepository,
};
use uuid::Uuid;

const TEXT: &str = "Chapitre 3 – Fractions\n# Définitions\nUne fraction représente un partage.";

fn image(name: &str) -> ImageFile {
    ImageFile {
        id: Uuid::new_v4(),
        name: name.to_string(),
        data_url: "data:image/png;base64,AAAA".to_string(),
        uploaded_at: Utc.with_ymd_and_hms(2026, 2, 1, 9, 0, 0).unwrap(),
    }
}

#[test]
fn create_and_get_round_trips_planning() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePlanningRepository::new(&conn);
    let mut planning = transform_at(TEXT, None, Utc::now());
    planning.linked_course_ids = vec![Uuid::new_v4()];
    planning.linked_images = vec![image("schema.png")];

    let id = repo.create_planning(&planning).unwrap();
    assert_eq!(id, planning.id);

    let loaded = repo.get_planning(id).unwrap().unwrap();
    assert_eq!(loaded, planning);
}

#[test]
fn get_unknown_planning_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePlanningRepository::new(&conn);
    assert!(repo.get_planning(Uuid::new_v4()).unwrap().is_none());
}

#[test]
fn create_rejects_invalid_planning() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePlanningRepository::new(&conn);
    let mut planning = transform_at(TEXT, None, Utc::now());
    planning.days.truncate(5);

    let err = repo.create_planning(&planning).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
}

#[test]
fn list_returns_newest_first() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePlanningRepository::new(&conn);
    let base = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();
    let older = transform_at(TEXT, Some("Ancien"), base);
    let newer = transform_at(TEXT, Some("Récent"), base + Duration::days(2));
    repo.create_planning(&older).unwrap();
    repo.create_planning(&newer).unwrap();

    let names: Vec<String> = repo
        .list_plannings()
        .unwrap()
        .into_iter()
        .map(|planning| planning.chapter_name)
        .collect();
    assert_eq!(names, vec!["Récent".to_string(), "Ancien".to_string()]);
}

#[test]
fn update_links_replaces_courses_and_images() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePlanningRepository::new(&conn);
    let planning = transform_at(TEXT, None, Utc::now());
    repo.create_planning(&planning).unwrap();

    let course_id = Uuid::new_v4();
    repo.update_links(planning.id, &[course_id], &[image("figure.png")])
        .unwrap();

    let loaded = repo.get_planning(planning.id).unwrap().unwrap();
    assert_eq!(loaded.linked_course_ids, vec![course_id]);
    assert_eq!(loaded.linked_images.len(), 1);
    assert_eq!(loaded.linked_images[0].name, "figure.png");

    let err = repo.update_links(Uuid::new_v4(), &[], &[]).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}

#[test]
fn delete_removes_planning_and_its_progress() {
    let conn = open_db_in_memory().unwrap();
    let planning_repo = SqlitePlanningRepository::new(&conn);
    let progress_repo = SqliteProgressRepository::new(&conn);
    let planning = transform_at(TEXT, None, Utc::now());
    planning_repo.create_planning(&planning).unwrap();
    progress_repo.set_day_status(planning.id, 2, true).unwrap();

    planning_repo.delete_planning(planning.id).unwrap();

    assert!(planning_repo.get_planning(planning.id).unwrap().is_none());
    assert!(progress_repo.list_progress(planning.id).unwrap().is_empty());
    let err = planning_repo.delete_planning(planning.id).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}

#[test]
fn corrupted_days_column_is_rejected_on_read() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePlanningRepository::new(&conn);
    let planning = transform_at(TEXT, None, Utc::now());
    repo.create_planning(&planning).unwrap();

    conn.execute(
        "UPDATE plannings SET days_json = '[]' WHERE id = ?1;",
        params![planning.id.to_string()],
    )
    .unwrap();
    let err = repo.get_planning(planning.id).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    conn.execute(
        "UPDATE plannings SET days_json = 'not json' WHERE id = ?1;",
        params![planning.id.to_string()],
    )
    .unwrap();
    let err = repo.get_planning(planning.id).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

#[test]
fn service_rejects_blank_text_and_stores_generated_planning() {
    let conn = open_db_in_memory().unwrap();
    let service = PlanningService::new(SqlitePlanningRepository::new(&conn));

    let err = service.create_from_text(" \n\t", None).unwrap_err();
    assert!(matches!(err, PlanningServiceError::EmptyText));

    let created = service.create_from_text(TEXT, None).unwrap();
    assert_eq!(created.chapter_name, "Chapitre 3 – Fractions");
    let listed = service.list_plannings().unwrap();
    assert_eq!(listed, vec![created.clone()]);

    service.delete_planning(created.id).unwrap();
    let err = service.delete_planning(created.id).unwrap_err();
    assert!(matches!(err, PlanningServiceError::PlanningNotFound(id) if id == created.id));
}
