use ordertrack_core::{
    open_db_in_memory, raw_record_from_value, BreakingJob, BreakingJobService, JobRepository,
    RawRecord, RepoError, SqliteBreakingRepository,
};
use serde_json::{json, Value};
use std::collections::HashSet;

fn raw(value: Value) -> RawRecord {
    raw_record_from_value(value)
}

#[test]
fn insert_with_only_mark_fills_defaults() {
    let conn = open_db_in_memory().unwrap();
    let service = BreakingJobService::sqlite(&conn);

    let stored = service.insert(&raw(json!({ "mark": "A" }))).unwrap();

    assert!(!stored.id.is_empty());
    assert_eq!(
        stored,
        BreakingJob {
            id: stored.id.clone(),
            mark: "A".to_string(),
            ..BreakingJob::default()
        }
    );
    assert_eq!(stored.bales, 0);
    assert!(!stored.ready);
}

#[test]
fn insert_then_list_contains_exactly_the_returned_record() {
    let conn = open_db_in_memory().unwrap();
    let service = BreakingJobService::sqlite(&conn);

    let stored = service
        .insert(&raw(json!({
            "mark": "MK-7",
            "orderId": "ORD-1",
            "bales": "12",
            "status": "queued",
            "breaker": "crew 2",
            "hauler": "truck 9",
            "dateToLoad": "2024-05-01",
            "location": "yard",
            "ready": true,
            "notes": "dropped"
        })))
        .unwrap();

    let listed = service.list().unwrap();
    assert_eq!(listed, vec![stored.clone()]);
    assert_eq!(stored.bales, 12);
    assert!(stored.ready);
    assert_eq!(stored.completed_date, "");
}

#[test]
fn non_numeric_bales_are_stored_as_zero() {
    let conn = open_db_in_memory().unwrap();
    let service = BreakingJobService::sqlite(&conn);

    let stored = service
        .insert(&raw(json!({ "mark": "A", "bales": "xyz" })))
        .unwrap();
    assert_eq!(stored.bales, 0);

    let bales: i64 = conn
        .query_row(
            "SELECT bales FROM breaking WHERE id = ?1;",
            [&stored.id],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(bales, 0);
}

#[test]
fn ready_is_persisted_as_zero_or_one() {
    let conn = open_db_in_memory().unwrap();
    let service = BreakingJobService::sqlite(&conn);

    let truthy = service
        .insert(&raw(json!({ "mark": "A", "ready": "yes" })))
        .unwrap();
    let falsy = service
        .insert(&raw(json!({ "mark": "B", "ready": 0 })))
        .unwrap();

    let stored_flag = |id: &str| -> i64 {
        conn.query_row("SELECT ready FROM breaking WHERE id = ?1;", [id], |row| {
            row.get(0)
        })
        .unwrap()
    };
    assert_eq!(stored_flag(&truthy.id), 1);
    assert_eq!(stored_flag(&falsy.id), 0);
}

#[test]
fn inserts_without_id_get_distinct_ids() {
    let conn = open_db_in_memory().unwrap();
    let service = BreakingJobService::sqlite(&conn);

    let first = service.insert(&raw(json!({ "mark": "A" }))).unwrap();
    let second = service.insert(&raw(json!({ "mark": "A" }))).unwrap();
    assert_ne!(first.id, second.id);

    let ids: HashSet<_> = service.list().unwrap().into_iter().map(|job| job.id).collect();
    assert_eq!(ids, HashSet::from([first.id, second.id]));
}

#[test]
fn supplied_id_is_kept_and_duplicates_are_rejected() {
    let conn = open_db_in_memory().unwrap();
    let service = BreakingJobService::sqlite(&conn);

    let stored = service
        .insert(&raw(json!({ "id": "job-1", "mark": "A" })))
        .unwrap();
    assert_eq!(stored.id, "job-1");

    let err = service
        .insert(&raw(json!({ "id": "job-1", "mark": "B" })))
        .unwrap_err();
    assert!(matches!(err, RepoError::Write { .. }));
    assert!(err.is_constraint_violation());

    let listed = service.list().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].mark, "A");
}

#[test]
fn empty_id_is_treated_as_unassigned() {
    let conn = open_db_in_memory().unwrap();
    let service = BreakingJobService::sqlite(&conn);

    let stored = service
        .insert(&raw(json!({ "id": "", "mark": "A" })))
        .unwrap();
    assert!(!stored.id.is_empty());
}

#[test]
fn replace_overwrites_every_field_without_merging() {
    let conn = open_db_in_memory().unwrap();
    let service = BreakingJobService::sqlite(&conn);

    let original = service
        .insert(&raw(json!({
            "mark": "A",
            "orderId": "ORD-1",
            "bales": 30,
            "hauler": "truck 9",
            "ready": true
        })))
        .unwrap();

    let replacement = raw(json!({ "id": "ignored", "mark": "B", "status": "done" }));
    let ack = service.replace(&original.id, &replacement).unwrap();
    assert_eq!(ack.id, original.id);
    assert!(ack.matched());

    let listed = service.list().unwrap();
    let expected = BreakingJob {
        id: original.id.clone(),
        ..BreakingJob::from_raw(&raw(json!({ "mark": "B", "status": "done" })))
    };
    assert_eq!(listed, vec![expected]);
}

#[test]
fn replace_of_missing_id_succeeds_without_creating_a_row() {
    let conn = open_db_in_memory().unwrap();
    let service = BreakingJobService::sqlite(&conn);

    let ack = service
        .replace("missing", &raw(json!({ "mark": "A" })))
        .unwrap();
    assert_eq!(ack.rows_affected, 0);
    assert!(!ack.matched());
    assert!(service.list().unwrap().is_empty());
}

#[test]
fn delete_is_idempotent() {
    let conn = open_db_in_memory().unwrap();
    let service = BreakingJobService::sqlite(&conn);

    let keep = service.insert(&raw(json!({ "mark": "keep" }))).unwrap();
    let gone = service.insert(&raw(json!({ "mark": "gone" }))).unwrap();

    let first = service.delete(&gone.id).unwrap();
    let second = service.delete(&gone.id).unwrap();
    assert_eq!(first.rows_affected, 1);
    assert_eq!(second.rows_affected, 0);

    assert_eq!(service.list().unwrap(), vec![keep]);
    assert!(service.get(&gone.id).unwrap().is_none());
}

#[test]
fn repository_reads_rows_written_by_other_tools() {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch(
        "INSERT INTO breaking (id, mark, orderId, bales, status, ready)
         VALUES ('ext-1', 'X', 'ORD-2', 7.9, NULL, 5);",
    )
    .unwrap();

    let repo = SqliteBreakingRepository::new(&conn);
    let job = repo.get_job("ext-1").unwrap().unwrap();

    assert_eq!(job.bales, 7);
    assert!(job.ready);
    assert_eq!(job.status, "");
    assert_eq!(job.breaker, "");
}

#[test]
fn repository_insert_accepts_typed_records() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBreakingRepository::new(&conn);

    let job = BreakingJob {
        mark: "typed".to_string(),
        bales: -3,
        ..BreakingJob::default()
    };
    let stored = repo.insert_job(job).unwrap();

    assert_eq!(repo.get_job(&stored.id).unwrap(), Some(stored.clone()));
    assert_eq!(stored.bales, -3);
}

#[test]
fn read_errors_name_the_failing_kind() {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch("DROP TABLE breaking;").unwrap();

    let err = BreakingJobService::sqlite(&conn).list().unwrap_err();
    assert!(matches!(err, RepoError::Read { .. }));
    assert!(err.to_string().contains("breaking"));
}
