//! Doctor store tests against an in-memory SQLite database.

use sea_orm::{ConnectionTrait, DbBackend, Statement};

use doctor_registry::config::Config;
use doctor_registry::domain::{Doctor, DoctorInput};
use doctor_registry::infra::{Database, DoctorRepository, DoctorStore};

fn memory_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
        ..Config::default()
    }
}

async fn setup() -> (Database, DoctorStore) {
    let db = Database::connect(&memory_config())
        .await
        .expect("in-memory database should open");
    let store = DoctorStore::new(db.get_connection());

    (db, store)
}

fn ana() -> DoctorInput {
    DoctorInput::new("Ana", "Cardiologia")
}

#[tokio::test]
async fn test_list_is_empty_on_fresh_schema() {
    let (_db, store) = setup().await;

    let doctors = store.list().await.unwrap();

    assert!(doctors.is_empty());
}

#[tokio::test]
async fn test_create_assigns_id_and_lists_record() {
    let (_db, store) = setup().await;

    let created = store.create(ana()).await.unwrap();
    let doctors = store.list().await.unwrap();

    assert_eq!(doctors.len(), 1);
    assert_eq!(doctors[0], created);
    assert_eq!(created.name, "Ana");
    assert_eq!(created.specialty, "Cardiologia");
}

#[tokio::test]
async fn test_create_assigns_distinct_ids_in_list_order() {
    let (_db, store) = setup().await;

    let first = store.create(ana()).await.unwrap();
    let second = store
        .create(DoctorInput::new("Bruno", "Pediatria"))
        .await
        .unwrap();

    assert_ne!(first.id, second.id);

    let ids: Vec<i32> = store.list().await.unwrap().iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[tokio::test]
async fn test_update_overwrites_both_fields_and_keeps_id() {
    let (_db, store) = setup().await;
    let created = store.create(ana()).await.unwrap();

    let updated = store
        .update_by_id(created.id, DoctorInput::new("Ana Paula", "Neurologia"))
        .await
        .unwrap()
        .expect("doctor should exist");

    assert_eq!(
        updated,
        Doctor {
            id: created.id,
            name: "Ana Paula".to_string(),
            specialty: "Neurologia".to_string(),
        }
    );
    assert_eq!(store.list().await.unwrap(), vec![updated]);
}

#[tokio::test]
async fn test_update_twice_matches_single_update() {
    let (_db, store) = setup().await;
    let created = store.create(ana()).await.unwrap();
    let input = DoctorInput::new("Ana Paula", "Cardiologia");

    let once = store.update_by_id(created.id, input.clone()).await.unwrap();
    let after_once = store.list().await.unwrap();
    let twice = store.update_by_id(created.id, input).await.unwrap();
    let after_twice = store.list().await.unwrap();

    assert_eq!(once, twice);
    assert_eq!(after_once, after_twice);
}

#[tokio::test]
async fn test_missing_id_reports_not_found_without_changes() {
    let (_db, store) = setup().await;
    let created = store.create(ana()).await.unwrap();
    let missing = created.id + 100;

    let updated = store
        .update_by_id(missing, DoctorInput::new("Ghost", "None"))
        .await
        .unwrap();
    let deleted = store.delete_by_id(missing).await.unwrap();

    assert!(updated.is_none());
    assert!(!deleted);
    assert_eq!(store.list().await.unwrap(), vec![created]);
}

#[tokio::test]
async fn test_delete_is_final() {
    let (_db, store) = setup().await;
    let created = store.create(ana()).await.unwrap();

    assert!(store.delete_by_id(created.id).await.unwrap());

    assert!(store.list().await.unwrap().is_empty());
    assert!(store
        .update_by_id(created.id, ana())
        .await
        .unwrap()
        .is_none());
    assert!(!store.delete_by_id(created.id).await.unwrap());
}

#[tokio::test]
async fn test_store_usable_after_rolled_back_lookup() {
    // A not-found update drops its transaction; the single pooled
    // connection must come back for the next operation.
    let (_db, store) = setup().await;

    assert!(store.update_by_id(1, ana()).await.unwrap().is_none());
    assert!(!store.delete_by_id(1).await.unwrap());

    let created = store.create(ana()).await.unwrap();
    assert_eq!(store.list().await.unwrap(), vec![created]);
}

#[tokio::test]
async fn test_schema_creation_is_idempotent() {
    let (db, store) = setup().await;
    let created = store.create(ana()).await.unwrap();

    db.ensure_schema().await.unwrap();
    db.ensure_schema().await.unwrap();

    assert_eq!(store.list().await.unwrap(), vec![created]);
}

#[tokio::test]
async fn test_schema_recreates_dropped_table() {
    let (db, store) = setup().await;
    store.create(ana()).await.unwrap();

    db.get_connection()
        .execute_unprepared("DROP TABLE medico")
        .await
        .unwrap();
    assert!(store.list().await.is_err());

    db.ensure_schema().await.unwrap();

    assert!(store.list().await.unwrap().is_empty());
    let created = store.create(ana()).await.unwrap();
    assert_eq!(store.list().await.unwrap(), vec![created]);
}

#[tokio::test]
async fn test_existing_table_is_reused() {
    let db = Database::connect_without_schema(&memory_config())
        .await
        .unwrap();
    let conn = db.get_connection();
    conn.execute_unprepared(
        "CREATE TABLE medico (\
            id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT, \
            nome VARCHAR NOT NULL, \
            especialidade VARCHAR NOT NULL)",
    )
    .await
    .unwrap();
    conn.execute_unprepared("INSERT INTO medico (nome, especialidade) VALUES ('Old', 'X')")
        .await
        .unwrap();

    db.ensure_schema().await.unwrap();

    let store = DoctorStore::new(conn);
    assert_eq!(
        store.list().await.unwrap(),
        vec![Doctor {
            id: 1,
            name: "Old".to_string(),
            specialty: "X".to_string(),
        }]
    );
}

#[tokio::test]
async fn test_schema_creation_writes_only_doctor_table() {
    let (db, _store) = setup().await;

    let tables: Vec<String> = db
        .get_connection()
        .query_all(Statement::from_string(
            DbBackend::Sqlite,
            "SELECT name FROM sqlite_master \
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        ))
        .await
        .unwrap()
        .iter()
        .map(|row| row.try_get::<String>("", "name").unwrap())
        .collect();

    assert_eq!(tables, vec!["medico".to_string()]);
}

#[tokio::test]
async fn test_ping() {
    let (db, _store) = setup().await;

    assert!(db.ping().await.is_ok());
}
