//! Integration tests for the Employee repository using in-memory
//! SurrealDB.

use rosterd_core::error::RosterdError;
use rosterd_core::models::employee::EmployeeInput;
use rosterd_core::repository::EmployeeRepository;
use rosterd_db::repository::SurrealEmployeeRepository;
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;

async fn setup() -> Surreal<surrealdb::engine::local::Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    rosterd_db::run_migrations(&db).await.unwrap();
    db
}

fn input(first: &str) -> EmployeeInput {
    EmployeeInput {
        first_name: first.into(),
        last_name: "Doe".into(),
        email: format!("{}@example.com", first.to_lowercase()),
    }
}

#[tokio::test]
async fn create_allocates_sequential_ids() {
    let db = setup().await;
    let repo = SurrealEmployeeRepository::new(db);

    let e1 = repo.create(input("Jane"), "alice").await.unwrap();
    let e2 = repo.create(input("John"), "alice").await.unwrap();

    assert_eq!(e1.id, 1);
    assert_eq!(e2.id, 2);
    assert_eq!(e1.created_by, "alice");
}

#[tokio::test]
async fn find_by_id_roundtrip() {
    let db = setup().await;
    let repo = SurrealEmployeeRepository::new(db);

    let created = repo.create(input("Jane"), "alice").await.unwrap();
    let fetched = repo.find_by_id(created.id).await.unwrap();

    assert_eq!(fetched.first_name, "Jane");
    assert_eq!(fetched.email, "jane@example.com");
}

#[tokio::test]
async fn find_unknown_id_is_not_found() {
    let db = setup().await;
    let repo = SurrealEmployeeRepository::new(db);

    let err = repo.find_by_id(42).await.unwrap_err();
    assert!(matches!(err, RosterdError::NotFound { .. }), "{err:?}");
}

#[tokio::test]
async fn update_replaces_fields() {
    let db = setup().await;
    let repo = SurrealEmployeeRepository::new(db);

    let created = repo.create(input("Jane"), "alice").await.unwrap();
    let updated = repo
        .update(
            created.id,
            EmployeeInput {
                first_name: "Janet".into(),
                last_name: "Doe".into(),
                email: "janet@example.com".into(),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.first_name, "Janet");
    // Creator is preserved across updates.
    assert_eq!(updated.created_by, "alice");
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let db = setup().await;
    let repo = SurrealEmployeeRepository::new(db);

    let err = repo.update(42, input("Jane")).await.unwrap_err();
    assert!(matches!(err, RosterdError::NotFound { .. }), "{err:?}");
}

#[tokio::test]
async fn delete_removes_the_record() {
    let db = setup().await;
    let repo = SurrealEmployeeRepository::new(db);

    let created = repo.create(input("Jane"), "alice").await.unwrap();
    repo.delete_by_id(created.id).await.unwrap();

    let err = repo.find_by_id(created.id).await.unwrap_err();
    assert!(matches!(err, RosterdError::NotFound { .. }), "{err:?}");
}

#[tokio::test]
async fn delete_unknown_id_is_not_found() {
    let db = setup().await;
    let repo = SurrealEmployeeRepository::new(db);

    let err = repo.delete_by_id(42).await.unwrap_err();
    assert!(matches!(err, RosterdError::NotFound { .. }), "{err:?}");
}

#[tokio::test]
async fn find_all_returns_in_creation_order() {
    let db = setup().await;
    let repo = SurrealEmployeeRepository::new(db);

    repo.create(input("Jane"), "alice").await.unwrap();
    repo.create(input("John"), "bob").await.unwrap();

    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].first_name, "Jane");
    assert_eq!(all[1].first_name, "John");
}
