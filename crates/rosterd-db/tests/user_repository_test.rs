//! Integration tests for the User repository using in-memory
//! SurrealDB.

use rosterd_core::error::RosterdError;
use rosterd_core::models::role::Role;
use rosterd_core::models::user::CreateUser;
use rosterd_core::repository::UserRepository;
use rosterd_db::repository::SurrealUserRepository;
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;

/// Helper: spin up in-memory DB and run migrations.
async fn setup() -> Surreal<surrealdb::engine::local::Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    rosterd_db::run_migrations(&db).await.unwrap();
    db
}

fn alice() -> CreateUser {
    CreateUser {
        username: "alice".into(),
        // Not a real Argon2 hash; the store does not inspect it.
        password_hash: "$argon2id$stub".into(),
        role: Role::User,
    }
}

#[tokio::test]
async fn create_and_get_user() {
    let db = setup().await;
    let repo = SurrealUserRepository::new(db);

    let created = repo.create(alice()).await.unwrap();
    assert_eq!(created.username, "alice");
    assert_eq!(created.role, Role::User);

    let fetched = repo.get_by_username("alice").await.unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.password_hash, created.password_hash);
    assert_eq!(fetched.role, Role::User);
}

#[tokio::test]
async fn duplicate_username_is_rejected() {
    let db = setup().await;
    let repo = SurrealUserRepository::new(db);

    repo.create(alice()).await.unwrap();
    let err = repo.create(alice()).await.unwrap_err();
    assert!(matches!(err, RosterdError::AlreadyExists { .. }), "{err:?}");
}

#[tokio::test]
async fn get_unknown_username_is_not_found() {
    let db = setup().await;
    let repo = SurrealUserRepository::new(db);

    let err = repo.get_by_username("nobody").await.unwrap_err();
    assert!(matches!(err, RosterdError::NotFound { .. }), "{err:?}");
}

#[tokio::test]
async fn update_role_replaces_the_assignment() {
    let db = setup().await;
    let repo = SurrealUserRepository::new(db);

    repo.create(alice()).await.unwrap();
    let updated = repo.update_role("alice", Role::Manager).await.unwrap();
    assert_eq!(updated.role, Role::Manager);

    // A fresh lookup sees the new role.
    let fetched = repo.get_by_username("alice").await.unwrap();
    assert_eq!(fetched.role, Role::Manager);
}

#[tokio::test]
async fn update_role_unknown_username_is_not_found() {
    let db = setup().await;
    let repo = SurrealUserRepository::new(db);

    let err = repo.update_role("nobody", Role::Admin).await.unwrap_err();
    assert!(matches!(err, RosterdError::NotFound { .. }), "{err:?}");
}

#[tokio::test]
async fn list_returns_all_users_oldest_first() {
    let db = setup().await;
    let repo = SurrealUserRepository::new(db);

    repo.create(alice()).await.unwrap();
    repo.create(CreateUser {
        username: "bob".into(),
        password_hash: "$argon2id$stub".into(),
        role: Role::Manager,
    })
    .await
    .unwrap();

    let users = repo.list().await.unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].username, "alice");
    assert_eq!(users[1].username, "bob");
}
