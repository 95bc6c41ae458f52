//! Integration tests for the authentication service.

use rosterd_auth::config::AuthConfig;
use rosterd_auth::service::AuthService;
use rosterd_auth::token;
use rosterd_core::error::RosterdError;
use rosterd_core::models::role::Role;
use rosterd_db::repository::SurrealUserRepository;
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;

fn test_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: "test-secret-not-for-production".into(),
        token_lifetime_secs: 900,
        jwt_issuer: "rosterd-test".into(),
        pepper: None,
        min_password_length: 8,
    }
}

/// Spin up in-memory DB, run migrations, return a user repository.
async fn setup() -> SurrealUserRepository<surrealdb::engine::local::Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    rosterd_db::run_migrations(&db).await.unwrap();
    SurrealUserRepository::new(db)
}

#[tokio::test]
async fn register_defaults_to_user_role() {
    let svc = AuthService::new(setup().await, test_config());

    let user = svc
        .register("alice", "correct-horse-battery", None)
        .await
        .unwrap();

    assert_eq!(user.username, "alice");
    assert_eq!(user.role, Role::User);
    // The stored hash is never the plaintext.
    assert_ne!(user.password_hash, "correct-horse-battery");
}

#[tokio::test]
async fn register_honors_role_override() {
    let svc = AuthService::new(setup().await, test_config());

    let user = svc
        .register("root-admin", "correct-horse-battery", Some(Role::Admin))
        .await
        .unwrap();

    assert_eq!(user.role, Role::Admin);
}

#[tokio::test]
async fn duplicate_registration_conflicts() {
    let svc = AuthService::new(setup().await, test_config());

    svc.register("alice", "correct-horse-battery", None)
        .await
        .unwrap();
    let err = svc
        .register("alice", "another-password", None)
        .await
        .unwrap_err();

    assert!(matches!(err, RosterdError::AlreadyExists { .. }), "{err:?}");
}

#[tokio::test]
async fn short_password_is_rejected() {
    let svc = AuthService::new(setup().await, test_config());

    let err = svc.register("alice", "short", None).await.unwrap_err();
    assert!(matches!(err, RosterdError::Validation { .. }), "{err:?}");
}

#[tokio::test]
async fn login_happy_path_issues_verifiable_token() {
    let config = test_config();
    let svc = AuthService::new(setup().await, config.clone());

    svc.register("alice", "correct-horse-battery", None)
        .await
        .unwrap();
    let out = svc.login("alice", "correct-horse-battery").await.unwrap();

    assert_eq!(out.role, Role::User);
    assert_eq!(out.expires_in, 900);

    let claims = token::verify_token(&out.token, &config).unwrap().0;
    assert_eq!(claims.sub, "alice");
}

#[tokio::test]
async fn login_wrong_password_is_invalid_credentials() {
    let svc = AuthService::new(setup().await, test_config());

    svc.register("alice", "correct-horse-battery", None)
        .await
        .unwrap();
    let err = svc.login("alice", "wrong-password").await.unwrap_err();

    assert!(
        matches!(err, RosterdError::AuthenticationFailed { .. }),
        "{err:?}"
    );
}

#[tokio::test]
async fn login_unknown_user_is_indistinguishable_from_wrong_password() {
    let svc = AuthService::new(setup().await, test_config());

    svc.register("alice", "correct-horse-battery", None)
        .await
        .unwrap();

    let unknown = svc
        .login("nobody", "correct-horse-battery")
        .await
        .unwrap_err();
    let wrong = svc.login("alice", "wrong-password").await.unwrap_err();

    // Both surface the same message; neither leaks which part failed.
    assert_eq!(unknown.to_string(), wrong.to_string());
}

#[tokio::test]
async fn peppered_service_verifies_its_own_hashes() {
    let mut config = test_config();
    config.pepper = Some("server-side-secret".into());
    let svc = AuthService::new(setup().await, config);

    svc.register("alice", "correct-horse-battery", None)
        .await
        .unwrap();
    let out = svc.login("alice", "correct-horse-battery").await.unwrap();
    assert_eq!(out.role, Role::User);
}
