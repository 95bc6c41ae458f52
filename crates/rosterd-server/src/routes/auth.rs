//! Registration, login, and user listing.

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use rosterd_core::models::role::Role;
use rosterd_core::models::user::User;
use rosterd_core::repository::UserRepository;
use serde::{Deserialize, Serialize};
use surrealdb::Connection;
use uuid::Uuid;

use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AuthRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: Role,
}

/// A user as exposed to clients — the password hash never leaves
/// the server.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

pub fn routes<C: Connection>() -> Router<AppState<C>> {
    Router::new()
        .route("/register", post(register::<C>))
        .route("/login", post(login::<C>))
        .route("/users", get(list_users::<C>))
}

/// `POST /auth/register` — create an account with the default USER
/// role.
async fn register<C: Connection>(
    State(state): State<AppState<C>>,
    Json(req): Json<AuthRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let user = state.auth.register(&req.username, &req.password, None).await?;
    Ok(Json(MessageResponse {
        message: format!("User registered successfully with role: {}", user.role),
    }))
}

/// `POST /auth/login` — verify credentials and issue a bearer token.
async fn login<C: Connection>(
    State(state): State<AppState<C>>,
    Json(req): Json<AuthRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let out = state.auth.login(&req.username, &req.password).await?;
    Ok(Json(LoginResponse {
        token: out.token,
        role: out.role,
    }))
}

/// `GET /auth/users` — list registered accounts.
async fn list_users<C: Connection>(
    State(state): State<AppState<C>>,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = state.users.list().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
