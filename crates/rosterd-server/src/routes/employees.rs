//! Employee CRUD and role management.
//!
//! Authorization is enforced by the middleware pipeline before any
//! handler here runs; handlers only consume the established
//! [`SecurityContext`].

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Extension, Json, Router};
use rosterd_core::context::SecurityContext;
use rosterd_core::models::employee::{Employee, EmployeeInput};
use rosterd_core::models::role::Role;
use rosterd_core::repository::{EmployeeRepository, UserRepository};
use serde::{Deserialize, Serialize};
use surrealdb::Connection;

use crate::error::ApiResult;
use crate::state::AppState;

/// A role assignment as exposed on the wire.
#[derive(Debug, Serialize)]
pub struct RoleRecord {
    pub username: String,
    pub role: Role,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRoleRequest {
    pub role: String,
}

pub fn routes<C: Connection>() -> Router<AppState<C>> {
    Router::new()
        .route("/", get(get_all::<C>).post(create::<C>))
        .route(
            "/{id}",
            get(get_one::<C>).put(update::<C>).delete(delete::<C>),
        )
        .route(
            "/roles/{username}",
            get(get_roles::<C>).put(update_role::<C>),
        )
}

/// `GET /employees`
async fn get_all<C: Connection>(
    State(state): State<AppState<C>>,
) -> ApiResult<Json<Vec<Employee>>> {
    Ok(Json(state.employees.find_all().await?))
}

/// `GET /employees/{id}`
async fn get_one<C: Connection>(
    State(state): State<AppState<C>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Employee>> {
    Ok(Json(state.employees.find_by_id(id).await?))
}

/// `POST /employees` — the creator is the authenticated caller.
///
/// Unlike registration, creating an employee has no role side
/// effects; role assignment happens only through the auth flow.
async fn create<C: Connection>(
    State(state): State<AppState<C>>,
    Extension(ctx): Extension<SecurityContext>,
    Json(input): Json<EmployeeInput>,
) -> ApiResult<(StatusCode, Json<Employee>)> {
    let employee = state.employees.create(input, &ctx.username).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// `PUT /employees/{id}`
async fn update<C: Connection>(
    State(state): State<AppState<C>>,
    Path(id): Path<i64>,
    Json(input): Json<EmployeeInput>,
) -> ApiResult<Json<Employee>> {
    Ok(Json(state.employees.update(id, input).await?))
}

/// `DELETE /employees/{id}`
async fn delete<C: Connection>(
    State(state): State<AppState<C>>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    state.employees.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /employees/roles/{username}` — public role lookup.
///
/// Returns a list for wire compatibility; the store guarantees one
/// role per user, so the list always has exactly one entry.
async fn get_roles<C: Connection>(
    State(state): State<AppState<C>>,
    Path(username): Path<String>,
) -> ApiResult<Json<Vec<RoleRecord>>> {
    let user = state.users.get_by_username(&username).await?;
    Ok(Json(vec![RoleRecord {
        username: user.username,
        role: user.role,
    }]))
}

/// `PUT /employees/roles/{username}` — admin-only role update.
///
/// An invalid role value is rejected before the store is touched,
/// so the existing assignment is left unchanged.
async fn update_role<C: Connection>(
    State(state): State<AppState<C>>,
    Path(username): Path<String>,
    Json(req): Json<UpdateRoleRequest>,
) -> ApiResult<Json<RoleRecord>> {
    let role = Role::parse(&req.role)?;
    let user = state.users.update_role(&username, role).await?;
    Ok(Json(RoleRecord {
        username: user.username,
        role: user.role,
    }))
}
