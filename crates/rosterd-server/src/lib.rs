//! rosterd server — axum HTTP surface for the employee directory
//! with role-based access control.
//!
//! Every request passes through an explicit two-stage middleware
//! pipeline: authentication (bearer token verification + role
//! re-resolution) followed by route-policy authorization. Handlers
//! read the resulting [`rosterd_core::context::SecurityContext`]
//! from the request extensions.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod middleware;
pub mod policy;
pub mod routes;
pub mod state;

use axum::Router;
use axum::http::{HeaderValue, Method};
use axum::middleware::{from_fn, from_fn_with_state};
use surrealdb::Connection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::middleware::{authenticate, authorize};
use crate::state::AppState;

/// Build the application router with the full middleware pipeline.
///
/// Layer order matters: authentication runs first on every request,
/// then policy authorization, then the route handler.
pub fn app<C: Connection>(state: AppState<C>, cors_origin: Option<HeaderValue>) -> Router {
    let cors = match cors_origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers(Any),
        None => CorsLayer::permissive(),
    };

    Router::new()
        .nest("/auth", routes::auth::routes())
        .nest("/employees", routes::employees::routes())
        .layer(from_fn(authorize))
        .layer(from_fn_with_state(state.clone(), authenticate::<C>))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
