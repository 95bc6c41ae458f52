//! The access-control pipeline: authentication, then authorization.
//!
//! Two composable middleware stages replace the framework-managed
//! filter chain of a typical annotation-driven setup:
//!
//! 1. [`authenticate`] verifies the bearer token and re-resolves the
//!    user's current role from the credential store, attaching a
//!    [`SecurityContext`] to the request.
//! 2. [`authorize`] checks the static route policy against that
//!    context.
//!
//! The role lookup happens on every request by design: a role change
//! takes effect on the very next request, even for tokens issued
//! before the change.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use rosterd_auth::{AuthError, token};
use rosterd_core::context::SecurityContext;
use rosterd_core::error::RosterdError;
use rosterd_core::repository::UserRepository;
use surrealdb::Connection;
use tracing::debug;

use crate::error::ApiError;
use crate::policy::{RouteAccess, route_access};
use crate::state::AppState;

/// Authentication stage.
///
/// Public routes pass through untouched. Any other route must carry
/// a valid bearer token; the verified subject is then resolved to
/// its current role and attached as a [`SecurityContext`].
pub async fn authenticate<C: Connection>(
    State(state): State<AppState<C>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if *route_access(request.method(), request.uri().path()) == RouteAccess::Public {
        return Ok(next.run(request).await);
    }

    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| ApiError::unauthorized("MISSING_TOKEN", "authentication required"))?;

    let raw_token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::unauthorized("INVALID_AUTH_HEADER", "expected a bearer token"))?;

    let claims = token::verify_token(raw_token, &state.auth_config)
        .map(|validated| validated.0)
        .map_err(|e| match e {
            AuthError::TokenExpired => ApiError::unauthorized("TOKEN_EXPIRED", e.to_string()),
            AuthError::TokenInvalid(_) => ApiError::unauthorized("TOKEN_INVALID", e.to_string()),
            other => ApiError::from(RosterdError::from(other)),
        })?;

    // Re-resolve the current role; the token never carries one. A
    // subject with no backing user record has no role assignment —
    // fail closed with 403 rather than let the request through.
    let user = match state.users.get_by_username(&claims.sub).await {
        Ok(user) => user,
        Err(RosterdError::NotFound { .. }) => {
            debug!(username = %claims.sub, "token subject has no role assignment");
            return Err(ApiError::forbidden("NO_ROLE", "no role assigned"));
        }
        Err(e) => return Err(e.into()),
    };

    request.extensions_mut().insert(SecurityContext {
        username: user.username,
        role: user.role,
    });

    Ok(next.run(request).await)
}

/// Authorization stage.
///
/// Looks up the first matching policy rule and checks the
/// [`SecurityContext`] established by [`authenticate`] against it.
pub async fn authorize(request: Request, next: Next) -> Result<Response, ApiError> {
    let access = route_access(request.method(), request.uri().path());

    if *access == RouteAccess::Public {
        return Ok(next.run(request).await);
    }

    let ctx = request
        .extensions()
        .get::<SecurityContext>()
        .ok_or_else(|| ApiError::unauthorized("MISSING_TOKEN", "authentication required"))?;

    match access {
        RouteAccess::Public => unreachable!("handled above"),
        RouteAccess::Authenticated => {}
        RouteAccess::AnyOf(roles) => {
            if !roles.contains(&ctx.role) {
                debug!(
                    username = %ctx.username,
                    role = %ctx.role,
                    path = %request.uri().path(),
                    "role not permitted for route"
                );
                return Err(ApiError::forbidden(
                    "FORBIDDEN",
                    "insufficient role for this operation",
                ));
            }
        }
    }

    Ok(next.run(request).await)
}
