//! Application state shared across handlers.

use std::sync::Arc;

use rosterd_auth::{AuthConfig, AuthService};
use rosterd_db::repository::{SurrealEmployeeRepository, SurrealUserRepository};
use surrealdb::{Connection, Surreal};

/// Shared application state, cloned into every handler.
///
/// Generic over the SurrealDB connection type so the same router
/// serves the remote engine in production and the in-memory engine
/// in tests.
pub struct AppState<C: Connection> {
    pub auth: Arc<AuthService<SurrealUserRepository<C>>>,
    pub users: SurrealUserRepository<C>,
    pub employees: SurrealEmployeeRepository<C>,
    pub auth_config: AuthConfig,
}

impl<C: Connection> AppState<C> {
    pub fn new(db: Surreal<C>, auth_config: AuthConfig) -> Self {
        let users = SurrealUserRepository::new(db.clone());
        let employees = SurrealEmployeeRepository::new(db);
        let auth = Arc::new(AuthService::new(users.clone(), auth_config.clone()));
        Self {
            auth,
            users,
            employees,
            auth_config,
        }
    }
}

// Manual impl: deriving Clone would require `C: Clone`, which the
// connection types do not need — the inner handles are all Clone.
impl<C: Connection> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            auth: Arc::clone(&self.auth),
            users: self.users.clone(),
            employees: self.employees.clone(),
            auth_config: self.auth_config.clone(),
        }
    }
}
