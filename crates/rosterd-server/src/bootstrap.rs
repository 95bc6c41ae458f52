//! First-run admin bootstrap.

use rosterd_auth::AuthService;
use rosterd_core::error::{RosterdError, RosterdResult};
use rosterd_core::models::role::Role;
use rosterd_core::repository::UserRepository;
use tracing::info;

/// Ensure an `admin` account with the ADMIN role exists.
///
/// Registration always assigns the USER role, so without at least
/// one seeded admin no role could ever be escalated. Runs once at
/// startup when an admin password is configured; an existing
/// `admin` account is left untouched.
pub async fn ensure_admin<U: UserRepository>(
    auth: &AuthService<U>,
    users: &U,
    password: &str,
) -> RosterdResult<()> {
    match users.get_by_username("admin").await {
        Ok(_) => Ok(()),
        Err(RosterdError::NotFound { .. }) => {
            auth.register("admin", password, Some(Role::Admin)).await?;
            info!("bootstrapped initial admin account");
            Ok(())
        }
        Err(e) => Err(e),
    }
}
