//! Authentication service — registration and login orchestration.

use rosterd_core::error::{RosterdError, RosterdResult};
use rosterd_core::models::role::Role;
use rosterd_core::models::user::{CreateUser, User};
use rosterd_core::repository::UserRepository;
use tracing::info;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::password;
use crate::token;

/// Successful login result.
#[derive(Debug)]
pub struct LoginOutput {
    /// Signed bearer token.
    pub token: String,
    /// The user's current role at login time.
    pub role: Role,
    /// Token lifetime in seconds.
    pub expires_in: u64,
}

/// Authentication service.
///
/// Generic over the repository implementation so that the auth layer
/// has no dependency on the database crate.
pub struct AuthService<U: UserRepository> {
    user_repo: U,
    config: AuthConfig,
}

impl<U: UserRepository> AuthService<U> {
    pub fn new(user_repo: U, config: AuthConfig) -> Self {
        Self { user_repo, config }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Register a new account.
    ///
    /// The role defaults to `USER` unless explicitly overridden.
    /// This is the single authoritative role-assignment entry point:
    /// user and role land in the store as one atomic record write, so
    /// a partial failure can never leave an account without a role.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        role: Option<Role>,
    ) -> RosterdResult<User> {
        if username.trim().is_empty() {
            return Err(RosterdError::Validation {
                message: "username must not be empty".into(),
            });
        }
        if password.len() < self.config.min_password_length {
            return Err(RosterdError::Validation {
                message: format!(
                    "password must be at least {} characters",
                    self.config.min_password_length
                ),
            });
        }

        let password_hash = password::hash_password(password, self.config.pepper.as_deref())
            .map_err(|e| RosterdError::Crypto(e.to_string()))?;

        let user = self
            .user_repo
            .create(CreateUser {
                username: username.to_string(),
                password_hash,
                role: role.unwrap_or(Role::User),
            })
            .await?;

        info!(username = %user.username, role = %user.role, "user registered");
        Ok(user)
    }

    /// Authenticate with username + password and issue a bearer
    /// token.
    ///
    /// An unknown username and a wrong password are indistinguishable
    /// to the caller — both yield `InvalidCredentials`.
    pub async fn login(&self, username: &str, password: &str) -> RosterdResult<LoginOutput> {
        let user = match self.user_repo.get_by_username(username).await {
            Ok(u) => u,
            Err(RosterdError::NotFound { .. }) => {
                return Err(AuthError::InvalidCredentials.into());
            }
            Err(e) => return Err(e),
        };

        let valid = password::verify_password(
            password,
            &user.password_hash,
            self.config.pepper.as_deref(),
        )
        .map_err(|e| RosterdError::Crypto(e.to_string()))?;

        if !valid {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = token::issue_token(&user.username, &self.config)?;

        info!(username = %user.username, "login succeeded");
        Ok(LoginOutput {
            token,
            role: user.role,
            expires_in: self.config.token_lifetime_secs,
        })
    }
}
