//! Server configuration loaded from environment variables.

use rosterd_auth::AuthConfig;
use rosterd_db::DbConfig;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {var}: {value}")]
    InvalidVar { var: &'static str, value: String },
}

/// Top-level server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to.
    pub bind_addr: String,
    /// Allowed CORS origin for the frontend.
    pub cors_origin: String,
    /// If set, an `admin` account with the ADMIN role is created at
    /// startup when none exists.
    pub admin_password: Option<String>,
    pub db: DbConfig,
    pub auth: AuthConfig,
}

fn var_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

impl ServerConfig {
    /// Load configuration from the environment.
    ///
    /// `ROSTERD_JWT_SECRET` is required; everything else has a
    /// development default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret = std::env::var("ROSTERD_JWT_SECRET")
            .map_err(|_| ConfigError::MissingVar("ROSTERD_JWT_SECRET"))?;

        let token_lifetime_secs = match std::env::var("ROSTERD_TOKEN_LIFETIME_SECS") {
            Ok(v) => v.parse().map_err(|_| ConfigError::InvalidVar {
                var: "ROSTERD_TOKEN_LIFETIME_SECS",
                value: v,
            })?,
            Err(_) => AuthConfig::default().token_lifetime_secs,
        };

        let min_password_length = match std::env::var("ROSTERD_MIN_PASSWORD_LENGTH") {
            Ok(v) => v.parse().map_err(|_| ConfigError::InvalidVar {
                var: "ROSTERD_MIN_PASSWORD_LENGTH",
                value: v,
            })?,
            Err(_) => AuthConfig::default().min_password_length,
        };

        Ok(Self {
            bind_addr: var_or("ROSTERD_BIND_ADDR", "127.0.0.1:8080"),
            cors_origin: var_or("ROSTERD_CORS_ORIGIN", "http://localhost:3000"),
            admin_password: std::env::var("ROSTERD_ADMIN_PASSWORD").ok(),
            db: DbConfig {
                url: var_or("ROSTERD_DB_URL", &DbConfig::default().url),
                namespace: var_or("ROSTERD_DB_NS", &DbConfig::default().namespace),
                database: var_or("ROSTERD_DB_NAME", &DbConfig::default().database),
                username: var_or("ROSTERD_DB_USER", &DbConfig::default().username),
                password: var_or("ROSTERD_DB_PASS", &DbConfig::default().password),
            },
            auth: AuthConfig {
                jwt_secret,
                token_lifetime_secs,
                jwt_issuer: var_or("ROSTERD_JWT_ISSUER", &AuthConfig::default().jwt_issuer),
                pepper: std::env::var("ROSTERD_PASSWORD_PEPPER").ok(),
                min_password_length,
            },
        })
    }
}
