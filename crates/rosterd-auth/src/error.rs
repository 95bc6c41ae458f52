//! Authentication error types.

use rosterd_core::error::RosterdError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("token has expired")]
    TokenExpired,

    #[error("invalid token: {0}")]
    TokenInvalid(String),

    #[error("cryptography error: {0}")]
    Crypto(String),
}

impl From<AuthError> for RosterdError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials
            | AuthError::TokenExpired
            | AuthError::TokenInvalid(_) => RosterdError::AuthenticationFailed {
                reason: err.to_string(),
            },
            AuthError::Crypto(msg) => RosterdError::Crypto(msg),
        }
    }
}
