//! Bearer token issuance and verification.
//!
//! Tokens are stateless HS256 JWTs: signature + expiry are the whole
//! proof, no server-side session store. The role is deliberately not
//! an authorization input here — it is re-resolved from the
//! credential store on every request, so role changes take effect
//! immediately instead of being frozen into outstanding tokens.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::error::AuthError;

/// JWT claims embedded in every bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — username.
    pub sub: String,
    /// Issuer.
    pub iss: String,
    /// Issued-at (Unix timestamp).
    pub iat: i64,
    /// Expiration (Unix timestamp).
    pub exp: i64,
    /// Unique token ID (UUID string).
    pub jti: String,
}

/// Issue a signed HS256 bearer token for an authenticated username.
///
/// The expiry is `token_lifetime_secs` after issuance.
pub fn issue_token(username: &str, config: &AuthConfig) -> Result<String, AuthError> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: username.to_string(),
        iss: config.jwt_issuer.clone(),
        iat: now,
        exp: now + config.token_lifetime_secs as i64,
        jti: Uuid::new_v4().to_string(),
    };

    let key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
    let header = Header::new(Algorithm::HS256);
    jsonwebtoken::encode(&header, &claims, &key)
        .map_err(|e| AuthError::Crypto(format!("JWT encode: {e}")))
}

/// Decode and verify a bearer token (signature, expiry, issuer).
///
/// Expiry failures map to [`AuthError::TokenExpired`]; everything
/// else (malformed token, bad signature, wrong issuer) maps to
/// [`AuthError::TokenInvalid`] so callers can distinguish the two.
pub fn decode_token(token: &str, config: &AuthConfig) -> Result<Claims, AuthError> {
    let key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[&config.jwt_issuer]);
    validation.set_required_spec_claims(&["sub", "exp", "iat", "iss"]);

    jsonwebtoken::decode::<Claims>(token, &key, &validation)
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => AuthError::TokenInvalid(e.to_string()),
        })
}

/// Verified JWT claims — a newtype proving the token was checked.
///
/// Used by the server's authentication middleware to carry the
/// verified subject out of token verification.
#[derive(Debug, Clone)]
pub struct ValidatedClaims(pub Claims);

/// Verify a bearer token and return the verified claims.
///
/// This is the entry point for request-level authentication. It is
/// pure computation — no database lookup is performed.
pub fn verify_token(token: &str, config: &AuthConfig) -> Result<ValidatedClaims, AuthError> {
    decode_token(token, config).map(ValidatedClaims)
}
