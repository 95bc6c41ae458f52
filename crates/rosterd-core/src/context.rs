//! Request-scoped security context.

use serde::{Deserialize, Serialize};

use crate::models::role::Role;

/// The identity established for one request.
///
/// Built by the authentication middleware after token verification
/// and role re-resolution, attached to the request, and discarded
/// when the request completes. Passed explicitly — there is no
/// process-wide holder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityContext {
    pub username: String,
    /// The user's role as looked up at request time, not as it was
    /// when the token was issued.
    pub role: Role,
}
