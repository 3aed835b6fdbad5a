//! Payload of backend-issued access tokens.

use serde::{Deserialize, Serialize};

/// Claims embedded in a signed bearer token. Never persisted server-side;
/// expiry is purely a timestamp comparison and there is no revocation.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// User identifier the token was issued for.
    pub sub: String,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
    /// Random unique identifier, fresh per issuance.
    pub jti: String,
}
