//! Issuance and validation of signed bearer tokens.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use tracing::debug;
use uuid::Uuid;

use crate::auth::claims::Claims;
use crate::auth::clock::Clock;
use crate::error::AppError;
use crate::state::token_config::TokenConfig;

/// Access tokens live for 30 days from issuance.
pub const TOKEN_TTL_SECS: i64 = 30 * 24 * 60 * 60;

/// Sole owner of the signing secret and the clock. Stateless across
/// requests; safe for concurrent use without locking.
#[derive(Clone)]
pub struct TokenService {
    config: TokenConfig,
    clock: Arc<dyn Clock>,
}

impl TokenService {
    /// Fails when the signing secret is empty. Fatal at startup, not
    /// recoverable per-request.
    pub fn new(config: TokenConfig, clock: Arc<dyn Clock>) -> Result<Self, AppError> {
        if config.secret.is_empty() {
            return Err(AppError::config("token secret must not be empty"));
        }
        Ok(Self { config, clock })
    }

    /// Mint a signed token for the given user identifier.
    pub fn issue(&self, sub: &str) -> Result<String, AppError> {
        let iat = unix_seconds(self.clock.now())?;
        let claims = Claims {
            sub: sub.to_string(),
            iat,
            exp: iat + TOKEN_TTL_SECS,
            jti: Uuid::new_v4().to_string(),
        };

        encode(
            &Header::new(self.config.algorithm),
            &claims,
            &EncodingKey::from_secret(&self.config.secret),
        )
        .map_err(|e| AppError::internal(format!("failed to sign token: {e}")))
    }

    /// Verify a token and return its claims.
    ///
    /// The algorithm is pinned to the configured one (HS256); a token whose
    /// header names any other algorithm is rejected outright. Temporal
    /// checks run against the injected clock with zero skew tolerance, not
    /// against the signing library's wall clock.
    pub fn validate(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::new(self.config.algorithm);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let claims = decode::<Claims>(
            token,
            &DecodingKey::from_secret(&self.config.secret),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::InvalidSignature => AppError::TokenSignatureInvalid,
            ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
                AppError::TokenAlgorithmMismatch
            }
            _ => AppError::TokenMalformed,
        })?;

        let now = unix_seconds(self.clock.now())?;
        if claims.iat > now {
            debug!(sub = %claims.sub, iat = claims.iat, now, "token issued in the future");
            return Err(AppError::TokenMalformed);
        }
        if now >= claims.exp {
            debug!(sub = %claims.sub, exp = claims.exp, now, "token expired");
            return Err(AppError::TokenExpired);
        }

        Ok(claims)
    }
}

fn unix_seconds(instant: SystemTime) -> Result<i64, AppError> {
    instant
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .map_err(|_| AppError::internal("clock is before the unix epoch"))
}
