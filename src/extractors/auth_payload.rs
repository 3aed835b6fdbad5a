//! Verified identity attached to a request by the auth gate.

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ready, Ready};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Request-scoped identity, present in the request extensions only after
/// the auth gate has validated the bearer token. Lives for a single
/// request and is never persisted.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AuthPayload {
    pub user_id: String,
}

impl FromRequest for AuthPayload {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<AuthPayload>()
                .cloned()
                .ok_or(AppError::Unauthorized),
        )
    }
}
