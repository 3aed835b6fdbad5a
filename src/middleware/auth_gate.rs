//! Bearer-token authentication middleware.
//!
//! Wraps protected scopes. Extracts the bearer token from the
//! `Authorization` header, delegates validation to the token service and
//! either attaches the verified identity to the request extensions or
//! short-circuits with an error response. Faults never propagate past the
//! request boundary; this middleware renders them itself.

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::error::ResponseError;
use actix_web::http::header::{self, HeaderValue};
use actix_web::{web, Error, HttpMessage};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::debug;

use crate::error::AppError;
use crate::extractors::auth_payload::AuthPayload;
use crate::state::app_state::AppState;

pub struct AuthGate;

impl<S, B> Transform<S, ServiceRequest> for AuthGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthGateMiddleware { service }))
    }
}

pub struct AuthGateMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AuthGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let auth_header = req.headers().get(header::AUTHORIZATION).cloned();

        let verified = bearer_token(auth_header.as_ref()).and_then(|token| {
            let state = req
                .app_data::<web::Data<AppState>>()
                .ok_or_else(|| AppError::internal("AppState not available"))?;
            state.tokens.validate(&token)
        });

        match verified {
            Ok(claims) => {
                req.extensions_mut().insert(AuthPayload {
                    user_id: claims.sub,
                });

                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(|res| res.map_into_left_body()) })
            }
            Err(err) => {
                if err.is_token_fault() {
                    debug!(fault = %err, "bearer token rejected");
                }
                let response = err.error_response().map_into_right_body();
                let (request, _) = req.into_parts();
                Box::pin(async move { Ok(ServiceResponse::new(request, response)) })
            }
        }
    }
}

/// Pull the raw token out of an `Authorization: Bearer <token>` header.
///
/// The scheme comparison is a case-sensitive match on the literal `Bearer`.
/// More than two fields is tolerated; only the second is used.
fn bearer_token(value: Option<&HeaderValue>) -> Result<String, AppError> {
    let value = value.ok_or(AppError::AuthHeaderMissing)?;
    let value = value.to_str().map_err(|_| AppError::AuthHeaderMalformed)?;

    let fields: Vec<&str> = value.split_whitespace().collect();
    if fields.len() < 2 {
        return Err(AppError::AuthHeaderMalformed);
    }
    if fields[0] != "Bearer" {
        return Err(AppError::AuthSchemeInvalid);
    }

    Ok(fields[1].to_string())
}
