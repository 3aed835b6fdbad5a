use actix_web::{web, HttpResponse, Result};
use serde::Serialize;

use crate::error::AppError;
use crate::extractors::AuthPayload;

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user_id: String,
}

/// Protected endpoint that returns the caller's verified identity.
async fn me(auth: AuthPayload) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(MeResponse {
        user_id: auth.user_id,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/private/me").route(web::get().to(me)));
}
