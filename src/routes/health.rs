use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::error::AppError;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    app_version: String,
}

async fn health() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        app_version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}
