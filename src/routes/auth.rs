use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub user_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Issue an access token for the given user.
///
/// Credential verification belongs to the account vertical; this route
/// only owns issuance.
async fn login(
    req: web::Json<LoginRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    if req.user_id.trim().is_empty() {
        return Err(AppError::bad_request("user id cannot be empty"));
    }

    let token = app_state.tokens.issue(&req.user_id)?;

    Ok(HttpResponse::Ok().json(LoginResponse { token }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/auth/login").route(web::post().to(login)));
}
