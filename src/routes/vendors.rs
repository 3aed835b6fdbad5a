use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::extractors::AuthPayload;
use crate::pagination::{PageMetadata, PageSpec};
use crate::state::app_state::AppState;
use crate::vendors::Vendor;

#[derive(Debug, Serialize, Deserialize)]
pub struct VendorListResponse {
    pub data: Vec<Vendor>,
    pub pagination: PageMetadata,
}

/// List vendors, paged.
async fn list_vendors(
    _auth: AuthPayload,
    query: web::Query<PageSpec>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (data, pagination) = app_state.vendors.list(&query)?;

    Ok(HttpResponse::Ok().json(VendorListResponse { data, pagination }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/vendors").route(web::get().to(list_vendors)));
}
