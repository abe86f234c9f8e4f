//! Import/export rule endpoints

use crate::server::AppState;
use crate::server::routes::ApiResponse;
use crate::services::shipments::ImportExportRule;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

/// Query parameters for listing rules
#[derive(Debug, Default, Deserialize)]
pub struct RuleQuery {
    /// Destination country code
    pub country: Option<String>,
}

/// GET /api/v1/rules?country=
pub async fn list_rules(
    data: web::Data<AppState>,
    query: web::Query<RuleQuery>,
) -> Result<HttpResponse> {
    let rules = match query.into_inner().country {
        Some(country) => data.store.rules_for_country(&country),
        None => data.store.import_export_rules(),
    };
    Ok(HttpResponse::Ok().json(ApiResponse::success(rules)))
}

/// POST /api/v1/rules
pub async fn create_rule(
    data: web::Data<AppState>,
    payload: web::Json<ImportExportRule>,
) -> Result<HttpResponse> {
    let rule = data.store.add_import_export_rule(payload.into_inner())?;
    Ok(HttpResponse::Created().json(ApiResponse::success(rule)))
}

/// PUT /api/v1/rules/{id}
pub async fn update_rule(
    data: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<ImportExportRule>,
) -> Result<HttpResponse> {
    let rule = data
        .store
        .update_import_export_rule(&path.into_inner(), payload.into_inner())?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(rule)))
}

/// DELETE /api/v1/rules/{id}
pub async fn delete_rule(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    data.store.delete_import_export_rule(&path.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_rule_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/rules")
            .route("", web::get().to(list_rules))
            .route("", web::post().to(create_rule))
            .route("/{id}", web::put().to(update_rule))
            .route("/{id}", web::delete().to(delete_rule)),
    );
}
