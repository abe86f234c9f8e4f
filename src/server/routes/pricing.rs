//! Pricing API endpoints
//!
//! Quotes for whole shipments plus the individual clearance and pickup
//! calculators behind them.

use crate::core::country::resolve_country_code;
use crate::core::types::Shipment;
use crate::server::AppState;
use crate::server::routes::ApiResponse;
use crate::services::pricing::{ClearanceFeeSchedule, FeeSchedules, Quote};
use crate::utils::error::{PreclearError, Result};
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Clearance calculation request payload
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearanceRequest {
    pub dest_country: String,
    pub customs_value: f64,
    #[serde(default)]
    pub line_item_count: u32,
    #[serde(default)]
    pub is_special_commodity: bool,
}

/// Clearance calculation response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearanceResponse {
    /// Destination after normalization
    pub dest_country: String,
    pub customs_clearance: f64,
    /// Schedule the fee was computed from
    pub schedule: ClearanceFeeSchedule,
}

/// Pickup charge response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PickupResponse {
    pub origin_country: String,
    pub pickup_charge: f64,
}

/// Quote a shipment
/// POST /api/v1/pricing/quote
pub async fn quote(
    data: web::Data<AppState>,
    payload: web::Json<Shipment>,
) -> Result<HttpResponse> {
    let shipment = payload.into_inner();
    info!(shipment_id = %shipment.id, "Quote requested");

    let quote: Quote = data.pricing.quote(&shipment);
    Ok(HttpResponse::Ok().json(ApiResponse::success(quote)))
}

/// Clearance fee for explicit inputs
/// POST /api/v1/pricing/clearance
pub async fn clearance(
    data: web::Data<AppState>,
    payload: web::Json<ClearanceRequest>,
) -> Result<HttpResponse> {
    let request = payload.into_inner();
    if !request.customs_value.is_finite() {
        return Err(PreclearError::bad_request("customsValue must be a finite number"));
    }

    let dest_country = resolve_country_code(&request.dest_country);
    let schedules = data.pricing.schedules();
    let customs_clearance = data.pricing.clearance(
        &dest_country,
        request.customs_value,
        request.line_item_count,
        request.is_special_commodity,
    );
    debug!(
        dest = %dest_country,
        value = request.customs_value,
        fee = customs_clearance,
        "Clearance calculated"
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(ClearanceResponse {
        schedule: schedules.clearance_schedule(&dest_country),
        dest_country,
        customs_clearance,
    })))
}

/// Flat pickup charge for an origin country
/// GET /api/v1/pricing/pickup/{country}
pub async fn pickup(data: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse> {
    let origin_country = resolve_country_code(&path.into_inner());
    let pickup_charge = data.pricing.pickup_charge(&origin_country);

    Ok(HttpResponse::Ok().json(ApiResponse::success(PickupResponse {
        origin_country,
        pickup_charge,
    })))
}

/// Effective fee schedules, overrides included
/// GET /api/v1/pricing/schedules
pub async fn schedules(data: web::Data<AppState>) -> Result<HttpResponse> {
    let schedules: &FeeSchedules = data.pricing.schedules();
    Ok(HttpResponse::Ok().json(ApiResponse::success(schedules)))
}

/// Configure pricing routes
pub fn configure_pricing_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/pricing")
            .route("/quote", web::post().to(quote))
            .route("/clearance", web::post().to(clearance))
            .route("/pickup/{country}", web::get().to(pickup))
            .route("/schedules", web::get().to(schedules)),
    );
}
