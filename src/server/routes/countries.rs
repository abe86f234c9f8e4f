//! Country lookup endpoints

use crate::core::country::{
    COUNTRIES, Currency, country_name, currency_for_country, is_known_country,
    resolve_country_code,
};
use crate::server::routes::ApiResponse;
use crate::utils::error::{PreclearError, Result};
use actix_web::{HttpResponse, web};
use serde::Serialize;

/// A resolved country
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryInfo {
    /// Raw input as received
    pub input: String,
    pub code: String,
    pub name: Option<&'static str>,
    pub known: bool,
    pub currency: Currency,
}

impl CountryInfo {
    fn resolve(input: &str) -> Self {
        let code = resolve_country_code(input);
        Self {
            input: input.to_string(),
            name: country_name(&code),
            known: is_known_country(&code),
            currency: currency_for_country(&code),
            code,
        }
    }
}

/// GET /api/v1/countries
pub async fn list_countries() -> HttpResponse {
    let countries: Vec<CountryInfo> = COUNTRIES
        .iter()
        .map(|(code, _)| CountryInfo::resolve(code))
        .collect();
    HttpResponse::Ok().json(ApiResponse::success(countries))
}

/// Resolve a code or English name
/// GET /api/v1/countries/{input}
pub async fn resolve_country(path: web::Path<String>) -> Result<HttpResponse> {
    let input = path.into_inner();
    if input.trim().is_empty() {
        return Err(PreclearError::bad_request("Country must not be empty"));
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(CountryInfo::resolve(&input))))
}

/// Configure country routes
pub fn configure_country_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/countries")
            .route("", web::get().to(list_countries))
            .route("/{input}", web::get().to(resolve_country)),
    );
}
