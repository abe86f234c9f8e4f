//! HTTP API integration tests
//!
//! The full actix application over a configured state, driven the way the
//! shipper and broker front ends use it.

#[cfg(test)]
mod tests {
    use crate::common::ShipmentFactory;
    use actix_web::http::StatusCode;
    use actix_web::{test, web};
    use preclear::config::Config;
    use preclear::server::AppState;
    use preclear::server::server::HttpServer;
    use serde_json::{Value, json};

    fn state() -> web::Data<AppState> {
        let config = Config::from_yaml_str("pricing:\n  pickup:\n    US: 60\n").unwrap();
        web::Data::new(AppState::new(config))
    }

    // ==================== Shipper flow ====================

    #[actix_web::test]
    async fn test_save_then_quote_over_http() {
        let app = test::init_service(HttpServer::create_app(state())).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/shipments/actions")
            .set_json(json!({
                "action": "save",
                "shipment": ShipmentFactory::create("SHP-400")
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["id"], "SHP-400");
        assert_eq!(body["data"]["status"], "draft");

        let req = test::TestRequest::get()
            .uri("/api/v1/shipments/SHP-400/quote")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["breakdown"]["pickupCharge"], 60.0);
        assert_eq!(body["data"]["sources"]["total"], "computed");

        let req = test::TestRequest::get()
            .uri("/api/v1/notifications?role=broker")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"][0]["type"], "shipment-created");
    }

    #[actix_web::test]
    async fn test_invalid_action_payload() {
        let app = test::init_service(HttpServer::create_app(state())).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/shipments/actions")
            .set_json(json!({ "action": "book", "id": "SHP-1" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/api/v1/shipments/actions")
            .set_json(json!({ "action": "book", "id": "SHP-1", "amount": 10.0 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_clear_returns_no_shipment() {
        let app = test::init_service(HttpServer::create_app(state())).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/shipments/actions")
            .set_json(json!({ "action": "clear" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["success"], true);
        assert!(body["data"].is_null());
    }

    // ==================== Lookups ====================

    #[actix_web::test]
    async fn test_country_list() {
        let app = test::init_service(HttpServer::create_app(state())).await;
        let req = test::TestRequest::get().uri("/api/v1/countries").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let countries = body["data"].as_array().unwrap();
        assert!(countries.iter().any(|c| c["code"] == "IN"));
        assert!(countries.iter().all(|c| c["known"] == true));
    }

    #[actix_web::test]
    async fn test_configured_pickup_over_http() {
        let app = test::init_service(HttpServer::create_app(state())).await;
        let req = test::TestRequest::get()
            .uri("/api/v1/pricing/pickup/United%20States")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["originCountry"], "US");
        assert_eq!(body["data"]["pickupCharge"], 60.0);
    }
}
