//! Configuration integration tests
//!
//! Configuration files feeding the pricing service and the HTTP state.

#[cfg(test)]
mod tests {
    use crate::common::ShipmentFactory;
    use crate::{assert_amount, assert_err, assert_ok};
    use preclear::config::{Config, ENV_PORT, LogFormat};
    use preclear::core::country::resolve_country_code;
    use preclear::server::AppState;
    use preclear::services::pricing::PricingService;
    use preclear::PreclearError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const OVERRIDES: &str = r#"
server:
  port: 9000
logging:
  level: debug
  format: compact
pricing:
  clearance:
    in: { base: 100, threshold: 1000, formalFee: 500, extraLineItemFee: 10, specialCommodityFee: 0 }
  pickup:
    us: 60
    default: 70
"#;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    // ==================== Loading ====================

    #[tokio::test]
    async fn test_overrides_reach_the_quote() {
        let file = write_config(OVERRIDES);
        let config = assert_ok!(Config::load(file.path()).await);
        let pricing = PricingService::from_config(config.pricing());

        let quote = pricing.quote(&ShipmentFactory::create("SHP-300"));
        assert_amount!(quote.breakdown.customs_clearance, 600.0);
        assert_amount!(quote.breakdown.pickup_charge, 60.0);
        assert_amount!(quote.breakdown.subtotal, 1160.0);
        assert_amount!(quote.breakdown.total, 1368.8);

        // Untouched entries keep their built-in values
        assert_eq!(pricing.pickup_charge("GB"), 25.0);
        assert_eq!(pricing.pickup_charge("ZA"), 70.0);
        assert_eq!(pricing.clearance("US", 900.0, 1, false), 35.0);
    }

    #[tokio::test]
    async fn test_state_uses_configured_pricing() {
        let file = write_config(OVERRIDES);
        let config = assert_ok!(Config::from_file(file.path()).await);
        assert_eq!(config.logging().format, LogFormat::Compact);

        let state = AppState::new(config);
        assert_eq!(state.config().server().port, 9000);
        assert_eq!(state.pricing.pickup_charge(&resolve_country_code("united states")), 60.0);
    }

    #[tokio::test]
    async fn test_invalid_table_key_is_rejected() {
        let file = write_config("pricing:\n  pickup:\n    USA: 10\n");
        let err = assert_err!(Config::load(file.path()).await);
        assert!(matches!(err, PreclearError::Config(_)));
        assert!(err.to_string().contains("USA"));
    }

    #[tokio::test]
    async fn test_unparseable_file_is_rejected() {
        let file = write_config("server: [not, a, map]\n");
        assert!(matches!(
            Config::from_file(file.path()).await,
            Err(PreclearError::Config(_))
        ));
    }

    // ==================== Overrides ====================

    #[tokio::test]
    async fn test_environment_beats_file() {
        let file = write_config(OVERRIDES);
        let mut config = assert_ok!(Config::from_file(file.path()).await);
        assert_ok!(config.apply_overrides_from(|key| {
            (key == ENV_PORT).then(|| "7070".to_string())
        }));

        assert_eq!(config.server().port, 7070);
        assert_ok!(config.validate());
    }
}
