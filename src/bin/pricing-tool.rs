//! Pricing command line tool
//!
//! Quotes shipment files and prints single fee lookups as JSON.

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use preclear::config::{Config, DEFAULT_CONFIG_PATH};
use preclear::core::country::resolve_country_code;
use preclear::core::types::Shipment;
use preclear::services::pricing::PricingService;
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;

fn cli() -> Command {
    Command::new("pricing-tool")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Customs clearance and pickup pricing from the command line")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .env("PRECLEAR_CONFIG")
                .default_value(DEFAULT_CONFIG_PATH)
                .value_parser(value_parser!(PathBuf))
                .help("Configuration file with fee schedule overrides"),
        )
        .subcommand_required(true)
        .subcommand(
            Command::new("quote").about("Quote a shipment JSON file").arg(
                Arg::new("file")
                    .required(true)
                    .value_parser(value_parser!(PathBuf)),
            ),
        )
        .subcommand(
            Command::new("clearance")
                .about("Clearance fee for explicit inputs")
                .arg(Arg::new("dest").long("dest").required(true))
                .arg(
                    Arg::new("value")
                        .long("value")
                        .required(true)
                        .value_parser(value_parser!(f64)),
                )
                .arg(
                    Arg::new("items")
                        .long("items")
                        .default_value("1")
                        .value_parser(value_parser!(u32)),
                )
                .arg(
                    Arg::new("special")
                        .long("special")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("pickup")
                .about("Pickup charge for an origin country")
                .arg(Arg::new("country").required(true)),
        )
        .subcommand(Command::new("schedules").about("Print the effective fee schedules"))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let matches = cli().get_matches();

    let config_path = matches
        .get_one::<PathBuf>("config")
        .context("missing config path")?;
    let config = Config::load(config_path)
        .await
        .with_context(|| format!("loading {}", config_path.display()))?;
    let pricing = PricingService::from_config(config.pricing());

    match matches.subcommand() {
        Some(("quote", sub)) => quote(&pricing, sub).await,
        Some(("clearance", sub)) => clearance(&pricing, sub),
        Some(("pickup", sub)) => pickup(&pricing, sub),
        Some(("schedules", _)) => print_json(pricing.schedules()),
        _ => anyhow::bail!("unknown subcommand"),
    }
}

async fn quote(pricing: &PricingService, matches: &ArgMatches) -> Result<()> {
    let path = matches
        .get_one::<PathBuf>("file")
        .context("missing shipment file")?;
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
    let shipment: Shipment = serde_json::from_str(&content)
        .with_context(|| format!("parsing shipment {}", path.display()))?;

    print_json(&pricing.quote(&shipment))
}

fn clearance(pricing: &PricingService, matches: &ArgMatches) -> Result<()> {
    let dest = resolve_country_code(
        matches
            .get_one::<String>("dest")
            .context("missing --dest")?,
    );
    let value = *matches.get_one::<f64>("value").context("missing --value")?;
    let items = *matches.get_one::<u32>("items").context("missing --items")?;
    let special = matches.get_flag("special");

    print_json(&json!({
        "customsClearance": pricing.clearance(&dest, value, items, special),
        "destCountry": dest,
        "customsValue": value,
        "lineItemCount": items,
        "isSpecialCommodity": special,
    }))
}

fn pickup(pricing: &PricingService, matches: &ArgMatches) -> Result<()> {
    let country = resolve_country_code(
        matches
            .get_one::<String>("country")
            .context("missing country")?,
    );

    print_json(&json!({
        "pickupCharge": pricing.pickup_charge(&country),
        "originCountry": country,
    }))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
