use clap::Parser;
use shiphawk_rates::utils::{logger, validation::Validate};
use shiphawk_rates::{Carrier, CarrierConfig, Cart, CliArgs, HttpRateGateway, RateOutcome};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("Starting shiphawk-rates CLI");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    let config = CarrierConfig::from_toml_file(&args.config)?;
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let cart: Cart = serde_json::from_str(&std::fs::read_to_string(&args.cart)?)?;
    tracing::debug!(items = cart.items.len(), dest = %cart.dest_postcode, "cart loaded");

    let gateway = HttpRateGateway::new(&config)?;
    let carrier = Carrier::new(config, gateway);

    match carrier.collect_rates(&cart).await {
        RateOutcome::NotApplicable => {
            println!("Carrier is disabled; no rates collected.");
        }
        RateOutcome::Methods(methods) if methods.is_empty() => {
            println!("No rates available for this destination.");
        }
        RateOutcome::Methods(methods) => {
            println!("✅ {} rate(s) available:", methods.len());
            for method in &methods {
                println!(
                    "  {} / {}: ${:.2}",
                    method.carrier_title, method.method_title, method.price
                );
            }
        }
        RateOutcome::Empty { reason } => {
            tracing::error!("Rate gateway returned an error: {}", reason);
            println!("No rates available for this destination.");
        }
        RateOutcome::Failed(e) => {
            tracing::error!("Rate request failed: {}", e);
            println!("No rates available for this destination.");
        }
    }

    Ok(())
}
