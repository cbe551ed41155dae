use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "shiphawk-rates")]
#[command(about = "Quote shipping rates for a cart through the ShipHawk gateway")]
pub struct CliArgs {
    /// Carrier configuration TOML file
    #[arg(long, default_value = "carrier.toml")]
    pub config: String,

    /// Cart JSON file with line items and destination
    #[arg(long)]
    pub cart: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
