pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use config::CarrierConfig;
pub use core::{carrier::Carrier, client::HttpRateGateway};
pub use domain::model::{Cart, CartItem, RateOutcome, ShippingMethod};
pub use utils::error::{RateError, Result};
