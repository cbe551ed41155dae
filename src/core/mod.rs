pub mod carrier;
pub mod client;
pub mod request;

pub use crate::domain::model::{RateOutcome, RateRequest, RateResponse, ShippingMethod};
pub use crate::domain::ports::RateGateway;
pub use crate::utils::error::Result;
