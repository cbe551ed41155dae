use crate::domain::model::{RateRequest, RateResponse};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Seam between the carrier and the HTTP layer. Tests substitute a
/// call-counting mock to prove a disabled carrier never hits the network.
#[async_trait]
pub trait RateGateway: Send + Sync {
    async fn fetch_rates(&self, request: &RateRequest) -> Result<RateResponse>;
}
