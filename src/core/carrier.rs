use crate::config::CarrierConfig;
use crate::core::request::build_rate_request;
use crate::domain::model::{Cart, RateOutcome, RateResponse, ShippingMethod};
use crate::domain::ports::RateGateway;

/// Identifier this integration registers with the host platform.
pub const CARRIER_CODE: &str = "shiphawk";

pub struct Carrier<G: RateGateway> {
    config: CarrierConfig,
    gateway: G,
}

impl<G: RateGateway> Carrier<G> {
    pub fn new(config: CarrierConfig, gateway: G) -> Self {
        Self { config, gateway }
    }

    /// Shipping methods this carrier offers, keyed by carrier code.
    pub fn allowed_methods(&self) -> Vec<(String, String)> {
        vec![(CARRIER_CODE.to_string(), self.config.title.clone())]
    }

    /// Collects rate quotes for one cart. A disabled carrier short-circuits
    /// to `NotApplicable` before any request is built; every other path
    /// produces an outcome rather than an error, logging is left to the
    /// caller.
    pub async fn collect_rates(&self, cart: &Cart) -> RateOutcome {
        if !self.config.active {
            return RateOutcome::NotApplicable;
        }

        let request = build_rate_request(cart, &self.config);
        tracing::debug!(
            items = request.items.len(),
            dest = %cart.dest_postcode,
            "collecting rates"
        );

        let response = match self.gateway.fetch_rates(&request).await {
            Ok(response) => response,
            Err(e) => return RateOutcome::Failed(e),
        };

        if let Some(error) = response.error {
            return RateOutcome::Empty {
                reason: error.to_string(),
            };
        }

        RateOutcome::Methods(self.build_methods(response))
    }

    fn build_methods(&self, response: RateResponse) -> Vec<ShippingMethod> {
        response
            .rates
            .unwrap_or_default()
            .into_iter()
            .map(|row| ShippingMethod {
                carrier: CARRIER_CODE.to_string(),
                carrier_title: row.carrier,
                method: row.service_name.clone(),
                method_title: row.service_name,
                price: row.price,
                cost: row.price,
            })
            .collect()
    }
}
