use crate::config::CarrierConfig;
use crate::domain::model::{RateRequest, RateResponse};
use crate::domain::ports::RateGateway;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// HTTP implementation of [`RateGateway`]: one POST to
/// `{gateway_url}rates?api_key={key}` per invocation.
pub struct HttpRateGateway {
    client: Client,
    gateway_url: String,
    api_key: String,
}

impl HttpRateGateway {
    pub fn new(config: &CarrierConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            gateway_url: config.gateway_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    // The gateway URL is concatenated as configured; a trailing slash is the
    // configuration's responsibility.
    fn rates_url(&self) -> String {
        format!("{}rates", self.gateway_url)
    }
}

#[async_trait]
impl RateGateway for HttpRateGateway {
    async fn fetch_rates(&self, request: &RateRequest) -> Result<RateResponse> {
        let body = serde_json::to_string(request)?;
        tracing::debug!(url = %self.rates_url(), payload = %body, "requesting rates");

        let response = self
            .client
            .post(self.rates_url())
            .query(&[("api_key", self.api_key.as_str())])
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        tracing::debug!(status = %response.status(), "rate gateway responded");

        let parsed: RateResponse = response.json().await?;
        tracing::debug!(?parsed, "parsed rate response");

        Ok(parsed)
    }
}
