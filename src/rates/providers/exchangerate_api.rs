//! exchangerate-api.com provider using the keyless v4 `latest` endpoint.
//!
//! One GET, no query parameters, no headers beyond reqwest's defaults.
//! The response looks like:
//!
//! ```text
//! { "base": "USD", "date": "2024-01-01", "time_last_updated": 1704067201,
//!   "rates": { "USD": 1, "AED": 3.6725, ... } }
//! ```

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::rates::{RateError, RateProvider, RateTable};

pub const DEFAULT_ENDPOINT: &str = "https://api.exchangerate-api.com/v4/latest/USD";

pub struct ExchangeRateApiProvider {
    endpoint: String,
    client: reqwest::Client,
}

impl ExchangeRateApiProvider {
    pub fn new(endpoint: Option<String>) -> Self {
        Self {
            endpoint: endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RateProvider for ExchangeRateApiProvider {
    fn name(&self) -> &str {
        "exchangerate-api"
    }

    async fn fetch_rates(&self) -> Result<RateTable, RateError> {
        info!("Fetching exchange rates from {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| RateError::Network(e.to_string()))?;

        debug!("Rates response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Rates API error: {} - {}", status, err_body);
            return Err(RateError::Http { status });
        }

        // Read the body first so a truncated transfer stays a network error
        // and only a bad document becomes a parse error.
        let body = response
            .text()
            .await
            .map_err(|e| RateError::Network(e.to_string()))?;
        debug!("Rates body received: {} bytes", body.len());

        let table: RateTable = serde_json::from_str(&body).map_err(|e| {
            warn!("Failed to parse rates body: {}", e);
            RateError::Parse(e.to_string())
        })?;

        info!(
            "Parsed {} rates (base={:?}, date={:?})",
            table.rates.len(),
            table.base,
            table.date
        );
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let provider = ExchangeRateApiProvider::new(None);
        assert_eq!(provider.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(provider.name(), "exchangerate-api");
    }

    #[test]
    fn test_custom_endpoint() {
        let provider = ExchangeRateApiProvider::new(Some("http://localhost:9999/latest".to_string()));
        assert_eq!(provider.endpoint(), "http://localhost:9999/latest");
    }
}
