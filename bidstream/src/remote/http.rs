//! Reqwest-backed implementation of the bidding service boundary.

use std::time::Duration;

use tracing::debug;

use super::types::{
    BidFetcher, BidRequest, BidResponse, BoxFuture, ConfigFetcher, CreativeFetcher, FetchError,
};
use crate::config::{RemoteConfig, SdkConfig};
use crate::slot::Slot;

/// Default timeout for HTTP requests in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP client for the bidding service endpoints.
///
/// Implements all three consumed boundary traits: [`BidFetcher`],
/// [`ConfigFetcher`], and [`CreativeFetcher`]. One instance is shared per
/// session; reqwest pools connections internally.
pub struct HttpApi {
    client: reqwest::Client,
    bid_url: String,
    config_url: String,
    user_agent: String,
}

impl HttpApi {
    /// Create a client for the endpoints in the given configuration.
    pub fn new(config: &SdkConfig) -> Result<Self, FetchError> {
        Self::with_timeout(config, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a client with a custom request timeout.
    pub fn with_timeout(config: &SdkConfig, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            bid_url: config.bid_endpoint.clone(),
            config_url: config.config_endpoint.clone(),
            user_agent: config.user_agent.clone(),
        })
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, FetchError> {
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }
        Ok(response)
    }
}

impl BidFetcher for HttpApi {
    fn fetch_bids(&self, request: BidRequest) -> BoxFuture<'_, Result<Vec<Slot>, FetchError>> {
        Box::pin(async move {
            debug!(
                url = %self.bid_url,
                ad_units = request.ad_units.len(),
                "Requesting bids"
            );
            let response = self
                .client
                .post(&self.bid_url)
                .header(reqwest::header::USER_AGENT, &self.user_agent)
                .json(&request)
                .send()
                .await
                .map_err(|e| FetchError::Http(format!("Bid request failed: {}", e)))?;

            let response = Self::check_status(response).await?;
            let decoded: BidResponse = response
                .json()
                .await
                .map_err(|e| FetchError::Decode(e.to_string()))?;

            debug!(slots = decoded.slots.len(), "Bid response received");
            Ok(decoded.slots)
        })
    }
}

impl ConfigFetcher for HttpApi {
    fn fetch_config(&self) -> BoxFuture<'_, Result<RemoteConfig, FetchError>> {
        Box::pin(async move {
            let response = self
                .client
                .get(&self.config_url)
                .header(reqwest::header::USER_AGENT, &self.user_agent)
                .send()
                .await
                .map_err(|e| FetchError::Http(format!("Config request failed: {}", e)))?;

            let response = Self::check_status(response).await?;
            response
                .json()
                .await
                .map_err(|e| FetchError::Decode(e.to_string()))
        })
    }
}

impl CreativeFetcher for HttpApi {
    fn fetch(&self, url: &str, user_agent: &str) -> BoxFuture<'_, Result<String, FetchError>> {
        let url = url.to_string();
        let user_agent = user_agent.to_string();
        Box::pin(async move {
            let response = self
                .client
                .get(&url)
                .header(reqwest::header::USER_AGENT, &user_agent)
                .send()
                .await
                .map_err(|e| FetchError::Http(format!("Creative request failed: {}", e)))?;

            let response = Self::check_status(response).await?;
            response
                .text()
                .await
                .map_err(|e| FetchError::Http(format!("Failed to read creative body: {}", e)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_from_config() {
        let config = SdkConfig::new("pub-1", "com.example.app");
        let api = HttpApi::new(&config);
        assert!(api.is_ok());
    }

    #[test]
    fn test_construction_with_timeout() {
        let config = SdkConfig::new("pub-1", "com.example.app");
        let api = HttpApi::with_timeout(&config, Duration::from_secs(5));
        assert!(api.is_ok());
    }
}
