//! Lyrics lookup HTTP client
//!
//! POSTs the queued titles as JSON and reads back an object keyed by title.
//! Scraping can take a while per title, so the timeout comes from config.

use super::{adapter, dto};
use crate::config::Config;
use crate::service::domain::{LookupResults, ServiceError};

/// Lookup service client
pub struct LookupClient {
    http_client: reqwest::Client,
    url: String,
    clean_lyrics: bool,
}

impl LookupClient {
    /// Create a client for the lookup endpoint in `config`
    pub fn new(config: &Config) -> Result<Self, ServiceError> {
        Ok(Self {
            http_client: crate::service::http_client(config.service.timeout())?,
            url: config.service.lookup_url(),
            clean_lyrics: config.lyrics.clean_on_import,
        })
    }

    /// Create a client for testing with a custom endpoint
    #[cfg(test)]
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            url: url.into(),
            clean_lyrics: false,
        }
    }

    /// Endpoint this client posts to
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Look up lyrics for all `titles` in one request
    pub async fn lookup(&self, titles: &[String]) -> Result<LookupResults, ServiceError> {
        let response = self.send_lookup_request(titles).await?;
        Ok(adapter::to_results(response, self.clean_lyrics))
    }

    /// Send the HTTP request and parse the response
    async fn send_lookup_request(
        &self,
        titles: &[String],
    ) -> Result<dto::LookupResponse, ServiceError> {
        let body = adapter::to_request(titles);

        let response = self
            .http_client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::status(status, &body));
        }

        response
            .json::<dto::LookupResponse>()
            .await
            .map_err(|e| ServiceError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_from_config() {
        let config = Config::default();
        let client = LookupClient::new(&config).unwrap();
        assert_eq!(client.url(), "http://127.0.0.1:5000/search_lyrics");
        assert!(!client.clean_lyrics);
    }

    #[test]
    fn test_client_with_custom_url() {
        let client = LookupClient::with_url("http://localhost:8080/lookup");
        assert_eq!(client.url(), "http://localhost:8080/lookup");
    }

    #[tokio::test]
    async fn test_lookup_unreachable_is_network_error() {
        // Port 9 (discard) on localhost is not listening in test environments
        let client = LookupClient::with_url("http://127.0.0.1:9/search_lyrics");
        let result = client.lookup(&["A".to_string()]).await;
        assert!(matches!(result, Err(ServiceError::Network(_))));
    }
}
