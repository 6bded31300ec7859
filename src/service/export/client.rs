//! Deck export HTTP client
//!
//! POSTs the ordered songs and handles both success shapes the service may
//! use: the generated file streamed back as the body, or a JSON result
//! pointing at a file left on the server.

use reqwest::Url;
use reqwest::header::{CONTENT_DISPOSITION, CONTENT_TYPE};

use super::{adapter, dto};
use crate::config::Config;
use crate::service::domain::{ExportEntry, ExportedDocument, ServiceError};

/// Export service client
pub struct ExportClient {
    http_client: reqwest::Client,
    url: String,
    download_name: String,
}

impl ExportClient {
    /// Create a client for the export endpoint in `config`
    pub fn new(config: &Config) -> Result<Self, ServiceError> {
        Ok(Self {
            http_client: crate::service::http_client(config.service.timeout())?,
            url: config.service.export_url(),
            download_name: config.export.download_name.clone(),
        })
    }

    /// Create a client for testing with a custom endpoint
    #[cfg(test)]
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            url: url.into(),
            download_name: crate::config::DEFAULT_DOWNLOAD_NAME.to_string(),
        }
    }

    /// Endpoint this client posts to
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Generate a deck from the ordered payload
    pub async fn export(&self, entries: &[ExportEntry]) -> Result<ExportedDocument, ServiceError> {
        let body = adapter::to_request(entries);

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

        let content_type = header_value(&response, CONTENT_TYPE);
        if content_type.as_deref().is_some_and(adapter::is_json) {
            let result = response
                .json::<dto::ExportResult>()
                .await
                .map_err(|e| ServiceError::Parse(e.to_string()))?;
            return adapter::to_document(result);
        }

        self.read_download(response, content_type).await
    }

    /// Resolve a navigate location against the export endpoint
    ///
    /// Absolute URLs pass through; relative paths like `static/output.pptx`
    /// are taken relative to the service root.
    pub fn resolve(&self, location: &str) -> Result<Url, ServiceError> {
        let base = Url::parse(&self.url)
            .map_err(|e| ServiceError::InvalidResponse(format!("bad export url: {}", e)))?;
        base.join(location)
            .map_err(|e| ServiceError::InvalidResponse(format!("bad location {:?}: {}", location, e)))
    }

    /// Download a document the service left at `location`
    pub async fn fetch(&self, location: &str) -> Result<ExportedDocument, ServiceError> {
        let url = self.resolve(location)?;

        let response = self
            .http_client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::status(status, &body));
        }

        let content_type = header_value(&response, CONTENT_TYPE);
        let mut document = self.read_download(response, content_type).await?;

        // Without a Content-Disposition header the last path segment names the file
        if let ExportedDocument::Download { file_name, .. } = &mut document
            && *file_name == self.download_name
            && let Some(segment) = url
                .path_segments()
                .and_then(|mut s| s.next_back())
                .filter(|s| !s.is_empty())
        {
            *file_name = urlencoding::decode(segment)
                .map(|s| s.into_owned())
                .unwrap_or_else(|_| segment.to_string());
        }

        Ok(document)
    }

    async fn read_download(
        &self,
        response: reqwest::Response,
        content_type: Option<String>,
    ) -> Result<ExportedDocument, ServiceError> {
        let file_name = header_value(&response, CONTENT_DISPOSITION)
            .as_deref()
            .and_then(adapter::file_name_from_disposition)
            .unwrap_or_else(|| self.download_name.clone());

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?
            .to_vec();

        if bytes.is_empty() {
            return Err(ServiceError::InvalidResponse("empty document body".to_string()));
        }

        Ok(ExportedDocument::Download {
            file_name,
            content_type,
            bytes,
        })
    }
}

fn header_value(response: &reqwest::Response, name: reqwest::header::HeaderName) -> Option<String> {
    response
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_from_config() {
        let client = ExportClient::new(&Config::default()).unwrap();
        assert_eq!(client.url(), "http://127.0.0.1:5000/create_ppt");
        assert_eq!(client.download_name, "worship_lyrics.pptx");
    }

    #[test]
    fn test_resolve_relative_location() {
        let client = ExportClient::with_url("http://127.0.0.1:5000/create_ppt");
        let url = client.resolve("static/output.pptx").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:5000/static/output.pptx");
    }

    #[test]
    fn test_resolve_absolute_location() {
        let client = ExportClient::with_url("http://127.0.0.1:5000/create_ppt");
        let url = client.resolve("https://files.example.com/deck.pptx").unwrap();
        assert_eq!(url.as_str(), "https://files.example.com/deck.pptx");
    }

    #[test]
    fn test_resolve_with_bad_base() {
        let client = ExportClient::with_url("not a url");
        assert!(matches!(
            client.resolve("static/output.pptx"),
            Err(ServiceError::InvalidResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_export_unreachable_is_network_error() {
        let client = ExportClient::with_url("http://127.0.0.1:9/create_ppt");
        let entries = vec![ExportEntry {
            title: "A".into(),
            lyrics: "a".into(),
        }];
        assert!(matches!(
            client.export(&entries).await,
            Err(ServiceError::Network(_))
        ));
    }
}
