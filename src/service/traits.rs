//! Trait definitions for the external services.
//!
//! The controllers depend on these traits rather than the HTTP clients,
//! so tests can substitute mock implementations.

use std::sync::Arc;

use async_trait::async_trait;

use super::domain::{ExportEntry, ExportedDocument, LookupResults, ServiceError};

/// Lyrics lookup: one request for all titles, one keyed response.
#[async_trait]
pub trait LyricsLookupApi: Send + Sync {
    async fn lookup(&self, titles: &[String]) -> Result<LookupResults, ServiceError>;
}

/// Deck export: one request with the ordered songs, one document back.
#[async_trait]
pub trait DeckExportApi: Send + Sync {
    async fn export(&self, entries: &[ExportEntry]) -> Result<ExportedDocument, ServiceError>;
}

// Implement traits for real clients

#[async_trait]
impl LyricsLookupApi for super::lookup::LookupClient {
    async fn lookup(&self, titles: &[String]) -> Result<LookupResults, ServiceError> {
        self.lookup(titles).await
    }
}

#[async_trait]
impl DeckExportApi for super::export::ExportClient {
    async fn export(&self, entries: &[ExportEntry]) -> Result<ExportedDocument, ServiceError> {
        self.export(entries).await
    }
}

#[async_trait]
impl<T: LyricsLookupApi + ?Sized> LyricsLookupApi for Arc<T> {
    async fn lookup(&self, titles: &[String]) -> Result<LookupResults, ServiceError> {
        (**self).lookup(titles).await
    }
}

#[async_trait]
impl<T: DeckExportApi + ?Sized> DeckExportApi for Arc<T> {
    async fn export(&self, entries: &[ExportEntry]) -> Result<ExportedDocument, ServiceError> {
        (**self).export(entries).await
    }
}

/// Mock service clients for testing.
///
/// Each mock records the requests it received and returns a canned result.
#[cfg(test)]
pub mod mocks {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tokio::sync::Notify;

    /// Mock lookup service.
    pub struct MockLookup {
        /// Results to return
        pub results: LookupResults,
        /// Error to return (takes precedence over results)
        pub error: Option<ServiceError>,
        /// Title lists received, one per call
        pub requests: Mutex<Vec<Vec<String>>>,
    }

    impl MockLookup {
        /// Create a mock that returns the given results.
        pub fn with_results(results: LookupResults) -> Self {
            Self {
                results,
                error: None,
                requests: Mutex::new(Vec::new()),
            }
        }

        /// Create a mock that returns an error.
        pub fn with_error(error: ServiceError) -> Self {
            Self {
                results: LookupResults::default(),
                error: Some(error),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn call_count(&self) -> usize {
            self.requests.lock().len()
        }
    }

    #[async_trait]
    impl LyricsLookupApi for MockLookup {
        async fn lookup(&self, titles: &[String]) -> Result<LookupResults, ServiceError> {
            self.requests.lock().push(titles.to_vec());
            if let Some(ref err) = self.error {
                return Err(err.clone());
            }
            Ok(self.results.clone())
        }
    }

    /// Mock lookup that holds its response until [`GatedLookup::release`].
    ///
    /// Used to keep several lookups in flight at once.
    pub struct GatedLookup {
        pub results: LookupResults,
        gate: Notify,
        started: AtomicBool,
    }

    impl GatedLookup {
        pub fn new(results: LookupResults) -> Self {
            Self {
                results,
                gate: Notify::new(),
                started: AtomicBool::new(false),
            }
        }

        /// Whether a request has reached the service.
        pub fn started(&self) -> bool {
            self.started.load(Ordering::SeqCst)
        }

        /// Let the pending request return its results.
        pub fn release(&self) {
            self.gate.notify_one();
        }
    }

    #[async_trait]
    impl LyricsLookupApi for GatedLookup {
        async fn lookup(&self, _titles: &[String]) -> Result<LookupResults, ServiceError> {
            self.started.store(true, Ordering::SeqCst);
            self.gate.notified().await;
            Ok(self.results.clone())
        }
    }

    /// Mock export service.
    pub struct MockExport {
        /// Document to return
        pub document: ExportedDocument,
        /// Error to return (takes precedence over document)
        pub error: Option<ServiceError>,
        /// Payloads received, one per call
        pub requests: Mutex<Vec<Vec<ExportEntry>>>,
    }

    impl MockExport {
        /// Create a mock that streams back a small placeholder file.
        pub fn with_download() -> Self {
            Self::with_document(ExportedDocument::Download {
                file_name: "worship_lyrics.pptx".to_string(),
                content_type: None,
                bytes: b"PK\x03\x04".to_vec(),
            })
        }

        pub fn with_document(document: ExportedDocument) -> Self {
            Self {
                document,
                error: None,
                requests: Mutex::new(Vec::new()),
            }
        }

        /// Create a mock that returns an error.
        pub fn with_error(error: ServiceError) -> Self {
            Self {
                error: Some(error),
                ..Self::with_download()
            }
        }

        /// Payload of the most recent call.
        pub fn last_request(&self) -> Option<Vec<ExportEntry>> {
            self.requests.lock().last().cloned()
        }
    }

    #[async_trait]
    impl DeckExportApi for MockExport {
        async fn export(&self, entries: &[ExportEntry]) -> Result<ExportedDocument, ServiceError> {
            self.requests.lock().push(entries.to_vec());
            if let Some(ref err) = self.error {
                return Err(err.clone());
            }
            Ok(self.document.clone())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_mock_lookup_records_requests() {
            let mock = MockLookup::with_results(LookupResults::default());
            mock.lookup(&["A".to_string()]).await.unwrap();
            assert_eq!(mock.call_count(), 1);
            assert_eq!(mock.requests.lock()[0], vec!["A".to_string()]);
        }

        #[tokio::test]
        async fn test_mock_lookup_error() {
            let mock = MockLookup::with_error(ServiceError::Network("timeout".to_string()));
            let result = mock.lookup(&[]).await;
            assert!(matches!(result, Err(ServiceError::Network(_))));
        }

        #[tokio::test]
        async fn test_mock_export_download() {
            let mock = MockExport::with_download();
            let doc = mock.export(&[]).await.unwrap();
            assert_eq!(doc.kind(), "download");
            assert_eq!(mock.last_request(), Some(vec![]));
        }
    }
}
