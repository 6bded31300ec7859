//! Internal domain models for the lookup and export exchanges.
//!
//! These types are OUR types - they don't change when the services change
//! their wire format. Responses are converted into these types by the
//! adapters in `lookup` and `export`.

/// Lyrics for one title as returned by the lookup service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupEntry {
    pub title: String,
    pub lyrics: String,
    /// Page the lyrics came from
    pub url: Option<String>,
}

/// A lookup response, in the order the service listed the titles
///
/// Titles the service could not resolve are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupResults {
    pub entries: Vec<LookupEntry>,
}

impl LookupResults {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One song in the final export payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportEntry {
    pub title: String,
    pub lyrics: String,
}

/// A successfully generated document
///
/// The export service either streams the file back or tells us where it
/// left it; callers pick "offer download" or "navigate" from the variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportedDocument {
    /// File contents to save under `file_name`
    Download {
        file_name: String,
        content_type: Option<String>,
        bytes: Vec<u8>,
    },
    /// Server-side location of the generated file, as the service sent it
    Navigate { location: String },
}

impl ExportedDocument {
    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Download { .. } => "download",
            Self::Navigate { .. } => "navigate",
        }
    }
}

/// Errors that can occur talking to the lookup or export service
#[derive(Debug, Clone, thiserror::Error)]
pub enum ServiceError {
    #[error("Could not build HTTP client: {0}")]
    Client(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Service returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Service reported failure: {0}")]
    Rejected(String),

    #[error("Invalid service response: {0}")]
    InvalidResponse(String),
}

impl ServiceError {
    /// Build a status error from a non-success response
    pub fn status(status: reqwest::StatusCode, body: &str) -> Self {
        let reason = status.canonical_reason().unwrap_or("Unknown");
        let message = if body.trim().is_empty() {
            reason.to_string()
        } else {
            format!("{} - {}", reason, body.chars().take(200).collect::<String>())
        };
        Self::Status {
            status: status.as_u16(),
            message,
        }
    }
}
