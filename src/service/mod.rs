//! External services: lyrics lookup and deck export.
//!
//! # Architecture
//!
//! Same split for both exchanges:
//! - **Domain models** (`domain.rs`) - what the rest of the crate sees
//! - **DTOs** (`lookup/dto.rs`, `export/dto.rs`) - exact wire shapes
//! - **Adapters** - convert DTOs to and from domain models
//! - **Clients** - reqwest HTTP clients
//! - **Traits** (`traits.rs`) - seams the controllers depend on, so tests
//!   can swap in mocks

pub mod domain;
pub mod export;
pub mod lookup;
pub mod traits;

use std::time::Duration;

pub use domain::{ExportEntry, ExportedDocument, LookupEntry, LookupResults, ServiceError};
pub use export::ExportClient;
pub use lookup::LookupClient;
pub use traits::{DeckExportApi, LyricsLookupApi};

/// User agent sent to both services
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Build the HTTP client shared by the lookup and export clients
pub(crate) fn http_client(timeout: Duration) -> Result<reqwest::Client, ServiceError> {
    reqwest::Client::builder()
        .gzip(true)
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .map_err(|e| ServiceError::Client(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_format() {
        assert!(USER_AGENT.starts_with("lyric-deck/"));
    }

    #[test]
    fn test_http_client_builds() {
        assert!(http_client(Duration::from_secs(5)).is_ok());
    }
}
