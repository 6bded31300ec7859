//! Application-wide error types.
//!
//! Library modules use specific error types via `thiserror`. CLI commands
//! collect them into [`Error`]; only `main` converts to `anyhow`.
//!
//! - [`Error`]: Top-level error enum
//! - Module-specific errors ([`SearchError`], [`ExportError`],
//!   [`ServiceError`], ...) for detailed handling

use std::path::PathBuf;

use crate::config::ConfigError;
use crate::controller::{ExportError, SearchError};
use crate::service::ServiceError;
use crate::setlist::SetlistError;

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Setlist file error
    #[error(transparent)]
    Setlist(#[from] SetlistError),

    /// Service client setup or follow-up request failed
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// Lyrics search failed
    #[error(transparent)]
    Search(#[from] SearchError),

    /// Deck export failed
    #[error(transparent)]
    Export(#[from] ExportError),

    /// Output file could not be written
    #[error("Failed to write {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create an output error.
    pub fn output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Output {
            path: path.into(),
            source,
        }
    }

    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, ServiceError> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Service(e).context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Io(e).context(ctx))
    }
}
