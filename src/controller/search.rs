//! Lookup cycle: queue titles in, fresh lyrics store and order out.

use tracing::{info, warn};

use crate::service::{LyricsLookupApi, ServiceError};
use crate::session::SharedSession;

/// Why a search did not produce results.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SearchError {
    #[error("No songs queued")]
    EmptyInput,

    #[error("Lyrics lookup failed: {0}")]
    LookupFailed(#[from] ServiceError),
}

impl SearchError {
    /// Message shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyInput => "Add at least one song before searching.".to_string(),
            Self::LookupFailed(e) => format!("Could not fetch lyrics: {}", e),
        }
    }
}

/// What a successful search found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSummary {
    /// Titles sent to the service
    pub requested: usize,
    /// Titles that came back
    pub found: usize,
    /// Queued titles the service did not return
    pub missing: Vec<String>,
}

/// Runs lookups against a [`LyricsLookupApi`].
pub struct SearchController {
    lookup: Box<dyn LyricsLookupApi>,
}

impl SearchController {
    pub fn new(lookup: impl LyricsLookupApi + 'static) -> Self {
        Self {
            lookup: Box::new(lookup),
        }
    }

    /// Look up every queued title and replace the session's results.
    ///
    /// On success the store and order are overwritten wholesale. On failure
    /// they are left alone and the results view switches to an error state.
    /// The queue is only read. The session lock is not held while the
    /// request is in flight, so overlapping searches resolve last-writer-wins.
    pub async fn search(&self, session: &SharedSession) -> Result<SearchSummary, SearchError> {
        let titles = {
            let mut session = session.lock();
            let titles = session.queue().titles().to_vec();
            if titles.is_empty() {
                let err = SearchError::EmptyInput;
                warn!("Search requested with an empty queue");
                session.reject_search(err.user_message());
                return Err(err);
            }
            session.begin_search();
            titles
        };

        info!(count = titles.len(), "Looking up lyrics");
        let result = self.lookup.lookup(&titles).await;

        let mut session = session.lock();
        match result {
            Ok(results) => {
                let missing: Vec<String> = titles
                    .iter()
                    .filter(|t| !results.entries.iter().any(|e| &e.title == *t))
                    .cloned()
                    .collect();
                let summary = SearchSummary {
                    requested: titles.len(),
                    found: results.len(),
                    missing,
                };
                info!(
                    found = summary.found,
                    missing = summary.missing.len(),
                    "Lookup finished"
                );
                session.finish_search(results);
                Ok(summary)
            }
            Err(e) => {
                let err = SearchError::LookupFailed(e);
                warn!("{}", err);
                session.fail_search(err.user_message());
                Err(err)
            }
        }
    }
}
