//! Test utilities and fixtures for lyric-deck tests.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::{lookup_results, ready_session};
//!
//! let session = ready_session(&[("A", "words", None)]);
//! ```

use crate::service::{LookupEntry, LookupResults};
use crate::session::Session;

/// Builds lookup results from `(title, lyrics, url)` triples, in order.
pub fn lookup_results(entries: &[(&str, &str, Option<&str>)]) -> LookupResults {
    LookupResults {
        entries: entries
            .iter()
            .map(|(title, lyrics, url)| LookupEntry {
                title: title.to_string(),
                lyrics: lyrics.to_string(),
                url: url.map(str::to_string),
            })
            .collect(),
    }
}

/// Creates a session as it looks right after a successful lookup.
///
/// The queue is empty; store and order hold `entries` in the given order.
pub fn ready_session(entries: &[(&str, &str, Option<&str>)]) -> Session {
    let mut session = Session::new();
    session.begin_search();
    session.finish_search(lookup_results(entries));
    session
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::ResultsState;

    #[test]
    fn test_lookup_results_keeps_order() {
        let results = lookup_results(&[("B", "b", None), ("A", "a", Some("u"))]);
        assert_eq!(results.entries[0].title, "B");
        assert_eq!(results.entries[1].url.as_deref(), Some("u"));
    }

    #[test]
    fn test_ready_session() {
        let session = ready_session(&[("A", "a", None)]);
        assert_eq!(session.results_state(), &ResultsState::Ready);
        assert_eq!(session.order().snapshot(), ["A"]);
        assert!(session.queue().is_empty());
    }
}
