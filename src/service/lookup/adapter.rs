//! Adapter layer: Convert lookup DTOs to domain models
//!
//! This is the ONLY place where lookup DTO types are converted to domain types.

use super::dto;
use crate::deck;
use crate::service::domain::{LookupEntry, LookupResults};

/// Convert a lookup response into domain results
///
/// Missing lyrics become empty text. Blank URLs are dropped. With
/// `clean` set, lyrics go through [`deck::clean_lyrics`].
pub fn to_results(response: dto::LookupResponse, clean: bool) -> LookupResults {
    let entries = response
        .songs
        .into_iter()
        .map(|(title, song)| {
            let lyrics = song.lyrics.unwrap_or_default();
            LookupEntry {
                title,
                lyrics: if clean {
                    deck::clean_lyrics(&lyrics)
                } else {
                    lyrics
                },
                url: song.url.filter(|u| !u.trim().is_empty()),
            }
        })
        .collect();

    LookupResults { entries }
}

/// Build the request body for the given queue titles
pub fn to_request(titles: &[String]) -> dto::LookupRequest {
    dto::LookupRequest {
        songs: titles.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(json: &str) -> dto::LookupResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_to_results_preserves_order_and_fields() {
        let results = to_results(
            response(r#"{"A": {"lyrics": "x"}, "B": {"lyrics": "y", "url": "u"}}"#),
            false,
        );

        assert_eq!(
            results.entries,
            vec![
                LookupEntry {
                    title: "A".into(),
                    lyrics: "x".into(),
                    url: None
                },
                LookupEntry {
                    title: "B".into(),
                    lyrics: "y".into(),
                    url: Some("u".into())
                },
            ]
        );
    }

    #[test]
    fn test_to_results_defaults_missing_lyrics() {
        let results = to_results(response(r#"{"A": {"url": ""}}"#), false);
        assert_eq!(results.entries[0].lyrics, "");
        assert_eq!(results.entries[0].url, None);
    }

    #[test]
    fn test_to_results_cleans_when_asked() {
        let results = to_results(response(r#"{"A": {"lyrics": "• line one ×2\n\n\nline two"}}"#), true);
        assert_eq!(results.entries[0].lyrics, "line one\nline two");
    }
}
