//! Lyrics lookup Data Transfer Objects
//!
//! These types match EXACTLY what the lookup service accepts and returns.
//! DO NOT use these types outside the lookup module - convert to domain types.
//!
//! Example exchange:
//! ```json
//! // request
//! { "songs": ["How Great Thou Art", "Amazing Grace"] }
//! // response
//! {
//!   "How Great Thou Art": { "lyrics": "O Lord my God...", "url": "https://..." },
//!   "Amazing Grace": { "lyrics": "Amazing grace...", "url": null }
//! }
//! ```

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Lookup request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupRequest {
    /// Queue titles in queue order
    pub songs: Vec<String>,
}

/// Per-title result
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SongLyrics {
    #[serde(default)]
    pub lyrics: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Lookup response body: a JSON object keyed by title
///
/// Deserialized by hand so the service's key order survives; that order
/// becomes the initial song order.
#[derive(Debug, Clone, Default)]
pub struct LookupResponse {
    pub songs: Vec<(String, SongLyrics)>,
}

impl<'de> Deserialize<'de> for LookupResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedSongs;

        impl<'de> Visitor<'de> for OrderedSongs {
            type Value = LookupResponse;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping song titles to lyrics")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut songs = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((title, lyrics)) = map.next_entry::<String, SongLyrics>()? {
                    songs.push((title, lyrics));
                }
                Ok(LookupResponse { songs })
            }
        }

        deserializer.deserialize_map(OrderedSongs)
    }
}
