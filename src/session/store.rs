//! Lyrics keyed by song title.
//!
//! Entries are created wholesale by a lookup, then edited in place or
//! renamed. Nothing is ever removed individually except as the source side
//! of a rename.

use std::collections::HashMap;

/// Lyrics text plus the page it was scraped from, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LyricsRecord {
    pub lyrics: String,
    pub url: Option<String>,
}

impl LyricsRecord {
    pub fn new(lyrics: impl Into<String>, url: Option<String>) -> Self {
        Self {
            lyrics: lyrics.into(),
            url,
        }
    }
}

/// What a rename request did to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameOutcome {
    /// Record moved to a fresh key.
    Renamed,
    /// Record moved onto a key that already existed; the old record there is gone.
    Overwrote,
    /// New title was blank or identical; the view should show the old title again.
    Unchanged,
    /// Source title is not in the store.
    Missing,
}

impl RenameOutcome {
    /// Whether the key set changed.
    pub fn applied(self) -> bool {
        matches!(self, Self::Renamed | Self::Overwrote)
    }
}

/// Mapping from title to [`LyricsRecord`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LyricsStore {
    records: HashMap<String, LyricsRecord>,
}

impl LyricsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, title: &str) -> Option<&LyricsRecord> {
        self.records.get(title)
    }

    pub fn contains(&self, title: &str) -> bool {
        self.records.contains_key(title)
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// Replace every entry with the given records.
    ///
    /// Later duplicates of a title win.
    pub fn replace_all(&mut self, records: impl IntoIterator<Item = (String, LyricsRecord)>) {
        self.records = records.into_iter().collect();
    }

    /// Overwrite the lyrics for `title` with the trimmed text.
    ///
    /// Creates the entry (without a source URL) if it does not exist yet.
    /// Returns `true` when a new entry was created.
    pub fn set_lyrics(&mut self, title: &str, text: &str) -> bool {
        let trimmed = text.trim().to_string();
        match self.records.get_mut(title) {
            Some(record) => {
                record.lyrics = trimmed;
                false
            }
            None => {
                self.records
                    .insert(title.to_string(), LyricsRecord::new(trimmed, None));
                true
            }
        }
    }

    /// Move the record at `old` to `new` in one step.
    ///
    /// An existing record at `new` is overwritten, not merged.
    pub fn rename(&mut self, old: &str, new: &str) -> RenameOutcome {
        let new = new.trim();
        if new.is_empty() || new == old {
            return RenameOutcome::Unchanged;
        }
        let Some(record) = self.records.remove(old) else {
            return RenameOutcome::Missing;
        };
        match self.records.insert(new.to_string(), record) {
            Some(_) => RenameOutcome::Overwrote,
            None => RenameOutcome::Renamed,
        }
    }
}
