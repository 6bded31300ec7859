//! Setlist files: a whole session's worth of user actions in TOML.
//!
//! ```toml
//! songs = ["Amazing Grace", "How Great Thou Art"]
//! order = ["How Great Thou Art (Hymn)", "Amazing Grace"]
//!
//! [[rename]]
//! from = "How Great Thou Art"
//! to = "How Great Thou Art (Hymn)"
//!
//! [lyrics]
//! "Amazing Grace" = """
//! Amazing grace, how sweet the sound
//! """
//! ```
//!
//! Songs are queued in listed order. After a lookup, renames run first,
//! then lyrics overrides (keyed by the final titles), then the order.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::session::{RenameOutcome, Session};

/// A title change applied after lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rename {
    pub from: String,
    pub to: String,
}

/// Parsed setlist file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Setlist {
    /// Titles to look up
    pub songs: Vec<String>,
    /// Title changes, applied in listed order
    pub rename: Vec<Rename>,
    /// Lyrics overrides by title
    pub lyrics: BTreeMap<String, String>,
    /// Final song order; the lookup order is kept when absent
    pub order: Option<Vec<String>>,
}

/// Counts of what [`Setlist::apply_edits`] changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditReport {
    pub renamed: usize,
    /// Renames whose target already existed and was overwritten
    pub overwritten: usize,
    /// Renames that did nothing (missing source, blank or same title)
    pub skipped: Vec<Rename>,
    pub lyrics_set: usize,
    pub reordered: bool,
}

/// Setlist loading errors
#[derive(Debug, thiserror::Error)]
pub enum SetlistError {
    #[error("Failed to read setlist {0}: {1}")]
    Read(PathBuf, std::io::Error),

    #[error("Failed to parse setlist {0}: {1}")]
    Parse(PathBuf, toml::de::Error),
}

impl Setlist {
    /// Load a setlist from a TOML file
    pub fn load(path: &Path) -> Result<Self, SetlistError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| SetlistError::Read(path.to_path_buf(), e))?;
        toml::from_str(&contents).map_err(|e| SetlistError::Parse(path.to_path_buf(), e))
    }

    /// Queue every song, returning how many were accepted.
    ///
    /// Songs are added in listed order, so the queue shows the last one first.
    pub fn queue_into(&self, session: &mut Session) -> usize {
        self.songs
            .iter()
            .filter(|title| session.add_song(title))
            .count()
    }

    /// Apply renames, lyrics overrides and the final order to looked-up results.
    pub fn apply_edits(&self, session: &mut Session) -> EditReport {
        let mut report = EditReport::default();

        for rename in &self.rename {
            match session.rename(&rename.from, &rename.to) {
                RenameOutcome::Renamed => report.renamed += 1,
                RenameOutcome::Overwrote => {
                    report.renamed += 1;
                    report.overwritten += 1;
                }
                outcome => {
                    warn!(from = %rename.from, to = %rename.to, ?outcome, "Skipped rename");
                    report.skipped.push(rename.clone());
                }
            }
        }

        for (title, text) in &self.lyrics {
            session.set_lyrics(title, text);
            report.lyrics_set += 1;
        }

        if let Some(order) = &self.order {
            session.reorder(order.clone());
            report.reordered = true;
        }

        debug!(?report, "Applied setlist edits");
        report
    }
}
