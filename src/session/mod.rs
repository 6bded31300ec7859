//! Session state: the song queue, the lyrics store and the user ordering.
//!
//! A [`Session`] is created when the user starts working and owns all
//! mutable state. Views read it and call its mutation methods; the search
//! and export controllers hold it behind a [`SharedSession`] so each
//! mutation runs inside one lock.
//!
//! # Events
//!
//! When built with [`Session::with_events`], every mutation reports which
//! view needs to re-render through a `crossbeam_channel` sender.

pub mod order;
pub mod queue;
pub mod store;

use std::sync::Arc;

use crossbeam_channel::Sender;
use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::service::domain::LookupResults;

pub use order::OrderModel;
pub use queue::SongQueue;
pub use store::{LyricsRecord, LyricsStore, RenameOutcome};

/// Text shown in place of lyrics that are missing or empty.
pub const LYRICS_UNAVAILABLE: &str = "Lyrics unavailable.";

/// Session shared between views and controllers.
pub type SharedSession = Arc<Mutex<Session>>;

/// Change notifications for views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    QueueChanged,
    SearchStarted,
    SearchFailed(String),
    /// The lyrics store changed (new results, edit or rename).
    ResultsChanged,
    OrderChanged,
    ExportStarted,
    ExportFinished,
    ExportFailed(String),
}

/// What the results view should display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ResultsState {
    /// No search has run yet.
    #[default]
    Idle,
    Searching,
    /// Store and order hold the latest successful lookup.
    Ready,
    /// Last search failed; show the message instead of results.
    Failed(String),
}

/// What the export affordance should display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ExportState {
    #[default]
    Idle,
    Exporting,
    Finished,
    Failed(String),
}

/// One rendered row of the results view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongRow {
    pub title: String,
    /// Lyrics to show in the editor, with a fallback for missing text.
    pub lyrics: String,
    pub url: Option<String>,
}

/// All per-user state for one working session.
#[derive(Debug, Default)]
pub struct Session {
    queue: SongQueue,
    store: LyricsStore,
    order: OrderModel,
    results: ResultsState,
    export: ExportState,
    pending_lookups: usize,
    /// Set once a lookup has populated the store; a later failure keeps it.
    has_results: bool,
    placeholder: Option<String>,
    events: Option<Sender<SessionEvent>>,
}

impl Session {
    /// Create an empty session with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty session that reports changes on `events`.
    pub fn with_events(events: Sender<SessionEvent>) -> Self {
        Self {
            events: Some(events),
            ..Self::default()
        }
    }

    /// Show `placeholder` for songs without lyrics instead of the default.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Wrap the session for use by the controllers.
    pub fn shared(self) -> SharedSession {
        Arc::new(Mutex::new(self))
    }

    fn emit(&self, event: SessionEvent) {
        if let Some(tx) = &self.events {
            // A view that went away is not our problem.
            let _ = tx.send(event);
        }
    }

    // ========================================================================
    // Queue
    // ========================================================================

    pub fn queue(&self) -> &SongQueue {
        &self.queue
    }

    /// Add a title to the front of the queue. Blank input is ignored.
    pub fn add_song(&mut self, title: &str) -> bool {
        let added = self.queue.add(title);
        if added {
            debug!(title = title.trim(), "Queued song");
            self.emit(SessionEvent::QueueChanged);
        }
        added
    }

    /// Remove a queued title by position. Panics on an out-of-range index.
    pub fn remove_song(&mut self, index: usize) -> String {
        let removed = self.queue.remove_at(index);
        debug!(title = %removed, index, "Removed queued song");
        self.emit(SessionEvent::QueueChanged);
        removed
    }

    pub fn clear_queue(&mut self) {
        self.queue.clear();
        self.emit(SessionEvent::QueueChanged);
    }

    // ========================================================================
    // Results
    // ========================================================================

    pub fn store(&self) -> &LyricsStore {
        &self.store
    }

    pub fn order(&self) -> &OrderModel {
        &self.order
    }

    pub fn results_state(&self) -> &ResultsState {
        &self.results
    }

    pub fn export_state(&self) -> &ExportState {
        &self.export
    }

    /// Whether a lookup request is outstanding.
    pub fn is_searching(&self) -> bool {
        self.pending_lookups > 0
    }

    /// Whether the export affordance should be offered.
    ///
    /// Stays available after a failed re-search, since the previous results
    /// are still there to export.
    pub fn can_export(&self) -> bool {
        self.has_results && !self.order.is_empty()
    }

    /// Rows for the results view, in the user's order.
    pub fn rows(&self) -> Vec<SongRow> {
        let fallback = self.placeholder.as_deref().unwrap_or(LYRICS_UNAVAILABLE);
        self.order
            .snapshot()
            .iter()
            .map(|title| {
                let record = self.store.get(title);
                let lyrics = record
                    .map(|r| r.lyrics.as_str())
                    .filter(|l| !l.is_empty())
                    .unwrap_or(fallback);
                SongRow {
                    title: title.clone(),
                    lyrics: lyrics.to_string(),
                    url: record.and_then(|r| r.url.clone()),
                }
            })
            .collect()
    }

    /// Overwrite the lyrics for a title with the user's edit.
    pub fn set_lyrics(&mut self, title: &str, text: &str) {
        let created = self.store.set_lyrics(title, text);
        debug!(title, created, "Updated lyrics");
        self.emit(SessionEvent::ResultsChanged);
        if created && self.order.push_if_absent(title) {
            self.emit(SessionEvent::OrderChanged);
        }
    }

    /// Rename a looked-up song, carrying its record and row along.
    ///
    /// Renaming onto a title that already exists replaces that entry's
    /// record with the renamed one. On [`RenameOutcome::Unchanged`] the
    /// view should restore the original title.
    pub fn rename(&mut self, old: &str, new: &str) -> RenameOutcome {
        let outcome = self.store.rename(old, new);
        if !outcome.applied() {
            debug!(old, new, ?outcome, "Rename ignored");
            return outcome;
        }
        let new = new.trim();
        if outcome == RenameOutcome::Overwrote {
            warn!(old, new, "Rename replaced existing lyrics");
        }
        self.order.rename(old, new);
        self.emit(SessionEvent::ResultsChanged);
        self.emit(SessionEvent::OrderChanged);
        outcome
    }

    /// Accept a new order from the reordering view.
    pub fn reorder(&mut self, titles: Vec<String>) {
        debug!(count = titles.len(), "Reordered songs");
        self.order.reorder(titles);
        self.emit(SessionEvent::OrderChanged);
    }

    // ========================================================================
    // Controller hooks
    // ========================================================================

    pub(crate) fn begin_search(&mut self) {
        self.pending_lookups += 1;
        self.results = ResultsState::Searching;
        self.emit(SessionEvent::SearchStarted);
    }

    /// Replace the store and order with a fresh lookup result.
    pub(crate) fn finish_search(&mut self, results: LookupResults) {
        self.pending_lookups = self.pending_lookups.saturating_sub(1);

        let mut titles: Vec<String> = Vec::with_capacity(results.entries.len());
        for entry in &results.entries {
            if !titles.contains(&entry.title) {
                titles.push(entry.title.clone());
            }
        }
        self.store.replace_all(
            results
                .entries
                .into_iter()
                .map(|e| (e.title, LyricsRecord::new(e.lyrics, e.url))),
        );
        self.order.reorder(titles);
        self.results = ResultsState::Ready;
        self.has_results = true;

        self.emit(SessionEvent::ResultsChanged);
        self.emit(SessionEvent::OrderChanged);
    }

    /// Record a failed lookup without touching store or order.
    pub(crate) fn fail_search(&mut self, message: String) {
        self.pending_lookups = self.pending_lookups.saturating_sub(1);
        self.results = ResultsState::Failed(message.clone());
        self.emit(SessionEvent::SearchFailed(message));
    }

    /// Surface a search that was refused before any request went out.
    pub(crate) fn reject_search(&mut self, message: String) {
        self.emit(SessionEvent::SearchFailed(message));
    }

    pub(crate) fn begin_export(&mut self) {
        self.export = ExportState::Exporting;
        self.emit(SessionEvent::ExportStarted);
    }

    pub(crate) fn finish_export(&mut self) {
        self.export = ExportState::Finished;
        self.emit(SessionEvent::ExportFinished);
    }

    pub(crate) fn fail_export(&mut self, message: String) {
        self.export = ExportState::Failed(message.clone());
        self.emit(SessionEvent::ExportFailed(message));
    }
}
