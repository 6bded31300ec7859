//! Export cycle: ordered titles plus lyrics in, generated deck out.

use tracing::{info, warn};

use crate::service::{DeckExportApi, ExportEntry, ExportedDocument, ServiceError};
use crate::session::{LYRICS_UNAVAILABLE, LyricsStore, SharedSession};

/// Why an export did not produce a document.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ExportError {
    /// Nothing to export; the export affordance should not have been offered.
    #[error("No songs to export")]
    EmptyOrder,

    #[error("Deck export failed: {0}")]
    ExportFailed(#[from] ServiceError),
}

impl ExportError {
    /// Message shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyOrder => "Search for songs before creating a deck.".to_string(),
            Self::ExportFailed(e) => format!("Could not create the deck: {}", e),
        }
    }
}

/// The request body for one export, plus which titles needed the placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    pub entries: Vec<ExportEntry>,
    /// Ordered titles with no lyrics entry in the store
    pub stale: Vec<String>,
    /// Ordered titles whose lyrics were empty
    pub empty: Vec<String>,
}

/// Pair each ordered title with its lyrics.
///
/// Titles missing from the store, or with empty lyrics, get `placeholder`
/// instead of failing the export.
pub fn build_payload(ordered_titles: &[String], store: &LyricsStore, placeholder: &str) -> ExportPayload {
    let mut stale = Vec::new();
    let mut empty = Vec::new();

    let entries = ordered_titles
        .iter()
        .map(|title| {
            let lyrics = match store.get(title) {
                Some(record) if !record.lyrics.is_empty() => record.lyrics.clone(),
                Some(_) => {
                    empty.push(title.clone());
                    placeholder.to_string()
                }
                None => {
                    stale.push(title.clone());
                    placeholder.to_string()
                }
            };
            ExportEntry {
                title: title.clone(),
                lyrics,
            }
        })
        .collect();

    ExportPayload {
        entries,
        stale,
        empty,
    }
}

/// Runs exports against a [`DeckExportApi`].
pub struct ExportController {
    export: Box<dyn DeckExportApi>,
    placeholder: String,
}

impl ExportController {
    pub fn new(export: impl DeckExportApi + 'static) -> Self {
        Self {
            export: Box::new(export),
            placeholder: LYRICS_UNAVAILABLE.to_string(),
        }
    }

    /// Use different text for songs without lyrics.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Export `ordered_titles` with lyrics from `store`.
    ///
    /// Every call is an independent export. Neither argument is modified.
    pub async fn export(
        &self,
        ordered_titles: &[String],
        store: &LyricsStore,
    ) -> Result<ExportedDocument, ExportError> {
        if ordered_titles.is_empty() {
            return Err(ExportError::EmptyOrder);
        }
        let payload = build_payload(ordered_titles, store, &self.placeholder);
        self.send(payload).await
    }

    /// Export the session's current order and record the outcome on it.
    ///
    /// The session lock is released while the request is in flight. Store
    /// and order are never touched, so a failed export can simply be retried.
    pub async fn export_session(
        &self,
        session: &SharedSession,
    ) -> Result<ExportedDocument, ExportError> {
        let payload = {
            let mut session = session.lock();
            let order = session.order().snapshot();
            if order.is_empty() {
                let err = ExportError::EmptyOrder;
                session.fail_export(err.user_message());
                return Err(err);
            }
            let payload = build_payload(order, session.store(), &self.placeholder);
            session.begin_export();
            payload
        };

        let result = self.send(payload).await;

        let mut session = session.lock();
        match &result {
            Ok(_) => session.finish_export(),
            Err(e) => session.fail_export(e.user_message()),
        }
        result
    }

    async fn send(&self, payload: ExportPayload) -> Result<ExportedDocument, ExportError> {
        if !payload.stale.is_empty() {
            warn!(titles = ?payload.stale, "Exporting placeholder for songs missing from results");
        }
        if !payload.empty.is_empty() {
            info!(titles = ?payload.empty, "Exporting placeholder for songs without lyrics");
        }

        info!(count = payload.entries.len(), "Requesting deck export");
        match self.export.export(&payload.entries).await {
            Ok(document) => {
                info!(kind = document.kind(), "Deck export finished");
                Ok(document)
            }
            Err(e) => {
                let err = ExportError::ExportFailed(e);
                warn!("{}", err);
                Err(err)
            }
        }
    }
}
