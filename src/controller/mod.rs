//! Controllers for the two network exchanges that bound a session.
//!
//! - `search`: queue → lookup service → lyrics store and order
//! - `export`: order + store → export service → document
//!
//! Both recover from their own failures: the session is left as it was,
//! the error state is recorded on it for the views, and the error is also
//! returned so callers can branch on it.

pub mod export;
pub mod search;

pub use export::{ExportController, ExportError, ExportPayload, build_payload};
pub use search::{SearchController, SearchError, SearchSummary};
