//! Deck export Data Transfer Objects
//!
//! These types match EXACTLY what the export service accepts and returns.
//! DO NOT use these types outside the export module - convert to domain types.
//!
//! Request:
//! ```json
//! { "songOrder": [{ "title": "Amazing Grace", "lyrics": "Amazing grace..." }] }
//! ```
//!
//! The response is either the document itself (any non-JSON content type)
//! or a JSON result:
//! ```json
//! { "success": true, "path": "static/output.pptx" }
//! ```

use serde::{Deserialize, Serialize};

/// Export request body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    pub song_order: Vec<ExportSong>,
}

/// One slide group in the request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSong {
    pub title: String,
    pub lyrics: String,
}

/// JSON result returned instead of a file
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportResult {
    pub success: bool,
    pub path: Option<String>,
    /// Failure detail, when the service gives one
    #[serde(default, alias = "message")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_uses_song_order_key() {
        let req = ExportRequest {
            song_order: vec![ExportSong {
                title: "A".into(),
                lyrics: "hello".into(),
            }],
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"songOrder":[{"title":"A","lyrics":"hello"}]}"#);
    }

    #[test]
    fn test_result_parses_success() {
        let result: ExportResult =
            serde_json::from_str(r#"{"success": true, "path": "static/output.pptx"}"#).unwrap();
        assert!(result.success);
        assert_eq!(result.path.as_deref(), Some("static/output.pptx"));
        assert!(result.error.is_none());
    }

    #[test]
    fn test_result_parses_failure_message() {
        let result: ExportResult =
            serde_json::from_str(r#"{"success": false, "message": "template missing"}"#).unwrap();
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("template missing"));
    }
}
