//! Adapter layer: Convert between export DTOs and domain models

use super::dto;
use crate::service::domain::{ExportEntry, ExportedDocument, ServiceError};

/// Build the request body from the ordered payload
pub fn to_request(entries: &[ExportEntry]) -> dto::ExportRequest {
    dto::ExportRequest {
        song_order: entries
            .iter()
            .map(|e| dto::ExportSong {
                title: e.title.clone(),
                lyrics: e.lyrics.clone(),
            })
            .collect(),
    }
}

/// Convert a JSON export result into a navigate document
pub fn to_document(result: dto::ExportResult) -> Result<ExportedDocument, ServiceError> {
    if !result.success {
        return Err(ServiceError::Rejected(
            result
                .error
                .unwrap_or_else(|| "export reported success: false".to_string()),
        ));
    }

    match result.path {
        Some(path) if !path.trim().is_empty() => Ok(ExportedDocument::Navigate { location: path }),
        _ => Err(ServiceError::InvalidResponse(
            "successful export result without a path".to_string(),
        )),
    }
}

/// Pull a file name out of a `Content-Disposition` header value
///
/// Prefers the RFC 5987 `filename*=UTF-8''...` form, falling back to the
/// plain `filename=` parameter. Any directory part is stripped.
pub fn file_name_from_disposition(header: &str) -> Option<String> {
    let mut plain = None;
    let mut extended = None;

    for param in header.split(';').skip(1) {
        let Some((key, value)) = param.split_once('=') else {
            continue;
        };
        let value = value.trim();
        match key.trim().to_ascii_lowercase().as_str() {
            "filename*" => {
                // charset'language'percent-encoded
                let encoded = value.splitn(3, '\'').nth(2).unwrap_or(value);
                if let Ok(decoded) = urlencoding::decode(encoded) {
                    extended = Some(decoded.into_owned());
                }
            }
            "filename" => plain = Some(value.trim_matches('"').to_string()),
            _ => {}
        }
    }

    extended
        .or(plain)
        .map(|name| {
            name.rsplit(['/', '\\'])
                .next()
                .unwrap_or_default()
                .to_string()
        })
        .filter(|name| !name.is_empty())
}

/// Whether a content type names a JSON body
pub fn is_json(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json" || mime.ends_with("+json")
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_request_keeps_order() {
        let entries = vec![
            ExportEntry {
                title: "B".into(),
                lyrics: "b".into(),
            },
            ExportEntry {
                title: "A".into(),
                lyrics: "a".into(),
            },
        ];
        let req = to_request(&entries);
        assert_eq!(req.song_order[0].title, "B");
        assert_eq!(req.song_order[1].lyrics, "a");
    }

    #[test]
    fn test_to_document_navigate() {
        let doc = to_document(dto::ExportResult {
            success: true,
            path: Some("static/output.pptx".into()),
            error: None,
        })
        .unwrap();
        assert_eq!(
            doc,
            ExportedDocument::Navigate {
                location: "static/output.pptx".into()
            }
        );
    }

    #[test]
    fn test_to_document_rejected() {
        let err = to_document(dto::ExportResult {
            success: false,
            path: None,
            error: Some("disk full".into()),
        })
        .unwrap_err();
        assert!(matches!(err, ServiceError::Rejected(ref m) if m == "disk full"));
    }

    #[test]
    fn test_to_document_missing_path() {
        let err = to_document(dto::ExportResult {
            success: true,
            path: None,
            error: None,
        })
        .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidResponse(_)));
    }

    #[test]
    fn test_disposition_plain_filename() {
        assert_eq!(
            file_name_from_disposition(r#"attachment; filename="worship_lyrics.pptx""#),
            Some("worship_lyrics.pptx".to_string())
        );
    }

    #[test]
    fn test_disposition_prefers_extended_filename() {
        let header = "attachment; filename=\"deck.pptx\"; filename*=UTF-8''Sunday%20Set.pptx";
        assert_eq!(
            file_name_from_disposition(header),
            Some("Sunday Set.pptx".to_string())
        );
    }

    #[test]
    fn test_disposition_strips_directories() {
        assert_eq!(
            file_name_from_disposition("attachment; filename=../../etc/deck.pptx"),
            Some("deck.pptx".to_string())
        );
    }

    #[test]
    fn test_disposition_without_filename() {
        assert_eq!(file_name_from_disposition("inline"), None);
        assert_eq!(file_name_from_disposition("attachment; filename=\"\""), None);
    }

    #[test]
    fn test_is_json() {
        assert!(is_json("application/json"));
        assert!(is_json("application/json; charset=utf-8"));
        assert!(is_json("application/problem+json"));
        assert!(!is_json(
            "application/vnd.openxmlformats-officedocument.presentationml.presentation"
        ));
    }
}
