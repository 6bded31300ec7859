//! Full session: lookup, edits, order, export.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::runtime::Runtime;
use tracing::info;

use super::{SongArgs, prepare_session, report_events, run_search};
use crate::config::Config;
use crate::controller::ExportController;
use crate::error::{Error, Result, ResultExt};
use crate::service::{ExportClient, ExportedDocument};

/// Look up lyrics, apply edits and order, and export the deck
pub fn cmd_build(
    rt: &Runtime,
    config: &Config,
    songs: &SongArgs,
    order: &[String],
    output: Option<&Path>,
    fetch: bool,
) -> Result<()> {
    let prepared = prepare_session(config, songs)?;
    run_search(rt, config, &prepared)?;

    if !order.is_empty() {
        prepared.session.lock().reorder(order.to_vec());
    }

    {
        let session = prepared.session.lock();
        println!();
        println!("Deck order:");
        for (i, row) in session.rows().iter().enumerate() {
            println!("{:>2}. {}", i + 1, row.title);
        }
        println!();
    }

    let client = Arc::new(ExportClient::new(config)?);
    let controller =
        ExportController::new(client.clone()).with_placeholder(config.lyrics.placeholder.clone());

    let result = rt.block_on(controller.export_session(&prepared.session));
    report_events(&prepared.events);

    match result? {
        ExportedDocument::Download {
            file_name, bytes, ..
        } => {
            let path = output_path(config, output, &file_name);
            rt.block_on(write_document(&path, &bytes))?;
            println!("✓ Deck saved to {}", path.display());
        }
        ExportedDocument::Navigate { location } => {
            let url = client.resolve(&location)?;
            println!("✓ Deck generated at {}", url);
            if fetch {
                let document = rt
                    .block_on(client.fetch(&location))
                    .with_context("downloading generated deck")?;
                if let ExportedDocument::Download {
                    file_name, bytes, ..
                } = document
                {
                    let path = output_path(config, output, &file_name);
                    rt.block_on(write_document(&path, &bytes))?;
                    println!("✓ Deck saved to {}", path.display());
                }
            }
        }
    }
    Ok(())
}

/// Decide where a downloaded deck goes.
///
/// An explicit output wins (a directory gets the file name appended), then
/// the configured output directory, then the current directory.
fn output_path(config: &Config, output: Option<&Path>, file_name: &str) -> PathBuf {
    match output {
        Some(path) if path.is_dir() => path.join(file_name),
        Some(path) => path.to_path_buf(),
        None => config
            .export
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(file_name),
    }
}

async fn write_document(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| Error::output(dir, e))?;
    }
    tokio::fs::write(path, bytes)
        .await
        .map_err(|e| Error::output(path, e))?;
    info!(path = %path.display(), size = bytes.len(), "Wrote deck");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_explicit_file() {
        let config = Config::default();
        let path = output_path(&config, Some(Path::new("/tmp/does-not-exist/sunday.pptx")), "x.pptx");
        assert_eq!(path, PathBuf::from("/tmp/does-not-exist/sunday.pptx"));
    }

    #[test]
    fn test_output_path_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        let path = output_path(&config, Some(dir.path()), "deck.pptx");
        assert_eq!(path, dir.path().join("deck.pptx"));
    }

    #[test]
    fn test_output_path_config_dir() {
        let mut config = Config::default();
        config.export.output_dir = Some(PathBuf::from("/decks"));
        assert_eq!(
            output_path(&config, None, "deck.pptx"),
            PathBuf::from("/decks/deck.pptx")
        );
    }

    #[test]
    fn test_output_path_default() {
        assert_eq!(
            output_path(&Config::default(), None, "deck.pptx"),
            PathBuf::from("./deck.pptx")
        );
    }

    #[tokio::test]
    async fn test_write_document_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("deck.pptx");

        write_document(&path, b"PK").await.unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"PK");
    }
}
