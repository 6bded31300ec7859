//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\lyric-deck\config.toml
//! - macOS: ~/Library/Application Support/lyric-deck/config.toml
//! - Linux: ~/.config/lyric-deck/config.toml
//!
//! Every section falls back to defaults, so a partial file is fine.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::session::LYRICS_UNAVAILABLE;

/// File name offered for a streamed deck when the service does not name it
pub const DEFAULT_DOWNLOAD_NAME: &str = "worship_lyrics.pptx";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the lookup and export services live
    pub service: ServiceConfig,

    /// Lyrics handling
    pub lyrics: LyricsConfig,

    /// Export output settings
    pub export: ExportConfig,
}

/// Service endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Root URL shared by both endpoints
    pub base_url: String,

    /// Path of the lyrics lookup endpoint
    pub lookup_path: String,

    /// Path of the deck export endpoint
    pub export_path: String,

    /// Request timeout in seconds (lookups scrape one page per title)
    pub timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            lookup_path: "/search_lyrics".to_string(),
            export_path: "/create_ppt".to_string(),
            timeout_secs: 120,
        }
    }
}

impl ServiceConfig {
    pub fn lookup_url(&self) -> String {
        join_url(&self.base_url, &self.lookup_path)
    }

    pub fn export_url(&self) -> String {
        join_url(&self.base_url, &self.export_path)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Lyrics handling settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LyricsConfig {
    /// Tidy lookup results (bullets, repeat marks, blank lines) as they arrive
    pub clean_on_import: bool,

    /// Text exported for songs without lyrics
    pub placeholder: String,
}

impl Default for LyricsConfig {
    fn default() -> Self {
        Self {
            clean_on_import: false,
            placeholder: LYRICS_UNAVAILABLE.to_string(),
        }
    }
}

/// Export output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Fallback file name for streamed decks
    pub download_name: String,

    /// Directory downloads are written to (current directory when unset)
    pub output_dir: Option<PathBuf>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            download_name: DEFAULT_DOWNLOAD_NAME.to_string(),
            output_dir: None,
        }
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("lyric-deck"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from the default location
///
/// Returns default config if file doesn't exist or can't be parsed.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine config directory, using defaults");
        return Config::default();
    };
    load_from(&path)
}

/// Load configuration from a specific file
///
/// Logs warnings but doesn't fail - we always return a usable config.
pub fn load_from(path: &Path) -> Config {
    if !path.exists() {
        tracing::info!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::error!("Failed to parse config file {:?}: {}", path, e);
                tracing::warn!("Using default configuration");
                Config::default()
            }
        },
        Err(e) => {
            tracing::error!("Failed to read config file {:?}: {}", path, e);
            Config::default()
        }
    }
}

/// Save configuration to the default location
pub fn save(config: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path().ok_or(ConfigError::NoConfigDir)?;
    save_to(config, &path)?;
    Ok(path)
}

/// Save configuration to a specific file
///
/// Creates the parent directory if it doesn't exist.
pub fn save_to(config: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::CreateDir(dir.to_path_buf(), e))?;
    }

    let contents = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;

    // Write atomically (write to temp, then rename)
    let temp_path = path.with_extension("toml.tmp");
    std::fs::write(&temp_path, &contents).map_err(|e| ConfigError::Write(temp_path.clone(), e))?;
    std::fs::rename(&temp_path, path)
        .map_err(|e| ConfigError::Rename(temp_path, path.to_path_buf(), e))?;

    tracing::info!("Saved config to {:?}", path);
    Ok(())
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to create config directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(toml::ser::Error),

    #[error("Failed to write config to {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("Failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        assert!(toml.contains("[service]"));
        assert!(toml.contains("[lyrics]"));
        assert!(toml.contains("[export]"));
    }

    #[test]
    fn test_default_urls() {
        let service = ServiceConfig::default();
        assert_eq!(service.lookup_url(), "http://127.0.0.1:5000/search_lyrics");
        assert_eq!(service.export_url(), "http://127.0.0.1:5000/create_ppt");
    }

    #[test]
    fn test_join_url_handles_slashes() {
        assert_eq!(join_url("http://host/", "/x"), "http://host/x");
        assert_eq!(join_url("http://host", "x"), "http://host/x");
    }

    #[test]
    fn test_timeout_never_zero() {
        let service = ServiceConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(service.timeout(), Duration::from_secs(1));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let toml = r#"
[service]
base_url = "https://lyrics.example.org"
"#;
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.service.base_url, "https://lyrics.example.org");
        assert_eq!(config.service.lookup_path, "/search_lyrics");
        assert_eq!(config.lyrics.placeholder, LYRICS_UNAVAILABLE);
        assert_eq!(config.export.download_name, DEFAULT_DOWNLOAD_NAME);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.service.timeout_secs = 30;
        config.lyrics.clean_on_import = true;
        config.export.output_dir = Some(PathBuf::from("/decks"));

        save_to(&config, &path).unwrap();
        let loaded = load_from(&path);

        assert_eq!(loaded.service.timeout_secs, 30);
        assert!(loaded.lyrics.clean_on_import);
        assert_eq!(loaded.export.output_dir, Some(PathBuf::from("/decks")));
        assert!(!path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn test_load_invalid_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "service = [not toml").unwrap();

        let config = load_from(&path);
        assert_eq!(config.service.timeout_secs, 120);
    }

    #[test]
    fn test_load_missing_file_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_from(&dir.path().join("absent.toml"));
        assert_eq!(config.export.download_name, DEFAULT_DOWNLOAD_NAME);
    }
}
