//! Config inspection command.

use std::path::Path;

use crate::config::{self, Config, ConfigError};
use crate::error::Result;

/// Print the config location and effective values
pub fn cmd_config(effective: &Config, path: Option<&Path>, init: bool) -> Result<()> {
    let path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => config::config_path(),
    };

    match &path {
        Some(p) if init && !p.exists() => {
            config::save_to(&Config::default(), p)?;
            println!("✓ Wrote default config to {}", p.display());
        }
        Some(p) if init => println!("Config already exists at {}", p.display()),
        Some(p) => println!("Config file: {}", p.display()),
        None => println!("Config file: (no config directory available)"),
    }

    println!();
    print!(
        "{}",
        toml::to_string_pretty(effective).map_err(ConfigError::Serialize)?
    );
    Ok(())
}
