//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up tftdata CLI defaults.

use anyhow::Result;
use std::path::PathBuf;

use crate::config::{Config, DEFAULT_DATA_DIR, DEFAULT_SET};

/// Handle the configure command
pub fn handle(set: Option<u32>, data_dir: Option<PathBuf>, show: bool) -> Result<()> {
    let mut config = Config::load()?;

    if show || (set.is_none() && data_dir.is_none()) {
        show_config(&config)?;
        return Ok(());
    }

    if let Some(set) = set {
        config.set = Some(set);
    }
    if let Some(dir) = data_dir {
        config.data_dir = Some(dir);
    }

    config.save()?;

    println!("Configuration saved");
    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }

    Ok(())
}

/// Display current configuration
fn show_config(config: &Config) -> Result<()> {
    match config.set {
        Some(set) => println!("Set: {}", set),
        None => println!("Set: {} (default)", DEFAULT_SET),
    }

    match &config.data_dir {
        Some(dir) => println!("Data directory: {}", dir.display()),
        None => println!("Data directory: {} (default)", DEFAULT_DATA_DIR),
    }

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }

    Ok(())
}
