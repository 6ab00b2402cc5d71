//! CLI command implementations

pub mod demo;
pub mod session;

use std::path::PathBuf;

use anyhow::{Context, Result};
use vaultline_core::Config;

/// Get the vaultline directory from environment or default
pub fn get_vaultline_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("VAULTLINE_DIR") {
        PathBuf::from(dir)
    } else {
        dirs::home_dir()
            .expect("Could not find home directory")
            .join(".vaultline")
    }
}

/// Load settings, creating the vaultline directory if needed
pub fn get_config() -> Result<Config> {
    let dir = get_vaultline_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create vaultline directory: {:?}", dir))?;
    Config::load(&dir).context("Failed to load settings")
}
