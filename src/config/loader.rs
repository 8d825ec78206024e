//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `sharpline.toml`, validating all parameters,
//! and providing clear error messages for misconfiguration.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::AppConfig;

/// Config file looked up when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "sharpline.toml";

/// Load and validate configuration from a TOML file.
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: &str) -> Result<AppConfig> {
  let path = Path::new(path);

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  let config = parse_config(&content)
    .with_context(|| format!("Invalid config file: {}", path.display()))?;

  info!(
    path = %path.display(),
    data_dir = %config.bankroll.data_dir,
    max_legs = config.teaser.max_legs,
    "Configuration loaded successfully"
  );

  Ok(config)
}

/// Load `path` if given, else the default file if it exists, else defaults.
///
/// An explicitly named file that is missing is an error.
pub fn load_or_default(path: Option<&str>) -> Result<AppConfig> {
  match path {
    Some(path) => load_config(path),
    None if Path::new(DEFAULT_CONFIG_PATH).exists() => load_config(DEFAULT_CONFIG_PATH),
    None => Ok(AppConfig::default()),
  }
}

/// Parse and validate a TOML document.
pub fn parse_config(content: &str) -> Result<AppConfig> {
  let config: AppConfig = toml::from_str(content).context("Failed to parse TOML")?;
  validate_config(&config)?;
  Ok(config)
}

/// Validate all configuration parameters.
fn validate_config(config: &AppConfig) -> Result<()> {
  anyhow::ensure!(
    !config.app.name.trim().is_empty(),
    "app.name must not be empty"
  );

  anyhow::ensure!(
    !config.bankroll.file_name.trim().is_empty(),
    "bankroll.file_name must not be empty"
  );

  anyhow::ensure!(
    config.teaser.min_legs >= 1,
    "teaser.min_legs must be at least 1, got {}",
    config.teaser.min_legs
  );
  anyhow::ensure!(
    config.teaser.min_legs <= config.teaser.max_legs,
    "teaser.min_legs ({}) must not exceed teaser.max_legs ({})",
    config.teaser.min_legs,
    config.teaser.max_legs
  );

  Ok(())
}
