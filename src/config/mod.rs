//! Configuration Module - TOML-based Application Configuration
//!
//! Loads and validates configuration from `sharpline.toml`. Every field
//! has a default, so an absent file yields a usable configuration.
//! Kelly sizing parameters are deliberately NOT configurable.

pub mod loader;

use serde::Deserialize;

use crate::domain::teaser::PushPolicy;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
  /// Identity and logging.
  #[serde(default)]
  pub app: AppSection,
  /// Bankroll persistence.
  #[serde(default)]
  pub bankroll: BankrollConfig,
  /// Teaser workflow limits and defaults.
  #[serde(default)]
  pub teaser: TeaserConfig,
}

/// Identity and logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppSection {
  /// Human-readable application name.
  #[serde(default = "default_name")]
  pub name: String,
  /// Log level (trace, debug, info, warn, error). `RUST_LOG` overrides it.
  #[serde(default = "default_log_level")]
  pub log_level: String,
  /// Emit JSON structured logs instead of plain text.
  #[serde(default)]
  pub json_logs: bool,
}

/// Bankroll persistence configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BankrollConfig {
  /// Directory holding the bankroll file.
  #[serde(default = "default_data_dir")]
  pub data_dir: String,
  /// Bankroll file name inside `data_dir`.
  #[serde(default = "default_file_name")]
  pub file_name: String,
}

/// Teaser workflow configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TeaserConfig {
  /// Fewest legs accepted.
  #[serde(default = "default_min_legs")]
  pub min_legs: usize,
  /// Most legs accepted.
  #[serde(default = "default_max_legs")]
  pub max_legs: usize,
  /// Push policy used when none is given.
  #[serde(default = "default_push_policy")]
  pub default_push_policy: PushPolicy,
}

impl Default for AppSection {
  fn default() -> Self {
    Self {
      name: default_name(),
      log_level: default_log_level(),
      json_logs: false,
    }
  }
}

impl Default for BankrollConfig {
  fn default() -> Self {
    Self {
      data_dir: default_data_dir(),
      file_name: default_file_name(),
    }
  }
}

impl Default for TeaserConfig {
  fn default() -> Self {
    Self {
      min_legs: default_min_legs(),
      max_legs: default_max_legs(),
      default_push_policy: default_push_policy(),
    }
  }
}

// Default value functions for serde

fn default_name() -> String {
  "sharpline-ev".to_string()
}

fn default_log_level() -> String {
  "warn".to_string()
}

fn default_data_dir() -> String {
  "data".to_string()
}

fn default_file_name() -> String {
  "bankroll.json".to_string()
}

const fn default_min_legs() -> usize {
  2
}

const fn default_max_legs() -> usize {
  4
}

const fn default_push_policy() -> PushPolicy {
  PushPolicy::VoidOnPush
}
