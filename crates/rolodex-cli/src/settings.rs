//! Layered CLI configuration: TOML file, then `ROLODEX_*` environment
//! variables, then command-line flags.

use std::{
  path::{Path, PathBuf},
  time::Duration,
};

use anyhow::Context as _;
use rolodex_store_sqlite::ConnectOptions;
use serde::Deserialize;

/// Shape of the optional TOML config file.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CliConfig {
  /// SQLite database file.
  #[serde(default = "default_store_path")]
  pub store_path:      PathBuf,
  /// How long to wait on a locked database, in milliseconds.
  #[serde(default = "default_busy_timeout_ms")]
  pub busy_timeout_ms: u64,
}

fn default_store_path() -> PathBuf { PathBuf::from("contacts.db") }

fn default_busy_timeout_ms() -> u64 { 5_000 }

impl Default for CliConfig {
  fn default() -> Self {
    Self {
      store_path:      default_store_path(),
      busy_timeout_ms: default_busy_timeout_ms(),
    }
  }
}

impl CliConfig {
  /// Read `path` (if it exists) and overlay `ROLODEX_*` environment
  /// variables.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    config::Config::builder()
      .add_source(config::File::from(path.to_path_buf()).required(false))
      .add_source(config::Environment::with_prefix("ROLODEX"))
      .build()
      .with_context(|| format!("failed to read config file {}", path.display()))?
      .try_deserialize()
      .context("failed to deserialise CliConfig")
  }

  /// Connection options, with `db_override` (the `--db` flag) taking
  /// precedence over the configured store path.
  pub fn connect_options(&self, db_override: Option<&Path>) -> ConnectOptions {
    let path = db_override.unwrap_or(&self.store_path);
    ConnectOptions::file(expand_tilde(path))
      .with_busy_timeout(Duration::from_millis(self.busy_timeout_ms))
  }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
