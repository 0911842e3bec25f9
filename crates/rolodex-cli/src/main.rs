//! `rolodex` — command-line front end for the Rolodex contact store.
//!
//! # Usage
//!
//! ```text
//! rolodex add --first Ada --last Lovelace --email ada@example.com
//! rolodex list --sort first_name --desc
//! rolodex --db ~/contacts.db --json search love
//! ```

mod commands;
mod output;
mod settings;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use commands::Command;
use rolodex_core::store::ContactRepository as _;
use rolodex_store_sqlite::SqliteRepository;
use settings::CliConfig;
use tracing::{debug, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "rolodex", about = "Manage a local contact store")]
struct Args {
  /// Path to a TOML config file (store_path, busy_timeout_ms).
  #[arg(short, long, value_name = "FILE", default_value = "rolodex.toml")]
  config: PathBuf,

  /// Database file; overrides `store_path` from the config.
  #[arg(long, value_name = "PATH")]
  db: Option<PathBuf>,

  /// Print results as JSON.
  #[arg(long)]
  json: bool,

  /// Log store activity to stderr.
  #[arg(short, long)]
  verbose: bool,

  #[command(subcommand)]
  command: Command,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();

  // Logs go to stderr so stdout stays machine-readable.
  let level = if args.verbose { LevelFilter::INFO } else { LevelFilter::WARN };
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy(),
    )
    .with_writer(std::io::stderr)
    .init();

  let cfg = CliConfig::load(&args.config)?;
  let options = cfg.connect_options(args.db.as_deref());
  debug!(?options, "connecting");

  let repo = SqliteRepository::connect(&options)
    .await
    .context("failed to open contact store")?;
  repo.ensure_schema().await.context("failed to prepare contact store")?;

  let outcome = commands::run(&repo, args.command).await;
  repo.close().await.context("failed to close contact store")?;
  let outcome = outcome?;

  if args.json {
    println!("{}", outcome.to_json()?);
  } else {
    let text = outcome.to_text();
    if !text.is_empty() {
      println!("{text}");
    }
  }
  Ok(())
}
