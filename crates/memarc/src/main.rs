//! memarc: personal memory archive
//!
//! Usage:
//!   memarc add <content>... [-t TYPE] [-g TAGS]   - Store a memory
//!   memarc list [--date YYYY-MM-DD] [--json]      - List memories
//!   memarc show <id> | edit <id> | delete <id>    - Work with one memory
//!   memarc --db <path> ...                        - Use another archive file

mod cli;
mod commands;
mod render;

use anyhow::Context as _;
use clap::Parser;
use memarc_core::{ArchiveStore, Config};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    // Load .env file before clap reads MEMARC_CONFIG
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(db) = cli.db {
        config.db_path = db;
    }
    tracing::debug!("Using archive at {}", config.db_path.display());

    let store = ArchiveStore::open(&config.db_path).context("failed to initialize database")?;

    let ctx = commands::Context {
        store: &store,
        config: &config,
    };
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(&ctx, cli.command, &mut out)
}

/// Log to stderr so command output stays clean; `RUST_LOG` takes precedence
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
