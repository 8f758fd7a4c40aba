//! add command - Store a new memory

use std::io::Write;

use anyhow::Context as _;
use memarc_core::NewEntry;
use tracing::debug;

use crate::cli::AddArgs;
use crate::commands::Context;

/// Create an entry from the arguments, falling back to the configured type
pub fn add<W: Write>(ctx: &Context<'_>, args: AddArgs, out: &mut W) -> anyhow::Result<()> {
    let content = args.content();
    let entry_type = args
        .entry_type
        .unwrap_or_else(|| ctx.config.default_type.clone());
    let entry = NewEntry::new(content)
        .with_type(entry_type)
        .with_tags(args.tags);

    let created = ctx.store.create(entry).context("failed to create entry")?;
    debug!("Created entry {} ({})", created.id, created.entry_type);

    writeln!(out, "✓ Entry added (ID: {})", created.id)?;
    Ok(())
}
