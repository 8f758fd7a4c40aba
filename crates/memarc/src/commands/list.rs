//! list command - Show archived memories

use std::io::Write;

use anyhow::Context as _;
use chrono::Local;
use tracing::debug;

use crate::cli::ListArgs;
use crate::commands::Context;
use crate::render;

/// List every entry, or only those created on `--date`
pub fn list<W: Write>(ctx: &Context<'_>, args: ListArgs, out: &mut W) -> anyhow::Result<()> {
    let entries = match args.date.as_deref() {
        Some(date) => ctx.store.list_by_date(date),
        None => ctx.store.list_all(),
    }
    .context("failed to retrieve entries")?;
    debug!("Retrieved {} entries", entries.len());

    if args.json {
        render::render_json(out, &entries)?;
    } else {
        render::render_list(out, &entries, ctx.config.preview_width, &Local)?;
    }
    Ok(())
}
