//! show command - Print one memory in full

use std::io::Write;

use anyhow::Context as _;
use chrono::Local;

use crate::cli::ShowArgs;
use crate::commands::Context;
use crate::render;

pub fn show<W: Write>(ctx: &Context<'_>, args: ShowArgs, out: &mut W) -> anyhow::Result<()> {
    let entry = ctx
        .store
        .get_by_id(args.id)
        .with_context(|| format!("failed to load entry {}", args.id))?;

    if args.json {
        render::render_json(out, &entry)?;
    } else {
        render::render_entry(out, &entry, &Local)?;
    }
    Ok(())
}
