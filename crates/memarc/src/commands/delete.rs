//! delete command - Remove a memory

use std::io::Write;

use anyhow::Context as _;
use tracing::info;

use crate::cli::DeleteArgs;
use crate::commands::Context;

pub fn delete<W: Write>(ctx: &Context<'_>, args: DeleteArgs, out: &mut W) -> anyhow::Result<()> {
    ctx.store
        .delete_by_id(args.id)
        .with_context(|| format!("failed to delete entry {}", args.id))?;
    info!("Deleted entry {}", args.id);

    writeln!(out, "✓ Entry deleted (ID: {})", args.id)?;
    Ok(())
}
