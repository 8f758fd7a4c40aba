//! Subcommand handlers

mod add;
mod delete;
mod edit;
mod list;
mod show;

use std::io::Write;

use memarc_core::{ArchiveStore, Config};

use crate::cli::Command;

pub use add::add;
pub use delete::delete;
pub use edit::edit;
pub use list::list;
pub use show::show;

/// Shared state handed to every command invocation
pub struct Context<'a> {
    pub store: &'a ArchiveStore,
    pub config: &'a Config,
}

/// Dispatch a parsed subcommand
pub fn run<W: Write>(ctx: &Context<'_>, command: Command, out: &mut W) -> anyhow::Result<()> {
    match command {
        Command::Add(args) => add(ctx, args, out),
        Command::List(args) => list(ctx, args, out),
        Command::Show(args) => show(ctx, args, out),
        Command::Edit(args) => edit(ctx, args, out),
        Command::Delete(args) => delete(ctx, args, out),
    }
}
