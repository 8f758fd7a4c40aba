//! edit command - Change an existing memory

use std::io::Write;

use anyhow::Context as _;
use memarc_core::EntryUpdate;
use tracing::debug;

use crate::cli::EditArgs;
use crate::commands::Context;

pub fn edit<W: Write>(ctx: &Context<'_>, args: EditArgs, out: &mut W) -> anyhow::Result<()> {
    let update = EntryUpdate {
        content: args.content,
        entry_type: args.entry_type,
        tags: args.tags,
    };

    let entry = ctx
        .store
        .update_by_id(args.id, update)
        .with_context(|| format!("failed to update entry {}", args.id))?;
    debug!("Updated entry {} at {}", entry.id, entry.updated_at);

    writeln!(out, "✓ Entry updated (ID: {})", entry.id)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::run_on;
    use memarc_core::{ArchiveStore, Error, NewEntry};

    fn edit_args(id: i64, content: Option<&str>, tags: Option<&str>) -> EditArgs {
        EditArgs {
            id,
            content: content.map(str::to_string),
            entry_type: None,
            tags: tags.map(str::to_string),
        }
    }

    #[test]
    fn test_edit() {
        let store = ArchiveStore::in_memory().unwrap();
        let entry = store.create(NewEntry::new("typo").with_tags("old")).unwrap();

        let out = run_on(&store, |ctx, out| edit(ctx, edit_args(entry.id, Some("fixed"), Some("")), out))
            .unwrap();
        assert_eq!(out, format!("✓ Entry updated (ID: {})\n", entry.id));

        let updated = store.get_by_id(entry.id).unwrap();
        assert_eq!(updated.content, "fixed");
        assert!(updated.tags.is_empty());
        assert_eq!(updated.created_at, entry.created_at);
    }

    #[test]
    fn test_edit_nothing() {
        let store = ArchiveStore::in_memory().unwrap();
        let entry = store.create(NewEntry::new("same")).unwrap();

        let err = run_on(&store, |ctx, out| edit(ctx, edit_args(entry.id, None, None), out))
            .unwrap_err();
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::Validation(_))));
    }
}
