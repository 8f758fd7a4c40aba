//! Console rendering of entries

use std::fmt::Display;
use std::io::{self, Write};

use chrono::{DateTime, TimeZone, Utc};
use memarc_core::Entry;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Shorten `s` to at most `max_chars` characters, marking the cut with `...`
pub fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}...", s[..cut].trim()),
    }
}

fn local_time<Tz: TimeZone>(ts: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    ts.with_timezone(tz).format(TIME_FORMAT).to_string()
}

/// Archive listing with one short block per entry
pub fn render_list<W: Write, Tz: TimeZone>(
    out: &mut W,
    entries: &[Entry],
    preview_width: usize,
    tz: &Tz,
) -> io::Result<()>
where
    Tz::Offset: Display,
{
    if entries.is_empty() {
        return writeln!(out, "No entries found");
    }

    writeln!(out)?;
    writeln!(out, "=== Memory Archive ===")?;
    for entry in entries {
        writeln!(
            out,
            "[{}] {} ({})",
            entry.id,
            local_time(&entry.created_at, tz),
            entry.entry_type
        )?;
        writeln!(out, "    {}", truncate(&entry.content, preview_width))?;
        if !entry.tags.is_empty() {
            writeln!(out, "    Tags: {}", entry.tags)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Every field of a single entry
pub fn render_entry<W: Write, Tz: TimeZone>(out: &mut W, entry: &Entry, tz: &Tz) -> io::Result<()>
where
    Tz::Offset: Display,
{
    writeln!(out, "ID:      {}", entry.id)?;
    writeln!(out, "Type:    {}", entry.entry_type)?;
    writeln!(out, "Created: {}", local_time(&entry.created_at, tz))?;
    if entry.is_edited() {
        writeln!(out, "Updated: {}", local_time(&entry.updated_at, tz))?;
    }
    if !entry.tags.is_empty() {
        writeln!(out, "Tags:    {}", entry.tag_list().join(", "))?;
    }
    writeln!(out)?;
    writeln!(out, "{}", entry.content)
}

/// Pretty-printed JSON followed by a newline
pub fn render_json<W: Write, T: serde::Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}
