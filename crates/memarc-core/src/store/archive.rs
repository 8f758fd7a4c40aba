//! Entry storage implementation using SQLite

use std::path::Path;

use chrono::{DateTime, Datelike, Local, SecondsFormat, TimeZone, Utc};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Row, params};

use crate::entry::{Entry, EntryUpdate, NewEntry};
use crate::store::day::DayRange;
use crate::store::schema::{self, ENTRIES};
use crate::{Error, Result};

/// SQLite-based archive of entries
pub struct ArchiveStore {
    conn: Connection,
}

impl ArchiveStore {
    /// Open (or create) the archive at `db_path` and bring its schema up to date.
    ///
    /// The parent directory is created if missing. Safe to call on every start.
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self> {
        let path = db_path.as_ref();
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            create_private_dir(dir).map_err(|e| Error::initialization(path, e))?;
        }
        let conn = Connection::open(path).map_err(|e| Error::initialization(path, e))?;
        Self::with_connection(conn, path)
    }

    /// Create an in-memory archive (useful for testing)
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| Error::initialization(":memory:", e))?;
        Self::with_connection(conn, Path::new(":memory:"))
    }

    fn with_connection(mut conn: Connection, path: &Path) -> Result<Self> {
        migrate(&mut conn).map_err(|e| Error::initialization(path, e))?;
        Ok(Self { conn })
    }

    /// Schema version recorded in the database
    pub fn schema_version(&self) -> Result<i64> {
        schema::current_version(&self.conn).map_err(Error::Read)
    }

    /// Insert a new entry and return it with its assigned id
    pub fn create(&self, entry: NewEntry) -> Result<Entry> {
        let created_at = entry.created_at.unwrap_or_else(Utc::now);
        if !(0..=9999).contains(&created_at.year()) {
            return Err(Error::Validation(format!(
                "creation time out of range (years 0000-9999): {created_at}"
            )));
        }
        self.conn
            .execute(
                "INSERT INTO entries (content, type, tags, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?4)",
                params![
                    entry.content,
                    entry.entry_type,
                    entry.tags,
                    encode_timestamp(&created_at),
                ],
            )
            .map_err(Error::Write)?;

        Ok(Entry {
            id: self.conn.last_insert_rowid(),
            content: entry.content,
            entry_type: entry.entry_type,
            tags: entry.tags,
            created_at: round_trip(created_at),
            updated_at: round_trip(created_at),
        })
    }

    /// Every entry, in insertion order
    pub fn list_all(&self) -> Result<Vec<Entry>> {
        let sql = format!(
            "SELECT {} FROM {} ORDER BY id",
            ENTRIES.select_list(),
            ENTRIES.name
        );
        self.query_entries(&sql, params![])
    }

    /// Entries created on the given `YYYY-MM-DD` day in the local time zone
    pub fn list_by_date(&self, date: &str) -> Result<Vec<Entry>> {
        self.list_by_date_in(date, &Local)
    }

    /// Entries created on the given `YYYY-MM-DD` day in `tz`
    pub fn list_by_date_in<Tz: TimeZone>(&self, date: &str, tz: &Tz) -> Result<Vec<Entry>> {
        let range = DayRange::parse(date, tz)?;
        self.list_in_range(&range)
    }

    /// Entries whose creation time falls in `range`, oldest first
    pub fn list_in_range(&self, range: &DayRange) -> Result<Vec<Entry>> {
        let sql = format!(
            "SELECT {} FROM {} WHERE created_at >= ?1 AND created_at < ?2
             ORDER BY created_at, id",
            ENTRIES.select_list(),
            ENTRIES.name
        );
        let entries = self.query_entries(
            &sql,
            params![encode_timestamp(&range.start), encode_timestamp(&range.end)],
        )?;
        debug_assert!(entries.iter().all(|e| range.contains(&e.created_at)));
        Ok(entries)
    }

    /// Load one entry by id
    pub fn get_by_id(&self, id: i64) -> Result<Entry> {
        let sql = format!(
            "SELECT {} FROM {} WHERE id = ?1",
            ENTRIES.select_list(),
            ENTRIES.name
        );
        self.conn
            .query_row(&sql, params![id], entry_from_row)
            .optional()
            .map_err(Error::Read)?
            .ok_or(Error::NotFound(id))
    }

    /// Apply `update` to an entry and bump its `updated_at`
    pub fn update_by_id(&self, id: i64, update: EntryUpdate) -> Result<Entry> {
        if update.is_empty() {
            return Err(Error::Validation("nothing to update".to_string()));
        }
        let rows_affected = self
            .conn
            .execute(
                "UPDATE entries SET
                     content = COALESCE(?2, content),
                     type = COALESCE(?3, type),
                     tags = COALESCE(?4, tags),
                     updated_at = ?5
                 WHERE id = ?1",
                params![
                    id,
                    update.content,
                    update.entry_type,
                    update.tags,
                    encode_timestamp(&Utc::now()),
                ],
            )
            .map_err(Error::Write)?;

        if rows_affected == 0 {
            return Err(Error::NotFound(id));
        }
        self.get_by_id(id)
    }

    /// Delete an entry by id
    pub fn delete_by_id(&self, id: i64) -> Result<()> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM entries WHERE id = ?1", params![id])
            .map_err(Error::Write)?;

        if rows_affected == 0 {
            return Err(Error::NotFound(id));
        }
        Ok(())
    }

    /// Count stored entries
    pub fn count(&self) -> Result<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))
            .map_err(Error::Read)?;
        Ok(count as u64)
    }

    fn query_entries(&self, sql: &str, params: &[&dyn rusqlite::ToSql]) -> Result<Vec<Entry>> {
        let mut stmt = self.conn.prepare(sql).map_err(Error::Read)?;
        let entries = stmt
            .query_map(params, entry_from_row)
            .map_err(Error::Read)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::Read)?;
        Ok(entries)
    }
}

/// Run every pending migration, each in its own transaction
fn migrate(conn: &mut Connection) -> std::result::Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let version = schema::current_version(conn)?;
    let latest = schema::latest_version();
    if version > latest {
        return Err(format!(
            "database schema version {version} is newer than supported version {latest}"
        )
        .into());
    }

    for migration in schema::pending(version) {
        let tx = conn.transaction()?;
        schema::apply(&tx, migration)?;
        tx.commit()?;
    }
    Ok(())
}

#[cfg(unix)]
fn create_private_dir(dir: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    std::fs::DirBuilder::new().recursive(true).mode(0o700).create(dir)
}

#[cfg(not(unix))]
fn create_private_dir(dir: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(dir)
}

// Fixed width keeps lexical order equal to chronological order.
fn encode_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn decode_timestamp(idx: usize, raw: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Truncate to the precision the column keeps
fn round_trip(ts: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(&encode_timestamp(&ts))
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or(ts)
}

fn entry_from_row(row: &Row<'_>) -> rusqlite::Result<Entry> {
    let created_at: String = row.get(4)?;
    let updated_at: String = row.get(5)?;
    Ok(Entry {
        id: row.get(0)?,
        content: row.get(1)?,
        entry_type: row.get(2)?,
        tags: row.get(3)?,
        created_at: decode_timestamp(4, &created_at)?,
        updated_at: decode_timestamp(5, &updated_at)?,
    })
}
