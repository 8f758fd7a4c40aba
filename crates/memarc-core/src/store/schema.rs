//! Explicit schema of the archive database
//!
//! The table layout lives here rather than being inferred from [`Entry`]:
//! [`ENTRIES`] is the contract the store's queries are written against, and
//! [`MIGRATIONS`] is the ordered history that produces it. The applied
//! version is tracked in `PRAGMA user_version`.
//!
//! [`Entry`]: crate::entry::Entry

use rusqlite::{Connection, Transaction};

/// One column of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: &'static str,
    pub sql_type: &'static str,
}

/// One secondary index of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexDef {
    pub name: &'static str,
    pub column: &'static str,
}

/// Table name, columns in declaration order, and secondary indexes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableDef {
    pub name: &'static str,
    pub columns: &'static [ColumnDef],
    pub indexes: &'static [IndexDef],
}

impl TableDef {
    /// Column names in declaration order
    pub fn column_names(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.name).collect()
    }

    /// Comma-separated column list for SELECT statements
    pub fn select_list(&self) -> String {
        self.column_names().join(", ")
    }
}

/// The `entries` relation
pub const ENTRIES: TableDef = TableDef {
    name: "entries",
    columns: &[
        ColumnDef { name: "id", sql_type: "INTEGER" },
        ColumnDef { name: "content", sql_type: "TEXT" },
        ColumnDef { name: "type", sql_type: "TEXT" },
        ColumnDef { name: "tags", sql_type: "TEXT" },
        ColumnDef { name: "created_at", sql_type: "TEXT" },
        ColumnDef { name: "updated_at", sql_type: "TEXT" },
    ],
    indexes: &[
        IndexDef { name: "idx_entries_type", column: "type" },
        IndexDef { name: "idx_entries_created_at", column: "created_at" },
    ],
};

/// A forward-only schema change
#[derive(Debug, Clone, Copy)]
pub struct Migration {
    pub version: i64,
    pub description: &'static str,
    pub sql: &'static str,
}

/// Every migration, oldest first. Versions are contiguous from 1.
pub const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        description: "create entries table",
        sql: "
CREATE TABLE IF NOT EXISTS entries (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    content     TEXT NOT NULL,
    type        TEXT NOT NULL DEFAULT 'personal',
    tags        TEXT NOT NULL DEFAULT '',
    created_at  TEXT NOT NULL,   -- RFC 3339 UTC, fixed width
    updated_at  TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_entries_type ON entries(type);
",
    },
    Migration {
        version: 2,
        description: "index entries by creation time",
        sql: "CREATE INDEX IF NOT EXISTS idx_entries_created_at ON entries(created_at);",
    },
];

/// Highest schema version this build understands
pub fn latest_version() -> i64 {
    MIGRATIONS.last().map_or(0, |m| m.version)
}

/// Version recorded in the database file
pub fn current_version(conn: &Connection) -> rusqlite::Result<i64> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
}

/// Migrations that still have to run on a database at `version`
pub fn pending(version: i64) -> impl Iterator<Item = &'static Migration> {
    MIGRATIONS.iter().filter(move |m| m.version > version)
}

/// Apply one migration and record its version in the same transaction
pub fn apply(tx: &Transaction<'_>, migration: &Migration) -> rusqlite::Result<()> {
    tx.execute_batch(migration.sql)?;
    tx.pragma_update(None, "user_version", migration.version)?;
    Ok(())
}
