//! On-disk behaviour of the archive store

use chrono::{TimeZone, Utc};
use memarc_core::store::schema;
use memarc_core::{ArchiveStore, Error, NewEntry};
use rusqlite::Connection;

#[test]
fn test_open_creates_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("nested").join(".memarc").join("memarc.db");

    let store = ArchiveStore::open(&db_path).unwrap();
    store.create(NewEntry::new("first")).unwrap();

    assert!(db_path.exists());
}

#[cfg(unix)]
#[test]
fn test_created_directory_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let app_dir = dir.path().join(".memarc");
    ArchiveStore::open(app_dir.join("memarc.db")).unwrap();

    let mode = std::fs::metadata(&app_dir).unwrap().permissions().mode();
    assert_eq!(mode & 0o077, 0);
}

#[test]
fn test_reopen_keeps_entries() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("memarc.db");

    let created = {
        let store = ArchiveStore::open(&db_path).unwrap();
        store
            .create(NewEntry::new("Remember the milk").with_tags("errands"))
            .unwrap()
    };

    let store = ArchiveStore::open(&db_path).unwrap();
    let again = ArchiveStore::open(&db_path).unwrap();
    assert_eq!(store.list_all().unwrap(), vec![created.clone()]);
    assert_eq!(again.get_by_id(created.id).unwrap(), created);
    assert_eq!(store.schema_version().unwrap(), schema::latest_version());
}

#[test]
fn test_upgrades_version_one_database() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("memarc.db");

    {
        let conn = Connection::open(&db_path).unwrap();
        conn.execute_batch(schema::MIGRATIONS[0].sql).unwrap();
        conn.pragma_update(None, "user_version", 1).unwrap();
        conn.execute(
            "INSERT INTO entries (content, type, tags, created_at, updated_at)
             VALUES ('old note', 'personal', '', '2023-01-01T10:00:00.000000Z', '2023-01-01T10:00:00.000000Z')",
            [],
        )
        .unwrap();
    }

    let store = ArchiveStore::open(&db_path).unwrap();
    assert_eq!(store.schema_version().unwrap(), schema::latest_version());

    let entries = store.list_by_date_in("2023-01-01", &Utc).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].content, "old note");
    assert_eq!(
        entries[0].created_at,
        Utc.with_ymd_and_hms(2023, 1, 1, 10, 0, 0).unwrap()
    );
}

#[test]
fn test_rejects_newer_schema() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("memarc.db");

    {
        let conn = Connection::open(&db_path).unwrap();
        conn.pragma_update(None, "user_version", schema::latest_version() + 1)
            .unwrap();
    }

    let err = ArchiveStore::open(&db_path).err().unwrap();
    assert!(matches!(err, Error::Initialization { .. }));
}

#[test]
fn test_rejects_corrupt_file() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("memarc.db");
    std::fs::write(&db_path, vec![b'x'; 4096]).unwrap();

    let err = ArchiveStore::open(&db_path).err().unwrap();
    assert!(matches!(err, Error::Initialization { .. }));
}

#[test]
fn test_directory_in_place_of_parent_fails() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"file").unwrap();

    let err = ArchiveStore::open(blocker.join("memarc.db")).err().unwrap();
    assert!(matches!(err, Error::Initialization { .. }));
}

#[test]
fn test_entries_visible_across_handles() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("memarc.db");

    let writer = ArchiveStore::open(&db_path).unwrap();
    let reader = ArchiveStore::open(&db_path).unwrap();

    for i in 0..5 {
        writer.create(NewEntry::new(format!("note {i}"))).unwrap();
    }
    assert_eq!(reader.count().unwrap(), 5);

    let last = reader.list_all().unwrap().pop().unwrap();
    writer.delete_by_id(last.id).unwrap();
    assert!(matches!(reader.get_by_id(last.id), Err(Error::NotFound(_))));
}
