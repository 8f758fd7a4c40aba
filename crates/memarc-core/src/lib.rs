//! memarc-core: personal memory archive library
//!
//! Provides the entry model, the SQLite-backed archive store and the
//! configuration loader used by the `memarc` binary.

pub mod config;
pub mod entry;
pub mod error;
pub mod store;

pub use config::Config;
pub use entry::{DEFAULT_ENTRY_TYPE, Entry, EntryUpdate, NewEntry};
pub use error::{Error, Result};
pub use store::{ArchiveStore, DayRange};
