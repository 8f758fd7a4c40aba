//! Archive storage for memarc-core
//!
//! Entries live in a single SQLite file. The schema is declared explicitly
//! in [`schema`] and brought up to date every time a store is opened.

mod archive;
pub mod day;
pub mod schema;

pub use archive::ArchiveStore;
pub use day::DayRange;
