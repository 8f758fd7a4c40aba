//! Archive entry model
//!
//! An [`Entry`] is one stored memory. New memories are described with
//! [`NewEntry`] and changed with [`EntryUpdate`]; only the store hands out
//! `Entry` values, so every one of them has a store-assigned id.

mod types;

pub use types::{DEFAULT_ENTRY_TYPE, Entry, EntryUpdate, NewEntry};
