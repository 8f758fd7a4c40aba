//! Error types for memarc-core

use std::path::PathBuf;

use rusqlite::ErrorCode;
use thiserror::Error;

/// Main error type for memarc-core
#[derive(Error, Debug)]
pub enum Error {
    /// The database directory, file or schema could not be prepared
    #[error("failed to initialize archive at {}", .path.display())]
    Initialization {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("invalid input: {0}")]
    Validation(String),

    #[error("write failed")]
    Write(#[source] rusqlite::Error),

    #[error("read failed")]
    Read(#[source] rusqlite::Error),

    #[error("entry not found: {0}")]
    NotFound(i64),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn initialization(
        path: impl Into<PathBuf>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Initialization {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Whether the failure came from another process holding the database lock.
    ///
    /// Such errors are safe to retry once the other writer is done.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Write(e) | Self::Read(e) => matches!(
                e.sqlite_error_code(),
                Some(ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked)
            ),
            _ => false,
        }
    }
}

/// Result type alias for memarc-core
pub type Result<T> = std::result::Result<T, Error>;
