//! Batch cursor persistence.
//!
//! A cursor is the index of the first contact not yet sent for one source
//! log. Stores assume a single writer per source file; concurrent runs
//! against the same log can duplicate or skip blocks.

/// JSON file per source log.
pub mod file;
/// In-process map.
pub mod memory;
/// SQLite table.
pub mod sqlite;

use std::fmt;
use std::path::Path;

use thiserror::Error;

use crate::types::ContactIndex;

/// Cursor persistence failures.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Filesystem failure other than a missing cursor.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// SQLite failure.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    /// Cursor payload could not be encoded.
    #[error("cursor encoding error: {0}")]
    Serde(#[from] serde_json::Error),
    /// Stored cursor payload could not be decoded.
    #[error("corrupt cursor for {identity}: {reason}")]
    Corrupt {
        /// Cursor key.
        identity: String,
        /// What was wrong with it.
        reason: String,
    },
    /// Stored cursor uses an unknown format version.
    #[error("unsupported cursor format version {0}")]
    UnsupportedVersion(u16),
    /// A save would move the cursor backwards.
    #[error("cursor for {identity} cannot move from {current} back to {requested}")]
    Regression {
        /// Cursor key.
        identity: String,
        /// Persisted value.
        current: ContactIndex,
        /// Rejected value.
        requested: ContactIndex,
    },
}

/// Result alias for cursor store operations.
pub type PersistResult<T> = Result<T, PersistError>;

/// Flat, deterministic key for a source log path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileIdentity(String);

impl FileIdentity {
    /// Derives the key from `path`, flattening `/` to `_`.
    ///
    /// `%`, `_` and `\` are percent-escaped first, so distinct paths never
    /// share a key.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let raw = path.as_ref().to_string_lossy();
        let mut key = String::with_capacity(raw.len());
        for c in raw.chars() {
            match c {
                '%' => key.push_str("%25"),
                '_' => key.push_str("%5F"),
                '\\' => key.push_str("%5C"),
                '/' => key.push('_'),
                other => key.push(other),
            }
        }
        Self(key)
    }

    /// Key as a string, safe to use as a file name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Keyed integer store holding one cursor per source log.
pub trait CursorStore {
    /// Returns the cursor for `identity`, or 0 when none was saved.
    fn load(&self, identity: &FileIdentity) -> PersistResult<ContactIndex>;

    /// Persists `next_index` for `identity`.
    fn save(&mut self, identity: &FileIdentity, next_index: ContactIndex) -> PersistResult<()>;
}

impl<S: CursorStore + ?Sized> CursorStore for Box<S> {
    fn load(&self, identity: &FileIdentity) -> PersistResult<ContactIndex> {
        (**self).load(identity)
    }

    fn save(&mut self, identity: &FileIdentity, next_index: ContactIndex) -> PersistResult<()> {
        (**self).save(identity, next_index)
    }
}

/// Rejects saves that would move a cursor backwards.
pub(crate) fn check_forward(
    identity: &FileIdentity,
    current: ContactIndex,
    requested: ContactIndex,
) -> PersistResult<()> {
    if requested < current {
        return Err(PersistError::Regression {
            identity: identity.to_string(),
            current,
            requested,
        });
    }
    Ok(())
}
