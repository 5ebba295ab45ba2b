//! Run configuration for the batch and Cabrillo pipelines.

use std::path::PathBuf;

use crate::{qtc::MatchPolicy, types::DEFAULT_BATCH_SIZE};

/// File name of the SQLite cursor database inside the state directory.
pub const SQLITE_CURSOR_DB: &str = "qtclog-cursors.db";

/// Cursor store backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    /// One JSON file per source log.
    #[default]
    File,
    /// One SQLite database for every source log.
    Sqlite,
}

/// Settings for producing the next outgoing block.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// ADIF log to batch.
    pub source: PathBuf,
    /// Contacts per block.
    pub batch_size: usize,
    /// Directory holding cursor state.
    pub state_dir: PathBuf,
    /// Cursor store backend.
    pub backend: StoreBackend,
    /// Render without advancing the cursor.
    pub dry_run: bool,
}

impl BatchConfig {
    /// Defaults for `source`: ten contacts per block, state in the temp dir.
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            batch_size: DEFAULT_BATCH_SIZE,
            state_dir: std::env::temp_dir(),
            backend: StoreBackend::default(),
            dry_run: false,
        }
    }
}

/// Settings for converting a received block into Cabrillo lines.
#[derive(Debug, Clone)]
pub struct CabrilloConfig {
    /// Transcribed QTC text.
    pub input: PathBuf,
    /// Log file the lines are appended to.
    pub output: PathBuf,
    /// Station that sent the QTC; second callsign column.
    pub sender: String,
    /// Station that received the QTC; first callsign column.
    pub receiver: String,
    /// Entry selection for lines with several matches.
    pub policy: MatchPolicy,
}
