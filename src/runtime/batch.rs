//! Outgoing block production with cursor bookkeeping.

use std::fs;

use crate::{
    adif::read_adif,
    core::batcher::{next_batch, BatchOutcome},
    error::{Error, Result},
    persist::{
        file::FileCursorStore, sqlite::SqliteCursorStore, CursorStore, FileIdentity,
    },
    qtc::OutgoingQtc,
    types::ContactIndex,
};

use super::config::{BatchConfig, StoreBackend, SQLITE_CURSOR_DB};

/// What a batch run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchReport {
    /// A full block was produced.
    Sent {
        /// Produced block.
        block: OutgoingQtc,
        /// Cursor after this block.
        next_index: ContactIndex,
        /// False on a dry run.
        cursor_saved: bool,
    },
    /// Not enough contacts remain; the cursor was left alone.
    Incomplete {
        /// Cursor at the start of the run.
        start_index: ContactIndex,
        /// Contacts left after the cursor.
        remaining: usize,
        /// Requested block size.
        batch_size: usize,
    },
}

/// Opens the cursor store selected by `config`.
pub fn open_store(config: &BatchConfig) -> Result<Box<dyn CursorStore>> {
    Ok(match config.backend {
        StoreBackend::File => Box::new(FileCursorStore::new(&config.state_dir)),
        StoreBackend::Sqlite => {
            fs::create_dir_all(&config.state_dir)
                .map_err(|err| Error::io(&config.state_dir, err))?;
            Box::new(SqliteCursorStore::open(
                config.state_dir.join(SQLITE_CURSOR_DB),
            )?)
        }
    })
}

/// Produces the next block of `config.source` and advances its cursor.
///
/// The cursor is saved only after a full block has been built, so a failure
/// in between resends the same block on the next run.
pub fn run_batch<S: CursorStore + ?Sized>(config: &BatchConfig, store: &mut S) -> Result<BatchReport> {
    if config.batch_size == 0 {
        return Err(Error::ZeroBatchSize);
    }

    let text = fs::read_to_string(&config.source).map_err(|err| Error::io(&config.source, err))?;
    let contacts = read_adif(&text)?;

    let identity = FileIdentity::from_path(&config.source);
    let start_index = store.load(&identity)?;
    tracing::info!(
        source = %config.source.display(),
        contacts = contacts.len(),
        start_index,
        batch_size = config.batch_size,
        "preparing QTC batch"
    );

    match next_batch(&contacts, start_index, config.batch_size)? {
        BatchOutcome::Incomplete { remaining } => {
            tracing::info!(start_index, remaining, "not enough contacts for a full batch");
            Ok(BatchReport::Incomplete {
                start_index,
                remaining,
                batch_size: config.batch_size,
            })
        }
        BatchOutcome::Ready { block, next_index } => {
            let cursor_saved = !config.dry_run;
            if cursor_saved {
                store.save(&identity, next_index)?;
            }
            tracing::info!(
                batch_number = block.batch_number,
                next_index,
                cursor_saved,
                "QTC batch ready"
            );
            Ok(BatchReport::Sent {
                block,
                next_index,
                cursor_saved,
            })
        }
    }
}
