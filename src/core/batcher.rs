//! Windowing of a contact log into fixed-size outgoing QTC blocks.

use crate::{
    contact::ContactRecord,
    error::{Error, Result},
    qtc::{OutgoingQtc, QtcEntry},
    types::ContactIndex,
};

/// Result of asking for the next window of contacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    /// A full block is available.
    Ready {
        /// Block to send.
        block: OutgoingQtc,
        /// Cursor value to persist once the block has been emitted.
        next_index: ContactIndex,
    },
    /// Fewer than `batch_size` contacts remain; the cursor must not move.
    Incomplete {
        /// Contacts left from `start_index` onward.
        remaining: usize,
    },
}

/// Computes the block starting at `start_index`.
///
/// Pure: the caller persists `next_index`, so repeating a call with the same
/// inputs always yields the same block.
pub fn next_batch(
    contacts: &[ContactRecord],
    start_index: ContactIndex,
    batch_size: usize,
) -> Result<BatchOutcome> {
    if batch_size == 0 {
        return Err(Error::ZeroBatchSize);
    }

    let window = contacts.get(start_index..).unwrap_or(&[]);
    if window.len() < batch_size {
        return Ok(BatchOutcome::Incomplete {
            remaining: window.len(),
        });
    }

    let entries = window[..batch_size]
        .iter()
        .map(|c| QtcEntry::new(c.time_on_hhmm(), c.call(), c.srx()))
        .collect();

    Ok(BatchOutcome::Ready {
        block: OutgoingQtc {
            batch_number: start_index / batch_size + 1,
            batch_size,
            entries,
        },
        next_index: start_index + batch_size,
    })
}
