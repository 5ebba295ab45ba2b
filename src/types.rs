//! Shared primitive aliases and QTC constants.

/// Zero-based position of a contact within a source log.
pub type ContactIndex = usize;
/// One-based ordinal of a QTC block.
pub type BatchNumber = usize;
/// Frequency as it appears after `RX` in a block header.
pub type Frequency = u64;

/// Mode column written on every Cabrillo QTC line.
pub const QTC_MODE: &str = "RY";

/// Number of contacts per QTC block when none is configured.
pub const DEFAULT_BATCH_SIZE: usize = 10;
