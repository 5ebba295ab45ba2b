//! Pure QTC logic: batching, parsing and Cabrillo rendering.

/// Fixed-size windowing of a contact log.
pub mod batcher;
/// Cabrillo QTC line rendering.
pub mod cabrillo;
/// Transcribed QTC block parsing.
pub mod parser;
