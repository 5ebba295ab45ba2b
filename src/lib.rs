//! QTC traffic tooling for WAE-style contests.
//!
//! Two pipelines share the crate. The batch side walks an ADIF log in
//! fixed-size windows, remembering per log how far it got, and renders each
//! window as a QTC block for sending. The Cabrillo side takes a received,
//! hand-copied block and turns it into `QTC:` lines for the contest log.
//!
//! # Examples
//!
//! Batching a log held in memory:
//! ```
//! use qtclog::{
//!     adif::read_adif,
//!     core::batcher::{next_batch, BatchOutcome},
//! };
//!
//! let log = "<TIME_ON:6>015200<CALL:4>W6ZD<SRX:2>27<EOR>\
//!            <TIME_ON:6>020100<CALL:5>K1ABC<SRX:2>31<EOR>";
//! let contacts = read_adif(log).expect("adif");
//! let BatchOutcome::Ready { block, next_index } = next_batch(&contacts, 0, 2).expect("batch") else {
//!     panic!("expected a full batch");
//! };
//! assert_eq!(next_index, 2);
//! assert_eq!(
//!     block.render(),
//!     "QTC 1/2\n0152 W6ZD 27\n0201 K1ABC 31\nPSE QSL for QTC 1/2\n"
//! );
//! ```
//!
//! Converting a received block:
//! ```
//! use qtclog::{
//!     core::{cabrillo::format_lines, parser::parse_text},
//!     qtc::MatchPolicy,
//! };
//!
//! let raw = "QTC 2/2 RX 14080 2024-01-15 12:34Z\n0152-W6ZD-27\n0201-K1ABC-31\n";
//! let parsed = parse_text(raw, MatchPolicy::default()).expect("parse");
//! let lines = format_lines(&parsed.block, "N1AAA", "W2BBB");
//! assert_eq!(
//!     lines[0],
//!     "QTC: 14.080 RY 2024-01-15 1234 N1AAA      002/2 W2BBB      0152-W6ZD-27"
//! );
//! ```
#![deny(missing_docs)]

/// ADI log reader.
pub mod adif;
/// Contact records.
pub mod contact;
/// Batching, parsing and Cabrillo rendering.
pub mod core;
/// Error types.
pub mod error;
/// Cursor persistence.
pub mod persist;
/// QTC block and entry values.
pub mod qtc;
/// Pipeline orchestration and configuration.
pub mod runtime;
/// Shared primitive types and constants.
pub mod types;

pub use error::{Error, ParseError, Result};
