//! QTC block, header and entry values shared by the batcher and parser.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{BatchNumber, Frequency};

/// One relayed contact: time, callsign and serial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QtcEntry {
    /// `HHMM` of the original contact.
    pub time: String,
    /// Worked callsign.
    pub callsign: String,
    /// Received serial, kept as text so leading zeros survive.
    pub serial: String,
}

impl QtcEntry {
    /// Builds an entry from its three parts.
    pub fn new(time: impl Into<String>, callsign: impl Into<String>, serial: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            callsign: callsign.into(),
            serial: serial.into(),
        }
    }

    /// Space separated form used when sending a block over the air.
    pub fn to_air_line(&self) -> String {
        format!("{} {} {}", self.time, self.callsign, self.serial)
    }
}

/// Hyphenated `HHMM-CALL-SERIAL` form used in Cabrillo output.
impl fmt::Display for QtcEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.time, self.callsign, self.serial)
    }
}

/// Metadata carried by the `QTC n/total RX freq date timeZ` header line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QtcHeader {
    /// One-based ordinal of this block.
    pub current_index: BatchNumber,
    /// Declared number of entries.
    pub total_expected: usize,
    /// Raw `RX` value.
    pub frequency: Frequency,
    /// `YYYY-MM-DD`.
    pub date: String,
    /// `HHMM`.
    pub time: String,
}

impl QtcHeader {
    /// Frequency divided by 1000 with exactly three fractional digits.
    pub fn frequency_display(&self) -> String {
        format!("{}.{:03}", self.frequency / 1000, self.frequency % 1000)
    }
}

/// A parsed block: header plus the entries that could be extracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QtcBlock {
    /// Header metadata.
    pub header: QtcHeader,
    /// Extracted entries in input order.
    pub entries: Vec<QtcEntry>,
}

/// Parser output with the lines that yielded no entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQtc {
    /// Parsed block.
    pub block: QtcBlock,
    /// Entry lines with no `HHMM-CALL-SERIAL` match.
    pub skipped_lines: Vec<String>,
}

/// Which match to keep when an entry line contains several triples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MatchPolicy {
    /// Keep the first match.
    FirstMatch,
    /// Keep the second match, or the only one when there is just one.
    #[default]
    SecondMatch,
    /// Keep every match as its own entry.
    AllMatches,
}

/// An outgoing block produced from the contact log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingQtc {
    /// One-based block ordinal.
    pub batch_number: BatchNumber,
    /// Block size, also sent as the header total.
    pub batch_size: usize,
    /// Entries in log order.
    pub entries: Vec<QtcEntry>,
}

impl OutgoingQtc {
    /// Renders the block as sent over the air.
    pub fn render(&self) -> String {
        let mut out = format!("QTC {}/{}\n", self.batch_number, self.batch_size);
        for entry in &self.entries {
            out.push_str(&entry.to_air_line());
            out.push('\n');
        }
        out.push_str(&format!(
            "PSE QSL for QTC {}/{}\n",
            self.batch_number, self.batch_size
        ));
        out
    }
}
