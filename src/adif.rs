//! Minimal ADI (tagged ADIF) reader.
//!
//! Handles the subset contest loggers emit: an optional header closed by
//! `<EOH>`, then `<NAME:LEN[:TYPE]>value` fields grouped into records by
//! `<EOR>`. Lengths count bytes, as ADIF specifies.

use thiserror::Error;

use crate::contact::ContactRecord;

/// Failures while reading an ADI log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdifError {
    /// A `<` with no closing `>`.
    #[error("unterminated tag at byte {offset}")]
    UnterminatedTag {
        /// Byte offset of the `<`.
        offset: usize,
    },

    /// A field length that is not a decimal number.
    #[error("invalid length {length:?} for field {field} at byte {offset}")]
    InvalidLength {
        /// Field name.
        field: String,
        /// Raw length text.
        length: String,
        /// Byte offset of the tag.
        offset: usize,
    },

    /// Fewer bytes remain than the field declares, or the value is not UTF-8.
    #[error("truncated value for field {field} at byte {offset}")]
    TruncatedValue {
        /// Field name.
        field: String,
        /// Byte offset of the tag.
        offset: usize,
    },

    /// Fields after the last `<EOR>`.
    #[error("record with {fields} field(s) not terminated by <EOR>")]
    UnterminatedRecord {
        /// Number of dangling fields.
        fields: usize,
    },
}

/// Parses ADI text into contact records in file order.
pub fn read_adif(text: &str) -> Result<Vec<ContactRecord>, AdifError> {
    let bytes = text.as_bytes();
    let mut pos = header_end(text).unwrap_or(0);
    let mut records = Vec::new();
    let mut current = ContactRecord::new();

    while let Some(rel) = text[pos..].find('<') {
        let open = pos + rel;
        let close = text[open..]
            .find('>')
            .map(|c| open + c)
            .ok_or(AdifError::UnterminatedTag { offset: open })?;
        let tag = &text[open + 1..close];
        pos = close + 1;

        let mut parts = tag.splitn(3, ':');
        let name = parts.next().unwrap_or("").trim();
        let length = parts.next();

        let Some(length) = length else {
            if name.eq_ignore_ascii_case("EOR") {
                records.push(std::mem::take(&mut current));
            }
            // Bare tags other than EOR carry no data.
            continue;
        };

        let len: usize = length.trim().parse().map_err(|_| AdifError::InvalidLength {
            field: name.to_string(),
            length: length.to_string(),
            offset: open,
        })?;
        let end = pos + len;
        if end > bytes.len() || !text.is_char_boundary(end) {
            return Err(AdifError::TruncatedValue {
                field: name.to_string(),
                offset: open,
            });
        }
        current.set(name, &text[pos..end]);
        pos = end;
    }

    if !current.is_empty() {
        return Err(AdifError::UnterminatedRecord {
            fields: current.len(),
        });
    }

    tracing::debug!(records = records.len(), "read ADIF log");
    Ok(records)
}

/// Byte offset just past `<EOH>`, if the log has a header.
///
/// A log starting with `<` has no header.
fn header_end(text: &str) -> Option<usize> {
    if text.trim_start().starts_with('<') {
        return None;
    }
    let upper = text.to_ascii_uppercase();
    upper.find("<EOH>").map(|i| i + "<EOH>".len())
}
