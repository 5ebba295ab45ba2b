//! Extraction of a transcribed QTC block into structured form.
//!
//! The header line is the first line mentioning `QTC` and must carry
//! `QTC <n>/<total>`, `RX <freq>` and `YYYY-MM-DD HH:MMZ`. Every non-empty
//! line after it is an entry line; exactly `total` of them must be present.
//! Entry lines are mined for `HHMM-CALL-SERIAL` triples and lines without
//! one are skipped, since copied traffic often carries stray annotations.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    error::ParseError,
    qtc::{MatchPolicy, ParsedQtc, QtcBlock, QtcEntry, QtcHeader},
};

static HEADER_COUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"QTC (\d+)/(\d+)").expect("valid header regex"));
static FREQUENCY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"RX (\d+)").expect("valid frequency regex"));
static TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{4}-\d{2}-\d{2}) (\d{2}):(\d{2})Z").expect("valid timestamp regex")
});
static ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{4})-([A-Za-z0-9]+)-(\d+)").expect("valid entry regex")
});

/// Splits raw text into trimmed, non-empty lines and parses them.
pub fn parse_text(raw: &str, policy: MatchPolicy) -> Result<ParsedQtc, ParseError> {
    let lines: Vec<&str> = raw.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
    parse(&lines, policy)
}

/// Parses a block from already trimmed, non-empty lines.
pub fn parse<S: AsRef<str>>(lines: &[S], policy: MatchPolicy) -> Result<ParsedQtc, ParseError> {
    let header_pos = lines
        .iter()
        .position(|l| l.as_ref().contains("QTC"))
        .ok_or(ParseError::MissingHeader)?;
    let header_line = lines[header_pos].as_ref();

    let (current_index, total_expected) = header_counts(header_line)?;

    let entry_lines: Vec<&str> = lines[header_pos + 1..]
        .iter()
        .map(AsRef::as_ref)
        .filter(|l| !l.trim().is_empty())
        .collect();
    if entry_lines.len() != total_expected {
        return Err(ParseError::EntryCountMismatch {
            expected: total_expected,
            actual: entry_lines.len(),
        });
    }

    let frequency = header_frequency(header_line)?;
    let (date, time) = header_timestamp(header_line)?;

    let mut entries = Vec::with_capacity(total_expected);
    let mut skipped_lines = Vec::new();
    for line in entry_lines {
        let found = extract_entries(line, policy);
        if found.is_empty() {
            tracing::debug!(line, "no QTC entry found, skipping line");
            skipped_lines.push(line.to_string());
        }
        entries.extend(found);
    }

    Ok(ParsedQtc {
        block: QtcBlock {
            header: QtcHeader {
                current_index,
                total_expected,
                frequency,
                date,
                time,
            },
            entries,
        },
        skipped_lines,
    })
}

/// Returns the entries `policy` selects from one line.
pub fn extract_entries(line: &str, policy: MatchPolicy) -> Vec<QtcEntry> {
    let mut all: Vec<QtcEntry> = ENTRY
        .captures_iter(line)
        .map(|c| QtcEntry::new(&c[1], &c[2], &c[3]))
        .collect();

    match policy {
        MatchPolicy::AllMatches => all,
        MatchPolicy::FirstMatch => all.into_iter().take(1).collect(),
        MatchPolicy::SecondMatch => match all.len() {
            0 | 1 => all,
            _ => vec![all.swap_remove(1)],
        },
    }
}

fn header_counts(line: &str) -> Result<(usize, usize), ParseError> {
    let invalid = || ParseError::InvalidHeaderFormat {
        line: line.to_string(),
    };
    let caps = HEADER_COUNT.captures(line).ok_or_else(invalid)?;
    let current = caps[1].parse().map_err(|_| invalid())?;
    let total = caps[2].parse().map_err(|_| invalid())?;
    Ok((current, total))
}

fn header_frequency(line: &str) -> Result<u64, ParseError> {
    let caps = FREQUENCY.captures(line).ok_or(ParseError::MissingFrequency)?;
    caps[1].parse().map_err(|_| ParseError::InvalidFrequency {
        value: caps[1].to_string(),
    })
}

fn header_timestamp(line: &str) -> Result<(String, String), ParseError> {
    let caps = TIMESTAMP.captures(line).ok_or(ParseError::InvalidTimestamp)?;
    Ok((caps[1].to_string(), format!("{}{}", &caps[2], &caps[3])))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_match_prefers_index_one() {
        let line = "0150-W6ZD-26 0152-W6ZD-27";
        let got = extract_entries(line, MatchPolicy::SecondMatch);
        assert_eq!(got, vec![QtcEntry::new("0152", "W6ZD", "27")]);
    }

    #[test]
    fn second_match_keeps_a_sole_match() {
        let got = extract_entries("0152-W6ZD-27", MatchPolicy::SecondMatch);
        assert_eq!(got, vec![QtcEntry::new("0152", "W6ZD", "27")]);
    }

    #[test]
    fn first_and_all_policies() {
        let line = "0150-AA1A-1 x 0151-BB2B-2 y 0152-CC3C-3";
        assert_eq!(
            extract_entries(line, MatchPolicy::FirstMatch),
            vec![QtcEntry::new("0150", "AA1A", "1")]
        );
        assert_eq!(extract_entries(line, MatchPolicy::AllMatches).len(), 3);
    }

    #[test]
    fn timestamp_drops_colon() {
        let (date, time) = header_timestamp("QTC 1/1 RX 7010 2024-11-09 23:59Z").unwrap();
        assert_eq!(date, "2024-11-09");
        assert_eq!(time, "2359");
    }
}
