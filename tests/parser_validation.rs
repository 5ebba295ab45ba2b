use qtclog::{
    core::{cabrillo::format_lines, parser::{parse, parse_text}},
    qtc::{MatchPolicy, QtcEntry},
    ParseError,
};

const SCENARIO: &str = "QTC 2/2 RX 14080 2024-01-15 12:34Z\n0152-W6ZD-27\n0201-K1ABC-31\n";

#[test]
fn scenario_block_formats_two_lines() {
    let parsed = parse_text(SCENARIO, MatchPolicy::SecondMatch).expect("parse");
    assert!(parsed.skipped_lines.is_empty());

    let header = &parsed.block.header;
    assert_eq!(header.current_index, 2);
    assert_eq!(header.total_expected, 2);
    assert_eq!(header.frequency, 14080);
    assert_eq!(header.date, "2024-01-15");
    assert_eq!(header.time, "1234");

    let lines = format_lines(&parsed.block, "N1AAA", "W2BBB");
    assert_eq!(
        lines,
        vec![
            "QTC: 14.080 RY 2024-01-15 1234 N1AAA      002/2 W2BBB      0152-W6ZD-27",
            "QTC: 14.080 RY 2024-01-15 1234 N1AAA      002/2 W2BBB      0201-K1ABC-31",
        ]
    );
}

#[test]
fn sequence_number_is_zero_padded() {
    let raw = "QTC 7/1 RX 3525 2024-01-15 00:05Z\n0001-DL1ABC-100";
    let parsed = parse_text(raw, MatchPolicy::default()).unwrap();
    let lines = format_lines(&parsed.block, "OK1XYZ", "DL0WAE");
    assert_eq!(
        lines[0],
        "QTC: 3.525 RY 2024-01-15 0005 OK1XYZ     007/1 DL0WAE     0001-DL1ABC-100"
    );
}

#[test]
fn missing_header() {
    let err = parse_text("0152-W6ZD-27\n0201-K1ABC-31", MatchPolicy::default()).unwrap_err();
    assert_eq!(err, ParseError::MissingHeader);
}

#[test]
fn malformed_header_counts() {
    let err = parse_text("QTC two of 2 RX 14080 2024-01-15 12:34Z\n0152-W6ZD-27", MatchPolicy::default())
        .unwrap_err();
    assert!(matches!(err, ParseError::InvalidHeaderFormat { .. }));
}

#[test]
fn oversized_header_counts() {
    for raw in [
        "QTC 99999999999999999999999/1 RX 14080 2024-01-15 12:34Z\n0152-W6ZD-27",
        "QTC 1/99999999999999999999999 RX 14080 2024-01-15 12:34Z\n0152-W6ZD-27",
    ] {
        assert!(
            matches!(
                parse_text(raw, MatchPolicy::default()),
                Err(ParseError::InvalidHeaderFormat { .. })
            ),
            "{raw}"
        );
    }
}

#[test]
fn entry_count_must_match_exactly() {
    let raw = "QTC 1/3 RX 14080 2024-01-15 12:34Z\n0152-W6ZD-27\n0201-K1ABC-31";
    let err = parse_text(raw, MatchPolicy::default()).unwrap_err();
    assert_eq!(
        err,
        ParseError::EntryCountMismatch {
            expected: 3,
            actual: 2
        }
    );
    assert_eq!(err.to_string(), "expected 3 QTC lines, but found 2");

    let raw = "QTC 1/1 RX 14080 2024-01-15 12:34Z\n0152-W6ZD-27\n0201-K1ABC-31";
    assert!(matches!(
        parse_text(raw, MatchPolicy::default()),
        Err(ParseError::EntryCountMismatch { expected: 1, actual: 2 })
    ));
}

#[test]
fn missing_frequency() {
    let raw = "QTC 1/1 2024-01-15 12:34Z\n0152-W6ZD-27";
    assert_eq!(
        parse_text(raw, MatchPolicy::default()).unwrap_err(),
        ParseError::MissingFrequency
    );
}

#[test]
fn oversized_frequency() {
    let raw = "QTC 1/1 RX 99999999999999999999999 2024-01-15 12:34Z\n0152-W6ZD-27";
    assert!(matches!(
        parse_text(raw, MatchPolicy::default()),
        Err(ParseError::InvalidFrequency { .. })
    ));
}

#[test]
fn invalid_timestamp() {
    for raw in [
        "QTC 1/1 RX 14080 2024-01-15 12:34\n0152-W6ZD-27",
        "QTC 1/1 RX 14080 15/01/2024 12:34Z\n0152-W6ZD-27",
        "QTC 1/1 RX 14080\n0152-W6ZD-27",
    ] {
        assert_eq!(
            parse_text(raw, MatchPolicy::default()).unwrap_err(),
            ParseError::InvalidTimestamp,
            "{raw}"
        );
    }
}

#[test]
fn count_is_checked_before_frequency() {
    let raw = "QTC 1/2\n0152-W6ZD-27";
    assert!(matches!(
        parse_text(raw, MatchPolicy::default()),
        Err(ParseError::EntryCountMismatch { .. })
    ));
}

#[test]
fn lines_before_header_are_ignored() {
    let raw = "de DL0WAE\nnoise 0000-XX0X-0\nQTC 3/1 RX 7010 2024-08-10 21:00Z\n0152-W6ZD-27";
    let parsed = parse_text(raw, MatchPolicy::default()).unwrap();
    assert_eq!(parsed.block.entries, vec![QtcEntry::new("0152", "W6ZD", "27")]);
}

#[test]
fn unmatched_lines_are_skipped_and_reported() {
    let raw = "QTC 1/3 RX 14080 2024-01-15 12:34Z\n0152-W6ZD-27\nQRM pse rpt\n0201-K1ABC-31";
    let parsed = parse_text(raw, MatchPolicy::default()).unwrap();
    assert_eq!(parsed.block.entries.len(), 2);
    assert_eq!(parsed.skipped_lines, vec!["QRM pse rpt".to_string()]);
    assert_eq!(format_lines(&parsed.block, "N1AAA", "W2BBB").len(), 2);
}

#[test]
fn echoed_line_keeps_second_match() {
    let raw = "QTC 1/1 RX 14080 2024-01-15 12:34Z\n0152-W6ZB-27 0152-W6ZD-27";
    let second = parse_text(raw, MatchPolicy::SecondMatch).unwrap();
    assert_eq!(second.block.entries, vec![QtcEntry::new("0152", "W6ZD", "27")]);

    let first = parse_text(raw, MatchPolicy::FirstMatch).unwrap();
    assert_eq!(first.block.entries, vec![QtcEntry::new("0152", "W6ZB", "27")]);

    let all = parse_text(raw, MatchPolicy::AllMatches).unwrap();
    assert_eq!(all.block.entries.len(), 2);
}

#[test]
fn parse_accepts_pre_split_lines() {
    let lines = vec![
        "QTC 1/1 RX 21050 2024-01-15 12:34Z".to_string(),
        "0152-W6ZD-27".to_string(),
    ];
    let parsed = parse(&lines, MatchPolicy::default()).unwrap();
    assert_eq!(parsed.block.header.frequency_display(), "21.050");
}
