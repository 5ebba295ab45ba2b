//! Received block to Cabrillo log conversion.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::{
    core::{cabrillo::format_lines, parser::parse_text},
    error::{Error, Result},
};

use super::config::CabrilloConfig;

/// Outcome of a Cabrillo run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CabrilloReport {
    /// Lines appended to the output log.
    pub lines: Vec<String>,
    /// Entry count declared by the header.
    pub expected: usize,
    /// Entry lines that produced no entry.
    pub skipped: Vec<String>,
}

impl CabrilloReport {
    /// Number of lines written.
    pub fn written(&self) -> usize {
        self.lines.len()
    }

    /// True when fewer or more lines were written than the header declared.
    pub fn is_short(&self) -> bool {
        self.written() != self.expected
    }
}

/// Parses `config.input` and appends its Cabrillo lines to `config.output`.
///
/// Nothing is written unless the whole block validates.
pub fn run_cabrillo(config: &CabrilloConfig) -> Result<CabrilloReport> {
    require_call("sender", &config.sender)?;
    require_call("receiver", &config.receiver)?;

    let raw = fs::read_to_string(&config.input).map_err(|err| Error::io(&config.input, err))?;
    let parsed = parse_text(&raw, config.policy)?;
    // A received QTC is logged with the receiving station in the first call column.
    let lines = format_lines(&parsed.block, config.receiver.trim(), config.sender.trim());

    append_lines(&config.output, &lines)?;

    let report = CabrilloReport {
        lines,
        expected: parsed.block.header.total_expected,
        skipped: parsed.skipped_lines,
    };
    if report.is_short() {
        tracing::info!(
            expected = report.expected,
            written = report.written(),
            skipped = report.skipped.len(),
            "QTC line count differs from header"
        );
    }
    tracing::info!(output = %config.output.display(), written = report.written(), "Cabrillo QTC lines appended");
    Ok(report)
}

/// Appends `lines` to `path`, creating it if needed. Existing content is kept.
pub fn append_lines(path: &Path, lines: &[String]) -> Result<()> {
    if lines.is_empty() {
        return Ok(());
    }
    let mut buf = String::new();
    for line in lines {
        buf.push_str(line);
        buf.push('\n');
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|err| Error::io(path, err))?;
    file.write_all(buf.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|err| Error::io(path, err))
}

fn require_call(arg: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::InvalidArgument {
            arg,
            value: value.to_string(),
        });
    }
    Ok(())
}
