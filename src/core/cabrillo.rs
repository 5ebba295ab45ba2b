//! Cabrillo `QTC:` line rendering.

use crate::{qtc::QtcBlock, types::QTC_MODE};

/// Renders one Cabrillo QTC line per entry of `block`.
///
/// Callsign columns are left-justified to ten characters and the block
/// ordinal is zero-padded to three digits. Longer callsigns are not cut.
pub fn format_lines(block: &QtcBlock, sender: &str, receiver: &str) -> Vec<String> {
    let header = &block.header;
    let freq = header.frequency_display();

    block
        .entries
        .iter()
        .map(|entry| {
            format!(
                "QTC: {freq} {QTC_MODE} {} {} {sender:<10} {:03}/{} {receiver:<10} {entry}",
                header.date, header.time, header.current_index, header.total_expected,
            )
        })
        .collect()
}
