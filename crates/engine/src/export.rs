//! CSV export of filtered entries

use aoilog_core::constants::EXPORT_FILE_PREFIX;
use aoilog_core::LogEntry;
use chrono::{DateTime, NaiveDate, Utc};

/// Header row of the exported CSV
pub const CSV_HEADER: &str = "ID,Time,Level,Type,User,Description,Details,IP";

// Spreadsheet tools need the BOM to detect UTF-8 and render non-ASCII text.
const UTF8_BOM: char = '\u{feff}';

/// Serialize `entries` to CSV bytes, in the given order
///
/// UTF-8 with a leading byte-order-mark; Description and Details are wrapped
/// in double quotes with embedded quotes doubled. The remaining columns are
/// emitted bare, as the original export did.
#[must_use]
pub fn export_csv(entries: &[LogEntry]) -> Vec<u8> {
    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(format!("{UTF8_BOM}{CSV_HEADER}"));

    for entry in entries {
        lines.push(format!(
            "{},{},{},{},{},{},{},{}",
            entry.id,
            format_time(entry.timestamp),
            entry.level.label(),
            entry.category.label(),
            entry.actor,
            quoted(&entry.description),
            quoted(&entry.details),
            entry.origin,
        ));
    }

    lines.join("\n").into_bytes()
}

/// Suggested filename for an export created on `date`
#[must_use]
pub fn export_filename(date: NaiveDate) -> String {
    format!("{}_{}.csv", EXPORT_FILE_PREFIX, date.format("%Y-%m-%d"))
}

/// Display form of a timestamp for the CSV `Time` column
#[must_use]
pub fn format_time(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
}

fn quoted(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
