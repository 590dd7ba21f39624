//! Text formatting for preview rows and the summary line.

use std::fmt::Write;
use std::time::SystemTime;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};

use crate::config::settings::{PreviewConfig, SizeUnits};
use crate::fs::entry::FileEntry;

/// Fallback pattern used when the configured one cannot be parsed.
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%y, %-I:%M %p";

/// Formats a byte count for display.
///
/// Decimal units step by 1000 and widen precision as the unit grows
/// (`"12 KB"`, `"3.4 MB"`, `"1.23 GB"`); a value that rounds up to 1000
/// moves to the next unit. Binary units step by 1024 with one decimal
/// everywhere (`"1.5 KB"`).
pub fn format_size(bytes: u64, units: SizeUnits) -> String {
    match units {
        SizeUnits::Decimal => format_decimal(bytes),
        SizeUnits::Binary => format_binary(bytes),
    }
}

fn format_decimal(bytes: u64) -> String {
    // (unit, decimals)
    const UNITS: [(&str, usize); 4] = [("KB", 0), ("MB", 1), ("GB", 2), ("TB", 2)];

    if bytes == 1 {
        return "1 byte".to_string();
    }
    if bytes < 1000 {
        return format!("{bytes} bytes");
    }

    let mut value = bytes as f64 / 1000.0;
    let mut unit = 0;
    loop {
        let (name, decimals) = UNITS[unit];
        let rounded = round_to(value, decimals);
        // 999.9 KB printed whole would read "1000 KB"
        if rounded >= 1000.0 && unit + 1 < UNITS.len() {
            value /= 1000.0;
            unit += 1;
            continue;
        }
        return format!("{rounded:.decimals$} {name}");
    }
}

fn round_to(value: f64, decimals: usize) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

fn format_binary(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    const TB: u64 = GB * 1024;

    if bytes >= TB {
        format!("{:.1} TB", bytes as f64 / TB as f64)
    } else if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}

/// Returns `true` if `pattern` is a strftime pattern chrono can render.
pub fn is_valid_date_format(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

/// Formats a timestamp in local time using a strftime `pattern`.
///
/// An unparseable pattern falls back to [`DEFAULT_DATE_FORMAT`].
pub fn format_modified(time: SystemTime, pattern: &str) -> String {
    let local: DateTime<Local> = time.into();
    let pattern = if is_valid_date_format(pattern) {
        pattern
    } else {
        tracing::warn!(pattern, "invalid date format, using default");
        DEFAULT_DATE_FORMAT
    };

    let mut out = String::new();
    if write!(out, "{}", local.format(pattern)).is_err() {
        out.clear();
    }
    out
}

/// Builds the secondary text of a row: `"Folder"` or the size, followed by
/// the modification date when known. Empty if the entry could not be stat'ed.
pub fn info_text(entry: &FileEntry, config: &PreviewConfig) -> String {
    if !entry.has_metadata() {
        return String::new();
    }

    let kind = if entry.is_dir() {
        "Folder".to_string()
    } else {
        format_size(entry.size(), config.size_units)
    };

    match entry.modified() {
        Some(time) => format!(
            "{kind}{}{}",
            config.separator,
            format_modified(time, &config.date_format)
        ),
        None => kind,
    }
}

/// Returns the item-count line shown under the rows.
pub fn summary_text(count: usize) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{count} items")
    }
}
