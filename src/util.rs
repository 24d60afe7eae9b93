use chrono::{Local, LocalResult, TimeZone};

const KB: i64 = 1_000;
const MB: i64 = 1_000_000;
const GB: i64 = 1_000_000_000;

/// Formats a Unix timestamp (seconds) as `DD.MM.YYYY HH:MM:SS` in the
/// local timezone of the running process. Out-of-range values format to
/// an empty string.
pub fn format_timestamp(secs: i64) -> String {
    match Local.timestamp_opt(secs, 0) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => {
            dt.format("%d.%m.%Y %H:%M:%S").to_string()
        }
        LocalResult::None => String::new(),
    }
}

/// Parses a queried string field as a Unix timestamp and formats it.
/// Empty or non-numeric fields yield an empty string.
pub fn format_timestamp_field(raw: &str) -> String {
    raw.trim()
        .parse::<i64>()
        .map(format_timestamp)
        .unwrap_or_default()
}

/// Splits `input` on every occurrence of `delimiter` with line-read
/// semantics: empty segments between consecutive delimiters are kept,
/// a single trailing delimiter yields no trailing empty segment, and an
/// empty input yields no segments at all.
pub fn split_on(input: &str, delimiter: char) -> Vec<String> {
    if input.is_empty() {
        return Vec::new();
    }
    let mut segments: Vec<String> = input.split(delimiter).map(str::to_string).collect();
    if input.ends_with(delimiter) {
        segments.pop();
    }
    segments
}

/// Renders a byte count in GB/MB/KB/byte units, truncating integer
/// division throughout (decimal units, no rounding).
pub fn byte_unit_breakdown(bytes: i64) -> String {
    format!(
        "{} GB / {} MB / {} KB / {} B",
        bytes / GB,
        bytes / MB,
        bytes / KB,
        bytes
    )
}

/// Parses a queried string field as a byte count and renders the unit
/// breakdown. Empty or non-numeric fields yield an empty string.
pub fn byte_unit_breakdown_field(raw: &str) -> String {
    raw.trim()
        .parse::<i64>()
        .map(byte_unit_breakdown)
        .unwrap_or_default()
}
