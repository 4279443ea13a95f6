use std::fmt::Display;
use std::time::Duration;

use chrono::{DateTime, Local};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

pub const UNKNOWN: &str = "Unknown";

pub fn truncate_unicode(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width.saturating_sub(1) {
            result.push('\u{2026}');
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result
}

/// Bytes as binary gigabytes with two decimals, e.g. `16.00 GB`.
pub fn format_gib(bytes: u64) -> String {
    format!("{:.2} GB", bytes as f64 / GIB)
}

/// One decimal, trailing `.0` dropped: `37%`, `37.5%`.
pub fn format_cpu_percent(percent: f32) -> String {
    let rounded = (percent * 10.0).round() / 10.0;
    format!("{rounded}%")
}

pub fn format_percent(percent: f32) -> String {
    format!("{percent:.1}%")
}

pub fn format_timestamp(time: &DateTime<Local>) -> String {
    time.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// `H:MM:SS`, prefixed with the day count once it reaches a day.
pub fn format_uptime(uptime: Duration) -> String {
    let secs = uptime.as_secs();
    let days = secs / 86_400;
    let hours = (secs % 86_400) / 3_600;
    let minutes = (secs % 3_600) / 60;
    let seconds = secs % 60;
    match days {
        0 => format!("{hours}:{minutes:02}:{seconds:02}"),
        1 => format!("1 day, {hours}:{minutes:02}:{seconds:02}"),
        n => format!("{n} days, {hours}:{minutes:02}:{seconds:02}"),
    }
}

pub fn or_unknown<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| UNKNOWN.to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn gib_uses_binary_units_and_two_decimals() {
        assert_eq!(format_gib(16 * 1024 * 1024 * 1024), "16.00 GB");
        assert_eq!(format_gib(0), "0.00 GB");
        assert_eq!(format_gib(1536 * 1024 * 1024), "1.50 GB");
    }

    #[test]
    fn cpu_percent_drops_trailing_zero() {
        assert_eq!(format_cpu_percent(37.0), "37%");
        assert_eq!(format_cpu_percent(37.54), "37.5%");
        assert_eq!(format_cpu_percent(0.0), "0%");
    }

    #[test]
    fn percent_keeps_one_decimal() {
        assert_eq!(format_percent(50.0), "50.0%");
        assert_eq!(format_percent(12.345), "12.3%");
    }

    #[test]
    fn uptime_formats_days_and_clock() {
        assert_eq!(format_uptime(Duration::from_secs(300)), "0:05:00");
        assert_eq!(format_uptime(Duration::from_secs(86_400 + 3_723)), "1 day, 1:02:03");
        assert_eq!(
            format_uptime(Duration::from_secs(3 * 86_400 + 4 * 3_600 + 5 * 60 + 6)),
            "3 days, 4:05:06"
        );
    }

    #[test]
    fn timestamp_uses_local_wall_clock() {
        let time = Local.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format_timestamp(&time), "2026-01-02 03:04:05");
    }

    #[test]
    fn missing_values_print_unknown() {
        assert_eq!(or_unknown(None::<usize>), "Unknown");
        assert_eq!(or_unknown(Some(4)), "4");
    }

    #[test]
    fn truncate_unicode_adds_ellipsis() {
        assert_eq!(truncate_unicode("hello world", 6), "hello\u{2026}");
        assert_eq!(truncate_unicode("short", 10), "short");
    }
}
