//! Formatting utilities for display

use chrono::{DateTime, TimeZone};

/// Format a byte count the way file browsers do: `0 Bytes`, `2.5 KB`,
/// `1.25 MB`. Two decimals at most, trailing zeros dropped.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    let exponent = (((bytes as f64).ln() / 1024_f64.ln()).floor() as usize).min(UNITS.len() - 1);
    let value = bytes as f64 / 1024_f64.powi(exponent as i32);

    let text = format!("{:.2}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", text, UNITS[exponent])
}

/// Format an upload timestamp, e.g. `Mar 07, 2026 14:05`.
pub fn format_upload_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%b %d, %Y %H:%M").to_string()
}

/// Format a chat message timestamp, e.g. `14:05`.
pub fn format_message_time<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    // ========================================================================
    // format_file_size Tests
    // ========================================================================

    #[test]
    fn test_format_file_size_zero() {
        assert_eq!(format_file_size(0), "0 Bytes");
    }

    #[test]
    fn test_format_file_size_bytes() {
        assert_eq!(format_file_size(1), "1 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1023), "1023 Bytes");
    }

    #[test]
    fn test_format_file_size_kilobytes() {
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(2560), "2.5 KB");
    }

    #[test]
    fn test_format_file_size_megabytes() {
        assert_eq!(format_file_size(1024 * 1024), "1 MB");
        assert_eq!(format_file_size(1024 * 1024 * 5 + 1024 * 256), "5.25 MB");
    }

    #[test]
    fn test_format_file_size_gigabytes() {
        assert_eq!(format_file_size(1024 * 1024 * 1024), "1 GB");
    }

    #[test]
    fn test_format_file_size_trims_trailing_zeros() {
        // 1.50 KB renders as 1.5 KB, 2.00 MB as 2 MB
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(2 * 1024 * 1024), "2 MB");
    }

    // ========================================================================
    // Timestamp formatting Tests
    // ========================================================================

    #[test]
    fn test_format_upload_date() {
        let date = Utc.with_ymd_and_hms(2026, 3, 7, 14, 5, 0).unwrap();
        assert_eq!(format_upload_date(&date), "Mar 07, 2026 14:05");
    }

    #[test]
    fn test_format_message_time() {
        let date = Utc.with_ymd_and_hms(2026, 3, 7, 9, 30, 59).unwrap();
        assert_eq!(format_message_time(&date), "09:30");
    }

    #[test]
    fn test_format_message_time_midnight() {
        let date = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(format_message_time(&date), "00:00");
    }
}
