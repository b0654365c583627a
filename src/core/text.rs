//! Text helpers shared by both commit row layouts.
//!
//! Widths are measured in terminal cells (via `unicode-width`) rather than
//! bytes, so wide characters in author names do not break column alignment.

use chrono::{DateTime, Local};
use unicode_width::UnicodeWidthStr;

/// Marker appended to truncated text
pub const ELLIPSIS: char = '…';

/// Format used for commit dates in the full description layout
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Truncate `text` to at most `limit` cells, replacing the overflow with a
/// single [`ELLIPSIS`]. Text that already fits is returned unchanged.
pub fn truncate_with_ellipsis(text: &str, limit: usize) -> String {
    if text.width() <= limit {
        return text.to_string();
    }
    if limit == 0 {
        return String::new();
    }

    // Measure whole prefixes, the same way as the fits check above
    let budget = limit - 1;
    let mut cut = 0;
    for (start, ch) in text.char_indices() {
        let end = start + ch.len_utf8();
        if text[..end].width() > budget {
            break;
        }
        cut = end;
    }

    let mut result = String::with_capacity(cut + ELLIPSIS.len_utf8());
    result.push_str(&text[..cut]);
    result.push(ELLIPSIS);
    result
}

/// Right-pad `text` with spaces to `width` cells. Longer text is left as is.
pub fn with_padding(text: &str, width: usize) -> String {
    let current = text.width();
    if current >= width {
        return text.to_string();
    }
    let mut padded = String::with_capacity(text.len() + width - current);
    padded.push_str(text);
    padded.push_str(&" ".repeat(width - current));
    padded
}

/// Human readable local date for a unix timestamp, empty when out of range
pub fn unix_to_date(unix_timestamp: i64) -> String {
    DateTime::from_timestamp(unix_timestamp, 0)
        .map(|utc| utc.with_timezone(&Local).format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Strip ANSI color codes for testing
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::new();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next(); // consume '['
            for ch in chars.by_ref() {
                if ch.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            result.push(ch);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_long_name() {
        let result = truncate_with_ellipsis("abcdefghijklmnopqrst", 17);
        assert_eq!(result, "abcdefghijklmnop…");
        assert_eq!(result.chars().count(), 17);
    }

    #[test]
    fn test_truncate_short_name_unchanged() {
        assert_eq!(truncate_with_ellipsis("Jane Doe", 17), "Jane Doe");
        assert_eq!(
            truncate_with_ellipsis("exactly17chars!!!", 17),
            "exactly17chars!!!"
        );
    }

    #[test]
    fn test_truncate_wide_characters() {
        // Each CJK character takes two cells
        let result = truncate_with_ellipsis("山田太郎山田太郎山田太郎", 7);
        assert_eq!(result, "山田太…");
        assert!(result.width() <= 7);
    }

    #[test]
    fn test_truncate_control_characters_stay_within_limit() {
        let tabs = format!("{}{}", "\t".repeat(10), "A".repeat(15));
        let result = truncate_with_ellipsis(&tabs, 17);
        assert!(result.width() <= 17);
        assert!(result.ends_with(ELLIPSIS));

        let escapes = "\x1b".repeat(20);
        let result = truncate_with_ellipsis(&escapes, 17);
        assert!(result.width() <= 17);
        assert!(result.chars().count() <= escapes.chars().count());
    }

    #[test]
    fn test_truncate_zero_limit() {
        assert_eq!(truncate_with_ellipsis("abc", 0), "");
        assert_eq!(truncate_with_ellipsis("", 0), "");
    }

    #[test]
    fn test_with_padding() {
        assert_eq!(with_padding("pick", 7), "pick   ");
        assert_eq!(with_padding("reword", 7), "reword ");
        assert_eq!(with_padding("exactly", 7), "exactly");
        assert_eq!(with_padding("too-long", 7), "too-long");
    }

    #[test]
    fn test_unix_to_date_shape() {
        let date = unix_to_date(1_600_000_000);
        assert_eq!(date.len(), "2020-09-13 12:26".len());
        assert!(date.starts_with("2020-09-1"));
    }

    #[test]
    fn test_unix_to_date_out_of_range() {
        assert_eq!(unix_to_date(i64::MAX), "");
    }

    #[test]
    fn test_strip_ansi_codes() {
        assert_eq!(strip_ansi_codes("\x1b[31mred\x1b[0m text"), "red text");
        assert_eq!(strip_ansi_codes("no codes"), "no codes");
    }
}
