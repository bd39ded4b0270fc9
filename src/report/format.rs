use chrono::{DateTime, Duration, Utc};

use crate::error::{Error, Result};

pub const CARD_TITLE_WIDTH: usize = 80;
pub const BUG_TITLE_WIDTH: usize = 100;

/// First `max_chars` characters of `text`.
pub fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// `now` shifted by `start_date` weeks; negative offsets look back.
pub fn cutoff(now: DateTime<Utc>, start_date: i64) -> Result<DateTime<Utc>> {
    Duration::try_weeks(start_date)
        .and_then(|offset| now.checked_add_signed(offset))
        .ok_or_else(|| {
            Error::Config(format!("lookback of {} weeks is out of range", -start_date))
        })
}

pub fn day(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d").to_string()
}

pub fn rule(width: usize) -> String {
    "=".repeat(width)
}

/// Summary table cell: a count, or `-` when the section did not run.
pub fn count_cell(count: Option<usize>) -> String {
    count.map(|c| c.to_string()).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate("short", 80), "short");
        assert_eq!(truncate(&"x".repeat(120), 80).len(), 80);
        assert_eq!(truncate("héllo wörld", 4), "héll");
        assert_eq!(truncate("", 10), "");
    }

    #[test]
    fn test_cutoff_looks_back_in_weeks() {
        let now = Utc.with_ymd_and_hms(2016, 4, 15, 0, 0, 0).unwrap();
        assert_eq!(
            cutoff(now, -2).unwrap(),
            Utc.with_ymd_and_hms(2016, 4, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(cutoff(now, 0).unwrap(), now);
        assert_eq!(day(&cutoff(now, -4).unwrap()), "2016-03-18");
    }

    #[test]
    fn test_cutoff_rejects_huge_lookback() {
        let now = Utc.with_ymd_and_hms(2016, 4, 15, 0, 0, 0).unwrap();
        let err = cutoff(now, -(20_000_000u32 as i64)).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("20000000 weeks"));
        assert!(cutoff(now, -(u32::MAX as i64)).is_err());
    }

    #[test]
    fn test_count_cell() {
        assert_eq!(count_cell(Some(3)), "3");
        assert_eq!(count_cell(None), "-");
    }
}
