//! 通用工具函数 (货币与日期解析)

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;

/// 当前 UTC 时间 (RFC 3339, 毫秒精度)
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

/// 当前 UTC 日期 (`YYYY-MM-DD`)
pub fn today_iso() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Parse a display currency string such as `"$1,245.50"` into a number.
///
/// Currency symbol, thousands separators and surrounding whitespace are
/// ignored. Returns `None` for anything that is not a number afterwards.
pub fn parse_currency(value: &str) -> Option<Decimal> {
    let cleaned: String = value
        .trim()
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | ' '))
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned).ok()
}

/// Format a number as a display currency string (`"$1,245.50"`).
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let plain = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}${grouped}.{frac_part}")
}

/// Parse an ISO-8601 date or datetime.
///
/// Accepts RFC 3339 timestamps (`2024-03-01T12:30:00Z`) and plain dates
/// (`2024-03-01`, read as midnight UTC).
pub fn parse_iso_datetime(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_currency() {
        assert_eq!(parse_currency("$1,245.50"), Decimal::from_str("1245.50").ok());
        assert_eq!(parse_currency(" $89.99 "), Decimal::from_str("89.99").ok());
        assert_eq!(parse_currency("0"), Some(Decimal::ZERO));
        assert_eq!(parse_currency("$"), None);
        assert_eq!(parse_currency("n/a"), None);
    }

    #[test]
    fn test_currency_parse_beats_lexicographic_order() {
        // "$9.00" > "$10.00" as strings, but not as amounts
        let nine = parse_currency("$9.00").unwrap();
        let ten = parse_currency("$10.00").unwrap();
        assert!("$9.00" > "$10.00");
        assert!(nine < ten);
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(Decimal::ZERO), "$0.00");
        assert_eq!(format_currency(Decimal::from_str("5.5").unwrap()), "$5.50");
        assert_eq!(
            format_currency(Decimal::from_str("1245.5").unwrap()),
            "$1,245.50"
        );
        assert_eq!(
            format_currency(Decimal::from_str("1234567.891").unwrap()),
            "$1,234,567.89"
        );
        assert_eq!(format_currency(Decimal::from_str("-12").unwrap()), "-$12.00");
    }

    #[test]
    fn test_parse_iso_datetime() {
        let date = parse_iso_datetime("2024-03-01").unwrap();
        let ts = parse_iso_datetime("2024-03-01T08:00:00Z").unwrap();
        assert!(date < ts);
        assert!(parse_iso_datetime("2024-03-01T08:00:00+02:00").is_some());
        assert!(parse_iso_datetime("yesterday").is_none());
    }
}
