use crate::utils::error::{HolidazeError, Result};
use chrono::{DateTime, NaiveDate, Utc};

/// 解析 CLI 輸入的日期：接受 `YYYY-MM-DD`（當天 00:00 UTC）或完整的 RFC 3339 時間
pub fn parse_date_input(value: &str) -> Result<DateTime<Utc>> {
    let trimmed = value.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(|date| date.and_time(chrono::NaiveTime::MIN).and_utc())
        .map_err(|e| HolidazeError::DateParseError {
            value: value.to_string(),
            reason: e.to_string(),
        })
}

/// Start of the UTC calendar day containing `instant`.
pub fn start_of_day(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant.date_naive().and_time(chrono::NaiveTime::MIN).and_utc()
}

pub fn format_day(instant: &DateTime<Utc>) -> String {
    instant.format("%Y/%m/%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_plain_date() {
        let parsed = parse_date_input("2024-01-03").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let parsed = parse_date_input("2024-01-01T12:00:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_date_input("next tuesday"),
            Err(HolidazeError::DateParseError { .. })
        ));
    }

    #[test]
    fn test_start_of_day_and_format() {
        let instant = Utc.with_ymd_and_hms(2024, 5, 17, 18, 30, 0).unwrap();
        assert_eq!(
            start_of_day(instant),
            Utc.with_ymd_and_hms(2024, 5, 17, 0, 0, 0).unwrap()
        );
        assert_eq!(format_day(&instant), "2024/05/17");
    }
}
