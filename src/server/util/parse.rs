use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::server::error::AppError;

/// Which side of a date range a value bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeBound {
    Start,
    End,
}

/// Parses a report range bound from an RFC 3339 timestamp or a `YYYY-MM-DD` date.
///
/// Plain dates resolve to the first instant of the day for `Start` and to the last
/// millisecond of the day for `End`, so a range ending on a date includes that day.
///
/// # Arguments
/// - `value` - Raw query parameter
/// - `bound` - Side of the range being parsed
///
/// # Returns
/// - `Ok(DateTime<Utc>)` - Parsed instant in UTC
/// - `Err(AppError::BadRequest)` - Value is neither format
pub fn parse_range_bound(value: &str, bound: RangeBound) -> Result<DateTime<Utc>, AppError> {
    let value = value.trim();

    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Ok(datetime.with_timezone(&Utc));
    }

    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("Invalid date '{}'", value)))?;

    let time = match bound {
        RangeBound::Start => NaiveTime::MIN,
        RangeBound::End => NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN),
    };

    Ok(date.and_time(time).and_utc())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    /// Expected: plain start date resolves to midnight UTC
    #[test]
    fn parses_plain_start_date() {
        let parsed = parse_range_bound("2025-03-01", RangeBound::Start).unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap());
    }

    /// Expected: plain end date covers the whole day
    #[test]
    fn parses_plain_end_date_inclusive() {
        let parsed = parse_range_bound("2025-03-01", RangeBound::End).unwrap();
        assert!(parsed > Utc.with_ymd_and_hms(2025, 3, 1, 23, 59, 59).unwrap());
        assert!(parsed < Utc.with_ymd_and_hms(2025, 3, 2, 0, 0, 0).unwrap());
    }

    /// Expected: RFC 3339 offsets are normalised to UTC
    #[test]
    fn parses_rfc3339_with_offset() {
        let parsed = parse_range_bound("2025-03-01T10:00:00-03:00", RangeBound::End).unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 3, 1, 13, 0, 0).unwrap());
    }

    /// Expected: Err(BadRequest) for garbage
    #[test]
    fn rejects_invalid_value() {
        let result = parse_range_bound("yesterday", RangeBound::Start);
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
