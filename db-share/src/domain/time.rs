//! Booking-site timestamps.
//!
//! Refresh tokens carry the departure as a bare `YYYYMMDDHHMM` wall-clock
//! reading in German local time. The share endpoint wants a UTC instant, so
//! this module resolves the reading against the `Europe/Berlin` zone,
//! including the two DST edge cases a bare reading cannot express on its own.

use chrono::{
    DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone, Utc,
};
use chrono_tz::Europe::Berlin;

/// Error returned when a timestamp cannot be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Convert a `YYYYMMDDHHMM` reading in Berlin local time to UTC.
///
/// Local times that occur twice (the October fall-back hour) resolve to the
/// earlier instant. Local times skipped by the March spring-forward are
/// moved forward by one hour, so `02:30` becomes `03:30` summer time.
/// `24:00` is midnight at the end of the given day.
///
/// # Examples
///
/// ```
/// use db_share::domain::{berlin_to_utc, to_iso_millis};
///
/// // Winter: CET is UTC+1
/// let dt = berlin_to_utc("202401151230").unwrap();
/// assert_eq!(to_iso_millis(&dt), "2024-01-15T11:30:00.000Z");
///
/// // Summer: CEST is UTC+2
/// let dt = berlin_to_utc("202407151230").unwrap();
/// assert_eq!(to_iso_millis(&dt), "2024-07-15T10:30:00.000Z");
///
/// // End of day
/// let dt = berlin_to_utc("202401152400").unwrap();
/// assert_eq!(to_iso_millis(&dt), "2024-01-15T23:00:00.000Z");
///
/// assert!(berlin_to_utc("202413011230").is_err());
/// assert!(berlin_to_utc("2024011512").is_err());
/// ```
pub fn berlin_to_utc(digits: &str) -> Result<DateTime<Utc>, TimeError> {
    let local = parse_wall_clock(digits)?;

    let resolved = Berlin
        .from_local_datetime(&local)
        .earliest()
        .or_else(|| {
            // Inside the spring-forward gap
            Berlin
                .from_local_datetime(&(local + Duration::hours(1)))
                .earliest()
        })
        .ok_or_else(|| TimeError::new("local time does not exist in Europe/Berlin"))?;

    Ok(resolved.with_timezone(&Utc))
}

/// Render an instant the way the booking site does: UTC, milliseconds, `Z`.
pub fn to_iso_millis(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn parse_wall_clock(digits: &str) -> Result<NaiveDateTime, TimeError> {
    let bytes = digits.as_bytes();
    if bytes.len() != 12 {
        return Err(TimeError::new("expected YYYYMMDDHHMM"));
    }

    let year = parse_digits(&bytes[0..4]).ok_or_else(|| TimeError::new("invalid year digits"))?;
    let month =
        parse_digits(&bytes[4..6]).ok_or_else(|| TimeError::new("invalid month digits"))?;
    let day = parse_digits(&bytes[6..8]).ok_or_else(|| TimeError::new("invalid day digits"))?;
    let hour = parse_digits(&bytes[8..10]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
    let minute =
        parse_digits(&bytes[10..12]).ok_or_else(|| TimeError::new("invalid minute digits"))?;

    let date = NaiveDate::from_ymd_opt(year as i32, month, day)
        .ok_or_else(|| TimeError::new("no such calendar date"))?;

    if hour == 24 && minute == 0 {
        return date
            .succ_opt()
            .and_then(|next| next.and_hms_opt(0, 0, 0))
            .ok_or_else(|| TimeError::new("no such calendar date"));
    }

    let time = NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| TimeError::new("hour must be 0-23 and minute 0-59"))?;

    Ok(date.and_time(time))
}

fn parse_digits(bytes: &[u8]) -> Option<u32> {
    bytes.iter().try_fold(0u32, |acc, &b| {
        let d = (b as char).to_digit(10)?;
        Some(acc * 10 + d)
    })
}
