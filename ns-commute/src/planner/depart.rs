//! Departure-date resolution.

use chrono::{Duration, NaiveDateTime};

use crate::domain::DayTime;

/// Resolve a date-less HH:MM request to a concrete local datetime.
///
/// If the requested time of day has already passed (or is exactly now),
/// the request targets tomorrow; otherwise today.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, Datelike};
/// use ns_commute::domain::DayTime;
/// use ns_commute::planner::departure_datetime;
///
/// let now = NaiveDate::from_ymd_opt(2024, 3, 15)
///     .unwrap()
///     .and_hms_opt(9, 0, 0)
///     .unwrap();
///
/// // 08:00 already passed: tomorrow
/// let target = departure_datetime(now, DayTime::parse_hhmm("08:00").unwrap());
/// assert_eq!(target.day(), 16);
///
/// // 10:00 still ahead: today
/// let target = departure_datetime(now, DayTime::parse_hhmm("10:00").unwrap());
/// assert_eq!(target.day(), 15);
/// ```
pub fn departure_datetime(now: NaiveDateTime, requested: DayTime) -> NaiveDateTime {
    let today = now
        .date()
        .and_hms_opt(requested.hour(), requested.minute(), 0)
        .expect("DayTime is always a valid wall-clock time");

    if today <= now { today + Duration::days(1) } else { today }
}
