//! Wall-clock time-of-day handling.
//!
//! Departure times in the configuration and on the command line are
//! "HH:MM" strings. This module provides a minutes-since-midnight type
//! for working with these times, with the wrapping subtraction needed
//! to place cron triggers that fall before midnight.

use std::fmt;

use super::offset::Offset;

/// Minutes in a day.
const MINUTES_PER_DAY: u16 = 24 * 60;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A time of day, stored as minutes since midnight.
///
/// Always in the range `[0, 1440)`. Unlike a full datetime, a `DayTime`
/// carries no date: the cron scheduler only supports daily recurrence,
/// so "yesterday at 23:40" and "every day at 23:40" are the same slot.
///
/// # Examples
///
/// ```
/// use ns_commute::domain::DayTime;
///
/// let time = DayTime::parse_hhmm("08:15").unwrap();
/// assert_eq!(time.hour(), 8);
/// assert_eq!(time.minute(), 15);
/// assert_eq!(time.to_string(), "08:15");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayTime(u16);

impl DayTime {
    /// Parse a time from strict "HH:MM" format.
    ///
    /// # Examples
    ///
    /// ```
    /// use ns_commute::domain::DayTime;
    ///
    /// // Valid times
    /// assert!(DayTime::parse_hhmm("00:00").is_ok());
    /// assert!(DayTime::parse_hhmm("23:59").is_ok());
    ///
    /// // Invalid formats
    /// assert!(DayTime::parse_hhmm("815").is_err());
    /// assert!(DayTime::parse_hhmm("8:15").is_err());
    /// assert!(DayTime::parse_hhmm("25:00").is_err());
    /// assert!(DayTime::parse_hhmm("08:60").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        // Must be exactly 5 characters: HH:MM
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        Ok(Self((hour * 60 + minute) as u16))
    }

    /// Build a `DayTime` from hour and minute components.
    ///
    /// Returns `None` if the components are out of range.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self((hour * 60 + minute) as u16))
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        (self.0 / 60) as u32
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        (self.0 % 60) as u32
    }

    /// Returns minutes since midnight.
    pub fn minutes_since_midnight(&self) -> u32 {
        self.0 as u32
    }

    /// Subtract an offset, wrapping across midnight.
    ///
    /// A trigger that would land before 00:00 wraps to the previous
    /// day's clock position; with daily recurrence that is the same
    /// schedule slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use ns_commute::domain::{DayTime, Offset};
    ///
    /// let departure = DayTime::parse_hhmm("00:10").unwrap();
    /// let trigger = departure.minus(Offset::from_minutes(30));
    /// assert_eq!((trigger.hour(), trigger.minute()), (23, 40));
    /// ```
    pub fn minus(&self, offset: Offset) -> DayTime {
        let wrapped = (self.0 as i64 - offset.minutes() as i64)
            .rem_euclid(i64::from(MINUTES_PER_DAY));
        Self(wrapped as u16)
    }
}

impl fmt::Debug for DayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DayTime({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for DayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}
