//! Lead-time offset parsing.
//!
//! Offsets in the configuration say how far ahead of a departure a
//! notification check should run. They are written as `"1h30m"`,
//! `"2h"`, `"45m"`, or a bare minute count like `"15"`.

use std::fmt;

/// Error returned when parsing an invalid offset specifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid offset {input:?}: {reason}")]
pub struct OffsetError {
    input: String,
    reason: &'static str,
}

impl OffsetError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

/// A non-negative lead time, in minutes.
///
/// # Examples
///
/// ```
/// use ns_commute::domain::Offset;
///
/// assert_eq!(Offset::parse("1h30m").unwrap().minutes(), 90);
/// assert_eq!(Offset::parse("2h").unwrap().minutes(), 120);
/// assert_eq!(Offset::parse("45m").unwrap().minutes(), 45);
/// assert_eq!(Offset::parse("15").unwrap().minutes(), 15);
///
/// assert!(Offset::parse("-5").is_err());
/// assert!(Offset::parse("90s").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Offset(u32);

impl Offset {
    /// Create an offset from a raw minute count.
    pub fn from_minutes(minutes: u32) -> Self {
        Self(minutes)
    }

    /// Parse an offset specifier.
    ///
    /// Accepted shapes: `"XhYm"`, `"Xh"`, `"Ym"`, or a bare integer
    /// interpreted as minutes. Anything else is an error.
    pub fn parse(s: &str) -> Result<Self, OffsetError> {
        if let Some(rest) = s.strip_suffix('m') {
            if let Some((hours, minutes)) = rest.split_once('h') {
                let hours = parse_component(s, hours)?;
                let minutes = parse_component(s, minutes)?;
                let total = hours
                    .checked_mul(60)
                    .and_then(|h| h.checked_add(minutes))
                    .ok_or_else(|| OffsetError::new(s, "offset too large"))?;
                return Ok(Self(total));
            }
            return Ok(Self(parse_component(s, rest)?));
        }

        if let Some(hours) = s.strip_suffix('h') {
            let total = parse_component(s, hours)?
                .checked_mul(60)
                .ok_or_else(|| OffsetError::new(s, "offset too large"))?;
            return Ok(Self(total));
        }

        Ok(Self(parse_component(s, s)?))
    }

    /// Returns the offset in minutes.
    pub fn minutes(&self) -> u32 {
        self.0
    }
}

/// Parse one numeric component of an offset specifier.
fn parse_component(input: &str, component: &str) -> Result<u32, OffsetError> {
    if component.is_empty() {
        return Err(OffsetError::new(input, "missing number"));
    }
    component
        .parse::<u32>()
        .map_err(|_| OffsetError::new(input, "expected a non-negative integer"))
}

impl fmt::Debug for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Offset({}m)", self.0)
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}m", self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Bare integers always parse to themselves
        #[test]
        fn bare_minutes_roundtrip(m in 0u32..100_000) {
            prop_assert_eq!(Offset::parse(&m.to_string()).unwrap().minutes(), m);
        }

        /// "XhYm" parses to X*60 + Y
        #[test]
        fn hours_minutes_combine(h in 0u32..100, m in 0u32..600) {
            let input = format!("{h}h{m}m");
            prop_assert_eq!(Offset::parse(&input).unwrap().minutes(), h * 60 + m);
        }
    }
}
