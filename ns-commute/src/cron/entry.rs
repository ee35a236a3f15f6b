//! Crontab entry parsing and formatting.

use std::fmt;

use crate::domain::DayTime;

/// Marker comment identifying entries owned by this tool.
pub const MARKER: &str = "ns-commute";

/// One daily crontab trigger: a time of day and the command to run.
///
/// Rendered as `"M H * * * <command> # ns-commute"`. The schedule is
/// always daily; wrapping a trigger across midnight just changes the
/// clock fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CronEntry {
    /// Trigger minute (0-59).
    pub minute: u32,
    /// Trigger hour (0-23).
    pub hour: u32,
    /// Command executed at the trigger time.
    pub command: String,
}

impl CronEntry {
    /// Create an entry firing daily at the given time.
    pub fn at(time: DayTime, command: impl Into<String>) -> Self {
        Self {
            minute: time.minute(),
            hour: time.hour(),
            command: command.into(),
        }
    }

    /// The five cron schedule fields, e.g. `"45 7 * * *"`.
    pub fn schedule(&self) -> String {
        format!("{} {} * * *", self.minute, self.hour)
    }

    /// Whether a crontab line carries this tool's marker.
    pub fn is_marked(line: &str) -> bool {
        line.trim_end().ends_with(&format!("# {MARKER}"))
    }

    /// Parse a marker-tagged crontab line.
    ///
    /// Returns `None` for unmarked lines and for marked lines whose
    /// schedule fields cannot be read back (those still count as owned
    /// for removal purposes, just not as listable entries).
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let body = line.strip_suffix(&format!("# {MARKER}"))?.trim_end();

        let mut fields = body.split_whitespace();
        let minute = fields.next()?.parse::<u32>().ok()?;
        let hour = fields.next()?.parse::<u32>().ok()?;
        // Day-of-month, month, day-of-week; always "* * *" for our
        // entries but not worth rejecting
        let _ = fields.next()?;
        let _ = fields.next()?;
        let _ = fields.next()?;

        let command = fields.collect::<Vec<_>>().join(" ");
        if command.is_empty() {
            return None;
        }

        Some(Self {
            minute,
            hour,
            command,
        })
    }
}

impl fmt::Display for CronEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} # {MARKER}", self.schedule(), self.command)
    }
}
