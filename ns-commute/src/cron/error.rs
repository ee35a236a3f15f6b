//! Cron management error types.

use crate::domain::{OffsetError, TimeError};

/// Errors from planning or persisting crontab triggers.
#[derive(Debug, thiserror::Error)]
pub enum CronError {
    /// Could not run the `crontab` binary
    #[error("cannot run crontab: {0}")]
    Io(#[from] std::io::Error),

    /// `crontab` ran but reported failure
    #[error("crontab {action} failed: {stderr}")]
    CrontabFailed { action: &'static str, stderr: String },

    /// A route's departure time does not parse
    #[error(transparent)]
    Time(#[from] TimeError),

    /// A route's offset specifier does not parse
    #[error(transparent)]
    Offset(#[from] OffsetError),
}
