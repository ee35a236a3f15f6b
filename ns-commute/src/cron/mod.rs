//! User-crontab trigger management.
//!
//! The schedule manager owns a set of crontab entries, one per
//! (route, offset) pair, each invoking the trip notifier ahead of a
//! configured departure. Entries are tagged with a trailing marker
//! comment so install/list/remove only ever touch lines this tool
//! wrote; everything else in the user's crontab is preserved
//! byte-for-byte.

mod entry;
mod error;
mod plan;
mod tab;

pub use entry::{CronEntry, MARKER};
pub use error::CronError;
pub use plan::plan_entries;
pub use tab::Crontab;
