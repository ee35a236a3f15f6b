//! User crontab reading, editing, and writing.
//!
//! The crontab is held as raw lines so unrelated entries and comments
//! pass through untouched; only marker-tagged lines are ever added or
//! removed.

use std::io::Write;
use std::process::{Command, Stdio};

use tracing::debug;

use super::entry::CronEntry;
use super::error::CronError;

/// An in-memory copy of a crontab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Crontab {
    lines: Vec<String>,
}

impl Crontab {
    /// Parse crontab text into lines, preserving everything verbatim.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    /// Render back to crontab text. Non-empty crontabs end with a
    /// newline, which `crontab -` requires.
    pub fn to_text(&self) -> String {
        if self.lines.is_empty() {
            String::new()
        } else {
            format!("{}\n", self.lines.join("\n"))
        }
    }

    /// All marker-tagged entries, in file order.
    pub fn marked_entries(&self) -> Vec<CronEntry> {
        self.lines.iter().filter_map(|l| CronEntry::parse(l)).collect()
    }

    /// Remove every marker-tagged line. Returns how many were removed.
    pub fn remove_marked(&mut self) -> usize {
        let before = self.lines.len();
        self.lines.retain(|l| !CronEntry::is_marked(l));
        before - self.lines.len()
    }

    /// Append a marker-tagged entry.
    pub fn add(&mut self, entry: &CronEntry) {
        self.lines.push(entry.to_string());
    }

    /// Read the invoking user's crontab via `crontab -l`.
    ///
    /// A user with no crontab yet reads as empty rather than as an
    /// error, matching what an interactive `crontab -l` reports.
    pub fn read_user() -> Result<Self, CronError> {
        let output = Command::new("crontab").arg("-l").output()?;

        if output.status.success() {
            return Ok(Self::from_text(&String::from_utf8_lossy(&output.stdout)));
        }

        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        if stderr.to_lowercase().contains("no crontab") {
            return Ok(Self::default());
        }

        Err(CronError::CrontabFailed {
            action: "read",
            stderr,
        })
    }

    /// Replace the invoking user's crontab via `crontab -` (stdin).
    pub fn write_user(&self) -> Result<(), CronError> {
        let output = pipe_text(Command::new("crontab").arg("-"), &self.to_text())?;

        if !output.status.success() {
            return Err(CronError::CrontabFailed {
                action: "write",
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            });
        }

        debug!(lines = self.lines.len(), "crontab written");
        Ok(())
    }
}

/// Feed text to a child's stdin and wait for it to exit.
///
/// The child is always reaped, even when the write fails because it
/// exited early and closed its end of the pipe. In that case the exit
/// status is the more useful report, so the write error only surfaces
/// when the child claims success.
fn pipe_text(command: &mut Command, text: &str) -> std::io::Result<std::process::Output> {
    let mut child = command
        .stdin(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    let write_result = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };

    let output = child.wait_with_output()?;
    if output.status.success() {
        write_result?;
    }

    Ok(output)
}
