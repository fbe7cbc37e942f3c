//! Activity entry formatting

use chrono::{DateTime, Local};

/// One activity record, stamped at the moment it was created.
///
/// The log line and the commit message are formatted from separately sampled
/// entries: the log line is stamped when the file is appended, the commit
/// message when the commit is issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    stamped_at: DateTime<Local>,
}

impl ActivityEntry {
    /// Create an entry stamped with the current time
    pub fn now() -> Self {
        ActivityEntry {
            stamped_at: Local::now(),
        }
    }

    #[cfg(test)]
    pub fn at(stamped_at: DateTime<Local>) -> Self {
        ActivityEntry { stamped_at }
    }

    /// The line appended to the activity log, without trailing newline
    pub fn log_line(&self) -> String {
        format!(
            "Leech log: automated activity entry --- {} -- {}",
            self.stamped_at.format("%a %b %d %H:%M:%S %Y"),
            self.stamped_at.timestamp_millis()
        )
    }

    /// The commit message for this entry
    pub fn commit_message(&self) -> String {
        format!("activity at {}", self.stamped_at.timestamp_millis())
    }
}
