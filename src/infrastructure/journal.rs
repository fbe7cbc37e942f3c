//! Append-only activity log file

use crate::domain::ActivityEntry;
use crate::error::Result;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Fixed relative path of the file that receives one line per cycle
pub const LOG_PATH: &str = "leech.log";

/// The growing text file the tool commits. Created on first append, never
/// truncated.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    path: PathBuf,
}

impl ActivityLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ActivityLog { path: path.into() }
    }

    pub fn at_default_path() -> Self {
        Self::new(LOG_PATH)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry as a single line
    pub fn append(&self, entry: &ActivityEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        writeln!(file, "{}", entry.log_line())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_append_creates_file() {
        let temp = TempDir::new().unwrap();
        let log = ActivityLog::new(temp.path().join("leech.log"));

        log.append(&ActivityEntry::now()).unwrap();

        assert!(log.path().exists());
    }

    #[test]
    fn test_append_adds_exactly_one_line() {
        let temp = TempDir::new().unwrap();
        let log = ActivityLog::new(temp.path().join("leech.log"));

        log.append(&ActivityEntry::now()).unwrap();
        log.append(&ActivityEntry::now()).unwrap();
        log.append(&ActivityEntry::now()).unwrap();

        let contents = fs::read_to_string(log.path()).unwrap();
        assert_eq!(contents.lines().count(), 3);
    }

    #[test]
    fn test_append_never_truncates() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("leech.log");
        fs::write(&path, "pre-existing line\n").unwrap();

        let log = ActivityLog::new(&path);
        log.append(&ActivityEntry::now()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("pre-existing line\n"));
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn test_append_to_unwritable_path_fails() {
        let temp = TempDir::new().unwrap();
        // A directory cannot be opened for appending
        let log = ActivityLog::new(temp.path());

        assert!(log.append(&ActivityEntry::now()).is_err());
    }
}
