//! Append-only event journal for Strato resource transitions.
//!
//! One human-readable log file per resource type (`appservice.log`,
//! `storageaccount.log`, ...), each line timestamped and appended as events
//! arrive. Entries are echoed to stdout as they are written so an interactive
//! session sees transitions immediately. The journal never rewrites or
//! truncates existing content.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum JournalError {
    #[error("journal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Timestamp format used for journal lines, e.g. `03:41 PM`.
const TIMESTAMP_FORMAT: &str = "%I:%M %p";

/// File-backed journal of lifecycle events, keyed by resource type.
#[derive(Debug)]
pub struct EventJournal {
    dir: PathBuf,
}

impl EventJournal {
    /// Open a journal rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, JournalError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Directory holding the per-type log files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Append one timestamped entry to the log file for `type_tag` and echo
    /// it to stdout.
    pub fn append(&self, type_tag: &str, message: &str) -> Result<(), JournalError> {
        let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT);
        let entry = format!("[{timestamp}] {message}");

        println!("{entry}");

        let path = self.log_file(type_tag);
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        writeln!(file, "{entry}")?;
        debug!("journaled event for {type_tag}: {message}");
        Ok(())
    }

    /// Return the most recent `limit` entries across all log files.
    ///
    /// Files are visited in name order, so entries interleave by type rather
    /// than strict global time; within one file order is append order.
    pub fn tail(&self, limit: usize) -> Result<Vec<String>, JournalError> {
        let mut entries = Vec::new();

        let mut paths: Vec<PathBuf> = fs::read_dir(&self.dir)?
            .filter_map(Result::ok)
            .map(|e| e.path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "log"))
            .collect();
        paths.sort();

        for path in paths {
            let content = fs::read_to_string(&path)?;
            entries.extend(content.lines().map(str::to_owned));
        }

        let skip = entries.len().saturating_sub(limit);
        Ok(entries.split_off(skip))
    }

    fn log_file(&self, type_tag: &str) -> PathBuf {
        self.dir.join(format!("{}.log", type_tag.to_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_creates_lowercase_per_type_file() {
        let dir = tempfile::tempdir().unwrap();
        let journal = EventJournal::new(dir.path()).unwrap();

        journal.append("AppService", "AppService stopped successfully").unwrap();

        let path = dir.path().join("appservice.log");
        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("AppService stopped successfully"));
        assert!(content.starts_with('['));
    }

    #[test]
    fn append_accumulates_lines() {
        let dir = tempfile::tempdir().unwrap();
        let journal = EventJournal::new(dir.path()).unwrap();

        journal.append("CacheDB", "first").unwrap();
        journal.append("CacheDB", "second").unwrap();

        let content = fs::read_to_string(dir.path().join("cachedb.log")).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("first"));
        assert!(lines[1].ends_with("second"));
    }

    #[test]
    fn tail_returns_most_recent_entries() {
        let dir = tempfile::tempdir().unwrap();
        let journal = EventJournal::new(dir.path()).unwrap();

        for i in 0..5 {
            journal.append("StorageAccount", &format!("event {i}")).unwrap();
        }

        let tail = journal.tail(2).unwrap();
        assert_eq!(tail.len(), 2);
        assert!(tail[0].ends_with("event 3"));
        assert!(tail[1].ends_with("event 4"));
    }

    #[test]
    fn tail_spans_multiple_type_files() {
        let dir = tempfile::tempdir().unwrap();
        let journal = EventJournal::new(dir.path()).unwrap();

        journal.append("AppService", "app event").unwrap();
        journal.append("CacheDB", "cache event").unwrap();

        let tail = journal.tail(20).unwrap();
        assert_eq!(tail.len(), 2);
    }

    #[test]
    fn tail_on_empty_journal_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let journal = EventJournal::new(dir.path()).unwrap();
        assert!(journal.tail(20).unwrap().is_empty());
    }

    #[test]
    fn ignores_non_log_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "not a log\n").unwrap();
        let journal = EventJournal::new(dir.path()).unwrap();
        assert!(journal.tail(20).unwrap().is_empty());
    }
}
