//! Daily audit log of prompts, cache hits, responses, and errors.
//!
//! One file per calendar day (`llm_calls_YYYYMMDD.log`) in the configured
//! log directory, each line formatted as `<timestamp> - <LEVEL> - <message>`.
//! The log is a write-only audit trail, never read back, and appends are
//! best-effort: a failed write emits a tracing warning and is otherwise
//! swallowed so an audit fault cannot fail a completion call.

use std::fmt;
use std::io::Write;
use std::path::PathBuf;

use chrono::Local;

/// Audit log line severity.
#[derive(Debug, Clone, Copy)]
pub enum AuditLevel {
    Info,
    Warning,
    Error,
}

impl fmt::Display for AuditLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditLevel::Info => f.write_str("INFO"),
            AuditLevel::Warning => f.write_str("WARNING"),
            AuditLevel::Error => f.write_str("ERROR"),
        }
    }
}

/// Append-only daily audit log.
pub struct AuditLog {
    dir: PathBuf,
}

impl AuditLog {
    /// Create the audit log, creating the log directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Path of today's log file.
    pub fn file_path(&self) -> PathBuf {
        let day = Local::now().format("%Y%m%d");
        self.dir.join(format!("llm_calls_{day}.log"))
    }

    pub fn info(&self, message: &str) {
        self.append(AuditLevel::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.append(AuditLevel::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.append(AuditLevel::Error, message);
    }

    fn append(&self, level: AuditLevel, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let line = format!("{timestamp} - {level} - {message}");

        let result = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.file_path())
            .and_then(|mut file| writeln!(file, "{line}"));
        if let Err(e) = result {
            tracing::warn!(dir = %self.dir.display(), "Failed to append to audit log: {e}");
        }
    }
}

/// Truncated preview of a completion for log lines: the first 100 characters,
/// with `...` appended when the text was longer. Cuts on a char boundary.
pub(crate) fn preview(text: &str) -> String {
    const PREVIEW_CHARS: usize = 100;
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_new_creates_log_directory() {
        let dir = tempdir().unwrap();
        let log_dir = dir.path().join("logs");
        let _audit = AuditLog::new(&log_dir).unwrap();
        assert!(log_dir.is_dir());
    }

    #[test]
    fn test_file_name_carries_the_date() {
        let dir = tempdir().unwrap();
        let audit = AuditLog::new(dir.path()).unwrap();
        let name = audit.file_path().file_name().unwrap().to_string_lossy().into_owned();
        let expected = format!("llm_calls_{}.log", Local::now().format("%Y%m%d"));
        assert_eq!(name, expected);
    }

    #[test]
    fn test_lines_are_timestamp_level_message() {
        let dir = tempdir().unwrap();
        let audit = AuditLog::new(dir.path()).unwrap();
        audit.info("PROMPT: hello");
        audit.error("something failed");

        let contents = std::fs::read_to_string(audit.file_path()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(" - INFO - PROMPT: hello"));
        assert!(lines[1].contains(" - ERROR - something failed"));
    }

    #[test]
    fn test_appends_accumulate() {
        let dir = tempdir().unwrap();
        let audit = AuditLog::new(dir.path()).unwrap();
        for i in 0..3 {
            audit.info(&format!("line {i}"));
        }
        let contents = std::fs::read_to_string(audit.file_path()).unwrap();
        assert_eq!(contents.lines().count(), 3);
    }

    #[test]
    fn test_preview_short_text_unchanged() {
        assert_eq!(preview("hello"), "hello");
    }

    #[test]
    fn test_preview_exactly_100_chars_unchanged() {
        let text = "x".repeat(100);
        assert_eq!(preview(&text), text);
    }

    #[test]
    fn test_preview_long_text_truncated() {
        let text = "x".repeat(150);
        let p = preview(&text);
        assert_eq!(p.len(), 103);
        assert!(p.ends_with("..."));
    }

    #[test]
    fn test_preview_respects_char_boundaries() {
        let text = "é".repeat(150);
        let p = preview(&text);
        assert!(p.ends_with("..."));
        assert_eq!(p.chars().count(), 103);
    }
}
