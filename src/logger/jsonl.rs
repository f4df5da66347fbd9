//! JSONL activity log: append-only line-delimited JSON for each operation.
//!
//! Each line is a self-contained JSON object, assembled in memory and written
//! via a single `write_all` so concurrent tailing never sees partial lines.
//!
//! Three-level fallback chain:
//! 1. Primary file path
//! 2. stderr with `[CC-JSONL]` prefix
//! 3. Silent discard (a CLI operation must never fail for logging reasons)

#![allow(missing_docs)]

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Severity level for log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
}

/// Log event types matching the ccraft activity model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    ResumeAnalyzed,
    KeywordLookup,
    QuestionDrawn,
    FavoriteAdded,
    FavoriteRemoved,
    ProfileGenerated,
}

/// A single JSONL log entry — all fields optional except `ts`, `event`,
/// `severity`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// ISO 8601 UTC timestamp.
    pub ts: String,
    /// Event type identifier.
    pub event: EventType,
    /// Severity level.
    pub severity: Severity,
    /// Resume score (analyze events).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
    /// Word count of analyzed text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,
    /// Question category (trainer events).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Question text (trainer events).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    /// Favorites count after a toggle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorites_count: Option<usize>,
    /// Role key (keyword/profile events).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Freeform details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl LogEntry {
    /// Create a new entry stamped with the current UTC time.
    #[must_use]
    pub fn new(event: EventType, severity: Severity) -> Self {
        Self {
            ts: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            event,
            severity,
            score: None,
            word_count: None,
            category: None,
            question: None,
            favorites_count: None,
            role: None,
            details: None,
        }
    }
}

/// Degradation state of the JSONL writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WriterState {
    /// Writing to the primary path.
    Normal,
    /// File unavailable, writing to stderr.
    Stderr,
    /// Everything failed, silently discarding.
    Discard,
}

/// Append-only JSONL log writer with multi-level fallback.
#[derive(Debug)]
pub struct JsonlWriter {
    path: PathBuf,
    file: Option<File>,
    state: WriterState,
}

impl JsonlWriter {
    /// Open the JSONL log file for appending. Falls through the degradation
    /// chain on failure.
    #[must_use]
    pub fn open(path: PathBuf) -> Self {
        let file = open_append(&path);
        let state = if file.is_some() {
            WriterState::Normal
        } else {
            WriterState::Stderr
        };
        Self { path, file, state }
    }

    /// Primary log path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current degradation state.
    #[must_use]
    pub fn state(&self) -> &'static str {
        match self.state {
            WriterState::Normal => "normal",
            WriterState::Stderr => "stderr",
            WriterState::Discard => "discard",
        }
    }

    /// Write a single log entry as one atomic JSONL line.
    pub fn write_entry(&mut self, entry: &LogEntry) {
        let line = match serde_json::to_string(entry) {
            Ok(json) => format!("{json}\n"),
            Err(e) => {
                // Serialization failure is a programming error; note it and bail.
                let _ = writeln!(io::stderr(), "[CC-JSONL] serialize error: {e}");
                return;
            }
        };
        self.write_line(&line);
    }

    fn write_line(&mut self, line: &str) {
        match self.state {
            WriterState::Normal => {
                let failed = self
                    .file
                    .as_mut()
                    .is_none_or(|f| f.write_all(line.as_bytes()).is_err());
                if failed {
                    self.state = WriterState::Stderr;
                    self.file = None;
                    self.write_line(line);
                }
            }
            WriterState::Stderr => {
                if write!(io::stderr(), "[CC-JSONL] {line}").is_err() {
                    self.state = WriterState::Discard;
                }
            }
            WriterState::Discard => {}
        }
    }
}

fn open_append(path: &Path) -> Option<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}
