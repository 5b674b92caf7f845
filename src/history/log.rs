//! Bounded, most-recent-first log of past calculations.
//!
//! The log is an immutable value: [`HistoryLog::record`] returns a new log
//! with the entry added, leaving the original untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of one successful calculation.
///
/// # Example
///
/// ```rust
/// use reckon::history::HistoryEntry;
/// use chrono::Utc;
///
/// let entry = HistoryEntry {
///     expression: "6×7".to_string(),
///     result: "42".to_string(),
///     timestamp: Utc::now(),
/// };
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The expression in display form, as typed
    pub expression: String,
    /// The formatted result
    pub result: String,
    /// When the calculation ran, serialized as RFC 3339
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Stamp a calculation with the current time.
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            result: result.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Ordered history of calculations, newest first, never longer than its
/// capacity.
///
/// # Example
///
/// ```rust
/// use reckon::history::{HistoryEntry, HistoryLog};
///
/// let log = HistoryLog::new(2)
///     .record(HistoryEntry::new("1+1", "2"))
///     .record(HistoryEntry::new("2+2", "4"))
///     .record(HistoryEntry::new("3+3", "6"));
///
/// let results: Vec<&str> = log.entries().iter().map(|e| e.result.as_str()).collect();
/// assert_eq!(results, ["6", "4"]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
    capacity: usize,
}

impl HistoryLog {
    /// Create an empty log holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Build a log from stored entries, dropping any beyond `capacity`.
    ///
    /// The entries must already be newest first.
    pub fn from_entries(mut entries: Vec<HistoryEntry>, capacity: usize) -> Self {
        entries.truncate(capacity);
        Self { entries, capacity }
    }

    /// Record an entry at the front, returning a new log.
    ///
    /// The oldest entry is evicted when the log is full.
    pub fn record(&self, entry: HistoryEntry) -> Self {
        let mut entries = Vec::with_capacity(self.capacity);
        entries.push(entry);
        entries.extend(self.entries.iter().cloned());
        entries.truncate(self.capacity);
        Self {
            entries,
            capacity: self.capacity,
        }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<HistoryEntry> {
        self.entries
    }

    /// The most recent entry, if any.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
