//! Persistent history of calculations.
//!
//! [`HistoryStore`] keeps a [`HistoryLog`] serialized as a JSON array
//! under one key of a [`KeyValueStore`]. Reads never fail: a missing or
//! corrupt blob is treated as an empty history.

mod error;
mod log;
pub mod store;

pub use error::HistoryError;
pub use log::{HistoryEntry, HistoryLog};
pub use store::{FileStore, KeyValueStore, MemoryStore, StorageError};

use tracing::{debug, warn};

/// Key the history blob is stored under unless configured otherwise.
pub const DEFAULT_HISTORY_KEY: &str = "calculator_history";

/// Number of calculations kept unless configured otherwise.
pub const DEFAULT_HISTORY_CAPACITY: usize = 3;

/// Bounded history backed by a key-value store.
///
/// # Example
///
/// ```rust
/// use reckon::history::{HistoryStore, MemoryStore};
///
/// let mut history = HistoryStore::new(MemoryStore::new());
/// history.record("2+2", "4").unwrap();
/// history.record("3×3", "9").unwrap();
///
/// let entries = history.get_all();
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[0].result, "9");
/// ```
#[derive(Debug)]
pub struct HistoryStore<S: KeyValueStore> {
    store: S,
    key: String,
    capacity: usize,
}

impl<S: KeyValueStore> HistoryStore<S> {
    /// Create a store with the default key and capacity.
    pub fn new(store: S) -> Self {
        Self::with_settings(store, DEFAULT_HISTORY_KEY, DEFAULT_HISTORY_CAPACITY)
    }

    pub fn with_settings(store: S, key: impl Into<String>, capacity: usize) -> Self {
        Self {
            store,
            key: key.into(),
            capacity,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read the persisted log, surfacing corruption and storage errors.
    pub fn load(&self) -> Result<HistoryLog, HistoryError> {
        let Some(blob) = self.store.get(&self.key)? else {
            return Ok(HistoryLog::new(self.capacity));
        };

        let entries: Vec<HistoryEntry> = serde_json::from_str(&blob)
            .map_err(|e| HistoryError::StorageCorrupt(e.to_string()))?;
        Ok(HistoryLog::from_entries(entries, self.capacity))
    }

    /// All entries, newest first. Missing or unreadable history is empty.
    pub fn get_all(&self) -> Vec<HistoryEntry> {
        self.load_or_empty().into_entries()
    }

    /// Record a calculation stamped with the current time.
    pub fn record(
        &mut self,
        expression: impl Into<String>,
        result: impl Into<String>,
    ) -> Result<HistoryEntry, HistoryError> {
        let entry = HistoryEntry::new(expression, result);
        self.record_entry(entry.clone())?;
        Ok(entry)
    }

    /// Prepend `entry`, evict beyond capacity, and persist.
    ///
    /// A corrupt stored log is replaced rather than merged. A failed read
    /// aborts the write so the stored entries survive.
    pub fn record_entry(&mut self, entry: HistoryEntry) -> Result<(), HistoryError> {
        let log = match self.load() {
            Ok(log) => log,
            Err(HistoryError::StorageCorrupt(reason)) => {
                warn!("Replacing corrupt history: {}", reason);
                HistoryLog::new(self.capacity)
            }
            Err(e) => return Err(e),
        };
        let log = log.record(entry);
        let blob = serde_json::to_string(log.entries())
            .map_err(|e| HistoryError::SerializationFailed(e.to_string()))?;
        self.store.set(&self.key, &blob)?;
        debug!("Recorded history entry ({} of {})", log.len(), self.capacity);
        Ok(())
    }

    /// Delete the persisted history entirely.
    pub fn clear(&mut self) -> Result<(), HistoryError> {
        self.store.remove(&self.key)?;
        debug!("Cleared history under key '{}'", self.key);
        Ok(())
    }

    fn load_or_empty(&self) -> HistoryLog {
        self.load().unwrap_or_else(|e| {
            warn!("Treating history as empty: {}", e);
            HistoryLog::new(self.capacity)
        })
    }
}
