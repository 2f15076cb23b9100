//! Per-mode match history: a capped, most-recent-first log of results.

mod error;
mod store;

pub use error::StoreError;
pub use store::{FileStore, KeyValueStore, MemoryStore};

use chrono::Local;
use derive_getters::Getters;
use derive_new::new;
use tracing::{debug, info, instrument, warn};

use crate::game::{Mode, Outcome};

/// Maximum entries retained per mode; older entries are silently dropped.
pub const HISTORY_CAP: usize = 20;

/// One finished game's result, with the time it ended.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct HistoryEntry {
    /// The result text, e.g. `"X Wins"`.
    result_text: String,
    /// Clock time the game ended, e.g. `"3:04:05 PM"`.
    timestamp: String,
}

impl HistoryEntry {
    /// Creates an entry for an outcome stamped with the current local time.
    pub fn now(outcome: Outcome) -> Self {
        Self::new(
            outcome.to_string(),
            Local::now().format("%-I:%M:%S %p").to_string(),
        )
    }
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} • {}", self.result_text, self.timestamp)
    }
}

/// Append-and-cap result log, keyed by mode, persisted through an injected
/// [`KeyValueStore`].
///
/// Each mode's log is stored as a JSON array of rendered entry strings
/// under that mode's fixed key, so logs written by earlier sessions keep
/// reading back.
pub struct HistoryLog {
    store: Box<dyn KeyValueStore>,
}

impl HistoryLog {
    /// Creates a log over the given store.
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Returns the stored sequence for a mode, most recent first.
    ///
    /// Absent, unreadable, or unparsable data reads as an empty log; the
    /// failure is logged and never surfaced.
    #[instrument(skip(self))]
    pub fn load(&self, mode: Mode) -> Vec<String> {
        let raw = match self.store.get(mode.storage_key()) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!(error = %err, "history read failed, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(error = %err, "stored history unparsable, starting empty");
                Vec::new()
            }
        }
    }

    /// Prepends an entry to a mode's log, truncates to [`HISTORY_CAP`],
    /// writes the log back, and returns the updated sequence.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the updated log cannot be written.
    #[instrument(skip(self, entry), fields(entry = %entry))]
    pub fn append(&mut self, mode: Mode, entry: HistoryEntry) -> Result<Vec<String>, StoreError> {
        let mut entries = self.load(mode);
        entries.insert(0, entry.to_string());
        entries.truncate(HISTORY_CAP);

        self.store
            .set(mode.storage_key(), &serde_json::to_string(&entries)?)?;

        debug!(count = entries.len(), "history written");
        info!(mode = mode.label(), result = %entry.result_text(), "result recorded");
        Ok(entries)
    }
}
