/// Completion history for a single habit
///
/// This module defines the HistoryEntry record and the History collection
/// that owns all entries logged for one habit, keyed logically by date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single logged day: which date, and whether the habit was done
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub date: NaiveDate,
    pub done: bool,
}

/// Per-habit collection of history entries
///
/// At most one entry exists per calendar date; writing a second entry for
/// an existing date overwrites its done flag in place (last write wins).
/// Physical ordering is not part of the contract and callers must not rely
/// on it - consumers that need order sort for themselves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Create an empty history
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record `done` for `date`, overwriting any existing entry for that date
    ///
    /// The store performs no future-date validation; that constraint is
    /// enforced by the caller before the entry reaches the history.
    pub fn upsert(&mut self, date: NaiveDate, done: bool) {
        match self.entries.iter_mut().find(|e| e.date == date) {
            Some(entry) => entry.done = done,
            None => self.entries.push(HistoryEntry { date, done }),
        }
    }

    /// Look up the entry logged for a date, if any
    pub fn entry_on(&self, date: NaiveDate) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.date == date)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Number of entries marked done
    pub fn completed_count(&self) -> u32 {
        self.entries.iter().filter(|e| e.done).count() as u32
    }

    /// Number of entries marked not done, independent of ordering
    pub fn missed_count(&self) -> u32 {
        self.entries.iter().filter(|e| !e.done).count() as u32
    }

    /// Entries sorted oldest first
    pub(crate) fn sorted_ascending(&self) -> Vec<HistoryEntry> {
        let mut sorted = self.entries.clone();
        sorted.sort_by_key(|e| e.date);
        sorted
    }

    /// Entries sorted newest first
    pub(crate) fn sorted_descending(&self) -> Vec<HistoryEntry> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }
}
