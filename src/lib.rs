/// Public library interface for the habitrack core
///
/// This module exports the statistics engine (domain), the aggregate
/// metrics (analytics), the persistence contract (storage), and the
/// HabitTracker aggregate that ties them together for a presentation
/// layer.

use chrono::NaiveDate;
use thiserror::Error;

// Internal modules
mod analytics;
mod backup;
mod domain;
mod storage;

// Re-export public modules and types
pub use analytics::{
    completion_rate, month_completion_rate, overall_completion_rate, SummaryStats,
};
pub use backup::{Backup, BACKUP_VERSION};
pub use domain::*;
pub use storage::{HabitStore, JsonFileStore, StorageError};

/// Errors that can occur during application operations
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Domain validation error: {0}")]
    Domain(#[from] domain::DomainError),

    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Application aggregate owning the habit list
///
/// This is the single mutable entity in the system. Mutations go through
/// here so cached statistics are refreshed after every change; the store
/// and the presentation layer only ever see data with current derived
/// fields.
#[derive(Debug, Default)]
pub struct HabitTracker {
    habits: Vec<Habit>,
}

impl HabitTracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self { habits: Vec::new() }
    }

    /// Load prior data from a store, treating any failure as no prior data
    ///
    /// Every loaded habit's statistics are recomputed before use, so a
    /// tracker never serves stale derived fields from disk.
    pub fn load_from(store: &impl HabitStore) -> Self {
        let mut habits = store.load().unwrap_or_default();

        let today = dates::today();
        for habit in &mut habits {
            habit.recompute(today);
        }

        tracing::info!("Loaded {} habits", habits.len());
        Self { habits }
    }

    /// Persist the current habit list through a store
    pub fn save_to(&self, store: &impl HabitStore) -> Result<(), StorageError> {
        store.save(&self.habits)
    }

    /// All habits, in insertion order
    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    /// Look up a habit by id
    pub fn habit(&self, id: HabitId) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    /// Create a habit with a validated name, empty history, and zeroed
    /// statistics; returns its id
    pub fn add_habit(&mut self, name: &str) -> Result<HabitId, DomainError> {
        let habit = Habit::new(name)?;
        let id = habit.id;

        tracing::info!("Added habit '{}' ({})", habit.name, id);
        self.habits.push(habit);
        Ok(id)
    }

    /// Remove a habit and its whole history
    ///
    /// An unknown id is a no-op, reported as false.
    pub fn delete_habit(&mut self, id: HabitId) -> bool {
        let before = self.habits.len();
        self.habits.retain(|h| h.id != id);

        let removed = self.habits.len() < before;
        if !removed {
            tracing::warn!("Delete requested for unknown habit {}", id);
        }
        removed
    }

    /// Log completion for a date, past or present
    ///
    /// Future dates are rejected. An unknown id is a no-op, reported as
    /// Ok(false) with state unchanged.
    pub fn log_habit(
        &mut self,
        id: HabitId,
        date: NaiveDate,
        done: bool,
    ) -> Result<bool, DomainError> {
        let today = dates::today();
        if dates::is_future_day(date, today) {
            return Err(DomainError::InvalidDate(format!(
                "Cannot log habits for future date {}",
                date
            )));
        }

        match self.habits.iter_mut().find(|h| h.id == id) {
            Some(habit) => {
                habit.log(date, done, today);
                Ok(true)
            }
            None => {
                tracing::warn!("Log requested for unknown habit {}", id);
                Ok(false)
            }
        }
    }

    /// Cross-habit rollup for the stats view
    pub fn summary(&self) -> SummaryStats {
        SummaryStats::from_habits(&self.habits)
    }

    /// Export the current state verbatim
    ///
    /// Derived fields are kept current after every mutation, so nothing
    /// needs recomputing on the way out.
    pub fn export(&self) -> Backup {
        Backup::from_habits(&self.habits)
    }

    /// Replace the current state with a backup's habits
    ///
    /// Statistics are recomputed for every imported habit before the data
    /// becomes current state. Returns how many habits were imported.
    pub fn import(&mut self, backup: Backup) -> usize {
        let mut habits = backup.habits;

        let today = dates::today();
        for habit in &mut habits {
            habit.recompute(today);
        }

        let count = habits.len();
        self.habits = habits;
        tracing::info!("Imported {} habits", count);
        count
    }

    /// Discard all habits
    pub fn reset(&mut self) {
        tracing::info!("Resetting all habit data");
        self.habits.clear();
    }
}
