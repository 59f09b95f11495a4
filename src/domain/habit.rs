/// Habit entity and related functionality
///
/// This module defines the core Habit struct: identity, display name, the
/// completion history it exclusively owns, and the cached statistics that
/// are recomputed after every history mutation.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, HabitId, History, Streak};

/// A habit the user wants to track
///
/// The derived fields (`streak`, `missed`, `longest_streak`) are a cache
/// over the history, never authoritative on their own: they are refreshed
/// after every mutation and re-derived for any habit loaded or imported
/// from outside. The serialized form matches the persisted record shape,
/// with history entries as `{date, done}` pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    /// Unique identifier for this habit
    pub id: HabitId,
    /// Display name (e.g., "Morning Run", "Read for 30min")
    pub name: String,
    /// Every logged day for this habit, at most one entry per date
    #[serde(default)]
    pub history: History,
    /// Current consecutive-done streak (cached)
    #[serde(default)]
    pub streak: u32,
    /// Count of entries logged as not done (cached)
    #[serde(default)]
    pub missed: u32,
    /// Best streak ever achieved (cached)
    #[serde(default)]
    pub longest_streak: u32,
    /// When this habit was created
    pub created_at: DateTime<Utc>,
}

impl Habit {
    /// Create a new habit with a validated name, empty history, and zeroed
    /// statistics
    pub fn new(name: &str) -> Result<Self, DomainError> {
        let name = Self::validate_name(name)?;

        Ok(Self {
            id: HabitId::new(),
            name,
            history: History::new(),
            streak: 0,
            missed: 0,
            longest_streak: 0,
            created_at: Utc::now(),
        })
    }

    /// Log `done` for `date` and refresh the cached statistics
    pub fn log(&mut self, date: NaiveDate, done: bool, today: NaiveDate) {
        self.history.upsert(date, done);
        self.recompute(today);
    }

    /// Recompute the cached statistics from the history
    ///
    /// Called after every history mutation, and for every habit that
    /// arrives from a store or a backup - stored derived fields are never
    /// trusted.
    pub fn recompute(&mut self, today: NaiveDate) {
        let stats = Streak::calculate(&self.history, today);
        self.streak = stats.current_streak;
        self.missed = stats.missed;
        self.longest_streak = stats.longest_streak;
    }

    // Validation helper methods

    /// Validate and normalize a habit name
    fn validate_name(name: &str) -> Result<String, DomainError> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be empty".to_string(),
            ));
        }

        if trimmed.len() > 100 {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be longer than 100 characters".to_string(),
            ));
        }

        Ok(trimmed.to_string())
    }
}
