/// Domain module containing the statistics core
///
/// This module defines the core entities (Habit, HistoryEntry, Streak),
/// the calendar-day arithmetic they rely on, and their validation rules.

pub mod dates;
pub mod entry;
pub mod habit;
pub mod streak;
pub mod types;

// Re-export public types for easy access
pub use entry::*;
pub use habit::*;
pub use streak::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid habit name: {0}")]
    InvalidHabitName(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid backup format: {0}")]
    InvalidBackup(String),
}
