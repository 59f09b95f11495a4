/// Storage layer for persisting habit data
///
/// The core hands plain habit data to a store and gets plain data back;
/// where and how the document lives is the store's concern. A store that
/// cannot produce prior data reports none, and the tracker starts empty
/// rather than failing.

pub mod json;

// Re-export the main storage types
pub use json::*;

use thiserror::Error;

use crate::domain::Habit;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Persistence contract for the habit list
///
/// This trait allows swapping the file-backed store for another medium
/// while keeping the same interface.
pub trait HabitStore {
    /// Load the previously saved habit list, or None when there is no
    /// usable prior data
    fn load(&self) -> Option<Vec<Habit>>;

    /// Persist the habit list
    fn save(&self, habits: &[Habit]) -> Result<(), StorageError>;
}
