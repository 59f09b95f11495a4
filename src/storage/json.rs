/// JSON file implementation of the habit store
///
/// Persists the whole habit list as one JSON document, mirroring the
/// single-key persistence model the tracker is built around.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::Habit;
use crate::storage::{HabitStore, StorageError};

/// File-backed store holding the habit list as a single JSON document
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default data file location under the platform data directory,
    /// falling back to the home directory and then the working directory
    pub fn default_path() -> PathBuf {
        let mut base = dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        base.push("habitrack");
        base.push("habits.json");
        base
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HabitStore for JsonFileStore {
    /// Read the habit list; any failure is treated as no prior data
    fn load(&self) -> Option<Vec<Habit>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::debug!("No prior data at {:?}: {}", self.path, err);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(habits) => Some(habits),
            Err(err) => {
                tracing::warn!("Ignoring unreadable habit data at {:?}: {}", self.path, err);
                None
            }
        }
    }

    fn save(&self, habits: &[Habit]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(habits)?;
        fs::write(&self.path, json)?;

        tracing::debug!("Saved {} habits to {:?}", habits.len(), self.path);
        Ok(())
    }
}
