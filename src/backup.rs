/// Backup envelope for export and import
///
/// Exports carry the habit list verbatim plus an advisory version tag and
/// export timestamp. The import path parses and validates the whole file
/// before any state changes, and the tracker re-derives every imported
/// habit's statistics before the data is accepted as current state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, Habit};

/// Advisory version tag written to exported backups
pub const BACKUP_VERSION: &str = "habitrack-v1";

/// The exported document: habit list plus advisory metadata
///
/// Only the habit list is required on import; the version tag and export
/// date are advisory and may be absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Backup {
    pub habits: Vec<Habit>,
    #[serde(default)]
    pub export_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub version: Option<String>,
}

impl Backup {
    /// Build an export envelope around the current habit list
    pub fn from_habits(habits: &[Habit]) -> Self {
        Self {
            habits: habits.to_vec(),
            export_date: Some(Utc::now()),
            version: Some(BACKUP_VERSION.to_string()),
        }
    }

    /// Parse backup JSON, rejecting anything without a habits list
    ///
    /// Runs before any state mutation, so a malformed file leaves the
    /// tracker untouched.
    pub fn parse(json: &str) -> Result<Self, DomainError> {
        serde_json::from_str(json).map_err(|err| DomainError::InvalidBackup(err.to_string()))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
