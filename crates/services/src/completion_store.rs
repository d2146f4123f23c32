use std::sync::Arc;

use picker_core::model::CompletedSet;
use storage::repository::{SettingsRepository, StorageError};

/// Settings key holding the completed problem numbers.
pub const COMPLETED_KEY: &str = "completedNumbers";

/// Reads and writes the completed set as a JSON array under one settings key.
#[derive(Clone)]
pub struct CompletionStore {
    repo: Arc<dyn SettingsRepository>,
}

impl CompletionStore {
    #[must_use]
    pub fn new(repo: Arc<dyn SettingsRepository>) -> Self {
        Self { repo }
    }

    /// Load the persisted completed set.
    ///
    /// Never fails: a missing, unreadable, or malformed value yields an empty set.
    pub async fn load(&self) -> CompletedSet {
        let raw = match self.repo.get_setting(COMPLETED_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!("no completed problems stored yet");
                return CompletedSet::new();
            }
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    "could not read completed problems; starting empty"
                );
                return CompletedSet::new();
            }
        };

        match serde_json::from_str::<CompletedSet>(&raw) {
            Ok(completed) => {
                tracing::debug!(count = completed.len(), "loaded completed problems");
                completed
            }
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    "stored completed problems are malformed; starting empty"
                );
                CompletedSet::new()
            }
        }
    }

    /// Overwrite the persisted value with the full set, in ascending order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be encoded or written.
    pub async fn save(&self, completed: &CompletedSet) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(completed)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        self.repo.put_setting(COMPLETED_KEY, &encoded).await
    }
}
