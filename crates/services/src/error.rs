//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `PickerService`.
///
/// In-memory state is already updated when one of these is returned; only
/// the persisted copy is stale.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PickerServiceError {
    #[error("failed to save progress: {0}")]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}
