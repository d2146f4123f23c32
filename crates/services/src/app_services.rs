use std::sync::Arc;

use picker_core::model::TierCatalog;
use storage::repository::Storage;
use tokio::sync::Mutex;

use crate::completion_store::CompletionStore;
use crate::error::AppServicesError;
use crate::picker_service::PickerService;

/// Picker shared between the composition root and the UI.
pub type SharedPicker = Arc<Mutex<PickerService>>;

/// Assembles app-facing services.
#[derive(Clone)]
pub struct AppServices {
    picker: SharedPicker,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str, seed: Option<u64>) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage, TierCatalog::builtin(), seed).await)
    }

    /// Build services over an already opened storage backend.
    pub async fn from_storage(storage: &Storage, catalog: TierCatalog, seed: Option<u64>) -> Self {
        let store = CompletionStore::new(Arc::clone(&storage.settings));
        let picker = PickerService::open(catalog, store, seed).await;
        tracing::info!(completed = picker.completed().len(), "picker ready");
        Self {
            picker: Arc::new(Mutex::new(picker)),
        }
    }

    #[must_use]
    pub fn picker(&self) -> SharedPicker {
        Arc::clone(&self.picker)
    }
}
