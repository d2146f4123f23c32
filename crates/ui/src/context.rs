use std::sync::Arc;

use picker_core::model::Tier;
use services::SharedPicker;

use crate::vm::{PickerVm, map_picker};

pub trait UiApp: Send + Sync {
    fn picker(&self) -> SharedPicker;

    fn initial_tier(&self) -> Tier {
        Tier::default()
    }
}

#[derive(Clone)]
pub struct AppContext {
    picker: SharedPicker,
    initial_tier: Tier,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            picker: app.picker(),
            initial_tier: app.initial_tier(),
        }
    }

    #[must_use]
    pub fn picker(&self) -> SharedPicker {
        Arc::clone(&self.picker)
    }

    #[must_use]
    pub fn initial_tier(&self) -> Tier {
        self.initial_tier
    }

    /// View-model for the first frame. Falls back to a placeholder while the
    /// picker is busy elsewhere.
    #[must_use]
    pub fn snapshot(&self, tier: Tier) -> PickerVm {
        match self.picker.try_lock() {
            Ok(picker) => map_picker(picker.tracker(), tier),
            Err(_) => PickerVm::placeholder(tier),
        }
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
