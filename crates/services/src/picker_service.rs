use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use picker_core::Tracker;
use picker_core::model::{CompletedSet, ProblemId, Tier, TierCatalog};

use crate::completion_store::CompletionStore;
use crate::error::PickerServiceError;

/// Tracker wired to its persisted completed set and a random source.
///
/// Every mutation of the completed set is flushed to the store before the
/// call returns. Write failures leave the in-memory state updated and are
/// reported to the caller as non-fatal errors.
pub struct PickerService<R = StdRng> {
    tracker: Tracker,
    store: CompletionStore,
    rng: R,
}

impl PickerService<StdRng> {
    /// Open a service seeded from the OS, or from `seed` when deterministic draws are wanted.
    pub async fn open(catalog: TierCatalog, store: CompletionStore, seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self::with_rng(catalog, store, rng).await
    }
}

impl<R: Rng> PickerService<R> {
    /// Build the service and load the completed set from the store.
    pub async fn with_rng(catalog: TierCatalog, store: CompletionStore, rng: R) -> Self {
        let mut service = Self {
            tracker: Tracker::new(catalog, CompletedSet::new()),
            store,
            rng,
        };
        service.load().await;
        service
    }

    /// Re-read the completed set from the store, replacing the in-memory copy.
    pub async fn load(&mut self) {
        let completed = self.store.load().await;
        self.tracker.restore(completed);
    }

    /// Write the full completed set to the store.
    ///
    /// # Errors
    ///
    /// Returns `PickerServiceError::Storage` if the write fails.
    pub async fn save(&self) -> Result<(), PickerServiceError> {
        self.store.save(self.tracker.completed()).await.map_err(|err| {
            tracing::warn!(error = %err, "failed to save completed problems");
            PickerServiceError::from(err)
        })
    }

    pub fn draw(&mut self, tier: Tier) -> Option<ProblemId> {
        let picked = self.tracker.draw(tier, &mut self.rng);
        tracing::debug!(%tier, ?picked, remaining = self.tracker.remaining(tier), "drew problem");
        picked
    }

    /// Mark the current selection done, redraw from `tier`, and persist.
    ///
    /// Returns the marked number, or `None` when nothing was selected.
    ///
    /// # Errors
    ///
    /// Returns `PickerServiceError::Storage` if persisting fails; the
    /// completion and redraw have still been applied in memory.
    pub async fn mark_completed(
        &mut self,
        tier: Tier,
    ) -> Result<Option<ProblemId>, PickerServiceError> {
        let Some(marked) = self.tracker.mark_completed(tier, &mut self.rng) else {
            return Ok(None);
        };
        tracing::info!(
            %marked,
            %tier,
            next = ?self.tracker.selection(),
            "marked problem completed"
        );
        self.save().await?;
        Ok(Some(marked))
    }

    /// Forget every completion and persist the empty set. Does not redraw.
    ///
    /// # Errors
    ///
    /// Returns `PickerServiceError::Storage` if persisting fails.
    pub async fn reset(&mut self) -> Result<(), PickerServiceError> {
        let cleared = self.tracker.completed().len();
        self.tracker.reset();
        tracing::info!(cleared, "reset completed problems");
        self.save().await
    }

    #[must_use]
    pub fn selection(&self) -> Option<ProblemId> {
        self.tracker.selection()
    }

    #[must_use]
    pub fn completed(&self) -> &CompletedSet {
        self.tracker.completed()
    }

    #[must_use]
    pub fn remaining(&self, tier: Tier) -> usize {
        self.tracker.remaining(tier)
    }

    #[must_use]
    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }
}
