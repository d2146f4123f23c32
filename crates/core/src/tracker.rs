use rand::Rng;
use rand::seq::IndexedRandom;

use crate::model::{CompletedSet, ProblemId, Tier, TierCatalog};

/// Selection and completion state for one user.
///
/// Pure in-memory state machine; persistence lives in the services layer.
/// Invariant: a present selection is never a member of the completed set.
#[derive(Clone, Debug)]
pub struct Tracker {
    catalog: TierCatalog,
    completed: CompletedSet,
    selection: Option<ProblemId>,
}

impl Tracker {
    #[must_use]
    pub fn new(catalog: TierCatalog, completed: CompletedSet) -> Self {
        Self {
            catalog,
            completed,
            selection: None,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &TierCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn completed(&self) -> &CompletedSet {
        &self.completed
    }

    #[must_use]
    pub fn selection(&self) -> Option<ProblemId> {
        self.selection
    }

    /// Eligible candidates for `tier`, duplicates included.
    pub fn eligible(&self, tier: Tier) -> impl Iterator<Item = ProblemId> + '_ {
        self.catalog
            .candidates(tier)
            .filter(|id| !self.completed.contains(*id))
    }

    #[must_use]
    pub fn remaining(&self, tier: Tier) -> usize {
        self.eligible(tier).count()
    }

    /// Picks a uniformly random eligible problem for `tier`.
    ///
    /// Returns `None` (and clears the selection) when every candidate is completed.
    pub fn draw<R: Rng + ?Sized>(&mut self, tier: Tier, rng: &mut R) -> Option<ProblemId> {
        let eligible: Vec<ProblemId> = self.eligible(tier).collect();
        self.selection = eligible.choose(rng).copied();
        self.selection
    }

    /// Marks the current selection as completed and redraws from `tier`.
    ///
    /// Returns the number that was marked, or `None` when nothing was selected.
    pub fn mark_completed<R: Rng + ?Sized>(
        &mut self,
        tier: Tier,
        rng: &mut R,
    ) -> Option<ProblemId> {
        let marked = self.selection?;
        self.completed.insert(marked);
        self.draw(tier, rng);
        Some(marked)
    }

    /// Empties the completed set. The selection is left untouched.
    pub fn reset(&mut self) {
        self.completed.clear();
    }

    /// Replaces the completed set wholesale, e.g. after reading it from storage.
    pub fn restore(&mut self, completed: CompletedSet) {
        self.completed = completed;
        if self
            .selection
            .is_some_and(|id| self.completed.contains(id))
        {
            self.selection = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn ids(raw: &[u32]) -> Vec<ProblemId> {
        raw.iter().copied().map(ProblemId::new).collect()
    }

    fn completed(raw: &[u32]) -> CompletedSet {
        raw.iter().copied().map(ProblemId::new).collect()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn small_catalog() -> TierCatalog {
        TierCatalog::new(ids(&[88, 27, 26]), ids(&[80, 189]), ids(&[135]))
    }

    #[test]
    fn draw_only_returns_the_single_eligible_problem() {
        let mut tracker = Tracker::new(small_catalog(), completed(&[88, 27]));
        let mut rng = rng();
        for _ in 0..50 {
            assert_eq!(tracker.draw(Tier::Easy, &mut rng), Some(ProblemId::new(26)));
        }
    }

    #[test]
    fn draw_never_returns_completed_problems() {
        let done = completed(&[88, 80, 42, 1, 2, 3]);
        let mut tracker = Tracker::new(TierCatalog::builtin(), done.clone());
        let mut rng = rng();
        for tier in Tier::ALL {
            for _ in 0..200 {
                let picked = tracker.draw(tier, &mut rng).expect("eligible problem");
                assert!(!done.contains(picked));
            }
        }
    }

    #[test]
    fn draw_returns_none_when_tier_is_exhausted() {
        let mut tracker = Tracker::new(small_catalog(), completed(&[135]));
        let mut rng = rng();
        tracker.draw(Tier::Easy, &mut rng);
        assert!(tracker.selection().is_some());

        assert_eq!(tracker.draw(Tier::Hard, &mut rng), None);
        assert_eq!(tracker.selection(), None);
        assert_eq!(tracker.remaining(Tier::Hard), 0);
    }

    #[test]
    fn random_draws_stay_within_base_tiers() {
        let catalog = TierCatalog::builtin();
        let all: HashSet<ProblemId> = catalog.candidates(Tier::Random).collect();
        let mut tracker = Tracker::new(catalog, CompletedSet::new());
        let mut rng = rng();
        for _ in 0..500 {
            let picked = tracker.draw(Tier::Random, &mut rng).unwrap();
            assert!(all.contains(&picked));
        }
    }

    #[test]
    fn random_weights_duplicates_by_occurrence() {
        let catalog = TierCatalog::new(ids(&[1]), ids(&[1]), ids(&[2]));
        let mut tracker = Tracker::new(catalog, CompletedSet::new());
        assert_eq!(tracker.remaining(Tier::Random), 3);

        let mut rng = rng();
        let ones = (0..3000)
            .filter(|_| tracker.draw(Tier::Random, &mut rng) == Some(ProblemId::new(1)))
            .count();
        assert!((1700..2300).contains(&ones), "drew 1 {ones} times out of 3000");
    }

    #[test]
    fn mark_completed_records_and_redraws() {
        let mut tracker = Tracker::new(small_catalog(), CompletedSet::new());
        let mut rng = rng();
        let first = tracker.draw(Tier::Easy, &mut rng).unwrap();

        assert_eq!(tracker.mark_completed(Tier::Easy, &mut rng), Some(first));
        assert!(tracker.completed().contains(first));
        let next = tracker.selection().unwrap();
        assert_ne!(next, first);
        assert!(small_catalog().list(Tier::Easy).contains(&next));
    }

    #[test]
    fn end_to_end_easy_exhaustion() {
        let mut tracker = Tracker::new(small_catalog(), completed(&[88, 27]));
        let mut rng = rng();
        assert_eq!(tracker.draw(Tier::Easy, &mut rng), Some(ProblemId::new(26)));

        tracker.mark_completed(Tier::Easy, &mut rng);
        assert_eq!(tracker.completed(), &completed(&[88, 27, 26]));
        assert_eq!(tracker.selection(), None);
        assert_eq!(tracker.draw(Tier::Easy, &mut rng), None);
    }

    #[test]
    fn mark_completed_without_selection_is_a_no_op() {
        let mut tracker = Tracker::new(small_catalog(), CompletedSet::new());
        let mut rng = rng();
        assert_eq!(tracker.mark_completed(Tier::Easy, &mut rng), None);
        assert!(tracker.completed().is_empty());
    }

    #[test]
    fn second_mark_after_exhaustion_changes_nothing() {
        let mut tracker = Tracker::new(small_catalog(), CompletedSet::new());
        let mut rng = rng();
        tracker.draw(Tier::Hard, &mut rng);

        assert_eq!(tracker.mark_completed(Tier::Hard, &mut rng), Some(ProblemId::new(135)));
        let after_first = tracker.completed().clone();
        assert_eq!(tracker.mark_completed(Tier::Hard, &mut rng), None);
        assert_eq!(tracker.completed(), &after_first);
    }

    #[test]
    fn redraw_uses_the_tier_passed_to_mark() {
        let catalog = small_catalog();
        let mut tracker = Tracker::new(catalog.clone(), CompletedSet::new());
        let mut rng = rng();
        let first = tracker.draw(Tier::Easy, &mut rng).unwrap();

        assert_eq!(tracker.mark_completed(Tier::Hard, &mut rng), Some(first));
        assert!(tracker.completed().contains(first));
        assert_eq!(tracker.selection(), Some(ProblemId::new(135)));

        let mut tracker = Tracker::new(catalog.clone(), CompletedSet::new());
        tracker.draw(Tier::Easy, &mut rng);
        tracker.mark_completed(Tier::Medium, &mut rng);
        let next = tracker.selection().unwrap();
        assert!(catalog.list(Tier::Medium).contains(&next));
    }

    #[test]
    fn reset_clears_completions_but_keeps_selection() {
        let mut tracker = Tracker::new(small_catalog(), completed(&[88, 27]));
        let mut rng = rng();
        let picked = tracker.draw(Tier::Easy, &mut rng);

        tracker.reset();
        assert!(tracker.completed().is_empty());
        assert_eq!(tracker.selection(), picked);
        assert_eq!(tracker.remaining(Tier::Easy), 3);

        let seen: HashSet<ProblemId> = (0..300)
            .filter_map(|_| tracker.draw(Tier::Easy, &mut rng))
            .collect();
        assert_eq!(seen, ids(&[88, 27, 26]).into_iter().collect());
    }

    #[test]
    fn unknown_completed_numbers_are_harmless() {
        let mut tracker = Tracker::new(small_catalog(), completed(&[9999]));
        let mut rng = rng();
        assert_eq!(tracker.remaining(Tier::Random), 6);
        assert!(tracker.draw(Tier::Random, &mut rng).is_some());
    }

    #[test]
    fn restore_clears_a_selection_that_became_completed() {
        let mut tracker = Tracker::new(small_catalog(), CompletedSet::new());
        let mut rng = rng();
        let picked = tracker.draw(Tier::Hard, &mut rng).unwrap();

        tracker.restore(completed(&[picked.value()]));
        assert_eq!(tracker.selection(), None);
    }
}
