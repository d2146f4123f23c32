use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::model::ids::ProblemId;

/// Problems the user has marked done.
///
/// Grows only through explicit completion and shrinks only through a full
/// reset. Numbers outside the catalog are kept; they simply never match a
/// candidate.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletedSet(BTreeSet<ProblemId>);

impl CompletedSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, id: ProblemId) -> bool {
        self.0.contains(&id)
    }

    /// Returns `false` if the number was already present.
    pub fn insert(&mut self, id: ProblemId) -> bool {
        self.0.insert(id)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = ProblemId> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<ProblemId> for CompletedSet {
    fn from_iter<I: IntoIterator<Item = ProblemId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
