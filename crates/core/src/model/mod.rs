mod catalog;
mod completed;
mod ids;
mod tier;

pub use catalog::{EASY_PROBLEMS, HARD_PROBLEMS, MEDIUM_PROBLEMS, TierCatalog};
pub use completed::CompletedSet;
pub use ids::{ParseIdError, ProblemId};
pub use tier::{ParseTierError, Tier};
