use crate::model::ids::ProblemId;
use crate::model::tier::Tier;

const fn ids<const N: usize>(raw: [u32; N]) -> [ProblemId; N] {
    let mut out = [ProblemId::new(0); N];
    let mut i = 0;
    while i < N {
        out[i] = ProblemId::new(raw[i]);
        i += 1;
    }
    out
}

pub const EASY_PROBLEMS: [ProblemId; 40] = ids([
    88, 27, 26, 169, 121, 13, 58, 14, 28, 125, 392, 383, 205, 290, 242, 1, 202, 219, 228, 20,
    141, 21, 104, 100, 226, 101, 112, 222, 637, 530, 108, 35, 67, 190, 191, 136, 9, 66, 69, 70,
]);

pub const MEDIUM_PROBLEMS: [ProblemId; 92] = ids([
    80, 189, 122, 55, 45, 274, 380, 238, 134, 12, 151, 6, 167, 11, 15, 209, 3, 36, 54, 48, 73,
    289, 49, 128, 56, 57, 452, 71, 155, 150, 2, 138, 92, 19, 82, 61, 86, 146, 105, 106, 117,
    114, 129, 173, 236, 199, 102, 103, 230, 98, 200, 130, 133, 399, 207, 210, 909, 433, 208,
    211, 17, 77, 46, 39, 22, 79, 148, 427, 53, 918, 74, 162, 33, 34, 153, 215, 373, 137, 201,
    172, 50, 198, 139, 322, 300, 120, 64, 63, 5, 97, 72, 221,
]);

pub const HARD_PROBLEMS: [ProblemId; 18] = ids([
    135, 42, 68, 30, 76, 224, 25, 124, 127, 212, 52, 23, 4, 502, 295, 149, 123, 188,
]);

/// The three immutable tier lists.
///
/// Lists keep their configured order and any duplicates; only membership
/// affects drawing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TierCatalog {
    easy: Vec<ProblemId>,
    medium: Vec<ProblemId>,
    hard: Vec<ProblemId>,
}

impl TierCatalog {
    #[must_use]
    pub fn new(easy: Vec<ProblemId>, medium: Vec<ProblemId>, hard: Vec<ProblemId>) -> Self {
        Self { easy, medium, hard }
    }

    /// The built-in problem lists.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(
            EASY_PROBLEMS.to_vec(),
            MEDIUM_PROBLEMS.to_vec(),
            HARD_PROBLEMS.to_vec(),
        )
    }

    /// Returns the list owned by a base tier; `Random` owns no list of its own.
    #[must_use]
    pub fn list(&self, tier: Tier) -> &[ProblemId] {
        match tier {
            Tier::Easy => &self.easy,
            Tier::Medium => &self.medium,
            Tier::Hard => &self.hard,
            Tier::Random => &[],
        }
    }

    /// Candidate sequence for a tier before filtering.
    ///
    /// `Random` concatenates the base lists without deduplication, so a number
    /// listed in two tiers is twice as likely to be drawn.
    pub fn candidates(&self, tier: Tier) -> impl Iterator<Item = ProblemId> + '_ {
        let none: &[ProblemId] = &[];
        let (easy, medium, hard) = match tier {
            Tier::Easy => (self.easy.as_slice(), none, none),
            Tier::Medium => (none, self.medium.as_slice(), none),
            Tier::Hard => (none, none, self.hard.as_slice()),
            Tier::Random => (
                self.easy.as_slice(),
                self.medium.as_slice(),
                self.hard.as_slice(),
            ),
        };
        easy.iter().chain(medium).chain(hard).copied()
    }
}
