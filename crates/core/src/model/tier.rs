use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Difficulty bucket a problem is drawn from.
///
/// `Random` is virtual: it spans the three base tiers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    #[default]
    Easy,
    Medium,
    Hard,
    Random,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown tier: {0}")]
pub struct ParseTierError(String);

impl Tier {
    /// Every selectable tier, in display order.
    pub const ALL: [Tier; 4] = [Tier::Easy, Tier::Medium, Tier::Hard, Tier::Random];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Tier::Easy => "easy",
            Tier::Medium => "medium",
            Tier::Hard => "hard",
            Tier::Random => "random",
        }
    }

    /// Label shown on the tier selector.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Tier::Easy => "🟢 Easy",
            Tier::Medium => "🟡 Medium",
            Tier::Hard => "🔴 Hard",
            Tier::Random => "🌈 Random",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tier {
    type Err = ParseTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Tier::ALL
            .into_iter()
            .find(|tier| tier.name() == normalized)
            .ok_or_else(|| ParseTierError(s.to_string()))
    }
}
