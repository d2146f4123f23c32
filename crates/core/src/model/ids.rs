use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number naming one practice problem.
///
/// Opaque to the tracker beyond equality: it only matters whether a number
/// appears in a tier list or in the completed set.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProblemId(u32);

impl ProblemId {
    /// Creates a new `ProblemId`
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the underlying number
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for ProblemId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Debug for ProblemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProblemId({})", self.0)
    }
}

impl fmt::Display for ProblemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for parsing a `ProblemId` from a string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    raw: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse problem number from {:?}", self.raw)
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for ProblemId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(ProblemId::new)
            .map_err(|_| ParseIdError { raw: s.to_string() })
    }
}
