use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Identifier of one problem, shared by its asset files and answer-key rows.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProblemId(u32);

impl ProblemId {
    /// Creates a new `ProblemId`
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the underlying u32 value
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
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

/// Error parsing a problem id from a string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseIdError {
    #[error("problem id is empty")]
    Empty,

    #[error("problem id must contain only ASCII digits: {0:?}")]
    NotDigits(String),

    #[error("problem id out of range: {0}")]
    OutOfRange(String),
}

impl FromStr for ProblemId {
    type Err = ParseIdError;

    /// Only plain ASCII digits are accepted; signs, whitespace and decimal
    /// points are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseIdError::Empty);
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseIdError::NotDigits(s.to_string()));
        }
        s.parse::<u32>()
            .map(Self::new)
            .map_err(|_| ParseIdError::OutOfRange(s.to_string()))
    }
}

/// Composite identity of an answer: problem id plus sub-question label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordKey {
    pub problem_id: ProblemId,
    pub sub_question: String,
}

impl RecordKey {
    #[must_use]
    pub fn new(problem_id: ProblemId, sub_question: impl Into<String>) -> Self {
        Self {
            problem_id,
            sub_question: sub_question.into(),
        }
    }
}
