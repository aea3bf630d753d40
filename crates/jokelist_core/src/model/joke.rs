//! Joke domain model.
//!
//! # Responsibility
//! - Define the canonical joke record held by the vote store.
//! - Define the wire payload returned by the joke service.
//!
//! # Invariants
//! - `id` is non-empty and is the uniqueness key within one loaded set.
//! - `votes` starts at zero and has no floor or ceiling.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Opaque identifier supplied by the joke service.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type JokeId = String;

/// Validation errors for joke records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JokeValidationError {
    /// Id is empty or whitespace only.
    EmptyId,
}

impl Display for JokeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "joke id cannot be empty"),
        }
    }
}

impl Error for JokeValidationError {}

/// One joke in the vote store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JokeRecord {
    pub id: JokeId,
    /// Serialized as `joke` to match the service field name.
    #[serde(rename = "joke")]
    pub text: String,
    #[serde(default)]
    pub votes: i64,
}

impl JokeRecord {
    /// Creates a record with zero votes.
    ///
    /// # Errors
    /// - Returns `JokeValidationError::EmptyId` when `id` is blank.
    pub fn new(
        id: impl Into<JokeId>,
        text: impl Into<String>,
    ) -> Result<Self, JokeValidationError> {
        let record = Self {
            id: id.into(),
            text: text.into(),
            votes: 0,
        };
        record.validate()?;
        Ok(record)
    }

    /// Checks record invariants.
    pub fn validate(&self) -> Result<(), JokeValidationError> {
        if self.id.trim().is_empty() {
            return Err(JokeValidationError::EmptyId);
        }
        Ok(())
    }

    /// Adds `delta` to the vote count, saturating at the `i64` bounds.
    pub fn apply_vote(&mut self, delta: i64) {
        self.votes = self.votes.saturating_add(delta);
    }
}

/// Response body of a single-joke request.
///
/// Unknown fields are ignored so service-side additions do not break parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JokePayload {
    pub id: JokeId,
    pub joke: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl JokePayload {
    pub fn new(id: impl Into<JokeId>, joke: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            joke: joke.into(),
            status: None,
        }
    }
}

impl TryFrom<JokePayload> for JokeRecord {
    type Error = JokeValidationError;

    fn try_from(value: JokePayload) -> Result<Self, Self::Error> {
        JokeRecord::new(value.id, value.joke)
    }
}

/// Direction of a single user vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    /// Signed delta applied to the vote count.
    pub fn delta(self) -> i64 {
        match self {
            Self::Up => 1,
            Self::Down => -1,
        }
    }
}
