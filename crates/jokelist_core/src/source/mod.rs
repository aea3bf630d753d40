//! Joke source contracts and implementations.
//!
//! # Responsibility
//! - Define the single-joke request seam used by the fetch loop.
//! - Keep HTTP transport details out of fetch and session logic.
//!
//! # Invariants
//! - One call issues at most one request and returns at most one joke.
//! - Transport, status and decode failures stay distinguishable.

pub mod http_source;

use crate::model::joke::JokePayload;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type SourceResult<T> = Result<T, SourceError>;

/// Failure of one joke request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// Connection, DNS, TLS, timeout or body read failure.
    Transport(String),
    /// Service answered with a non-2xx status.
    Status(u16),
    /// Body was not a joke payload.
    Parse(String),
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(message) => write!(f, "joke request failed: {message}"),
            Self::Status(code) => write!(f, "joke service returned http status {code}"),
            Self::Parse(message) => write!(f, "joke response could not be decoded: {message}"),
        }
    }
}

impl Error for SourceError {}

/// Provider of random jokes, one per call.
pub trait JokeSource {
    fn fetch_joke(&self) -> SourceResult<JokePayload>;
}

impl<S: JokeSource + ?Sized> JokeSource for &S {
    fn fetch_joke(&self) -> SourceResult<JokePayload> {
        (**self).fetch_joke()
    }
}

impl<S: JokeSource + ?Sized> JokeSource for Box<S> {
    fn fetch_joke(&self) -> SourceResult<JokePayload> {
        (**self).fetch_joke()
    }
}
