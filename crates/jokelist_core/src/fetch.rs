//! Dedup-until-N fetch loop.
//!
//! # Responsibility
//! - Pull jokes one at a time from a `JokeSource` until enough distinct ids
//!   are collected.
//!
//! # Invariants
//! - Requests are strictly sequential; at most one is outstanding.
//! - Returned records have pairwise-distinct ids and zero votes.
//! - The first source failure aborts the loop; partial results are dropped.
//! - When a cap is set, no more than `max_attempts` requests are issued.

use crate::model::joke::{JokeId, JokeRecord};
use crate::source::{JokeSource, SourceError};
use log::{debug, error, info};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type FetchResult<T> = Result<T, FetchError>;

/// Upper bound on the up-front reservation; `target` comes from user input.
const MAX_PREALLOCATED_JOKES: usize = 64;

/// Fetch loop failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Asked for zero jokes.
    InvalidTarget,
    /// A request failed; the loop stopped at that request.
    Source(SourceError),
    /// Cap reached before enough distinct jokes arrived.
    AttemptsExhausted {
        target: u32,
        collected: u32,
        attempts: u32,
    },
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTarget => write!(f, "joke target must be at least 1"),
            Self::Source(err) => write!(f, "{err}"),
            Self::AttemptsExhausted {
                target,
                collected,
                attempts,
            } => write!(
                f,
                "gave up after {attempts} requests with {collected} of {target} unique jokes"
            ),
        }
    }
}

impl Error for FetchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Source(err) => Some(err),
            Self::InvalidTarget | Self::AttemptsExhausted { .. } => None,
        }
    }
}

impl From<SourceError> for FetchError {
    fn from(value: SourceError) -> Self {
        Self::Source(value)
    }
}

/// Result of a successful fetch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    /// Distinct jokes in arrival order.
    pub jokes: Vec<JokeRecord>,
    /// Total requests issued, duplicates included.
    pub requests: u32,
    /// Responses dropped because their id was already seen.
    pub duplicates: u32,
}

/// Fetches `target` jokes with distinct ids.
///
/// `max_attempts = None` keeps requesting until enough distinct ids arrive; a
/// source that keeps returning the same id then never terminates.
///
/// # Errors
/// - `FetchError::InvalidTarget` when `target == 0`.
/// - `FetchError::Source` on the first failed request.
/// - `FetchError::AttemptsExhausted` when the cap is hit first.
pub fn fetch_unique_jokes<S: JokeSource + ?Sized>(
    source: &S,
    target: u32,
    max_attempts: Option<u32>,
) -> FetchResult<FetchOutcome> {
    if target == 0 {
        return Err(FetchError::InvalidTarget);
    }

    info!(
        "event=fetch_start module=fetch status=ok target={} max_attempts={}",
        target,
        max_attempts.map_or_else(|| "unbounded".to_string(), |cap| cap.to_string())
    );

    let mut seen: HashSet<JokeId> = HashSet::new();
    let mut jokes: Vec<JokeRecord> =
        Vec::with_capacity((target as usize).min(MAX_PREALLOCATED_JOKES));
    let mut requests: u32 = 0;
    let mut duplicates: u32 = 0;

    while (jokes.len() as u32) < target {
        if let Some(cap) = max_attempts {
            if requests >= cap {
                let err = FetchError::AttemptsExhausted {
                    target,
                    collected: jokes.len() as u32,
                    attempts: requests,
                };
                error!(
                    "event=fetch_failed module=fetch status=error reason=attempts_exhausted requests={} collected={}",
                    requests,
                    jokes.len()
                );
                return Err(err);
            }
        }

        requests = requests.saturating_add(1);
        let payload = source.fetch_joke().map_err(|err| {
            error!(
                "event=fetch_failed module=fetch status=error reason=source requests={} error={}",
                requests, err
            );
            FetchError::Source(err)
        })?;

        if seen.contains(payload.id.as_str()) {
            duplicates = duplicates.saturating_add(1);
            debug!(
                "event=joke_duplicate module=fetch status=ok id={} requests={}",
                payload.id, requests
            );
            continue;
        }

        let record = match JokeRecord::try_from(payload) {
            Ok(record) => record,
            Err(err) => {
                error!(
                    "event=fetch_failed module=fetch status=error reason=invalid_payload requests={} error={}",
                    requests, err
                );
                return Err(FetchError::Source(SourceError::Parse(err.to_string())));
            }
        };
        seen.insert(record.id.clone());
        jokes.push(record);
    }

    info!(
        "event=fetch_done module=fetch status=ok collected={} requests={} duplicates={}",
        jokes.len(),
        requests,
        duplicates
    );

    Ok(FetchOutcome {
        jokes,
        requests,
        duplicates,
    })
}
