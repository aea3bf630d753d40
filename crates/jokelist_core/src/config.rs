//! Joke list configuration.
//!
//! # Responsibility
//! - Hold the knobs a caller can set before loading jokes.
//! - Reject unusable values before any network call is made.
//!
//! # Invariants
//! - `num_jokes_to_get` is at least 1.
//! - `endpoint` is an absolute `http` or `https` URL.
//! - `timeout_ms` is non-zero.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub const DEFAULT_NUM_JOKES: u32 = 5;
pub const DEFAULT_ENDPOINT: &str = "https://icanhazdadjoke.com/";
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;
/// Request budget per wanted joke when no explicit cap is configured.
pub const DEFAULT_ATTEMPTS_PER_JOKE: u32 = 10;

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroJokeCount,
    InvalidEndpoint(String),
    ZeroTimeout,
    ZeroMaxAttempts,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroJokeCount => write!(f, "num_jokes_to_get must be at least 1"),
            Self::InvalidEndpoint(value) => {
                write!(f, "endpoint must be an http(s) URL, got `{value}`")
            }
            Self::ZeroTimeout => write!(f, "timeout_ms must be greater than 0"),
            Self::ZeroMaxAttempts => write!(f, "max_attempts must be greater than 0 when set"),
        }
    }
}

impl Error for ConfigError {}

/// How many requests the fetch loop may issue before giving up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttemptLimit {
    /// `DEFAULT_ATTEMPTS_PER_JOKE` times the wanted count.
    #[default]
    PerJokeDefault,
    /// Fixed request cap.
    Fixed(u32),
    /// Keep asking until enough distinct jokes arrive.
    Unbounded,
}

/// Settings for one joke list session and its HTTP source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JokeListConfig {
    pub num_jokes_to_get: u32,
    pub endpoint: String,
    pub timeout_ms: u64,
    pub user_agent: String,
    pub attempt_limit: AttemptLimit,
}

impl Default for JokeListConfig {
    fn default() -> Self {
        Self {
            num_jokes_to_get: DEFAULT_NUM_JOKES,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: default_user_agent(),
            attempt_limit: AttemptLimit::default(),
        }
    }
}

impl JokeListConfig {
    /// Checks all fields and returns the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_jokes_to_get == 0 {
            return Err(ConfigError::ZeroJokeCount);
        }
        if !is_http_url(self.endpoint.as_str()) {
            return Err(ConfigError::InvalidEndpoint(self.endpoint.clone()));
        }
        if self.timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        if self.attempt_limit == AttemptLimit::Fixed(0) {
            return Err(ConfigError::ZeroMaxAttempts);
        }
        Ok(())
    }

    /// Resolves the attempt limit into a concrete cap, `None` meaning unbounded.
    pub fn max_attempts(&self) -> Option<u32> {
        match self.attempt_limit {
            AttemptLimit::PerJokeDefault => Some(
                self.num_jokes_to_get
                    .saturating_mul(DEFAULT_ATTEMPTS_PER_JOKE),
            ),
            AttemptLimit::Fixed(cap) => Some(cap),
            AttemptLimit::Unbounded => None,
        }
    }
}

/// `jokelist/<version>`; the joke service asks clients to identify themselves.
pub fn default_user_agent() -> String {
    format!("jokelist/{}", env!("CARGO_PKG_VERSION"))
}

fn is_http_url(value: &str) -> bool {
    let trimmed = value.trim();
    let rest = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"));
    match rest {
        Some(host) => {
            !host.is_empty()
                && !host.starts_with(['/', '?', '#'])
                && !host.chars().any(char::is_whitespace)
        }
        None => false,
    }
}
