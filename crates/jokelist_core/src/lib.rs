//! Core domain logic for JokeList.
//! This crate owns the fetch loop, the vote store and the load state machine.

pub mod config;
pub mod fetch;
pub mod logging;
pub mod model;
pub mod service;
pub mod source;
pub mod store;

pub use config::{AttemptLimit, ConfigError, JokeListConfig};
pub use fetch::{fetch_unique_jokes, FetchError, FetchOutcome, FetchResult};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::joke::{JokeId, JokePayload, JokeRecord, JokeValidationError, VoteDirection};
pub use service::joke_list::{FetchStats, JokeList, JokeListView, JokeView, LoadState};
pub use source::http_source::HttpJokeSource;
pub use source::{JokeSource, SourceError, SourceResult};
pub use store::JokeStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
