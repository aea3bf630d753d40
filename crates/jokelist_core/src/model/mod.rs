//! Joke domain model.
//!
//! # Responsibility
//! - Define the record shape shared by the store, fetch loop and renderers.
//!
//! # Invariants
//! - Every joke is identified by the service-supplied `JokeId`.

pub mod joke;
