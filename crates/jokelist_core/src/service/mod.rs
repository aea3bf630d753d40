//! Core use-case services.
//!
//! # Responsibility
//! - Tie the fetch loop and vote store into one session API.
//! - Keep presentation layers decoupled from source and store details.

pub mod joke_list;
