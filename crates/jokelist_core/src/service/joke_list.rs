//! Joke list session service.
//!
//! # Responsibility
//! - Own the vote store and the load state of one joke list.
//! - Drive the fetch loop on explicit `Loading` transitions.
//! - Expose a render-ready snapshot for presentation layers.
//!
//! # Invariants
//! - Initial state is `Loading` with an empty store.
//! - `load()` only runs the fetch loop while `Loading`.
//! - A failed load leaves the store empty and the state `Failed`.
//! - `reset()` always clears the store and returns to `Loading`.

use crate::config::{ConfigError, JokeListConfig};
use crate::fetch::{fetch_unique_jokes, FetchError, FetchOutcome};
use crate::model::joke::{JokeId, VoteDirection};
use crate::source::JokeSource;
use crate::store::JokeStore;
use log::{debug, info};

/// Load state of a joke list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Waiting for (or running) the fetch loop.
    Loading,
    /// Store holds a complete set.
    Ready,
    /// Last fetch loop failed.
    Failed(FetchError),
}

/// One joke as handed to a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JokeView {
    pub id: JokeId,
    pub text: String,
    pub votes: i64,
}

/// Render-ready snapshot of a joke list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JokeListView {
    Loading,
    /// Jokes in display order, highest votes first.
    Ready { jokes: Vec<JokeView> },
    Failed { message: String },
}

/// Joke list session over a joke source.
pub struct JokeList<S: JokeSource> {
    source: S,
    target: u32,
    max_attempts: Option<u32>,
    store: JokeStore,
    state: LoadState,
    last_stats: Option<FetchStats>,
}

/// Counters of the most recent successful fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchStats {
    pub requests: u32,
    pub duplicates: u32,
}

impl<S: JokeSource> JokeList<S> {
    /// Creates a session in `Loading` state.
    ///
    /// # Errors
    /// - Returns `ConfigError` when `config.validate()` fails.
    pub fn new(source: S, config: &JokeListConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            source,
            target: config.num_jokes_to_get,
            max_attempts: config.max_attempts(),
            store: JokeStore::new(),
            state: LoadState::Loading,
            last_stats: None,
        })
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn store(&self) -> &JokeStore {
        &self.store
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn last_fetch_stats(&self) -> Option<FetchStats> {
        self.last_stats
    }

    /// Runs the fetch loop when `Loading`; otherwise does nothing.
    ///
    /// # Contract
    /// - Success: store replaced, state `Ready`.
    /// - Failure: store left as it was, state `Failed`, error returned.
    pub fn load(&mut self) -> Result<(), FetchError> {
        if self.state != LoadState::Loading {
            debug!(
                "event=load_skipped module=service status=ok state={}",
                state_name(&self.state)
            );
            return Ok(());
        }

        match fetch_unique_jokes(&self.source, self.target, self.max_attempts) {
            Ok(FetchOutcome {
                jokes,
                requests,
                duplicates,
            }) => {
                self.store.replace_all(jokes);
                self.last_stats = Some(FetchStats {
                    requests,
                    duplicates,
                });
                self.state = LoadState::Ready;
                Ok(())
            }
            Err(err) => {
                self.state = LoadState::Failed(err.clone());
                Err(err)
            }
        }
    }

    /// Adds `delta` to the votes of `id`; unknown ids are ignored.
    pub fn vote(&mut self, id: &str, delta: i64) -> bool {
        let applied = self.store.vote(id, delta);
        if applied {
            debug!(
                "event=vote_applied module=service status=ok id={} delta={}",
                id, delta
            );
        } else {
            debug!(
                "event=vote_ignored module=service status=ok id={} delta={}",
                id, delta
            );
        }
        applied
    }

    /// Applies one user vote in `direction`.
    pub fn vote_in(&mut self, id: &str, direction: VoteDirection) -> bool {
        self.vote(id, direction.delta())
    }

    /// Clears the store and moves to `Loading`.
    pub fn reset(&mut self) {
        info!(
            "event=jokes_reset module=service status=ok dropped={} from={}",
            self.store.len(),
            state_name(&self.state)
        );
        self.store.clear();
        self.last_stats = None;
        self.state = LoadState::Loading;
    }

    /// Resets and immediately reloads.
    pub fn refresh(&mut self) -> Result<(), FetchError> {
        self.reset();
        self.load()
    }

    /// Id of the joke at `index` in display order.
    pub fn id_at_display_index(&self, index: usize) -> Option<JokeId> {
        self.store
            .sorted_for_display()
            .get(index)
            .map(|record| record.id.clone())
    }

    /// Snapshot for renderers, jokes already in display order.
    pub fn view(&self) -> JokeListView {
        match &self.state {
            LoadState::Loading => JokeListView::Loading,
            LoadState::Ready => JokeListView::Ready {
                jokes: self
                    .store
                    .sorted_for_display()
                    .into_iter()
                    .map(|record| JokeView {
                        id: record.id.clone(),
                        text: record.text.clone(),
                        votes: record.votes,
                    })
                    .collect(),
            },
            LoadState::Failed(err) => JokeListView::Failed {
                message: err.to_string(),
            },
        }
    }
}

fn state_name(state: &LoadState) -> &'static str {
    match state {
        LoadState::Loading => "loading",
        LoadState::Ready => "ready",
        LoadState::Failed(_) => "failed",
    }
}
