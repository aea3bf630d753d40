#![allow(dead_code)]

use jokelist_core::{JokePayload, JokeSource, SourceError, SourceResult};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

/// Replays a fixed sequence of responses, then fails with a transport error.
pub struct ScriptedSource {
    responses: RefCell<VecDeque<SourceResult<JokePayload>>>,
    calls: Cell<u32>,
}

impl ScriptedSource {
    pub fn from_ids(ids: &[&str]) -> Self {
        Self::from_results(
            ids.iter()
                .map(|id| Ok(JokePayload::new(*id, format!("joke {id}"))))
                .collect(),
        )
    }

    pub fn from_results(responses: Vec<SourceResult<JokePayload>>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
            calls: Cell::new(0),
        }
    }

    /// Appends more responses after construction.
    pub fn push_ids(&self, ids: &[&str]) {
        let mut responses = self.responses.borrow_mut();
        for id in ids {
            responses.push_back(Ok(JokePayload::new(*id, format!("joke {id}"))));
        }
    }

    pub fn calls(&self) -> u32 {
        self.calls.get()
    }

    pub fn remaining(&self) -> usize {
        self.responses.borrow().len()
    }
}

impl JokeSource for ScriptedSource {
    fn fetch_joke(&self) -> SourceResult<JokePayload> {
        self.calls.set(self.calls.get() + 1);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(SourceError::Transport("script exhausted".to_string())))
    }
}
