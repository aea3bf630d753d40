mod common;

use common::ScriptedSource;
use jokelist_core::{
    AttemptLimit, FetchError, JokeList, JokeListConfig, JokeListView, LoadState, SourceError,
    VoteDirection,
};

fn config(count: u32) -> JokeListConfig {
    JokeListConfig {
        num_jokes_to_get: count,
        ..JokeListConfig::default()
    }
}

#[test]
fn load_moves_loading_to_ready() {
    let source = ScriptedSource::from_ids(&["a", "b", "c", "d", "e"]);
    let mut list = JokeList::new(&source, &config(5)).unwrap();
    assert!(list.is_loading());

    list.load().unwrap();

    assert_eq!(list.state(), &LoadState::Ready);
    assert_eq!(list.store().len(), 5);
    let stats = list.last_fetch_stats().unwrap();
    assert_eq!(stats.requests, 5);
    assert_eq!(stats.duplicates, 0);
}

#[test]
fn reset_while_ready_clears_and_refetches() {
    let source = ScriptedSource::from_ids(&["a", "b", "c", "d", "e"]);
    let mut list = JokeList::new(&source, &config(5)).unwrap();
    list.load().unwrap();
    list.vote("a", 3);

    list.reset();

    assert!(list.store().is_empty());
    assert_eq!(list.state(), &LoadState::Loading);
    assert_eq!(list.view(), JokeListView::Loading);

    source.push_ids(&["f", "g", "h", "i", "j"]);
    list.load().unwrap();

    assert_eq!(list.state(), &LoadState::Ready);
    assert_eq!(source.calls(), 10);
    let ids: Vec<&str> = list.store().records().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["f", "g", "h", "i", "j"]);
    assert!(list.store().records().iter().all(|r| r.votes == 0));
}

#[test]
fn refresh_resets_and_loads_in_one_step() {
    let source = ScriptedSource::from_ids(&["a", "b", "c", "d"]);
    let mut list = JokeList::new(&source, &config(2)).unwrap();
    list.load().unwrap();

    list.refresh().unwrap();

    assert_eq!(list.state(), &LoadState::Ready);
    let ids: Vec<&str> = list.store().records().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["c", "d"]);
}

#[test]
fn fetch_failure_enters_failed_with_empty_store() {
    let source = ScriptedSource::from_results(vec![Err(SourceError::Transport(
        "connection refused".to_string(),
    ))]);
    let mut list = JokeList::new(&source, &config(3)).unwrap();

    let err = list.load().unwrap_err();

    assert!(matches!(err, FetchError::Source(SourceError::Transport(_))));
    assert!(matches!(list.state(), LoadState::Failed(_)));
    assert!(list.store().is_empty());
    match list.view() {
        JokeListView::Failed { message } => assert!(message.contains("connection refused")),
        other => panic!("expected failed view, got {other:?}"),
    }
}

#[test]
fn failed_list_recovers_through_reset() {
    let source = ScriptedSource::from_results(vec![Err(SourceError::Status(503))]);
    let mut list = JokeList::new(&source, &config(1)).unwrap();
    assert!(list.load().is_err());

    // Load is a no-op outside `Loading`.
    list.load().unwrap();
    assert_eq!(source.calls(), 1);

    source.push_ids(&["z"]);
    list.refresh().unwrap();
    assert_eq!(list.state(), &LoadState::Ready);
    assert_eq!(list.store().len(), 1);
}

#[test]
fn view_lists_jokes_in_vote_order() {
    let source = ScriptedSource::from_ids(&["1", "2"]);
    let mut list = JokeList::new(&source, &config(2)).unwrap();
    list.load().unwrap();
    list.vote("2", 5);

    list.vote("1", 10);

    match list.view() {
        JokeListView::Ready { jokes } => {
            let summary: Vec<(&str, i64)> =
                jokes.iter().map(|j| (j.id.as_str(), j.votes)).collect();
            assert_eq!(summary, vec![("1", 10), ("2", 5)]);
            assert_eq!(jokes[0].text, "joke 1");
        }
        other => panic!("expected ready view, got {other:?}"),
    }
}

#[test]
fn vote_directions_round_trip() {
    let source = ScriptedSource::from_ids(&["a"]);
    let mut list = JokeList::new(&source, &config(1)).unwrap();
    list.load().unwrap();

    assert!(list.vote_in("a", VoteDirection::Up));
    assert!(list.vote_in("a", VoteDirection::Down));
    assert_eq!(list.store().get("a").unwrap().votes, 0);
    assert!(!list.vote_in("missing", VoteDirection::Up));
}

#[test]
fn default_attempt_cap_bounds_constant_source() {
    let ids = vec!["same"; 100];
    let source = ScriptedSource::from_ids(&ids);
    let mut list = JokeList::new(&source, &config(2)).unwrap();

    let err = list.load().unwrap_err();

    assert_eq!(
        err,
        FetchError::AttemptsExhausted {
            target: 2,
            collected: 1,
            attempts: 20,
        }
    );
    assert_eq!(source.calls(), 20);
}

#[test]
fn fixed_attempt_limit_is_applied() {
    let source = ScriptedSource::from_ids(&["a", "a", "a", "a"]);
    let config = JokeListConfig {
        num_jokes_to_get: 2,
        attempt_limit: AttemptLimit::Fixed(2),
        ..JokeListConfig::default()
    };
    let mut list = JokeList::new(&source, &config).unwrap();

    assert!(matches!(
        list.load(),
        Err(FetchError::AttemptsExhausted { attempts: 2, .. })
    ));
}
