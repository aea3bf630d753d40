//! Plain-text rendering of a joke list snapshot.

use jokelist_core::{JokeListView, JokeView};

/// Renders the whole view, one joke per line in display order.
pub fn render_view(view: &JokeListView) -> String {
    match view {
        JokeListView::Loading => "Loading jokes...".to_string(),
        JokeListView::Ready { jokes } => render_jokes(jokes),
        JokeListView::Failed { message } => {
            format!("Could not load jokes: {message}\nType `n` to try again.")
        }
    }
}

fn render_jokes(jokes: &[JokeView]) -> String {
    let mut out = String::from("[n] Get New Jokes");
    if jokes.is_empty() {
        out.push_str("\n(no jokes)");
    }
    for (position, joke) in jokes.iter().enumerate() {
        out.push('\n');
        out.push_str(&render_joke(position + 1, joke));
    }
    out
}

fn render_joke(number: usize, joke: &JokeView) -> String {
    let text = joke.text.replace(['\r', '\n'], " ");
    format!("{number:>3}. [{:>4}] {text}", joke.votes)
}
