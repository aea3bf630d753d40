//! Line commands typed at the joke list prompt.

use jokelist_core::VoteDirection;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Vote on the joke at a zero-based display index.
    Vote {
        index: usize,
        direction: VoteDirection,
    },
    NewJokes,
    Redraw,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Unknown(String),
    MissingNumber,
    InvalidNumber(String),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown(input) => write!(f, "unknown command `{input}`; type `h` for help"),
            Self::MissingNumber => write!(f, "which joke? add its number, e.g. `u 1`"),
            Self::InvalidNumber(value) => {
                write!(f, "`{value}` is not a joke number; numbers start at 1")
            }
        }
    }
}

impl Error for CommandError {}

pub const HELP: &str = "\
commands:
  u <n>, +<n>   upvote joke n
  d <n>, -<n>   downvote joke n
  n, new        get new jokes
  h, help       show this help
  q, quit       exit";

/// Parses one prompt line.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(Command::Redraw);
    }

    if let Some(rest) = trimmed.strip_prefix('+') {
        return parse_vote(rest, VoteDirection::Up);
    }
    if let Some(rest) = trimmed.strip_prefix('-') {
        return parse_vote(rest, VoteDirection::Down);
    }

    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let word = parts.next().unwrap_or_default().to_ascii_lowercase();
    let rest = parts.next().unwrap_or_default();

    match word.as_str() {
        "u" | "up" => parse_vote(rest, VoteDirection::Up),
        "d" | "down" => parse_vote(rest, VoteDirection::Down),
        "n" | "new" => Ok(Command::NewJokes),
        "h" | "help" | "?" => Ok(Command::Help),
        "q" | "quit" | "exit" => Ok(Command::Quit),
        _ => Err(CommandError::Unknown(trimmed.to_string())),
    }
}

fn parse_vote(rest: &str, direction: VoteDirection) -> Result<Command, CommandError> {
    let value = rest.trim();
    if value.is_empty() {
        return Err(CommandError::MissingNumber);
    }
    match value.parse::<usize>() {
        Ok(number) if number >= 1 => Ok(Command::Vote {
            index: number - 1,
            direction,
        }),
        _ => Err(CommandError::InvalidNumber(value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_command, Command, CommandError};
    use jokelist_core::VoteDirection;

    #[test]
    fn vote_forms_parse_to_zero_based_index() {
        let up = Command::Vote {
            index: 1,
            direction: VoteDirection::Up,
        };
        assert_eq!(parse_command("u 2"), Ok(up));
        assert_eq!(parse_command("UP 2"), Ok(up));
        assert_eq!(parse_command("+2"), Ok(up));
        assert_eq!(parse_command(" + 2 "), Ok(up));

        let down = Command::Vote {
            index: 0,
            direction: VoteDirection::Down,
        };
        assert_eq!(parse_command("d 1"), Ok(down));
        assert_eq!(parse_command("-1"), Ok(down));
    }

    #[test]
    fn keywords_parse() {
        assert_eq!(parse_command("n"), Ok(Command::NewJokes));
        assert_eq!(parse_command("new"), Ok(Command::NewJokes));
        assert_eq!(parse_command("?"), Ok(Command::Help));
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
        assert_eq!(parse_command("   "), Ok(Command::Redraw));
    }

    #[test]
    fn bad_numbers_are_reported() {
        assert_eq!(parse_command("u"), Err(CommandError::MissingNumber));
        assert_eq!(
            parse_command("u 0"),
            Err(CommandError::InvalidNumber("0".to_string()))
        );
        assert_eq!(
            parse_command("-x"),
            Err(CommandError::InvalidNumber("x".to_string()))
        );
    }

    #[test]
    fn unknown_word_is_reported() {
        assert_eq!(
            parse_command("dance"),
            Err(CommandError::Unknown("dance".to_string()))
        );
    }
}
