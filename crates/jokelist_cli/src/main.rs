//! Interactive joke list in the terminal.
//!
//! # Responsibility
//! - Parse flags into `JokeListConfig` and bootstrap core logging.
//! - Drive the joke list state machine from prompt commands.
//! - Show a spinner while the fetch loop runs.

mod command;
mod render;

use clap::Parser;
use command::{parse_command, Command, HELP};
use indicatif::{ProgressBar, ProgressStyle};
use jokelist_core::config::{DEFAULT_ENDPOINT, DEFAULT_NUM_JOKES, DEFAULT_TIMEOUT_MS};
use jokelist_core::{
    core_version, default_log_level, init_logging, AttemptLimit, HttpJokeSource, JokeList,
    JokeListConfig, JokeSource,
};
use log::{error, info};
use render::render_view;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

const LOG_DIR_NAME: &str = "jokelist-logs";

#[derive(Parser, Debug)]
#[command(author, version, about = "Vote on dad jokes from icanhazdadjoke.com")]
struct Args {
    /// Number of distinct jokes to load.
    #[arg(long, default_value_t = DEFAULT_NUM_JOKES)]
    count: u32,

    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_MS)]
    timeout_ms: u64,

    /// Maximum requests per load, duplicates included [default: 10 per joke].
    #[arg(long, conflicts_with = "unbounded")]
    max_attempts: Option<u32>,

    /// Keep requesting until enough distinct jokes arrive.
    #[arg(long)]
    unbounded: bool,

    /// trace|debug|info|warn|error [default: debug in debug builds, info otherwise].
    #[arg(long)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files [default: <tmp>/jokelist-logs].
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

impl Args {
    fn to_config(&self) -> JokeListConfig {
        let attempt_limit = match (self.unbounded, self.max_attempts) {
            (true, _) => AttemptLimit::Unbounded,
            (false, Some(cap)) => AttemptLimit::Fixed(cap),
            (false, None) => AttemptLimit::PerJokeDefault,
        };
        JokeListConfig {
            num_jokes_to_get: self.count,
            endpoint: self.endpoint.clone(),
            timeout_ms: self.timeout_ms,
            attempt_limit,
            ..JokeListConfig::default()
        }
    }

    fn log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join(LOG_DIR_NAME))
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = args
        .log_level
        .clone()
        .unwrap_or_else(|| default_log_level().to_string());
    let log_dir = args.log_dir();
    let log_dir = match utf8_log_dir(&log_dir) {
        Ok(dir) => dir,
        Err(message) => {
            eprintln!("jokelist: {message}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = init_logging(&level, log_dir) {
        eprintln!("jokelist: {err}");
        return ExitCode::FAILURE;
    }

    let config = args.to_config();
    let list = HttpJokeSource::from_config(&config)
        .and_then(|source| JokeList::new(source, &config));
    let mut list = match list {
        Ok(list) => list,
        Err(err) => {
            error!("event=config_rejected module=cli status=error error={}", err);
            eprintln!("jokelist: {err}");
            return ExitCode::FAILURE;
        }
    };

    info!(
        "event=cli_start module=cli status=ok core_version={} count={} endpoint={}",
        core_version(),
        config.num_jokes_to_get,
        config.endpoint
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    match run(&mut list, stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_io_failed module=cli status=error error={}", err);
            eprintln!("jokelist: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Rejects non-UTF-8 directories instead of converting them lossily.
fn utf8_log_dir(dir: &Path) -> Result<&str, String> {
    dir.to_str()
        .ok_or_else(|| format!("--log-dir must be valid UTF-8, got `{}`", dir.display()))
}

/// Prompt loop: load when needed, render, apply one command, repeat.
fn run<S, R, W>(list: &mut JokeList<S>, input: R, mut output: W) -> io::Result<()>
where
    S: JokeSource,
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    loop {
        if list.is_loading() {
            load_with_spinner(list);
        }

        writeln!(output, "{}", render_view(&list.view()))?;
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            return Ok(());
        };

        match parse_command(&line?) {
            Ok(Command::Vote { index, direction }) => match list.id_at_display_index(index) {
                Some(id) => {
                    list.vote_in(&id, direction);
                }
                None => writeln!(output, "no joke #{}", index + 1)?,
            },
            Ok(Command::NewJokes) => list.reset(),
            Ok(Command::Redraw) => {}
            Ok(Command::Help) => writeln!(output, "{HELP}")?,
            Ok(Command::Quit) => return Ok(()),
            Err(err) => writeln!(output, "{err}")?,
        }
    }
}

fn load_with_spinner<S: JokeSource>(list: &mut JokeList<S>) {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!("Fetching {} jokes...", list.target()));
    spinner.enable_steady_tick(Duration::from_millis(80));

    // Failure is kept in the list state and rendered by the caller.
    let _ = list.load();

    spinner.finish_and_clear();
}
