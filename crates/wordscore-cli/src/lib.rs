// wordscore-cli: argument handling, logging setup and output rendering for
// the `wordscore` binary.

use std::ffi::OsString;

use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use wordscore::{WordScoreError, default_pipeline, target_length};

/// Long flags also accepted with a single leading dash (`-word`, `-length=6`).
const SINGLE_DASH_FLAGS: &[&str] = &["word", "length", "count", "debug", "format", "help"];

/// Generate short, readable identifier candidates from a word or phrase.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "wordscore", version)]
pub struct Args {
    /// Word to generate combination strings from
    #[arg(long, default_value = "abc")]
    pub word: String,

    /// Length of combination strings
    #[arg(long, default_value_t = 4, allow_negative_numbers = true)]
    pub length: i64,

    /// Number of candidates to generate
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    pub count: i64,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub debug: LogLevel,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Quoted)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Quoted, comma-separated candidates on one line
    Quoted,
    /// A JSON report
    Json,
}

/// Error type for a CLI run.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    WordScore(#[from] WordScoreError),
    #[error("failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

/// JSON output of one run.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub word: &'a str,
    pub length: usize,
    pub candidates: &'a [String],
}

/// Rewrite single-dash long flags (`-word`, `-count=5`) to the double-dash
/// form clap expects. Everything else, including arguments that are not
/// valid UTF-8, passes through unchanged.
pub fn normalize_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(|arg| {
            let arg = arg.into();
            let Some(text) = arg.to_str() else {
                return arg;
            };
            let Some(rest) = text.strip_prefix('-') else {
                return arg;
            };
            let name = rest.split_once('=').map_or(rest, |(name, _)| name);
            if SINGLE_DASH_FLAGS.contains(&name) {
                OsString::from(format!("-{text}"))
            } else {
                arg
            }
        })
        .collect()
}

/// Install the stderr log subscriber. `RUST_LOG`, when set, wins over
/// `level`.
pub fn init_logging(level: LogLevel) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from(level).into())
        .from_env_lossy();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Render candidates as `"A", "B", "C"`.
pub fn render_quoted(candidates: &[String]) -> Result<String, serde_json::Error> {
    let quoted = candidates
        .iter()
        .map(serde_json::to_string)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(quoted.join(", "))
}

/// Run the default pipeline for `args` and render the result.
pub fn run(args: &Args) -> Result<String, CliError> {
    let length = target_length(args.length)?;
    let count = usize::try_from(args.count).unwrap_or(0);
    debug!(word = %args.word, length, count, "run");

    let candidates = default_pipeline(count).run(&args.word, length)?;
    let output = match args.format {
        OutputFormat::Quoted => render_quoted(&candidates)?,
        OutputFormat::Json => serde_json::to_string(&Report {
            word: &args.word,
            length,
            candidates: &candidates,
        })?,
    };
    Ok(output)
}
