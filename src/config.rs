use std::path::PathBuf;

use clap::Parser;

use crate::batch::DEFAULT_OUTPUT;

/// Interactive and batch sentiment analysis
#[derive(Debug, Parser)]
#[command(name = "sentiment-analyzer")]
#[command(version)]
#[command(about = "Scores text for sentiment polarity and subjectivity", long_about = None)]
pub struct Cli {
    /// JSON resource bundle replacing builtin stopwords, lemmas or lexicons
    #[arg(short, long, value_name = "FILE")]
    pub resources: Option<PathBuf>,

    /// Where batch reports are written
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Analyze this file once and exit instead of starting the prompt
    #[arg(short, long, value_name = "FILE")]
    pub batch: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Settings resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub resources: Option<PathBuf>,
    pub output: PathBuf,
    pub batch: Option<PathBuf>,
    pub verbosity: u8,
}

impl AppConfig {
    /// Log filter used when `RUST_LOG` is not set. Defaults to `warn` so the
    /// prompt on stdout is not interleaved with log lines.
    pub fn log_filter(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            resources: None,
            output: PathBuf::from(DEFAULT_OUTPUT),
            batch: None,
            verbosity: 0,
        }
    }
}

impl From<Cli> for AppConfig {
    fn from(cli: Cli) -> Self {
        Self {
            resources: cli.resources,
            output: cli.output,
            batch: cli.batch,
            verbosity: cli.verbose,
        }
    }
}
