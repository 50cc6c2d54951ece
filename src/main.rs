use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use sentiment_analyzer::batch::BatchRunner;
use sentiment_analyzer::config::{AppConfig, Cli};
use sentiment_analyzer::session::{write_batch_error, Session};
use sentiment_analyzer::{Analyzer, LexicalResources};

fn main() -> anyhow::Result<ExitCode> {
    let config = AppConfig::from(Cli::parse());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let resources = match &config.resources {
        Some(path) => LexicalResources::load(path)
            .with_context(|| format!("cannot load lexical resources from {}", path.display()))?,
        None => LexicalResources::builtin(),
    };

    let analyzer = Analyzer::new(&resources);
    let runner = BatchRunner::new(&analyzer, config.output.clone());

    if let Some(input) = &config.batch {
        info!(input = %input.display(), "running single batch");
        return match runner.run(input) {
            Ok(summary) => {
                println!(
                    "Batch processing complete! Results saved to '{}'.",
                    summary.output.display()
                );
                Ok(ExitCode::SUCCESS)
            }
            Err(err) => {
                write_batch_error(&mut io::stdout(), &err)?;
                Ok(ExitCode::FAILURE)
            }
        };
    }

    let stdin = io::stdin();
    let mut session = Session::new(&analyzer, &runner, stdin.lock(), io::stdout());
    session.run()?;

    Ok(ExitCode::SUCCESS)
}
