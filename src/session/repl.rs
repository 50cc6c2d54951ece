use std::io::{self, BufRead, Write};
use std::path::Path;

use tracing::debug;

use super::Command;
use crate::analyzer::{Analysis, Analyzer};
use crate::batch::{BatchRunner, SEPARATOR_WIDTH};
use crate::error::BatchError;

pub const PROMPT: &str = "Enter text or command: ";

/// Read-dispatch loop over any line source and sink.
pub struct Session<'a, R, W> {
    analyzer: &'a Analyzer<'a>,
    runner: &'a BatchRunner<'a>,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(analyzer: &'a Analyzer<'a>, runner: &'a BatchRunner<'a>, input: R, output: W) -> Self {
        Self {
            analyzer,
            runner,
            input,
            output,
        }
    }

    /// Runs until `quit` or end of input. Only failures of the console
    /// streams themselves are returned; batch failures are reported inline.
    pub fn run(&mut self) -> io::Result<()> {
        self.print_banner()?;

        loop {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                debug!("end of input");
                writeln!(self.output)?;
                break;
            }

            match Command::parse(&line) {
                Command::Quit => {
                    writeln!(self.output, "Goodbye!")?;
                    break;
                }
                Command::Batch(path) => {
                    self.run_batch(Path::new(&path))?;
                    self.print_separator()?;
                }
                Command::BatchUsage => {
                    writeln!(self.output, "Usage: batch <file_path>")?;
                }
                Command::Empty => {
                    writeln!(self.output, "Please enter some text or a command.\n")?;
                }
                Command::Text(text) => {
                    let analysis = self.analyzer.analyze(&text);
                    self.print_analysis(&analysis)?;
                    self.print_separator()?;
                }
            }
        }

        Ok(())
    }

    fn run_batch(&mut self, path: &Path) -> io::Result<()> {
        match self.runner.run(path) {
            Ok(summary) => writeln!(
                self.output,
                "Batch processing complete! Results saved to '{}'.",
                summary.output.display()
            ),
            Err(err) => {
                debug!(path = %path.display(), error = %err, "batch failed");
                write_batch_error(&mut self.output, &err)
            }
        }
    }

    fn print_banner(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to the Advanced Sentiment Analysis Tool!")?;
        writeln!(
            self.output,
            "Features: Preprocessing (stopwords, lemmatization), lexicon sentiment, subjectivity detection, and batch file processing."
        )?;
        writeln!(
            self.output,
            "Type 'batch <file_path>' to analyze a file (e.g., 'batch input.txt'). Type 'quit' to exit.\n"
        )
    }

    fn print_analysis(&mut self, analysis: &Analysis) -> io::Result<()> {
        let r = &analysis.result;
        writeln!(self.output, "Original: '{}'", analysis.original)?;
        writeln!(self.output, "Cleaned: '{}'", analysis.cleaned)?;
        writeln!(self.output, "Sentiment: {}", r.label)?;
        writeln!(self.output, "Compound Score: {:.2}", r.compound)?;
        writeln!(
            self.output,
            "Detailed Scores - Pos: {:.2}, Neg: {:.2}, Neu: {:.2}",
            r.pos, r.neg, r.neu
        )?;
        writeln!(
            self.output,
            "Subjectivity: {} (Score: {:.2})",
            r.subj_label, r.subjectivity
        )
    }

    fn print_separator(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}\n", "-".repeat(SEPARATOR_WIDTH))
    }
}

/// User-facing message for a failed batch run.
pub fn write_batch_error<W: Write>(out: &mut W, err: &BatchError) -> io::Result<()> {
    match err {
        BatchError::FileNotFound(_) => writeln!(out, "Error: {err}"),
        BatchError::Io(source) => writeln!(out, "Error processing file: {source}"),
    }
}
