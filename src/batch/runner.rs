use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::report::{render_report, ReportLine};
use crate::analyzer::Analyzer;
use crate::error::BatchError;

pub const DEFAULT_OUTPUT: &str = "output.txt";

/// Outcome of a successful batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub lines: usize,
    pub output: PathBuf,
}

/// Scores every non-blank line of a file and writes one report.
pub struct BatchRunner<'a> {
    analyzer: &'a Analyzer<'a>,
    output: PathBuf,
}

impl<'a> BatchRunner<'a> {
    pub fn new(analyzer: &'a Analyzer<'a>, output: impl Into<PathBuf>) -> Self {
        Self {
            analyzer,
            output: output.into(),
        }
    }

    /// Build the report lines for `contents` without touching the filesystem.
    /// Blank lines are skipped but still count towards line numbers.
    pub fn process(&self, contents: &str) -> Vec<ReportLine> {
        contents
            .lines()
            .enumerate()
            .filter_map(|(i, line)| {
                let line = line.trim();
                if line.is_empty() {
                    return None;
                }
                let analysis = self.analyzer.analyze(line);
                debug!(line = i + 1, label = %analysis.result.label, "processed");
                Some(ReportLine {
                    index: i + 1,
                    original: analysis.original,
                    result: analysis.result,
                })
            })
            .collect()
    }

    /// The report is written in a single call once every line is scored, so a
    /// failure while reading leaves any earlier report untouched.
    pub fn run(&self, input: &Path) -> Result<BatchSummary, BatchError> {
        if !input.is_file() {
            return Err(BatchError::FileNotFound(input.to_path_buf()));
        }

        let contents = fs::read_to_string(input)?;
        let lines = self.process(&contents);
        fs::write(&self.output, render_report(&lines))?;

        info!(
            input = %input.display(),
            output = %self.output.display(),
            lines = lines.len(),
            "batch complete"
        );
        Ok(BatchSummary {
            lines: lines.len(),
            output: self.output.clone(),
        })
    }
}
