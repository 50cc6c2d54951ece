use crate::scorer::SentimentResult;

pub const REPORT_HEADER: &str = "Batch Sentiment Analysis Results";
pub const SEPARATOR_WIDTH: usize = 50;

/// One processed input line.
#[derive(Debug, Clone)]
pub struct ReportLine {
    /// 1-based line number in the input file.
    pub index: usize,
    pub original: String,
    pub result: SentimentResult,
}

impl ReportLine {
    pub fn render(&self) -> String {
        format!(
            "Line {}: '{}' -> Sentiment: {} (Compound: {:.2}, Subjectivity: {})",
            self.index, self.original, self.result.label, self.result.compound, self.result.subj_label
        )
    }
}

/// Full report text: header, `=` separator, then one line per entry. No
/// trailing newline after the last entry.
pub fn render_report(lines: &[ReportLine]) -> String {
    let body: Vec<String> = lines.iter().map(ReportLine::render).collect();
    format!(
        "{}\n{}\n{}",
        REPORT_HEADER,
        "=".repeat(SEPARATOR_WIDTH),
        body.join("\n")
    )
}
