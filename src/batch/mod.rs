mod report;
mod runner;

pub use report::{render_report, ReportLine, REPORT_HEADER, SEPARATOR_WIDTH};
pub use runner::{BatchRunner, BatchSummary, DEFAULT_OUTPUT};
