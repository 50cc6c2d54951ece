/// One line of interactive input, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    /// `batch <path>`; the path is everything after the first space, verbatim.
    Batch(String),
    /// `batch` with no path.
    BatchUsage,
    Empty,
    Text(String),
}

impl Command {
    /// Keywords are case-insensitive; the text itself is kept as typed.
    pub fn parse(line: &str) -> Self {
        let input = line.trim();
        let lowered = input.to_lowercase();

        if lowered == "quit" {
            return Command::Quit;
        }
        if lowered.starts_with("batch ") {
            return match input.split_once(' ') {
                Some((_, path)) if !path.is_empty() => Command::Batch(path.to_string()),
                _ => Command::BatchUsage,
            };
        }
        if lowered == "batch" {
            return Command::BatchUsage;
        }
        if input.is_empty() {
            return Command::Empty;
        }
        Command::Text(input.to_string())
    }
}
