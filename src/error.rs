use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Recoverable failures of a batch run. The session reports them and keeps
/// prompting.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("File '{}' not found.", .0.display())]
    FileNotFound(PathBuf),

    #[error("{0}")]
    Io(#[from] io::Error),
}

/// Lexical resources could not be loaded. Always fatal at startup.
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("failed to read resource file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse resource bundle {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{}:{line}: {reason}", path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("resource '{resource}' has a non-finite value for '{word}'")]
    NonFinite { resource: &'static str, word: String },

    #[error("resource '{0}' is empty")]
    Empty(&'static str),
}
