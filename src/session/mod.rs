mod command;
mod repl;

pub use command::Command;
pub use repl::{write_batch_error, Session, PROMPT};
