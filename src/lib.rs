//! Lexicon based sentiment analysis.
//!
//! Text flows through a [`normalizer::Normalizer`] (lowercase, strip
//! punctuation, drop stopwords, lemmatize) into a [`scorer::Scorer`] that
//! produces a polarity label, compound and component scores, and a
//! subjectivity label. [`batch::BatchRunner`] and [`session::Session`] feed
//! that pipeline from a file or an interactive prompt.

pub mod analyzer;
pub mod batch;
pub mod config;
pub mod error;
pub mod normalizer;
pub mod resources;
pub mod scorer;
pub mod session;

pub use analyzer::{Analysis, Analyzer};
pub use error::{BatchError, ResourceError};
pub use resources::LexicalResources;
pub use scorer::{SentimentLabel, SentimentResult, SubjectivityLabel};
