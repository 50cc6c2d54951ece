mod lemmatizer;
mod pipeline;
mod stopwords;

pub use lemmatizer::Lemmatizer;
pub use pipeline::{lowercase, strip_punctuation, tokenize, Normalizer};
pub use stopwords::StopwordSet;
