use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use super::{Lemmatizer, StopwordSet};

/// Anything that is neither a word character nor whitespace.
static NON_WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("static regex"));

/// Lowercase with Unicode rules, independent of the process locale.
pub fn lowercase(text: &str) -> String {
    text.to_lowercase()
}

/// Remove punctuation and symbols. Removed characters are not replaced, so
/// `don't` becomes `dont`.
pub fn strip_punctuation(text: &str) -> String {
    NON_WORD_REGEX.replace_all(text, "").into_owned()
}

/// Split on whitespace, discarding empty tokens.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Deterministic text cleanup feeding the scorer.
pub struct Normalizer<'a> {
    stopwords: &'a StopwordSet,
    lemmatizer: &'a Lemmatizer,
}

impl<'a> Normalizer<'a> {
    pub fn new(stopwords: &'a StopwordSet, lemmatizer: &'a Lemmatizer) -> Self {
        Self {
            stopwords,
            lemmatizer,
        }
    }

    /// Lowercase, strip punctuation, drop stopwords and lemmatize, returning
    /// the surviving tokens joined by single spaces. Never fails; text with
    /// nothing left to score yields an empty string.
    pub fn normalize(&self, text: &str) -> String {
        self.tokens(text).join(" ")
    }

    pub fn tokens(&self, text: &str) -> Vec<String> {
        let lowered = lowercase(text);
        let stripped = strip_punctuation(&lowered);

        let tokens: Vec<String> = tokenize(&stripped)
            .into_iter()
            .filter(|t| !self.stopwords.contains(t))
            .map(|t| self.lemmatizer.lemmatize(t))
            .collect();

        trace!(input = text, tokens = ?tokens, "normalized");
        tokens
    }
}
