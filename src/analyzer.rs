use crate::normalizer::Normalizer;
use crate::resources::LexicalResources;
use crate::scorer::{Scorer, SentimentResult};

/// One analyzed input: what was typed, what survived cleanup, and the scores.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub original: String,
    pub cleaned: String,
    pub result: SentimentResult,
}

/// The Normalizer -> Scorer pipeline over a shared set of lexical resources.
pub struct Analyzer<'a> {
    normalizer: Normalizer<'a>,
    scorer: Scorer<'a>,
}

impl<'a> Analyzer<'a> {
    pub fn new(resources: &'a LexicalResources) -> Self {
        Self {
            normalizer: Normalizer::new(&resources.stopwords, &resources.lemmatizer),
            scorer: Scorer::new(&resources.polarity, &resources.subjectivity),
        }
    }

    pub fn normalize(&self, text: &str) -> String {
        self.normalizer.normalize(text)
    }

    pub fn score(&self, cleaned: &str) -> SentimentResult {
        self.scorer.score(cleaned)
    }

    pub fn analyze(&self, text: &str) -> Analysis {
        let cleaned = self.normalize(text);
        let result = self.score(&cleaned);
        Analysis {
            original: text.to_string(),
            cleaned,
            result,
        }
    }
}
