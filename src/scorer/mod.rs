mod polarity;
mod subjectivity;
mod types;

pub use polarity::{
    normalize_score, PolarityLexicon, PolarityScorer, BOOSTER_INCREMENT, CAPS_INCREMENT,
    NEGATION_SCALAR, NORMALIZATION_ALPHA,
};
pub use subjectivity::{SubjectivityEntry, SubjectivityLexicon, SubjectivityScorer};
pub use types::{
    PolarityScores, SentimentLabel, SentimentResult, SubjectivityLabel, NEGATIVE_THRESHOLD,
    POSITIVE_THRESHOLD, SUBJECTIVITY_THRESHOLD,
};

use tracing::debug;

/// Runs both lexicon measures over one cleaned text. Stateless between calls.
pub struct Scorer<'a> {
    polarity: PolarityScorer<'a>,
    subjectivity: SubjectivityScorer<'a>,
}

impl<'a> Scorer<'a> {
    pub fn new(polarity: &'a PolarityLexicon, subjectivity: &'a SubjectivityLexicon) -> Self {
        Self {
            polarity: PolarityScorer::new(polarity),
            subjectivity: SubjectivityScorer::new(subjectivity),
        }
    }

    pub fn score(&self, cleaned: &str) -> SentimentResult {
        let polarity = self.polarity.polarity_scores(cleaned);
        let subjectivity = self.subjectivity.subjectivity(cleaned);
        let result = SentimentResult::new(polarity, subjectivity);

        debug!(
            text = cleaned,
            compound = result.compound,
            subjectivity = result.subjectivity,
            label = %result.label,
            "scored"
        );
        result
    }
}
