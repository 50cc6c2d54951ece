use std::fmt;

use serde::Serialize;

/// Compound scores strictly above this are positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Compound scores strictly below this are negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;
/// Subjectivity strictly above this is subjective.
pub const SUBJECTIVITY_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn from_compound(compound: f64) -> Self {
        if compound > POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if compound < NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SubjectivityLabel {
    Subjective,
    Objective,
}

impl SubjectivityLabel {
    pub fn from_score(subjectivity: f64) -> Self {
        if subjectivity > SUBJECTIVITY_THRESHOLD {
            SubjectivityLabel::Subjective
        } else {
            SubjectivityLabel::Objective
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SubjectivityLabel::Subjective => "Subjective",
            SubjectivityLabel::Objective => "Objective",
        }
    }
}

impl fmt::Display for SubjectivityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Polarity proportions plus the normalized compound score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PolarityScores {
    pub pos: f64,
    pub neg: f64,
    pub neu: f64,
    pub compound: f64,
}

impl PolarityScores {
    /// Scores for text with nothing to weigh.
    pub fn neutral() -> Self {
        Self {
            pos: 0.0,
            neg: 0.0,
            neu: 1.0,
            compound: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentResult {
    pub label: SentimentLabel,
    pub compound: f64,
    pub pos: f64,
    pub neg: f64,
    pub neu: f64,
    pub subjectivity: f64,
    pub subj_label: SubjectivityLabel,
}

impl SentimentResult {
    pub fn new(polarity: PolarityScores, subjectivity: f64) -> Self {
        Self {
            label: SentimentLabel::from_compound(polarity.compound),
            compound: polarity.compound,
            pos: polarity.pos,
            neg: polarity.neg,
            neu: polarity.neu,
            subjectivity,
            subj_label: SubjectivityLabel::from_score(subjectivity),
        }
    }
}
