use std::collections::HashMap;

use serde::Deserialize;

/// Per-word subjectivity entry. An `intensity` other than `1.0` marks the
/// word as a modifier ("very", "extremely") that scales the next word.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SubjectivityEntry {
    pub subjectivity: f64,
    #[serde(default = "default_intensity")]
    pub intensity: f64,
}

fn default_intensity() -> f64 {
    1.0
}

impl SubjectivityEntry {
    pub fn new(subjectivity: f64, intensity: f64) -> Self {
        Self {
            subjectivity,
            intensity,
        }
    }

    pub fn is_modifier(&self) -> bool {
        (self.intensity - 1.0).abs() > f64::EPSILON
    }
}

#[derive(Debug, Clone, Default)]
pub struct SubjectivityLexicon {
    entries: HashMap<String, SubjectivityEntry>,
}

impl SubjectivityLexicon {
    pub fn new(entries: HashMap<String, SubjectivityEntry>) -> Self {
        Self { entries }
    }

    pub fn get(&self, word: &str) -> Option<&SubjectivityEntry> {
        self.entries.get(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Mean subjectivity of the opinion words in a text.
pub struct SubjectivityScorer<'a> {
    lexicon: &'a SubjectivityLexicon,
}

impl<'a> SubjectivityScorer<'a> {
    pub fn new(lexicon: &'a SubjectivityLexicon) -> Self {
        Self { lexicon }
    }

    /// Returns a value in `[0, 1]`; `0.0` when no lexicon word occurs.
    pub fn subjectivity(&self, text: &str) -> f64 {
        let words: Vec<String> = text
            .split_whitespace()
            .map(|w| {
                w.trim_matches(|c: char| !c.is_alphanumeric())
                    .to_lowercase()
            })
            .filter(|w| !w.is_empty())
            .collect();

        let mut assessments: Vec<f64> = Vec::new();
        let mut multiplier: Option<f64> = None;

        for (i, word) in words.iter().enumerate() {
            let Some(entry) = self.lexicon.get(word) else {
                multiplier = None;
                continue;
            };

            let next_is_opinion = words
                .get(i + 1)
                .is_some_and(|next| self.lexicon.get(next).is_some());
            if entry.is_modifier() && next_is_opinion {
                multiplier = Some(multiplier.unwrap_or(1.0) * entry.intensity);
                continue;
            }

            let scaled = entry.subjectivity * multiplier.take().unwrap_or(1.0);
            assessments.push(scaled.clamp(0.0, 1.0));
        }

        if assessments.is_empty() {
            return 0.0;
        }
        let mean = assessments.iter().sum::<f64>() / assessments.len() as f64;
        mean.clamp(0.0, 1.0)
    }
}
