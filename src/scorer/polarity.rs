//! Lexicon and rule based polarity scoring.
//!
//! Each lexicon word carries a valence in roughly `[-4, 4]`. Valences are
//! adjusted by the words around them (boosters, negations, "least", "but",
//! ALL-CAPS emphasis), summed, amplified by `!`/`?` emphasis and squashed into
//! a compound score in `[-1, 1]`.

use std::collections::{HashMap, HashSet};

use super::types::PolarityScores;

/// Valence shift applied by a booster word.
pub const BOOSTER_INCREMENT: f64 = 0.293;
/// Extra emphasis for an ALL-CAPS word in mixed-case text.
pub const CAPS_INCREMENT: f64 = 0.733;
/// Multiplier applied to a negated valence.
pub const NEGATION_SCALAR: f64 = -0.74;
/// Normalization constant for the compound score.
pub const NORMALIZATION_ALPHA: f64 = 15.0;

const EXCLAMATION_WEIGHT: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const QUESTION_WEIGHT: f64 = 0.18;
const MAX_QUESTION_EMPHASIS: f64 = 0.96;

/// Valence lexicon together with the booster and negation word lists.
#[derive(Debug, Clone, Default)]
pub struct PolarityLexicon {
    valences: HashMap<String, f64>,
    boosters: HashMap<String, f64>,
    negations: HashSet<String>,
}

impl PolarityLexicon {
    pub fn new(
        valences: HashMap<String, f64>,
        boosters: HashMap<String, f64>,
        negations: HashSet<String>,
    ) -> Self {
        Self {
            valences,
            boosters,
            negations,
        }
    }

    pub fn valence(&self, word: &str) -> Option<f64> {
        self.valences.get(word).copied()
    }

    pub fn booster(&self, word: &str) -> Option<f64> {
        self.boosters.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.valences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }

    fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word) || word.contains("n't")
    }
}

/// Squash an unbounded valence sum into `[-1, 1]`.
pub fn normalize_score(score: f64) -> f64 {
    let norm = score / (score * score + NORMALIZATION_ALPHA).sqrt();
    norm.clamp(-1.0, 1.0)
}

pub struct PolarityScorer<'a> {
    lexicon: &'a PolarityLexicon,
}

impl<'a> PolarityScorer<'a> {
    pub fn new(lexicon: &'a PolarityLexicon) -> Self {
        Self { lexicon }
    }

    pub fn polarity_scores(&self, text: &str) -> PolarityScores {
        let words: Vec<&str> = text.split_whitespace().map(strip_punctuation_if_word).collect();
        if words.is_empty() {
            return PolarityScores::neutral();
        }

        let lowered: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
        let cap_differential = has_cap_differential(&words);

        let mut sentiments = Vec::with_capacity(words.len());
        for i in 0..words.len() {
            if self.lexicon.booster(&lowered[i]).is_some() {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(self.valence_at(i, &words, &lowered, cap_differential));
        }

        but_check(&lowered, &mut sentiments);
        score_valence(&sentiments, text)
    }

    fn valence_at(&self, i: usize, words: &[&str], lowered: &[String], cap_differential: bool) -> f64 {
        let Some(mut valence) = self.lexicon.valence(&lowered[i]) else {
            return 0.0;
        };

        if cap_differential && is_all_caps(words[i]) {
            if valence > 0.0 {
                valence += CAPS_INCREMENT;
            } else {
                valence -= CAPS_INCREMENT;
            }
        }

        for start in 0..3 {
            if i <= start {
                break;
            }
            let prev = i - start - 1;
            if self.lexicon.valence(&lowered[prev]).is_some() {
                continue;
            }

            let mut shift = self.booster_shift(&lowered[prev], words[prev], valence, cap_differential);
            match start {
                1 => shift *= 0.95,
                2 => shift *= 0.9,
                _ => {}
            }
            valence += shift;
            valence = self.negation_check(valence, lowered, start, i);
        }

        self.least_check(valence, lowered, i)
    }

    fn booster_shift(&self, lowered: &str, original: &str, valence: f64, cap_differential: bool) -> f64 {
        let Some(base) = self.lexicon.booster(lowered) else {
            return 0.0;
        };
        let mut scalar = if valence < 0.0 { -base } else { base };
        if cap_differential && is_all_caps(original) {
            scalar += if valence > 0.0 {
                CAPS_INCREMENT
            } else {
                -CAPS_INCREMENT
            };
        }
        scalar
    }

    fn negation_check(&self, valence: f64, lowered: &[String], start: usize, i: usize) -> f64 {
        let softener = |w: &String| w == "so" || w == "this";
        match start {
            0 => {
                if self.lexicon.is_negation(&lowered[i - 1]) {
                    return valence * NEGATION_SCALAR;
                }
            }
            1 => {
                if lowered[i - 2] == "never" && softener(&lowered[i - 1]) {
                    return valence * 1.25;
                }
                if self.lexicon.is_negation(&lowered[i - 2]) {
                    return valence * NEGATION_SCALAR;
                }
            }
            2 => {
                if lowered[i - 3] == "never"
                    && (softener(&lowered[i - 2]) || softener(&lowered[i - 1]))
                {
                    return valence * 1.25;
                }
                if self.lexicon.is_negation(&lowered[i - 3]) {
                    return valence * NEGATION_SCALAR;
                }
            }
            _ => {}
        }
        valence
    }

    fn least_check(&self, valence: f64, lowered: &[String], i: usize) -> f64 {
        if i == 0 || lowered[i - 1] != "least" || self.lexicon.valence("least").is_some() {
            return valence;
        }
        // "at least" and "very least" are not negations.
        if i > 1 && (lowered[i - 2] == "at" || lowered[i - 2] == "very") {
            return valence;
        }
        valence * NEGATION_SCALAR
    }
}

/// Valence before "but" is halved, after it is boosted by half.
fn but_check(lowered: &[String], sentiments: &mut [f64]) {
    let Some(but_at) = lowered.iter().position(|w| w == "but") else {
        return;
    };
    for (i, s) in sentiments.iter_mut().enumerate() {
        if i < but_at {
            *s *= 0.5;
        } else if i > but_at {
            *s *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
    let questions = text.matches('?').count();
    let question_emphasis = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_WEIGHT,
        _ => MAX_QUESTION_EMPHASIS,
    };
    exclamations as f64 * EXCLAMATION_WEIGHT + question_emphasis
}

fn score_valence(sentiments: &[f64], text: &str) -> PolarityScores {
    if sentiments.is_empty() {
        return PolarityScores::neutral();
    }

    let emphasis = punctuation_emphasis(text);
    let mut sum: f64 = sentiments.iter().sum();
    if sum > 0.0 {
        sum += emphasis;
    } else if sum < 0.0 {
        sum -= emphasis;
    }
    let compound = normalize_score(sum);

    // Shift each valence away from zero so single weak words still count.
    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neu_count = 0.0;
    for &s in sentiments {
        if s > 0.0 {
            pos_sum += s + 1.0;
        } else if s < 0.0 {
            neg_sum += s - 1.0;
        } else {
            neu_count += 1.0;
        }
    }

    if pos_sum > neg_sum.abs() {
        pos_sum += emphasis;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= emphasis;
    }

    let total = pos_sum + neg_sum.abs() + neu_count;
    PolarityScores {
        pos: (pos_sum / total).abs(),
        neg: (neg_sum / total).abs(),
        neu: (neu_count / total).abs(),
        compound,
    }
}

/// Trim leading/trailing punctuation unless that would leave two characters
/// or fewer, which keeps short emoticons intact.
fn strip_punctuation_if_word(token: &str) -> &str {
    let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
    if stripped.chars().count() <= 2 {
        token
    } else {
        stripped
    }
}

fn is_all_caps(word: &str) -> bool {
    word.chars().any(char::is_alphabetic) && !word.chars().any(char::is_lowercase)
}

/// True when some, but not all, words are ALL-CAPS.
fn has_cap_differential(words: &[&str]) -> bool {
    let caps = words.iter().filter(|w| is_all_caps(w)).count();
    caps > 0 && caps < words.len()
}
