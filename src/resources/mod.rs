mod builtin;
mod bundle;

pub use bundle::{parse_valence_lexicon, read_valence_file, ResourceBundle};

use std::collections::{HashMap, HashSet};
use std::path::Path;

use tracing::info;

use crate::error::ResourceError;
use crate::normalizer::{Lemmatizer, StopwordSet};
use crate::scorer::{PolarityLexicon, SubjectivityEntry, SubjectivityLexicon, BOOSTER_INCREMENT};

/// Every lexical resource the pipeline needs. Loaded once at startup and
/// only ever shared by reference afterwards.
#[derive(Debug, Clone)]
pub struct LexicalResources {
    pub stopwords: StopwordSet,
    pub lemmatizer: Lemmatizer,
    pub polarity: PolarityLexicon,
    pub subjectivity: SubjectivityLexicon,
}

impl LexicalResources {
    /// Resources compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            stopwords: StopwordSet::new(builtin::STOPWORDS),
            lemmatizer: Lemmatizer::new(builtin_exceptions(), to_set(builtin::NOUNS)),
            polarity: PolarityLexicon::new(
                builtin_valences(),
                builtin_boosters(),
                to_set(builtin::NEGATIONS),
            ),
            subjectivity: SubjectivityLexicon::new(builtin_subjectivity()),
        }
    }

    /// Builtin resources with the parts named in the bundle at `path` replaced.
    pub fn load(path: &Path) -> Result<Self, ResourceError> {
        let bundle = ResourceBundle::from_file(path)?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        let resources = Self::from_bundle(bundle, base_dir)?;
        info!(
            path = %path.display(),
            stopwords = resources.stopwords.len(),
            nouns = resources.lemmatizer.vocabulary_len(),
            polarity = resources.polarity.len(),
            subjectivity = resources.subjectivity.len(),
            "loaded resource bundle"
        );
        Ok(resources)
    }

    pub fn from_bundle(bundle: ResourceBundle, base_dir: &Path) -> Result<Self, ResourceError> {
        let stopwords = match bundle.stopwords {
            Some(words) => StopwordSet::new(non_empty("stopwords", words)?),
            None => StopwordSet::new(builtin::STOPWORDS),
        };

        let exceptions = match bundle.lemma_exceptions {
            Some(map) => map
                .into_iter()
                .map(|(form, lemma)| (form.to_lowercase(), vec![lemma.to_lowercase()]))
                .collect(),
            None => builtin_exceptions(),
        };
        let nouns = match bundle.nouns {
            Some(words) => non_empty("nouns", words)?
                .into_iter()
                .map(|w| w.to_lowercase())
                .collect(),
            None => to_set(builtin::NOUNS),
        };

        let mut valences = match &bundle.polarity_file {
            Some(file) => read_valence_file(&base_dir.join(file))?,
            None if bundle.polarity.is_some() => HashMap::new(),
            None => builtin_valences(),
        };
        if let Some(inline) = bundle.polarity {
            valences.extend(finite("polarity", inline)?);
        }
        if valences.is_empty() {
            return Err(ResourceError::Empty("polarity"));
        }

        let boosters = match bundle.boosters {
            Some(map) => finite("boosters", map)?,
            None => builtin_boosters(),
        };
        let negations = match bundle.negations {
            Some(words) => words.into_iter().map(|w| w.to_lowercase()).collect(),
            None => to_set(builtin::NEGATIONS),
        };

        let subjectivity = match bundle.subjectivity {
            Some(map) if map.is_empty() => return Err(ResourceError::Empty("subjectivity")),
            Some(map) => {
                let mut entries = HashMap::with_capacity(map.len());
                for (word, entry) in map {
                    if !entry.subjectivity.is_finite() || !entry.intensity.is_finite() {
                        return Err(ResourceError::NonFinite { resource: "subjectivity", word });
                    }
                    entries.insert(word.to_lowercase(), entry);
                }
                entries
            }
            None => builtin_subjectivity(),
        };

        Ok(Self {
            stopwords,
            lemmatizer: Lemmatizer::new(exceptions, nouns),
            polarity: PolarityLexicon::new(valences, boosters, negations),
            subjectivity: SubjectivityLexicon::new(subjectivity),
        })
    }
}

impl Default for LexicalResources {
    fn default() -> Self {
        Self::builtin()
    }
}

fn non_empty(name: &'static str, words: Vec<String>) -> Result<Vec<String>, ResourceError> {
    if words.is_empty() {
        Err(ResourceError::Empty(name))
    } else {
        Ok(words)
    }
}

/// Lowercase the keys of an inline weight map, rejecting NaN and infinities.
fn finite(
    resource: &'static str,
    map: HashMap<String, f64>,
) -> Result<HashMap<String, f64>, ResourceError> {
    let mut weights = HashMap::with_capacity(map.len());
    for (word, weight) in map {
        if !weight.is_finite() {
            return Err(ResourceError::NonFinite { resource, word });
        }
        weights.insert(word.to_lowercase(), weight);
    }
    Ok(weights)
}

fn to_set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn builtin_exceptions() -> HashMap<String, Vec<String>> {
    builtin::NOUN_EXCEPTIONS
        .iter()
        .map(|(form, lemma)| (form.to_string(), vec![lemma.to_string()]))
        .collect()
}

fn builtin_valences() -> HashMap<String, f64> {
    builtin::POLARITY
        .iter()
        .map(|(w, v)| (w.to_string(), *v))
        .collect()
}

fn builtin_boosters() -> HashMap<String, f64> {
    let up = builtin::BOOSTER_INCREASE
        .iter()
        .map(|w| (w.to_string(), BOOSTER_INCREMENT));
    let down = builtin::BOOSTER_DECREASE
        .iter()
        .map(|w| (w.to_string(), -BOOSTER_INCREMENT));
    up.chain(down).collect()
}

fn builtin_subjectivity() -> HashMap<String, SubjectivityEntry> {
    builtin::SUBJECTIVITY
        .iter()
        .map(|(w, s, i)| (w.to_string(), SubjectivityEntry::new(*s, *i)))
        .collect()
}
