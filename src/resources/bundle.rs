use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ResourceError;
use crate::scorer::SubjectivityEntry;

/// On-disk resource bundle. Every field is optional; an absent field keeps
/// the builtin resource, a present one replaces it wholesale.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceBundle {
    pub stopwords: Option<Vec<String>>,
    pub lemma_exceptions: Option<HashMap<String, String>>,
    pub nouns: Option<Vec<String>>,
    pub polarity: Option<HashMap<String, f64>>,
    /// Tab separated lexicon (`word<TAB>mean<TAB>...`), relative to the bundle.
    pub polarity_file: Option<PathBuf>,
    pub boosters: Option<HashMap<String, f64>>,
    pub negations: Option<Vec<String>>,
    pub subjectivity: Option<HashMap<String, SubjectivityEntry>>,
}

impl ResourceBundle {
    pub fn from_file(path: &Path) -> Result<Self, ResourceError> {
        let text = fs::read_to_string(path).map_err(|source| ResourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ResourceError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Read a tab separated valence lexicon. Only the first two columns are used.
pub fn read_valence_file(path: &Path) -> Result<HashMap<String, f64>, ResourceError> {
    let text = fs::read_to_string(path).map_err(|source| ResourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_valence_lexicon(&text, path)
}

pub fn parse_valence_lexicon(text: &str, path: &Path) -> Result<HashMap<String, f64>, ResourceError> {
    let mut valences = HashMap::new();

    for (i, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = line.split('\t');
        let word = fields.next().unwrap_or_default().trim();
        let malformed = |reason: String| ResourceError::Malformed {
            path: path.to_path_buf(),
            line: i + 1,
            reason,
        };

        if word.is_empty() {
            return Err(malformed("missing word".to_string()));
        }
        let raw = fields
            .next()
            .ok_or_else(|| malformed(format!("missing valence for '{word}'")))?;
        let valence = raw
            .trim()
            .parse::<f64>()
            .map_err(|e| malformed(format!("bad valence '{}': {e}", raw.trim())))?;
        if !valence.is_finite() {
            return Err(malformed(format!("non-finite valence '{}'", raw.trim())));
        }

        valences.insert(word.to_lowercase(), valence);
    }

    Ok(valences)
}
