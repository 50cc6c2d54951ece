use std::collections::{HashMap, HashSet};

/// Noun suffix detachment rules, tried in order against every candidate form.
const NOUN_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

/// Dictionary lemmatizer working in noun mode only.
///
/// Irregular forms are looked up in the exception table first. Otherwise the
/// suffix rules generate candidate base forms and only candidates present in
/// the noun vocabulary are accepted; when several survive the shortest wins.
/// Words the dictionary knows nothing about are returned unchanged.
#[derive(Debug, Clone, Default)]
pub struct Lemmatizer {
    exceptions: HashMap<String, Vec<String>>,
    vocabulary: HashSet<String>,
}

impl Lemmatizer {
    pub fn new(exceptions: HashMap<String, Vec<String>>, vocabulary: HashSet<String>) -> Self {
        Self {
            exceptions,
            vocabulary,
        }
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn lemmatize(&self, word: &str) -> String {
        self.lemmas(word)
            .into_iter()
            .min_by_key(|lemma| lemma.chars().count())
            .unwrap_or_else(|| word.to_string())
    }

    /// All accepted base forms for `word`, in discovery order.
    fn lemmas(&self, word: &str) -> Vec<String> {
        if let Some(irregular) = self.exceptions.get(word) {
            let mut forms = Vec::with_capacity(irregular.len() + 1);
            forms.push(word.to_string());
            forms.extend(irregular.iter().cloned());
            let known = self.known(&forms);
            // The exception table is authoritative even without a vocabulary entry.
            return if known.is_empty() {
                irregular.clone()
            } else {
                known
            };
        }

        let mut forms = apply_rules(&[word.to_string()]);
        let mut candidates = Vec::with_capacity(forms.len() + 1);
        candidates.push(word.to_string());
        candidates.extend(forms.iter().cloned());

        let found = self.known(&candidates);
        if !found.is_empty() {
            return found;
        }

        while !forms.is_empty() {
            forms = apply_rules(&forms);
            let found = self.known(&forms);
            if !found.is_empty() {
                return found;
            }
        }

        Vec::new()
    }

    fn known(&self, forms: &[String]) -> Vec<String> {
        let mut found: Vec<String> = Vec::new();
        for form in forms {
            if self.vocabulary.contains(form) && !found.contains(form) {
                found.push(form.clone());
            }
        }
        found
    }
}

/// Every form produced by one rule application, without duplicates.
fn apply_rules(forms: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    forms
        .iter()
        .flat_map(|form| {
            NOUN_SUBSTITUTIONS.iter().filter_map(move |(old, new)| {
                form.strip_suffix(old).map(|stem| format!("{stem}{new}"))
            })
        })
        .filter(|form| seen.insert(form.clone()))
        .collect()
}
