use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use sentiment_analyzer::batch::BatchRunner;
use sentiment_analyzer::resources::ResourceBundle;
use sentiment_analyzer::{Analyzer, BatchError, LexicalResources, ResourceError};

// Helper to write an input file into a scratch directory
fn create_input(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write input file");
    path
}

fn report_lines(report: &str) -> Vec<&str> {
    report.lines().filter(|l| l.starts_with("Line ")).collect()
}

#[cfg(test)]
mod normalizer_tests {
    use super::*;

    #[test]
    fn test_basic_cleanup() {
        let resources = LexicalResources::builtin();
        let analyzer = Analyzer::new(&resources);

        assert_eq!(analyzer.normalize("I love this!"), "love");
        assert_eq!(
            analyzer.normalize("Hello, World! It's GREAT..."),
            "hello world great"
        );
    }

    #[test]
    fn test_plural_nouns_are_lemmatized() {
        let resources = LexicalResources::builtin();
        let analyzer = Analyzer::new(&resources);

        assert_eq!(
            analyzer.normalize("The dogs are barking at the boxes"),
            "dog barking box"
        );
        assert_eq!(analyzer.normalize("Children and their toys"), "child toy");
    }

    #[test]
    fn test_nothing_left_is_empty_string() {
        let resources = LexicalResources::builtin();
        let analyzer = Analyzer::new(&resources);

        assert_eq!(analyzer.normalize(""), "");
        assert_eq!(analyzer.normalize("!!! ... ???"), "");
        assert_eq!(analyzer.normalize("The and of, to"), "");
    }

    #[test]
    fn test_punctuation_removed_without_space() {
        let resources = LexicalResources::builtin();
        let analyzer = Analyzer::new(&resources);

        // The apostrophe is dropped, so "don't" is no longer a stopword.
        assert_eq!(analyzer.normalize("don't"), "dont");
        assert_eq!(analyzer.normalize("e-mail"), "email");
        assert_eq!(analyzer.normalize("snake_case"), "snake_case");
    }

    #[test]
    fn test_unicode_text() {
        let resources = LexicalResources::builtin();
        let analyzer = Analyzer::new(&resources);

        assert_eq!(analyzer.normalize("Café CRÈME!"), "café crème");
        assert_eq!(analyzer.normalize("Price: 42€"), "price 42");
    }

    #[test]
    fn test_output_has_no_uppercase_or_punctuation() {
        let resources = LexicalResources::builtin();
        let analyzer = Analyzer::new(&resources);

        let samples = [
            "THE QUICK, brown fox -- jumped!!",
            "What?! No way... (seriously)",
            "Ünïcödé & \"quotes\" 'here'",
            "tabs\tand\nnewlines;semicolons:colons",
            "$100 @user #tag <html> [brackets] {braces}",
        ];
        for sample in samples {
            let cleaned = analyzer.normalize(sample);
            assert!(
                !cleaned.chars().any(char::is_uppercase),
                "uppercase left in {cleaned:?}"
            );
            assert!(
                cleaned
                    .chars()
                    .all(|c| c.is_alphanumeric() || c == ' ' || c == '_'),
                "punctuation left in {cleaned:?}"
            );
            assert!(!cleaned.contains("  "), "double space in {cleaned:?}");
        }
    }

    #[test]
    fn test_renormalizing_cleaned_text() {
        let resources = LexicalResources::builtin();
        let analyzer = Analyzer::new(&resources);

        let once = analyzer.normalize("Dogs love boxes, and cities love dogs!");
        assert_eq!(once, "dog love box city love dog");
        assert_eq!(analyzer.normalize(&once), once);
    }
}

#[cfg(test)]
mod scorer_tests {
    use super::*;
    use sentiment_analyzer::{SentimentLabel, SubjectivityLabel};

    #[test]
    fn test_positive_and_negative() {
        let resources = LexicalResources::builtin();
        let analyzer = Analyzer::new(&resources);

        let love = analyzer.score("love");
        assert_eq!(love.label, SentimentLabel::Positive);
        assert!((love.compound - 0.6369).abs() < 1e-3);
        assert_eq!(love.subj_label, SubjectivityLabel::Subjective);

        let hate = analyzer.score("hate");
        assert_eq!(hate.label, SentimentLabel::Negative);
        assert!((hate.compound + 0.5719).abs() < 1e-3);
    }

    #[test]
    fn test_neutral_text() {
        let resources = LexicalResources::builtin();
        let analyzer = Analyzer::new(&resources);

        let result = analyzer.score("weather report said rain noon");
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert_eq!(result.compound, 0.0);
        assert_eq!(result.neu, 1.0);
        assert_eq!(result.subjectivity, 0.0);
        assert_eq!(result.subj_label, SubjectivityLabel::Objective);
    }

    #[test]
    fn test_empty_text_is_neutral() {
        let resources = LexicalResources::builtin();
        let analyzer = Analyzer::new(&resources);

        let result = analyzer.score("");
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert_eq!((result.pos, result.neg, result.neu), (0.0, 0.0, 1.0));
        assert_eq!(result.subj_label, SubjectivityLabel::Objective);
    }

    #[test]
    fn test_negation_flips_polarity() {
        let resources = LexicalResources::builtin();
        let analyzer = Analyzer::new(&resources);

        assert_eq!(analyzer.score("good").label, SentimentLabel::Positive);
        assert_eq!(analyzer.score("not good").label, SentimentLabel::Negative);
        assert_eq!(analyzer.score("dont like").label, SentimentLabel::Negative);
    }

    #[test]
    fn test_booster_and_emphasis_raise_intensity() {
        let resources = LexicalResources::builtin();
        let analyzer = Analyzer::new(&resources);

        let plain = analyzer.score("good").compound;
        assert!(analyzer.score("very good").compound > plain);
        assert!(analyzer.score("slightly good").compound < plain);
        assert!(analyzer.score("good!!!").compound > plain);
        assert!(analyzer.score("food GOOD").compound > analyzer.score("food good").compound);
    }

    #[test]
    fn test_but_shifts_weight_to_second_clause() {
        let resources = LexicalResources::builtin();
        let analyzer = Analyzer::new(&resources);

        assert_eq!(analyzer.score("good but bad").label, SentimentLabel::Negative);
        assert_eq!(analyzer.score("bad but good").label, SentimentLabel::Positive);
    }

    #[test]
    fn test_component_scores_sum_to_one() {
        let resources = LexicalResources::builtin();
        let analyzer = Analyzer::new(&resources);

        let texts = [
            "",
            "love",
            "hate",
            "movie great acting terrible",
            "very good food slightly slow service",
            "nothing special",
            "WOW amazing!!!",
            "good but bad",
        ];
        for text in texts {
            let r = analyzer.score(text);
            assert!(
                (r.pos + r.neg + r.neu - 1.0).abs() < 1e-9,
                "components of {text:?} sum to {}",
                r.pos + r.neg + r.neu
            );
            assert!((-1.0..=1.0).contains(&r.compound));
            assert!((0.0..=1.0).contains(&r.subjectivity));
        }
    }

    #[test]
    fn test_classification_boundaries() {
        assert_eq!(SentimentLabel::from_compound(0.05), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_compound(0.0501), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_compound(-0.05), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_compound(-0.0501), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_compound(0.0), SentimentLabel::Neutral);
    }

    #[test]
    fn test_subjectivity_boundaries() {
        assert_eq!(SubjectivityLabel::from_score(0.5), SubjectivityLabel::Objective);
        assert_eq!(SubjectivityLabel::from_score(0.5001), SubjectivityLabel::Subjective);
        assert_eq!(SubjectivityLabel::from_score(0.0), SubjectivityLabel::Objective);
        assert_eq!(SubjectivityLabel::from_score(1.0), SubjectivityLabel::Subjective);
    }

    #[test]
    fn test_scoring_is_stateless() {
        let resources = LexicalResources::builtin();
        let analyzer = Analyzer::new(&resources);

        let first = analyzer.score("terrible service");
        analyzer.score("wonderful amazing perfect");
        assert_eq!(analyzer.score("terrible service"), first);
    }
}

#[cfg(test)]
mod batch_tests {
    use super::*;

    #[test]
    fn test_blank_lines_keep_numbering() {
        let dir = tempfile::tempdir().unwrap();
        let input = create_input(dir.path(), "input.txt", "I love this!\n\nI hate this.\n");
        let output = dir.path().join("output.txt");

        let resources = LexicalResources::builtin();
        let analyzer = Analyzer::new(&resources);
        let runner = BatchRunner::new(&analyzer, &output);

        let summary = runner.run(&input).expect("batch should succeed");
        assert_eq!(summary.lines, 2);
        assert_eq!(summary.output, output);

        let report = fs::read_to_string(&output).unwrap();
        let lines = report_lines(&report);
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "Line 1: 'I love this!' -> Sentiment: Positive (Compound: 0.64, Subjectivity: Subjective)"
        );
        assert_eq!(
            lines[1],
            "Line 3: 'I hate this.' -> Sentiment: Negative (Compound: -0.57, Subjectivity: Subjective)"
        );
    }

    #[test]
    fn test_report_header() {
        let dir = tempfile::tempdir().unwrap();
        let input = create_input(dir.path(), "input.txt", "  The weather report said rain.  \r\n");
        let output = dir.path().join("output.txt");

        let resources = LexicalResources::builtin();
        let analyzer = Analyzer::new(&resources);
        BatchRunner::new(&analyzer, &output).run(&input).unwrap();

        let report = fs::read_to_string(&output).unwrap();
        let mut rows = report.split('\n');
        assert_eq!(rows.next(), Some("Batch Sentiment Analysis Results"));
        assert_eq!(rows.next(), Some("=".repeat(50).as_str()));
        assert_eq!(
            rows.next(),
            Some("Line 1: 'The weather report said rain.' -> Sentiment: Neutral (Compound: 0.00, Subjectivity: Objective)")
        );
        assert_eq!(rows.next(), None);
    }

    #[test]
    fn test_output_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("output.txt");
        fs::write(&output, "stale report\nLine 9: 'old'").unwrap();
        let input = create_input(dir.path(), "input.txt", "great\n");

        let resources = LexicalResources::builtin();
        let analyzer = Analyzer::new(&resources);
        BatchRunner::new(&analyzer, &output).run(&input).unwrap();

        let report = fs::read_to_string(&output).unwrap();
        assert!(!report.contains("stale"));
        assert_eq!(report_lines(&report).len(), 1);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        let output = dir.path().join("output.txt");

        let resources = LexicalResources::builtin();
        let analyzer = Analyzer::new(&resources);
        let err = BatchRunner::new(&analyzer, &output)
            .run(&missing)
            .unwrap_err();

        assert!(matches!(err, BatchError::FileNotFound(ref p) if p == &missing));
        assert!(err.to_string().contains("missing.txt"));
        assert!(!output.exists(), "no report should be created");
    }

    #[test]
    fn test_missing_file_leaves_previous_report() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("output.txt");
        fs::write(&output, "previous").unwrap();

        let resources = LexicalResources::builtin();
        let analyzer = Analyzer::new(&resources);
        let result = BatchRunner::new(&analyzer, &output).run(&dir.path().join("nope.txt"));

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("output.txt");

        let resources = LexicalResources::builtin();
        let analyzer = Analyzer::new(&resources);
        let err = BatchRunner::new(&analyzer, &output)
            .run(dir.path())
            .unwrap_err();

        assert!(matches!(err, BatchError::FileNotFound(_)));
    }

    #[test]
    fn test_invalid_utf8_is_io_failure() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("binary.txt");
        fs::write(&input, [0x66, 0x6f, 0xff, 0xfe, 0x0a]).unwrap();
        let output = dir.path().join("output.txt");

        let resources = LexicalResources::builtin();
        let analyzer = Analyzer::new(&resources);
        let err = BatchRunner::new(&analyzer, &output)
            .run(&input)
            .unwrap_err();

        assert!(matches!(err, BatchError::Io(_)));
        assert!(!output.exists());
    }

    #[test]
    fn test_unwritable_output_is_io_failure() {
        let dir = tempfile::tempdir().unwrap();
        let input = create_input(dir.path(), "input.txt", "fine\n");
        let output = dir.path().join("no_such_dir").join("output.txt");

        let resources = LexicalResources::builtin();
        let analyzer = Analyzer::new(&resources);
        let err = BatchRunner::new(&analyzer, &output)
            .run(&input)
            .unwrap_err();

        assert!(matches!(err, BatchError::Io(_)));
    }
}

#[cfg(test)]
mod resource_tests {
    use super::*;

    #[test]
    fn test_builtin_resources_are_populated() {
        let resources = LexicalResources::builtin();
        assert_eq!(resources.stopwords.len(), 179);
        assert!(resources.stopwords.contains("the"));
        assert!(!resources.polarity.is_empty());
        assert!(!resources.subjectivity.is_empty());
        assert!(resources.polarity.booster("very").is_some());
    }

    #[test]
    fn test_bundle_replaces_stopwords() {
        let dir = tempfile::tempdir().unwrap();
        let bundle = create_input(dir.path(), "bundle.json", r#"{"stopwords": ["love"]}"#);

        let resources = LexicalResources::load(&bundle).expect("bundle should load");
        let analyzer = Analyzer::new(&resources);
        assert_eq!(analyzer.normalize("I love this"), "i this");
        // Untouched resources keep their builtin values.
        assert!(resources.polarity.valence("great").is_some());
    }

    #[test]
    fn test_bundle_with_lexicon_file() {
        let dir = tempfile::tempdir().unwrap();
        create_input(
            dir.path(),
            "lexicon.txt",
            "meh\t-0.8\t0.4\t[-1, -1, 0]\nyay\t2.4\t1.0\n",
        );
        let bundle = create_input(
            dir.path(),
            "bundle.json",
            r#"{"polarity_file": "lexicon.txt", "polarity": {"woohoo": 2.9}}"#,
        );

        let resources = LexicalResources::load(&bundle).unwrap();
        let analyzer = Analyzer::new(&resources);
        assert!(analyzer.score("meh").compound < -0.05);
        assert!(analyzer.score("woohoo").compound > 0.05);
        assert_eq!(analyzer.score("love").compound, 0.0);
    }

    #[test]
    fn test_bundle_lemmas() {
        let dir = tempfile::tempdir().unwrap();
        let bundle = create_input(
            dir.path(),
            "bundle.json",
            r#"{"nouns": ["widget"], "lemma_exceptions": {"gizmi": "gizmo"}}"#,
        );

        let resources = LexicalResources::load(&bundle).unwrap();
        let analyzer = Analyzer::new(&resources);
        assert_eq!(analyzer.normalize("widgets gizmi dogs"), "widget gizmo dogs");
    }

    #[test]
    fn test_missing_bundle_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = LexicalResources::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ResourceError::Io { .. }));
    }

    #[test]
    fn test_malformed_bundle_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let bundle = create_input(dir.path(), "bundle.json", "{ not json");
        let err = LexicalResources::load(&bundle).unwrap_err();
        assert!(matches!(err, ResourceError::Parse { .. }));

        let bundle = create_input(dir.path(), "typo.json", r#"{"stopword": ["a"]}"#);
        assert!(LexicalResources::load(&bundle).is_err());
    }

    #[test]
    fn test_empty_resources_are_rejected() {
        let dir = tempfile::tempdir().unwrap();

        let bundle = create_input(dir.path(), "a.json", r#"{"polarity": {}}"#);
        let err = LexicalResources::load(&bundle).unwrap_err();
        assert!(matches!(err, ResourceError::Empty("polarity")));

        let bundle = create_input(dir.path(), "b.json", r#"{"stopwords": []}"#);
        let err = LexicalResources::load(&bundle).unwrap_err();
        assert!(matches!(err, ResourceError::Empty("stopwords")));
    }

    #[test]
    fn test_non_finite_lexicon_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        create_input(dir.path(), "lexicon.txt", "meh\tNaN\nwow\tinf\n");
        let bundle = create_input(dir.path(), "bundle.json", r#"{"polarity_file": "lexicon.txt"}"#);

        let err = LexicalResources::load(&bundle).unwrap_err();
        assert!(matches!(err, ResourceError::Malformed { line: 1, .. }));
        assert!(err.to_string().contains("non-finite valence 'NaN'"));
    }

    #[test]
    fn test_non_finite_inline_weights_are_rejected() {
        let bundle = ResourceBundle {
            polarity: Some(HashMap::from([("meh".to_string(), f64::NAN)])),
            ..Default::default()
        };
        let err = LexicalResources::from_bundle(bundle, Path::new("")).unwrap_err();
        assert!(matches!(err, ResourceError::NonFinite { resource: "polarity", .. }));

        let bundle = ResourceBundle {
            boosters: Some(HashMap::from([("very".to_string(), f64::INFINITY)])),
            ..Default::default()
        };
        let err = LexicalResources::from_bundle(bundle, Path::new("")).unwrap_err();
        assert!(matches!(err, ResourceError::NonFinite { resource: "boosters", .. }));
    }

    #[test]
    fn test_builtin_irregulars_that_are_their_own_lemma() {
        let resources = LexicalResources::builtin();
        let analyzer = Analyzer::new(&resources);
        assert_eq!(analyzer.normalize("data"), "data");
        assert_eq!(analyzer.normalize("children geese"), "child goose");
    }

    #[test]
    fn test_missing_lexicon_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let bundle = create_input(dir.path(), "bundle.json", r#"{"polarity_file": "gone.txt"}"#);
        let err = LexicalResources::load(&bundle).unwrap_err();
        assert!(err.to_string().contains("gone.txt"));
    }
}
