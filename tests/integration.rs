//! Integration tests for tweet sentiment classification

use rust_tweet_sentiment::{
    accuracy, fit, tokenize, AppConfig, DataLoader, Label, LabeledRow, NaiveBayesTrainer,
    SentimentError, StopWordPruner,
};

fn small_corpus() -> Vec<LabeledRow> {
    vec![
        LabeledRow::new(Label::Positive, "sunny beach"),
        LabeledRow::new(Label::Positive, "lovely picnic"),
        LabeledRow::new(Label::Positive, "happy puppy"),
        LabeledRow::new(Label::Positive, "sweet cake"),
        LabeledRow::new(Label::Negative, "rainy commute"),
        LabeledRow::new(Label::Negative, "broken phone"),
        LabeledRow::new(Label::Negative, "angry boss"),
        LabeledRow::new(Label::Negative, "cold coffee"),
    ]
}

mod end_to_end {
    use super::*;

    #[test]
    fn test_positive_words_classified_positive() {
        let model = fit(&small_corpus()).unwrap();
        assert_eq!(model.predict("Sunny, lovely picnic!").unwrap(), Label::Positive);
    }

    #[test]
    fn test_negative_words_classified_negative() {
        let model = fit(&small_corpus()).unwrap();
        assert_eq!(model.predict("my boss is ANGRY").unwrap(), Label::Negative);
    }

    #[test]
    fn test_tie_resolves_to_negative() {
        let model = fit(&small_corpus()).unwrap();

        // One word from each class: both scores are 0.5 * (1/8) / (1/16)
        let scores = model.scores("sunny commute").unwrap();
        assert_eq!(scores.positive, scores.negative);
        assert_eq!(model.predict("sunny commute").unwrap(), Label::Negative);

        // No known words: both scores equal the balanced priors
        assert_eq!(model.predict("nothing known here").unwrap(), Label::Negative);
    }

    #[test]
    fn test_evaluate_held_out() {
        let model = fit(&small_corpus()).unwrap();
        let held_out = vec![
            LabeledRow::new(Label::Positive, "happy beach"),
            LabeledRow::new(Label::Negative, "cold phone"),
            LabeledRow::new(Label::Negative, "broken cake cake"),
        ];

        let report = model.evaluate(&held_out).unwrap();
        assert!((report.accuracy - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(report.total(), 3);
        assert_eq!(report.confusion.true_positive, 1);
        assert_eq!(report.confusion.true_negative, 1);
    }
}

mod stock_words {
    use super::*;

    #[test]
    fn test_shared_frequent_words_ignored_by_model() {
        let training = vec![
            LabeledRow::new(Label::Positive, "the movie was great"),
            LabeledRow::new(Label::Positive, "the food was great"),
            LabeledRow::new(Label::Negative, "the movie was awful"),
            LabeledRow::new(Label::Negative, "the trip was awful"),
        ];
        let model = fit(&training).unwrap();

        for label in [Label::Positive, Label::Negative] {
            let vocabulary = model.class_vocabulary(label);
            assert!(!vocabulary.contains("the"));
            assert!(!vocabulary.contains("was"));
        }
        assert!(model.class_vocabulary(Label::Positive).contains("great"));
        assert!(model.class_vocabulary(Label::Negative).contains("awful"));
    }

    #[test]
    fn test_small_top_k_keeps_more_words() {
        let training = vec![
            LabeledRow::new(Label::Positive, "the the the good"),
            LabeledRow::new(Label::Negative, "bad bad bad the"),
        ];
        let trainer = NaiveBayesTrainer::new().with_pruner(StopWordPruner::new().with_top_k(1));
        let model = trainer.fit(&training).unwrap();

        // "the" is top-1 only for the positive class, so it survives
        assert_eq!(model.class_vocabulary(Label::Positive).count("the"), Some(3));
        assert_eq!(model.class_vocabulary(Label::Negative).count("the"), Some(1));
        assert_eq!(model.pooled_vocabulary().count("the"), Some(4));
    }
}

mod tokenizer {
    use super::*;

    #[test]
    fn test_emoticons_reach_the_model() {
        let training = vec![
            LabeledRow::new(Label::Positive, "nice :)"),
            LabeledRow::new(Label::Negative, "meh :("),
        ];
        let model = fit(&training).unwrap();

        assert_eq!(tokenize("ok :("), vec!["ok", ":("]);
        assert_eq!(model.predict("ok :(").unwrap(), Label::Negative);
        assert_eq!(model.predict("ok :)").unwrap(), Label::Positive);
    }
}

mod evaluation {
    use super::*;

    #[test]
    fn test_accuracy_example() {
        let truth = [Label::Positive, Label::Negative, Label::Positive];
        let predicted = [Label::Positive, Label::Positive, Label::Positive];
        let acc = accuracy(&truth, &predicted).unwrap();
        assert!((acc - 200.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_mismatched_lengths_rejected() {
        let result = accuracy(&[Label::Positive], &[]);
        assert!(matches!(result, Err(SentimentError::LengthMismatch { .. })));
    }
}

mod files {
    use super::*;
    use rust_tweet_sentiment::config::{load_config, save_config};
    use tempfile::tempdir;

    #[test]
    fn test_train_and_score_from_csv() {
        let dir = tempdir().unwrap();
        let mut config = AppConfig::default();
        config.data.train_path = dir.path().join("train.csv");
        config.data.dev_path = dir.path().join("dev.csv");
        config.data.test_path = dir.path().join("test.csv");

        std::fs::write(
            &config.data.train_path,
            "positive,\"Loving this weather, :)\"\n\
             positive,\"Great news today!\"\n\
             negative,\"Hate this weather :(\"\n\
             negative,\"Awful news today...\"\n",
        )
        .unwrap();
        std::fs::write(&config.data.dev_path, "positive,\"great\"\nnegative,\"awful\"\n").unwrap();
        std::fs::write(&config.data.test_path, "negative,\"hate it\"\n").unwrap();

        let config_path = dir.path().join("config.toml");
        save_config(&config, &config_path).unwrap();
        let config = load_config(&config_path).unwrap();

        let splits = DataLoader::load_splits(&config.data).unwrap();
        let model = config.model.trainer().fit(&splits.train).unwrap();

        assert_eq!(model.evaluate(&splits.dev).unwrap().accuracy, 100.0);
        assert_eq!(model.evaluate(&splits.test).unwrap().accuracy, 100.0);
    }
}
