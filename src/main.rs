//! CLI for Naive Bayes tweet sentiment classification
//!
//! Usage:
//! ```bash
//! cargo run -- --help
//! cargo run -- evaluate --train tweets_train.csv --test tweets_test.csv
//! cargo run -- predict --train tweets_train.csv --text "I love it :)"
//! cargo run -- evaluate --split both --json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rust_tweet_sentiment::{
    config::{load_config, AppConfig},
    data::DataLoader,
    models::{Label, LabeledRow, Prediction},
    nlp::Tokenizer,
    sentiment::FittedModel,
};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "tweet_sentiment")]
#[command(version = "0.1.0")]
#[command(about = "Naive Bayes sentiment classification for tweets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (overrides the config file)
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Configuration file (.toml or .json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Train on the training set and report accuracy
    Evaluate {
        /// Training CSV
        #[arg(long)]
        train: Option<PathBuf>,

        /// Development CSV
        #[arg(long)]
        dev: Option<PathBuf>,

        /// Test CSV
        #[arg(long)]
        test: Option<PathBuf>,

        /// Which held-out set to score
        #[arg(short, long, value_enum, default_value = "test")]
        split: Split,

        /// Print the reports as JSON
        #[arg(long)]
        json: bool,
    },

    /// Train on the training set and classify one text
    Predict {
        /// Training CSV
        #[arg(long)]
        train: Option<PathBuf>,

        /// Text to classify
        #[arg(short, long)]
        text: String,

        /// Print the prediction as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the tokens of a text
    Tokenize {
        #[arg(short, long)]
        text: String,
    },

    /// Run the pipeline on a small built-in corpus
    Demo,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Split {
    Dev,
    Test,
    Both,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config: {:?}", path))?,
        None => AppConfig::default(),
    };
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }

    let log_level = match config.logging.level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Evaluate {
            train,
            dev,
            test,
            split,
            json,
        } => {
            if let Some(path) = train {
                config.data.train_path = path;
            }
            if let Some(path) = dev {
                config.data.dev_path = path;
            }
            if let Some(path) = test {
                config.data.test_path = path;
            }
            run_evaluate(&config, split, json)?;
        }
        Commands::Predict { train, text, json } => {
            if let Some(path) = train {
                config.data.train_path = path;
            }
            run_predict(&config, &text, json)?;
        }
        Commands::Tokenize { text } => {
            run_tokenize(&config, &text);
        }
        Commands::Demo => {
            run_demo(&config)?;
        }
    }

    Ok(())
}

fn train_model(config: &AppConfig) -> Result<FittedModel> {
    let path = &config.data.train_path;
    let rows = DataLoader::load_rows(path)
        .with_context(|| format!("Failed to load training data: {:?}", path))?;

    config.model.trainer().fit(&rows).context("Failed to fit model")
}

fn run_evaluate(config: &AppConfig, split: Split, json: bool) -> Result<()> {
    let model = train_model(config)?;

    let mut targets = Vec::new();
    if matches!(split, Split::Dev | Split::Both) {
        targets.push(("dev", &config.data.dev_path));
    }
    if matches!(split, Split::Test | Split::Both) {
        targets.push(("test", &config.data.test_path));
    }

    let mut reports = BTreeMap::new();
    for (name, path) in targets {
        let rows = DataLoader::load_rows(path)
            .with_context(|| format!("Failed to load {} data: {:?}", name, path))?;
        let report = model.evaluate(&rows)?;
        info!(split = name, accuracy = report.accuracy, "Evaluation finished");

        if !json {
            println!("\n== {} set ==", name);
            println!("{}", report);
        }
        reports.insert(name, report);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    Ok(())
}

fn run_predict(config: &AppConfig, text: &str, json: bool) -> Result<()> {
    let model = train_model(config)?;
    let prediction = Prediction::new(text, model.scores(text)?);

    if json {
        println!("{}", serde_json::to_string_pretty(&prediction)?);
        return Ok(());
    }

    println!("Text: {}", prediction.text);
    println!("Label: {}", prediction.label);
    println!("Score (positive): {:e}", prediction.scores.positive);
    println!("Score (negative): {:e}", prediction.scores.negative);

    Ok(())
}

fn run_tokenize(config: &AppConfig, text: &str) {
    let tokenizer = Tokenizer::new().preserve_emoticons(config.model.preserve_emoticons);
    for token in tokenizer.tokenize(text) {
        println!("{}", token);
    }
}

fn run_demo(config: &AppConfig) -> Result<()> {
    let training: Vec<LabeledRow> = [
        (Label::Positive, "I love this sunny day :)"),
        (Label::Positive, "Great game tonight, so happy!"),
        (Label::Positive, "Thanks for the wonderful gift <3"),
        (Label::Positive, "Best coffee ever, feeling great"),
        (Label::Negative, "I hate this rainy day :("),
        (Label::Negative, "Terrible game tonight, so sad"),
        (Label::Negative, "Worst service ever, never again"),
        (Label::Negative, "Feeling awful and tired :-("),
    ]
    .into_iter()
    .map(|(label, text)| LabeledRow::new(label, text))
    .collect();

    println!("\nNaive Bayes pipeline demo\n");

    let model = config.model.trainer().fit(&training)?;
    println!("Priors: positive {:.2}, negative {:.2}", model.prior_positive(), model.prior_negative());
    println!(
        "Vocabulary: {} positive, {} negative, {} pooled terms",
        model.class_vocabulary(Label::Positive).len(),
        model.class_vocabulary(Label::Negative).len(),
        model.pooled_vocabulary().len()
    );

    let held_out = [
        LabeledRow::new(Label::Positive, "what a wonderful sunny game :)"),
        LabeledRow::new(Label::Negative, "awful rainy service :("),
    ];
    for row in &held_out {
        println!("  {:8} <- {}", model.predict(&row.text)?, row.text);
    }

    println!("\n{}", model.evaluate(&held_out)?);

    Ok(())
}
