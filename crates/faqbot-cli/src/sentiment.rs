//! Sentiment command handlers for the CLI.

use std::path::{Path, PathBuf};

use clap::Subcommand;
use faqbot_sentiment::{load_devset, run_eval, RuleClassifier};

/// Sub-commands available under `sentiment`.
#[derive(Debug, Subcommand)]
pub enum SentimentCommands {
    /// Classify one piece of text and print the scored result as JSON
    Classify {
        /// Text to classify
        #[arg(long)]
        text: String,
    },
    /// Evaluate the classifier against a labelled devset
    Eval {
        /// Path to the devset YAML file
        #[arg(long, default_value = "./data/sentiment/devset.yaml")]
        dataset: PathBuf,
    },
}

/// Dispatch one `sentiment` sub-command.
///
/// # Errors
///
/// Returns an error if the devset cannot be loaded or output cannot be
/// serialized.
pub(crate) fn run(command: SentimentCommands) -> anyhow::Result<()> {
    match command {
        SentimentCommands::Classify { text } => run_classify(&text),
        SentimentCommands::Eval { dataset } => run_eval_report(&dataset),
    }
}

fn run_classify(text: &str) -> anyhow::Result<()> {
    let classifier = RuleClassifier::default();
    let result = classifier.classify(text);
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

/// Classify every devset case and print the accuracy summary, followed by
/// any misclassified cases.
fn run_eval_report(dataset: &Path) -> anyhow::Result<()> {
    let cases = load_devset(dataset)?;
    let classifier = RuleClassifier::default();
    let report = run_eval(&classifier, &cases);

    println!("Samples: {}", report.total);
    println!(
        "Accuracy: {}/{} = {:.2}",
        report.correct,
        report.total,
        report.accuracy()
    );
    println!("Neutral rate: {:.2}", report.neutral_rate());
    println!("Avg latency (ms/sample): {:.2}", report.avg_latency_ms());

    if !report.mistakes.is_empty() {
        println!();
        println!("Misclassifications:");
        for m in &report.mistakes {
            println!("- id={} gold={} pred={} :: {}", m.id, m.gold, m.predicted, m.text);
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
