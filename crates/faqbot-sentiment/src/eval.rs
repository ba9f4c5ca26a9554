//! Devset evaluation harness for the rule-based classifier.
//!
//! Loads a labelled YAML devset, classifies every case, and reports
//! accuracy, neutral rate, timing, and the misclassified cases.

use std::path::Path;
use std::time::{Duration, Instant};

use serde::Deserialize;
use thiserror::Error;

use crate::scorer::{RuleClassifier, SentimentLabel};

#[derive(Debug, Error)]
pub enum EvalError {
    #[error("failed to read devset {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse devset: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// One labelled evaluation case.
#[derive(Debug, Clone, Deserialize)]
pub struct DevsetCase {
    pub id: String,
    pub text: String,
    pub gold_label: SentimentLabel,
}

/// A case the classifier got wrong.
#[derive(Debug, Clone)]
pub struct Mistake {
    pub id: String,
    pub gold: SentimentLabel,
    pub predicted: SentimentLabel,
    pub text: String,
}

/// Aggregate results of one evaluation run.
#[derive(Debug, Clone)]
pub struct EvalReport {
    pub total: usize,
    pub correct: usize,
    pub neutral: usize,
    pub elapsed: Duration,
    pub mistakes: Vec<Mistake>,
}

impl EvalReport {
    /// Fraction of cases labelled correctly. 0.0 for an empty devset.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn accuracy(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f32 / self.total as f32
    }

    /// Fraction of cases predicted neutral. 0.0 for an empty devset.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn neutral_rate(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        self.neutral as f32 / self.total as f32
    }

    /// Mean wall-clock milliseconds per case. 0.0 for an empty devset.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn avg_latency_ms(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.elapsed.as_secs_f64() * 1000.0 / self.total as f64
    }
}

/// Load a devset from a YAML file (a top-level list of cases).
///
/// # Errors
///
/// Returns `EvalError` if the file cannot be read or parsed.
pub fn load_devset(path: &Path) -> Result<Vec<DevsetCase>, EvalError> {
    let content = std::fs::read_to_string(path).map_err(|e| EvalError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let cases = serde_yaml::from_str(&content)?;
    Ok(cases)
}

/// Classify every case and tally the results.
#[must_use]
pub fn run_eval(classifier: &RuleClassifier, cases: &[DevsetCase]) -> EvalReport {
    let start = Instant::now();
    let mut correct = 0;
    let mut neutral = 0;
    let mut mistakes = Vec::new();

    for case in cases {
        let res = classifier.classify(&case.text);
        if res.label == case.gold_label {
            correct += 1;
        } else {
            mistakes.push(Mistake {
                id: case.id.clone(),
                gold: case.gold_label,
                predicted: res.label,
                text: case.text.clone(),
            });
        }
        if res.label == SentimentLabel::Neutral {
            neutral += 1;
        }
    }

    EvalReport {
        total: cases.len(),
        correct,
        neutral,
        elapsed: start.elapsed(),
        mistakes,
    }
}
