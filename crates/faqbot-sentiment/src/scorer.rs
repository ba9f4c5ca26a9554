//! Phrase-first sentiment scoring with negation and concession handling.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;
use crate::normalize::{count_hits, normalize};

/// How many tokens before a trailing "not" are scanned for a positive
/// phrase to flip.
const NEGATION_WINDOW: usize = 4;

/// Label assigned after the neutral-band comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "positive"),
            SentimentLabel::Negative => write!(f, "negative"),
            SentimentLabel::Neutral => write!(f, "neutral"),
        }
    }
}

/// Outcome of scoring one text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentResult {
    /// Raw signed magnitude. Not clamped to any range; only the label is
    /// banded.
    pub score: f32,
    pub label: SentimentLabel,
}

/// Tunable scoring weights.
#[derive(Debug, Clone, Copy)]
pub struct ScoreParams {
    /// Added once per matched positive phrase.
    pub pos_weight: f32,
    /// Subtracted once per matched negative phrase.
    pub neg_weight: f32,
    /// Scores in `[-neutral_band, neutral_band]` inclusive label as neutral.
    pub neutral_band: f32,
}

impl Default for ScoreParams {
    fn default() -> Self {
        Self {
            pos_weight: 1.0,
            neg_weight: 1.0,
            neutral_band: 0.15,
        }
    }
}

/// Deterministic rule-based sentiment classifier.
///
/// Scoring passes, in order:
/// 1. phrase-first lexicon hits (each phrase counts at most once)
/// 2. windowed negation flips ("not helpful", "quick ... not")
/// 3. concession / hedge dampening ("works, but ...", "okay")
/// 4. mixed-signal dampening when both sides fire near-evenly
/// 5. neutral-band label assignment
#[derive(Debug, Clone)]
pub struct RuleClassifier {
    lexicon: Lexicon,
    params: ScoreParams,
    token_re: Regex,
}

impl Default for RuleClassifier {
    fn default() -> Self {
        Self::new(Lexicon::default())
    }
}

impl RuleClassifier {
    #[must_use]
    pub fn new(lexicon: Lexicon) -> Self {
        Self::with_params(lexicon, ScoreParams::default())
    }

    #[must_use]
    pub fn with_params(lexicon: Lexicon, params: ScoreParams) -> Self {
        let token_re = Regex::new(r"[a-z']+").expect("valid token regex");
        Self {
            lexicon,
            params,
            token_re,
        }
    }

    /// Score `text` and assign a label.
    ///
    /// Total over all inputs: empty or unmatched text scores 0.0 and labels
    /// neutral. Repeated calls with identical input yield identical results.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn classify(&self, text: &str) -> SentimentResult {
        let t = normalize(text);
        let mut score = 0.0_f32;

        // Phrase-first scoring
        let pos_hits = count_hits(&t, &self.lexicon.positive);
        let neg_hits = count_hits(&t, &self.lexicon.negative);
        score += self.params.pos_weight * pos_hits as f32;
        score -= self.params.neg_weight * neg_hits as f32;

        // Each flip inverts one positive hit already counted above, so the
        // net contribution of a negated phrase is -pos_weight.
        let flips = self.negation_flips(&t);
        score -= 2.0 * self.params.pos_weight * flips as f32;

        // Concession / hedge dampening
        let mut hedges = count_hits(&t, &self.lexicon.neutral_hints);
        let padded = format!(" {t} ");
        if padded.contains(" but ") || t.contains(", but") || t.contains("… but") {
            hedges += 1;
        }
        if hedges > 0 {
            // pull toward neutral without zeroing meaningful sentiment
            score *= 0.6;
        }

        // When both sides fire and land close to even, favour neutrality
        if pos_hits > 0
            && neg_hits > 0
            && score.abs() <= (self.params.pos_weight + self.params.neg_weight) * 0.6
        {
            score *= 0.7;
        }

        let label = if score > self.params.neutral_band {
            SentimentLabel::Positive
        } else if score < -self.params.neutral_band {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        };

        SentimentResult { score, label }
    }

    /// Count positive phrases negated by a nearby "not".
    ///
    /// Pattern A: "not <phrase>" as a literal substring, one flip per
    /// matching phrase. Pattern B: the last standalone "not" token, with a
    /// positive phrase somewhere in the window of [`NEGATION_WINDOW`] tokens
    /// before it; contributes at most one flip regardless of how many
    /// phrases sit in the window.
    fn negation_flips(&self, normalized: &str) -> usize {
        let mut flips = 0;

        for phrase in &self.lexicon.positive {
            let needle = format!("not {phrase}");
            if normalized.contains(needle.as_str()) {
                flips += 1;
            }
        }

        let tokens: Vec<&str> = self
            .token_re
            .find_iter(normalized)
            .map(|m| m.as_str())
            .collect();

        if let Some(idx) = tokens.iter().rposition(|tok| *tok == "not") {
            let start = idx.saturating_sub(NEGATION_WINDOW);
            let window = tokens[start..idx].join(" ");
            for phrase in &self.lexicon.positive {
                if window.contains(phrase.as_str()) {
                    flips += 1;
                    break;
                }
            }
        }

        flips
    }
}
