//! Phrase lexicons for the rule-based classifier.

/// Positive phrases. All lowercase; multi-word phrases match as substrings
/// of the normalized text.
const POSITIVE: &[&str] = &[
    "fantastic",
    "helpful",
    "quick",
    "love",
    "great",
    "great value",
    "no issues",
    "works well",
    "support was helpful",
];

/// Negative phrases. "retry" is deliberately absent here; it lives in the
/// neutral hints so mixed sentences do not read as complaints.
const NEGATIVE: &[&str] = &[
    "awful",
    "looping",
    "failed",
    "clunky",
    "can't recommend",
    // apostrophe-less variant seen in casual typing
    "cant recommend",
];

/// Hedges and concession cues that pull the overall score toward neutral.
const NEUTRAL_HINTS: &[&str] = &[
    "okay",
    "fine",
    "nothing special",
    "works",
    "retry",
    "had to retry",
    // a concession usually signals mixed sentiment
    "but",
    // expectation-hedging
    "i thought it would be",
];

/// Immutable phrase sets consulted by [`crate::RuleClassifier`].
///
/// Phrases must be lowercase; matching is plain substring containment over
/// the normalized text, so multi-word phrases are fine. [`Lexicon::new`]
/// lowercases for you and drops blank entries.
#[derive(Debug, Clone)]
pub struct Lexicon {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
    pub neutral_hints: Vec<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            positive: POSITIVE.iter().map(|s| (*s).to_string()).collect(),
            negative: NEGATIVE.iter().map(|s| (*s).to_string()).collect(),
            neutral_hints: NEUTRAL_HINTS.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

impl Lexicon {
    /// Build a lexicon from caller-supplied phrase lists.
    ///
    /// Each phrase is lowercased; entries that are empty after trimming are
    /// dropped.
    #[must_use]
    pub fn new(
        positive: Vec<String>,
        negative: Vec<String>,
        neutral_hints: Vec<String>,
    ) -> Self {
        Self {
            positive: clean(positive),
            negative: clean(negative),
            neutral_hints: clean(neutral_hints),
        }
    }
}

fn clean(phrases: Vec<String>) -> Vec<String> {
    phrases
        .into_iter()
        .filter(|p| !p.trim().is_empty())
        .map(|p| p.to_lowercase())
        .collect()
}
