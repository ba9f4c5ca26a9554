//! Deterministic rule-based sentiment classification for user feedback.
//!
//! Scores text with phrase lexicons, flips positives negated by a nearby
//! "not", dampens concessions and hedges toward neutral, and assigns a
//! label through a neutral band. No model weights, no network, identical
//! output for identical input.

pub mod eval;
pub mod lexicon;
pub mod scorer;

mod normalize;

pub use eval::{load_devset, run_eval, DevsetCase, EvalError, EvalReport, Mistake};
pub use lexicon::Lexicon;
pub use scorer::{RuleClassifier, ScoreParams, SentimentLabel, SentimentResult};
