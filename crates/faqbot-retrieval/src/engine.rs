//! Confidence-gated resolution over a built index.

use crate::decision::should_handoff;
use crate::error::RetrievalError;
use crate::notify::FaqContext;
use crate::retriever::{cosine_top1, score_from_cosine};
use crate::types::{FaqIndex, FaqOutcome, Resolution};

/// Resolves embedded questions against the FAQ index.
///
/// Holds the index and the configured confidence threshold; both are
/// immutable for the engine's lifetime, so one engine can serve many
/// concurrent callers.
#[derive(Debug, Clone)]
pub struct FaqEngine {
    index: FaqIndex,
    threshold: f32,
}

impl FaqEngine {
    #[must_use]
    pub fn new(index: FaqIndex, threshold: f32) -> Self {
        Self { index, threshold }
    }

    #[must_use]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    #[must_use]
    pub fn index(&self) -> &FaqIndex {
        &self.index
    }

    /// Resolve one embedded question: search, score, decide.
    ///
    /// `query` must be the L2-normalized embedding of `question`. When the
    /// confidence falls strictly below the threshold the outcome is a
    /// handoff carrying the question and score only.
    ///
    /// # Errors
    ///
    /// Returns [`RetrievalError::EmptyCorpus`] when the index has no
    /// entries, and [`RetrievalError::ShapeMismatch`] when `query` does not
    /// match the index dimension.
    pub fn resolve(&self, question: &str, query: &[f32]) -> Result<Resolution, RetrievalError> {
        let (idx, cosine) = cosine_top1(query, self.index.embeddings())?;
        let score = score_from_cosine(cosine);
        let item = self.index.item(idx);
        let top = FaqContext::from(item);

        let outcome = if should_handoff(score, self.threshold) {
            FaqOutcome::Handoff {
                question: question.to_string(),
                score,
            }
        } else {
            FaqOutcome::Answer {
                answer: item.answer.clone(),
                source_id: item.id.clone(),
                score,
            }
        };

        Ok(Resolution {
            outcome,
            top,
            cosine,
            score,
        })
    }
}

#[cfg(test)]
mod tests {
    use faqbot_core::FaqItem;

    use super::*;

    fn index() -> FaqIndex {
        let items = vec![
            FaqItem {
                id: "faq-001".to_string(),
                question: "How do I reset my password?".to_string(),
                answer: "Use the reset link.".to_string(),
                tags: None,
            },
            FaqItem {
                id: "faq-002".to_string(),
                question: "Do you ship internationally?".to_string(),
                answer: "Yes, to most countries.".to_string(),
                tags: None,
            },
        ];
        FaqIndex::new(items, vec![vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap()
    }

    #[test]
    fn confident_query_answers_from_corpus() {
        let engine = FaqEngine::new(index(), 0.6);
        let resolution = engine.resolve("password reset?", &[1.0, 0.0]).unwrap();

        assert!(!resolution.is_handoff());
        assert_eq!(resolution.cosine, 1.0);
        assert_eq!(resolution.score, 1.0);
        match resolution.outcome {
            FaqOutcome::Answer {
                ref answer,
                ref source_id,
                score,
            } => {
                assert_eq!(answer, "Use the reset link.");
                assert_eq!(source_id, "faq-001");
                assert_eq!(score, 1.0);
            }
            FaqOutcome::Handoff { .. } => panic!("expected an answer outcome"),
        }
    }

    #[test]
    fn second_row_wins_when_closer() {
        let engine = FaqEngine::new(index(), 0.6);
        let resolution = engine.resolve("shipping?", &[0.0, 1.0]).unwrap();
        assert_eq!(resolution.top.id, "faq-002");
        assert!(!resolution.is_handoff());
    }

    #[test]
    fn low_confidence_hands_off_without_answer() {
        // orthogonal query: cosine 0.0, score 0.5, below the 0.9 threshold
        let items = vec![FaqItem {
            id: "faq-001".to_string(),
            question: "How do I reset my password?".to_string(),
            answer: "Use the reset link.".to_string(),
            tags: None,
        }];
        let index = FaqIndex::new(items, vec![vec![1.0, 0.0]]).unwrap();
        let engine = FaqEngine::new(index, 0.9);

        let resolution = engine.resolve("unrelated question", &[0.0, 1.0]).unwrap();
        assert!(resolution.is_handoff());
        assert_eq!(resolution.score, 0.5);
        match resolution.outcome {
            FaqOutcome::Handoff {
                ref question,
                score,
            } => {
                assert_eq!(question, "unrelated question");
                assert_eq!(score, 0.5);
            }
            FaqOutcome::Answer { .. } => panic!("expected a handoff outcome"),
        }
        // the closest entry still rides along for the notifier
        assert_eq!(resolution.top.id, "faq-001");
    }

    #[test]
    fn score_equal_to_threshold_answers() {
        let items = vec![FaqItem {
            id: "faq-001".to_string(),
            question: "Q?".to_string(),
            answer: "A.".to_string(),
            tags: None,
        }];
        let index = FaqIndex::new(items, vec![vec![1.0, 0.0]]).unwrap();
        let engine = FaqEngine::new(index, 0.5);

        // cosine 0.0 maps to score 0.5, equal to the threshold
        let resolution = engine.resolve("Q?", &[0.0, 1.0]).unwrap();
        assert!(!resolution.is_handoff(), "strict comparison must answer");
    }

    #[test]
    fn oversized_threshold_clamps() {
        let items = vec![FaqItem {
            id: "faq-001".to_string(),
            question: "Q?".to_string(),
            answer: "A.".to_string(),
            tags: None,
        }];
        let index = FaqIndex::new(items, vec![vec![1.0, 0.0]]).unwrap();
        // 1.5 clamps to 1.0; a perfect match still answers
        let engine = FaqEngine::new(index, 1.5);

        let resolution = engine.resolve("Q?", &[1.0, 0.0]).unwrap();
        assert!(!resolution.is_handoff());
    }

    #[test]
    fn empty_index_propagates_empty_corpus() {
        let engine = FaqEngine::new(FaqIndex::new(vec![], vec![]).unwrap(), 0.6);
        let result = engine.resolve("anything", &[1.0, 0.0]);
        assert!(
            matches!(result, Err(RetrievalError::EmptyCorpus)),
            "expected EmptyCorpus, got: {result:?}"
        );
    }
}
