use faqbot_core::FaqItem;
use serde::Serialize;

use crate::error::RetrievalError;
use crate::notify::FaqContext;

/// Immutable search index: FAQ entries paired row-for-row with their
/// question embeddings.
#[derive(Debug, Clone)]
pub struct FaqIndex {
    items: Vec<FaqItem>,
    embeddings: Vec<Vec<f32>>,
}

impl FaqIndex {
    /// Pair corpus items with their embeddings.
    ///
    /// Row `i` of `embeddings` must belong to `items[i]`.
    ///
    /// # Errors
    ///
    /// Returns [`RetrievalError::CorpusSizeMismatch`] when the counts
    /// differ, and [`RetrievalError::ShapeMismatch`] when rows disagree on
    /// dimension.
    pub fn new(items: Vec<FaqItem>, embeddings: Vec<Vec<f32>>) -> Result<Self, RetrievalError> {
        if items.len() != embeddings.len() {
            return Err(RetrievalError::CorpusSizeMismatch {
                items: items.len(),
                embeddings: embeddings.len(),
            });
        }

        if let Some(first) = embeddings.first() {
            let dim = first.len();
            for (index, row) in embeddings.iter().enumerate() {
                if row.len() != dim {
                    return Err(RetrievalError::ShapeMismatch {
                        expected: dim,
                        got: row.len(),
                        index,
                    });
                }
            }
        }

        Ok(Self { items, embeddings })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn items(&self) -> &[FaqItem] {
        &self.items
    }

    #[must_use]
    pub fn embeddings(&self) -> &[Vec<f32>] {
        &self.embeddings
    }

    /// The corpus entry behind embedding row `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range; indices come from searches over
    /// this same index, which keeps them in range.
    #[must_use]
    pub fn item(&self, index: usize) -> &FaqItem {
        &self.items[index]
    }
}

/// What the caller gets back for one question.
///
/// A handoff deliberately carries no answer content, only the question
/// and the confidence that fell short.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FaqOutcome {
    Answer {
        answer: String,
        source_id: String,
        score: f32,
    },
    Handoff {
        question: String,
        score: f32,
    },
}

/// One resolved question: the user-facing outcome plus the retrieval
/// diagnostics behind it.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub outcome: FaqOutcome,
    /// Closest corpus entry, regardless of which way the decision went.
    pub top: FaqContext,
    pub cosine: f32,
    pub score: f32,
}

impl Resolution {
    #[must_use]
    pub fn is_handoff(&self) -> bool {
        matches!(self.outcome, FaqOutcome::Handoff { .. })
    }
}
