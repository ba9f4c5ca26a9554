//! End-to-end flows: corpus to index, and question to outcome.

use faqbot_core::FaqItem;

use crate::embeddings::EmbeddingProvider;
use crate::engine::FaqEngine;
use crate::error::RetrievalError;
use crate::notify::{HandoffAlert, HandoffNotifier};
use crate::types::{FaqIndex, Resolution};

/// Embed every corpus question and pair the vectors with their entries.
///
/// Question order is preserved, so embedding row `i` belongs to corpus
/// item `i`. An empty corpus builds an empty index; queries against it
/// fail at search time.
///
/// # Errors
///
/// Returns an error if the provider fails or returns a vector count or
/// shape that does not match the corpus.
pub async fn build_index<P>(provider: &P, items: Vec<FaqItem>) -> Result<FaqIndex, RetrievalError>
where
    P: EmbeddingProvider,
{
    if items.is_empty() {
        tracing::warn!("FAQ corpus is empty; every question will fail to resolve");
        return FaqIndex::new(items, Vec::new());
    }

    let questions: Vec<&str> = items.iter().map(|i| i.question.as_str()).collect();
    let embeddings = provider.embed(&questions).await?;

    FaqIndex::new(items, embeddings)
}

/// Answer one question, escalating to a human when confidence is low.
///
/// 1. Embed the question.
/// 2. Resolve it against the index (search, confidence, decision).
/// 3. On a handoff, alert the notifier. Alert failures are logged and do
///    not block the handoff outcome.
///
/// # Errors
///
/// Returns an error if embedding fails, the provider returns no vector,
/// or the index cannot be searched (empty corpus, dimension mismatch).
pub async fn ask<P, N>(
    engine: &FaqEngine,
    provider: &P,
    notifier: &N,
    question: &str,
) -> Result<Resolution, RetrievalError>
where
    P: EmbeddingProvider,
    N: HandoffNotifier,
{
    let embeddings = provider.embed(&[question]).await?;
    let Some(query) = embeddings.first() else {
        return Err(RetrievalError::Embed(
            "embedding provider returned no vector for the question".to_string(),
        ));
    };

    let resolution = engine.resolve(question, query)?;

    if resolution.is_handoff() {
        let alert = HandoffAlert {
            question: question.to_string(),
            top: resolution.top.clone(),
            score: resolution.score,
            threshold: engine.threshold(),
        };
        match notifier.notify(&alert).await {
            Ok(true) => {
                tracing::info!(score = %resolution.score, "handoff alert sent");
            }
            Ok(false) => {
                tracing::debug!("handoff alert channel not configured, skipping");
            }
            Err(e) => {
                tracing::warn!(error = %e, "handoff alert failed");
            }
        }
    }

    Ok(resolution)
}
