//! FAQ retrieval pipeline for the FAQ bot.
//!
//! Embeds FAQ questions via an HTTP embedding service, searches the corpus
//! by cosine similarity, converts the best match into a confidence score,
//! and decides between answering directly and handing off to a human. A
//! handoff can post an alert to a webhook.

pub mod decision;
pub mod embeddings;
pub mod engine;
pub mod error;
pub mod notify;
pub mod pipeline;
pub mod retriever;
pub mod types;

pub use decision::{clamp01, should_handoff};
pub use embeddings::{EmbeddingProvider, HttpEmbedder};
pub use engine::FaqEngine;
pub use error::RetrievalError;
pub use notify::{FaqContext, HandoffAlert, HandoffNotifier, WebhookNotifier};
pub use pipeline::{ask, build_index};
pub use retriever::{cosine_top1, score_from_cosine};
pub use types::{FaqIndex, FaqOutcome, Resolution};
