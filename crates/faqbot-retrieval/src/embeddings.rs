//! Embedding provider seam and the HTTP client implementing it.

use std::future::Future;
use std::time::Duration;

use serde::Serialize;

use crate::error::RetrievalError;

/// Maximum number of texts per /embed call.
const BATCH_SIZE: usize = 64;

/// Anything that can turn texts into embedding vectors.
///
/// Implementations return one vector per input text, in input order, and
/// every vector must be L2-normalized so cosine similarity reduces to a
/// dot product.
pub trait EmbeddingProvider {
    fn embed(
        &self,
        texts: &[&str],
    ) -> impl Future<Output = Result<Vec<Vec<f32>>, RetrievalError>> + Send;
}

/// Client for a TEI-style embedding service exposing `POST /embed`.
#[derive(Debug, Clone)]
pub struct HttpEmbedder {
    client: reqwest::Client,
    url: String,
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    inputs: &'a [&'a str],
}

impl HttpEmbedder {
    /// Create a client for the embedding service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`RetrievalError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, RetrievalError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            url: format!("{}/embed", base_url.trim_end_matches('/')),
        })
    }
}

impl EmbeddingProvider for HttpEmbedder {
    /// Generate embeddings for a batch of texts.
    ///
    /// Texts are sent in groups of [`BATCH_SIZE`] (64) per request. The
    /// response for each chunk must contain exactly one vector per input.
    async fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, RetrievalError> {
        let mut all_embeddings = Vec::with_capacity(texts.len());

        for chunk in texts.chunks(BATCH_SIZE) {
            let request = EmbedRequest { inputs: chunk };
            let response = self
                .client
                .post(&self.url)
                .json(&request)
                .send()
                .await
                .map_err(|e| RetrievalError::Embed(format!("embed request failed: {e}")))?;

            if !response.status().is_success() {
                return Err(RetrievalError::Embed(format!(
                    "embedding service returned status {}",
                    response.status()
                )));
            }

            let embeddings: Vec<Vec<f32>> = response
                .json()
                .await
                .map_err(|e| RetrievalError::Embed(format!("embed response parse error: {e}")))?;

            if embeddings.len() != chunk.len() {
                return Err(RetrievalError::Embed(format!(
                    "embedding service returned {} vectors for {} inputs",
                    embeddings.len(),
                    chunk.len()
                )));
            }

            all_embeddings.extend(embeddings);
        }

        Ok(all_embeddings)
    }
}
