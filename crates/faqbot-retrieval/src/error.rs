use thiserror::Error;

#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("empty FAQ corpus: nothing to search")]
    EmptyCorpus,

    #[error("embedding dimension mismatch at row {index}: expected {expected}, got {got}")]
    ShapeMismatch {
        expected: usize,
        got: usize,
        index: usize,
    },

    #[error("corpus has {items} items but {embeddings} embeddings")]
    CorpusSizeMismatch { items: usize, embeddings: usize },

    #[error("embed error: {0}")]
    Embed(String),

    #[error("notify error: {0}")]
    Notify(String),
}
