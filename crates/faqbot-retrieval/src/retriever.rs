//! Brute-force cosine search and confidence mapping.

use crate::error::RetrievalError;

/// Find the document most similar to `query`.
///
/// Both `query` and every document row must be L2-normalized by the
/// caller, so cosine similarity reduces to a plain dot product. This is
/// asserted in debug builds only; release builds trust the contract.
///
/// Ties break to the lowest index, matching array-argmax semantics.
/// Brute force is O(m * n) and fine at corpus sizes of tens to low
/// hundreds of entries.
///
/// # Errors
///
/// Returns [`RetrievalError::EmptyCorpus`] when there are no documents,
/// and [`RetrievalError::ShapeMismatch`] when a row's dimension differs
/// from the query's.
pub fn cosine_top1(
    query: &[f32],
    documents: &[Vec<f32>],
) -> Result<(usize, f32), RetrievalError> {
    if documents.is_empty() {
        return Err(RetrievalError::EmptyCorpus);
    }
    debug_assert!(is_unit_norm(query), "query vector must be L2-normalized");

    let mut best_idx = 0;
    let mut best_sim = f32::NEG_INFINITY;

    for (idx, row) in documents.iter().enumerate() {
        if row.len() != query.len() {
            return Err(RetrievalError::ShapeMismatch {
                expected: query.len(),
                got: row.len(),
                index: idx,
            });
        }
        debug_assert!(
            is_unit_norm(row),
            "document row {idx} must be L2-normalized"
        );

        let sim = dot(query, row);
        if sim > best_sim {
            best_sim = sim;
            best_idx = idx;
        }
    }

    Ok((best_idx, best_sim))
}

/// Map a cosine similarity in [-1, 1] to a user-facing score in [0, 1].
///
/// The cosine is clamped first, then rescaled affinely: -1 maps to 0.0,
/// 0 to 0.5, 1 to 1.0. NaN input propagates; the handoff decision's own
/// clamp absorbs it downstream.
#[must_use]
pub fn score_from_cosine(cosine: f32) -> f32 {
    let c = cosine.clamp(-1.0, 1.0);
    (c + 1.0) / 2.0
}

fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

fn is_unit_norm(v: &[f32]) -> bool {
    let norm_sq: f32 = v.iter().map(|x| x * x).sum();
    (norm_sq - 1.0).abs() <= 1e-3
}
