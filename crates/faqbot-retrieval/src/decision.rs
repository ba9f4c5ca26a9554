//! NaN-safe clamping and the handoff decision.

/// Clamp to [0, 1]. NaN maps to 0.0; infinities clamp like any other
/// out-of-range value.
#[must_use]
pub fn clamp01(x: f32) -> f32 {
    if x.is_nan() {
        return 0.0;
    }
    x.clamp(0.0, 1.0)
}

/// Decide whether a query should be routed to a human.
///
/// Both inputs are clamped with [`clamp01`] first, so an out-of-range or
/// NaN score/threshold still yields a deterministic boolean. Handoff
/// triggers only when the clamped score is strictly below the clamped
/// threshold; equal values answer normally.
#[must_use]
pub fn should_handoff(score: f32, threshold: f32) -> bool {
    clamp01(score) < clamp01(threshold)
}
