//! Fractional sort-key math for intra-pipeline application ordering.
//!
//! Applications carry a sparse `f64` position so a move between two neighbors
//! only rewrites the moved record. New items append at `max + POSITION_STEP`;
//! an item dropped between two neighbors takes their midpoint, with 0 as the
//! implicit lower bound and `prev + POSITION_STEP` as the implicit upper
//! bound at the tail, so repeated tail-appends never need renormalization.

/// Gap reserved between consecutive positions on append and renormalization.
pub const POSITION_STEP: f64 = 60_000.0;

/// Smallest neighbor gap the midpoint computation will subdivide. Below this
/// the pipeline is renormalized to evenly spaced positions instead.
pub const MIN_GAP: f64 = 1e-6;

/// Position for an item dropped between `prev` and `next`, either of which
/// may be absent at the head or tail of the pipeline.
pub fn midpoint(prev: Option<f64>, next: Option<f64>) -> f64 {
    match (prev, next) {
        (Some(prev), Some(next)) => (prev + next) / 2.0,
        (Some(prev), None) => prev + POSITION_STEP / 2.0,
        (None, Some(next)) => next / 2.0,
        (None, None) => POSITION_STEP / 2.0,
    }
}

/// Whether the gap between two neighbors is too small to subdivide again.
/// The tail never exhausts since its upper bound is implicit; the head
/// bounds against 0.
pub fn gap_exhausted(prev: Option<f64>, next: Option<f64>) -> bool {
    match next {
        Some(next) => next - prev.unwrap_or(0.0) < MIN_GAP,
        None => false,
    }
}

/// Position assigned to the item at `index` (0-based) after renormalization.
pub fn renormalized(index: usize) -> f64 {
    (index as f64 + 1.0) * POSITION_STEP
}
