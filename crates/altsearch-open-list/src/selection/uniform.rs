//! Uniform random alternation.

use rand::Rng;

/// Draws one of the non-empty queues uniformly.
///
/// Returns `None` if `non_empty` is empty.
pub fn select_uniform<R: Rng>(non_empty: &[usize], rng: &mut R) -> Option<usize> {
    if non_empty.is_empty() {
        return None;
    }
    Some(non_empty[rng.random_range(0..non_empty.len())])
}
