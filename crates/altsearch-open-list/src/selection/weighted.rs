//! Weighted random alternation.

use rand::Rng;

use altsearch_core::{OpenListError, Result};

/// Spreads the weight of empty queues equally over the non-empty ones.
///
/// Probability mass is never left on queues that cannot be drawn.
pub fn redistribute_empty_weight(non_empty_weights: &mut [f64], empty_weights: &[f64]) {
    if non_empty_weights.is_empty() {
        return;
    }
    let spare: f64 = empty_weights.iter().sum();
    let share = spare / non_empty_weights.len() as f64;
    for w in non_empty_weights.iter_mut() {
        *w += share;
    }
}

/// Roulette wheel selection of a non-empty queue.
///
/// `weights[k]` is the weight of queue `non_empty[k]`.
///
/// # Errors
///
/// Returns [`OpenListError::InvalidDistribution`] if the two slices differ
/// in length, are empty, or the weights do not have a positive finite sum.
pub fn select_weighted<R: Rng>(
    non_empty: &[usize],
    weights: &[f64],
    rng: &mut R,
) -> Result<usize> {
    let total: f64 = weights.iter().sum();
    if weights.len() != non_empty.len() || weights.is_empty() || !(total > 0.0 && total.is_finite())
    {
        return Err(OpenListError::InvalidDistribution {
            weights: weights.len(),
            non_empty: non_empty.len(),
        });
    }

    let roll = rng.random::<f64>() * total;
    let mut cumulative = 0.0;
    for (pos, &w) in weights.iter().enumerate() {
        cumulative += w;
        if roll < cumulative {
            return Ok(non_empty[pos]);
        }
    }

    // Rounding left the roll past the last boundary.
    let pos = weights
        .iter()
        .rposition(|&w| w > 0.0)
        .unwrap_or(weights.len() - 1);
    Ok(non_empty[pos])
}
