//! Adaptive weight learning for weighted alternation.
//!
//! A learner receives the path cost of the entry most recently popped from
//! a queue and may shift selection weight between queues before the next
//! draw. Learners must keep every weight within the configured bounds and
//! preserve the total weight.

mod greedy_mean;
mod history;

use std::fmt::Debug;

pub use greedy_mean::GreedyMeanLearner;
pub use history::CostHistory;

use crate::feedback::Feedback;

/// Inclusive bounds every adaptive weight must stay within.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightBounds {
    pub min: f64,
    pub max: f64,
}

impl WeightBounds {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns true if `weight` lies within the bounds.
    #[inline]
    pub fn contains(&self, weight: f64) -> bool {
        weight >= self.min && weight <= self.max
    }
}

/// Outcome of feeding one observation to a learner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeightUpdate {
    /// Weight moved onto `winner`.
    Applied { winner: usize },
    /// `winner` was chosen but moving weight would leave the bounds.
    Skipped { winner: usize },
    /// Nothing to redistribute (a single queue).
    Unchanged,
}

impl WeightUpdate {
    pub fn is_applied(&self) -> bool {
        matches!(self, WeightUpdate::Applied { .. })
    }
}

/// Trait for online weight update rules.
///
/// Implementations own whatever per-queue memory they need; the open list
/// owns the weights and hands them in for every observation.
pub trait WeightLearner: Send + Debug {
    /// Returns the name of this rule.
    fn name(&self) -> &str;

    /// Records `feedback` about the entry popped from `queue` and updates
    /// `weights` in place.
    fn observe(&mut self, queue: usize, feedback: &Feedback, weights: &mut [f64]) -> WeightUpdate;

    /// Forgets all recorded observations.
    fn reset(&mut self);
}
