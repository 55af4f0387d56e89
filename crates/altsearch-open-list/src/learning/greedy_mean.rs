//! Greedy mean-cost learner.

use altsearch_config::LearningConfig;

use super::{CostHistory, WeightBounds, WeightLearner, WeightUpdate};
use crate::feedback::Feedback;

/// Rewards the queue whose recent pops have the highest average path cost.
///
/// Each observation is appended to the popped queue's history. The queue
/// with the strictly highest history mean (lowest index on ties, empty
/// histories count as 0) gains `learning_rate`; every other queue loses
/// `learning_rate / (N - 1)`. An update that would move any weight outside
/// the bounds is skipped as a whole.
///
/// # Example
///
/// ```
/// use altsearch_open_list::{Feedback, GreedyMeanLearner, WeightLearner, WeightUpdate};
/// use altsearch_config::LearningConfig;
///
/// let mut learner = GreedyMeanLearner::new(2, &LearningConfig::default());
/// let mut weights = vec![0.5, 0.5];
///
/// let update = learner.observe(1, &Feedback::new(1, 10.0, 14.0), &mut weights);
/// assert_eq!(update, WeightUpdate::Applied { winner: 1 });
/// assert!((weights[1] - 0.51).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct GreedyMeanLearner {
    learning_rate: f64,
    bounds: WeightBounds,
    histories: Vec<CostHistory>,
}

impl GreedyMeanLearner {
    /// Creates a learner for `queue_count` queues.
    pub fn new(queue_count: usize, config: &LearningConfig) -> Self {
        Self {
            learning_rate: config.learning_rate,
            bounds: WeightBounds::new(config.min_weight, config.max_weight),
            histories: (0..queue_count)
                .map(|_| CostHistory::new(config.max_history))
                .collect(),
        }
    }

    /// Returns the history recorded for `queue`.
    pub fn history(&self, queue: usize) -> Option<&CostHistory> {
        self.histories.get(queue)
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn bounds(&self) -> WeightBounds {
        self.bounds
    }

    // First index wins ties.
    fn winner(&self) -> usize {
        let mut best = 0;
        let mut best_mean = f64::NEG_INFINITY;
        for (i, history) in self.histories.iter().enumerate() {
            let mean = history.mean();
            if mean > best_mean {
                best = i;
                best_mean = mean;
            }
        }
        best
    }
}

impl WeightLearner for GreedyMeanLearner {
    fn name(&self) -> &str {
        "greedy_mean"
    }

    fn observe(&mut self, queue: usize, feedback: &Feedback, weights: &mut [f64]) -> WeightUpdate {
        if let Some(history) = self.histories.get_mut(queue) {
            history.push(feedback.g);
        }

        let n = weights.len();
        if n < 2 {
            return WeightUpdate::Unchanged;
        }

        let winner = self.winner();
        let share = self.learning_rate / (n - 1) as f64;

        let winner_fits = self.bounds.contains(weights[winner] + self.learning_rate);
        let others_fit = weights
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != winner)
            .all(|(_, w)| self.bounds.contains(w - share));
        if !(winner_fits && others_fit) {
            return WeightUpdate::Skipped { winner };
        }

        for (i, w) in weights.iter_mut().enumerate() {
            if i == winner {
                *w += self.learning_rate;
            } else {
                *w -= share;
            }
        }
        WeightUpdate::Applied { winner }
    }

    fn reset(&mut self) {
        for history in &mut self.histories {
            history.clear();
        }
    }
}
