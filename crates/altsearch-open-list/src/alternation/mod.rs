//! Alternation open list.
//!
//! Holds several sub-queues over the same frontier, each ranking it by a
//! different priority, and decides which one supplies the next entry.
//!
//! # Decisions
//!
//! - **RoundRobin**: non-empty queue with the lowest priority counter,
//!   counter incremented on every draw
//! - **UniformRandom**: uniformly random non-empty queue
//! - **WeightedAdaptive**: weighted random non-empty queue, weights shifted
//!   by a [`WeightLearner`] from search-progress feedback

mod factory;

use std::collections::BTreeSet;
use std::fmt::Debug;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, error, info, trace, warn};

use altsearch_config::{AlternationConfig, ConfigError, Decision};
use altsearch_core::{EvaluatorId, OpenList, OpenListError, OpenListFactory, Result};

use crate::feedback::Feedback;
use crate::learning::{GreedyMeanLearner, WeightLearner, WeightUpdate};
use crate::selection::{
    redistribute_empty_weight, select_round_robin, select_uniform, select_weighted, Partition,
};
use crate::statistics::SelectionStatistics;

pub use factory::AlternationOpenListFactory;

/// Open list alternating between several sub-queues.
///
/// Every inserted entry is handed to all sub-queues; every removal pops
/// from exactly one of them, chosen by the configured [`Decision`]. The
/// same entry can therefore come out once per sub-queue; the search loop
/// is expected to skip entries it has already expanded.
///
/// The selection is deterministic for a given seed and call sequence.
///
/// # Example
///
/// ```
/// use altsearch_config::{AlternationConfig, Decision};
/// use altsearch_core::OpenList;
/// use altsearch_open_list::AlternationOpenList;
/// use altsearch_test::FifoOpenList;
///
/// let queues: Vec<Box<dyn OpenList<u32, ()>>> = vec![
///     Box::new(FifoOpenList::new()),
///     Box::new(FifoOpenList::new()),
/// ];
/// let mut open = AlternationOpenList::from_queues(queues, &AlternationConfig::default()).unwrap();
///
/// open.insert(&(), 1).unwrap();
/// open.insert(&(), 2).unwrap();
///
/// assert_eq!(open.remove_min(None).unwrap(), 1);
/// assert_eq!(open.last_selected(), Some(0));
/// assert_eq!(open.remove_min(None).unwrap(), 1);
/// assert_eq!(open.last_selected(), Some(1));
/// ```
pub struct AlternationOpenList<E, C> {
    queues: Vec<Box<dyn OpenList<E, C>>>,
    priorities: Vec<i64>,
    weights: Vec<f64>,
    initial_weights: Vec<f64>,
    learner: Box<dyn WeightLearner>,
    last_selected: Option<usize>,
    rng: StdRng,
    seed: u64,
    decision: Decision,
    boost_amount: i64,
    statistics: SelectionStatistics,
}

impl<E, C> Debug for AlternationOpenList<E, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlternationOpenList")
            .field("queues", &self.queues.len())
            .field("decision", &self.decision)
            .field("priorities", &self.priorities)
            .field("weights", &self.weights)
            .field("last_selected", &self.last_selected)
            .field("seed", &self.seed)
            .finish()
    }
}

impl<E, C> AlternationOpenList<E, C> {
    /// Builds the open list by instantiating one sub-queue per factory.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] produced by
    /// [`AlternationConfig::validate`].
    pub fn from_factories<F>(
        sublists: &[F],
        config: &AlternationConfig,
    ) -> std::result::Result<Self, ConfigError>
    where
        F: AsRef<dyn OpenListFactory<E, C>>,
    {
        config.validate(sublists.len())?;
        let queues = sublists
            .iter()
            .map(|factory| factory.as_ref().create_open_list())
            .collect();
        Ok(Self::assemble(queues, config))
    }

    /// Builds the open list around already constructed sub-queues.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] produced by
    /// [`AlternationConfig::validate`].
    pub fn from_queues(
        queues: Vec<Box<dyn OpenList<E, C>>>,
        config: &AlternationConfig,
    ) -> std::result::Result<Self, ConfigError> {
        config.validate(queues.len())?;
        Ok(Self::assemble(queues, config))
    }

    // Caller has validated `config` against `queues.len()`.
    fn assemble(queues: Vec<Box<dyn OpenList<E, C>>>, config: &AlternationConfig) -> Self {
        let n = queues.len();
        let weights = config.initial_weights(n);
        info!(
            event = "alternation_created",
            queues = n,
            decision = %config.decision,
            seed = config.seed,
            boost = config.boost,
        );
        Self {
            queues,
            priorities: vec![0; n],
            initial_weights: weights.clone(),
            weights,
            learner: Box::new(GreedyMeanLearner::new(n, &config.learning)),
            last_selected: None,
            rng: StdRng::seed_from_u64(config.seed),
            seed: config.seed,
            decision: config.decision,
            boost_amount: config.boost,
            statistics: SelectionStatistics::new(n),
        }
    }

    /// Replaces the weight update rule.
    pub fn with_learner(mut self, learner: Box<dyn WeightLearner>) -> Self {
        self.learner = learner;
        self
    }

    /// Removes an entry, first applying `feedback` about the previous one.
    ///
    /// Feedback only affects [`Decision::WeightedAdaptive`] and is ignored
    /// before the first removal.
    ///
    /// # Errors
    ///
    /// Returns [`OpenListError::Exhausted`] if every sub-queue is empty and
    /// [`OpenListError::InvalidDistribution`] if the weights cannot be
    /// sampled. Both are contract violations the search loop should treat
    /// as fatal.
    pub fn remove_min(&mut self, feedback: Option<Feedback>) -> Result<E> {
        if let Some(feedback) = feedback {
            self.apply_feedback(&feedback);
        }

        let partition = Partition::of(&self.queues);
        if partition.is_exhausted() {
            error!(event = "remove_from_empty", queues = self.queues.len());
            return Err(OpenListError::Exhausted);
        }

        let selected = match self.decision {
            Decision::RoundRobin => select_round_robin(&self.priorities, &partition.non_empty),
            Decision::UniformRandom => select_uniform(&partition.non_empty, &mut self.rng),
            Decision::WeightedAdaptive => {
                let (mut non_empty_weights, empty_weights) =
                    partition.split_weights(&self.weights);
                redistribute_empty_weight(&mut non_empty_weights, &empty_weights);
                match select_weighted(&partition.non_empty, &non_empty_weights, &mut self.rng) {
                    Ok(i) => Some(i),
                    Err(err) => {
                        error!(
                            event = "invalid_distribution",
                            weights = ?self.weights,
                            non_empty = partition.non_empty.len(),
                        );
                        return Err(err);
                    }
                }
            }
        };
        let selected = selected.ok_or(OpenListError::Exhausted)?;

        let entry = self.queues[selected].remove_min()?;
        if self.decision == Decision::RoundRobin {
            self.priorities[selected] += 1;
        }
        self.last_selected = Some(selected);
        self.statistics.record_selection(selected);
        trace!(
            event = "queue_selected",
            decision = %self.decision,
            queue = selected,
            non_empty = partition.non_empty.len(),
        );
        Ok(entry)
    }

    fn apply_feedback(&mut self, feedback: &Feedback) {
        if self.decision != Decision::WeightedAdaptive {
            return;
        }
        let Some(last) = self.last_selected else {
            return;
        };
        if feedback.queue_used != last {
            warn!(
                event = "feedback_queue_mismatch",
                reported = feedback.queue_used,
                last_selected = last,
            );
        }

        let update = self.learner.observe(last, feedback, &mut self.weights);
        match update {
            WeightUpdate::Applied { winner } => {
                self.statistics.record_update(true);
                debug!(
                    event = "weights_updated",
                    learner = self.learner.name(),
                    winner,
                    g = feedback.g,
                    weights = ?self.weights,
                );
            }
            WeightUpdate::Skipped { winner } => {
                self.statistics.record_update(false);
                debug!(
                    event = "weights_update_skipped",
                    learner = self.learner.name(),
                    winner,
                    g = feedback.g,
                    weights = ?self.weights,
                );
            }
            WeightUpdate::Unchanged => {}
        }
    }

    /// Lowers the priority counter of every preferred-only sub-queue.
    ///
    /// Only round-robin selection reads the counters.
    pub fn boost_preferred(&mut self) {
        for (i, queue) in self.queues.iter().enumerate() {
            if queue.only_contains_preferred_entries() {
                self.priorities[i] -= self.boost_amount;
            }
        }
    }

    /// Clears every sub-queue and restores the initial selection state.
    ///
    /// Unlike [`OpenList::clear`], this also resets priority counters,
    /// weights, learner memory and statistics, and re-seeds the generator,
    /// so a restarted search repeats its earlier selections. Nested
    /// alternation sub-queues are only cleared.
    pub fn reset(&mut self) {
        for queue in &mut self.queues {
            queue.clear();
        }
        self.priorities.iter_mut().for_each(|p| *p = 0);
        self.weights.clone_from(&self.initial_weights);
        self.learner.reset();
        self.last_selected = None;
        self.rng = StdRng::seed_from_u64(self.seed);
        self.statistics.reset();
        info!(event = "alternation_reset", queues = self.queues.len());
    }

    /// Index of the queue used by the previous removal.
    pub fn last_selected(&self) -> Option<usize> {
        self.last_selected
    }

    /// Number of sub-queues.
    pub fn queue_count(&self) -> usize {
        self.queues.len()
    }

    /// Returns sub-queue `index`.
    pub fn queue(&self, index: usize) -> Option<&dyn OpenList<E, C>> {
        self.queues.get(index).map(|q| q.as_ref())
    }

    pub fn decision(&self) -> Decision {
        self.decision
    }

    pub fn priorities(&self) -> &[i64] {
        &self.priorities
    }

    /// Current selection weights.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn learner(&self) -> &dyn WeightLearner {
        self.learner.as_ref()
    }

    pub fn statistics(&self) -> &SelectionStatistics {
        &self.statistics
    }
}

impl<E: Clone, C> OpenList<E, C> for AlternationOpenList<E, C> {
    fn insert(&mut self, context: &C, entry: E) -> Result<()> {
        for queue in &mut self.queues {
            queue.insert(context, entry.clone())?;
        }
        Ok(())
    }

    /// Removes an entry without feedback, so weights never adapt here.
    fn remove_min(&mut self) -> Result<E> {
        AlternationOpenList::remove_min(self, None)
    }

    fn is_empty(&self) -> bool {
        self.queues.iter().all(|q| q.is_empty())
    }

    /// Total entries over all sub-queues, counting each copy.
    fn len(&self) -> usize {
        self.queues.iter().map(|q| q.len()).sum()
    }

    /// Clears every sub-queue.
    ///
    /// Priority counters, weights and learner memory persist; use
    /// [`AlternationOpenList::reset`] to restore them as well.
    fn clear(&mut self) {
        for queue in &mut self.queues {
            queue.clear();
        }
    }

    fn only_contains_preferred_entries(&self) -> bool {
        self.queues.iter().all(|q| q.only_contains_preferred_entries())
    }

    /// A state is a dead end if one sub-queue is sure of it, or if all of
    /// them agree.
    fn is_dead_end(&self, context: &C) -> bool {
        if self.is_reliable_dead_end(context) {
            return true;
        }
        self.queues.iter().all(|q| q.is_dead_end(context))
    }

    fn is_reliable_dead_end(&self, context: &C) -> bool {
        self.queues.iter().any(|q| q.is_reliable_dead_end(context))
    }

    fn collect_path_dependent_evaluators(&self, evals: &mut BTreeSet<EvaluatorId>) {
        for queue in &self.queues {
            queue.collect_path_dependent_evaluators(evals);
        }
    }

    fn boost_preferred(&mut self) {
        AlternationOpenList::boost_preferred(self);
    }
}

#[cfg(test)]
mod tests;
