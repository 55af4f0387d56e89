//! The open list contract.
//!
//! An open list holds not-yet-expanded search candidates ordered by some
//! priority of its own choosing. Composite lists hold several of these and
//! treat them purely through this trait.

use std::collections::BTreeSet;

use crate::error::Result;
use crate::evaluator::EvaluatorId;

/// A priority container for opaque frontier entries.
///
/// # Type Parameters
/// * `E` - Entry type (a state id, a state/operator edge, ...)
/// * `C` - Evaluation context handed through on insertion and dead-end queries
pub trait OpenList<E, C> {
    /// Inserts an entry evaluated in `context`.
    fn insert(&mut self, context: &C, entry: E) -> Result<()>;

    /// Removes and returns a minimal entry by this list's own criterion.
    ///
    /// Returns [`OpenListError::Exhausted`](crate::OpenListError::Exhausted)
    /// when the list is empty.
    fn remove_min(&mut self) -> Result<E>;

    /// Returns true if no entries remain.
    fn is_empty(&self) -> bool;

    /// Returns the number of stored entries.
    fn len(&self) -> usize;

    /// Removes all entries.
    fn clear(&mut self);

    /// Returns true if every stored entry is a preferred entry.
    fn only_contains_preferred_entries(&self) -> bool;

    /// Returns true if the state in `context` looks like a dead end.
    fn is_dead_end(&self, context: &C) -> bool;

    /// Returns true if the state in `context` is certainly a dead end.
    fn is_reliable_dead_end(&self, context: &C) -> bool;

    /// Adds every path-dependent evaluator this list uses to `evals`.
    fn collect_path_dependent_evaluators(&self, evals: &mut BTreeSet<EvaluatorId>);

    /// Biases selection toward preferred-only contents, if supported.
    fn boost_preferred(&mut self) {}
}

/// Creates open lists on demand.
///
/// Configuration refers to sub-queues by factory so that a composite list
/// can build a fresh instance of each one.
pub trait OpenListFactory<E, C> {
    /// Creates a new, empty open list.
    fn create_open_list(&self) -> Box<dyn OpenList<E, C>>;
}

impl<E, C, F> OpenListFactory<E, C> for F
where
    F: Fn() -> Box<dyn OpenList<E, C>>,
{
    fn create_open_list(&self) -> Box<dyn OpenList<E, C>> {
        self()
    }
}
