//! First-in first-out fixture open list.

use std::collections::{BTreeSet, VecDeque};

use altsearch_core::{EvaluatorId, OpenList, OpenListError, OpenListFactory, Result};

use crate::verdict::Verdict;

/// Open list returning entries in insertion order.
#[derive(Debug, Clone)]
pub struct FifoOpenList<E> {
    entries: VecDeque<E>,
    verdict: Verdict,
}

impl<E> FifoOpenList<E> {
    pub fn new() -> Self {
        Self::with_verdict(Verdict::default())
    }

    pub fn with_verdict(verdict: Verdict) -> Self {
        Self {
            entries: VecDeque::new(),
            verdict,
        }
    }
}

impl<E> Default for FifoOpenList<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, C> OpenList<E, C> for FifoOpenList<E> {
    fn insert(&mut self, _context: &C, entry: E) -> Result<()> {
        if self.verdict.rejects_inserts {
            return Err(OpenListError::Insertion("fifo fixture rejects entries".into()));
        }
        self.entries.push_back(entry);
        Ok(())
    }

    fn remove_min(&mut self) -> Result<E> {
        self.entries.pop_front().ok_or(OpenListError::Exhausted)
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn only_contains_preferred_entries(&self) -> bool {
        self.verdict.preferred_only
    }

    fn is_dead_end(&self, _context: &C) -> bool {
        self.verdict.dead_end
    }

    fn is_reliable_dead_end(&self, _context: &C) -> bool {
        self.verdict.reliable_dead_end
    }

    fn collect_path_dependent_evaluators(&self, evals: &mut BTreeSet<EvaluatorId>) {
        evals.extend(self.verdict.evaluators.iter().copied());
    }
}

/// Factory producing [`FifoOpenList`]s with a fixed verdict.
#[derive(Debug, Clone, Default)]
pub struct FifoFactory {
    verdict: Verdict,
}

impl FifoFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_verdict(verdict: Verdict) -> Self {
        Self { verdict }
    }
}

impl<E: 'static, C> OpenListFactory<E, C> for FifoFactory {
    fn create_open_list(&self) -> Box<dyn OpenList<E, C>> {
        Box::new(FifoOpenList::with_verdict(self.verdict.clone()))
    }
}
