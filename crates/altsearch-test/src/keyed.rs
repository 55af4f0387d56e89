//! Min-key fixture open list.

use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap};

use altsearch_core::{EvaluatorId, OpenList, OpenListError, OpenListFactory, Result};

use crate::verdict::Verdict;

struct Keyed<E> {
    key: i64,
    seq: u64,
    entry: E,
}

impl<E> PartialEq for Keyed<E> {
    fn eq(&self, other: &Self) -> bool {
        (self.key, self.seq) == (other.key, other.seq)
    }
}

impl<E> Eq for Keyed<E> {}

impl<E> PartialOrd for Keyed<E> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> Ord for Keyed<E> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.key, self.seq).cmp(&(other.key, other.seq))
    }
}

/// Open list returning the entry with the smallest key.
///
/// Entries with equal keys come out in insertion order.
pub struct KeyedOpenList<E> {
    key: fn(&E) -> i64,
    heap: BinaryHeap<Reverse<Keyed<E>>>,
    next_seq: u64,
    verdict: Verdict,
}

impl<E> std::fmt::Debug for KeyedOpenList<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyedOpenList")
            .field("len", &self.heap.len())
            .field("verdict", &self.verdict)
            .finish()
    }
}

impl<E> KeyedOpenList<E> {
    pub fn new(key: fn(&E) -> i64) -> Self {
        Self::with_verdict(key, Verdict::default())
    }

    pub fn with_verdict(key: fn(&E) -> i64, verdict: Verdict) -> Self {
        Self {
            key,
            heap: BinaryHeap::new(),
            next_seq: 0,
            verdict,
        }
    }
}

impl<E, C> OpenList<E, C> for KeyedOpenList<E> {
    fn insert(&mut self, _context: &C, entry: E) -> Result<()> {
        if self.verdict.rejects_inserts {
            return Err(OpenListError::Insertion("keyed fixture rejects entries".into()));
        }
        let key = (self.key)(&entry);
        self.heap.push(Reverse(Keyed {
            key,
            seq: self.next_seq,
            entry,
        }));
        self.next_seq += 1;
        Ok(())
    }

    fn remove_min(&mut self) -> Result<E> {
        self.heap
            .pop()
            .map(|Reverse(keyed)| keyed.entry)
            .ok_or(OpenListError::Exhausted)
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        self.heap.clear();
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

/// Factory producing [`KeyedOpenList`]s.
pub struct KeyedFactory<E> {
    key: fn(&E) -> i64,
    verdict: Verdict,
}

impl<E> KeyedFactory<E> {
    pub fn new(key: fn(&E) -> i64) -> Self {
        Self {
            key,
            verdict: Verdict::default(),
        }
    }

    pub fn with_verdict(key: fn(&E) -> i64, verdict: Verdict) -> Self {
        Self { key, verdict }
    }
}

impl<E: 'static, C> OpenListFactory<E, C> for KeyedFactory<E> {
    fn create_open_list(&self) -> Box<dyn OpenList<E, C>> {
        Box::new(KeyedOpenList::with_verdict(self.key, self.verdict.clone()))
    }
}
