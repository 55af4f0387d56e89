//! Selection statistics.

/// Counters describing how an alternation list has been selecting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStatistics {
    selections: Vec<u64>,
    removals: u64,
    updates_applied: u64,
    updates_skipped: u64,
}

impl SelectionStatistics {
    pub fn new(queue_count: usize) -> Self {
        Self {
            selections: vec![0; queue_count],
            ..Default::default()
        }
    }

    pub(crate) fn record_selection(&mut self, queue: usize) {
        if let Some(count) = self.selections.get_mut(queue) {
            *count += 1;
        }
        self.removals += 1;
    }

    pub(crate) fn record_update(&mut self, applied: bool) {
        if applied {
            self.updates_applied += 1;
        } else {
            self.updates_skipped += 1;
        }
    }

    pub(crate) fn reset(&mut self) {
        self.selections.iter_mut().for_each(|c| *c = 0);
        self.removals = 0;
        self.updates_applied = 0;
        self.updates_skipped = 0;
    }

    /// Number of times each queue was drawn from.
    pub fn selections(&self) -> &[u64] {
        &self.selections
    }

    /// Number of times `queue` was drawn from.
    pub fn selection_count(&self, queue: usize) -> u64 {
        self.selections.get(queue).copied().unwrap_or(0)
    }

    /// Total successful removals.
    pub fn removals(&self) -> u64 {
        self.removals
    }

    /// Adaptive weight updates that moved weight.
    pub fn updates_applied(&self) -> u64 {
        self.updates_applied
    }

    /// Adaptive weight updates rejected by the weight bounds.
    pub fn updates_skipped(&self) -> u64 {
        self.updates_skipped
    }

    /// Fraction of removals served by `queue`, or 0 before the first removal.
    pub fn selection_share(&self, queue: usize) -> f64 {
        if self.removals == 0 {
            return 0.0;
        }
        self.selection_count(queue) as f64 / self.removals as f64
    }
}
