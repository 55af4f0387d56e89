//! Bounded per-queue cost history.

use std::collections::VecDeque;

/// Sliding window of the most recent g-values observed for one queue.
#[derive(Debug, Clone)]
pub struct CostHistory {
    capacity: usize,
    samples: VecDeque<f64>,
}

impl CostHistory {
    /// Creates an empty history keeping at most `capacity` samples.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            samples: VecDeque::with_capacity(capacity),
        }
    }

    /// Appends a sample, evicting the oldest once full.
    pub fn push(&mut self, g: f64) {
        self.samples.push_back(g);
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    /// Returns the arithmetic mean, or 0 if no samples were recorded.
    pub fn mean(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().sum::<f64>() / self.samples.len() as f64
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates samples from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}
