//! Search-progress feedback for adaptive selection.

/// Observation about the entry returned by the previous removal.
///
/// The search loop passes this on its next `remove_min` call once it has
/// looked up the path cost and evaluation of the popped entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Feedback {
    /// Index of the queue the previous entry was drawn from.
    pub queue_used: usize,
    /// Path cost of the previous entry.
    pub g: f64,
    /// Evaluation value of the previous entry.
    pub f: f64,
}

impl Feedback {
    pub fn new(queue_used: usize, g: f64, f: f64) -> Self {
        Self { queue_used, g, f }
    }
}
