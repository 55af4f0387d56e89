//! Queue selection policies.
//!
//! Each policy receives the indices of the non-empty queues (in ascending
//! order) and picks one of them. Policies never see empty queues.

mod round_robin;
mod uniform;
mod weighted;

use smallvec::SmallVec;

use altsearch_core::OpenList;

pub use round_robin::select_round_robin;
pub use uniform::select_uniform;
pub use weighted::{redistribute_empty_weight, select_weighted};

/// Queue indices split by emptiness, both in ascending order.
#[derive(Debug, Clone, Default)]
pub struct Partition {
    pub non_empty: SmallVec<[usize; 8]>,
    pub empty: SmallVec<[usize; 8]>,
}

impl Partition {
    /// Partitions `queues` by their current emptiness.
    pub fn of<E, C>(queues: &[Box<dyn OpenList<E, C>>]) -> Self {
        let mut partition = Self::default();
        for (i, queue) in queues.iter().enumerate() {
            if queue.is_empty() {
                partition.empty.push(i);
            } else {
                partition.non_empty.push(i);
            }
        }
        partition
    }

    /// Returns true if every queue is empty.
    pub fn is_exhausted(&self) -> bool {
        self.non_empty.is_empty()
    }

    /// Returns the weights of the non-empty and of the empty queues.
    pub fn split_weights(&self, weights: &[f64]) -> (SmallVec<[f64; 8]>, SmallVec<[f64; 8]>) {
        let pick = |indices: &[usize]| -> SmallVec<[f64; 8]> {
            indices
                .iter()
                .filter_map(|&i| weights.get(i).copied())
                .collect()
        };
        (pick(&self.non_empty), pick(&self.empty))
    }
}
