//! altsearch - Alternation Open Lists in Rust
//!
//! Combine several differently ordered open lists over the same search
//! frontier and let a selection policy decide which one to pop from.
//!
//! # Example
//!
//! ```rust
//! use altsearch::prelude::*;
//! use altsearch_test::FifoOpenList;
//!
//! let queues: Vec<Box<dyn OpenList<&str, ()>>> = vec![
//!     Box::new(FifoOpenList::new()),
//!     Box::new(FifoOpenList::new()),
//! ];
//! let config = AlternationConfig::new()
//!     .with_decision(Decision::WeightedAdaptive)
//!     .with_probs(vec![0.5, 0.5])
//!     .with_seed(7);
//! let mut open = AlternationOpenList::from_queues(queues, &config).unwrap();
//!
//! open.insert(&(), "root").unwrap();
//! assert_eq!(open.remove_min(None).unwrap(), "root");
//! assert!(!open.is_empty());
//! ```

// Core contract
pub use altsearch_core::{ExitCode, EvaluatorId, OpenList, OpenListError, OpenListFactory, Result};

// Configuration
pub use altsearch_config::{AlternationConfig, ConfigError, Decision, LearningConfig};

// Alternation
pub use altsearch_open_list::{
    AlternationOpenList, AlternationOpenListFactory, Feedback, SelectionStatistics,
};

// Adaptive weights, for custom update rules
pub use altsearch_open_list::learning;

// Selection policies
pub use altsearch_open_list::selection;

pub mod prelude {
    pub use super::{
        AlternationConfig, AlternationOpenList, AlternationOpenListFactory, Decision, Feedback,
    };
    pub use super::{OpenList, OpenListError, OpenListFactory};
}
