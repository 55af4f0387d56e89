//! altsearch Open Lists
//!
//! This crate provides the alternation open list and its building blocks:
//! - [`AlternationOpenList`]: fan-out insertion, policy-driven removal,
//!   dead-end aggregation and preferred boosting over several sub-queues
//! - Selection policies (round-robin, uniform random, weighted random)
//! - Adaptive weight learning from search-progress [`Feedback`]
//! - Selection statistics

pub mod alternation;
pub mod feedback;
pub mod learning;
pub mod selection;
pub mod statistics;

pub use alternation::{AlternationOpenList, AlternationOpenListFactory};
pub use feedback::Feedback;
pub use learning::{CostHistory, GreedyMeanLearner, WeightBounds, WeightLearner, WeightUpdate};
pub use selection::Partition;
pub use statistics::SelectionStatistics;

pub use altsearch_config::{AlternationConfig, ConfigError, Decision, LearningConfig};
