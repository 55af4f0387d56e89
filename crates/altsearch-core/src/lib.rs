//! altsearch Core - Core types and traits for open lists
//!
//! This crate provides the fundamental abstractions shared by every
//! altsearch crate:
//! - The [`OpenList`] contract consumed by composite open lists
//! - The [`OpenListFactory`] used to instantiate sub-queues from configuration
//! - Evaluator identities for path-dependent evaluator collection
//! - Error types and planner exit codes

pub mod error;
pub mod evaluator;
pub mod open_list;


pub use error::{ExitCode, OpenListError, Result};
pub use evaluator::EvaluatorId;
pub use open_list::{OpenList, OpenListFactory};
