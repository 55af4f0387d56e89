//! Shared test fixtures for altsearch crates.
//!
//! This crate provides simple open lists with scripted predicates so that
//! composite open lists can be tested without real heuristics.
//!
//! - [`fifo`] - First-in first-out open list and its factory
//! - [`keyed`] - Min-key open list ordered by a key function
//! - [`verdict`] - Scripted dead-end and preferred answers
//! - [`logging`] - Test tracing subscriber
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! altsearch-test = { workspace = true }
//! ```

pub mod fifo;
pub mod keyed;
pub mod logging;
pub mod verdict;

pub use fifo::{FifoFactory, FifoOpenList};
pub use keyed::{KeyedFactory, KeyedOpenList};
pub use logging::init_test_tracing;
pub use verdict::Verdict;
