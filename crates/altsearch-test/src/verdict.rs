//! Scripted answers for open list predicates and insertions.

use std::collections::BTreeSet;

use altsearch_core::EvaluatorId;

/// Fixed answers a fixture open list gives to every query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Verdict {
    pub dead_end: bool,
    pub reliable_dead_end: bool,
    pub preferred_only: bool,
    pub rejects_inserts: bool,
    pub evaluators: BTreeSet<EvaluatorId>,
}

impl Verdict {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports every state as a (possibly unreliable) dead end.
    pub fn dead_end(mut self) -> Self {
        self.dead_end = true;
        self
    }

    /// Reports every state as a reliable dead end.
    pub fn reliable_dead_end(mut self) -> Self {
        self.dead_end = true;
        self.reliable_dead_end = true;
        self
    }

    /// Claims to hold preferred entries only.
    pub fn preferred_only(mut self) -> Self {
        self.preferred_only = true;
        self
    }

    /// Fails every insertion with [`OpenListError::Insertion`].
    ///
    /// [`OpenListError::Insertion`]: altsearch_core::OpenListError::Insertion
    pub fn rejecting_inserts(mut self) -> Self {
        self.rejects_inserts = true;
        self
    }

    pub fn with_evaluator(mut self, id: u32) -> Self {
        self.evaluators.insert(EvaluatorId::new(id));
        self
    }
}
