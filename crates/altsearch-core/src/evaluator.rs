//! Evaluator identities.

/// Opaque identity of a heuristic evaluator.
///
/// Open lists report the evaluators whose values depend on the path taken
/// to a state, so the search loop can notify them on every expansion.
/// Only identity matters here; the evaluators themselves live elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvaluatorId(pub u32);

impl EvaluatorId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for EvaluatorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "eval#{}", self.0)
    }
}
