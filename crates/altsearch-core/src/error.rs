//! Error types for altsearch

use thiserror::Error;

/// Main error type for open list operations.
#[derive(Debug, Error)]
pub enum OpenListError {
    /// Removal was requested while every sub-queue was empty.
    #[error("remove_min called on an empty open list")]
    Exhausted,

    /// The selection distribution does not line up with the non-empty queues.
    #[error("invalid selection distribution: {weights} weights for {non_empty} non-empty queues")]
    InvalidDistribution {
        /// Number of weights collected for sampling.
        weights: usize,
        /// Number of non-empty queues.
        non_empty: usize,
    },

    /// A sub-queue rejected an entry.
    #[error("insertion failed: {0}")]
    Insertion(String),
}

impl OpenListError {
    /// Returns the planner exit code this error terminates the run with.
    ///
    /// Every open list error is a logic defect, never a transient failure.
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::SearchCriticalError
    }
}

/// Result type alias for open list operations
pub type Result<T> = std::result::Result<T, OpenListError>;

/// Process exit codes shared with the planner driver.
///
/// Values match the driver's exit code table so run logs can be
/// classified without knowing which component failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i32)]
pub enum ExitCode {
    Success = 0,
    SearchUnsolvable = 11,
    SearchUnsolvedIncomplete = 12,
    SearchOutOfMemory = 22,
    SearchOutOfTime = 23,
    SearchCriticalError = 32,
    SearchInputError = 33,
    SearchUnsupported = 34,
}

impl ExitCode {
    /// Returns the numeric process status.
    #[inline]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Returns true for statuses that denote an unrecoverable error.
    pub fn is_error(self) -> bool {
        matches!(
            self,
            ExitCode::SearchCriticalError | ExitCode::SearchInputError | ExitCode::SearchUnsupported
        )
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ExitCode::Success => "SUCCESS",
            ExitCode::SearchUnsolvable => "SEARCH_UNSOLVABLE",
            ExitCode::SearchUnsolvedIncomplete => "SEARCH_UNSOLVED_INCOMPLETE",
            ExitCode::SearchOutOfMemory => "SEARCH_OUT_OF_MEMORY",
            ExitCode::SearchOutOfTime => "SEARCH_OUT_OF_TIME",
            ExitCode::SearchCriticalError => "SEARCH_CRITICAL_ERROR",
            ExitCode::SearchInputError => "SEARCH_INPUT_ERROR",
            ExitCode::SearchUnsupported => "SEARCH_UNSUPPORTED",
        };
        write!(f, "{}", name)
    }
}
