//! Configuration system for altsearch.
//!
//! Load alternation open list options from TOML or YAML so that experiment
//! runs can switch selection policies without code changes.
//!
//! # Examples
//!
//! ```
//! use altsearch_config::{AlternationConfig, Decision};
//!
//! let config = AlternationConfig::from_toml_str(r#"
//!     decision = 2
//!     seed = 7
//!     probs = [0.25, 0.75]
//!
//!     [learning]
//!     learning_rate = 0.02
//! "#).unwrap();
//!
//! assert_eq!(config.decision, Decision::WeightedAdaptive);
//! assert!(config.validate(2).is_ok());
//! ```
//!
//! Every option has a default, so an empty document is a valid
//! round-robin configuration:
//!
//! ```
//! use altsearch_config::AlternationConfig;
//!
//! let config = AlternationConfig::from_toml_str("").unwrap();
//! assert_eq!(config.seed, 42);
//! ```

use std::path::Path;

use altsearch_core::ExitCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tolerance for the probability sum check.
pub const PROBABILITY_SUM_TOLERANCE: f64 = 1e-6;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("at least one sublist is required")]
    EmptySublists,

    #[error("weighted decision requires a non-empty probs list")]
    MissingProbabilities,

    #[error("invalid probabilities size: expected {expected}, got {actual}")]
    ProbabilityCountMismatch { expected: usize, actual: usize },

    #[error("invalid probabilities sum: {sum}")]
    ProbabilitySum { sum: f64 },

    #[error("invalid decision value: {0}")]
    InvalidDecision(i64),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Returns the planner exit code for this error.
    ///
    /// Configuration errors are detected once, before search, and are never
    /// retried.
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::SearchCriticalError
    }
}

/// How the alternation list picks the sub-queue to draw from.
///
/// Serialized as the integer codes `0`, `1` and `2`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Decision {
    /// Lowest priority counter among non-empty queues.
    #[default]
    RoundRobin,

    /// Uniformly random non-empty queue.
    UniformRandom,

    /// Weighted random non-empty queue with weights learned from feedback.
    WeightedAdaptive,
}

impl Decision {
    /// Returns the integer code of this decision.
    pub fn code(self) -> i64 {
        match self {
            Decision::RoundRobin => 0,
            Decision::UniformRandom => 1,
            Decision::WeightedAdaptive => 2,
        }
    }

    /// Returns true if this decision samples from the random generator.
    pub fn is_random(self) -> bool {
        !matches!(self, Decision::RoundRobin)
    }
}

impl TryFrom<i64> for Decision {
    type Error = ConfigError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Decision::RoundRobin),
            1 => Ok(Decision::UniformRandom),
            2 => Ok(Decision::WeightedAdaptive),
            other => Err(ConfigError::InvalidDecision(other)),
        }
    }
}

impl From<Decision> for i64 {
    fn from(decision: Decision) -> Self {
        decision.code()
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::RoundRobin => write!(f, "RoundRobin"),
            Decision::UniformRandom => write!(f, "UniformRandom"),
            Decision::WeightedAdaptive => write!(f, "WeightedAdaptive"),
        }
    }
}

/// Alternation open list configuration.
///
/// The sub-queue factories themselves are code, not data, and are passed
/// separately when the open list is built; `validate` takes their count.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct AlternationConfig {
    /// Amount subtracted from the priority counter of preferred-only queues.
    #[serde(default)]
    pub boost: i64,

    /// Selection policy.
    #[serde(default)]
    pub decision: Decision,

    /// Seed of the open list's private random generator.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Initial selection weights, one per sublist.
    #[serde(default)]
    pub probs: Vec<f64>,

    /// Adaptive weight learning parameters.
    #[serde(default)]
    pub learning: LearningConfig,
}

fn default_seed() -> u64 {
    42
}

impl Default for AlternationConfig {
    fn default() -> Self {
        Self {
            boost: 0,
            decision: Decision::RoundRobin,
            seed: default_seed(),
            probs: Vec::new(),
            learning: LearningConfig::default(),
        }
    }
}

impl AlternationConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, YAML for `.yaml` / `.yml` and TOML
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist or fails to parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn with_boost(mut self, boost: i64) -> Self {
        self.boost = boost;
        self
    }

    pub fn with_decision(mut self, decision: Decision) -> Self {
        self.decision = decision;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_probs(mut self, probs: Vec<f64>) -> Self {
        self.probs = probs;
        self
    }

    pub fn with_learning(mut self, learning: LearningConfig) -> Self {
        self.learning = learning;
        self
    }

    /// Validates the configuration against the number of sublists.
    ///
    /// # Errors
    ///
    /// Fails when there are no sublists, when the weighted decision lacks a
    /// matching probability vector summing to one within the weight bounds,
    /// or when the learning parameters are out of range.
    pub fn validate(&self, sublist_count: usize) -> Result<(), ConfigError> {
        if sublist_count == 0 {
            return Err(ConfigError::EmptySublists);
        }
        if self.decision == Decision::WeightedAdaptive {
            if self.probs.is_empty() {
                return Err(ConfigError::MissingProbabilities);
            }
            if self.probs.len() != sublist_count {
                return Err(ConfigError::ProbabilityCountMismatch {
                    expected: sublist_count,
                    actual: self.probs.len(),
                });
            }
            let sum: f64 = self.probs.iter().sum();
            if !sum.is_finite() || (sum - 1.0).abs() >= PROBABILITY_SUM_TOLERANCE {
                return Err(ConfigError::ProbabilitySum { sum });
            }
            if let Some(p) = self.probs.iter().find(|p| **p < 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "probabilities must be non-negative, got {}",
                    p
                )));
            }
        }
        self.learning.validate()?;
        if self.decision == Decision::WeightedAdaptive && sublist_count > 1 {
            self.validate_weight_bounds(sublist_count)?;
        }
        Ok(())
    }

    // A single queue always carries the whole weight and never learns.
    fn validate_weight_bounds(&self, sublist_count: usize) -> Result<(), ConfigError> {
        let LearningConfig {
            min_weight,
            max_weight,
            ..
        } = self.learning;
        let n = sublist_count as f64;
        if n * min_weight > 1.0 + PROBABILITY_SUM_TOLERANCE
            || n * max_weight < 1.0 - PROBABILITY_SUM_TOLERANCE
        {
            return Err(ConfigError::Invalid(format!(
                "weight bounds [{}, {}] cannot hold {} weights summing to 1",
                min_weight, max_weight, sublist_count
            )));
        }
        if let Some((i, p)) = self
            .probs
            .iter()
            .enumerate()
            .find(|(_, p)| **p < min_weight || **p > max_weight)
        {
            return Err(ConfigError::Invalid(format!(
                "probability {} of sublist {} lies outside weight bounds [{}, {}]",
                p, i, min_weight, max_weight
            )));
        }
        Ok(())
    }

    /// Returns the initial weight vector for `sublist_count` queues.
    ///
    /// The weighted decision starts from `probs`; the other decisions never
    /// sample weights and get a uniform vector.
    pub fn initial_weights(&self, sublist_count: usize) -> Vec<f64> {
        if self.decision == Decision::WeightedAdaptive {
            self.probs.clone()
        } else if sublist_count == 0 {
            Vec::new()
        } else {
            vec![1.0 / sublist_count as f64; sublist_count]
        }
    }
}

/// Parameters for the adaptive weight update.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct LearningConfig {
    /// Weight moved onto the winning queue per update.
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,

    /// No weight may drop below this value.
    #[serde(default = "default_min_weight")]
    pub min_weight: f64,

    /// No weight may rise above this value.
    #[serde(default = "default_max_weight")]
    pub max_weight: f64,

    /// Number of recent g-values kept per queue.
    #[serde(default = "default_max_history")]
    pub max_history: usize,
}

fn default_learning_rate() -> f64 {
    0.01
}

fn default_min_weight() -> f64 {
    0.2
}

fn default_max_weight() -> f64 {
    0.8
}

fn default_max_history() -> usize {
    10
}

impl Default for LearningConfig {
    fn default() -> Self {
        Self {
            learning_rate: default_learning_rate(),
            min_weight: default_min_weight(),
            max_weight: default_max_weight(),
            max_history: default_max_history(),
        }
    }
}

impl LearningConfig {
    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_weight_bounds(mut self, min: f64, max: f64) -> Self {
        self.min_weight = min;
        self.max_weight = max;
        self
    }

    pub fn with_max_history(mut self, max_history: usize) -> Self {
        self.max_history = max_history;
        self
    }

    /// Validates the learning parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.learning_rate > 0.0 && self.learning_rate.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "learning_rate must be positive, got {}",
                self.learning_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.min_weight) || !(0.0..=1.0).contains(&self.max_weight) {
            return Err(ConfigError::Invalid(format!(
                "weight bounds must lie in [0, 1], got [{}, {}]",
                self.min_weight, self.max_weight
            )));
        }
        if self.min_weight > self.max_weight {
            return Err(ConfigError::Invalid(
                "min_weight must be <= max_weight".into(),
            ));
        }
        if self.max_history == 0 {
            return Err(ConfigError::Invalid("max_history must be positive".into()));
        }
        Ok(())
    }
}
