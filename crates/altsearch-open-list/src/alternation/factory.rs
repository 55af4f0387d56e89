//! Factory for nested alternation open lists.

use std::fmt::Debug;
use std::sync::Arc;

use tracing::warn;

use altsearch_config::{AlternationConfig, ConfigError, Decision};
use altsearch_core::{OpenList, OpenListFactory};

use super::AlternationOpenList;

/// Creates [`AlternationOpenList`]s from a validated configuration.
///
/// Validation happens once, in [`new`](Self::new); every list created
/// afterwards gets fresh sub-queues from the stored factories. Because the
/// factory is itself an [`OpenListFactory`], alternation lists can be used
/// as sub-queues of other alternation lists.
///
/// A nested list is only reachable through [`OpenList::remove_min`], which
/// carries no feedback. A nested [`Decision::WeightedAdaptive`] list
/// therefore samples its initial weights forever; use [`create`](Self::create)
/// and pass feedback to the concrete list to make it learn.
pub struct AlternationOpenListFactory<E, C> {
    sublists: Vec<Arc<dyn OpenListFactory<E, C>>>,
    config: AlternationConfig,
}

impl<E, C> Debug for AlternationOpenListFactory<E, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlternationOpenListFactory")
            .field("sublists", &self.sublists.len())
            .field("config", &self.config)
            .finish()
    }
}

impl<E, C> AlternationOpenListFactory<E, C> {
    /// Validates `config` against `sublists` and stores both.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] produced by
    /// [`AlternationConfig::validate`].
    pub fn new(
        sublists: Vec<Arc<dyn OpenListFactory<E, C>>>,
        config: AlternationConfig,
    ) -> Result<Self, ConfigError> {
        config.validate(sublists.len())?;
        Ok(Self { sublists, config })
    }

    pub fn config(&self) -> &AlternationConfig {
        &self.config
    }

    pub fn sublist_count(&self) -> usize {
        self.sublists.len()
    }

    /// Creates a new alternation list with its concrete type.
    pub fn create(&self) -> AlternationOpenList<E, C> {
        let queues = self
            .sublists
            .iter()
            .map(|factory| factory.create_open_list())
            .collect();
        AlternationOpenList::assemble(queues, &self.config)
    }
}

impl<E: Clone + 'static, C: 'static> OpenListFactory<E, C> for AlternationOpenListFactory<E, C> {
    fn create_open_list(&self) -> Box<dyn OpenList<E, C>> {
        if self.config.decision == Decision::WeightedAdaptive {
            warn!(
                event = "nested_weighted_without_feedback",
                queues = self.sublists.len(),
                "boxed weighted alternation list never receives feedback; weights stay fixed"
            );
        }
        Box::new(self.create())
    }
}
