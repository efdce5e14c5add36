//! Builder for constructing mode stacks.

use crate::builder::error::BuildError;
use crate::core::ModeHistory;
use crate::stack::ModeStack;
use std::fmt::Debug;

/// Builder for constructing mode stacks with a fluent API.
pub struct ModeStackBuilder<M> {
    seed: Option<ModeHistory<M>>,
}

impl<M: Clone + Debug> ModeStackBuilder<M> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// Set the initial mode (required unless `history` is given).
    pub fn initial(mut self, mode: M) -> Self {
        self.seed = Some(ModeHistory::new(mode));
        self
    }

    /// Start from an existing history instead of a single mode.
    pub fn history(mut self, history: ModeHistory<M>) -> Self {
        self.seed = Some(history);
        self
    }

    /// Start from raw entries, oldest first.
    /// Returns an error if `entries` is empty.
    pub fn entries(self, entries: Vec<M>) -> Result<Self, BuildError> {
        let history = ModeHistory::try_from(entries).map_err(|_| BuildError::MissingInitialMode)?;
        Ok(self.history(history))
    }

    /// Build the mode stack.
    /// Returns an error if no initial mode was given.
    pub fn build(self) -> Result<ModeStack<M>, BuildError> {
        let history = self.seed.ok_or(BuildError::MissingInitialMode)?;
        tracing::debug!(
            initial = ?history.initial(),
            depth = history.depth(),
            "built mode stack"
        );
        Ok(ModeStack::from_history(history))
    }
}

impl<M: Clone + Debug> Default for ModeStackBuilder<M> {
    fn default() -> Self {
        Self::new()
    }
}
