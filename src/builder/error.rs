//! Build errors for the mode stack builder.

use thiserror::Error;

/// Errors that can occur when building a mode stack.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial mode not specified. Call .initial(mode) or .history(history) before .build()")]
    MissingInitialMode,
}
