//! History error types.

use thiserror::Error;

/// Errors that can occur when constructing a history from raw entries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HistoryError {
    /// A history must hold at least the initial mode
    #[error("Mode history cannot be empty")]
    Empty,
}
