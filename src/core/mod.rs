//! Core mode types.
//!
//! This module contains the pure core of the mode stack:
//! - Mode definitions via the `Mode` trait
//! - Non-empty, copy-on-write history
//! - History construction errors

mod error;
mod history;
mod mode;

pub use error::HistoryError;
pub use history::ModeHistory;
pub use mode::Mode;
