//! Modestack: a finite-history view-state machine
//!
//! Modestack tracks a current mode and the chronological stack of modes
//! visited before it. Hosts move forward (optionally replacing the most
//! recent entry) and back one step at a time; the initial mode is a floor
//! that `back` never goes below.
//!
//! The history is a pure, copy-on-write value. `ModeStack` is the small
//! mutable shell around it.
//!
//! # Core Concepts
//!
//! - **Mode**: Host-defined view value via the `Mode` trait
//! - **History**: Non-empty record of visited modes; the last one is current
//! - **Replace transition**: Overwrites the current entry instead of appending
//! - **Floor**: The initial entry, which `back` never removes
//!
//! # Example
//!
//! ```rust
//! use modestack::mode_enum;
//! use modestack::ModeStack;
//!
//! mode_enum! {
//!     enum FormMode {
//!         Empty,
//!         Edit,
//!         Error,
//!     }
//!     error: [Error]
//! }
//!
//! let mut stack = ModeStack::new(FormMode::Empty);
//! stack.push(FormMode::Edit);
//! stack.replace(FormMode::Error);
//! assert_eq!(stack.current_mode(), &FormMode::Error);
//!
//! stack.back();
//! assert_eq!(stack.current_mode(), &FormMode::Empty);
//! ```

pub mod builder;
pub mod core;
pub mod stack;

// Re-export commonly used types
pub use builder::{BuildError, ModeStackBuilder};
pub use core::{HistoryError, Mode, ModeHistory};
pub use stack::{ModeStack, TransitionKind};
