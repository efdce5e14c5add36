//! The mutable shell around the pure history core.
//!
//! `ModeStack` owns a `ModeHistory` and exposes the three navigation
//! operations: read the current mode, transition forward, go back.
//! Every operation is total; none of them return a `Result`.

mod machine;

pub use machine::{ModeStack, TransitionKind};
