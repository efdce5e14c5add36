//! Builder API for mode stack construction.
//!
//! This module provides a fluent builder and a macro for declaring mode
//! enums with minimal boilerplate.

pub mod error;
pub mod macros;
pub mod stack;

pub use error::BuildError;
pub use stack::ModeStackBuilder;
