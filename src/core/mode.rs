//! Optional Mode trait for named view modes.
//!
//! A stack accepts any `Clone + Debug` value as a mode. Implementing `Mode`
//! (by hand or through `mode_enum!`) adds a display name and an error
//! marker, exposed on the stack as `current_name` and `is_in_error`.

use std::borrow::Cow;
use std::fmt::Debug;

/// Trait for host-defined view modes.
///
/// All methods are pure - no side effects.
///
/// # Required Traits
///
/// - `Clone`: Modes are cloned into history snapshots
/// - `Debug`: Modes must be debuggable for diagnostics
/// - `Send` + `Sync`: Stacks can be moved to or shared with other threads
///
/// # Example
///
/// ```rust
/// use modestack::core::Mode;
///
/// #[derive(Clone, Debug)]
/// enum FormMode {
///     Empty,
///     Edit,
///     Saving,
///     Error,
/// }
///
/// impl Mode for FormMode {
///     fn name(&self) -> &str {
///         match self {
///             Self::Empty => "Empty",
///             Self::Edit => "Edit",
///             Self::Saving => "Saving",
///             Self::Error => "Error",
///         }
///     }
///
///     fn is_error(&self) -> bool {
///         matches!(self, Self::Error)
///     }
/// }
/// ```
pub trait Mode: Clone + Debug + Send + Sync {
    /// Get the mode's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this mode represents an error view.
    ///
    /// Error modes are usually entered with a replace transition so they
    /// never become a `back` target.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

impl Mode for String {
    fn name(&self) -> &str {
        self
    }
}

impl Mode for &'static str {
    fn name(&self) -> &str {
        self
    }
}

impl Mode for Cow<'static, str> {
    fn name(&self) -> &str {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestMode {
        Show,
        Edit,
        Confirm,
        Error,
    }

    impl Mode for TestMode {
        fn name(&self) -> &str {
            match self {
                Self::Show => "Show",
                Self::Edit => "Edit",
                Self::Confirm => "Confirm",
                Self::Error => "Error",
            }
        }

        fn is_error(&self) -> bool {
            matches!(self, Self::Error)
        }
    }

    #[test]
    fn mode_name_returns_correct_value() {
        assert_eq!(TestMode::Show.name(), "Show");
        assert_eq!(TestMode::Edit.name(), "Edit");
        assert_eq!(TestMode::Confirm.name(), "Confirm");
        assert_eq!(TestMode::Error.name(), "Error");
    }

    #[test]
    fn is_error_identifies_error_modes() {
        assert!(!TestMode::Show.is_error());
        assert!(!TestMode::Edit.is_error());
        assert!(!TestMode::Confirm.is_error());
        assert!(TestMode::Error.is_error());
    }

    #[test]
    fn string_modes_are_named_by_content() {
        assert_eq!("EMPTY".name(), "EMPTY");
        assert_eq!(String::from("EDIT").name(), "EDIT");
        assert_eq!(Cow::<'static, str>::Borrowed("SAVING").name(), "SAVING");
        assert!(!"ERROR".is_error());
    }

    #[test]
    fn mode_serializes_correctly() {
        let mode = TestMode::Confirm;
        let json = serde_json::to_string(&mode).unwrap();
        let deserialized: TestMode = serde_json::from_str(&json).unwrap();
        assert_eq!(mode, deserialized);
    }
}
