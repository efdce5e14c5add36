//! Macros for declaring mode enums.

/// Generate a fieldless mode enum together with its `Mode` implementation.
///
/// The enum derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Debug`, `Serialize`
/// and `Deserialize`. `name()` returns the variant name. Variants listed
/// under `error:` report `is_error() == true`.
///
/// # Example
///
/// ```
/// use modestack::core::Mode;
/// use modestack::mode_enum;
///
/// mode_enum! {
///     pub enum AppointmentMode {
///         Empty,
///         Show,
///         Create,
///         Saving,
///         ErrorSave,
///     }
///     error: [ErrorSave]
/// }
///
/// assert_eq!(AppointmentMode::Create.name(), "Create");
/// assert!(AppointmentMode::ErrorSave.is_error());
/// ```
#[macro_export]
macro_rules! mode_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Mode for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }
    };
}
