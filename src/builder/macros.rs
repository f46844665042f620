//! Macros for ergonomic state machine declaration.

/// Generate a `State` implementation for a simple enum.
///
/// The generated `name()` returns the variant name; the enter/exit hooks
/// keep their default no-op bodies. Implement `State` by hand when a state
/// needs hooks or payload-aware naming.
///
/// # Example
///
/// ```
/// use hatchling::state_enum;
///
/// state_enum! {
///     pub enum Workflow {
///         Draft,
///         Review,
///         Published,
///     }
/// }
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Generate an `Action` implementation for a simple enum.
///
/// # Example
///
/// ```
/// use hatchling::action_enum;
///
/// action_enum! {
///     pub enum Verb {
///         Submit,
///         Approve,
///         Reject,
///     }
/// }
/// ```
#[macro_export]
macro_rules! action_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Action for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Declare a batch of mappings as `source, action => destination` rows.
///
/// Expands to a `Vec<Mapping>` suitable for
/// [`StateMachineBuilder::mappings`](crate::builder::StateMachineBuilder::mappings).
///
/// # Example
///
/// ```
/// use hatchling::{action_enum, mappings, state_enum};
///
/// state_enum! {
///     enum Water { Empty, Liquid }
/// }
///
/// action_enum! {
///     enum Tap { Fill, Drink }
/// }
///
/// let rules = mappings! {
///     Water::Empty, Tap::Fill => Water::Liquid;
///     Water::Liquid, Tap::Drink => Water::Empty;
/// };
/// assert_eq!(rules.len(), 2);
/// ```
#[macro_export]
macro_rules! mappings {
    ( $( $source:expr , $action:expr => $destination:expr );* $(;)? ) => {
        vec![ $( $crate::core::Mapping::new($source, $action, $destination) ),* ]
    };
}
