//! Core State trait for state machine states.
//!
//! States are identified by *kind*: two values of the same enum variant are
//! the same state as far as transition resolution is concerned, while the
//! concrete instance is what gets entered, exited, and reported as current.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::{Hash, Hasher};
use std::mem::{self, Discriminant};

/// Trait for state machine states.
///
/// States are the checkpoints a machine can occupy. Resolution compares
/// states by [`StateKind`] (the enum variant), never by value, so a state
/// may carry payload without affecting which mappings apply to it.
///
/// # Required Traits
///
/// - `Clone`: states are stored in mappings and in the transition log
/// - `PartialEq`: states must be comparable in tests and caller logic
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: transition records must be exportable
///
/// # Example
///
/// ```rust
/// use hatchling::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Water {
///     Empty,
///     Liquid { liters: u32 },
/// }
///
/// impl State for Water {
///     fn name(&self) -> &str {
///         match self {
///             Self::Empty => "Empty",
///             Self::Liquid { .. } => "Liquid",
///         }
///     }
///
///     fn on_enter(&self) {
///         println!("now in {}", self.name());
///     }
/// }
///
/// // Payload never affects identity:
/// let half = Water::Liquid { liters: 1 };
/// let full = Water::Liquid { liters: 2 };
/// assert_eq!(half.kind(), full.kind());
/// assert_ne!(half.kind(), Water::Empty.kind());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Invoked when the machine enters this state through a transition.
    ///
    /// Default implementation does nothing. There is no return contract;
    /// whatever happens in here is between the hook and its caller, and a
    /// panic propagates out of `handle_action` without rollback.
    fn on_enter(&self) {}

    /// Invoked when the machine leaves this state through a transition.
    ///
    /// Default implementation does nothing.
    fn on_exit(&self) {}

    /// The identity token used for mapping resolution and conflict
    /// detection.
    fn kind(&self) -> StateKind<Self>
    where
        Self: Sized,
    {
        StateKind::of(self)
    }
}

/// Stable identity token for a state's kind.
///
/// Wraps the enum discriminant of a state value. Tokens of the same variant
/// compare equal regardless of payload; tokens of different variants never
/// do. For non-enum state types every value shares one kind.
pub struct StateKind<S>(Discriminant<S>);

impl<S> StateKind<S> {
    /// Compute the kind token of a state value.
    pub fn of(state: &S) -> Self {
        StateKind(mem::discriminant(state))
    }
}

// Discriminant<S> is Copy/Eq/Hash/Debug for any S, but the derive machinery
// would demand those bounds on S itself, so the impls are written out.
impl<S> Clone for StateKind<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for StateKind<S> {}

impl<S> PartialEq for StateKind<S> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<S> Eq for StateKind<S> {}

impl<S> Hash for StateKind<S> {
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        self.0.hash(hasher);
    }
}

impl<S> Debug for StateKind<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("StateKind").field(&self.0).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Tank {
        Empty,
        Filled { liters: u32 },
        Sealed,
    }

    impl State for Tank {
        fn name(&self) -> &str {
            match self {
                Self::Empty => "Empty",
                Self::Filled { .. } => "Filled",
                Self::Sealed => "Sealed",
            }
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(Tank::Empty.name(), "Empty");
        assert_eq!(Tank::Filled { liters: 3 }.name(), "Filled");
        assert_eq!(Tank::Sealed.name(), "Sealed");
    }

    #[test]
    fn kinds_of_different_variants_differ() {
        assert_ne!(Tank::Empty.kind(), Tank::Sealed.kind());
        assert_ne!(Tank::Empty.kind(), Tank::Filled { liters: 0 }.kind());
    }

    #[test]
    fn kind_ignores_payload() {
        let a = Tank::Filled { liters: 1 };
        let b = Tank::Filled { liters: 99 };
        assert_ne!(a, b);
        assert_eq!(a.kind(), b.kind());
    }

    #[test]
    fn kind_is_copy_and_hashable() {
        use std::collections::HashSet;

        let kind = Tank::Empty.kind();
        let copied = kind;
        assert_eq!(kind, copied);

        let mut set = HashSet::new();
        set.insert(Tank::Empty.kind());
        set.insert(Tank::Empty.kind());
        set.insert(Tank::Sealed.kind());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn default_hooks_are_no_ops() {
        // Nothing observable should happen.
        Tank::Empty.on_enter();
        Tank::Empty.on_exit();
    }

    #[test]
    fn state_serializes_correctly() {
        let state = Tank::Filled { liters: 7 };
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: Tank = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
