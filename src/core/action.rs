//! Core Action trait for state machine inputs.
//!
//! Actions are the triggers fed to a machine. Like states they are
//! identified by kind only; any payload an application attaches is opaque
//! to resolution.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::{Hash, Hasher};
use std::mem::{self, Discriminant};

/// Trait for state machine actions.
///
/// An action can move the machine to a different state, keep it in the
/// same state, or fail if no mapping exists from the current state.
///
/// # Example
///
/// ```rust
/// use hatchling::core::Action;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum WaterAction {
///     Heat,
///     Chill,
/// }
///
/// impl Action for WaterAction {
///     fn name(&self) -> &str {
///         match self {
///             Self::Heat => "Heat",
///             Self::Chill => "Chill",
///         }
///     }
/// }
///
/// assert_ne!(WaterAction::Heat.kind(), WaterAction::Chill.kind());
/// ```
pub trait Action:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the action's name for display/logging.
    fn name(&self) -> &str;

    /// The identity token used for mapping resolution.
    fn kind(&self) -> ActionKind<Self>
    where
        Self: Sized,
    {
        ActionKind::of(self)
    }
}

/// Stable identity token for an action's kind.
///
/// Same design as [`StateKind`](crate::core::StateKind): the enum variant
/// is the identity, payload is invisible.
pub struct ActionKind<A>(Discriminant<A>);

impl<A> ActionKind<A> {
    /// Compute the kind token of an action value.
    pub fn of(action: &A) -> Self {
        ActionKind(mem::discriminant(action))
    }
}

impl<A> Clone for ActionKind<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for ActionKind<A> {}

impl<A> PartialEq for ActionKind<A> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<A> Eq for ActionKind<A> {}

impl<A> Hash for ActionKind<A> {
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        self.0.hash(hasher);
    }
}

impl<A> Debug for ActionKind<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ActionKind").field(&self.0).finish()
    }
}
