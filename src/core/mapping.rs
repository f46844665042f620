//! The transition rule triple.

use crate::core::{Action, ActionKind, State, StateKind};
use std::fmt;

/// A single transition rule: from a source state, a given action leads to
/// a destination state.
///
/// The source and action fields are *representatives*, only their kinds
/// participate in resolution and conflict detection, while the
/// destination is the concrete instance the machine will enter, payload
/// and all.
///
/// # Example
///
/// ```rust
/// use hatchling::core::Mapping;
/// use hatchling::{action_enum, state_enum};
///
/// state_enum! {
///     enum Door { Open, Closed }
/// }
///
/// action_enum! {
///     enum Push { Push }
/// }
///
/// let mapping = Mapping::new(Door::Open, Push::Push, Door::Closed);
/// assert_eq!(mapping.to_string(), "Mapping (Open) --[Push]--> (Closed)");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Mapping<S: State, A: Action> {
    source: S,
    action: A,
    destination: S,
}

impl<S: State, A: Action> Mapping<S, A> {
    /// Create a mapping from a source state, via an action, to a
    /// destination state.
    pub fn new(source: S, action: A, destination: S) -> Self {
        Self {
            source,
            action,
            destination,
        }
    }

    /// The representative source state.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The representative action.
    pub fn action(&self) -> &A {
        &self.action
    }

    /// The destination instance entered when this mapping fires.
    pub fn destination(&self) -> &S {
        &self.destination
    }

    /// Kind token of the source state.
    pub fn source_kind(&self) -> StateKind<S> {
        self.source.kind()
    }

    /// Kind token of the action.
    pub fn action_kind(&self) -> ActionKind<A> {
        self.action.kind()
    }

    /// Kind token of the destination state.
    pub fn destination_kind(&self) -> StateKind<S> {
        self.destination.kind()
    }

    /// Whether this mapping applies to the given source/action pair.
    pub fn matches(&self, source: StateKind<S>, action: ActionKind<A>) -> bool {
        self.source_kind() == source && self.action_kind() == action
    }
}

impl<S: State, A: Action> fmt::Display for Mapping<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Mapping ({}) --[{}]--> ({})",
            self.source.name(),
            self.action.name(),
            self.destination.name()
        )
    }
}
