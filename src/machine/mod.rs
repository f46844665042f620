//! The transition engine.
//!
//! A [`StateMachine`] is born incubating: mappings may be added and an
//! initial state set. Setting the initial state hatches it: from then on
//! configuration is locked and actions drive transitions. Every operation
//! runs under one instance-scoped mutex, so mapping insertion, phase
//! checks, and transitions are atomic with respect to each other.

mod error;
mod table;

pub use error::{ConfigError, TransitionError};
pub use table::MappingTable;

use crate::core::{Action, Mapping, State, TransitionLog, TransitionRecord};
use chrono::Utc;
use log::{debug, trace};
use parking_lot::Mutex;

/// An input fed to [`StateMachine::handle_action`]: either the reserved
/// birth signal or an application action.
///
/// `Stimulus::Birth` is what `last_action` reports before any transition
/// has committed. Feeding it back into the machine is a protocol violation
/// ([`TransitionError::Rebirth`]). Ordinary calls never spell the wrapper
/// out, since a bare action converts via `From`.
#[derive(Clone, Debug, PartialEq)]
pub enum Stimulus<A> {
    /// The signal that brought the machine to life. Reserved.
    Birth,
    /// An application action.
    Action(A),
}

impl<A> Stimulus<A> {
    /// Whether this is the reserved birth signal.
    pub fn is_birth(&self) -> bool {
        matches!(self, Stimulus::Birth)
    }

    /// The application action, if this is one.
    pub fn action(&self) -> Option<&A> {
        match self {
            Stimulus::Birth => None,
            Stimulus::Action(action) => Some(action),
        }
    }
}

impl<A: Action> From<A> for Stimulus<A> {
    fn from(action: A) -> Self {
        Stimulus::Action(action)
    }
}

/// Engine lifecycle. `Incubating` is the built-in "no state yet" sentinel;
/// once alive there is no way back.
#[derive(Debug)]
enum Phase<S: State, A: Action> {
    Incubating,
    Alive { current: S, last: Stimulus<A> },
}

#[derive(Debug)]
struct Inner<S: State, A: Action> {
    table: MappingTable<S, A>,
    phase: Phase<S, A>,
    log: TransitionLog<S, A>,
}

/// A finite state machine with a two-phase lifecycle.
///
/// Configuration (adding mappings, setting the initial state) is only
/// possible while the machine incubates. The first call to
/// [`set_initial_state`](StateMachine::set_initial_state) hatches it;
/// afterwards only [`handle_action`](StateMachine::handle_action) and the
/// read accessors are useful.
///
/// The machine is `Send + Sync`; callers may drive it from multiple
/// threads and each operation executes atomically under the instance lock.
///
/// # Example
///
/// ```rust
/// use hatchling::machine::{StateMachine, TransitionError};
/// use hatchling::core::Mapping;
/// use hatchling::{action_enum, state_enum};
///
/// state_enum! {
///     enum Door { Open, Closed }
/// }
///
/// action_enum! {
///     enum Hand { Push, Pull }
/// }
///
/// let machine = StateMachine::new();
/// machine.add_mapping(Mapping::new(Door::Open, Hand::Push, Door::Closed))?;
/// machine.add_mapping(Mapping::new(Door::Closed, Hand::Pull, Door::Open))?;
/// machine.set_initial_state(Door::Open)?;
///
/// machine.handle_action(Hand::Push)?;
/// assert_eq!(machine.current_state(), Some(Door::Closed));
///
/// // Pushing a closed door is not mapped:
/// let err = machine.handle_action(Hand::Push).unwrap_err();
/// assert!(matches!(err, TransitionError::NoMapping { .. }));
/// assert_eq!(machine.current_state(), Some(Door::Closed));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct StateMachine<S: State, A: Action> {
    inner: Mutex<Inner<S, A>>,
}

impl<S: State, A: Action> StateMachine<S, A> {
    /// Create a fresh machine in the incubating phase, with no mappings,
    /// no current state, and the birth signal as its last action.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                table: MappingTable::new(),
                phase: Phase::Incubating,
                log: TransitionLog::new(),
            }),
        }
    }

    /// Add a transition mapping.
    ///
    /// Only valid while incubating. Conflicting mappings (same source and
    /// action kinds, different destination kind) are rejected; re-adding
    /// an identical mapping is a no-op.
    pub fn add_mapping(&self, mapping: Mapping<S, A>) -> Result<(), ConfigError<S, A>> {
        let mut inner = self.inner.lock();
        if !matches!(inner.phase, Phase::Incubating) {
            return Err(ConfigError::Locked {
                operation: "adding mappings",
            });
        }
        trace!("registering {mapping}");
        inner.table.insert(mapping)
    }

    /// Set the state the machine hatches into.
    ///
    /// Only valid while incubating, and itself the end of incubation: once
    /// a current state exists, both configuration calls are rejected for
    /// good. The state's `on_enter` hook is *not* invoked (the machine
    /// begins life already in this state, without an entry transition)
    /// and the last action resets to [`Stimulus::Birth`].
    pub fn set_initial_state(&self, state: S) -> Result<(), ConfigError<S, A>> {
        let mut inner = self.inner.lock();
        if !matches!(inner.phase, Phase::Incubating) {
            return Err(ConfigError::Locked {
                operation: "setting the initial state",
            });
        }
        trace!("hatching into ({})", state.name());
        inner.phase = Phase::Alive {
            current: state,
            last: Stimulus::Birth,
        };
        Ok(())
    }

    /// Feed an action to the machine and execute the mapped transition.
    ///
    /// On success the observable `(current_state, last_action)` pair moves
    /// to the mapping's destination and the fed action; hooks fire in
    /// fixed order (current's `on_exit`, then destination's `on_enter`).
    /// A panic inside a hook propagates to the caller with no rollback of
    /// whatever already committed; the machine itself stays usable.
    ///
    /// On failure the machine is unchanged. See [`TransitionError`] for
    /// the cases.
    pub fn handle_action(
        &self,
        stimulus: impl Into<Stimulus<A>>,
    ) -> Result<(), TransitionError<S, A>> {
        let action = match stimulus.into() {
            Stimulus::Birth => return Err(TransitionError::Rebirth),
            Stimulus::Action(action) => action,
        };

        let mut inner = self.inner.lock();
        let Inner { table, phase, log } = &mut *inner;
        let Phase::Alive { current, last } = phase else {
            return Err(TransitionError::Incubating);
        };

        let Some(mapping) = table.find(current.kind(), action.kind()) else {
            debug!(
                "no mapping for ({}) using [{}]",
                current.name(),
                action.name()
            );
            return Err(TransitionError::NoMapping {
                state: current.clone(),
                action,
            });
        };
        let destination = mapping.destination().clone();

        // Fixed order: exit, last action, enter, commit.
        current.on_exit();
        *last = Stimulus::Action(action.clone());
        destination.on_enter();
        let from = std::mem::replace(current, destination);

        debug!("({}) --[{}]--> ({})", from.name(), action.name(), current.name());
        *log = log.record(TransitionRecord {
            from,
            action,
            to: current.clone(),
            timestamp: Utc::now(),
        });
        Ok(())
    }

    /// The state the machine currently occupies, or `None` while it still
    /// incubates. Taken under the instance lock.
    pub fn current_state(&self) -> Option<S> {
        match &self.inner.lock().phase {
            Phase::Incubating => None,
            Phase::Alive { current, .. } => Some(current.clone()),
        }
    }

    /// The last action that committed a transition, or
    /// [`Stimulus::Birth`] if none has. Taken under the instance lock.
    pub fn last_action(&self) -> Stimulus<A> {
        match &self.inner.lock().phase {
            Phase::Incubating => Stimulus::Birth,
            Phase::Alive { last, .. } => last.clone(),
        }
    }

    /// Whether the machine is still in the configuration phase.
    pub fn is_incubating(&self) -> bool {
        matches!(self.inner.lock().phase, Phase::Incubating)
    }

    /// Number of registered mappings.
    pub fn mapping_count(&self) -> usize {
        self.inner.lock().table.len()
    }

    /// Snapshot of the transition log so far.
    pub fn history(&self) -> TransitionLog<S, A> {
        self.inner.lock().log.clone()
    }
}

impl<S: State, A: Action> Default for StateMachine<S, A> {
    fn default() -> Self {
        Self::new()
    }
}
