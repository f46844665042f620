//! Errors raised by the transition engine.

use crate::core::{Action, Mapping, State};
use thiserror::Error;

/// Errors raised by the configuration calls (`add_mapping`,
/// `set_initial_state`).
///
/// Both variants leave the machine untouched; a caller can recover by
/// creating a fresh instance.
#[derive(Debug, Error)]
pub enum ConfigError<S: State, A: Action> {
    /// A configuration call arrived after the machine left incubation.
    #[error("state machine is alive, {operation} is not allowed anymore")]
    Locked {
        /// Which configuration operation was rejected.
        operation: &'static str,
    },

    /// Two mappings share source and action kinds but disagree on the
    /// destination kind. The offending mapping was not inserted.
    #[error("conflict detected!\nexisting: {existing}\nyours: {candidate}")]
    Conflict {
        /// The mapping already in the table.
        existing: Mapping<S, A>,
        /// The rejected mapping.
        candidate: Mapping<S, A>,
    },
}

/// Errors raised by `handle_action`.
///
/// Every variant is fatal to the call, not to the machine: state is
/// unchanged and further actions may be handled.
#[derive(Debug, Error)]
pub enum TransitionError<S: State, A: Action> {
    /// The reserved birth signal was fed back into the machine.
    #[error("state machine can't be reborn, create a new instance")]
    Rebirth,

    /// No mapping matches the current state and the given action. This is
    /// the expected "no transition defined" case callers branch on.
    #[error("no mapping found for state ({}) using action [{}]", .state.name(), .action.name())]
    NoMapping {
        /// The state the machine was (and still is) in.
        state: S,
        /// The rejected action.
        action: A,
    },

    /// An action arrived before any initial state was set.
    #[error("state machine is still incubating, set an initial state first")]
    Incubating,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Gate {
        Open,
        Shut,
    }

    impl State for Gate {
        fn name(&self) -> &str {
            match self {
                Self::Open => "Open",
                Self::Shut => "Shut",
            }
        }
    }

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Pull {
        Lever,
    }

    impl Action for Pull {
        fn name(&self) -> &str {
            "Lever"
        }
    }

    #[test]
    fn locked_names_the_operation() {
        let err: ConfigError<Gate, Pull> = ConfigError::Locked {
            operation: "adding mappings",
        };
        assert_eq!(
            err.to_string(),
            "state machine is alive, adding mappings is not allowed anymore"
        );
    }

    #[test]
    fn conflict_reports_both_mappings() {
        let err: ConfigError<Gate, Pull> = ConfigError::Conflict {
            existing: Mapping::new(Gate::Open, Pull::Lever, Gate::Shut),
            candidate: Mapping::new(Gate::Open, Pull::Lever, Gate::Open),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("Mapping (Open) --[Lever]--> (Shut)"));
        assert!(rendered.contains("Mapping (Open) --[Lever]--> (Open)"));
    }

    #[test]
    fn no_mapping_names_state_and_action() {
        let err: TransitionError<Gate, Pull> = TransitionError::NoMapping {
            state: Gate::Shut,
            action: Pull::Lever,
        };
        assert_eq!(
            err.to_string(),
            "no mapping found for state (Shut) using action [Lever]"
        );
    }
}
