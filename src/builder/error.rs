//! Build errors for the state machine builder.

use crate::core::{Action, State};
use crate::machine::ConfigError;
use thiserror::Error;

/// Errors that can occur when building a state machine.
#[derive(Debug, Error)]
pub enum BuildError<S: State, A: Action> {
    #[error("initial state not specified, call .initial_state(state) before .build()")]
    MissingInitialState,

    #[error("no mappings defined, add at least one mapping")]
    NoMappings,

    #[error(transparent)]
    Config(#[from] ConfigError<S, A>),
}
