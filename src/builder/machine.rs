//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::{Action, Mapping, State};
use crate::machine::StateMachine;

/// Builder for configuring a state machine with a fluent API.
///
/// The builder respects the engine's lifecycle: `build` applies every
/// mapping first and sets the initial state last, so the machine hatches
/// fully configured.
pub struct StateMachineBuilder<S: State, A: Action> {
    initial: Option<S>,
    mappings: Vec<Mapping<S, A>>,
}

impl<S: State, A: Action> StateMachineBuilder<S, A> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            mappings: Vec::new(),
        }
    }

    /// Set the state the machine hatches into (required).
    pub fn initial_state(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add a mapping from its three parts.
    pub fn mapping(mut self, source: S, action: A, destination: S) -> Self {
        self.mappings.push(Mapping::new(source, action, destination));
        self
    }

    /// Add a pre-built mapping.
    pub fn add_mapping(mut self, mapping: Mapping<S, A>) -> Self {
        self.mappings.push(mapping);
        self
    }

    /// Add multiple mappings at once, e.g. from the
    /// [`mappings!`](crate::mappings) macro.
    pub fn mappings(mut self, mappings: Vec<Mapping<S, A>>) -> Self {
        self.mappings.extend(mappings);
        self
    }

    /// Build the machine.
    ///
    /// Fails if required pieces are missing, or with a wrapped
    /// [`ConfigError`](crate::machine::ConfigError) if two declared
    /// mappings conflict.
    pub fn build(self) -> Result<StateMachine<S, A>, BuildError<S, A>> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.mappings.is_empty() {
            return Err(BuildError::NoMappings);
        }

        let machine = StateMachine::new();
        for mapping in self.mappings {
            machine.add_mapping(mapping)?;
        }
        machine.set_initial_state(initial)?;

        Ok(machine)
    }
}

impl<S: State, A: Action> Default for StateMachineBuilder<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::ConfigError;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Light {
        Red,
        Yellow,
        Green,
    }

    impl State for Light {
        fn name(&self) -> &str {
            match self {
                Self::Red => "Red",
                Self::Yellow => "Yellow",
                Self::Green => "Green",
            }
        }
    }

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Signal {
        Advance,
    }

    impl Action for Signal {
        fn name(&self) -> &str {
            "Advance"
        }
    }

    #[test]
    fn builder_validates_required_fields() {
        let result = StateMachineBuilder::<Light, Signal>::new().build();
        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn builder_requires_mappings() {
        let result = StateMachineBuilder::<Light, Signal>::new()
            .initial_state(Light::Red)
            .build();
        assert!(matches!(result, Err(BuildError::NoMappings)));
    }

    #[test]
    fn fluent_api_builds_a_hatched_machine() {
        let machine = StateMachineBuilder::new()
            .mapping(Light::Red, Signal::Advance, Light::Green)
            .mapping(Light::Green, Signal::Advance, Light::Yellow)
            .mapping(Light::Yellow, Signal::Advance, Light::Red)
            .initial_state(Light::Red)
            .build()
            .unwrap();

        assert!(!machine.is_incubating());
        assert_eq!(machine.current_state(), Some(Light::Red));
        assert_eq!(machine.mapping_count(), 3);
    }

    #[test]
    fn conflicting_declarations_surface_at_build() {
        let result = StateMachineBuilder::new()
            .mapping(Light::Red, Signal::Advance, Light::Green)
            .mapping(Light::Red, Signal::Advance, Light::Yellow)
            .initial_state(Light::Red)
            .build();

        assert!(matches!(
            result,
            Err(BuildError::Config(ConfigError::Conflict { .. }))
        ));
    }

    #[test]
    fn add_multiple_mappings() {
        let mappings = vec![
            Mapping::new(Light::Red, Signal::Advance, Light::Green),
            Mapping::new(Light::Green, Signal::Advance, Light::Red),
        ];

        let machine = StateMachineBuilder::new()
            .mappings(mappings)
            .initial_state(Light::Green)
            .build()
            .unwrap();

        machine.handle_action(Signal::Advance).unwrap();
        assert_eq!(machine.current_state(), Some(Light::Red));
    }
}
